//! Solar/lunar ephemeris provider for the vesper night report.
//!
//! This crate provides:
//! - The [`Ephemeris`] trait, the provider contract the report
//!   calculators are written against
//! - [`AstroEphemeris`], an implementation on top of the `astro`
//!   crate's geocentric position series
//! - The iterative horizon-crossing solver shared by Sun and Moon
//!   queries

pub mod engine;
pub mod error;
pub mod position;
pub mod provider;
pub mod riseset;
pub mod types;

pub use engine::{AstroEphemeris, LUNAR_STANDARD_HORIZON_DEG};
pub use error::EphemerisError;
pub use provider::Ephemeris;
pub use types::{Body, Direction, Observer, RiseSet};
