//! Observer location and rise/set result types.

/// Geographic location of the observer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observer {
    /// Geodetic latitude in degrees, north positive.
    pub latitude_deg: f64,
    /// Longitude in degrees, east positive.
    pub longitude_deg: f64,
}

impl Observer {
    pub const fn new(latitude_deg: f64, longitude_deg: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
        }
    }

    pub fn latitude_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }

    pub fn longitude_rad(&self) -> f64 {
        self.longitude_deg.to_radians()
    }
}

/// Horizon-crossing times within one UT day, as UTC Julian dates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiseSet {
    pub rise_jd: f64,
    pub set_jd: f64,
}

/// The body a crossing query refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Body {
    Sun,
    Moon,
}

impl std::fmt::Display for Body {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sun => write!(f, "sun"),
            Self::Moon => write!(f, "moon"),
        }
    }
}

/// Which side of the horizon a circumpolar body stays on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    AlwaysAbove,
    AlwaysBelow,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AlwaysAbove => write!(f, "above"),
            Self::AlwaysBelow => write!(f, "below"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn observer_radians() {
        let obs = Observer::new(31.675, -110.952);
        assert!((obs.latitude_rad() - 0.552834).abs() < 1e-5);
        assert!(obs.longitude_rad() < 0.0);
    }

    #[test]
    fn direction_wording() {
        assert_eq!(Direction::AlwaysAbove.to_string(), "above");
        assert_eq!(Body::Moon.to_string(), "moon");
    }
}
