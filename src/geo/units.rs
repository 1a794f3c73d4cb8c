//! Distance unit handling
//!
//! The unit selects the sphere radius constant used by every distance
//! calculation, so a single enum value keeps a whole call chain consistent.

use std::fmt;
use std::str::FromStr;

use crate::errors::GeoError;
use crate::geo::constants::earth;

/// Unit system for distances and radii
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistanceUnit {
    /// Statute miles
    Miles,
    /// Kilometers
    Kilometers,
}

impl DistanceUnit {
    /// Mean earth radius for this unit
    pub fn earth_radius(&self) -> f64 {
        match self {
            DistanceUnit::Miles => earth::RADIUS_MILES,
            DistanceUnit::Kilometers => earth::RADIUS_KM,
        }
    }

    /// Short unit suffix for display ("mi" or "km")
    pub fn suffix(&self) -> &'static str {
        match self {
            DistanceUnit::Miles => "mi",
            DistanceUnit::Kilometers => "km",
        }
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

impl FromStr for DistanceUnit {
    type Err = GeoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mi" | "mile" | "miles" => Ok(DistanceUnit::Miles),
            "km" | "kilometer" | "kilometers" => Ok(DistanceUnit::Kilometers),
            other => Err(GeoError::GenericError(format!(
                "Unknown distance unit '{}' (expected miles or km)", other))),
        }
    }
}
