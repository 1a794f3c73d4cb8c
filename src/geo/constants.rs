//! Physical constants for spherical-earth calculations
//!
//! This module defines the mean-sphere earth radii used throughout the
//! distance code, replacing magic numbers with descriptive names. All
//! values treat the earth as a perfect sphere, which is acceptable for a
//! radar-display use case but not for precision geodesy.

/// Mean earth radius constants
pub mod earth {
    /// Mean earth radius in statute miles
    pub const RADIUS_MILES: f64 = 3959.0;

    /// Mean earth radius in kilometers
    pub const RADIUS_KM: f64 = 6371.0;
}

/// Valid coordinate ranges in decimal degrees
pub mod limits {
    /// Minimum latitude
    pub const LAT_MIN: f64 = -90.0;
    /// Maximum latitude
    pub const LAT_MAX: f64 = 90.0;
    /// Minimum longitude
    pub const LON_MIN: f64 = -180.0;
    /// Maximum longitude
    pub const LON_MAX: f64 = 180.0;
}
