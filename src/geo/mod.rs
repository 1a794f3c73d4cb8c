//! Geodesy core
//!
//! This module provides the coordinate value types and the
//! spherical-earth math: great-circle distance, per-degree distance
//! approximations and bounding-box derivation.

mod bbox;
mod coordinate;
mod units;

pub mod constants;
pub mod distance;

#[cfg(test)]
mod tests;

// Re-export key types
pub use self::bbox::BoundedBox;
pub use self::coordinate::Coordinate;
pub use self::units::DistanceUnit;
