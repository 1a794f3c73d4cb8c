//! Spherical-earth distance calculations
//!
//! Great-circle distance via the haversine formula plus the linear
//! distance-per-degree approximations used to size bounding boxes. The
//! earth is treated as a perfect sphere of mean radius, which is accurate
//! enough for a radar display but not for precision geodesy.

use crate::geo::bbox::BoundedBox;
use crate::geo::coordinate::Coordinate;
use crate::geo::units::DistanceUnit;

/// Great-circle distance between two coordinates
///
/// Uses the haversine formula:
/// `a = sin²(Δφ/2) + cos(φ1)·cos(φ2)·sin²(Δλ/2)`, `d = 2·R·asin(√a)`.
/// The `asin(√a)` form stays numerically stable for antipodal points
/// where the `acos` variant loses precision.
///
/// Any finite input produces a finite, non-negative result. Out-of-range
/// latitudes or longitudes are not rejected here; they yield a
/// geometrically meaningless answer, so callers must validate ranges
/// beforehand.
///
/// # Arguments
/// * `point1` - First coordinate
/// * `point2` - Second coordinate
/// * `unit` - Unit selecting the sphere radius
///
/// # Returns
/// Distance in the requested unit
pub fn distance_between(point1: Coordinate, point2: Coordinate, unit: DistanceUnit) -> f64 {
    let lat1 = point1.latitude.to_radians();
    let lon1 = point1.longitude.to_radians();
    let lat2 = point2.latitude.to_radians();
    let lon2 = point2.longitude.to_radians();

    let delta_phi = lat2 - lat1;
    let delta_lambda = lon2 - lon1;

    let hav = |x: f64| (x / 2.0).sin().powi(2);

    // Floating-point noise can push the radicand a hair past 1.0 for
    // antipodal inputs, which would make asin return NaN.
    let hav_theta = (hav(delta_phi) + lat1.cos() * lat2.cos() * hav(delta_lambda)).min(1.0);

    2.0 * unit.earth_radius() * hav_theta.sqrt().asin()
}

/// Length of one degree of latitude
///
/// Meridian arcs are equal-length on a sphere, so this is the constant
/// `R · (π/180)` regardless of where on the meridian it is measured.
pub fn distance_per_degree_latitude(unit: DistanceUnit) -> f64 {
    unit.earth_radius() * 1.0_f64.to_radians()
}

/// Length of one degree of longitude at a given latitude
///
/// Parallels shrink toward the poles: `R · (π/180) · cos(φ)`. The result
/// is maximal at the equator and approaches zero at ±90°.
///
/// # Arguments
/// * `latitude_deg` - Latitude of the parallel in decimal degrees
/// * `unit` - Unit selecting the sphere radius
pub fn distance_per_degree_longitude(latitude_deg: f64, unit: DistanceUnit) -> f64 {
    unit.earth_radius() * 1.0_f64.to_radians() * latitude_deg.to_radians().cos()
}

/// Degree-space bounding box for a radius around a center
///
/// Convenience wrapper over [`BoundedBox::from_center_radius`]; see that
/// function for the derivation and the near-pole clamping behavior.
pub fn bounding_box(center: Coordinate, radius: f64, unit: DistanceUnit) -> BoundedBox {
    BoundedBox::from_center_radius(center, radius, unit)
}
