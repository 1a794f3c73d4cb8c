//! Bounding box derivation for area queries
//!
//! A circular search radius around a coordinate is converted into an
//! axis-aligned degree-space rectangle, usable as a cheap pre-filter for
//! a bounded-area query against a positional data feed. Such feeds charge
//! by queried area, so the box is kept as tight as the linear per-degree
//! approximation allows.

use log::debug;

use crate::geo::constants::limits;
use crate::geo::coordinate::Coordinate;
use crate::geo::distance::{distance_per_degree_latitude, distance_per_degree_longitude};
use crate::geo::units::DistanceUnit;

/// An axis-aligned latitude/longitude rectangle
///
/// Approximates a circle of a given radius around a center coordinate.
/// Derived once, never mutated afterwards.
#[derive(Debug, Clone, Copy)]
pub struct BoundedBox {
    /// Southern edge in decimal degrees
    pub lat_min: f64,
    /// Northern edge in decimal degrees
    pub lat_max: f64,
    /// Western edge in decimal degrees
    pub lon_min: f64,
    /// Eastern edge in decimal degrees
    pub lon_max: f64,
    /// Area of the rectangle in square degrees
    pub area_deg_sq: f64,
}

impl BoundedBox {
    /// Derive the bounding box for a radius around a center coordinate
    ///
    /// The radius is converted to degree offsets through the per-degree
    /// distances, so the longitude span widens toward the poles where
    /// parallels shrink. Near the poles the longitude offset diverges
    /// (division by a near-zero parallel length); the box then degenerates
    /// to span the full longitude range. Both axes are clamped to the
    /// valid coordinate ranges, and the area reflects the clamped extents.
    /// This is expected approximation behavior, not an error.
    ///
    /// # Arguments
    /// * `center` - Center of the search circle
    /// * `radius` - Search radius, in `unit`
    /// * `unit` - Unit of the radius
    pub fn from_center_radius(center: Coordinate, radius: f64, unit: DistanceUnit) -> Self {
        let lat_delta_deg = radius / distance_per_degree_latitude(unit);
        let lon_delta_deg = radius / distance_per_degree_longitude(center.latitude, unit);

        debug!("Bounding box around {}: lat delta {} deg, lon delta {} deg",
               center, lat_delta_deg, lon_delta_deg);

        let lat_min = (center.latitude - lat_delta_deg).max(limits::LAT_MIN);
        let lat_max = (center.latitude + lat_delta_deg).min(limits::LAT_MAX);
        let lon_min = (center.longitude - lon_delta_deg).max(limits::LON_MIN);
        let lon_max = (center.longitude + lon_delta_deg).min(limits::LON_MAX);

        let area_deg_sq = (lat_max - lat_min) * (lon_max - lon_min);

        BoundedBox { lat_min, lat_max, lon_min, lon_max, area_deg_sq }
    }

    /// Latitude span of the box in degrees
    pub fn height(&self) -> f64 {
        self.lat_max - self.lat_min
    }

    /// Longitude span of the box in degrees
    pub fn width(&self) -> f64 {
        self.lon_max - self.lon_min
    }

    /// Check whether a coordinate lies inside this box
    pub fn contains(&self, point: &Coordinate) -> bool {
        point.latitude >= self.lat_min && point.latitude <= self.lat_max &&
            point.longitude >= self.lon_min && point.longitude <= self.lon_max
    }
}

impl std::fmt::Display for BoundedBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:.6}, {:.6}] x [{:.6}, {:.6}] ({:.6} deg^2)",
               self.lat_min, self.lat_max, self.lon_min, self.lon_max, self.area_deg_sq)
    }
}
