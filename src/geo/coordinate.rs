//! Coordinate value type
//!
//! A position on the earth's surface in decimal degrees. Coordinates are
//! plain copyable values with no identity beyond their fields; everything
//! in the distance code takes them by value.

use std::fmt;

use crate::errors::{GeoError, GeoResult};
use crate::geo::constants::limits;

/// A latitude/longitude pair in decimal degrees
///
/// Negative latitude is south of the equator, negative longitude west of
/// the prime meridian.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    /// Latitude in decimal degrees, nominally within [-90, 90]
    pub latitude: f64,
    /// Longitude in decimal degrees, nominally within [-180, 180]
    pub longitude: f64,
}

impl Coordinate {
    /// Create a new coordinate from decimal degrees
    ///
    /// No range validation is performed; out-of-range values produce
    /// geometrically meaningless but finite distance results. Use
    /// [`Coordinate::checked`] when the input is untrusted.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Coordinate { latitude, longitude }
    }

    /// Create a coordinate, validating the latitude/longitude ranges
    ///
    /// # Returns
    /// The coordinate, or an `OutOfRange` error when either angle falls
    /// outside [-90, 90] / [-180, 180]
    pub fn checked(latitude: f64, longitude: f64) -> GeoResult<Self> {
        if !(limits::LAT_MIN..=limits::LAT_MAX).contains(&latitude) {
            return Err(GeoError::OutOfRange { what: "latitude", value: latitude });
        }
        if !(limits::LON_MIN..=limits::LON_MAX).contains(&longitude) {
            return Err(GeoError::OutOfRange { what: "longitude", value: longitude });
        }
        Ok(Coordinate { latitude, longitude })
    }

    /// Render this coordinate in DMS notation
    ///
    /// Produces the symbol form accepted by the parser, e.g.
    /// `48°51'30.00"N 2°17'40.00"E`. Seconds carry two decimal places,
    /// which keeps a parse round-trip within the parser's 1e-4 degree
    /// rounding.
    pub fn to_dms_string(&self) -> String {
        format!("{} {}",
                dms_axis(self.latitude, 'N', 'S'),
                dms_axis(self.longitude, 'E', 'W'))
    }
}

/// Render one angle as a DMS token
///
/// Works in integer centiseconds so that rounding carries cleanly through
/// seconds and minutes (59.999° must not render as 59°60'0.00").
fn dms_axis(value: f64, positive: char, negative: char) -> String {
    let hemisphere = if value < 0.0 { negative } else { positive };
    let mut centisec = (value.abs() * 360_000.0).round() as u64;

    let degrees = centisec / 360_000;
    centisec %= 360_000;
    let minutes = centisec / 6_000;
    centisec %= 6_000;
    let seconds = centisec as f64 / 100.0;

    format!("{}\u{00B0}{}'{:.2}\"{}", degrees, minutes, seconds, hemisphere)
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.latitude, self.longitude)
    }
}
