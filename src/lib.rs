pub mod errors;
pub mod geo;
pub mod parser;
pub mod utils;
pub mod commands;
pub mod api;

pub use crate::api::RadarKit;

pub use errors::{GeoError, GeoResult};
pub use geo::{BoundedBox, Coordinate, DistanceUnit};
pub use geo::distance::{bounding_box, distance_between, distance_per_degree_latitude, distance_per_degree_longitude};
pub use parser::{parse_coordinate, parse_decimal, parse_dms};
