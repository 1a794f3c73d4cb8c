//! Coordinate text parsing
//!
//! Turns free-form coordinate text (DMS or plain decimal) into
//! [`Coordinate`](crate::geo::Coordinate) values for the geodesy core.

mod dms;

#[cfg(test)]
mod tests;

pub use self::dms::{parse_coordinate, parse_decimal, parse_dms};
