//! Bounding box command
//!
//! Derives the degree-space rectangle for a search radius around the
//! positional coordinate, the shape used to pre-filter bounded-area
//! queries against a positional data feed.

use clap::ArgMatches;
use log::{debug, info};

use crate::commands::command_traits::Command;
use crate::commands::parse_unit;
use crate::errors::{GeoError, GeoResult};
use crate::geo::{BoundedBox, DistanceUnit};
use crate::parser::parse_coordinate;
use crate::utils::logger::Logger;

/// Command for deriving a bounding box around a coordinate
pub struct BboxCommand<'a> {
    /// Center coordinate text
    center: String,
    /// Search radius in `unit`
    radius: f64,
    /// Unit of the radius
    unit: DistanceUnit,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> BboxCommand<'a> {
    /// Create a new bounding box command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> GeoResult<Self> {
        let center = args.get_one::<String>("coordinate")
            .ok_or_else(|| GeoError::GenericError("Missing coordinate".to_string()))?
            .clone();
        let radius_str = args.get_one::<String>("radius")
            .ok_or_else(|| GeoError::GenericError("Missing --radius value".to_string()))?;
        let radius = radius_str.parse::<f64>()
            .map_err(|_| GeoError::InvalidNumber(radius_str.clone()))?;
        if radius < 0.0 {
            return Err(GeoError::GenericError(format!("Radius must be non-negative, got {}", radius)));
        }
        let unit = parse_unit(args)?;

        Ok(BboxCommand { center, radius, unit, logger })
    }
}

impl<'a> Command for BboxCommand<'a> {
    fn execute(&self) -> GeoResult<()> {
        let center = parse_coordinate(&self.center)?;
        debug!("Bounding box: {} {} around {}", self.radius, self.unit, center);

        let bbox = BoundedBox::from_center_radius(center, self.radius, self.unit);

        self.logger.log(&format!("Bounding box {} {} around {}: {}",
                                 self.radius, self.unit, center, bbox))?;
        info!("{}", bbox);
        Ok(())
    }
}
