//! Great-circle distance command
//!
//! Computes the haversine distance between the positional coordinate
//! and the --to coordinate.

use clap::ArgMatches;
use log::{debug, info};

use crate::commands::command_traits::Command;
use crate::commands::parse_unit;
use crate::errors::{GeoError, GeoResult};
use crate::geo::DistanceUnit;
use crate::geo::distance::distance_between;
use crate::parser::parse_coordinate;
use crate::utils::logger::Logger;

/// Command for computing the distance between two coordinates
pub struct DistanceCommand<'a> {
    /// First coordinate text
    from: String,
    /// Second coordinate text
    to: String,
    /// Unit for the result
    unit: DistanceUnit,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> DistanceCommand<'a> {
    /// Create a new distance command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> GeoResult<Self> {
        let from = args.get_one::<String>("coordinate")
            .ok_or_else(|| GeoError::GenericError("Missing coordinate".to_string()))?
            .clone();
        let to = args.get_one::<String>("to")
            .ok_or_else(|| GeoError::GenericError("Missing --to coordinate".to_string()))?
            .clone();
        let unit = parse_unit(args)?;

        Ok(DistanceCommand { from, to, unit, logger })
    }
}

impl<'a> Command for DistanceCommand<'a> {
    fn execute(&self) -> GeoResult<()> {
        let p1 = parse_coordinate(&self.from)?;
        let p2 = parse_coordinate(&self.to)?;
        debug!("Distance between {} and {}", p1, p2);

        let dist = distance_between(p1, p2, self.unit);

        self.logger.log(&format!("Distance {} -> {}: {:.3} {}", p1, p2, dist, self.unit))?;
        info!("{:.3} {}", dist, self.unit);
        Ok(())
    }
}
