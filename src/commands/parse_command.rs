//! Coordinate parsing command
//!
//! The default CLI operation: parse the input text and echo the
//! coordinate in decimal degrees (or DMS with --dms).

use clap::ArgMatches;
use log::{debug, info};

use crate::commands::command_traits::Command;
use crate::errors::{GeoError, GeoResult};
use crate::parser::parse_coordinate;
use crate::utils::logger::Logger;

/// Command for parsing and echoing a coordinate
pub struct ParseCommand<'a> {
    /// Raw coordinate text from the CLI
    coordinate: String,
    /// Whether to render the result in DMS notation
    dms: bool,
    /// Whether to enable verbose output
    verbose: bool,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> ParseCommand<'a> {
    /// Create a new parse command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> GeoResult<Self> {
        let coordinate = args.get_one::<String>("coordinate")
            .ok_or_else(|| GeoError::GenericError("Missing coordinate".to_string()))?
            .clone();

        let dms = args.get_flag("dms");
        let verbose = args.get_flag("verbose");

        Ok(ParseCommand { coordinate, dms, verbose, logger })
    }
}

impl<'a> Command for ParseCommand<'a> {
    fn execute(&self) -> GeoResult<()> {
        debug!("Parsing coordinate text '{}'", self.coordinate);
        let coord = parse_coordinate(&self.coordinate)?;

        self.logger.log(&format!("Parsed '{}' -> {}", self.coordinate, coord))?;

        if self.verbose {
            info!("{} ({})", coord, coord.to_dms_string());
        } else if self.dms {
            info!("{}", coord.to_dms_string());
        } else {
            info!("{}", coord);
        }
        Ok(())
    }
}
