//! CLI command implementations
//!
//! This module contains implementations of the commands supported by
//! the CLI application using the Command pattern.

pub mod command_traits;
pub mod parse_command;
pub mod distance_command;
pub mod bbox_command;

pub use command_traits::{Command, CommandFactory};
pub use parse_command::ParseCommand;
pub use distance_command::DistanceCommand;
pub use bbox_command::BboxCommand;

use clap::ArgMatches;

use crate::errors::GeoResult;
use crate::geo::DistanceUnit;
use crate::utils::logger::Logger;

/// Factory for creating command instances based on CLI arguments
///
/// This factory examines the command-line arguments and creates
/// the appropriate command instance for execution.
pub struct RadarkitCommandFactory;

impl RadarkitCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        RadarkitCommandFactory
    }
}

impl Default for RadarkitCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CommandFactory<'a> for RadarkitCommandFactory {
    fn create_command(&self, args: &ArgMatches, logger: &'a Logger) -> GeoResult<Box<dyn Command + 'a>> {
        // Determine which command to run based on args
        if args.contains_id("to") {
            Ok(Box::new(DistanceCommand::new(args, logger)?))
        } else if args.contains_id("radius") {
            Ok(Box::new(BboxCommand::new(args, logger)?))
        } else {
            // Default to the parse/echo command
            Ok(Box::new(ParseCommand::new(args, logger)?))
        }
    }
}

/// Read the --units argument into a DistanceUnit
pub(crate) fn parse_unit(args: &ArgMatches) -> GeoResult<DistanceUnit> {
    match args.get_one::<String>("units") {
        Some(s) => s.parse(),
        None => Ok(DistanceUnit::Miles),
    }
}
