use clap::{Arg, Command as ClapCommand, ArgAction};
use std::process;
use log::error;

use radarkit::utils::logger::Logger;
use radarkit::commands::{CommandFactory, RadarkitCommandFactory};

fn main() {
    let matches = ClapCommand::new("RadarKit")
        .version("0.1")
        .about("Geodesy core for an aircraft-tracking radar display")
        .arg(
            Arg::new("coordinate")
                .help("Coordinate text, DMS (48°51'30\"N 2°17'40\"E) or decimal (48.8583, 2.2944)")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("to")
                .short('t')
                .long("to")
                .help("Second coordinate; computes the great-circle distance to it")
                .value_name("COORD")
                .required(false),
        )
        .arg(
            Arg::new("radius")
                .short('r')
                .long("radius")
                .help("Search radius; derives the bounding box around the coordinate")
                .value_name("DISTANCE")
                .required(false),
        )
        .arg(
            Arg::new("units")
                .short('u')
                .long("units")
                .help("Distance unit (miles or km)")
                .value_name("UNIT")
                .default_value("miles")
                .required(false),
        )
        .arg(
            Arg::new("dms")
                .long("dms")
                .help("Render the parsed coordinate in DMS notation")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let log_file = "radarkit.log";
    let logger = match Logger::new(log_file) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Error initializing logger: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = Logger::init_global_logger("radarkit-global.log") {
        eprintln!("Error setting up global logger: {}", e);
        process::exit(1);
    }

    let factory = RadarkitCommandFactory::new();

    let command_result = factory.create_command(&matches, &logger);
    match command_result {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}
