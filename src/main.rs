#[macro_use] extern crate serde_derive;
#[macro_use] extern crate log;

mod config;
mod error;
mod command;

use self::config::*;
use self::error::*;
use self::command::*;

use clap::{App, Arg, ArgMatches, SubCommand};

use std::fs;
use std::io;
use std::io::{Read};
use std::str::{FromStr};

fn main() {
    env_logger::init();

    // Fetch the parameters
    let input_arg = || Arg::with_name("INPUT")
        .help("The file to read from (standard input is used if no file is specified)")
        .required(false)
        .index(1);

    let params = App::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .author("Andrew Hunter")
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .arg(Arg::with_name("config")
            .long("config")
            .short("c")
            .takes_value(true)
            .help("Reads settings from a JSON configuration file"))
        .arg(Arg::with_name("factor")
            .long("factor")
            .short("f")
            .takes_value(true)
            .help("The factor used to quantize coordinates in the encoded polyline (default 1e5)"))
        .arg(Arg::with_name("haversine")
            .long("haversine")
            .help("Uses the haversine formula instead of the spherical law of cosines for distances over the earth"))
        .subcommand(SubCommand::with_name("encode")
            .about("Reads a JSON list of [x, y] points and writes them as an encoded polyline")
            .arg(input_arg()))
        .subcommand(SubCommand::with_name("decode")
            .about("Reads an encoded polyline and writes its points as a JSON list")
            .arg(input_arg()))
        .subcommand(SubCommand::with_name("reduce")
            .about("Simplifies an encoded polyline, removing points that are closer than the threshold to the simplified path")
            .arg(Arg::with_name("threshold")
                .long("threshold")
                .short("t")
                .takes_value(true)
                .help("The maximum distance a removed point can be from the simplified path"))
            .arg(input_arg()))
        .subcommand(SubCommand::with_name("stats")
            .about("Shows the number of points, length and bounds of an encoded polyline")
            .arg(input_arg()))
        .subcommand(SubCommand::with_name("off")
            .about("Writes an encoded polyline as an OFF mesh")
            .arg(input_arg()))
        .get_matches();

    if let Err(err) = run(&params) {
        error!("{}", err);
        eprintln!("flo_path: {}", err);

        std::process::exit(1);
    }
}

///
/// Runs the command described by the command line parameters
///
fn run(params: &ArgMatches) -> Result<(), ToolError> {
    let mut config = match params.value_of("config") {
        Some(config_file)   => ToolConfig::load(config_file)?,
        None                => ToolConfig::default()
    };

    if let Some(factor) = params.value_of("factor") {
        config.factor = parse_number("factor", factor)?;
    }

    if params.is_present("haversine") {
        config.haversine = true;
    }

    let (command, command_params) = match params.subcommand() {
        ("encode", Some(sub))   => (PathCommand::Encode, sub),
        ("decode", Some(sub))   => (PathCommand::Decode, sub),
        ("reduce", Some(sub))   => (PathCommand::Reduce, sub),
        ("stats", Some(sub))    => (PathCommand::Stats, sub),
        ("off", Some(sub))      => (PathCommand::Off, sub),
        _                       => return Err(ToolError::InvalidArgument("a command is required (try --help)".to_string()))
    };

    if let Some(threshold) = command_params.value_of("threshold") {
        config.threshold = parse_number("threshold", threshold)?;
    }

    config.validate()?;
    debug!("Running {:?} with {:?}", command, config);

    // Read the input file
    let input = match command_params.value_of("INPUT") {
        Some(input_file)    => fs::read_to_string(input_file)?,
        None                => {
            let mut input = String::new();
            io::stdin().read_to_string(&mut input)?;
            input
        }
    };

    let stdout = io::stdout();
    let mut output = stdout.lock();

    run_command(&command, &input, &config, &mut output)
}

///
/// Parses a numeric command line argument
///
fn parse_number(name: &str, value: &str) -> Result<f64, ToolError> {
    f64::from_str(value)
        .map_err(|_| ToolError::InvalidArgument(format!("'{}' is not a valid value for --{}", value, name)))
}
