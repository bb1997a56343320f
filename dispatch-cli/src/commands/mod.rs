use clap::{Arg, ArgMatches, Command};
use dispatch_cli::extensions::import::{parse_time, read_addresses, read_distances, read_shipments};
use dispatch_cli::extensions::solve::config::{Config, create_fleet, read_config};
use dispatch_core::prelude::*;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write, stdout};
use std::str::FromStr;
use std::sync::Arc;

pub mod miles;
pub mod optimize;
pub mod schedule;

const DISTANCES_ARG_NAME: &str = "distances";
const ADDRESSES_ARG_NAME: &str = "addresses";
const SHIPMENTS_ARG_NAME: &str = "shipments";
const CONFIG_ARG_NAME: &str = "config";
const OUT_RESULT_ARG_NAME: &str = "out-result";

/// Keeps everything loaded from input files.
pub(crate) struct DispatchContext {
    pub config: Config,
    pub fleet: Fleet,
    pub logger: InfoLogger,
}

/// Adds arguments shared by all subcommands.
pub(crate) fn with_data_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(DISTANCES_ARG_NAME)
                .help("Specifies path to csv file with distance matrix")
                .short('d')
                .long(DISTANCES_ARG_NAME)
                .required(true),
        )
        .arg(
            Arg::new(ADDRESSES_ARG_NAME)
                .help("Specifies path to csv file with addresses, row index is a location")
                .short('a')
                .long(ADDRESSES_ARG_NAME)
                .required(true),
        )
        .arg(
            Arg::new(SHIPMENTS_ARG_NAME)
                .help("Specifies path to csv file with shipments")
                .short('s')
                .long(SHIPMENTS_ARG_NAME)
                .required(true),
        )
        .arg(
            Arg::new(CONFIG_ARG_NAME)
                .help("Specifies path to json configuration with fleet plan and evolution settings")
                .short('c')
                .long(CONFIG_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to file for result output")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
}

/// Loads input files and builds a fleet.
pub(crate) fn create_context(matches: &ArgMatches) -> Result<DispatchContext, String> {
    let logger: InfoLogger = Arc::new(|msg: &str| println!("{msg}"));

    let open_reader = |arg_name: &str, description: &str| {
        let path = matches
            .get_one::<String>(arg_name)
            .ok_or_else(|| format!("{description} file is not specified, use --{arg_name}"))?;

        open_file(path, description).map(BufReader::new)
    };

    let graph = read_distances(open_reader(DISTANCES_ARG_NAME, "distances")?)
        .map_err(|err| format!("cannot read distances: '{err}'"))?;
    let addresses = read_addresses(open_reader(ADDRESSES_ARG_NAME, "addresses")?)
        .map_err(|err| format!("cannot read addresses: '{err}'"))?;
    let shipments = read_shipments(open_reader(SHIPMENTS_ARG_NAME, "shipments")?, &addresses)
        .map_err(|err| format!("cannot read shipments: '{err}'"))?;

    let config = match matches.get_one::<String>(CONFIG_ARG_NAME) {
        Some(path) => read_config(BufReader::new(open_file(path, "config")?))
            .map_err(|err| format!("cannot read config: '{err}'"))?,
        None => Config::default(),
    };

    let plan = config.fleet.clone().unwrap_or_default();
    let fleet = create_fleet(&plan, Arc::new(graph), shipments.as_slice(), &addresses, logger.clone())
        .map_err(|err| format!("cannot create fleet: '{err}'"))?;

    Ok(DispatchContext { config, fleet, logger })
}

/// Returns a writer to the out result file or to stdout if no file is specified.
pub(crate) fn create_out_writer(matches: &ArgMatches) -> Result<BufWriter<Box<dyn Write>>, String> {
    let out_file =
        matches.get_one::<String>(OUT_RESULT_ARG_NAME).map(|path| create_file(path, "out result")).transpose()?;

    Ok(create_write_buffer(out_file))
}

/// Writes lines and flushes the writer.
pub(crate) fn write_lines(mut writer: BufWriter<Box<dyn Write>>, lines: &[String]) -> Result<(), String> {
    lines
        .iter()
        .try_for_each(|line| writeln!(writer, "{line}"))
        .and_then(|_| writer.flush())
        .map_err(|err| format!("cannot write result: '{err}'"))
}

pub(crate) fn create_write_buffer(out_file: Option<File>) -> BufWriter<Box<dyn Write>> {
    if let Some(out_file) = out_file {
        BufWriter::new(Box::new(out_file))
    } else {
        BufWriter::new(Box::new(stdout()))
    }
}

fn open_file(path: &str, description: &str) -> Result<File, String> {
    File::open(path).map_err(|err| format!("cannot open {description} file '{path}': '{err}'"))
}

fn create_file(path: &str, description: &str) -> Result<File, String> {
    File::create(path).map_err(|err| format!("cannot create {description} file '{path}': '{err}'"))
}

fn parse_int_value<T: FromStr<Err = std::num::ParseIntError>>(
    matches: &ArgMatches,
    arg_name: &str,
    arg_desc: &str,
) -> Result<Option<T>, String> {
    matches
        .get_one::<String>(arg_name)
        .map(|arg| {
            arg.parse::<T>().map_err(|err| format!("cannot get integer value, error: '{err}': '{arg_desc}'")).map(Some)
        })
        .unwrap_or(Ok(None))
}

fn parse_time_value(matches: &ArgMatches, arg_name: &str, arg_desc: &str) -> Result<Option<Timestamp>, String> {
    matches
        .get_one::<String>(arg_name)
        .map(|arg| parse_time(arg).map_err(|err| format!("cannot get time value, error: '{err}': '{arg_desc}'")))
        .transpose()
}
