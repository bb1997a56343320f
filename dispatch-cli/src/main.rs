//! A command line interface to delivery route planning and simulation.

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
#[allow(dead_code)]
mod helpers;

mod commands;

use std::process;

mod cli {
    use super::commands::miles::{get_miles_app, run_miles};
    use super::commands::optimize::{get_optimize_app, run_optimize};
    use super::commands::schedule::{get_schedule_app, run_schedule};
    use clap::{ArgMatches, Command};

    pub fn get_app() -> Command {
        Command::new("Delivery Dispatch")
            .version(env!("CARGO_PKG_VERSION"))
            .about("A command line interface to plan, simulate and optimize delivery routes")
            .subcommand_required(true)
            .subcommand(get_miles_app())
            .subcommand(get_schedule_app())
            .subcommand(get_optimize_app())
    }

    pub fn run_subcommand(arg_matches: ArgMatches) -> Result<(), String> {
        match arg_matches.subcommand() {
            Some(("miles", miles_matches)) => run_miles(miles_matches),
            Some(("schedule", schedule_matches)) => run_schedule(schedule_matches),
            Some(("optimize", optimize_matches)) => run_optimize(optimize_matches),
            _ => Err("no subcommand was used. Use -h to print help information.".to_string()),
        }
    }
}

fn main() {
    let matches = cli::get_app().get_matches();

    if let Err(err) = cli::run_subcommand(matches) {
        eprintln!("{err}");
        process::exit(1);
    }
}
