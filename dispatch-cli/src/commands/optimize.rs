#[cfg(test)]
#[path = "../../tests/unit/commands/optimize_test.rs"]
mod optimize_test;

use super::*;
use clap::ArgAction;
use dispatch_cli::extensions::solve::config::{LoggingConfig, TelemetryConfig, create_evolution_config};
use dispatch_cli::extensions::solve::interruption::{create_cancellation_quota, create_interruption_quota};
use std::sync::atomic::AtomicBool;

const GENERATIONS_ARG_NAME: &str = "max-generations";
const POPULATION_ARG_NAME: &str = "population-size";
const TIME_ARG_NAME: &str = "max-time";
const RANDOM_SEED_ARG_NAME: &str = "seed";
const LOG_ARG_NAME: &str = "log";

pub fn get_optimize_app() -> Command {
    with_data_args(Command::new("optimize").about("Searches for shorter routes than nearest neighbor ones"))
        .arg(
            Arg::new(GENERATIONS_ARG_NAME)
                .help("Specifies maximum number of generations")
                .short('n')
                .long(GENERATIONS_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(POPULATION_ARG_NAME)
                .help("Specifies amount of individuals in population")
                .short('p')
                .long(POPULATION_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(TIME_ARG_NAME)
                .help("Specifies max time of optimization per vehicle in seconds")
                .short('t')
                .long(TIME_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(RANDOM_SEED_ARG_NAME)
                .help("Specifies randomization seed to avoid stochastic behavior")
                .long(RANDOM_SEED_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(LOG_ARG_NAME)
                .help("Specifies whether evolution progress is logged")
                .long(LOG_ARG_NAME)
                .action(ArgAction::SetTrue)
                .required(false),
        )
}

pub fn run_optimize(matches: &ArgMatches) -> Result<(), String> {
    let context = create_context(matches)?;
    let logger = context.logger.clone();

    let mut evolution = context.config.evolution.clone().unwrap_or_default();
    if let Some(max_generations) = parse_int_value::<usize>(matches, GENERATIONS_ARG_NAME, "max generations")? {
        evolution.max_generations = Some(max_generations);
    }
    if let Some(population_size) = parse_int_value::<usize>(matches, POPULATION_ARG_NAME, "population size")? {
        evolution.population_size = Some(population_size);
    }
    if let Some(max_time) = parse_int_value::<usize>(matches, TIME_ARG_NAME, "max time")? {
        evolution.max_time = Some(max_time);
    }
    if let Some(seed) = parse_int_value::<u64>(matches, RANDOM_SEED_ARG_NAME, "seed")? {
        evolution.seed = Some(seed);
    }

    let telemetry = if matches.get_flag(LOG_ARG_NAME) {
        Some(TelemetryConfig { logging: Some(LoggingConfig { enabled: true, log_best: None, prefix: None }) })
    } else {
        context.config.telemetry.clone()
    };

    let quota = create_interruption_quota(evolution.max_time).unwrap_or_else(|err| {
        (logger)(format!("{err}, interruption is not supported").as_str());
        create_cancellation_quota(Arc::new(AtomicBool::new(false)), evolution.max_time)
    });

    let config = Config { evolution: Some(evolution), telemetry, fleet: None };
    let evolution_config = create_evolution_config(&config, logger, Some(quota))
        .map_err(|err| format!("cannot create evolution config: '{err}'"))?;

    let results = context.fleet.optimize(&evolution_config).map_err(|err| format!("cannot optimize routes: '{err}'"))?;

    let lines = results
        .iter()
        .flat_map(format_optimization)
        .chain(std::iter::once(format_total(results.as_slice())))
        .collect::<Vec<_>>();

    write_lines(create_out_writer(matches)?, lines.as_slice())
}

fn format_optimization(result: &RouteOptimization) -> Vec<String> {
    let mut lines = vec![
        format!(
            "Vehicle #{}: nearest neighbor route {} is {:.2} miles long",
            result.vehicle,
            format_route(result.baseline.as_slice()),
            result.baseline_length
        ),
        format!(
            "Vehicle #{}: best route {} is {:.2} miles long, converged: {}, generations: {}, reseeds: {}",
            result.vehicle,
            format_route(result.route.as_slice()),
            result.length,
            result.is_converged,
            result.generations,
            result.reseeds
        ),
    ];

    if result.interrupted {
        lines.push(format!("Vehicle #{}: optimization was interrupted", result.vehicle));
    }

    lines
}

fn format_total(results: &[RouteOptimization]) -> String {
    let (baseline, best) = results.iter().fold((0., 0.), |(baseline, best), result| {
        let length = if result.is_improvement() { result.length } else { result.baseline_length };
        (baseline + result.baseline_length, best + length)
    });

    format!("Total: nearest neighbor routes are {baseline:.2} miles long, best feasible ones are {best:.2} miles long")
}

fn format_route(route: &[Location]) -> String {
    route.iter().map(|location| location.to_string()).collect::<Vec<_>>().join(" -> ")
}
