//! Route optimization and fleet plan configuration.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/solve/config_test.rs"]
mod config_test;

use crate::extensions::import::parse_time;
use dispatch_core::prelude::*;
use evokit::utils::{Quota, TimeQuota, get_cpus};
use serde::Deserialize;
use std::io::{BufReader, Read};
use std::sync::Arc;

/// A dispatch configuration.
#[derive(Clone, Deserialize, Debug, Default)]
pub struct Config {
    /// Specifies evolution configuration.
    pub evolution: Option<EvolutionSettings>,
    /// Specifies telemetry configuration.
    pub telemetry: Option<TelemetryConfig>,
    /// Specifies vehicles and their manifests.
    pub fleet: Option<FleetConfig>,
}

/// An evolution configuration.
#[derive(Clone, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct EvolutionSettings {
    /// Amount of individuals in population. Default is 10000.
    pub population_size: Option<usize>,
    /// Amount of generations with survivors before evolution stops. Default is 100.
    pub max_generations: Option<usize>,
    /// Amount of full reseeds allowed when nobody survives selection. Default is 100.
    pub max_reseeds: Option<usize>,
    /// Rank ratio of the fitness threshold. Default is 0.25.
    pub threshold_ratio: Option<Float>,
    /// Chance of swap mutation. Default is 0.2.
    pub mutation_chance: Option<Float>,
    /// Amount of crossover parents. Default is 2.
    pub parents: Option<usize>,
    /// A random seed which makes evolution repeatable.
    pub seed: Option<u64>,
    /// Max time of evolution in seconds.
    pub max_time: Option<usize>,
    /// Amount of threads used per vehicle. Default is number of cpus.
    pub parallelism: Option<usize>,
}

/// A telemetry configuration.
#[derive(Clone, Deserialize, Debug, Default)]
pub struct TelemetryConfig {
    /// Specifies logging configuration.
    pub logging: Option<LoggingConfig>,
}

/// A logging configuration.
#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct LoggingConfig {
    /// Specifies whether evolution progress is logged.
    pub enabled: bool,
    /// Specifies how often a generation line is logged, in generations. Improving generations are
    /// always logged. Default is 10.
    pub log_best: Option<usize>,
    /// Specifies a custom prefix for all log messages.
    pub prefix: Option<String>,
}

/// A fleet plan: vehicles with their departure times and manifests.
#[derive(Clone, Deserialize, Debug)]
pub struct FleetConfig {
    /// Vehicles of the fleet.
    pub vehicles: Vec<VehicleConfig>,
    /// Destination corrections which become known during the day.
    #[serde(default)]
    pub corrections: Vec<CorrectionConfig>,
}

/// A vehicle plan.
#[derive(Clone, Deserialize, Debug)]
pub struct VehicleConfig {
    /// Vehicle id.
    pub id: VehicleId,
    /// Departure time in `H:MM AM/PM` format.
    pub start: String,
    /// Ids of shipments loaded into the vehicle.
    pub manifest: Vec<ShipmentId>,
}

/// A destination correction of a shipment.
#[derive(Clone, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CorrectionConfig {
    /// Shipment id.
    pub shipment: ShipmentId,
    /// New address, it has to be known by the address table.
    pub address: String,
    /// Time when correction becomes known in `H:MM AM/PM` format.
    pub effective_at: String,
}

impl Default for FleetConfig {
    fn default() -> Self {
        let vehicle = |id: VehicleId, start: &str, manifest: &[ShipmentId]| VehicleConfig {
            id,
            start: start.to_string(),
            manifest: manifest.to_vec(),
        };

        Self {
            vehicles: vec![
                vehicle(1, "8:00 AM", &[1, 13, 15, 30, 29, 31, 34, 37, 40, 19, 14, 16, 20]),
                vehicle(2, "9:05 AM", &[3, 18, 36, 38, 6, 25, 28, 32, 35, 39, 26, 27, 24]),
                vehicle(3, "10:20 AM", &[2, 4, 5, 7, 8, 9, 10, 11, 12, 17, 21, 22, 23, 33]),
            ],
            corrections: vec![],
        }
    }
}

/// Reads config from reader.
pub fn read_config<R: Read>(reader: BufReader<R>) -> GenericResult<Config> {
    serde_json::from_reader(reader).map_err(|err| GenericError::parse(format!("cannot deserialize config: '{err}'")))
}

/// Creates an evolution configuration from config. Evolution progress goes to the logger when
/// logging is enabled, the quota, if any, stops evolution early.
pub fn create_evolution_config(
    config: &Config,
    logger: InfoLogger,
    quota: Option<Arc<dyn Quota + Send + Sync>>,
) -> GenericResult<EvolutionConfig> {
    let builder = EvolutionConfigBuilder::default();
    let builder = configure_from_telemetry(builder, config.telemetry.as_ref(), logger.clone());
    let builder = configure_from_evolution(builder, config.evolution.as_ref(), logger, quota);

    builder.build()
}

/// Creates a fleet from a plan. Shipments are looked up by id, corrections are passed to the
/// vehicle which carries the corrected shipment.
pub fn create_fleet(
    plan: &FleetConfig,
    graph: Arc<WeightedGraph>,
    shipments: &[Shipment],
    addresses: &AddressIndex,
    logger: InfoLogger,
) -> GenericResult<Fleet> {
    let corrections = plan
        .corrections
        .iter()
        .map(|correction| {
            Ok(AddressCorrection::new(
                correction.shipment,
                addresses.location(correction.address.as_str())?,
                correction.address.as_str(),
                parse_time(correction.effective_at.as_str())?,
            ))
        })
        .collect::<GenericResult<Vec<_>>>()?;

    let vehicles = plan
        .vehicles
        .iter()
        .map(|vehicle| {
            let manifest = vehicle
                .manifest
                .iter()
                .map(|id| {
                    shipments.iter().find(|shipment| shipment.id == *id).cloned().ok_or_else(|| {
                        GenericError::not_found(format!("vehicle {}: unknown shipment {id} in manifest", vehicle.id))
                    })
                })
                .collect::<GenericResult<Vec<_>>>()?;

            let corrections = corrections
                .iter()
                .filter(|correction| vehicle.manifest.contains(&correction.shipment))
                .cloned()
                .collect();

            Vehicle::new(vehicle.id, manifest, graph.clone(), parse_time(vehicle.start.as_str())?, corrections)
        })
        .collect::<GenericResult<Vec<_>>>()?;

    Fleet::new(vehicles, logger)
}

fn configure_from_telemetry(
    builder: EvolutionConfigBuilder,
    telemetry: Option<&TelemetryConfig>,
    logger: InfoLogger,
) -> EvolutionConfigBuilder {
    match telemetry.and_then(|telemetry| telemetry.logging.as_ref()) {
        Some(logging) if logging.enabled => {
            let logger: InfoLogger = match logging.prefix.clone() {
                Some(prefix) => Arc::new(move |msg: &str| (logger)(format!("{prefix}{msg}").as_str())),
                None => logger,
            };

            builder.with_telemetry(TelemetryMode::OnlyLogging { logger, log_best: logging.log_best.unwrap_or(10) })
        }
        _ => builder.with_telemetry(TelemetryMode::None),
    }
}

fn configure_from_evolution(
    mut builder: EvolutionConfigBuilder,
    evolution: Option<&EvolutionSettings>,
    logger: InfoLogger,
    quota: Option<Arc<dyn Quota + Send + Sync>>,
) -> EvolutionConfigBuilder {
    let default = EvolutionSettings::default();
    let evolution = evolution.unwrap_or(&default);

    if let Some(population_size) = evolution.population_size {
        builder = builder.with_population_size(population_size);
    }

    if let Some(max_generations) = evolution.max_generations {
        builder = builder.with_max_generations(max_generations);
    }

    if let Some(max_reseeds) = evolution.max_reseeds {
        builder = builder.with_max_reseeds(max_reseeds);
    }

    if let Some(threshold_ratio) = evolution.threshold_ratio {
        builder = builder.with_threshold_ratio(threshold_ratio);
    }

    if let Some(mutation_chance) = evolution.mutation_chance {
        builder = builder.with_mutation_chance(mutation_chance);
    }

    if let Some(parents) = evolution.parents {
        builder = builder.with_parents(parents);
    }

    let random: Arc<dyn Random + Send + Sync> = match evolution.seed {
        Some(seed) => Arc::new(DefaultRandom::new_repeatable(seed)),
        None => Arc::new(DefaultRandom::default()),
    };

    let quota = match (quota, evolution.max_time) {
        (Some(quota), _) => Some(quota),
        (None, Some(max_time)) => Some(Arc::new(TimeQuota::new(max_time as Float)) as Arc<dyn Quota + Send + Sync>),
        (None, None) => None,
    };

    let parallelism = evolution.parallelism.unwrap_or_else(get_cpus);

    builder.with_environment(Arc::new(Environment::new(random, quota, parallelism, logger)))
}
