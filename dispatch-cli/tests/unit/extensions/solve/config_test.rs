use super::*;
use crate::extensions::import::{read_addresses, read_distances, read_shipments};
use crate::extensions::solve::interruption::create_cancellation_quota;
use crate::helpers::*;
use dispatch_core::prelude::{ManifestIssue, StatusReport};
use evokit::prelude::ErrorKind;
use std::fs::File;
use std::sync::atomic::AtomicBool;

struct TestData {
    graph: Arc<WeightedGraph>,
    addresses: AddressIndex,
    shipments: Vec<Shipment>,
}

fn read_test_data() -> TestData {
    let open = |path: &str| BufReader::new(File::open(path).expect("cannot open test data"));

    let graph = Arc::new(read_distances(open(DISTANCES_PATH)).unwrap());
    let addresses = read_addresses(open(ADDRESSES_PATH)).unwrap();
    let shipments = read_shipments(open(SHIPMENTS_PATH), &addresses).unwrap();

    TestData { graph, addresses, shipments }
}

fn read_sample_plan() -> FleetConfig {
    read_config(BufReader::new(File::open(CONFIG_PATH).unwrap())).unwrap().fleet.expect("no fleet plan")
}

fn create_test_fleet(plan: &FleetConfig) -> GenericResult<Fleet> {
    let data = read_test_data();

    create_fleet(plan, data.graph, data.shipments.as_slice(), &data.addresses, test_logger())
}

fn create_config(content: &str) -> Config {
    read_config(BufReader::new(content.as_bytes())).unwrap()
}

fn get_report(reports: &[StatusReport], vehicle: VehicleId) -> &StatusReport {
    reports.iter().find(|report| report.vehicle == vehicle).expect("no report for vehicle")
}

#[test]
fn can_read_sample_config() {
    let config = read_config(BufReader::new(File::open(CONFIG_PATH).unwrap())).unwrap();

    let evolution = config.evolution.expect("no evolution config");
    assert_eq!(evolution.population_size, Some(200));
    assert_eq!(evolution.max_generations, Some(10));
    assert_eq!(evolution.max_reseeds, Some(20));
    assert_eq!(evolution.threshold_ratio, Some(0.25));
    assert_eq!(evolution.mutation_chance, Some(0.2));
    assert_eq!(evolution.parents, Some(2));
    assert_eq!(evolution.seed, Some(42));
    assert_eq!(evolution.max_time, None);

    let logging = config.telemetry.expect("no telemetry config").logging.expect("no logging config");
    assert!(!logging.enabled);
    assert_eq!(logging.log_best, Some(10));

    let fleet = config.fleet.expect("no fleet config");
    assert_eq!(fleet.vehicles.len(), 3);
    assert_eq!(fleet.vehicles[1].id, 2);
    assert_eq!(fleet.vehicles[1].start, "9:05 AM");
    assert_eq!(fleet.vehicles[1].manifest, vec![6, 7, 8]);
    assert_eq!(fleet.corrections.len(), 1);
    assert_eq!(fleet.corrections[0].shipment, 9);
    assert_eq!(fleet.corrections[0].address, "1500 Farm Rd");
    assert_eq!(fleet.corrections[0].effective_at, "10:20 AM");
}

#[test]
fn can_read_empty_config() {
    let config = create_config("{}");

    assert!(config.evolution.is_none());
    assert!(config.telemetry.is_none());
    assert!(config.fleet.is_none());
}

#[test]
fn can_read_fleet_without_corrections() {
    let config = create_config(r#"{ "fleet": { "vehicles": [{ "id": 1, "start": "8:00 AM", "manifest": [1] }] } }"#);

    let fleet = config.fleet.unwrap();
    assert_eq!(fleet.vehicles.len(), 1);
    assert!(fleet.corrections.is_empty());
}

#[test]
fn can_fail_on_malformed_config() {
    let err = read_config(BufReader::new(r#"{ "evolution": "#.as_bytes())).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Parse);
}

#[test]
fn can_create_default_fleet_plan() {
    let plan = FleetConfig::default();

    assert_eq!(plan.vehicles.iter().map(|vehicle| vehicle.id).collect::<Vec<_>>(), vec![1, 2, 3]);
    assert_eq!(
        plan.vehicles.iter().map(|vehicle| vehicle.start.as_str()).collect::<Vec<_>>(),
        vec!["8:00 AM", "9:05 AM", "10:20 AM"]
    );
    assert_eq!(plan.vehicles.iter().map(|vehicle| vehicle.manifest.len()).collect::<Vec<_>>(), vec![13, 13, 14]);

    let mut ids = plan.vehicles.iter().flat_map(|vehicle| vehicle.manifest.iter().cloned()).collect::<Vec<_>>();
    ids.sort_unstable();
    assert_eq!(ids, (1..=40).collect::<Vec<_>>());
    assert!(plan.corrections.is_empty());
}

#[test]
fn can_create_evolution_config_with_defaults() {
    let config = create_evolution_config(&Config::default(), test_logger(), None).unwrap();

    assert_eq!(config.population_size, 10_000);
    assert_eq!(config.max_generations, 100);
    assert_eq!(config.max_reseeds, 100);
    assert_eq!(config.parents, 2);
    assert!(matches!(config.telemetry, TelemetryMode::None));
    assert!(config.environment.quota.is_none());
}

#[test]
fn can_create_evolution_config_from_settings() {
    let config = create_config(
        r#"{
            "evolution": {
                "populationSize": 50, "maxGenerations": 5, "maxReseeds": 3, "thresholdRatio": 0.5,
                "mutationChance": 1.0, "parents": 3, "seed": 7, "maxTime": 60, "parallelism": 1
            }
        }"#,
    );

    let config = create_evolution_config(&config, test_logger(), None).unwrap();

    assert_eq!(config.population_size, 50);
    assert_eq!(config.max_generations, 5);
    assert_eq!(config.max_reseeds, 3);
    assert_eq!(config.threshold_ratio, 0.5);
    assert_eq!(config.mutation_chance, 1.);
    assert_eq!(config.parents, 3);
    assert_eq!(config.environment.parallelism, 1);
    assert!(config.environment.quota.is_some());
    assert!(!config.environment.is_quota_reached());
}

#[test]
fn can_reject_invalid_evolution_settings() {
    let config = create_config(r#"{ "evolution": { "maxGenerations": 0 } }"#);

    let err = create_evolution_config(&config, test_logger(), None).err().expect("config should be rejected");

    assert_eq!(err.kind(), ErrorKind::Validation);
}

#[test]
fn can_use_external_quota() {
    let quota = create_cancellation_quota(Arc::new(AtomicBool::new(true)), None);

    let config = create_evolution_config(&Config::default(), test_logger(), Some(quota)).unwrap();

    assert!(config.environment.is_quota_reached());
}

#[test]
fn can_log_evolution_with_prefix() {
    let (logger, messages) = create_collecting_logger();
    let config = create_config(r#"{ "telemetry": { "logging": { "enabled": true, "prefix": "[dispatch] " } } }"#);

    let config = create_evolution_config(&config, logger, None).unwrap();

    match config.telemetry {
        TelemetryMode::OnlyLogging { logger, log_best } => {
            assert_eq!(log_best, 10);
            (logger)("started");
        }
        TelemetryMode::None => unreachable!("logging should be enabled"),
    }
    assert_eq!(messages.lock().unwrap().as_slice(), &["[dispatch] started".to_string()]);
}

#[test]
fn can_disable_logging() {
    let config = create_config(r#"{ "telemetry": { "logging": { "enabled": false, "logBest": 5 } } }"#);

    let config = create_evolution_config(&config, test_logger(), None).unwrap();

    assert!(matches!(config.telemetry, TelemetryMode::None));
}

#[test]
fn can_create_fleet_from_sample_plan() {
    let fleet = create_test_fleet(&read_sample_plan()).unwrap();

    assert_eq!(fleet.vehicles().len(), 3);
    assert!(fleet.issues().is_empty());
    assert_eq!(fleet.vehicle(1).unwrap().route(), &[0, 1, 2, 4, 3, 0]);
    assert_eq!(fleet.vehicle(2).unwrap().route(), &[0, 5, 6, 7, 0]);
    assert_eq!(fleet.vehicle(3).unwrap().route(), &[0, 5, 9, 2, 0]);
    assert_eq!(fleet.vehicle(2).unwrap().start_time(), 545.);
    assert!((fleet.total_route_length() - 77.1).abs() < 1E-9);
}

#[test]
fn can_pass_correction_to_carrying_vehicle() {
    let mut fleet = create_test_fleet(&read_sample_plan()).unwrap();

    let reports = fleet.status_at_time(END_OF_DAY);
    let shipment = get_report(reports.as_slice(), 3).shipments.iter().find(|shipment| shipment.id == 9).unwrap();

    assert_eq!(shipment.destination, 9);
    assert_eq!(shipment.address, "1500 Farm Rd");
    assert!(shipment.is_delivered());
}

#[test]
fn can_deliver_every_sample_shipment_by_end_of_day() {
    let mut fleet = create_test_fleet(&read_sample_plan()).unwrap();

    let reports = fleet.status_at_time(END_OF_DAY);

    assert_eq!(reports.iter().map(|report| report.shipments.len()).sum::<usize>(), 12);
    assert!(reports.iter().flat_map(|report| report.shipments.iter()).all(|shipment| shipment.is_delivered()));
}

#[test]
fn can_report_correction_after_departure_off_route() {
    let mut plan = read_sample_plan();
    plan.vehicles[1].manifest.push(9);
    plan.vehicles[2].manifest.retain(|id| *id != 9);

    let fleet = create_test_fleet(&plan).unwrap();

    assert_eq!(
        fleet.issues(),
        &[ManifestIssue::CorrectionOffRoute { shipment: 9, vehicle: 2, destination: 9, effective_at: 620. }]
    );
}

#[test]
fn can_report_manifest_issues() {
    let mut plan = read_sample_plan();
    plan.vehicles[0].manifest.push(7);
    plan.vehicles[1].manifest.retain(|id| *id != 7);

    let fleet = create_test_fleet(&plan).unwrap();

    assert_eq!(
        fleet.issues(),
        &[ManifestIssue::RequiredVehicleMismatch { shipment: 7, required: 2, actual: 1 }]
    );
}

parameterized_test! {can_fail_on_unknown_data_in_plan, (manifest, correction_address, expected_kind), {
    let mut plan = read_sample_plan();
    plan.vehicles[0].manifest = manifest;
    plan.corrections[0].address = correction_address.to_string();

    let err = create_test_fleet(&plan).err().expect("fleet should not be created");

    assert_eq!(err.kind(), expected_kind);
}}

can_fail_on_unknown_data_in_plan! {
    case01_unknown_shipment: (vec![1, 99], "1500 Farm Rd", ErrorKind::NotFound),
    case02_unknown_address: (vec![1, 2], "1 Unknown St", ErrorKind::NotFound),
}

#[test]
fn can_fail_on_malformed_start_time() {
    let mut plan = read_sample_plan();
    plan.vehicles[2].start = "late".to_string();

    let err = create_test_fleet(&plan).err().expect("fleet should not be created");

    assert_eq!(err.kind(), ErrorKind::Parse);
}

#[test]
fn can_repeat_sample_optimization_with_configured_seed() {
    let fleet = create_test_fleet(&read_sample_plan()).unwrap();
    let config = create_config(
        r#"{ "evolution": {
            "populationSize": 100, "maxGenerations": 5, "maxReseeds": 5, "seed": 42, "parallelism": 4
        } }"#,
    );
    let optimize = || {
        let config = create_evolution_config(&config, test_logger(), None).unwrap();
        fleet.optimize(&config).unwrap()
    };

    let first = optimize();

    assert!((0..5).all(|_| optimize() == first));
}
