use super::*;
use crate::helpers::models::*;
use crate::helpers::utils::{create_collecting_logger, create_test_config, test_logger};
use crate::models::{DeliveryStatus, END_OF_DAY};
use crate::vehicle::AddressCorrection;
use evokit::prelude::{DefaultRandom, Environment, EvolutionConfigBuilder};

fn create_fleet() -> Fleet {
    let first = create_test_vehicle(1, vec![create_test_shipment(1, 1), create_test_shipment(2, 2)], 480.);
    let second = create_test_vehicle(2, vec![create_test_shipment(3, 2)], 545.);

    Fleet::new(vec![first, second], test_logger()).expect("cannot create fleet")
}

#[test]
fn can_sum_route_lengths() {
    let fleet = create_fleet();

    assert_eq!(fleet.total_route_length(), 11. + 10.);
}

#[test]
fn can_get_status_of_all_vehicles_and_reset() {
    let mut fleet = create_fleet();

    let reports = fleet.status_at_time(500.);

    assert_eq!(reports.len(), 2);
    assert!(reports[0].is_departed());
    assert!(!reports[1].is_departed());

    fleet.reset();

    assert!(fleet.vehicles().iter().all(|vehicle| vehicle.distance_travelled() == 0.));
    assert!(
        fleet
            .vehicles()
            .iter()
            .flat_map(|vehicle| vehicle.shipments())
            .all(|shipment| shipment.status() == DeliveryStatus::AtHub)
    );
}

#[test]
fn can_deliver_everything_by_end_of_day() {
    let mut fleet = create_fleet();

    let reports = fleet.status_at_time(END_OF_DAY);

    assert!(reports.iter().flat_map(|report| report.shipments.iter()).all(|shipment| shipment.is_delivered()));
    assert_eq!(fleet.vehicle(2).map(|vehicle| vehicle.distance_travelled()), Some(10.));
}

#[test]
fn can_reject_duplicate_vehicle_ids() {
    let first = create_test_vehicle(1, vec![], 480.);
    let second = create_test_vehicle(1, vec![], 480.);

    assert!(Fleet::new(vec![first, second], test_logger()).is_err());
}

#[test]
fn can_detect_manifest_issues() {
    let (logger, messages) = create_collecting_logger();
    let first = create_test_vehicle(
        1,
        vec![
            create_test_shipment(1, 1).with_required_vehicle(2),
            create_test_shipment(2, 2).with_availability(545.),
            create_test_shipment(3, 2).with_dependencies(vec![3, 4, 5]),
        ],
        480.,
    );
    let second = create_test_vehicle(2, vec![create_test_shipment(4, 1).with_required_vehicle(2)], 545.);

    let fleet = Fleet::new(vec![first, second], logger).expect("cannot create fleet");

    assert_eq!(
        fleet.issues(),
        &[
            ManifestIssue::RequiredVehicleMismatch { shipment: 1, required: 2, actual: 1 },
            ManifestIssue::AvailableAfterDeparture { shipment: 2, vehicle: 1, available_at: 545., departs_at: 480. },
            ManifestIssue::SplitDependency { shipment: 3, dependency: 4, vehicle: 1, dependency_vehicle: Some(2) },
            ManifestIssue::SplitDependency { shipment: 3, dependency: 5, vehicle: 1, dependency_vehicle: None },
        ]
    );
    assert_eq!(messages.lock().unwrap().len(), 4);
    assert!(messages.lock().unwrap()[1].contains("available at 9:05 AM"));
}

#[test]
fn can_detect_correction_to_location_off_route() {
    let (logger, messages) = create_collecting_logger();
    let corrections =
        vec![AddressCorrection::new(1, 2, "2 Moved St", 600.), AddressCorrection::new(2, 1, "1 Moved St", 600.)];
    let shipments = vec![create_test_shipment(1, 1), create_test_shipment(2, 1)];
    let vehicle =
        Vehicle::new(1, shipments, create_triangle_graph(), 480., corrections).expect("cannot create vehicle");

    let mut fleet = Fleet::new(vec![vehicle], logger).expect("cannot create fleet");

    assert_eq!(
        fleet.issues(),
        &[ManifestIssue::CorrectionOffRoute { shipment: 1, vehicle: 1, destination: 2, effective_at: 600. }]
    );
    assert!(messages.lock().unwrap()[0].contains("redirected at 10:00 AM to location 2"));
    let reports = fleet.status_at_time(END_OF_DAY);
    assert!(reports[0].shipments.iter().any(|shipment| shipment.id == 1 && !shipment.is_delivered()));
}

#[test]
fn can_accept_correction_known_at_departure() {
    let corrections = vec![AddressCorrection::new(1, 2, "2 Moved St", 480.)];
    let shipments = vec![create_test_shipment(1, 1)];
    let vehicle =
        Vehicle::new(1, shipments, create_triangle_graph(), 480., corrections).expect("cannot create vehicle");

    let fleet = Fleet::new(vec![vehicle], test_logger()).expect("cannot create fleet");

    assert!(fleet.issues().is_empty());
}

#[test]
fn can_optimize_all_vehicles() {
    let fleet = create_fleet();

    let results = fleet.optimize(&create_test_config(20, 2)).expect("cannot optimize");

    assert_eq!(results.iter().map(|result| result.vehicle).collect::<Vec<_>>(), vec![1, 2]);
    // symmetric routes have equal length, so nothing is strictly shorter than the baseline
    assert!(results.iter().all(|result| !result.is_improvement() && result.length == result.baseline_length));
}

#[test]
fn can_repeat_optimization_with_the_same_seed() {
    let graph = create_line_graph(9);
    let create_vehicle = |id, destinations: Vec<usize>| {
        let shipments = destinations.into_iter().map(|destination| create_test_shipment(destination, destination));
        Vehicle::new(id, shipments.collect(), graph.clone(), 480., vec![]).expect("cannot create vehicle")
    };
    let vehicles = vec![create_vehicle(1, vec![1, 3, 5, 7]), create_vehicle(2, vec![2, 4, 6, 8])];
    let fleet = Fleet::new(vehicles, test_logger()).expect("cannot create fleet");
    let optimize = || {
        let environment = Environment::new(Arc::new(DefaultRandom::new_repeatable(42)), None, 4, test_logger());
        let config = EvolutionConfigBuilder::default()
            .with_population_size(50)
            .with_max_generations(5)
            .with_max_reseeds(5)
            .with_environment(Arc::new(environment))
            .build()
            .expect("cannot build config");

        fleet.optimize(&config).expect("cannot optimize")
    };

    let first = optimize();

    assert!((0..5).all(|_| optimize() == first));
}
