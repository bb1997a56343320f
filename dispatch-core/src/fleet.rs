//! A fleet of vehicles which are simulated and optimized independently.

#[cfg(test)]
#[path = "../tests/unit/fleet_test.rs"]
mod fleet_test;

use crate::models::{Distance, Location, ShipmentId, Timestamp, VehicleId, format_time};
use crate::solver::{RouteOptimization, optimize_vehicle};
use crate::vehicle::{StatusReport, Vehicle};
use evokit::prelude::{EvolutionConfig, GenericError, GenericResult, InfoLogger};
use evokit::utils::parallel_into_collect;
use rustc_hash::{FxHashMap, FxHashSet};
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// Describes a problem of assigning shipments to vehicles which does not prevent simulation.
#[derive(Clone, Debug, PartialEq)]
pub enum ManifestIssue {
    /// Shipment is loaded into a vehicle other than the required one.
    RequiredVehicleMismatch {
        /// Shipment id.
        shipment: ShipmentId,
        /// Required vehicle.
        required: VehicleId,
        /// Vehicle which carries shipment.
        actual: VehicleId,
    },
    /// Shipment becomes available at the hub after its vehicle departs.
    AvailableAfterDeparture {
        /// Shipment id.
        shipment: ShipmentId,
        /// Vehicle which carries shipment.
        vehicle: VehicleId,
        /// Availability time.
        available_at: Timestamp,
        /// Departure time of the vehicle.
        departs_at: Timestamp,
    },
    /// Shipment and its co-delivery dependency are not carried by the same vehicle.
    SplitDependency {
        /// Shipment id.
        shipment: ShipmentId,
        /// Dependency id.
        dependency: ShipmentId,
        /// Vehicle which carries shipment.
        vehicle: VehicleId,
        /// Vehicle which carries dependency, if any.
        dependency_vehicle: Option<VehicleId>,
    },
    /// Shipment is redirected after departure to a location which its vehicle never visits.
    CorrectionOffRoute {
        /// Shipment id.
        shipment: ShipmentId,
        /// Vehicle which carries shipment.
        vehicle: VehicleId,
        /// Corrected destination.
        destination: Location,
        /// Time when correction becomes effective.
        effective_at: Timestamp,
    },
}

impl Display for ManifestIssue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ManifestIssue::RequiredVehicleMismatch { shipment, required, actual } => {
                write!(f, "shipment {shipment} requires vehicle {required}, but is loaded into vehicle {actual}")
            }
            ManifestIssue::AvailableAfterDeparture { shipment, vehicle, available_at, departs_at } => write!(
                f,
                "shipment {shipment} is available at {}, but vehicle {vehicle} departs at {}",
                format_time(*available_at),
                format_time(*departs_at)
            ),
            ManifestIssue::SplitDependency { shipment, dependency, vehicle, dependency_vehicle } => {
                match dependency_vehicle {
                    Some(other) => write!(
                        f,
                        "shipment {shipment} is loaded into vehicle {vehicle}, \
                         but its dependency {dependency} is loaded into vehicle {other}"
                    ),
                    None => write!(
                        f,
                        "shipment {shipment} is loaded into vehicle {vehicle}, \
                         but its dependency {dependency} is not loaded at all"
                    ),
                }
            }
            ManifestIssue::CorrectionOffRoute { shipment, vehicle, destination, effective_at } => write!(
                f,
                "shipment {shipment} is redirected at {} to location {destination}, \
                 which is not on the route of vehicle {vehicle}",
                format_time(*effective_at)
            ),
        }
    }
}

/// Owns vehicles and provides aggregated operations over them.
pub struct Fleet {
    vehicles: Vec<Vehicle>,
    issues: Vec<ManifestIssue>,
}

impl Fleet {
    /// Creates a new instance of `Fleet`. Manifest issues are reported through the logger,
    /// duplicate vehicle ids are rejected.
    pub fn new(vehicles: Vec<Vehicle>, logger: InfoLogger) -> GenericResult<Self> {
        let mut ids = FxHashSet::default();
        if let Some(vehicle) = vehicles.iter().find(|vehicle| !ids.insert(vehicle.id())) {
            return Err(GenericError::validation(format!("vehicle id {} is used more than once", vehicle.id())));
        }

        let issues = validate_manifests(vehicles.as_slice());
        issues.iter().for_each(|issue| (logger)(&format!("warning: {issue}")));

        Ok(Self { vehicles, issues })
    }

    /// Returns vehicles.
    pub fn vehicles(&self) -> &[Vehicle] {
        self.vehicles.as_slice()
    }

    /// Returns vehicle by its id.
    pub fn vehicle(&self, id: VehicleId) -> Option<&Vehicle> {
        self.vehicles.iter().find(|vehicle| vehicle.id() == id)
    }

    /// Returns manifest issues found at construction.
    pub fn issues(&self) -> &[ManifestIssue] {
        self.issues.as_slice()
    }

    /// Replays every vehicle up to given time.
    pub fn status_at_time(&mut self, time: Timestamp) -> Vec<StatusReport> {
        self.vehicles.iter_mut().map(|vehicle| vehicle.status_at_time(time)).collect()
    }

    /// Returns the sum of all vehicle route lengths.
    pub fn total_route_length(&self) -> Distance {
        self.vehicles.iter().map(|vehicle| vehicle.route_length()).sum()
    }

    /// Restores every vehicle to its just constructed state.
    pub fn reset(&mut self) {
        self.vehicles.iter_mut().for_each(|vehicle| vehicle.reset());
    }

    /// Optimizes routes of all vehicles in parallel. Vehicles are not modified. Each vehicle gets its own
    /// environment forked in vehicle order, so a repeatable environment gives repeatable results.
    pub fn optimize(&self, config: &EvolutionConfig) -> GenericResult<Vec<RouteOptimization>> {
        let tasks = self
            .vehicles
            .iter()
            .map(|vehicle| {
                let environment = Arc::new(config.environment.fork());
                (vehicle, EvolutionConfig { environment, ..config.clone() })
            })
            .collect::<Vec<_>>();

        parallel_into_collect(tasks, |(vehicle, config)| optimize_vehicle(vehicle, config)).into_iter().collect()
    }
}

/// Checks shipment assignment: required vehicles, availability at departure, co-delivery groups and
/// corrections which redirect shipments away from the vehicle route.
pub fn validate_manifests(vehicles: &[Vehicle]) -> Vec<ManifestIssue> {
    let owners = vehicles
        .iter()
        .flat_map(|vehicle| vehicle.manifest().iter().map(move |shipment| (shipment.id, vehicle.id())))
        .fold(FxHashMap::default(), |mut acc, (shipment, vehicle)| {
            acc.entry(shipment).or_insert(vehicle);
            acc
        });

    vehicles
        .iter()
        .flat_map(|vehicle| vehicle.manifest().iter().map(move |shipment| (vehicle, shipment)))
        .flat_map(|(vehicle, shipment)| {
            let required = (shipment.required_vehicle != 0 && shipment.required_vehicle != vehicle.id()).then(|| {
                ManifestIssue::RequiredVehicleMismatch {
                    shipment: shipment.id,
                    required: shipment.required_vehicle,
                    actual: vehicle.id(),
                }
            });

            let availability = (shipment.available_at > vehicle.start_time()).then(|| {
                ManifestIssue::AvailableAfterDeparture {
                    shipment: shipment.id,
                    vehicle: vehicle.id(),
                    available_at: shipment.available_at,
                    departs_at: vehicle.start_time(),
                }
            });

            let dependencies = shipment
                .dependencies
                .iter()
                .filter(|dependency| **dependency != shipment.id)
                .filter_map(|dependency| {
                    let dependency_vehicle = owners.get(dependency).copied();

                    (dependency_vehicle != Some(vehicle.id())).then_some(ManifestIssue::SplitDependency {
                        shipment: shipment.id,
                        dependency: *dependency,
                        vehicle: vehicle.id(),
                        dependency_vehicle,
                    })
                })
                .collect::<Vec<_>>();

            let corrections = vehicle
                .pending_corrections()
                .iter()
                .filter(|correction| correction.shipment == shipment.id)
                .filter(|correction| !vehicle.route().contains(&correction.destination))
                .map(|correction| ManifestIssue::CorrectionOffRoute {
                    shipment: shipment.id,
                    vehicle: vehicle.id(),
                    destination: correction.destination,
                    effective_at: correction.effective_at,
                })
                .collect::<Vec<_>>();

            required.into_iter().chain(availability).chain(dependencies).chain(corrections)
        })
        .collect()
}
