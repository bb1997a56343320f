//! Contains route optimization for a single vehicle using generational evolution.

#[cfg(test)]
#[path = "../../tests/unit/solver/solver_test.rs"]
mod solver_test;

pub mod constraints;
use self::constraints::*;

use crate::models::{DEPOT, Distance, Location, Shipment, Timestamp, WeightedGraph};
use crate::vehicle::Vehicle;
use evokit::prelude::*;
use std::sync::Arc;

/// A problem of finding a shorter on time route which visits every required destination of a vehicle.
pub struct RouteProblem {
    graph: Arc<WeightedGraph>,
    shipments: Arc<[Shipment]>,
    start_time: Timestamp,
    required: Vec<Location>,
    chromosome: Chromosome<Location>,
    repair: Repair<Location>,
}

impl RouteProblem {
    /// Creates a new instance of `RouteProblem` for the vehicle. Individual length equals the amount
    /// of vehicle's required destinations.
    pub fn new(vehicle: &Vehicle) -> Self {
        let required = vehicle.required_destinations().to_vec();

        Self {
            graph: vehicle.graph().clone(),
            shipments: vehicle.manifest().into(),
            start_time: vehicle.start_time(),
            chromosome: Chromosome::new(required.clone(), Some(required.clone())),
            repair: Repair::new(required.clone()),
            required,
        }
    }
}

impl EvolutionProblem for RouteProblem {
    type Gene = Location;

    fn chromosome(&self) -> &Chromosome<Self::Gene> {
        &self.chromosome
    }

    fn individual_size(&self) -> usize {
        self.required.len()
    }

    fn bound(&self) -> Option<Self::Gene> {
        Some(DEPOT)
    }

    fn fitness(&self, individual: &Individual<Self::Gene>) -> Float {
        self.graph.route_length(individual.render(&DEPOT).as_slice()).unwrap_or(Float::MAX)
    }

    fn constraints(&self, threshold: Float) -> Vec<Constraint<Self::Gene>> {
        vec![
            route_length_below(self.graph.clone(), threshold),
            on_time(self.graph.clone(), self.shipments.clone(), self.start_time),
            visits_all(self.required.as_slice()),
        ]
    }

    fn repair(&self) -> Option<&Repair<Self::Gene>> {
        Some(&self.repair)
    }
}

/// A result of vehicle route optimization.
#[derive(Clone, Debug, PartialEq)]
pub struct RouteOptimization {
    /// Vehicle id.
    pub vehicle: usize,
    /// Nearest neighbor route of the vehicle.
    pub baseline: Vec<Location>,
    /// Length of the nearest neighbor route.
    pub baseline_length: Distance,
    /// The best route found.
    pub route: Vec<Location>,
    /// Length of the best route found.
    pub length: Distance,
    /// True if the best route satisfied all constraints of its generation.
    pub is_converged: bool,
    /// Amount of generations which had survivors.
    pub generations: usize,
    /// Amount of population reseeds.
    pub reseeds: usize,
    /// True if optimization was stopped by quota.
    pub interrupted: bool,
}

impl RouteOptimization {
    /// Returns true if a feasible route shorter than nearest neighbor one was found.
    pub fn is_improvement(&self) -> bool {
        self.is_converged && self.length < self.baseline_length
    }
}

/// Runs evolution to find a better route for the vehicle.
pub fn optimize_vehicle(vehicle: &Vehicle, config: EvolutionConfig) -> GenericResult<RouteOptimization> {
    let logger = config.environment.logger.clone();
    let result = Evolution::new(RouteProblem::new(vehicle), config).run()?;

    if !result.is_converged() {
        (logger)(&format!(
            "vehicle {}: no route satisfied all constraints, returning the best seeded route",
            vehicle.id()
        ));
    }

    Ok(RouteOptimization {
        vehicle: vehicle.id(),
        baseline: vehicle.route().to_vec(),
        baseline_length: vehicle.route_length(),
        is_converged: result.is_converged(),
        length: result.champion.fitness,
        route: result.champion.route,
        generations: result.generations,
        reseeds: result.reseeds,
        interrupted: result.interrupted,
    })
}
