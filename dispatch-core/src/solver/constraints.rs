//! Contains constraints which can be used to select routes.

#[cfg(test)]
#[path = "../../tests/unit/solver/constraints_test.rs"]
mod constraints_test;

use crate::models::{Distance, Location, Shipment, Timestamp, WeightedGraph};
use crate::vehicle::Vehicle;
use evokit::prelude::Constraint;
use rustc_hash::FxHashSet;
use std::sync::Arc;

/// A route constraint.
pub type RouteConstraint = Constraint<Location>;

/// Accepts routes which are strictly shorter than the threshold.
pub fn route_length_below(graph: Arc<WeightedGraph>, threshold: Distance) -> RouteConstraint {
    Constraint::new("route length below threshold", move |route: &[Location]| {
        graph.route_length(route).is_ok_and(|length| length < threshold)
    })
}

/// Accepts routes which deliver every shipment before its deadline when started at given time.
pub fn on_time(graph: Arc<WeightedGraph>, shipments: Arc<[Shipment]>, start_time: Timestamp) -> RouteConstraint {
    Constraint::new("on time", move |route: &[Location]| graph.route_is_on_time(route, &shipments, start_time))
}

/// Accepts routes which deliver vehicle's manifest on time.
pub fn on_time_for(vehicle: &Vehicle) -> RouteConstraint {
    on_time(vehicle.graph().clone(), vehicle.manifest().into(), vehicle.start_time())
}

/// Accepts routes which visit every required location exactly once, locations outside of the
/// required set are ignored.
pub fn visits_all(required: &[Location]) -> RouteConstraint {
    let required = required.iter().copied().collect::<FxHashSet<_>>();

    Constraint::new("visits all destinations", move |route: &[Location]| {
        let mut visited = FxHashSet::default();
        let no_repeats =
            route.iter().filter(|location| required.contains(*location)).all(|location| visited.insert(location));

        no_repeats && visited.len() == required.len()
    })
}
