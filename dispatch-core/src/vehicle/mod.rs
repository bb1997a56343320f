//! A vehicle which follows its route and delivers shipments against a simulated clock.

#[cfg(test)]
#[path = "../../tests/unit/vehicle/vehicle_test.rs"]
mod vehicle_test;

mod correction;
pub use self::correction::AddressCorrection;

mod report;
pub use self::report::StatusReport;

use crate::models::*;
use evokit::prelude::{GenericError, GenericResult};
use std::fmt::{Display, Formatter};
use std::sync::Arc;

/// Specifies vehicle state.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum VehicleState {
    /// Vehicle has not left the depot yet.
    AtDepot,
    /// Vehicle follows its route.
    EnRoute,
    /// Vehicle has returned to the depot.
    Finished,
}

impl Display for VehicleState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            VehicleState::AtDepot => write!(f, "at depot"),
            VehicleState::EnRoute => write!(f, "en route"),
            VehicleState::Finished => write!(f, "finished"),
        }
    }
}

/// A mutable part of the vehicle which is restored on reset.
#[derive(Clone, Debug)]
struct Progress {
    location: Location,
    distance: Distance,
    clock: Timestamp,
    index: usize,
    state: VehicleState,
    pending: Vec<Shipment>,
    delivered: Vec<Shipment>,
    corrections: Vec<AddressCorrection>,
}

/// A vehicle which owns its shipments and simulates their delivery along a nearest neighbor route.
pub struct Vehicle {
    id: VehicleId,
    graph: Arc<WeightedGraph>,
    start_time: Timestamp,
    route: Vec<Location>,
    route_length: Distance,
    required: Vec<Location>,
    initial: Progress,
    progress: Progress,
}

impl Vehicle {
    /// Creates a new instance of `Vehicle`. Corrections effective at start time are applied to
    /// shipments before the route is built, others are applied during simulation once due.
    pub fn new(
        id: VehicleId,
        shipments: Vec<Shipment>,
        graph: Arc<WeightedGraph>,
        start_time: Timestamp,
        corrections: Vec<AddressCorrection>,
    ) -> GenericResult<Self> {
        if let Some(correction) = corrections.iter().find(|correction| !graph.contains(correction.destination)) {
            return Err(GenericError::not_found(format!(
                "vehicle {id}: correction of shipment {} points to unknown location {}",
                correction.shipment, correction.destination
            )));
        }

        let mut shipments = shipments;
        let (due, corrections): (Vec<_>, Vec<_>) =
            corrections.into_iter().partition(|correction| correction.is_due(start_time));
        due.iter().for_each(|correction| {
            correction.apply(shipments.as_mut_slice());
        });

        if let Some(shipment) = shipments.iter().find(|shipment| !graph.contains(shipment.destination)) {
            return Err(GenericError::not_found(format!(
                "vehicle {id}: shipment {} has unknown destination {}",
                shipment.id, shipment.destination
            )));
        }

        let mut required = shipments
            .iter()
            .map(|shipment| shipment.destination)
            .filter(|&destination| destination != DEPOT)
            .collect::<Vec<_>>();
        required.sort_unstable();
        required.dedup();

        let route = build_nearest_neighbor_route(graph.as_ref(), required.as_slice());
        let route_length = graph.route_length(route.as_slice())?;

        let initial = Progress {
            location: DEPOT,
            distance: 0.,
            clock: start_time,
            index: 0,
            state: VehicleState::AtDepot,
            pending: shipments,
            delivered: vec![],
            corrections,
        };

        Ok(Self { id, graph, start_time, route, route_length, required, progress: initial.clone(), initial })
    }

    /// Moves vehicle to the next location of its route and delivers shipments there.
    /// Returns false when there is no location left to move to.
    pub fn advance(&mut self) -> bool {
        let next_index = self.progress.index + 1;
        let Some(&next) = self.route.get(next_index) else {
            self.progress.state = VehicleState::Finished;
            return false;
        };

        let progress = &mut self.progress;
        progress.distance += self.graph.weight(progress.location, next);
        progress.location = next;
        progress.index = next_index;
        progress.clock = miles_to_minutes(progress.distance) + self.start_time;
        progress.state =
            if next_index + 1 == self.route.len() { VehicleState::Finished } else { VehicleState::EnRoute };

        self.deliver();

        true
    }

    /// Replays delivery up to the given time and returns a report. Shipments which are due to
    /// address corrections are patched once, before replay. A time earlier than the simulated clock
    /// restarts replay from the just constructed state.
    pub fn status_at_time(&mut self, time: Timestamp) -> StatusReport {
        if time < self.progress.clock {
            self.reset();
        }

        if time < self.start_time {
            return self.report(time);
        }

        let (due, corrections): (Vec<_>, Vec<_>) =
            std::mem::take(&mut self.progress.corrections).into_iter().partition(|correction| correction.is_due(time));
        self.progress.corrections = corrections;
        due.iter().for_each(|correction| {
            correction.apply(self.progress.pending.as_mut_slice());
        });

        self.progress.pending.iter_mut().for_each(|shipment| {
            shipment.advance_status(DeliveryStatus::EnRoute);
        });

        while self.progress.clock < time && self.advance() {}

        self.report(time)
    }

    /// Restores the vehicle to the state it had right after construction, the route is kept.
    pub fn reset(&mut self) {
        self.progress = self.initial.clone();
    }

    /// Returns vehicle id.
    pub fn id(&self) -> VehicleId {
        self.id
    }

    /// Returns the graph used by the vehicle.
    pub fn graph(&self) -> &Arc<WeightedGraph> {
        &self.graph
    }

    /// Returns scheduled start time.
    pub fn start_time(&self) -> Timestamp {
        self.start_time
    }

    /// Returns the route: it starts and ends at depot and visits every required destination once.
    pub fn route(&self) -> &[Location] {
        self.route.as_slice()
    }

    /// Returns the length of the route.
    pub fn route_length(&self) -> Distance {
        self.route_length
    }

    /// Returns unique destinations in ascending order, depot is excluded.
    pub fn required_destinations(&self) -> &[Location] {
        self.required.as_slice()
    }

    /// Returns all shipments: pending ones followed by delivered ones.
    pub fn shipments(&self) -> impl Iterator<Item = &Shipment> {
        self.progress.pending.iter().chain(self.progress.delivered.iter())
    }

    /// Returns the manifest as it was at construction time.
    pub fn manifest(&self) -> &[Shipment] {
        self.initial.pending.as_slice()
    }

    /// Returns corrections which become effective after departure.
    pub fn pending_corrections(&self) -> &[AddressCorrection] {
        self.initial.corrections.as_slice()
    }

    /// Returns current location.
    pub fn location(&self) -> Location {
        self.progress.location
    }

    /// Returns travelled distance.
    pub fn distance_travelled(&self) -> Distance {
        self.progress.distance
    }

    /// Returns simulated clock.
    pub fn clock(&self) -> Timestamp {
        self.progress.clock
    }

    /// Returns current state.
    pub fn state(&self) -> VehicleState {
        self.progress.state
    }

    fn deliver(&mut self) {
        let progress = &mut self.progress;
        if progress.location == DEPOT {
            return;
        }

        let (mut arrived, pending): (Vec<_>, Vec<_>) =
            std::mem::take(&mut progress.pending).into_iter().partition(|s| s.destination == progress.location);

        arrived.iter_mut().for_each(|shipment| {
            shipment.advance_status(DeliveryStatus::Delivered { at: progress.clock });
        });

        progress.pending = pending;
        progress.delivered.extend(arrived);
    }

    fn report(&self, time: Timestamp) -> StatusReport {
        StatusReport {
            vehicle: self.id,
            time,
            state: self.progress.state,
            start_time: self.start_time,
            distance: self.progress.distance,
            clock: self.progress.clock,
            shipments: self.progress.delivered.iter().chain(self.progress.pending.iter()).cloned().collect(),
        }
    }
}

/// Builds a route which starts at depot, repeatedly moves to the closest unvisited destination and
/// returns to depot. Ties are resolved in favor of the destination which comes first.
fn build_nearest_neighbor_route(graph: &WeightedGraph, destinations: &[Location]) -> Vec<Location> {
    let mut remaining = destinations.to_vec();
    let mut route = Vec::with_capacity(destinations.len() + 2);
    route.push(DEPOT);

    let mut current = DEPOT;
    while !remaining.is_empty() {
        let (nearest_idx, _) =
            remaining.iter().enumerate().fold((0, Distance::INFINITY), |(best_idx, best), (idx, &next)| {
                let distance = graph.weight(current, next);
                if distance < best { (idx, distance) } else { (best_idx, best) }
            });

        current = remaining.remove(nearest_idx);
        route.push(current);
    }

    route.push(DEPOT);

    route
}
