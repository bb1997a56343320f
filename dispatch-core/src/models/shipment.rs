#[cfg(test)]
#[path = "../../tests/unit/models/shipment_test.rs"]
mod shipment_test;

use crate::models::{END_OF_DAY, Location, Timestamp, format_time};
use evokit::prelude::Float;
use std::fmt::{Display, Formatter};

/// Represents a shipment id.
pub type ShipmentId = usize;

/// Represents a vehicle id. Zero is reserved to express "any vehicle".
pub type VehicleId = usize;

/// Specifies delivery status of a shipment. Status only moves forward:
/// `AtHub` -> `EnRoute` -> `Delivered`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DeliveryStatus {
    /// Shipment waits at the hub.
    AtHub,
    /// Shipment is loaded into a vehicle which left the depot.
    EnRoute,
    /// Shipment is delivered at given time.
    Delivered {
        /// Delivery time.
        at: Timestamp,
    },
}

impl DeliveryStatus {
    fn stage(&self) -> usize {
        match self {
            DeliveryStatus::AtHub => 0,
            DeliveryStatus::EnRoute => 1,
            DeliveryStatus::Delivered { .. } => 2,
        }
    }
}

impl Display for DeliveryStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            DeliveryStatus::AtHub => write!(f, "at the hub"),
            DeliveryStatus::EnRoute => write!(f, "en route"),
            DeliveryStatus::Delivered { at } => write!(f, "delivered at {}", format_time(*at)),
        }
    }
}

/// A shipment which has to be delivered to a specific location.
#[derive(Clone, Debug)]
pub struct Shipment {
    /// Shipment id.
    pub id: ShipmentId,
    /// Destination location.
    pub destination: Location,
    /// Destination address.
    pub address: String,
    /// Latest delivery time.
    pub deadline: Timestamp,
    /// Time when shipment becomes available for loading at the hub.
    pub available_at: Timestamp,
    /// A vehicle which has to deliver shipment, zero means any vehicle.
    pub required_vehicle: VehicleId,
    /// Shipments which have to be delivered by the same vehicle.
    pub dependencies: Vec<ShipmentId>,
    /// Weight in kilograms.
    pub weight: Float,
    /// Free form notes.
    pub notes: String,
    status: DeliveryStatus,
}

impl Shipment {
    /// Creates a new instance of `Shipment` which waits at the hub and can be delivered by any vehicle
    /// till the end of the day.
    pub fn new(id: ShipmentId, destination: Location, address: &str) -> Self {
        Self {
            id,
            destination,
            address: address.to_string(),
            deadline: END_OF_DAY,
            available_at: 0.,
            required_vehicle: 0,
            dependencies: vec![],
            weight: 0.,
            notes: String::new(),
            status: DeliveryStatus::AtHub,
        }
    }

    /// Sets deadline.
    pub fn with_deadline(mut self, deadline: Timestamp) -> Self {
        self.deadline = deadline;
        self
    }

    /// Sets earliest availability time.
    pub fn with_availability(mut self, available_at: Timestamp) -> Self {
        self.available_at = available_at;
        self
    }

    /// Sets a vehicle which has to deliver shipment.
    pub fn with_required_vehicle(mut self, required_vehicle: VehicleId) -> Self {
        self.required_vehicle = required_vehicle;
        self
    }

    /// Sets co-delivery dependencies.
    pub fn with_dependencies(mut self, dependencies: Vec<ShipmentId>) -> Self {
        self.dependencies = dependencies;
        self
    }

    /// Sets weight.
    pub fn with_weight(mut self, weight: Float) -> Self {
        self.weight = weight;
        self
    }

    /// Sets notes.
    pub fn with_notes(mut self, notes: &str) -> Self {
        self.notes = notes.to_string();
        self
    }

    /// Returns current delivery status.
    pub fn status(&self) -> DeliveryStatus {
        self.status
    }

    /// Moves status forward. An attempt to move it back or to stay at the same stage is ignored.
    /// Returns true if status was changed.
    pub fn advance_status(&mut self, status: DeliveryStatus) -> bool {
        if status.stage() > self.status.stage() {
            self.status = status;
            true
        } else {
            false
        }
    }

    /// Returns true if shipment is delivered.
    pub fn is_delivered(&self) -> bool {
        matches!(self.status, DeliveryStatus::Delivered { .. })
    }
}

impl Display for Shipment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Shipment #{}, status: [{}], destination: [{}] {}, deadline: {}, weight: {}kg, notes: \"{}\"",
            self.id,
            self.status,
            self.destination,
            self.address,
            format_time(self.deadline),
            self.weight,
            self.notes
        )
    }
}
