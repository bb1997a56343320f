use crate::models::{Location, Shipment, ShipmentId, Timestamp};

/// A one-time change of shipment destination which becomes known at a given time.
#[derive(Clone, Debug)]
pub struct AddressCorrection {
    /// Shipment which destination changes.
    pub shipment: ShipmentId,
    /// New destination location.
    pub destination: Location,
    /// New destination address.
    pub address: String,
    /// Time when correction becomes effective.
    pub effective_at: Timestamp,
}

impl AddressCorrection {
    /// Creates a new instance of `AddressCorrection`.
    pub fn new(shipment: ShipmentId, destination: Location, address: &str, effective_at: Timestamp) -> Self {
        Self { shipment, destination, address: address.to_string(), effective_at }
    }

    /// Returns true if correction is effective at given time.
    pub fn is_due(&self, time: Timestamp) -> bool {
        time >= self.effective_at
    }

    /// Patches matching shipments, returns true if any was patched.
    pub(crate) fn apply(&self, shipments: &mut [Shipment]) -> bool {
        shipments.iter_mut().filter(|shipment| shipment.id == self.shipment).fold(false, |_, shipment| {
            shipment.destination = self.destination;
            shipment.address = self.address.clone();
            true
        })
    }
}
