use crate::models::{Distance, Shipment, Timestamp, format_time};
use crate::vehicle::VehicleState;
use std::fmt::{Display, Formatter};

/// A snapshot of vehicle progress at a given time.
#[derive(Clone, Debug)]
pub struct StatusReport {
    /// Vehicle id.
    pub vehicle: usize,
    /// Requested time.
    pub time: Timestamp,
    /// Vehicle state.
    pub state: VehicleState,
    /// Scheduled start time.
    pub start_time: Timestamp,
    /// Distance travelled by the vehicle.
    pub distance: Distance,
    /// Simulated clock.
    pub clock: Timestamp,
    /// Delivered shipments in delivery order followed by pending shipments in manifest order.
    pub shipments: Vec<Shipment>,
}

impl StatusReport {
    /// Returns true if vehicle has not left the depot at requested time.
    pub fn is_departed(&self) -> bool {
        self.time >= self.start_time
    }

    /// Renders report as a header followed by one line per shipment.
    pub fn lines(&self) -> Vec<String> {
        let header = if self.is_departed() {
            format!(
                "Vehicle #{} [{}] at {}: travelled {:.2} miles, clock {}",
                self.vehicle,
                self.state,
                format_time(self.time),
                self.distance,
                format_time(self.clock)
            )
        } else {
            format!(
                "Vehicle #{} [not yet departed] at {}: departs at {}",
                self.vehicle,
                format_time(self.time),
                format_time(self.start_time)
            )
        };

        std::iter::once(header).chain(self.shipments.iter().map(|shipment| format!("  {shipment}"))).collect()
    }
}

impl Display for StatusReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.lines().join("\n"))
    }
}
