//! A collection of models which describe the delivery domain: locations and distances between
//! them, shipments and their delivery status, and address lookup.

mod address;
pub use self::address::AddressIndex;

mod graph;
pub use self::graph::*;

mod shipment;
pub use self::shipment::*;

mod time;
pub use self::time::*;

use evokit::prelude::Float;

/// Represents a location index (graph node).
pub type Location = usize;

/// The location where every vehicle starts and finishes its route.
pub const DEPOT: Location = 0;

/// Represents a distance in miles.
pub type Distance = Float;

/// Represents a timestamp in minutes since the start of the day.
pub type Timestamp = Float;
