//! Core crate contains building blocks to plan and simulate deliveries of a small fleet of vehicles
//! over a weighted location graph.
//!
//! # Key points
//!
//! - [`models::WeightedGraph`] keeps symmetric distances between locations and converts them into
//!   travel time assuming a constant average speed.
//! - [`vehicle::Vehicle`] builds a nearest neighbor route over its shipments' destinations and replays
//!   delivery against a simulated clock, so status at any time of the day can be queried.
//! - [`solver`] searches for a shorter on time route for a vehicle using generational evolution
//!   from the `evokit` crate.
//! - [`fleet::Fleet`] aggregates vehicles and validates their manifests.
//!
//! # Examples
//!
//! ```
//! use dispatch_core::prelude::*;
//! use std::sync::Arc;
//!
//! let graph = Arc::new(WeightedGraph::from_rows(vec![vec![0.], vec![2., 0.], vec![5., 4., 0.]])?);
//! let shipments = vec![Shipment::new(1, 1, "first street"), Shipment::new(2, 2, "second street")];
//!
//! let vehicle = Vehicle::new(1, shipments, graph, 480., vec![])?;
//!
//! assert_eq!(vehicle.route(), &[0, 1, 2, 0]);
//! assert_eq!(vehicle.route_length(), 11.);
//! # Ok::<(), GenericError>(())
//! ```

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod fleet;
pub mod models;
pub mod prelude;
pub mod solver;
pub mod vehicle;

pub use evokit;
