//! A crate which exposes delivery route planning to the outside world: csv loaders for the
//! distance matrix, address table and shipments, a json configuration of the evolution and the
//! fleet plan, and an interruption quota bound to `Ctrl-C`.
//!
//! A typical flow loads data, builds a fleet and asks it for a schedule:
//!
//! ```no_run
//! # use std::fs::File;
//! # use std::io::BufReader;
//! # use std::sync::Arc;
//! use dispatch_cli::extensions::import::*;
//! use dispatch_cli::extensions::solve::config::*;
//!
//! # fn main() -> Result<(), dispatch_core::prelude::GenericError> {
//! let open = |path: &str| File::open(path).map(BufReader::new);
//!
//! let graph = Arc::new(read_distances(open("distances.csv")?)?);
//! let addresses = read_addresses(open("addresses.csv")?)?;
//! let shipments = read_shipments(open("shipments.csv")?, &addresses)?;
//!
//! let logger = Arc::new(|msg: &str| println!("{msg}"));
//! let mut fleet = create_fleet(&FleetConfig::default(), graph, &shipments, &addresses, logger)?;
//!
//! fleet.status_at_time(600.).iter().for_each(|report| println!("{report}"));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod extensions;

pub use dispatch_core;
