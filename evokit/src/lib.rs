//! This crate exposes generic building blocks for evolutionary search over fixed length gene
//! sequences: a constrained chromosome factory, a population, constraint based selection,
//! mutation, crossover and repair operators, and a generational driver which keeps track of
//! the best feasible individual found.
//!
//! The crate knows nothing about routing: a problem is plugged in via [`evolution::EvolutionProblem`].

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[macro_use]
pub mod helpers;

pub mod evolution;
pub mod genotype;
pub mod operators;
pub mod population;
pub mod prelude;
pub mod selection;
pub mod utils;
