//! This module reimports a common used types.

pub use crate::evolution::Champion;
pub use crate::evolution::Evolution;
pub use crate::evolution::EvolutionConfig;
pub use crate::evolution::EvolutionConfigBuilder;
pub use crate::evolution::EvolutionProblem;
pub use crate::evolution::EvolutionResult;
pub use crate::evolution::TelemetryMode;

pub use crate::genotype::Chromosome;
pub use crate::genotype::Gene;
pub use crate::genotype::Individual;

pub use crate::operators::Mutation;
pub use crate::operators::Repair;
pub use crate::operators::uniform_crossover;

pub use crate::population::Population;

pub use crate::selection::Constraint;
pub use crate::selection::Selection;

pub use crate::utils::compare_floats;
pub use crate::utils::DefaultRandom;
pub use crate::utils::Environment;
pub use crate::utils::ErrorKind;
pub use crate::utils::Float;
pub use crate::utils::GenericError;
pub use crate::utils::GenericResult;
pub use crate::utils::InfoLogger;
pub use crate::utils::Quota;
pub use crate::utils::{Random, RandomGen};
