//! Contains functionality to run a generational evolution over fixed length individuals.

#[cfg(test)]
#[path = "../../tests/unit/evolution/evolution_test.rs"]
mod evolution_test;

use crate::genotype::{Chromosome, Gene, Individual};
use crate::operators::Repair;
use crate::selection::Constraint;
use crate::utils::Float;

mod config;
pub use self::config::*;

mod simulator;
pub use self::simulator::*;

pub mod telemetry;
pub use self::telemetry::*;

/// Describes a problem which can be solved by `Evolution`.
pub trait EvolutionProblem: Send + Sync {
    /// A gene type.
    type Gene: Gene;

    /// Returns a chromosome used to seed population.
    fn chromosome(&self) -> &Chromosome<Self::Gene>;

    /// Returns the length of every individual.
    fn individual_size(&self) -> usize;

    /// Returns a gene which bounds rendered individual from both sides, if any.
    fn bound(&self) -> Option<Self::Gene>;

    /// Returns fitness of individual, lower is better.
    fn fitness(&self, individual: &Individual<Self::Gene>) -> Float;

    /// Returns constraints for a generation with given fitness threshold.
    fn constraints(&self, threshold: Float) -> Vec<Constraint<Self::Gene>>;

    /// Returns a repair operator applied to each child after crossover.
    fn repair(&self) -> Option<&Repair<Self::Gene>> {
        None
    }
}

/// The best individual observed during evolution.
#[derive(Clone, Debug)]
pub struct Champion<G: Gene> {
    /// An individual.
    pub individual: Individual<G>,
    /// Individual rendered with problem bound.
    pub route: Vec<G>,
    /// Fitness of individual.
    pub fitness: Float,
    /// True if individual satisfied all constraints of its generation.
    pub is_feasible: bool,
}

impl<G: Gene> Champion<G> {
    /// Creates a new instance of `Champion`.
    pub fn new(individual: Individual<G>, bound: Option<&G>, fitness: Float, is_feasible: bool) -> Self {
        let route = match bound {
            Some(bound) => individual.render(bound),
            None => individual.genes().to_vec(),
        };

        Self { individual, route, fitness, is_feasible }
    }
}

/// A result of evolution run.
#[derive(Clone, Debug)]
pub struct EvolutionResult<G: Gene> {
    /// The best individual observed. If no generation ever had survivors, this is the best
    /// individual of the initial population.
    pub champion: Champion<G>,
    /// Amount of generations which had survivors.
    pub generations: usize,
    /// Amount of full population reseeds.
    pub reseeds: usize,
    /// True if evolution was stopped by quota.
    pub interrupted: bool,
}

impl<G: Gene> EvolutionResult<G> {
    /// Returns true if champion comes from a generation where all constraints were satisfied.
    pub fn is_converged(&self) -> bool {
        self.champion.is_feasible
    }
}
