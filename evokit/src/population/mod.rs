//! The population module contains an ordered collection of individuals of the same length.

#[cfg(test)]
#[path = "../../tests/unit/population/population_test.rs"]
mod population_test;

use crate::genotype::{Chromosome, Gene, Individual};
use crate::utils::{Float, GenericResult, Random, compare_floats, parallel_collect};

/// An ordered collection of individuals of equal length.
#[derive(Clone, Debug)]
pub struct Population<G: Gene> {
    individuals: Vec<Individual<G>>,
}

impl<G: Gene> Population<G> {
    /// Creates a new instance of `Population`.
    pub fn new(individuals: Vec<Individual<G>>) -> Self {
        Self { individuals }
    }

    /// Creates a population of given size using chromosome to generate individuals of given length.
    pub fn seed(
        chromosome: &Chromosome<G>,
        size: usize,
        length: usize,
        random: &(dyn Random + Send + Sync),
    ) -> GenericResult<Self> {
        (0..size)
            .map(|_| chromosome.generate(length, None, None, random))
            .collect::<GenericResult<Vec<_>>>()
            .map(Self::new)
    }

    /// Returns individuals in their original order.
    pub fn individuals(&self) -> &[Individual<G>] {
        self.individuals.as_slice()
    }

    /// Consumes population and returns its individuals.
    pub fn into_individuals(self) -> Vec<Individual<G>> {
        self.individuals
    }

    /// Returns population size.
    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    /// Returns true if population has no individuals.
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// Evaluates fitness of all individuals in parallel, result order matches individuals order.
    pub fn evaluate<F>(&self, fitness_fn: F) -> Vec<Float>
    where
        F: Fn(&Individual<G>) -> Float + Send + Sync,
    {
        parallel_collect(self.individuals.as_slice(), fitness_fn)
    }

    /// Returns individuals paired with their fitness, sorted ascending by fitness. Sorting is stable,
    /// so equally fit individuals keep population order.
    pub fn sorted_by<F>(&self, fitness_fn: F) -> Vec<(Individual<G>, Float)>
    where
        F: Fn(&Individual<G>) -> Float + Send + Sync,
    {
        let fitness = self.evaluate(fitness_fn);
        let mut pairs = self.individuals.iter().cloned().zip(fitness).collect::<Vec<_>>();
        pairs.sort_by(|(_, a), (_, b)| compare_floats(*a, *b));

        pairs
    }
}

/// Returns a value at given rank ratio of ascending sorted values: `0.` is the smallest value,
/// `1.` is the largest one. Returns `None` for empty values.
pub fn percentile_fitness(values: &[Float], ratio: Float) -> Option<Float> {
    if values.is_empty() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| compare_floats(*a, *b));

    let rank = ((sorted.len() - 1) as Float * ratio.clamp(0., 1.)).floor() as usize;

    sorted.get(rank).copied()
}
