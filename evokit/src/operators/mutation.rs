#[cfg(test)]
#[path = "../../tests/unit/operators/mutation_test.rs"]
mod mutation_test;

use crate::genotype::{Gene, Individual};
use crate::utils::{Float, Random};

/// A swap mutation: with given chance exchanges two genes chosen independently and uniformly.
#[derive(Clone, Debug)]
pub struct Mutation {
    chance: Float,
}

impl Mutation {
    /// Creates a new instance of `Mutation`.
    pub fn new(chance: Float) -> Self {
        Self { chance }
    }

    /// Returns mutation chance.
    pub fn chance(&self) -> Float {
        self.chance
    }

    /// Mutates individual with the configured chance, otherwise returns it unchanged.
    pub fn mutate<G: Gene>(&self, individual: Individual<G>, random: &(dyn Random + Send + Sync)) -> Individual<G> {
        if !individual.is_empty() && random.is_hit(self.chance) { self.swap(individual, random) } else { individual }
    }

    /// Swaps two genes at positions drawn from the whole sequence, the same position can be drawn twice.
    pub fn swap<G: Gene>(&self, mut individual: Individual<G>, random: &(dyn Random + Send + Sync)) -> Individual<G> {
        if individual.is_empty() {
            return individual;
        }

        let last = individual.len() as i32 - 1;
        let i = random.uniform_int(0, last) as usize;
        let j = random.uniform_int(0, last) as usize;

        individual.swap(i, j);

        individual
    }
}
