#[cfg(test)]
#[path = "../../tests/unit/operators/repair_test.rs"]
mod repair_test;

use crate::genotype::{Gene, Individual};
use crate::utils::Random;
use rand::prelude::SliceRandom;
use rustc_hash::FxHashSet;

/// Restores permutation property of an individual with respect to a set of required genes:
/// repeated required genes and genes outside of the set are replaced by missing required genes.
pub struct Repair<G: Gene> {
    required: Vec<G>,
    lookup: FxHashSet<G>,
}

impl<G: Gene> Repair<G> {
    /// Creates a new instance of `Repair`.
    pub fn new(required: Vec<G>) -> Self {
        let mut lookup = FxHashSet::default();
        let required = required.into_iter().filter(|gene| lookup.insert(gene.clone())).collect();

        Self { required, lookup }
    }

    /// Returns required genes.
    pub fn required(&self) -> &[G] {
        self.required.as_slice()
    }

    /// Repairs individual. When individual is longer than the set of required genes, extra positions
    /// keep their genes after all required genes are placed.
    pub fn repair(&self, mut individual: Individual<G>, random: &(dyn Random + Send + Sync)) -> Individual<G> {
        let mut seen = FxHashSet::default();
        let replaceable = individual
            .genes()
            .iter()
            .enumerate()
            .filter(|(_, gene)| !self.lookup.contains(*gene) || !seen.insert((*gene).clone()))
            .map(|(position, _)| position)
            .collect::<Vec<_>>();

        let mut missing = self.required.iter().filter(|gene| !seen.contains(*gene)).cloned().collect::<Vec<_>>();
        if missing.is_empty() {
            return individual;
        }

        missing.shuffle(&mut random.get_rng());

        replaceable.into_iter().zip(missing).for_each(|(position, gene)| individual.set(position, gene));

        individual
    }

    /// Returns true if every required gene is present exactly once.
    pub fn is_valid(&self, individual: &Individual<G>) -> bool {
        let mut seen = FxHashSet::default();
        let no_repeats =
            individual.genes().iter().filter(|gene| self.lookup.contains(*gene)).all(|gene| seen.insert(gene));

        no_repeats && seen.len() == self.required.len()
    }
}
