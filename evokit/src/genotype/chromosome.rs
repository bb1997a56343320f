#[cfg(test)]
#[path = "../../tests/unit/genotype/chromosome_test.rs"]
mod chromosome_test;

use super::{Gene, Individual};
use crate::utils::{GenericError, GenericResult, Random};
use rand::prelude::SliceRandom;
use rustc_hash::FxHashSet;

/// A factory of individuals: fills positions with genes from an alphabet while guaranteeing that
/// every gene of an optional inclusion set is placed exactly once.
pub struct Chromosome<G: Gene> {
    alphabet: Vec<G>,
    inclusion: Option<Vec<G>>,
}

impl<G: Gene> Chromosome<G> {
    /// Creates a new instance of `Chromosome`. Duplicates in inclusion set are ignored.
    pub fn new(alphabet: Vec<G>, inclusion: Option<Vec<G>>) -> Self {
        let inclusion = inclusion.map(|inclusion| {
            let mut seen = FxHashSet::default();
            inclusion.into_iter().filter(|gene| seen.insert(gene.clone())).collect()
        });

        Self { alphabet, inclusion }
    }

    /// Returns the alphabet used to fill positions once inclusion set is exhausted.
    pub fn alphabet(&self) -> &[G] {
        self.alphabet.as_slice()
    }

    /// Returns genes which have to be placed exactly once.
    pub fn inclusion(&self) -> Option<&[G]> {
        self.inclusion.as_deref()
    }

    /// Generates an individual of requested length. Pinned first and last genes are set before
    /// remaining positions are filled in random order.
    pub fn generate(
        &self,
        length: usize,
        first: Option<G>,
        last: Option<G>,
        random: &(dyn Random + Send + Sync),
    ) -> GenericResult<Individual<G>> {
        let required = self.inclusion.as_deref().unwrap_or(&[]);

        if required.len() > length {
            return Err(GenericError::validation(format!(
                "the number of required genes ({}) is greater than the length of an individual ({length})",
                required.len()
            )));
        }

        let mut slots: Vec<Option<G>> = vec![None; length];
        if length > 0 {
            if let Some(first) = first {
                slots[0] = Some(first);
            }
            if let Some(last) = last {
                slots[length - 1] = Some(last);
            }
        }

        let mut free =
            slots.iter().enumerate().filter(|(_, slot)| slot.is_none()).map(|(idx, _)| idx).collect::<Vec<_>>();

        if required.len() > free.len() {
            return Err(GenericError::validation(format!(
                "the number of required genes ({}) is greater than the amount of free positions ({})",
                required.len(),
                free.len()
            )));
        }

        if free.len() > required.len() && self.alphabet.is_empty() {
            return Err(GenericError::validation("cannot fill positions: alphabet is empty"));
        }

        free.shuffle(&mut random.get_rng());

        let mut remaining = required.to_vec();
        free.into_iter().for_each(|position| {
            let gene = if remaining.is_empty() {
                self.alphabet[random.uniform_int(0, self.alphabet.len() as i32 - 1) as usize].clone()
            } else {
                remaining.swap_remove(random.uniform_int(0, remaining.len() as i32 - 1) as usize)
            };

            slots[position] = Some(gene);
        });

        Ok(Individual::new(slots.into_iter().flatten().collect()))
    }
}
