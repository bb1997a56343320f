#[cfg(test)]
#[path = "../../tests/unit/operators/crossover_test.rs"]
mod crossover_test;

use crate::genotype::{Gene, Individual};
use crate::utils::{GenericError, GenericResult, Random};

/// Builds a child by taking, independently for each position, a gene of uniformly chosen parent.
///
/// The child is not guaranteed to keep permutation property of its parents: some genes can be
/// duplicated while others dropped. Use [`crate::operators::Repair`] to restore it.
pub fn uniform_crossover<G: Gene>(
    parents: &[&Individual<G>],
    random: &(dyn Random + Send + Sync),
) -> GenericResult<Individual<G>> {
    let first = parents.first().ok_or_else(|| GenericError::validation("crossover requires at least one parent"))?;
    let length = first.len();

    if parents.iter().any(|parent| parent.len() != length) {
        return Err(GenericError::validation("crossover requires parents of equal length"));
    }

    let last_parent = parents.len() as i32 - 1;
    let genes = (0..length)
        .map(|position| {
            let parent = parents[random.uniform_int(0, last_parent) as usize];
            parent.genes()[position].clone()
        })
        .collect();

    Ok(Individual::new(genes))
}
