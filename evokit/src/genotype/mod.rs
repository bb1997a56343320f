//! Specifies a fixed length encoding of a candidate solution and the factory which produces it.

#[cfg(test)]
#[path = "../../tests/unit/genotype/individual_test.rs"]
mod individual_test;

mod chromosome;
pub use self::chromosome::Chromosome;

use std::hash::Hash;

/// A marker trait for a gene type: a single element of an individual's sequence.
pub trait Gene: Clone + Eq + Hash + Send + Sync {}

impl<T> Gene for T where T: Clone + Eq + Hash + Send + Sync {}

/// An ordered sequence of genes of fixed length.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Individual<G> {
    genes: Vec<G>,
}

impl<G: Gene> Individual<G> {
    /// Creates a new instance of `Individual`.
    pub fn new(genes: Vec<G>) -> Self {
        Self { genes }
    }

    /// Returns genes.
    pub fn genes(&self) -> &[G] {
        self.genes.as_slice()
    }

    /// Returns amount of genes.
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    /// Returns true if individual has no genes.
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Returns gene at given position.
    pub fn get(&self, index: usize) -> Option<&G> {
        self.genes.get(index)
    }

    /// Sets gene at given position.
    pub fn set(&mut self, index: usize, gene: G) {
        self.genes[index] = gene;
    }

    /// Swaps two genes.
    pub fn swap(&mut self, i: usize, j: usize) {
        self.genes.swap(i, j)
    }

    /// Expands individual into a sequence which starts and ends with a given bound gene.
    pub fn render(&self, bound: &G) -> Vec<G> {
        let mut rendered = Vec::with_capacity(self.genes.len() + 2);
        rendered.push(bound.clone());
        rendered.extend(self.genes.iter().cloned());
        rendered.push(bound.clone());

        rendered
    }

    /// Consumes individual and returns its genes.
    pub fn into_genes(self) -> Vec<G> {
        self.genes
    }
}

impl<G: Gene> From<Vec<G>> for Individual<G> {
    fn from(genes: Vec<G>) -> Self {
        Self::new(genes)
    }
}
