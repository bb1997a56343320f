//! Contains constraint based selection: individuals survive when their rendered sequence
//! satisfies every constraint.

#[cfg(test)]
#[path = "../../tests/unit/selection/selection_test.rs"]
mod selection_test;

mod constraint;
pub use self::constraint::Constraint;

use crate::genotype::{Gene, Individual};
use crate::utils::parallel_collect;

/// Selects individuals which satisfy all constraints (logical AND), preserving input order.
pub struct Selection<G: Gene> {
    constraints: Vec<Constraint<G>>,
    bound: Option<G>,
}

impl<G: Gene> Selection<G> {
    /// Creates a new instance of `Selection` which passes raw genes to constraints.
    pub fn new(constraints: Vec<Constraint<G>>) -> Self {
        Self { constraints, bound: None }
    }

    /// Sets a bound gene: constraints receive individuals rendered as `[bound] + genes + [bound]`.
    pub fn with_bound(mut self, bound: Option<G>) -> Self {
        self.bound = bound;
        self
    }

    /// Adds a constraint.
    pub fn add_constraint(&mut self, constraint: Constraint<G>) {
        self.constraints.push(constraint);
    }

    /// Returns constraints.
    pub fn constraints(&self) -> &[Constraint<G>] {
        self.constraints.as_slice()
    }

    /// Checks whether a single individual satisfies all constraints.
    pub fn is_feasible(&self, individual: &Individual<G>) -> bool {
        if self.constraints.is_empty() {
            return true;
        }

        match &self.bound {
            Some(bound) => {
                let rendered = individual.render(bound);
                self.constraints.iter().all(|constraint| constraint.is_satisfied(rendered.as_slice()))
            }
            None => self.constraints.iter().all(|constraint| constraint.is_satisfied(individual.genes())),
        }
    }

    /// Evaluates feasibility of every individual in parallel. Result order matches input order.
    pub fn feasibility(&self, individuals: &[Individual<G>]) -> Vec<bool> {
        parallel_collect(individuals, |individual| self.is_feasible(individual))
    }

    /// Returns the ordered subsequence of individuals satisfying every constraint.
    pub fn evaluate(&self, individuals: &[Individual<G>]) -> Vec<Individual<G>> {
        individuals
            .iter()
            .zip(self.feasibility(individuals))
            .filter(|(_, is_feasible)| *is_feasible)
            .map(|(individual, _)| individual.clone())
            .collect()
    }
}
