use std::fmt::{Debug, Formatter};
use std::sync::Arc;

/// A predicate function over a sequence of genes.
pub type ConstraintFn<G> = Arc<dyn Fn(&[G]) -> bool + Send + Sync>;

/// A named feasibility predicate. Evaluation is total: it always returns a boolean.
pub struct Constraint<G> {
    name: String,
    predicate: ConstraintFn<G>,
}

impl<G> Constraint<G> {
    /// Creates a new instance of `Constraint`.
    pub fn new<F>(name: &str, predicate: F) -> Self
    where
        F: Fn(&[G]) -> bool + Send + Sync + 'static,
    {
        Self { name: name.to_string(), predicate: Arc::new(predicate) }
    }

    /// Returns constraint name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns true if sequence satisfies the constraint.
    pub fn is_satisfied(&self, sequence: &[G]) -> bool {
        (self.predicate)(sequence)
    }
}

impl<G> Clone for Constraint<G> {
    fn clone(&self) -> Self {
        Self { name: self.name.clone(), predicate: self.predicate.clone() }
    }
}

impl<G> Debug for Constraint<G> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Constraint").field("name", &self.name).finish()
    }
}
