//! Per-domain bookkeeping of the constraints to wake when the domain changes.
//!
//! Constraints posted with the model live in the [`ModelRegistry`] for the whole solve, split by
//! the [`crate::domains::ConstraintEvent`] they wait for. Constraints local to a search node live
//! in the [`SearchRegistry`], which trades a stable order for constant-time activation and
//! deactivation.
mod model_registry;
mod search_registry;

use std::fmt::Display;
use std::fmt::Formatter;

pub use model_registry::ModelRegistry;
pub use search_registry::SearchRegistry;

/// Identifies a constraint to the registries; the propagation engine uses the index of the
/// propagator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ConstraintId(pub u32);

impl ConstraintId {
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

impl Display for ConstraintId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "c{}", self.0)
    }
}
