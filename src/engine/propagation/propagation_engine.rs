use std::fmt::Debug;
use std::fmt::Formatter;

use log::trace;
use log::warn;

use super::PropagationContextMut;
use super::Propagator;
use super::PropagatorInitialisationContext;
use crate::basic_types::DomainValue;
use crate::basic_types::EmptyDomain;
use crate::basic_types::PropagationStatus;
use crate::engine::debug_helper::DebugDyn;
use crate::engine::ConstraintId;
use crate::engine::DebugHelper;
use crate::engine::DomainStore;
use crate::engine::DomainStoreOptions;
use crate::munchkin_assert_extreme;
use crate::munchkin_assert_simple;

/// Owns the [`DomainStore`] and the propagators posted on it, and runs the propagators woken by
/// domain changes until none is left.
///
/// The identifier of a propagator in the registries is its position in the engine, so
/// propagators can only be added, never removed.
pub struct PropagationEngine<V> {
    store: DomainStore<V>,
    propagators: Vec<Box<dyn Propagator<V>>>,
}

impl<V: DomainValue> Debug for PropagationEngine<V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let propagators: Vec<_> = self
            .propagators
            .iter()
            .map(|_| DebugDyn::from("Propagator"))
            .collect();
        f.debug_struct("PropagationEngine")
            .field("store", &self.store)
            .field("propagators", &propagators)
            .finish()
    }
}

impl<V: DomainValue> Default for PropagationEngine<V> {
    fn default() -> Self {
        PropagationEngine::new(DomainStoreOptions::default())
    }
}

impl<V: DomainValue> PropagationEngine<V> {
    pub fn new(options: DomainStoreOptions) -> Self {
        PropagationEngine {
            store: DomainStore::new(options),
            propagators: Vec::new(),
        }
    }

    pub fn store(&self) -> &DomainStore<V> {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut DomainStore<V> {
        &mut self.store
    }

    pub fn num_propagators(&self) -> usize {
        self.propagators.len()
    }

    /// Post `propagator` at the root and propagate to a fixed point.
    ///
    /// Fails if the propagator, or any propagator it wakes, empties a domain.
    pub fn add_propagator(
        &mut self,
        propagator: impl Propagator<V> + 'static,
    ) -> Result<ConstraintId, EmptyDomain> {
        munchkin_assert_simple!(
            self.store.level() == 0,
            "propagators can only be added at the root"
        );

        let constraint = ConstraintId(self.propagators.len() as u32);
        let mut propagator = Box::new(propagator);

        let mut context = PropagatorInitialisationContext::new(&mut self.store, constraint);
        let initialisation = propagator.initialise_at_root(&mut context);
        if context.registrations() == 0 {
            warn!(
                "Propagator '{}' registers no variables and is never woken",
                propagator.name()
            );
        }

        self.propagators.push(propagator);
        initialisation?;

        self.propagate_constraint(constraint)?;
        self.propagate()?;
        Ok(constraint)
    }

    /// Run woken propagators until the queue is empty.
    ///
    /// On failure the queue is cleared; the caller is expected to backtrack.
    pub fn propagate(&mut self) -> PropagationStatus {
        while let Some(constraint) = self.store.pop_woken() {
            self.propagate_constraint(constraint)?;
        }

        munchkin_assert_extreme!(DebugHelper::debug_fixed_point_propagation(
            &mut self.store,
            &self.propagators
        ));
        Ok(())
    }

    pub fn level(&self) -> usize {
        self.store.level()
    }

    pub fn increase_level(&mut self) {
        self.store.increase_level();
    }

    pub fn backtrack_to(&mut self, level: usize) {
        self.store.backtrack_to(level);
    }

    fn propagate_constraint(&mut self, constraint: ConstraintId) -> PropagationStatus {
        let propagator = &self.propagators[constraint.index()];
        let status = propagator.propagate(PropagationContextMut::new(&mut self.store));

        if status.is_err() {
            trace!(
                "propagator '{}' ({constraint}) failed at level {}",
                propagator.name(),
                self.store.level()
            );
            self.store.clear_woken();
        }

        status
    }
}
