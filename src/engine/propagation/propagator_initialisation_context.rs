use super::HasStore;
#[cfg(doc)]
use super::Propagator;
use crate::basic_types::DomainValue;
use crate::domains::ConstraintEvent;
use crate::engine::ConstraintId;
use crate::engine::DomainId;
use crate::engine::DomainStore;

/// [`PropagatorInitialisationContext`] is used when [`Propagator`]s are initialised after
/// creation.
///
/// It represents a communication point between the engine and the [`Propagator`]. Propagators
/// use the [`PropagatorInitialisationContext`] to register to domain changes of variables and to
/// retrieve the current bounds of variables.
#[derive(Debug)]
pub struct PropagatorInitialisationContext<'a, V> {
    store: &'a mut DomainStore<V>,
    constraint: ConstraintId,
    registrations: usize,
}

impl<'a, V: DomainValue> PropagatorInitialisationContext<'a, V> {
    pub(crate) fn new(store: &'a mut DomainStore<V>, constraint: ConstraintId) -> Self {
        PropagatorInitialisationContext {
            store,
            constraint,
            registrations: 0,
        }
    }

    /// Subscribes the propagator to changes of `variable` which include `event`.
    pub fn register(&mut self, variable: DomainId, event: ConstraintEvent) -> DomainId {
        let _ = self
            .store
            .put_model_constraint(variable, self.constraint, event);
        self.registrations += 1;

        variable
    }

    /// The identifier the propagator is registered under.
    pub fn constraint(&self) -> ConstraintId {
        self.constraint
    }

    pub(crate) fn registrations(&self) -> usize {
        self.registrations
    }
}

impl<V> HasStore<V> for PropagatorInitialisationContext<'_, V> {
    fn store(&self) -> &DomainStore<V> {
        &*self.store
    }
}
