use std::fmt::Debug;
use std::fmt::Formatter;

use log::warn;

use crate::basic_types::DomainValue;
use crate::engine::propagation::PropagationContextMut;
use crate::engine::propagation::Propagator;
use crate::engine::DomainStore;

#[derive(Copy, Clone)]
pub(crate) struct DebugDyn<'a> {
    trait_name: &'a str,
}

impl<'a> DebugDyn<'a> {
    pub(crate) fn from(trait_name: &'a str) -> Self {
        DebugDyn { trait_name }
    }
}

impl Debug for DebugDyn<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "<dyn {}>", self.trait_name)
    }
}

#[derive(Debug, Copy, Clone)]
pub(crate) struct DebugHelper {}

impl DebugHelper {
    /// Only to be called after propagation reached a fixed point without failure. Every
    /// propagator runs once more; at a fixed point none of them may change a domain or fail.
    pub(crate) fn debug_fixed_point_propagation<V: DomainValue>(
        store: &mut DomainStore<V>,
        propagators: &[Box<dyn Propagator<V>>],
    ) -> bool {
        let mut at_fixed_point = true;

        for (index, propagator) in propagators.iter().enumerate() {
            let status = propagator.propagate(PropagationContextMut::new(store));

            if status.is_err() {
                warn!(
                    "Propagator '{}' with id 'c{index}' missed a failure in its regular propagation",
                    propagator.name()
                );
                at_fixed_point = false;
            } else if store.has_woken() {
                warn!(
                    "Propagator '{}' with id 'c{index}' missed {} propagations",
                    propagator.name(),
                    store.woken_count()
                );
                at_fixed_point = false;
            }

            store.clear_woken();
        }

        at_fixed_point
    }
}
