use crate::basic_types::DomainValue;
use crate::basic_types::PropagationStatus;
use crate::domains::ConstraintEvent;
use crate::engine::propagation::PropagationContextMut;
use crate::engine::propagation::Propagator;
use crate::engine::propagation::PropagatorInitialisationContext;
use crate::engine::DomainId;

/// Propagator for `x != c`. Removing a value strictly inside the domain only punches a hole, so
/// this is the propagator which produces [`crate::domains::PruningEvent::Any`] changes.
#[derive(Clone, Debug)]
pub struct NotEqualConstantPropagator<V> {
    x: DomainId,
    excluded: V,
}

impl<V> NotEqualConstantPropagator<V> {
    pub fn new(x: DomainId, excluded: V) -> Self {
        NotEqualConstantPropagator { x, excluded }
    }
}

impl<V: DomainValue> Propagator<V> for NotEqualConstantPropagator<V> {
    fn name(&self) -> &str {
        "NotEqualConstant"
    }

    fn initialise_at_root(
        &mut self,
        context: &mut PropagatorInitialisationContext<'_, V>,
    ) -> PropagationStatus {
        let _ = context.register(self.x, ConstraintEvent::Ground);
        Ok(())
    }

    fn propagate(&self, mut context: PropagationContextMut<'_, V>) -> PropagationStatus {
        let _ = context.narrow_excluding(self.x, &self.excluded, &self.excluded)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::NotEqualConstantPropagator;
    use crate::basic_types::EmptyDomain;
    use crate::domains::Domain;
    use crate::engine::propagation::PropagationEngine;

    #[test]
    fn value_is_removed_from_the_interior() {
        let mut engine = PropagationEngine::<i32>::default();
        let x = engine.store_mut().new_variable(1, 10);

        let _ = engine
            .add_propagator(NotEqualConstantPropagator::new(x, 5))
            .expect("no empty domain");

        assert_eq!(
            engine.store().domain(x),
            &Domain::sparse([1, 2, 3, 4, 6, 7, 8, 9, 10])
        );
        assert_eq!(engine.store().bounds(x).into_bounds(), (1, 10));
    }

    #[test]
    fn removing_the_only_value_fails() {
        let mut engine = PropagationEngine::<i32>::default();
        let x = engine.store_mut().new_variable(4, 4);

        let result = engine.add_propagator(NotEqualConstantPropagator::new(x, 4));

        assert_eq!(result, Err(EmptyDomain));
    }
}
