use crate::basic_types::DomainValue;
use crate::basic_types::PropagationStatus;
use crate::domains::ConstraintEvent;
use crate::engine::propagation::PropagationContextMut;
use crate::engine::propagation::Propagator;
use crate::engine::propagation::PropagatorInitialisationContext;
use crate::engine::DomainId;

/// Propagator for `x < c`.
#[derive(Clone, Debug)]
pub struct LessThanConstantPropagator<V> {
    x: DomainId,
    bound: V,
}

impl<V> LessThanConstantPropagator<V> {
    pub fn new(x: DomainId, bound: V) -> Self {
        LessThanConstantPropagator { x, bound }
    }
}

impl<V: DomainValue> Propagator<V> for LessThanConstantPropagator<V> {
    fn name(&self) -> &str {
        "LessThanConstant"
    }

    fn initialise_at_root(
        &mut self,
        context: &mut PropagatorInitialisationContext<'_, V>,
    ) -> PropagationStatus {
        let _ = context.register(self.x, ConstraintEvent::Bound);
        Ok(())
    }

    fn propagate(&self, mut context: PropagationContextMut<'_, V>) -> PropagationStatus {
        let _ = context.narrow_max(self.x, &self.bound.predecessor())?;
        Ok(())
    }
}

/// Propagator for `x > c`.
#[derive(Clone, Debug)]
pub struct GreaterThanConstantPropagator<V> {
    x: DomainId,
    bound: V,
}

impl<V> GreaterThanConstantPropagator<V> {
    pub fn new(x: DomainId, bound: V) -> Self {
        GreaterThanConstantPropagator { x, bound }
    }
}

impl<V: DomainValue> Propagator<V> for GreaterThanConstantPropagator<V> {
    fn name(&self) -> &str {
        "GreaterThanConstant"
    }

    fn initialise_at_root(
        &mut self,
        context: &mut PropagatorInitialisationContext<'_, V>,
    ) -> PropagationStatus {
        let _ = context.register(self.x, ConstraintEvent::Bound);
        Ok(())
    }

    fn propagate(&self, mut context: PropagationContextMut<'_, V>) -> PropagationStatus {
        let _ = context.narrow_min(self.x, &self.bound.successor())?;
        Ok(())
    }
}
