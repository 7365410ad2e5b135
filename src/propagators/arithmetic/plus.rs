use crate::basic_types::DomainValue;
use crate::basic_types::PropagationStatus;
use crate::domains::ConstraintEvent;
use crate::engine::propagation::PropagationContextMut;
use crate::engine::propagation::Propagator;
use crate::engine::propagation::PropagatorInitialisationContext;
use crate::engine::propagation::ReadDomains;
use crate::engine::DomainId;
use crate::math::add;
use crate::math::subtract;

/// Bounds propagator for `x + y = z`.
#[derive(Clone, Copy, Debug)]
pub struct PlusPropagator {
    x: DomainId,
    y: DomainId,
    z: DomainId,
}

impl PlusPropagator {
    pub fn new(x: DomainId, y: DomainId, z: DomainId) -> Self {
        PlusPropagator { x, y, z }
    }
}

impl<V: DomainValue> Propagator<V> for PlusPropagator {
    fn name(&self) -> &str {
        "Plus"
    }

    fn initialise_at_root(
        &mut self,
        context: &mut PropagatorInitialisationContext<'_, V>,
    ) -> PropagationStatus {
        for variable in [self.x, self.y, self.z] {
            let _ = context.register(variable, ConstraintEvent::Bound);
        }
        Ok(())
    }

    fn propagate(&self, mut context: PropagationContextMut<'_, V>) -> PropagationStatus {
        let x = context.bounds(self.x);
        let y = context.bounds(self.y);
        let _ = context.narrow_to_interval(self.z, &add(&x, &y))?;

        let z = context.bounds(self.z);
        let _ = context.narrow_to_interval(self.x, &subtract(&z, &y))?;

        let x = context.bounds(self.x);
        let _ = context.narrow_to_interval(self.y, &subtract(&z, &x))?;

        Ok(())
    }
}
