use log::trace;

use crate::basic_types::DomainValue;
use crate::basic_types::PropagationStatus;
use crate::domains::ConstraintEvent;
use crate::engine::propagation::PropagationContextMut;
use crate::engine::propagation::Propagator;
use crate::engine::propagation::PropagatorInitialisationContext;
use crate::engine::propagation::ReadDomains;
use crate::engine::DomainId;
use crate::math::divide_inverse_bounds;
use crate::math::multiply;

/// Bounds propagator for `x * y = z`.
///
/// The factors are narrowed with the multiplicative-inverse division, which only keeps the
/// integers `q` for which `q * y = z` can hold.
#[derive(Clone, Copy, Debug)]
pub struct TimesPropagator {
    x: DomainId,
    y: DomainId,
    z: DomainId,
}

impl TimesPropagator {
    pub fn new(x: DomainId, y: DomainId, z: DomainId) -> Self {
        TimesPropagator { x, y, z }
    }
}

impl<V: DomainValue> Propagator<V> for TimesPropagator {
    fn name(&self) -> &str {
        "Times"
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
        let _ = context.narrow_to_interval(self.z, &multiply(&x, &y))?;

        let z = context.bounds(self.z);
        let x_bounds = divide_inverse_bounds(&z, &y).inspect_err(|failure| {
            trace!("{} = {z} / {y}: {failure}", self.x);
        })?;
        let _ = context.narrow_to_interval(self.x, &x_bounds)?;

        let x = context.bounds(self.x);
        let y_bounds = divide_inverse_bounds(&z, &x).inspect_err(|failure| {
            trace!("{} = {z} / {x}: {failure}", self.y);
        })?;
        let _ = context.narrow_to_interval(self.y, &y_bounds)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::TimesPropagator;
    use crate::basic_types::EmptyDomain;
    use crate::engine::propagation::PropagationEngine;

    #[test]
    fn product_is_narrowed_to_the_corner_products() {
        let mut engine = PropagationEngine::<i32>::default();
        let x = engine.store_mut().new_variable(-2, 3);
        let y = engine.store_mut().new_variable(4, 5);
        let z = engine.store_mut().new_variable(-100, 100);

        let _ = engine
            .add_propagator(TimesPropagator::new(x, y, z))
            .expect("no empty domain");

        assert_eq!(engine.store().bounds(z).into_bounds(), (-10, 15));
    }

    #[test]
    fn factors_are_narrowed_by_division() {
        let mut engine = PropagationEngine::<i32>::default();
        let x = engine.store_mut().new_variable(1, 100);
        let y = engine.store_mut().new_variable(2, 3);
        let z = engine.store_mut().new_variable(12, 12);

        let _ = engine
            .add_propagator(TimesPropagator::new(x, y, z))
            .expect("no empty domain");

        assert_eq!(engine.store().bounds(x).into_bounds(), (4, 6));
    }

    #[test]
    fn product_without_integer_factor_fails() {
        let mut engine = PropagationEngine::<i32>::default();
        let x = engine.store_mut().new_variable(-10, 10);
        let y = engine.store_mut().new_variable(2, 2);
        let z = engine.store_mut().new_variable(5, 5);

        let result = engine.add_propagator(TimesPropagator::new(x, y, z));

        assert_eq!(result, Err(EmptyDomain));
    }

    #[test]
    fn zero_factor_forces_zero_product() {
        let mut engine = PropagationEngine::<i32>::default();
        let x = engine.store_mut().new_variable(0, 0);
        let y = engine.store_mut().new_variable(-5, 5);
        let z = engine.store_mut().new_variable(-20, 20);

        let _ = engine
            .add_propagator(TimesPropagator::new(x, y, z))
            .expect("no empty domain");

        assert_eq!(engine.store().value(z), Some(&0));
        assert_eq!(engine.store().bounds(y).into_bounds(), (-5, 5));
    }

    #[test]
    fn posting_the_same_product_twice_registers_both() {
        let mut engine = PropagationEngine::<i32>::default();
        let x = engine.store_mut().new_variable(1, 4);
        let y = engine.store_mut().new_variable(2, 3);
        let z = engine.store_mut().new_variable(0, 100);
        let times = TimesPropagator::new(x, y, z);

        let first = engine.add_propagator(times).expect("no empty domain");
        let second = engine.add_propagator(times).expect("no empty domain");

        assert_ne!(first, second);
        assert_eq!(engine.num_propagators(), 2);
        assert_eq!(engine.store().bounds(z).into_bounds(), (2, 12));
        assert_eq!(engine.store().versioned(z).constraint_count(), 2);
    }
}
