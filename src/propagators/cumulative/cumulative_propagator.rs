use log::trace;

use super::TaskNormalView;
use crate::basic_types::DomainValue;
use crate::basic_types::EmptyDomain;
use crate::basic_types::PropagationStatus;
use crate::domains::ConstraintEvent;
use crate::engine::propagation::PropagationContextMut;
use crate::engine::propagation::Propagator;
use crate::engine::propagation::PropagatorInitialisationContext;
use crate::engine::propagation::ReadDomains;
use crate::math::interval_arithmetic::saturating_add;
use crate::math::interval_arithmetic::saturating_mul;
use crate::math::interval_arithmetic::saturating_sub;

/// Propagator for a renewable resource of fixed `capacity` shared by `tasks`.
///
/// It checks every time window between an earliest start and a latest completion for overload,
/// and applies edge finding, detectable precedences and not-first/not-last reasoning to every
/// pair of tasks that can never run at the same time.
#[derive(Clone, Debug)]
pub struct CumulativePropagator<V> {
    tasks: Box<[TaskNormalView]>,
    capacity: V,
}

impl<V> CumulativePropagator<V> {
    pub fn new(tasks: Box<[TaskNormalView]>, capacity: V) -> Self {
        CumulativePropagator { tasks, capacity }
    }
}

impl<V: DomainValue> CumulativePropagator<V> {
    fn check_overload(&self, context: &PropagationContextMut<'_, V>) -> PropagationStatus {
        for window_start in self.tasks.iter() {
            let est = window_start.est(context);

            for window_end in self.tasks.iter() {
                let lct = window_end.lct(context);
                if lct <= est {
                    continue;
                }

                let energy = self
                    .tasks
                    .iter()
                    .filter(|task| task.est(context) >= est && task.lct(context) <= lct)
                    .fold(V::zero(), |energy, task| {
                        saturating_add(&energy, &task.energy(context))
                    });
                let available = saturating_mul(&self.capacity, &saturating_sub(&lct, &est));

                if energy > available {
                    trace!("overload of {energy} in window [{est}, {lct})");
                    return Err(EmptyDomain);
                }
            }
        }

        Ok(())
    }

    /// Whether `first` and `second` occupy the resource for a positive duration and together
    /// need more than the capacity.
    fn is_disjoint_pair(
        &self,
        context: &PropagationContextMut<'_, V>,
        first: &TaskNormalView,
        second: &TaskNormalView,
    ) -> bool {
        context.lower_bound(first.duration()).is_positive()
            && context.lower_bound(second.duration()).is_positive()
            && saturating_add(
                context.lower_bound(first.resource()),
                context.lower_bound(second.resource()),
            ) > self.capacity
    }
}

impl<V: DomainValue> Propagator<V> for CumulativePropagator<V> {
    fn name(&self) -> &str {
        "Cumulative"
    }

    fn initialise_at_root(
        &mut self,
        context: &mut PropagatorInitialisationContext<'_, V>,
    ) -> PropagationStatus {
        for task in self.tasks.iter() {
            let _ = context.register(task.start(), ConstraintEvent::Bound);
            let _ = context.register(task.duration(), ConstraintEvent::Bound);
            let _ = context.register(task.resource(), ConstraintEvent::Bound);
        }
        Ok(())
    }

    fn propagate(&self, mut context: PropagationContextMut<'_, V>) -> PropagationStatus {
        self.check_overload(&context)?;

        for task in self.tasks.iter() {
            for other in self.tasks.iter().filter(|&other| other != task) {
                if !self.is_disjoint_pair(&context, task, other) {
                    continue;
                }

                // `task` cannot precede `other` when both do not fit before `other` completes.
                let both = saturating_add(
                    context.lower_bound(task.duration()),
                    context.lower_bound(other.duration()),
                );
                let earliest = task.est(&context).min(other.est(&context));
                if saturating_add(&earliest, &both) > other.lct(&context) {
                    let ect = other.ect(&context);
                    let _ = task.update_edge_find(&mut context, &ect)?;
                }

                if task.ect(&context) > other.lst(&context) {
                    let ect = other.ect(&context);
                    let _ = task.update_detectable(&mut context, &ect)?;
                }

                if other.ect(&context) > task.lst(&context) {
                    let lst = other.lst(&context);
                    let _ = task.update_not_first_not_last(&mut context, &lst)?;
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::CumulativePropagator;
    use crate::basic_types::EmptyDomain;
    use crate::engine::propagation::PropagationEngine;
    use crate::engine::DomainId;
    use crate::propagators::TaskNormalView;

    fn fixed_task(
        engine: &mut PropagationEngine<i32>,
        start: (i32, i32),
        duration: i32,
        resource: i32,
    ) -> TaskNormalView {
        let store = engine.store_mut();
        let start = store.new_variable(start.0, start.1);
        let duration = store.new_variable(duration, duration);
        let resource = store.new_variable(resource, resource);
        TaskNormalView::new(start, duration, resource)
    }

    fn start_bounds(engine: &PropagationEngine<i32>, start: DomainId) -> (i32, i32) {
        engine.store().bounds(start).into_bounds()
    }

    #[test]
    fn disjoint_tasks_are_pushed_apart() {
        let mut engine = PropagationEngine::default();
        let early = fixed_task(&mut engine, (0, 2), 5, 2);
        let late = fixed_task(&mut engine, (0, 10), 3, 2);

        let _ = engine
            .add_propagator(CumulativePropagator::new([early, late].into(), 3))
            .expect("no empty domain");

        // `late` cannot run first and still leave room for `early` before its deadline.
        assert_eq!(start_bounds(&engine, early.start()), (0, 2));
        assert_eq!(start_bounds(&engine, late.start()), (5, 10));
    }

    #[test]
    fn tasks_fitting_together_are_left_alone() {
        let mut engine = PropagationEngine::default();
        let first = fixed_task(&mut engine, (0, 2), 5, 1);
        let second = fixed_task(&mut engine, (0, 10), 3, 2);

        let _ = engine
            .add_propagator(CumulativePropagator::new([first, second].into(), 3))
            .expect("no empty domain");

        assert_eq!(start_bounds(&engine, second.start()), (0, 10));
    }

    #[test]
    fn overloaded_window_fails() {
        let mut engine = PropagationEngine::default();
        let tasks: Box<[TaskNormalView]> = (0..5)
            .map(|_| fixed_task(&mut engine, (0, 1), 3, 1))
            .collect();

        let result = engine.add_propagator(CumulativePropagator::new(tasks, 3));

        assert_eq!(result, Err(EmptyDomain));
    }

    #[test]
    fn deadline_pulls_the_first_task_forward() {
        let mut engine = PropagationEngine::default();
        let first = fixed_task(&mut engine, (0, 4), 2, 2);
        let second = fixed_task(&mut engine, (3, 4), 2, 2);

        let _ = engine
            .add_propagator(CumulativePropagator::new([first, second].into(), 3))
            .expect("no empty domain");

        // `first` cannot fit after `second` and must complete by the latest start of `second`.
        assert_eq!(start_bounds(&engine, second.start()), (3, 4));
        assert_eq!(start_bounds(&engine, first.start()), (0, 2));
    }

    #[test]
    fn long_horizon_with_large_capacity_is_left_alone() {
        let mut engine = PropagationEngine::default();
        let first = fixed_task(&mut engine, (0, 1_000_000), 5, 1);
        let second = fixed_task(&mut engine, (0, 1_000_000), 5, 1);

        let _ = engine
            .add_propagator(CumulativePropagator::new([first, second].into(), 10_000))
            .expect("no empty domain");

        assert_eq!(start_bounds(&engine, first.start()), (0, 1_000_000));
        assert_eq!(start_bounds(&engine, second.start()), (0, 1_000_000));
    }

    #[test]
    fn overload_is_found_with_saturated_energy() {
        let mut engine = PropagationEngine::default();
        let tasks: Box<[TaskNormalView]> = (0..2)
            .map(|_| fixed_task(&mut engine, (0, 0), 100_000, 100_000))
            .collect();

        // Each task alone needs more energy than the universe holds; the window is too small.
        let result = engine.add_propagator(CumulativePropagator::new(tasks, 1_000));

        assert_eq!(result, Err(EmptyDomain));
    }
}
