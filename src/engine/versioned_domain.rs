use std::rc::Rc;

use log::trace;

use super::registry::ConstraintId;
use super::registry::ModelRegistry;
use super::registry::SearchRegistry;
use super::DomainId;
use crate::basic_types::DomainValue;
use crate::basic_types::EmptyDomain;
use crate::domains::ConstraintEvent;
use crate::domains::Domain;
use crate::domains::PruningEvent;
use crate::munchkin_assert_moderate;
use crate::munchkin_assert_simple;

/// The history of the domain of one variable across backtracking levels.
///
/// The handle always holds the newest version. A mutating call at a level above the stamp of the
/// newest version first forks: the current version moves into the chain of predecessors and a new
/// version stamped with that level takes its place. Versions in the chain are never mutated, so
/// [`VersionedDomain::restore_to`] only has to pop them back.
///
/// The registries are shared between versions behind [`Rc`] and copied on the first mutation
/// after a fork.
#[derive(Debug)]
pub struct VersionedDomain<V> {
    variable: DomainId,
    values: Domain<V>,
    stamp: usize,
    model: Rc<ModelRegistry>,
    search: Rc<SearchRegistry>,
    previous: Option<Box<VersionedDomain<V>>>,
}

impl<V: DomainValue> VersionedDomain<V> {
    /// The root version of `variable`, stamped with level 0.
    pub fn new(variable: DomainId, values: Domain<V>) -> Self {
        munchkin_assert_simple!(
            !values.is_empty(),
            "variable {variable} cannot start with an empty domain"
        );

        VersionedDomain {
            variable,
            values,
            stamp: 0,
            model: Rc::default(),
            search: Rc::default(),
            previous: None,
        }
    }

    pub fn variable(&self) -> DomainId {
        self.variable
    }

    /// The level at which the current version was created.
    pub fn stamp(&self) -> usize {
        self.stamp
    }

    pub fn values(&self) -> &Domain<V> {
        &self.values
    }

    /// The version this one was forked from.
    pub fn previous(&self) -> Option<&VersionedDomain<V>> {
        self.previous.as_deref()
    }

    /// The number of versions in the chain, the current one included.
    pub fn version_count(&self) -> usize {
        std::iter::successors(Some(self), |version| version.previous()).count()
    }

    /// The values removed at `level`: what the predecessor has and the current version lacks,
    /// provided the current version was created at `level` or later.
    pub fn recent_pruning(&self, level: usize) -> Domain<V> {
        match &self.previous {
            Some(previous) if self.stamp >= level => previous.values.subtract(&self.values),
            _ => self.values.empty_like(),
        }
    }

    pub fn model_registry(&self) -> &ModelRegistry {
        &self.model
    }

    pub fn search_registry(&self) -> &SearchRegistry {
        &self.search
    }

    /// Keep only the values in `[lo, hi]`.
    pub fn narrow_to(&mut self, level: usize, lo: &V, hi: &V) -> Result<PruningEvent, EmptyDomain> {
        if lo > hi {
            trace!("{}: empty range [{lo}, {hi}]", self.variable);
            return Err(EmptyDomain);
        }
        if self.values.min().is_some_and(|min| lo <= min)
            && self.values.max().is_some_and(|max| max <= hi)
        {
            self.assert_level(level);
            return Ok(PruningEvent::None);
        }

        let narrowed = self.values.intersect_range(lo, hi);
        self.install(level, narrowed)
    }

    /// Remove every value below `lo`.
    pub fn narrow_min(&mut self, level: usize, lo: &V) -> Result<PruningEvent, EmptyDomain> {
        match self.values.max().cloned() {
            Some(max) => self.narrow_to(level, lo, &max),
            None => Err(EmptyDomain),
        }
    }

    /// Remove every value above `hi`.
    pub fn narrow_max(&mut self, level: usize, hi: &V) -> Result<PruningEvent, EmptyDomain> {
        match self.values.min().cloned() {
            Some(min) => self.narrow_to(level, &min, hi),
            None => Err(EmptyDomain),
        }
    }

    /// Remove every value in `[lo, hi]`.
    pub fn narrow_excluding(
        &mut self,
        level: usize,
        lo: &V,
        hi: &V,
    ) -> Result<PruningEvent, EmptyDomain> {
        if !self.values.intersects_range(lo, hi) {
            self.assert_level(level);
            return Ok(PruningEvent::None);
        }

        let narrowed = self.values.subtract_range(lo, hi);
        self.install(level, narrowed)
    }

    /// Fix the domain to `value`.
    pub fn narrow_to_value(&mut self, level: usize, value: &V) -> Result<PruningEvent, EmptyDomain> {
        self.narrow_to(level, value, value)
    }

    /// Keep only the values which are also in `domain`.
    pub fn narrow_to_domain(
        &mut self,
        level: usize,
        domain: &Domain<V>,
    ) -> Result<PruningEvent, EmptyDomain> {
        self.narrow_to_shifted_domain(level, domain, &V::zero())
    }

    /// Keep only the values `v` for which `v - shift` is in `domain`.
    pub fn narrow_to_shifted_domain(
        &mut self,
        level: usize,
        domain: &Domain<V>,
        shift: &V,
    ) -> Result<PruningEvent, EmptyDomain> {
        let narrowed = if shift.is_zero() {
            self.values.intersect(domain)
        } else {
            self.values.intersect(&domain.shifted(shift))
        };
        self.install(level, narrowed)
    }

    /// Wake `constraint` whenever a change includes `event`. Returns false if it already was
    /// registered for `event`.
    pub fn put_model_constraint(
        &mut self,
        level: usize,
        constraint: ConstraintId,
        event: ConstraintEvent,
    ) -> bool {
        if self.model.constraints(event).contains(&constraint) {
            return false;
        }

        self.prepare_for_level(level);
        Rc::make_mut(&mut self.model).put(constraint, event)
    }

    pub fn remove_model_constraint(
        &mut self,
        level: usize,
        constraint: ConstraintId,
    ) -> Option<ConstraintEvent> {
        if !self.model.contains(constraint) {
            return None;
        }

        self.prepare_for_level(level);
        Rc::make_mut(&mut self.model).remove(constraint)
    }

    /// Activate `constraint` for the current search node. Returns false if it already was active.
    pub fn put_search_constraint(&mut self, level: usize, constraint: ConstraintId) -> bool {
        if self.search.is_active(constraint) {
            return false;
        }

        self.prepare_for_level(level);
        Rc::make_mut(&mut self.search).activate(constraint)
    }

    /// Park `constraint`. Returns false if it was not active.
    pub fn remove_search_constraint(&mut self, level: usize, constraint: ConstraintId) -> bool {
        if !self.search.is_active(constraint) {
            return false;
        }

        self.prepare_for_level(level);
        Rc::make_mut(&mut self.search).deactivate(constraint)
    }

    /// Park the active search constraint at `position`.
    pub fn remove_search_constraint_at(&mut self, level: usize, position: usize) {
        self.prepare_for_level(level);
        Rc::make_mut(&mut self.search).deactivate_at(position)
    }

    /// The constraints to wake after a change classified as `event`: the model constraints of
    /// every included event, then the active search constraints.
    pub fn constraints_to_wake(
        &self,
        event: PruningEvent,
    ) -> impl Iterator<Item = ConstraintId> + '_ {
        let search = if event.is_change() {
            self.search.active()
        } else {
            &[]
        };

        event
            .included_events()
            .iter()
            .flat_map(|included| self.model.constraints(included).iter().copied())
            .chain(search.iter().copied())
    }

    /// The number of registered model constraints plus the number of active search constraints.
    pub fn constraint_count(&self) -> usize {
        self.model.len() + self.search.active_count()
    }

    /// Drop every version created above `level`. Returns the number of dropped versions.
    pub fn restore_to(&mut self, level: usize) -> usize {
        let mut dropped = 0;
        while self.stamp > level {
            let Some(previous) = self.previous.take() else {
                break;
            };
            *self = *previous;
            dropped += 1;
        }

        munchkin_assert_moderate!(self.stamp <= level);
        dropped
    }

    fn assert_level(&self, level: usize) {
        munchkin_assert_simple!(
            self.stamp <= level,
            "{} was changed at level {} and cannot be changed at level {level}",
            self.variable,
            self.stamp
        );
    }

    fn install(&mut self, level: usize, narrowed: Domain<V>) -> Result<PruningEvent, EmptyDomain> {
        self.assert_level(level);

        if narrowed.is_empty() {
            trace!("{}: narrowing {} left no values", self.variable, self.values);
            return Err(EmptyDomain);
        }

        let event = PruningEvent::between(&self.values, &narrowed);
        if !event.is_change() {
            return Ok(event);
        }

        if self.stamp < level {
            self.fork(level, narrowed);
        } else {
            self.values = narrowed;
        }

        munchkin_assert_moderate!(self.values.is_consistent());
        Ok(event)
    }

    fn prepare_for_level(&mut self, level: usize) {
        self.assert_level(level);

        if self.stamp < level {
            let values = self.values.clone();
            self.fork(level, values);
        }
    }

    /// Push the current version onto the chain and continue with `values` stamped at `level`.
    fn fork(&mut self, level: usize, values: Domain<V>) {
        trace!(
            "{}: fork at level {level}, predecessor stamped {}",
            self.variable,
            self.stamp
        );

        let successor = VersionedDomain {
            variable: self.variable,
            values,
            stamp: level,
            model: Rc::clone(&self.model),
            search: Rc::clone(&self.search),
            previous: None,
        };
        let previous = std::mem::replace(self, successor);
        self.previous = Some(Box::new(previous));
    }
}

impl<V> Drop for VersionedDomain<V> {
    fn drop(&mut self) {
        // Unlink the chain first so that a long history does not drop recursively.
        let mut previous = self.previous.take();
        while let Some(mut version) = previous {
            previous = version.previous.take();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::VersionedDomain;
    use crate::basic_types::EmptyDomain;
    use crate::domains::ConstraintEvent;
    use crate::domains::Domain;
    use crate::domains::PruningEvent;
    use crate::engine::ConstraintId;
    use crate::engine::DomainId;

    fn versioned(lo: i32, hi: i32) -> VersionedDomain<i32> {
        VersionedDomain::new(DomainId::new(0), Domain::interval(lo, hi))
    }

    #[test]
    fn narrowing_at_the_stamp_mutates_in_place() {
        let mut domain = versioned(0, 10);

        assert_eq!(domain.narrow_min(0, &3), Ok(PruningEvent::Bound));

        assert_eq!(domain.version_count(), 1);
        assert_eq!(domain.values(), &Domain::interval(3, 10));
    }

    #[test]
    fn narrowing_at_a_higher_level_forks() {
        let mut domain = versioned(0, 10);

        assert_eq!(domain.narrow_max(2, &4), Ok(PruningEvent::Bound));

        assert_eq!(domain.stamp(), 2);
        assert_eq!(domain.version_count(), 2);
        assert_eq!(
            domain.previous().map(VersionedDomain::values),
            Some(&Domain::interval(0, 10))
        );
    }

    #[test]
    fn unchanged_narrowing_does_not_fork() {
        let mut domain = versioned(0, 10);

        assert_eq!(domain.narrow_to(3, &-5, &20), Ok(PruningEvent::None));
        assert_eq!(domain.narrow_excluding(3, &11, &15), Ok(PruningEvent::None));
        assert_eq!(domain.narrow_to_domain(3, &Domain::interval(0, 10)), Ok(PruningEvent::None));

        assert_eq!(domain.version_count(), 1);
    }

    #[test]
    fn failed_narrowing_leaves_the_domain_untouched() {
        let mut domain = versioned(0, 10);

        assert_eq!(domain.narrow_to(1, &11, &20), Err(EmptyDomain));
        assert_eq!(domain.narrow_to(1, &5, &4), Err(EmptyDomain));
        assert_eq!(domain.narrow_excluding(1, &0, &10), Err(EmptyDomain));

        assert_eq!(domain.values(), &Domain::interval(0, 10));
        assert_eq!(domain.version_count(), 1);
    }

    #[test]
    fn restore_pops_versions_above_the_level() {
        let mut domain = versioned(0, 10);
        let _ = domain.narrow_min(1, &2).expect("non-empty");
        let _ = domain.narrow_min(2, &4).expect("non-empty");
        let _ = domain.narrow_to_value(3, &7).expect("non-empty");

        assert_eq!(domain.restore_to(1), 2);

        assert_eq!(domain.stamp(), 1);
        assert_eq!(domain.values(), &Domain::interval(2, 10));
        assert_eq!(domain.values().size(), 9);
        assert_eq!(domain.restore_to(5), 0);
    }

    #[test]
    fn recent_pruning_is_the_difference_with_the_predecessor() {
        let mut domain = versioned(0, 10);
        let _ = domain.narrow_excluding(1, &3, &4).expect("non-empty");
        let _ = domain.narrow_max(1, &8).expect("non-empty");

        assert_eq!(domain.recent_pruning(1), Domain::sparse([3, 4, 9, 10]));
        assert!(domain.recent_pruning(2).is_empty());
    }

    #[test]
    fn narrowing_to_a_shifted_domain() {
        let mut domain = versioned(0, 10);

        let event = domain.narrow_to_shifted_domain(1, &Domain::interval(1, 4), &3);

        assert_eq!(event, Ok(PruningEvent::Bound));
        assert_eq!(domain.values(), &Domain::interval(4, 7));
        assert_eq!(domain.stamp(), 1);

        let event = domain.narrow_to_shifted_domain(1, &Domain::sparse([2, 20]), &5);
        assert_eq!(event, Ok(PruningEvent::Ground));
        assert_eq!(domain.values(), &Domain::interval(7, 7));

        assert_eq!(
            domain.narrow_to_shifted_domain(1, &Domain::interval(0, 1), &-5),
            Err(EmptyDomain)
        );
        assert_eq!(domain.values(), &Domain::interval(7, 7));
    }

    #[test]
    #[should_panic]
    fn narrowing_below_the_stamp_is_rejected() {
        let mut domain = versioned(0, 10);
        let _ = domain.narrow_min(3, &2);
        let _ = domain.narrow_min(2, &4);
    }

    #[test]
    fn registries_are_copied_on_write() {
        let mut domain = versioned(0, 10);
        let _ = domain.put_model_constraint(0, ConstraintId(0), ConstraintEvent::Bound);
        let _ = domain.put_search_constraint(0, ConstraintId(1));

        assert!(domain.put_search_constraint(1, ConstraintId(2)));
        assert!(domain.remove_search_constraint(1, ConstraintId(1)));

        assert_eq!(domain.search_registry().active(), &[ConstraintId(2)]);
        let root = domain.previous().expect("forked by the registry change");
        assert_eq!(root.search_registry().active(), &[ConstraintId(1)]);

        let _ = domain.restore_to(0);
        assert_eq!(domain.search_registry().active(), &[ConstraintId(1)]);
        assert_eq!(domain.model_registry().constraints(ConstraintEvent::Bound), &[ConstraintId(0)]);
    }

    #[test]
    fn wake_list_follows_event_inclusion() {
        let mut domain = versioned(0, 10);
        let _ = domain.put_model_constraint(0, ConstraintId(0), ConstraintEvent::Ground);
        let _ = domain.put_model_constraint(0, ConstraintId(1), ConstraintEvent::Bound);
        let _ = domain.put_model_constraint(0, ConstraintId(2), ConstraintEvent::Any);
        let _ = domain.put_search_constraint(0, ConstraintId(3));

        let woken = |event| domain.constraints_to_wake(event).collect::<Vec<_>>();

        assert_eq!(
            woken(PruningEvent::Ground),
            vec![ConstraintId(0), ConstraintId(1), ConstraintId(2), ConstraintId(3)]
        );
        assert_eq!(
            woken(PruningEvent::Bound),
            vec![ConstraintId(1), ConstraintId(2), ConstraintId(3)]
        );
        assert_eq!(woken(PruningEvent::Any), vec![ConstraintId(2), ConstraintId(3)]);
        assert!(woken(PruningEvent::None).is_empty());
        assert_eq!(domain.constraint_count(), 4);
    }

    #[test]
    fn a_long_history_drops_without_recursion() {
        let mut domain = versioned(0, 1_000_000);
        for level in 1..100_000 {
            let _ = domain.narrow_min(level, &(level as i32)).expect("non-empty");
        }

        assert_eq!(domain.version_count(), 100_000);
        drop(domain);
    }
}
