//! The variables of a problem and the backtracking level they are changed at.
use log::debug;

use super::DomainId;
use super::DomainStoreOptions;
use super::PropagationQueue;
use super::VariableNames;
use super::VersionedDomain;
use crate::basic_types::DomainValue;
use crate::basic_types::EmptyDomain;
use crate::basic_types::Interval;
use crate::domains::ConstraintEvent;
use crate::domains::Domain;
use crate::domains::PruningEvent;
use crate::engine::ConstraintId;
use crate::munchkin_assert_simple;
use crate::print_munchkin_assert_warning_message;

/// Owns the [`VersionedDomain`] of every variable and the current backtracking level.
///
/// Every change goes through the store at the current level. The store remembers which variables
/// forked at which level, so that [`DomainStore::backtrack_to`] only visits those variables. The
/// constraints woken by a change are collected in a queue which the propagation engine drains.
#[derive(Debug)]
pub struct DomainStore<V> {
    domains: Vec<VersionedDomain<V>>,
    level: usize,
    /// `trail[l - 1]` holds the variables which forked at level `l`.
    trail: Vec<Vec<DomainId>>,
    woken: PropagationQueue,
    variable_names: VariableNames,
    options: DomainStoreOptions,
}

impl<V: DomainValue> Default for DomainStore<V> {
    fn default() -> Self {
        DomainStore::new(DomainStoreOptions::default())
    }
}

impl<V: DomainValue> DomainStore<V> {
    pub fn new(options: DomainStoreOptions) -> Self {
        print_munchkin_assert_warning_message!();

        DomainStore {
            domains: Vec::new(),
            level: 0,
            trail: Vec::new(),
            woken: PropagationQueue::default(),
            variable_names: VariableNames::default(),
            options,
        }
    }

    pub fn options(&self) -> &DomainStoreOptions {
        &self.options
    }

    /// Create a variable with the values `[lo, hi]`, represented as the options dictate.
    pub fn new_variable(&mut self, lo: V, hi: V) -> DomainId {
        munchkin_assert_simple!(lo <= hi, "cannot create a variable with domain [{lo}, {hi}]");

        let domain = self.options.representation.initial_domain(lo, hi);
        self.new_variable_with_domain(domain)
    }

    pub fn new_named_variable(&mut self, lo: V, hi: V, name: impl Into<String>) -> DomainId {
        let variable = self.new_variable(lo, hi);
        self.variable_names.add_integer(variable, name.into());
        variable
    }

    /// Create a variable with exactly the given values in the sparse representation.
    pub fn new_sparse_variable(&mut self, values: impl IntoIterator<Item = V>) -> DomainId {
        self.new_variable_with_domain(Domain::sparse(values))
    }

    /// Create a variable starting with `domain`. Variables can only be created at the root.
    pub fn new_variable_with_domain(&mut self, domain: Domain<V>) -> DomainId {
        munchkin_assert_simple!(
            self.level == 0,
            "variables can only be created at the root, the current level is {}",
            self.level
        );

        let variable = DomainId::new(self.domains.len() as u32);
        self.domains.push(VersionedDomain::new(variable, domain));
        variable
    }

    pub fn num_domains(&self) -> usize {
        self.domains.len()
    }

    pub fn variables(&self) -> impl Iterator<Item = DomainId> {
        (0..self.domains.len() as u32).map(DomainId::new)
    }

    pub fn name(&self, variable: DomainId) -> Option<&str> {
        self.variable_names.get_int_name(variable)
    }

    pub fn variable_by_name(&self, name: &str) -> Option<DomainId> {
        self.variable_names.get_domain_by_name(name)
    }

    pub fn level(&self) -> usize {
        self.level
    }

    pub fn increase_level(&mut self) {
        self.level += 1;
        self.trail.push(Vec::new());
        debug!("increased level to {}", self.level);
    }

    /// Restore every variable to its version at `level`, and forget the woken constraints.
    pub fn backtrack_to(&mut self, level: usize) {
        munchkin_assert_simple!(
            level <= self.level,
            "cannot backtrack from level {} to level {level}",
            self.level
        );

        let mut restored = 0;
        for forked in self.trail.drain(level..) {
            for variable in forked {
                restored += self.domains[variable.index()].restore_to(level);
            }
        }
        debug!(
            "backtracked from level {} to {level}, dropping {restored} versions",
            self.level
        );

        self.level = level;
        self.woken.clear();
    }

    pub fn versioned(&self, variable: DomainId) -> &VersionedDomain<V> {
        &self.domains[variable.index()]
    }

    pub fn domain(&self, variable: DomainId) -> &Domain<V> {
        self.domains[variable.index()].values()
    }

    pub fn lower_bound(&self, variable: DomainId) -> &V {
        self.domain(variable)
            .min()
            .expect("domains in the store are never empty")
    }

    pub fn upper_bound(&self, variable: DomainId) -> &V {
        self.domain(variable)
            .max()
            .expect("domains in the store are never empty")
    }

    pub fn bounds(&self, variable: DomainId) -> Interval<V> {
        Interval::new(
            self.lower_bound(variable).clone(),
            self.upper_bound(variable).clone(),
        )
    }

    pub fn contains(&self, variable: DomainId, value: &V) -> bool {
        self.domain(variable).contains(value)
    }

    pub fn is_fixed(&self, variable: DomainId) -> bool {
        self.domain(variable).is_singleton()
    }

    /// The value of a fixed variable.
    pub fn value(&self, variable: DomainId) -> Option<&V> {
        self.domain(variable).value()
    }

    /// The values of `universe` the variable does not hold.
    pub fn complement(&self, variable: DomainId, universe: &Interval<V>) -> Domain<V> {
        self.domain(variable)
            .complement_bounded(universe, self.options.sparse_complement_limit)
    }

    pub fn narrow_to(
        &mut self,
        variable: DomainId,
        lo: &V,
        hi: &V,
    ) -> Result<PruningEvent, EmptyDomain> {
        self.narrow(variable, |domain, level| domain.narrow_to(level, lo, hi))
    }

    pub fn narrow_min(&mut self, variable: DomainId, lo: &V) -> Result<PruningEvent, EmptyDomain> {
        self.narrow(variable, |domain, level| domain.narrow_min(level, lo))
    }

    pub fn narrow_max(&mut self, variable: DomainId, hi: &V) -> Result<PruningEvent, EmptyDomain> {
        self.narrow(variable, |domain, level| domain.narrow_max(level, hi))
    }

    pub fn narrow_excluding(
        &mut self,
        variable: DomainId,
        lo: &V,
        hi: &V,
    ) -> Result<PruningEvent, EmptyDomain> {
        self.narrow(variable, |domain, level| {
            domain.narrow_excluding(level, lo, hi)
        })
    }

    pub fn remove_value(
        &mut self,
        variable: DomainId,
        value: &V,
    ) -> Result<PruningEvent, EmptyDomain> {
        self.narrow_excluding(variable, value, value)
    }

    pub fn narrow_to_value(
        &mut self,
        variable: DomainId,
        value: &V,
    ) -> Result<PruningEvent, EmptyDomain> {
        self.narrow(variable, |domain, level| domain.narrow_to_value(level, value))
    }

    pub fn narrow_to_domain(
        &mut self,
        variable: DomainId,
        values: &Domain<V>,
    ) -> Result<PruningEvent, EmptyDomain> {
        self.narrow(variable, |domain, level| {
            domain.narrow_to_domain(level, values)
        })
    }

    /// Keep only the values `v` of `variable` for which `v - shift` is in `values`.
    pub fn narrow_to_shifted_domain(
        &mut self,
        variable: DomainId,
        values: &Domain<V>,
        shift: &V,
    ) -> Result<PruningEvent, EmptyDomain> {
        self.narrow(variable, |domain, level| {
            domain.narrow_to_shifted_domain(level, values, shift)
        })
    }

    pub fn put_model_constraint(
        &mut self,
        variable: DomainId,
        constraint: ConstraintId,
        event: ConstraintEvent,
    ) -> bool {
        self.modify(variable, |domain, level| {
            domain.put_model_constraint(level, constraint, event)
        })
    }

    pub fn remove_model_constraint(
        &mut self,
        variable: DomainId,
        constraint: ConstraintId,
    ) -> Option<ConstraintEvent> {
        self.modify(variable, |domain, level| {
            domain.remove_model_constraint(level, constraint)
        })
    }

    pub fn put_search_constraint(&mut self, variable: DomainId, constraint: ConstraintId) -> bool {
        self.modify(variable, |domain, level| {
            domain.put_search_constraint(level, constraint)
        })
    }

    pub fn remove_search_constraint(
        &mut self,
        variable: DomainId,
        constraint: ConstraintId,
    ) -> bool {
        self.modify(variable, |domain, level| {
            domain.remove_search_constraint(level, constraint)
        })
    }

    pub fn remove_search_constraint_at(&mut self, variable: DomainId, position: usize) {
        self.modify(variable, |domain, level| {
            domain.remove_search_constraint_at(level, position)
        })
    }

    /// The next woken constraint, in the order the constraints were first woken.
    pub fn pop_woken(&mut self) -> Option<ConstraintId> {
        self.woken.pop()
    }

    pub fn has_woken(&self) -> bool {
        !self.woken.is_empty()
    }

    pub fn woken_count(&self) -> usize {
        self.woken.len()
    }

    pub fn clear_woken(&mut self) {
        self.woken.clear();
    }

    fn narrow(
        &mut self,
        variable: DomainId,
        narrow: impl FnOnce(&mut VersionedDomain<V>, usize) -> Result<PruningEvent, EmptyDomain>,
    ) -> Result<PruningEvent, EmptyDomain> {
        let event = self.modify(variable, narrow)?;

        if event.is_change() {
            for constraint in self.domains[variable.index()].constraints_to_wake(event) {
                self.woken.enqueue(constraint);
            }
        }

        Ok(event)
    }

    /// Apply `change` at the current level, recording the variable on the trail if it forked.
    fn modify<T>(
        &mut self,
        variable: DomainId,
        change: impl FnOnce(&mut VersionedDomain<V>, usize) -> T,
    ) -> T {
        let level = self.level;
        let domain = &mut self.domains[variable.index()];

        let stamp = domain.stamp();
        let result = change(domain, level);
        if stamp < level && domain.stamp() == level {
            self.trail[level - 1].push(variable);
        }

        result
    }
}
