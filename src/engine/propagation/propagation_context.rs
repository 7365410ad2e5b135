use crate::basic_types::DomainValue;
use crate::basic_types::EmptyDomain;
use crate::basic_types::Interval;
use crate::domains::Domain;
use crate::domains::PruningEvent;
use crate::engine::DomainId;
use crate::engine::DomainStore;

/// [`PropagationContext`] gives read-only access to the domains, e.g. for checking whether a
/// constraint is satisfied.
#[derive(Clone, Copy, Debug)]
pub struct PropagationContext<'a, V> {
    store: &'a DomainStore<V>,
}

impl<'a, V> PropagationContext<'a, V> {
    pub fn new(store: &'a DomainStore<V>) -> Self {
        PropagationContext { store }
    }
}

/// [`PropagationContextMut`] is passed to propagators during propagation. It is the only point
/// of communication between the propagators and the store: every narrowing happens at the current
/// level and wakes the constraints registered on the changed variable.
#[derive(Debug)]
pub struct PropagationContextMut<'a, V> {
    store: &'a mut DomainStore<V>,
}

impl<'a, V: DomainValue> PropagationContextMut<'a, V> {
    pub fn new(store: &'a mut DomainStore<V>) -> Self {
        PropagationContextMut { store }
    }

    pub fn as_readonly(&self) -> PropagationContext<'_, V> {
        PropagationContext::new(&*self.store)
    }

    pub fn level(&self) -> usize {
        self.store.level()
    }

    pub fn narrow_to(
        &mut self,
        variable: DomainId,
        lo: &V,
        hi: &V,
    ) -> Result<PruningEvent, EmptyDomain> {
        self.store.narrow_to(variable, lo, hi)
    }

    /// Narrow `variable` to the values of `bounds`.
    pub fn narrow_to_interval(
        &mut self,
        variable: DomainId,
        bounds: &Interval<V>,
    ) -> Result<PruningEvent, EmptyDomain> {
        self.store.narrow_to(variable, bounds.lo(), bounds.hi())
    }

    pub fn narrow_min(&mut self, variable: DomainId, lo: &V) -> Result<PruningEvent, EmptyDomain> {
        self.store.narrow_min(variable, lo)
    }

    pub fn narrow_max(&mut self, variable: DomainId, hi: &V) -> Result<PruningEvent, EmptyDomain> {
        self.store.narrow_max(variable, hi)
    }

    pub fn narrow_excluding(
        &mut self,
        variable: DomainId,
        lo: &V,
        hi: &V,
    ) -> Result<PruningEvent, EmptyDomain> {
        self.store.narrow_excluding(variable, lo, hi)
    }

    pub fn remove_value(
        &mut self,
        variable: DomainId,
        value: &V,
    ) -> Result<PruningEvent, EmptyDomain> {
        self.store.remove_value(variable, value)
    }

    pub fn narrow_to_value(
        &mut self,
        variable: DomainId,
        value: &V,
    ) -> Result<PruningEvent, EmptyDomain> {
        self.store.narrow_to_value(variable, value)
    }

    pub fn narrow_to_domain(
        &mut self,
        variable: DomainId,
        domain: &Domain<V>,
    ) -> Result<PruningEvent, EmptyDomain> {
        self.store.narrow_to_domain(variable, domain)
    }

    pub fn narrow_to_shifted_domain(
        &mut self,
        variable: DomainId,
        domain: &Domain<V>,
        shift: &V,
    ) -> Result<PruningEvent, EmptyDomain> {
        self.store.narrow_to_shifted_domain(variable, domain, shift)
    }
}

/// A trait which defines common methods for retrieving the [`DomainStore`] from the structure
/// which implements this trait.
pub trait HasStore<V> {
    fn store(&self) -> &DomainStore<V>;
}

/// Read access to the domains, shared by every context.
pub trait ReadDomains<V: DomainValue>: HasStore<V> {
    fn domain(&self, variable: DomainId) -> &Domain<V> {
        self.store().domain(variable)
    }

    fn lower_bound(&self, variable: DomainId) -> &V {
        self.store().lower_bound(variable)
    }

    fn upper_bound(&self, variable: DomainId) -> &V {
        self.store().upper_bound(variable)
    }

    fn bounds(&self, variable: DomainId) -> Interval<V> {
        self.store().bounds(variable)
    }

    fn contains(&self, variable: DomainId, value: &V) -> bool {
        self.store().contains(variable, value)
    }

    fn is_fixed(&self, variable: DomainId) -> bool {
        self.store().is_fixed(variable)
    }
}

impl<V: DomainValue, T: HasStore<V>> ReadDomains<V> for T {}

impl<V> HasStore<V> for PropagationContext<'_, V> {
    fn store(&self) -> &DomainStore<V> {
        self.store
    }
}

impl<V> HasStore<V> for PropagationContextMut<'_, V> {
    fn store(&self) -> &DomainStore<V> {
        &*self.store
    }
}
