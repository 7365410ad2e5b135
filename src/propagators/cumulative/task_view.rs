use crate::basic_types::DomainValue;
use crate::basic_types::EmptyDomain;
use crate::domains::PruningEvent;
use crate::engine::propagation::PropagationContextMut;
use crate::engine::propagation::ReadDomains;
use crate::engine::DomainId;
use crate::math::interval_arithmetic::saturating_add;
use crate::math::interval_arithmetic::saturating_mul;
use crate::math::interval_arithmetic::saturating_sub;

/// A task as seen forward in time: it starts at `start`, runs for `duration` and occupies
/// `resource` units of the resource while it runs.
///
/// The time points are derived from the current bounds of the variables and saturate at the
/// bounds of the representable universe. The `update_*` methods
/// only ever move the start of the task inwards and report [`PruningEvent::None`] when the
/// proposed bound is not tighter than the current one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TaskNormalView {
    start: DomainId,
    duration: DomainId,
    resource: DomainId,
}

impl TaskNormalView {
    pub fn new(start: DomainId, duration: DomainId, resource: DomainId) -> Self {
        TaskNormalView {
            start,
            duration,
            resource,
        }
    }

    pub fn start(&self) -> DomainId {
        self.start
    }

    pub fn duration(&self) -> DomainId {
        self.duration
    }

    pub fn resource(&self) -> DomainId {
        self.resource
    }

    /// Earliest start time.
    pub fn est<V: DomainValue>(&self, context: &impl ReadDomains<V>) -> V {
        context.lower_bound(self.start).clone()
    }

    /// Earliest completion time.
    pub fn ect<V: DomainValue>(&self, context: &impl ReadDomains<V>) -> V {
        saturating_add(
            context.lower_bound(self.start),
            context.lower_bound(self.duration),
        )
    }

    /// Latest start time.
    pub fn lst<V: DomainValue>(&self, context: &impl ReadDomains<V>) -> V {
        context.upper_bound(self.start).clone()
    }

    /// Latest completion time.
    pub fn lct<V: DomainValue>(&self, context: &impl ReadDomains<V>) -> V {
        saturating_add(
            context.upper_bound(self.start),
            context.upper_bound(self.duration),
        )
    }

    /// The least amount of resource the task consumes over its run.
    pub fn energy<V: DomainValue>(&self, context: &impl ReadDomains<V>) -> V {
        saturating_mul(
            context.lower_bound(self.duration),
            context.lower_bound(self.resource),
        )
    }

    /// `capacity * est + energy`: the envelope of the task in Θ-tree based reasoning.
    pub fn envelope<V: DomainValue>(&self, context: &impl ReadDomains<V>, capacity: &V) -> V {
        saturating_add(
            &saturating_mul(capacity, &self.est(context)),
            &self.energy(context),
        )
    }

    /// Move the earliest start time up to `est`, as found by edge finding.
    pub fn update_edge_find<V: DomainValue>(
        &self,
        context: &mut PropagationContextMut<'_, V>,
        est: &V,
    ) -> Result<PruningEvent, EmptyDomain> {
        self.raise_start(context, est)
    }

    /// Make the task complete by `lct`, as found by not-first/not-last reasoning.
    pub fn update_not_first_not_last<V: DomainValue>(
        &self,
        context: &mut PropagationContextMut<'_, V>,
        lct: &V,
    ) -> Result<PruningEvent, EmptyDomain> {
        let latest_start = saturating_sub(lct, context.lower_bound(self.duration));
        if &latest_start < context.upper_bound(self.start) {
            context.narrow_max(self.start, &latest_start)
        } else {
            Ok(PruningEvent::None)
        }
    }

    /// Move the earliest start time up to `est`, as found by detectable precedences.
    pub fn update_detectable<V: DomainValue>(
        &self,
        context: &mut PropagationContextMut<'_, V>,
        est: &V,
    ) -> Result<PruningEvent, EmptyDomain> {
        self.raise_start(context, est)
    }

    fn raise_start<V: DomainValue>(
        &self,
        context: &mut PropagationContextMut<'_, V>,
        est: &V,
    ) -> Result<PruningEvent, EmptyDomain> {
        if est > context.lower_bound(self.start) {
            context.narrow_min(self.start, est)
        } else {
            Ok(PruningEvent::None)
        }
    }
}
