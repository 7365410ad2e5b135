use super::PropagationContextMut;
use super::PropagatorInitialisationContext;
use crate::basic_types::DomainValue;
use crate::basic_types::PropagationStatus;
#[cfg(doc)]
use crate::basic_types::EmptyDomain;
#[cfg(doc)]
use crate::engine::propagation::PropagationEngine;

/// All propagators implement the [`Propagator`] trait. Structs implementing the trait define the
/// main propagator logic: which variables wake the propagator, and how it narrows them.
///
/// See the [`crate::engine::propagation`] documentation for more details.
pub trait Propagator<V: DomainValue> {
    /// Return the name of the propagator, this is a convenience method that is used for printing.
    fn name(&self) -> &str;

    /// Initialises the propagator without performing propagation. This method is called only once
    /// by the [`PropagationEngine`] when the propagator is added using
    /// [`PropagationEngine::add_propagator`].
    ///
    /// The method is used to register the variables whose changes wake the propagator by calling
    /// [`PropagatorInitialisationContext::register`], and to detect root-level inconsistencies.
    ///
    /// The engine will call this before any call to [`Propagator::propagate`] is made.
    fn initialise_at_root(
        &mut self,
        context: &mut PropagatorInitialisationContext<'_, V>,
    ) -> PropagationStatus;

    /// Narrow the domains of the constrained variables to the values consistent with the
    /// constraint. In case a domain becomes empty, [`EmptyDomain`] is returned and the engine
    /// stops propagating.
    ///
    /// Propagators are not required to propagate until a fixed point. Any change they make to a
    /// registered variable wakes them again.
    fn propagate(&self, context: PropagationContextMut<'_, V>) -> PropagationStatus;
}
