//! Propagators narrow the domains of the variables they constrain, and the
//! [`PropagationEngine`] runs them until no domain changes any more.
//!
//! A propagator registers at the root, through the [`PropagatorInitialisationContext`], the
//! variables whose changes should wake it and the [`crate::domains::ConstraintEvent`] it waits
//! for. Every change to such a variable that includes that event puts the propagator in the
//! queue of the [`crate::engine::DomainStore`]. The engine pops propagators off that queue and
//! calls [`Propagator::propagate`] with a [`PropagationContextMut`] through which the propagator
//! reads and narrows domains. A propagator which empties a domain returns
//! [`crate::basic_types::EmptyDomain`]; the engine stops and hands the failure to its caller.
mod propagation_context;
mod propagation_engine;
mod propagator;
mod propagator_initialisation_context;

pub use propagation_context::HasStore;
pub use propagation_context::PropagationContext;
pub use propagation_context::PropagationContextMut;
pub use propagation_context::ReadDomains;
pub use propagation_engine::PropagationEngine;
pub use propagator::Propagator;
pub use propagator_initialisation_context::PropagatorInitialisationContext;
