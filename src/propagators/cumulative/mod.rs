//! Reasoning over tasks which share a renewable resource.
mod cumulative_propagator;
mod task_view;

pub use cumulative_propagator::CumulativePropagator;
pub use task_view::TaskNormalView;
