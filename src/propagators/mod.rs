//! Contains propagator implementations built on the domain contract.
//!
//! See the [`crate::engine::propagation`] for info on propagators.
pub mod arithmetic;
pub mod cumulative;

pub use arithmetic::GreaterThanConstantPropagator;
pub use arithmetic::LessThanConstantPropagator;
pub use arithmetic::NotEqualConstantPropagator;
pub use arithmetic::PlusPropagator;
pub use arithmetic::TimesPropagator;
pub use cumulative::CumulativePropagator;
pub use cumulative::TaskNormalView;
