//! # Munchkin domains
//! The variable domains of a constraint solver and the bookkeeping needed to backtrack them.
//!
//! A [`domains::Domain`] holds the admissible values of a variable either as disjoint intervals
//! or as an explicit set of values; every set operation works across both representations. A
//! [`engine::VersionedDomain`] keeps the history of one variable across backtracking levels:
//! changing it at a deeper level forks a new version, and backtracking pops versions without an
//! undo log. Each version carries the registries of the constraints to wake when it changes, and
//! every narrowing reports the [`domains::PruningEvent`] which decides who is woken.
//!
//! The [`engine::DomainStore`] owns the variables and the current level, and the
//! [`engine::propagation::PropagationEngine`] runs [`engine::propagation::Propagator`]s to a fixed
//! point on top of it. The [`math`] module computes the result ranges of interval arithmetic
//! that propagators narrow to.
//!
//! ```
//! use munchkin_domains::domains::Domain;
//! use munchkin_domains::engine::DomainStore;
//!
//! let mut store = DomainStore::<i32>::default();
//! let x = store.new_variable(0, 255);
//!
//! store.increase_level();
//! let _ = store.narrow_max(x, &100).expect("non-empty");
//! let _ = store.narrow_min(x, &50).expect("non-empty");
//! let _ = store.narrow_to_domain(x, &Domain::interval(60, 80)).expect("non-empty");
//! assert_eq!(store.domain(x).size(), 21);
//!
//! store.backtrack_to(0);
//! assert_eq!(store.domain(x).size(), 256);
//! ```
pub mod asserts;
pub mod basic_types;
pub mod domains;
pub mod engine;
pub mod math;
pub mod propagators;

#[cfg(test)]
mod tests;

pub use basic_types::DomainValue;
pub use basic_types::EmptyDomain;
pub use basic_types::Interval;
pub use domains::Domain;
pub use domains::PruningEvent;
pub use engine::DomainId;
pub use engine::DomainStore;
