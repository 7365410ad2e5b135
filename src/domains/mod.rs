//! The admissible value sets of variables.
//!
//! A [`Domain`] is a set of values in one of two representations: an [`IntervalDomain`] of
//! disjoint ranges or an explicit [`SparseDomain`]. Both implement the range primitives of
//! [`DomainRepresentation`] and both can be walked through the [`ValueEnumeration`] and
//! [`IntervalEnumeration`] protocols. [`PruningEvent`] classifies how a domain shrank.
mod domain;
mod enumeration;
mod interval_domain;
mod pruning_event;
mod representation;
mod sparse_domain;

pub use domain::Domain;
pub use domain::DEFAULT_SPARSE_COMPLEMENT_LIMIT;
pub use enumeration::IntervalEnumeration;
pub use enumeration::ValueEnumeration;
pub use interval_domain::IntervalDomain;
pub use pruning_event::ConstraintEvent;
pub use pruning_event::PruningEvent;
pub use representation::DomainRepresentation;
pub use sparse_domain::SparseDomain;
