pub mod propagation;
pub mod registry;

mod debug_helper;
mod domain_id;
mod domain_store;
mod options;
mod propagation_queue;
mod variable_names;
mod versioned_domain;

pub(crate) use debug_helper::DebugHelper;
pub use domain_id::DomainId;
pub use domain_store::DomainStore;
pub use options::DomainStoreOptions;
pub use options::RepresentationPolicy;
pub(crate) use propagation_queue::PropagationQueue;
pub use registry::ConstraintId;
pub(crate) use variable_names::VariableNames;
pub use versioned_domain::VersionedDomain;
