mod domain_value;
mod empty_domain;
mod interval;
mod propagation_status;

pub use domain_value::DomainValue;
pub use empty_domain::ArithmeticFailure;
pub use empty_domain::EmptyDomain;
pub use interval::Interval;
pub use propagation_status::PropagationStatus;

pub(crate) type HashMap<K, V> = fnv::FnvHashMap<K, V>;
pub(crate) type HashSet<K> = fnv::FnvHashSet<K>;
