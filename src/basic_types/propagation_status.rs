use super::EmptyDomain;

/// The result of invoking a propagator. Propagation either succeeds or wipes out the domain of
/// one of its variables.
pub type PropagationStatus = Result<(), EmptyDomain>;
