use thiserror::Error;

/// Raised when a narrowing operation would leave a domain without values.
///
/// This is the normal, high-frequency failure of propagation: the caller is expected to return it
/// with `?` until the search driver catches it and backtracks. It carries no data, so raising and
/// matching on it costs nothing.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq, Hash)]
#[error("the domain became empty")]
pub struct EmptyDomain;

/// The ways interval division can fail to produce a range.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq, Hash)]
pub enum ArithmeticFailure {
    /// The divisor is exactly zero while the dividend cannot be zero.
    #[error("division by zero")]
    DivisionByZero,
    /// No integer quotient lies between the corner quotients.
    #[error("no integer quotient exists")]
    EmptyQuotient,
}

impl From<ArithmeticFailure> for EmptyDomain {
    fn from(_: ArithmeticFailure) -> Self {
        EmptyDomain
    }
}
