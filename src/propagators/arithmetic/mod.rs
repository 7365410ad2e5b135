mod constant_comparison;
mod not_equal_constant;
mod plus;
mod times;

pub use constant_comparison::GreaterThanConstantPropagator;
pub use constant_comparison::LessThanConstantPropagator;
pub use not_equal_constant::NotEqualConstantPropagator;
pub use plus::PlusPropagator;
pub use times::TimesPropagator;
