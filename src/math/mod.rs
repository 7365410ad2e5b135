//! Pure arithmetic over ranges, used by propagators to compute the bounds they narrow to.
pub mod interval_arithmetic;
pub(crate) mod num_ext;

pub use interval_arithmetic::add;
pub use interval_arithmetic::divide;
pub use interval_arithmetic::divide_bounds;
pub use interval_arithmetic::divide_inverse_bounds;
pub use interval_arithmetic::multiply;
pub use interval_arithmetic::negate;
pub use interval_arithmetic::square;
pub use interval_arithmetic::subtract;
pub use interval_arithmetic::DivisionPolicy;
