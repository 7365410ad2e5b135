//! Rounding divisions over [`DomainValue`]s.
use num::Integer;

use crate::basic_types::DomainValue;

pub(crate) trait NumExt {
    /// Division with rounding up.
    fn div_ceil_value(&self, other: &Self) -> Self;

    /// Division with rounding down.
    ///
    /// Note this is different from truncating, which is rounding toward zero.
    fn div_floor_value(&self, other: &Self) -> Self;
}

impl<V: DomainValue> NumExt for V {
    fn div_ceil_value(&self, other: &Self) -> Self {
        -Integer::div_floor(&-self.clone(), other)
    }

    fn div_floor_value(&self, other: &Self) -> Self {
        Integer::div_floor(self, other)
    }
}
