//! Bounds of arithmetic results over ranges.
//!
//! Every function returns the tightest range enclosing all results for operands drawn from the
//! given ranges. Results never under-approximate: propagators narrow domains to these ranges, so
//! any lost value would be a lost solution. Results are clamped to the representable universe.
use std::cmp::max;
use std::cmp::min;

use log::trace;

use super::num_ext::NumExt;
use crate::basic_types::ArithmeticFailure;
use crate::basic_types::DomainValue;
use crate::basic_types::Interval;

/// How the corner quotients of a division are rounded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DivisionPolicy {
    /// Quotients are truncated toward zero, as by integer division. Used by division and modulo
    /// constraints.
    Truncating,
    /// The range of integers `x` with `x * divisor = dividend`: the smallest corner quotient is
    /// rounded up and the largest rounded down. Used to invert multiplication.
    ///
    /// This is deliberately tighter than truncating the corners: a truncated quotient which is
    /// not an exact factor of any dividend is excluded, so `[5, 9] / [2, 2]` gives `[3, 4]` where
    /// truncation gives `[2, 4]`.
    MultiplicativeInverse,
}

/// `[x.lo + y.lo, x.hi + y.hi]`.
pub fn add<V: DomainValue>(x: &Interval<V>, y: &Interval<V>) -> Interval<V> {
    Interval::new(
        saturating_add(x.lo(), y.lo()),
        saturating_add(x.hi(), y.hi()),
    )
}

/// `[-x.hi, -x.lo]`.
pub fn negate<V: DomainValue>(x: &Interval<V>) -> Interval<V> {
    Interval::new(
        clamp_to_universe(-x.hi().clone()),
        clamp_to_universe(-x.lo().clone()),
    )
}

/// `[x.lo - y.hi, x.hi - y.lo]`.
pub fn subtract<V: DomainValue>(x: &Interval<V>, y: &Interval<V>) -> Interval<V> {
    add(x, &negate(y))
}

/// The smallest and largest of the four corner products.
pub fn multiply<V: DomainValue>(x: &Interval<V>, y: &Interval<V>) -> Interval<V> {
    let corners = [
        saturating_mul(x.lo(), y.lo()),
        saturating_mul(x.lo(), y.hi()),
        saturating_mul(x.hi(), y.lo()),
        saturating_mul(x.hi(), y.hi()),
    ];

    enclose(corners)
}

/// The range of `x * x`; zero is the minimum whenever `x` straddles zero.
pub fn square<V: DomainValue>(x: &Interval<V>) -> Interval<V> {
    let lo_squared = saturating_mul(x.lo(), x.lo());
    let hi_squared = saturating_mul(x.hi(), x.hi());

    let mut lo = min(&lo_squared, &hi_squared).clone();
    let hi = max(lo_squared.clone(), hi_squared);
    if x.lo().is_negative() && x.hi().is_positive() {
        lo = V::zero();
    }

    Interval::new(lo, hi)
}

/// The quotient range of `dividend / divisor` under the [`DivisionPolicy::Truncating`] policy.
pub fn divide_bounds<V: DomainValue>(
    dividend: &Interval<V>,
    divisor: &Interval<V>,
) -> Result<Interval<V>, ArithmeticFailure> {
    divide(dividend, divisor, DivisionPolicy::Truncating)
}

/// The quotient range of `dividend / divisor` under the [`DivisionPolicy::MultiplicativeInverse`]
/// policy.
pub fn divide_inverse_bounds<V: DomainValue>(
    dividend: &Interval<V>,
    divisor: &Interval<V>,
) -> Result<Interval<V>, ArithmeticFailure> {
    divide(dividend, divisor, DivisionPolicy::MultiplicativeInverse)
}

/// The quotient range of `dividend / divisor`.
///
/// The cases are decided on how the ranges relate to zero:
/// 1. both straddle zero: any value can be a quotient, the result is the full universe;
/// 2. the divisor is exactly zero and the dividend cannot be: fails with
///    [`ArithmeticFailure::DivisionByZero`];
/// 3. the divisor strictly straddles zero and the dividend excludes it: `[-m, m]` with `m` the
///    largest absolute dividend;
/// 4. the divisor has zero as one of its endpoints: that endpoint is moved to the nearest
///    non-zero value;
/// 5. the divisor excludes zero: the corner quotients, rounded according to `policy`.
pub fn divide<V: DomainValue>(
    dividend: &Interval<V>,
    divisor: &Interval<V>,
    policy: DivisionPolicy,
) -> Result<Interval<V>, ArithmeticFailure> {
    if dividend.contains_zero() && divisor.contains_zero() {
        return Ok(Interval::universe());
    }

    if divisor.excludes_zero() {
        return corner_quotients(dividend, divisor, policy);
    }

    // From here on the divisor contains zero and the dividend does not.
    let (c, d) = (divisor.lo(), divisor.hi());
    if c.is_zero() && d.is_zero() {
        trace!("division of {dividend} by zero");
        Err(ArithmeticFailure::DivisionByZero)
    } else if c.is_negative() && d.is_positive() {
        let magnitude = max(dividend.lo().abs(), dividend.hi().abs());
        Ok(Interval::new(-magnitude.clone(), magnitude))
    } else if c.is_zero() {
        divide(dividend, &Interval::new(V::one(), d.clone()), policy)
    } else {
        divide(dividend, &Interval::new(c.clone(), -V::one()), policy)
    }
}

fn corner_quotients<V: DomainValue>(
    dividend: &Interval<V>,
    divisor: &Interval<V>,
    policy: DivisionPolicy,
) -> Result<Interval<V>, ArithmeticFailure> {
    let (a, b) = (dividend.lo(), dividend.hi());
    let (c, d) = (divisor.lo(), divisor.hi());

    match policy {
        DivisionPolicy::Truncating => Ok(enclose([
            a.clone() / c.clone(),
            a.clone() / d.clone(),
            b.clone() / c.clone(),
            b.clone() / d.clone(),
        ])),
        DivisionPolicy::MultiplicativeInverse => {
            let lo = [
                a.div_ceil_value(c),
                a.div_ceil_value(d),
                b.div_ceil_value(c),
                b.div_ceil_value(d),
            ]
            .into_iter()
            .min()
            .expect("four corners");
            let hi = [
                a.div_floor_value(c),
                a.div_floor_value(d),
                b.div_floor_value(c),
                b.div_floor_value(d),
            ]
            .into_iter()
            .max()
            .expect("four corners");

            if lo > hi {
                trace!("no integer quotient of {dividend} by {divisor}");
                return Err(ArithmeticFailure::EmptyQuotient);
            }

            Ok(Interval::new(lo, hi))
        }
    }
}

fn enclose<V: DomainValue>(corners: [V; 4]) -> Interval<V> {
    let [first, rest @ ..] = corners;
    let (lo, hi) = rest
        .into_iter()
        .fold((first.clone(), first), |(lo, hi), corner| {
            (min(lo, corner.clone()), max(hi, corner))
        });
    Interval::new(lo, hi)
}

fn clamp_to_universe<V: DomainValue>(value: V) -> V {
    value.clamp(V::min_int(), V::max_int())
}

/// `x + y`, clamped to the representable universe.
pub(crate) fn saturating_add<V: DomainValue>(x: &V, y: &V) -> V {
    match x.checked_add(y) {
        Some(sum) => clamp_to_universe(sum),
        None if x.is_negative() => V::min_int(),
        None => V::max_int(),
    }
}

/// `x - y`, clamped to the representable universe.
pub(crate) fn saturating_sub<V: DomainValue>(x: &V, y: &V) -> V {
    saturating_add(x, &clamp_to_universe(-y.clone()))
}

/// `x * y`, clamped to the representable universe.
pub(crate) fn saturating_mul<V: DomainValue>(x: &V, y: &V) -> V {
    match x.checked_mul(y) {
        Some(product) => clamp_to_universe(product),
        None if x.is_negative() != y.is_negative() => V::min_int(),
        None => V::max_int(),
    }
}
