//! Scalar building blocks for the per-axis operations.
//!
//! `max_of`, `min_of` and `clamp` follow the argument order of C++'s
//! `std::max`/`std::min`, so a NaN operand resolves the same way on every
//! axis: `max_of(a, b)` returns `a` unless `a < b`.

use std::fmt::{Display};
use std::ops::{Mul};

use num_traits::{One, PrimInt, Zero};

use super::{require, Violation};

/// `b` if `a < b`, otherwise `a`.
#[inline(always)]
pub fn max_of<T: PartialOrd>(a: T, b: T) -> T {
    if a < b { b } else { a }
}

/// `b` if `b < a`, otherwise `a`.
#[inline(always)]
pub fn min_of<T: PartialOrd>(a: T, b: T) -> T {
    if b < a { b } else { a }
}

/// `min_of(max_of(a, lo), hi)`.
#[inline(always)]
pub fn clamp<T: PartialOrd>(a: T, lo: T, hi: T) -> T {
    min_of(max_of(a, lo), hi)
}

/// The sign of `val` as `-1`, `0` or `1`.
#[inline(always)]
pub fn sgn<T: PartialOrd + Zero>(val: T) -> i32 {
    (T::zero() < val) as i32 - (val < T::zero()) as i32
}

/// Slope limiter: `0` unless `a` and `b` have the same strict sign, in which
/// case the one of smaller magnitude.
///
/// ```
/// use gridtuple::scalar::minmod;
/// assert_eq!(minmod(3.0, 1.0), 1.0);
/// assert_eq!(minmod(-3.0, -1.0), -1.0);
/// assert_eq!(minmod(3.0, -1.0), 0.0);
/// ```
#[inline(always)]
pub fn minmod<T: Copy + PartialOrd + Zero>(a: T, b: T) -> T {
    let zero = T::zero();
    if a > zero && b > zero { return min_of(a, b); }
    if a < zero && b < zero { return max_of(a, b); }
    zero
}

/// Dual of [`minmod`]: `0` unless `a` and `b` have the same strict sign, in
/// which case the one of larger magnitude.
#[inline(always)]
pub fn maxmod<T: Copy + PartialOrd + Zero>(a: T, b: T) -> T {
    let zero = T::zero();
    if a > zero && b > zero { return max_of(a, b); }
    if a < zero && b < zero { return min_of(a, b); }
    zero
}

// ----------------------------------------------------------------------------

/// `a / b` rounded towards positive infinity. Requires `b > 0`.
///
/// Unlike Rust's `/`, which truncates towards zero, this rounds as Python's
/// `-(-a // b)` does.
///
/// ```
/// use gridtuple::scalar::ceil_div;
/// assert_eq!(ceil_div(7, 2), 4);
/// assert_eq!(ceil_div(-7, 2), -3);
/// ```
#[inline(always)]
#[track_caller]
pub fn ceil_div<T: PrimInt + Display>(a: T, b: T) -> T {
    require!(b > T::zero(), Violation::NonPositiveDivisor(b.to_string()));
    if a >= T::zero() {
        (a + b - T::one()) / b
    } else {
        a / b
    }
}

/// `a / b` rounded towards negative infinity, as Python's `a // b`.
/// Requires `b > 0`.
///
/// ```
/// use gridtuple::scalar::floor_div;
/// assert_eq!(floor_div(7, 2), 3);
/// assert_eq!(floor_div(-7, 2), -4);
/// assert_eq!(floor_div(-1, 7), -1);
/// ```
#[inline(always)]
#[track_caller]
pub fn floor_div<T: PrimInt + Display>(a: T, b: T) -> T {
    require!(b > T::zero(), Violation::NonPositiveDivisor(b.to_string()));
    if a >= T::zero() {
        a / b
    } else {
        (a - b + T::one()) / b
    }
}

/// `x` raised to the power `p`, by binary decomposition of `p`.
///
/// `x` is squared once per significant bit of `p`, so the intermediate
/// values never exceed `x^p` in magnitude.
///
/// ```
/// use gridtuple::scalar::pow;
/// assert_eq!(pow(3, 4), 81);
/// assert_eq!(pow(-1, 3), -1);
/// assert_eq!(pow(2.5, 0), 1.0);
/// ```
#[inline(always)]
pub fn pow<T: Copy + One + Mul<Output=T>>(x: T, p: u32) -> T {
    let mut result = T::one();
    let mut current = x;
    let mut i = 0;
    while i < u32::BITS && (1u32 << i) <= p {
        if i > 0 { current = current * current; }
        if p & (1u32 << i) != 0 { result = result * current; }
        i += 1;
    }
    result
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn std_order_on_nan() {
        assert!(max_of(f64::NAN, 1.0).is_nan());
        assert_eq!(max_of(1.0, f64::NAN), 1.0);
        assert!(min_of(f64::NAN, 1.0).is_nan());
        assert_eq!(clamp(5, 0, 3), 3);
        assert_eq!(clamp(-5, 0, 3), 0);
    }

    #[test]
    fn sign() {
        assert_eq!(sgn(-2.5), -1);
        assert_eq!(sgn(0), 0);
        assert_eq!(sgn(7u8), 1);
    }

    #[test]
    fn limiters() {
        for (a, b) in [(1, 2), (-1, -2), (3, -4), (0, 5), (-2, 0), (6, 6)] {
            assert_eq!(minmod(a, b), minmod(b, a));
            assert_eq!(maxmod(a, b), maxmod(b, a));
        }
        assert_eq!(minmod(2, 5), 2);
        assert_eq!(maxmod(2, 5), 5);
        assert_eq!(minmod(-2, -5), -2);
        assert_eq!(maxmod(-2, -5), -5);
        assert_eq!(minmod(0, -5), 0);
        assert_eq!(maxmod(4, -5), 0);
    }

    #[test]
    fn python_division() {
        for a in -20i64..=20 {
            for b in 1i64..=6 {
                assert_eq!(floor_div(a, b), a.div_euclid(b), "{} // {}", a, b);
                assert_eq!(ceil_div(a, b), -(-a).div_euclid(b), "ceil({} / {})", a, b);
            }
        }
        assert_eq!(ceil_div(0u32, 4), 0);
        assert_eq!(ceil_div(9u32, 4), 3);
    }

    #[test_log::test]
    #[should_panic(expected = "divisor must be strictly positive, got 0")]
    fn zero_divisor() {
        floor_div(3, 0);
    }

    #[test_log::test]
    #[should_panic(expected = "divisor must be strictly positive, got -2")]
    fn negative_divisor() {
        ceil_div(3, -2);
    }

    #[test]
    fn powers() {
        for p in 0..12 {
            assert_eq!(pow(3i64, p), 3i64.pow(p));
        }
        assert_eq!(pow(2u32, 31), 1 << 31);
        assert_eq!(pow(0.5f64, 3), 0.125);
    }
}
