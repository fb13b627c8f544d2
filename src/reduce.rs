//! Reductions, limiters and range predicates over [`Tuple`]s.
//!
//! Reductions fold from axis 0 upwards, one term at a time, with no pairwise
//! or compensated summation. Floating-point results are therefore exactly
//! those of the obvious loop, which matters for reproducing solver output.

use std::fmt::{Display};
use std::ops::{Add, Mul, Rem, Sub};

use num_traits::{Bounded, Float, One, PrimInt, Signed, Zero};

use super::{Tuple, Mask, for_each_axis, for_each_axis_sum, debug_require, Violation};
use super::scalar;

impl<T: Copy, const N: usize> Tuple<T, N> {
    /// `self[0] + self[1] + ...`, starting from zero.
    pub fn sum(self) -> T where T: Zero + Add<Output=T> {
        let mut total = T::zero();
        for_each_axis::<N>(|i| total = total + self[i]);
        total
    }

    /// `self[0] * self[1] * ...`. The empty product is one.
    ///
    /// ```
    /// use gridtuple::Tuple;
    /// assert_eq!(Tuple([3, 4, 5]).product(), 60);
    /// assert_eq!(Tuple::<u32, 0>([]).product(), 1);
    /// ```
    pub fn product(self) -> T where T: One + Mul<Output=T> {
        let mut total = T::one();
        for_each_axis::<N>(|i| total = total * self[i]);
        total
    }

    /// `self[0] * other[0] + self[1] * other[1] + ...`.
    pub fn dot_product<U: Copy>(self, other: Tuple<U, N>) -> T::Output where
        T: Mul<U>,
        T::Output: Zero + Add<Output=T::Output>,
    {
        for_each_axis_sum::<N, _>(|i| self[i] * other[i])
    }

    /// The squared Euclidean norm.
    pub fn l2norm2(self) -> T where T: Zero + Mul<Output=T> {
        let mut total = T::zero();
        for_each_axis::<N>(|i| total = total + self[i] * self[i]);
        total
    }

    /// The Euclidean norm.
    pub fn l2norm(self) -> T where T: Float {
        self.l2norm2().sqrt()
    }

    /// The largest element, or zero if every element is below zero.
    ///
    /// The running maximum starts at `T::zero()`, so this is the true maximum
    /// only if at least one element is non-negative.
    ///
    /// ```
    /// use gridtuple::Tuple;
    /// assert_eq!(Tuple([3, 9, 4]).max(), 9);
    /// assert_eq!(Tuple([-3, -9, -4]).max(), 0);
    /// ```
    pub fn max(self) -> T where T: Zero + PartialOrd {
        let mut result = T::zero();
        for_each_axis::<N>(|i| if self[i] > result { result = self[i]; });
        result
    }

    /// The smallest element, or `T::max_value()` for the empty tuple.
    pub fn min(self) -> T where T: Bounded + PartialOrd {
        let mut result = T::max_value();
        for_each_axis::<N>(|i| if self[i] < result { result = self[i]; });
        result
    }

    /// Axis-wise `max_of(self, other)`.
    pub fn maximum(self, other: Self) -> Self where T: PartialOrd {
        Tuple::from_fn(|i| scalar::max_of(self[i], other[i]))
    }

    /// Axis-wise `min_of(self, other)`.
    pub fn minimum(self, other: Self) -> Self where T: PartialOrd {
        Tuple::from_fn(|i| scalar::min_of(self[i], other[i]))
    }

    /// Axis-wise absolute value.
    pub fn abs(self) -> Self where T: Signed {
        self.map(|t| t.abs())
    }

    /// Axis-wise sign, as `-1`, `0` or `1` of type `T`.
    pub fn normalize(self) -> Self where T: Zero + One + PartialOrd + std::ops::Neg<Output=T> {
        self.map(|t| {
            if t > T::zero() {
                T::one()
            } else if t < T::zero() {
                -T::one()
            } else {
                T::zero()
            }
        })
    }

    /// Axis-wise [`scalar::pow`].
    pub fn pow(self, p: u32) -> Self where T: One + Mul<Output=T> {
        self.map(|t| scalar::pow(t, p))
    }

    /// Axis-wise `powf`.
    pub fn powf(self, p: T) -> Self where T: Float {
        self.map(|t| t.powf(p))
    }
}

/// `(base^exponents[0], base^exponents[1], ...)`.
///
/// ```
/// use gridtuple::{Tuple, power};
/// assert_eq!(power(2, Tuple([0, 1, 5])), Tuple([1, 2, 32]));
/// ```
pub fn power<T: Copy + One + Mul<Output=T>, const N: usize>(base: T, exponents: Tuple<u32, N>) -> Tuple<T, N> {
    exponents.map(|p| scalar::pow(base, p))
}

/// Axis-wise [`scalar::minmod`].
pub fn minmod<T: Copy + PartialOrd + Zero, const N: usize>(a: Tuple<T, N>, b: Tuple<T, N>) -> Tuple<T, N> {
    Tuple::from_fn(|i| scalar::minmod(a[i], b[i]))
}

/// Axis-wise [`scalar::maxmod`].
pub fn maxmod<T: Copy + PartialOrd + Zero, const N: usize>(a: Tuple<T, N>, b: Tuple<T, N>) -> Tuple<T, N> {
    Tuple::from_fn(|i| scalar::maxmod(a[i], b[i]))
}

/// Axis-wise [`scalar::ceil_div`].
#[track_caller]
pub fn ceil_div<T: PrimInt + Display, const N: usize>(a: Tuple<T, N>, b: Tuple<T, N>) -> Tuple<T, N> {
    let mut result = a;
    for_each_axis::<N>(|i| result[i] = scalar::ceil_div(a[i], b[i]));
    result
}

/// Axis-wise [`scalar::floor_div`].
#[track_caller]
pub fn floor_div<T: PrimInt + Display, const N: usize>(a: Tuple<T, N>, b: Tuple<T, N>) -> Tuple<T, N> {
    let mut result = a;
    for_each_axis::<N>(|i| result[i] = scalar::floor_div(a[i], b[i]));
    result
}

// ----------------------------------------------------------------------------

/// Axis-wise `min_of(max_of(a, lo), hi)`.
///
/// ```
/// use gridtuple::{Tuple, clamp};
/// let a = Tuple([-1, 5, 12]);
/// assert_eq!(clamp(a, Tuple([0, 0, 0]), Tuple([10, 3, 10])), Tuple([0, 3, 10]));
/// ```
pub fn clamp<T: Copy + PartialOrd, const N: usize>(a: Tuple<T, N>, lo: Tuple<T, N>, hi: Tuple<T, N>) -> Tuple<T, N> {
    Tuple::from_fn(|i| scalar::clamp(a[i], lo[i], hi[i]))
}

/// [`clamp()`] with the same bounds on every axis.
pub fn clamp_scalar<T: Copy + PartialOrd, const N: usize>(a: Tuple<T, N>, lo: T, hi: T) -> Tuple<T, N> {
    a.map(|t| scalar::clamp(t, lo, hi))
}

/// `true` if clamping `a` to `[lo, hi]` leaves it unchanged.
///
/// This is `a == clamp(a, lo, hi)`, not a direct comparison, so an element
/// that does not compare (NaN) is judged by how [`scalar::clamp`] treats it.
pub fn in_range<T: Copy + PartialOrd, const N: usize>(a: Tuple<T, N>, lo: Tuple<T, N>, hi: Tuple<T, N>) -> bool {
    a == clamp(a, lo, hi)
}

/// [`in_range()`] with the same bounds on every axis.
pub fn in_range_scalar<T: Copy + PartialOrd, const N: usize>(a: Tuple<T, N>, lo: T, hi: T) -> bool {
    a == clamp_scalar(a, lo, hi)
}

/// `true` if `lo[i] <= a[i] <= hi[i]` on every axis whose `mask` bit is
/// clear. Axes with the bit set are exempt.
pub fn in_range_with_mask<T: Copy + PartialOrd, const N: usize>(
    a: Tuple<T, N>,
    lo: Tuple<T, N>,
    hi: Tuple<T, N>,
    mask: Mask<N>,
) -> bool {
    let mut result = true;
    for_each_axis::<N>(|i| result = result && (mask[i] || (lo[i] <= a[i] && a[i] <= hi[i])));
    result
}

/// Wraps `a` into `[offset, offset + size)` on every axis whose `mask` bit
/// is set. Other axes are returned unchanged.
///
/// `size` must be positive on masked axes. Coordinates any number of periods
/// away from the region are wrapped, on either side, and unsigned coordinates
/// below `offset` are handled without underflow.
///
/// ```
/// use gridtuple::{Tuple, mod_periodic};
/// let offset = Tuple([2, 2]);
/// let size = Tuple([4, 4]);
/// let periodic = Tuple([true, false]);
/// assert_eq!(mod_periodic(Tuple([6, 6]), offset, size, periodic), Tuple([2, 6]));
/// assert_eq!(mod_periodic(Tuple([1, 1]), offset, size, periodic), Tuple([5, 1]));
/// ```
#[track_caller]
pub fn mod_periodic<T, const N: usize>(
    a: Tuple<T, N>,
    offset: Tuple<T, N>,
    size: Tuple<T, N>,
    mask: Mask<N>,
) -> Tuple<T, N> where
    T: Copy + PartialOrd + Zero + Display + Add<Output=T> + Sub<Output=T> + Rem<Output=T>,
{
    let mut result = a;
    for_each_axis::<N>(|i| {
        if mask[i] {
            debug_require!(size[i] > T::zero(), Violation::NonPositivePeriod(size[i].to_string()));
            // Only subtract the smaller operand from the larger, so that
            // unsigned coordinates below `offset` do not underflow.
            result[i] = if a[i] < offset[i] {
                let r = (offset[i] - a[i]) % size[i];
                if r == T::zero() { offset[i] } else { offset[i] + (size[i] - r) }
            } else {
                (a[i] - offset[i]) % size[i] + offset[i]
            };
        }
    });
    result
}

// ----------------------------------------------------------------------------
