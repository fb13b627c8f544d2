//! Per-axis traversal.
//!
//! Every operation in this crate visits the axes of a [`Tuple`] through these
//! two functions. `N` is a compile-time constant, so the loops are unrolled
//! by the optimiser.
//!
//! [`Tuple`]: super::Tuple

use std::ops::{Add};

use num_traits::{Zero};

/// Calls `f(i)` for each `i` in `0..N`, in ascending order.
///
/// ```
/// let mut seen = Vec::new();
/// gridtuple::for_each_axis::<3>(|i| seen.push(i));
/// assert_eq!(seen, [0, 1, 2]);
/// ```
#[inline(always)]
pub fn for_each_axis<const N: usize>(mut f: impl FnMut(usize)) {
    for i in 0..N { f(i); }
}

/// Returns `f(0) + f(1) + ... + f(N - 1)`, folded from the left.
///
/// The fold does not start from a zero seed, so the result is bit-for-bit
/// the left fold of the terms. `N == 0` gives `S::zero()`.
///
/// ```
/// assert_eq!(gridtuple::for_each_axis_sum::<4, _>(|i| i * i), 14);
/// ```
#[inline(always)]
pub fn for_each_axis_sum<const N: usize, S>(mut f: impl FnMut(usize) -> S) -> S where
    S: Zero + Add<Output=S>,
{
    if N == 0 { return S::zero(); }
    let mut total = f(0);
    for i in 1..N { total = total + f(i); }
    total
}

// ----------------------------------------------------------------------------
