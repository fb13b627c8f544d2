//! Conversion between flat indices and per-axis coordinates.
//!
//! A region of shape `s` is linearised with axis 0 varying fastest: the
//! coordinate `c` has flat index `c[0] + s[0] * (c[1] + s[1] * (c[2] + ...))`.
//! [`flat_to_cart()`] and [`cart_to_flat()`] are mutually inverse on
//! `0..product(s)`, and [`nested_loop()`] visits a region in exactly this
//! order. Solvers rely on the order for reproducible floating-point sums, so
//! it must not change.

use std::fmt::{Display};

use num_traits::{PrimInt};

use super::{Tuple, Shape, Cart, Unpack, for_each_axis, require, debug_require, Violation};

/// Decodes `idx` into a coordinate within `shape`.
///
/// Axes `0..N-1` take `idx % shape[i]` and divide `idx` by `shape[i]`. The
/// last axis takes whatever quotient remains, so its extent is never read.
///
/// Requires `0 <= idx < shape.product()` (checked in debug builds).
///
/// ```
/// use gridtuple::{Tuple, flat_to_cart};
/// assert_eq!(flat_to_cart(7, Tuple([3, 4])), Tuple([1, 2]));
/// ```
#[inline(always)]
#[track_caller]
pub fn flat_to_cart<T: PrimInt + Display, const N: usize>(idx: T, shape: Shape<T, N>) -> Cart<T, N> {
    debug_require!(
        idx >= T::zero() && below_product(idx, shape),
        Violation::FlatIndexOutOfRange {index: idx.to_string(), shape: shape.to_string()}
    );
    let mut idx = idx;
    let mut cart = Tuple([T::zero(); N]);
    for_each_axis::<N>(|i| {
        if i + 1 < N {
            cart[i] = idx % shape[i];
            idx = idx / shape[i];
        } else {
            cart[i] = idx;
        }
    });
    cart
}

/// `idx < shape.product()`, treating an overflowing product as unbounded.
fn below_product<T: PrimInt, const N: usize>(idx: T, shape: Shape<T, N>) -> bool {
    let mut limit = Some(T::one());
    for_each_axis::<N>(|i| limit = limit.and_then(|l| l.checked_mul(&shape[i])));
    limit.map_or(true, |l| idx < l)
}

/// Encodes a coordinate within `shape` as a flat index.
///
/// ```
/// use gridtuple::{Tuple, cart_to_flat};
/// assert_eq!(cart_to_flat(Tuple([1, 2]), Tuple([3, 4])), 7);
/// ```
#[inline(always)]
pub fn cart_to_flat<T: PrimInt, const N: usize>(cart: Cart<T, N>, shape: Shape<T, N>) -> T {
    let mut idx = T::zero();
    let mut stride = T::one();
    for_each_axis::<N>(|i| {
        idx = idx + stride * cart[i];
        stride = stride * shape[i];
    });
    idx
}

/// [`cart_to_flat()`] given only the first `N - 1` extents of the shape.
///
/// The extent of the last axis never contributes to a flat index, so callers
/// that do not know it may omit it. `M` must be `N - 1`.
///
/// ```
/// use gridtuple::{Tuple, cart_to_flat_short};
/// assert_eq!(cart_to_flat_short(Tuple([1, 2, 5]), Tuple([3, 4])), 1 + 2 * 3 + 5 * 12);
/// ```
#[inline(always)]
pub fn cart_to_flat_short<T: PrimInt, const N: usize, const M: usize>(cart: Cart<T, N>, shape: Shape<T, M>) -> T {
    const { assert!(M + 1 == N, "shape must have exactly one axis fewer than the coordinate") };
    let mut idx = T::zero();
    let mut stride = T::one();
    for_each_axis::<N>(|i| {
        idx = idx + stride * cart[i];
        if i < M { stride = stride * shape[i]; }
    });
    idx
}

/// The `N` digits of `value` in base `base`, least significant first.
///
/// Panics unless `0 <= value < base^N`.
///
/// ```
/// use gridtuple::{Tuple, base_to_array};
/// assert_eq!(base_to_array::<_, 4>(2, 6), Tuple([0, 1, 1, 0]));
/// ```
#[track_caller]
pub fn base_to_array<T: PrimInt + Display, const N: usize>(base: T, value: T) -> Tuple<T, N> {
    // If `base^N` overflows `T` then every non-negative `value` fits.
    let fits = match num_traits::checked_pow(base, N) {
        Some(limit) => value < limit,
        None => true,
    };
    require!(
        fits && value >= T::zero(),
        Violation::DigitsOverflow {value: value.to_string(), base: base.to_string(), digits: N}
    );
    flat_to_cart(value, Tuple([base; N]))
}

/// The inverse of [`base_to_array()`].
pub fn array_to_base<T: PrimInt, const N: usize>(base: T, digits: Tuple<T, N>) -> T {
    cart_to_flat(digits, Tuple([base; N]))
}

// ----------------------------------------------------------------------------

/// Calls `f` on every coordinate of the box `[offset, offset + size)`, in
/// flat-index order (axis 0 fastest).
///
/// ```
/// use gridtuple::{Tuple, nested_loop};
/// let mut seen = Vec::new();
/// nested_loop(Tuple([10, 20]), Tuple([2, 2]), |c| seen.push(c));
/// assert_eq!(seen, [Tuple([10, 20]), Tuple([11, 20]), Tuple([10, 21]), Tuple([11, 21])]);
/// ```
#[track_caller]
pub fn nested_loop<T: PrimInt + Display, const N: usize>(
    offset: Cart<T, N>,
    size: Shape<T, N>,
    f: impl FnMut(Cart<T, N>),
) {
    cartesian(offset, size).for_each(f);
}

/// [`nested_loop()`] passing each coordinate as a native tuple, so that `f`
/// can name the axes: `|(i, j)| ...`.
#[track_caller]
pub fn nested_loop_unpack<T: PrimInt + Display, const N: usize>(
    offset: Cart<T, N>,
    size: Shape<T, N>,
    mut f: impl FnMut(<Cart<T, N> as Unpack>::Native),
) where
    Cart<T, N>: Unpack,
{
    cartesian(offset, size).for_each(|c| f(c.unpack()));
}

/// An iterator over the box `[offset, offset + size)`, in the same order as
/// [`nested_loop()`].
pub fn cartesian<T: PrimInt + Display, const N: usize>(offset: Cart<T, N>, size: Shape<T, N>) -> Cartesian<T, N> {
    Cartesian {offset, size, next: T::zero(), end: size.product()}
}

/// The return type of [`cartesian()`].
#[derive(Debug, Copy, Clone)]
pub struct Cartesian<T, const N: usize> {
    offset: Cart<T, N>,
    size: Shape<T, N>,
    next: T,
    end: T,
}

impl<T: PrimInt + Display, const N: usize> Iterator for Cartesian<T, N> {
    type Item = Cart<T, N>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end { return None; }
        let c = flat_to_cart(self.next, self.size);
        self.next = self.next + T::one();
        Some(self.offset + c)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.next < self.end { self.end - self.next } else { T::zero() };
        let n = remaining.to_usize();
        (n.unwrap_or(usize::MAX), n)
    }
}

// ----------------------------------------------------------------------------
