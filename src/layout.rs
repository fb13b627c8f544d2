//! Rearranging the axes of a [`Tuple`].
//!
//! Where the length of the result depends on the length of the input, the
//! result length is a separate const parameter, usually inferred from the
//! context, and the relationship between the two is checked when the
//! function is instantiated. A wrong length is a build error, not a panic:
//!
//! ```compile_fail
//! use gridtuple::{Tuple, Slice};
//! let a = Tuple([1, 2, 3]);
//! let b: Tuple<i32, 2> = a.slice(Slice::<1, 4, 1>); // `4` is past the end.
//! ```

use num_traits::{Zero};

use super::{Tuple, for_each_axis, require, Violation};

/// Selects elements `LO, LO + STEP, ...` below `HI`. See [`Tuple::slice()`].
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Slice<const LO: usize, const HI: usize, const STEP: usize>;

/// Names axis `K` at compile time. See [`Tuple::skip()`].
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Axis<const K: usize>;

impl<T: Copy, const N: usize> Tuple<T, N> {
    /// Elements `LO, LO + STEP, ...` below `HI`.
    ///
    /// The result has `M = (HI - LO + STEP - 1) / STEP` elements. It is a
    /// build error if `HI < LO`, `STEP == 0`, `HI > N`, or `M` is wrong.
    ///
    /// ```
    /// use gridtuple::{Tuple, Slice};
    /// let a = Tuple([0, 1, 2, 3, 4]);
    /// assert_eq!(a.slice(Slice::<1, 5, 2>), Tuple([1, 3]));
    /// assert_eq!(a.slice(Slice::<0, 2, 1>), Tuple([0, 1]));
    /// ```
    #[inline(always)]
    pub fn slice<const LO: usize, const HI: usize, const STEP: usize, const M: usize>(
        self,
        _: Slice<LO, HI, STEP>,
    ) -> Tuple<T, M> {
        const {
            assert!(HI >= LO, "invalid slice");
            assert!(STEP > 0, "invalid step");
            assert!(HI <= N, "slice index out of bounds");
            assert!(M == (HI - LO + STEP - 1) / STEP, "wrong slice length");
        };
        Tuple::from_fn(|i| self[LO + i * STEP])
    }

    /// All axes except axis `K`. It is a build error if `K >= N` or
    /// `M != N - 1`.
    ///
    /// ```
    /// use gridtuple::{Tuple, Axis};
    /// assert_eq!(Tuple([5, 6, 7]).skip(Axis::<1>), Tuple([5, 7]));
    /// ```
    #[inline(always)]
    pub fn skip<const K: usize, const M: usize>(self, _: Axis<K>) -> Tuple<T, M> {
        const {
            assert!(K < N, "skipped axis out of bounds");
            assert!(M + 1 == N, "wrong skip length");
        };
        Tuple::from_fn(|i| if i < K { self[i] } else { self[i + 1] })
    }

    /// [`Tuple::skip()`] with the axis chosen at run time.
    ///
    /// Panics if `axis >= N`.
    #[inline(always)]
    #[track_caller]
    pub fn without<const M: usize>(self, axis: usize) -> Tuple<T, M> {
        const { assert!(M + 1 == N, "wrong skip length") };
        require!(axis < N, Violation::AxisOutOfRange {axis, size: N});
        Tuple::from_fn(|i| if i < axis { self[i] } else { self[i + 1] })
    }

    /// The elements of `self` followed by those of `other`. `M` must be
    /// `N + N2`.
    ///
    /// ```
    /// use gridtuple::Tuple;
    /// assert_eq!(Tuple([1, 2]).concat(Tuple([3])), Tuple([1, 2, 3]));
    /// ```
    #[inline(always)]
    pub fn concat<const N2: usize, const M: usize>(self, other: Tuple<T, N2>) -> Tuple<T, M> {
        const { assert!(N + N2 == M, "wrong concatenation length") };
        Tuple::from_fn(|i| if i < N { self[i] } else { other[i - N] })
    }

    /// `t` followed by the elements of `self`.
    #[inline(always)]
    pub fn prepend<const M: usize>(self, t: T) -> Tuple<T, M> {
        Tuple([t]).concat(self)
    }

    /// The elements of `self` followed by `t`.
    #[inline(always)]
    pub fn append<const M: usize>(self, t: T) -> Tuple<T, M> {
        self.concat(Tuple([t]))
    }

    /// The elements in reverse order.
    #[inline(always)]
    pub fn reverse(self) -> Self {
        Tuple::from_fn(|i| self[N - 1 - i])
    }

    /// `(self[order[0]], self[order[1]], ...)`.
    ///
    /// `order` is expected to be a permutation of `0..N`. This is not
    /// checked: repeated axes are simply repeated.
    ///
    /// ```
    /// use gridtuple::Tuple;
    /// assert_eq!(Tuple(['x', 'y', 'z']).reorder(Tuple([2, 0, 1])), Tuple(['z', 'x', 'y']));
    /// ```
    #[inline(always)]
    pub fn reorder(self, order: Tuple<usize, N>) -> Self {
        Tuple::from_fn(|i| self[order[i]])
    }

    /// `S` consecutive elements starting at `offset`.
    ///
    /// Panics if `offset + S > N`.
    #[track_caller]
    pub fn cut<const S: usize>(self, offset: usize) -> Tuple<T, S> {
        require!(offset <= N && S <= N - offset, Violation::CutOutOfRange {offset, len: S, size: N});
        Tuple::from_fn(|i| self[offset + i])
    }

    /// A copy of `self` with every axis not listed in `axes` set to zero.
    ///
    /// ```
    /// use gridtuple::Tuple;
    /// assert_eq!(Tuple([1, 2, 3]).keep(&[1]), Tuple([0, 2, 0]));
    /// ```
    #[track_caller]
    pub fn keep(self, axes: &[usize]) -> Self where T: Zero {
        let mut result = Tuple([T::zero(); N]);
        for &axis in axes {
            require!(axis < N, Violation::AxisOutOfRange {axis, size: N});
            result[axis] = self[axis];
        }
        result
    }

    /// The index of the first nonzero element, or `N` if there is none.
    ///
    /// ```
    /// use gridtuple::Tuple;
    /// assert_eq!(Tuple([0, 0, 4, 1]).find_first_not_zero(), 2);
    /// assert_eq!(Tuple([0.0, 0.0]).find_first_not_zero(), 2);
    /// ```
    pub fn find_first_not_zero(self) -> usize where T: Zero {
        let mut idx = N;
        for_each_axis::<N>(|i| if idx == N && !self[i].is_zero() { idx = i; });
        idx
    }
}

/// For each axis `n`, the position at which `n` appears in `order`, or `N`
/// if it does not appear.
///
/// For a permutation this is the inverse permutation:
/// `a.reorder(order).reorder(inverse_permutation(order)) == a`.
pub fn inverse_permutation<const N: usize>(order: Tuple<usize, N>) -> Tuple<usize, N> {
    Tuple::from_fn(|n| order.iter().position(|&o| o == n).unwrap_or(N))
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slices() {
        let a = Tuple([10, 11, 12, 13, 14, 15]);
        let b: Tuple<i32, 3> = a.slice(Slice::<0, 6, 2>);
        assert_eq!(b, Tuple([10, 12, 14]));
        let c: Tuple<i32, 2> = a.slice(Slice::<1, 6, 3>);
        assert_eq!(c, Tuple([11, 14]));
        let d: Tuple<i32, 0> = a.slice(Slice::<3, 3, 1>);
        assert_eq!(d, Tuple([]));
        let e: Tuple<i32, 6> = a.slice(Slice::<0, 6, 1>);
        assert_eq!(e, a);
    }

    #[test]
    fn skips() {
        let a = Tuple([1, 2, 3, 4]);
        assert_eq!(a.skip(Axis::<0>), Tuple([2, 3, 4]));
        assert_eq!(a.skip(Axis::<3>), Tuple([1, 2, 3]));
        for axis in 0..4 {
            let s: Tuple<i32, 3> = a.without(axis);
            assert!(!s.iter().any(|&x| x == a[axis]));
        }
    }

    #[test_log::test]
    #[should_panic(expected = "axis 2 is out of range for length 2")]
    fn without_out_of_range() {
        let _: Tuple<i32, 1> = Tuple([1, 2]).without(2);
    }

    #[test]
    fn concatenation() {
        let a = Tuple([1.0, 2.0]);
        let b = Tuple([3.0, 4.0, 5.0]);
        let ab: Tuple<f64, 5> = a.concat(b);
        assert_eq!(ab, Tuple([1.0, 2.0, 3.0, 4.0, 5.0]));
        assert_eq!(a.prepend(0.0), Tuple([0.0, 1.0, 2.0]));
        assert_eq!(a.append(9.0), Tuple([1.0, 2.0, 9.0]));
        let empty: Tuple<f64, 2> = Tuple::<f64, 0>([]).concat(a);
        assert_eq!(empty, a);
    }

    #[test]
    fn reversal() {
        assert_eq!(Tuple([1, 2, 3]).reverse(), Tuple([3, 2, 1]));
        assert_eq!(Tuple::<u8, 0>([]).reverse(), Tuple([]));
    }

    #[test]
    fn permutations() {
        let a = Tuple(['a', 'b', 'c', 'd']);
        let order = Tuple([3, 1, 0, 2]);
        let inverse = inverse_permutation(order);
        assert_eq!(inverse, Tuple([2, 1, 3, 0]));
        assert_eq!(a.reorder(order).reorder(inverse), a);
        assert_eq!(inverse_permutation(Tuple([1, 1, 0])), Tuple([2, 0, 3]));
    }

    #[test]
    fn cuts() {
        let a = Tuple([1, 2, 3, 4, 5]);
        assert_eq!(a.cut::<2>(3), Tuple([4, 5]));
        assert_eq!(a.cut::<0>(5), Tuple([]));
    }

    #[test_log::test]
    #[should_panic(expected = "cut of 2 elements at offset 4 exceeds length 5")]
    fn cut_out_of_range() {
        Tuple([1, 2, 3, 4, 5]).cut::<2>(4);
    }

    #[test_log::test]
    #[should_panic(expected = "exceeds length 5")]
    fn cut_huge_offset() {
        Tuple([1, 2, 3, 4, 5]).cut::<2>(usize::MAX);
    }

    #[test]
    fn first_not_zero() {
        assert_eq!(Tuple([0, 3, 0, 5]).find_first_not_zero(), 1);
        assert_eq!(Tuple([7, 0]).find_first_not_zero(), 0);
        assert_eq!(Tuple([0u8; 3]).find_first_not_zero(), 3);
        assert_eq!(Tuple::<i32, 0>([]).find_first_not_zero(), 0);
    }

    #[test]
    fn keep_axes() {
        assert_eq!(Tuple([4, 5, 6]).keep(&[0, 2]), Tuple([4, 0, 6]));
        assert_eq!(Tuple([4, 5, 6]).keep(&[]), Tuple([0, 0, 0]));
    }
}
