//! Linear algebra on tiny matrices, for grid-metric computations.
//!
//! The determinant is computed by cofactor expansion, which costs `O(N!)`.
//! That is cheaper than elimination for `N <= 4`, which is all that is
//! implemented. Do not extend this to larger matrices.

use std::ops::{Mul, Neg, Sub};

use num_traits::{Zero};

use super::{Tuple, Square, for_each_axis, for_each_axis_sum};

/// `x` if `axis` is even, otherwise `-x`.
#[inline(always)]
fn cofactor_sign<T: Neg<Output=T>>(axis: usize, x: T) -> T {
    if axis % 2 == 0 { x } else { -x }
}

/// Implemented by square matrices ([`Square`]) of size 1 to 4.
pub trait Determinant {
    type Output;

    fn det(self) -> Self::Output;
}

/// Implemented by `N - 1` vectors of length `N`, for `N` from 2 to 4.
pub trait OuterProduct {
    type Output;

    /// The vector whose component `i` is `(-1)^i` times the determinant of
    /// `self` without column `i`. It is orthogonal to every row of `self`,
    /// and for `N == 3` it equals [`cross_product()`].
    fn outer_product(self) -> Self::Output;
}

impl<T: Copy> Determinant for Square<T, 1> {
    type Output = T;
    #[inline(always)]
    fn det(self) -> T { self[0][0] }
}

macro_rules! impl_cofactor {
    ($($n:literal => $m:literal),*) => {$(
        /// Cofactor expansion along row 0.
        impl<T> Determinant for Square<T, $n> where
            T: Copy + Zero + Neg<Output=T> + Mul<Output=T>,
        {
            type Output = T;

            #[inline(always)]
            fn det(self) -> T {
                for_each_axis_sum::<$n, T>(|i| {
                    let minor: Square<T, $m> = Tuple::from_fn(|j| self[j + 1].without(i));
                    cofactor_sign(i, self[0][i] * minor.det())
                })
            }
        }

        impl<T> OuterProduct for Tuple<Tuple<T, $n>, $m> where
            T: Copy + Zero + Neg<Output=T> + Mul<Output=T>,
        {
            type Output = Tuple<T, $n>;

            #[inline(always)]
            fn outer_product(self) -> Self::Output {
                Tuple::from_fn(|i| {
                    let minor: Square<T, $m> = Tuple::from_fn(|j| self[j].without(i));
                    cofactor_sign(i, minor.det())
                })
            }
        }
    )*};
}

impl_cofactor! { 2 => 1, 3 => 2, 4 => 3 }

/// The determinant of `m`.
///
/// ```
/// use gridtuple::{Tuple, det};
/// assert_eq!(det(Tuple([Tuple([1, 2]), Tuple([3, 4])])), -2);
/// ```
pub fn det<M: Determinant>(m: M) -> M::Output { m.det() }

/// See [`OuterProduct::outer_product()`].
pub fn outer_product<V: OuterProduct>(rows: V) -> V::Output { rows.outer_product() }

/// The cross product of two 3-vectors.
///
/// ```
/// use gridtuple::{Tuple, cross_product};
/// assert_eq!(cross_product(Tuple([1, 0, 0]), Tuple([0, 1, 0])), Tuple([0, 0, 1]));
/// ```
pub fn cross_product<T>(a: Tuple<T, 3>, b: Tuple<T, 3>) -> Tuple<T, 3> where
    T: Copy + Mul<Output=T> + Sub<Output=T>,
{
    Tuple([
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ])
}

/// `u[0] * v[0] + u[1] * v[1] + ...`, accumulated onto zero.
pub fn inner_product<T: Copy + Zero + Mul<Output=T>, const N: usize>(u: Tuple<T, N>, v: Tuple<T, N>) -> T {
    let mut result = T::zero();
    for_each_axis::<N>(|i| result = result + u[i] * v[i]);
    result
}

/// The Kronecker product: element `i * N2 + j` is `u[i] * v[j]`. `M` must be
/// `N1 * N2`.
///
/// ```
/// use gridtuple::{Tuple, kronecker_product};
/// let k: Tuple<i32, 6> = kronecker_product(Tuple([1, 10]), Tuple([1, 2, 3]));
/// assert_eq!(k, Tuple([1, 2, 3, 10, 20, 30]));
/// ```
pub fn kronecker_product<T, const N1: usize, const N2: usize, const M: usize>(
    u: Tuple<T, N1>,
    v: Tuple<T, N2>,
) -> Tuple<T, M> where
    T: Copy + Zero + Mul<Output=T>,
{
    const { assert!(N1 * N2 == M, "wrong Kronecker product length") };
    let mut result = Tuple([T::zero(); M]);
    for_each_axis::<N1>(|i| for_each_axis::<N2>(|j| result[i * N2 + j] = u[i] * v[j]));
    result
}

/// The matrix whose row `i` is `a[i] * b`.
pub fn tensor_product<T: Copy + Mul<Output=T>, const N: usize>(a: Tuple<T, N>, b: Tuple<T, N>) -> Square<T, N> {
    Tuple::from_fn(|i| Tuple::from_fn(|j| a[i] * b[j]))
}

/// `a` with every element multiplied by `b`.
pub fn scale<T: Copy + Mul<Output=T>, const N: usize>(a: Tuple<T, N>, b: T) -> Tuple<T, N> {
    a.map(|x| x * b)
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn identity<const N: usize>() -> Square<f64, N> {
        Tuple::from_fn(|i| Tuple::from_fn(|j| if i == j { 1.0 } else { 0.0 }))
    }

    #[test]
    fn identity_det() {
        assert_eq!(identity::<1>().det(), 1.0);
        assert_eq!(identity::<2>().det(), 1.0);
        assert_eq!(identity::<3>().det(), 1.0);
        assert_eq!(identity::<4>().det(), 1.0);
    }

    fn sample() -> Square<i64, 4> {
        Tuple([
            Tuple([3, 2, 0, 1]),
            Tuple([4, 0, 1, 2]),
            Tuple([3, 0, 2, 1]),
            Tuple([9, 2, 3, 1]),
        ])
    }

    #[test]
    fn known_values() {
        assert_eq!(det(Tuple([Tuple([7])])), 7);
        assert_eq!(det(Tuple([Tuple([2, -1, 0]), Tuple([1, 3, 2]), Tuple([0, 1, 4])])), 24);
        assert_eq!(sample().det(), 24);
    }

    #[test]
    fn duplicated_row() {
        let mut m = sample();
        m[2] = m[0];
        assert_eq!(m.det(), 0);
        let m3 = Tuple([Tuple([1.5f64, 2.0, -1.0]), Tuple([0.0, 4.0, 2.5]), Tuple([1.5, 2.0, -1.0])]);
        assert_relative_eq!(m3.det(), 0.0);
    }

    #[test]
    fn row_swap_negates() {
        let m = sample();
        let mut swapped = m;
        swapped[1] = m[3];
        swapped[3] = m[1];
        assert_eq!(swapped.det(), -m.det());
    }

    #[test]
    fn float_det() {
        let m = Tuple([Tuple([0.5f64, 1.25]), Tuple([-2.0, 4.0])]);
        assert_relative_eq!(m.det(), 4.5);
    }

    #[test]
    fn outer_products() {
        assert_eq!(Tuple([Tuple([3, 4])]).outer_product(), Tuple([4, -3]));
        let a = Tuple([1, 2, 3]);
        let b = Tuple([-4, 0, 5]);
        assert_eq!(outer_product(Tuple([a, b])), cross_product(a, b));
        let rows = Tuple([
            Tuple([1.0f64, 2.0, 0.5, -1.0]),
            Tuple([0.0, 1.0, 3.0, 2.0]),
            Tuple([2.0, -1.0, 1.0, 1.0]),
        ]);
        let n = rows.outer_product();
        for r in rows {
            assert_relative_eq!(inner_product(r, n), 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn cross() {
        assert_eq!(cross_product(Tuple([1, 0, 0]), Tuple([0, 1, 0])), Tuple([0, 0, 1]));
        assert_eq!(cross_product(Tuple([0, 1, 0]), Tuple([1, 0, 0])), Tuple([0, 0, -1]));
        assert_eq!(cross_product(Tuple([2, 3, 4]), Tuple([5, 6, 7])), Tuple([-3, 6, -3]));
    }

    #[test]
    fn products() {
        assert_eq!(inner_product(Tuple([1, 2, 3]), Tuple([4, -5, 6])), 12);
        let k: Tuple<i32, 6> = kronecker_product(Tuple([1, 2, 3]), Tuple([10, 100]));
        assert_eq!(k, Tuple([10, 100, 20, 200, 30, 300]));
        let t = tensor_product(Tuple([1, 2]), Tuple([3, 4]));
        assert_eq!(t, Tuple([Tuple([3, 4]), Tuple([6, 8])]));
        assert_eq!(scale(Tuple([1.5, -2.0]), 2.0), Tuple([3.0, -4.0]));
    }
}
