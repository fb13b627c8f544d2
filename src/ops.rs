//! Generic programming over binary arithmetic operators, and the elementwise
//! operators of [`Tuple`].
//!
//! For each binary operator in [`std::ops`] this module contains a type of the
//! same name that cannot be instantiated and that implements [`Binary`]. For
//! example, [`Add`] corresponds to [`std::ops::Add`]. This can be passed as a
//! type parameter to generic code, e.g. [`Tuple::binary()`].
//!
//! `Tuple<T, N> + Tuple<U, N>` is defined whenever `T: std::ops::Add<U>`, and
//! likewise for the other operators. The element type of the result is the
//! operator's `Output`. Operators with a scalar right-hand side are in the
//! `broadcast` module.

use super::{Tuple, Mask, for_each_axis};

/// A function that combines `T` with `U`.
///
/// This trait has no methods that take `self`. It makes sense to implement it
/// for types that cannot be instantiated, such as empty enumerations.
pub trait Binary<T, U> {
    type Output;

    fn call(t: T, u: U) -> Self::Output;
}

// ----------------------------------------------------------------------------

/// An implementation of [`Binary`] that constructs a pair.
pub enum Pair {}

impl<T, U> Binary<T, U> for Pair {
    type Output = (T, U);
    #[inline(always)]
    fn call(t: T, u: U) -> Self::Output { (t, u) }
}

/// Defines an uninhabited operator tag that forwards to a [`std::ops`] trait.
macro_rules! binary_tag {
    ($($op:ident { $method:ident })*) => {$(
        pub enum $op {}

        impl<T, U> Binary<T, U> for $op where T: std::ops::$op<U> {
            type Output = T::Output;
            #[inline(always)]
            fn call(t: T, u: U) -> Self::Output { t.$method(u) }
        }
    )*};
}

binary_tag! {
    Add { add }
    Sub { sub }
    Mul { mul }
    Div { div }
    Rem { rem }
    BitAnd { bitand }
    BitOr { bitor }
    BitXor { bitxor }
}

// ----------------------------------------------------------------------------

impl<T: Copy, const N: usize> Tuple<T, N> {
    /// Combines `self` and `other` axis by axis using `B`.
    ///
    /// ```
    /// use gridtuple::{Tuple, ops};
    /// let a = Tuple([1, 2, 3]).binary::<ops::Pair, _>(Tuple([true, false, true]));
    /// assert_eq!(a, Tuple([(1, true), (2, false), (3, true)]));
    /// ```
    #[inline(always)]
    pub fn binary<B: Binary<T, U>, U: Copy>(self, other: Tuple<U, N>) -> Tuple<B::Output, N> {
        Tuple::from_fn(|i| B::call(self[i], other[i]))
    }

    /// Combines every axis of `self` with the same `u` using `B`.
    #[inline(always)]
    pub fn binary_scalar<B: Binary<T, U>, U: Copy>(self, u: U) -> Tuple<B::Output, N> {
        Tuple::from_fn(|i| B::call(self[i], u))
    }

    /// `true` if `f` holds on every axis.
    #[inline(always)]
    pub fn satisfy(&self, mut f: impl FnMut(T) -> bool) -> bool {
        let mut result = true;
        for_each_axis::<N>(|i| result = result && f(self[i]));
        result
    }
}

/// Implement one of the [`std::ops`] binary operators and its compound
/// assignment form for [`Tuple`], elementwise.
macro_rules! impl_op_for_tuple {
    ($op:ident { $method:ident } $op_assign:ident { $method_assign:ident }) => {
        impl<T: Copy, U: Copy, const N: usize> std::ops::$op<Tuple<U, N>> for Tuple<T, N> where
            T: std::ops::$op<U>,
        {
            type Output = Tuple<T::Output, N>;
            #[inline(always)]
            fn $method(self, other: Tuple<U, N>) -> Self::Output { self.binary::<$op, U>(other) }
        }

        impl<T, U: Copy, const N: usize> std::ops::$op_assign<Tuple<U, N>> for Tuple<T, N> where
            T: std::ops::$op_assign<U>,
        {
            #[inline(always)]
            fn $method_assign(&mut self, other: Tuple<U, N>) {
                for_each_axis::<N>(|i| self[i].$method_assign(other[i]));
            }
        }
    };
}

impl_op_for_tuple! { Add { add } AddAssign { add_assign } }
impl_op_for_tuple! { Sub { sub } SubAssign { sub_assign } }
impl_op_for_tuple! { Mul { mul } MulAssign { mul_assign } }
impl_op_for_tuple! { Div { div } DivAssign { div_assign } }
impl_op_for_tuple! { Rem { rem } RemAssign { rem_assign } }
impl_op_for_tuple! { BitAnd { bitand } BitAndAssign { bitand_assign } }
impl_op_for_tuple! { BitOr { bitor } BitOrAssign { bitor_assign } }
impl_op_for_tuple! { BitXor { bitxor } BitXorAssign { bitxor_assign } }

impl<T: std::ops::Neg, const N: usize> std::ops::Neg for Tuple<T, N> {
    type Output = Tuple<T::Output, N>;
    #[inline(always)]
    fn neg(self) -> Self::Output { self.map(|t| -t) }
}

impl<T: std::ops::Not, const N: usize> std::ops::Not for Tuple<T, N> {
    type Output = Tuple<T::Output, N>;
    #[inline(always)]
    fn not(self) -> Self::Output { self.map(|t| !t) }
}

// ----------------------------------------------------------------------------

impl<T: Copy + PartialOrd, const N: usize> Tuple<T, N> {
    /// Axis-wise `self == other`.
    pub fn equal(self, other: Self) -> Mask<N> { Tuple::from_fn(|i| self[i] == other[i]) }

    /// Axis-wise `self == t`.
    pub fn equal_scalar(self, t: T) -> Mask<N> { self.map(|s| s == t) }

    /// Axis-wise `self > t`.
    pub fn greater(self, t: T) -> Mask<N> { self.map(|s| s > t) }

    /// Axis-wise `self >= t`.
    pub fn greater_equal(self, t: T) -> Mask<N> { self.map(|s| s >= t) }

    /// Axis-wise `self < t`.
    pub fn less(self, t: T) -> Mask<N> { self.map(|s| s < t) }

    /// Axis-wise `self <= t`.
    pub fn less_equal(self, t: T) -> Mask<N> { self.map(|s| s <= t) }
}

impl<const N: usize> Mask<N> {
    /// `true` if any axis is set. The empty mask gives `false`.
    pub fn any(self) -> bool { self.iter().any(|&b| b) }

    /// `true` if every axis is set. The empty mask gives `true`.
    pub fn all(self) -> bool { self.satisfy(|b| b) }

    /// Picks `a[i]` where axis `i` is set and `b[i]` elsewhere.
    ///
    /// ```
    /// use gridtuple::Tuple;
    /// let periodic = Tuple([true, false]);
    /// assert_eq!(periodic.select(Tuple([1, 2]), Tuple([10, 20])), Tuple([1, 20]));
    /// ```
    pub fn select<T: Copy>(self, a: Tuple<T, N>, b: Tuple<T, N>) -> Tuple<T, N> {
        Tuple::from_fn(|i| if self[i] { a[i] } else { b[i] })
    }
}

// ----------------------------------------------------------------------------
