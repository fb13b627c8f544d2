//! The fixed-length value type [`Tuple`] and its aliases.
//!
//! A `Tuple<T, N>` is an `[T; N]` with arithmetic. `N` is part of the type,
//! so combining tuples of different lengths is a compile error rather than a
//! run-time check. Tuples are `Copy` whenever `T` is, never allocate, and are
//! passed around by value.

use std::cmp::{Ordering};
use std::fmt::{self, Display};

use num_traits::{AsPrimitive};

/// `N` values of type `T`, one per axis.
///
/// ```
/// use gridtuple::Tuple;
/// let shape = Tuple([3, 4]);
/// let cell = Tuple([1, 2]);
/// assert_eq!(cell + shape, Tuple([4, 6]));
/// assert_eq!(cell.to_string(), "(1,2,)");
/// ```
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq)]
#[repr(transparent)]
pub struct Tuple<T, const N: usize>(pub [T; N]);

/// Per-axis flags, e.g. "this axis is periodic".
pub type Mask<const N: usize> = Tuple<bool, N>;

/// Strictly positive per-axis extents of a region.
pub type Shape<T, const N: usize> = Tuple<T, N>;

/// A per-axis coordinate within a [`Shape`].
pub type Cart<T, const N: usize> = Tuple<T, N>;

/// An `N`×`N` matrix stored as `N` rows.
pub type Square<T, const N: usize> = Tuple<Tuple<T, N>, N>;

impl<T, const N: usize> Tuple<T, N> {
    /// Builds a `Tuple` whose element `i` is `f(i)`, calling `f` for `i` in
    /// ascending order.
    #[inline(always)]
    pub fn from_fn(f: impl FnMut(usize) -> T) -> Self {
        Self(std::array::from_fn(f))
    }

    /// The number of axes.
    #[inline(always)]
    pub const fn len(&self) -> usize { N }

    /// `true` for the zero-length tuple.
    #[inline(always)]
    pub const fn is_empty(&self) -> bool { N == 0 }

    pub fn as_array(&self) -> &[T; N] { &self.0 }

    pub fn into_array(self) -> [T; N] { self.0 }

    pub fn iter(&self) -> std::slice::Iter<'_, T> { self.0.iter() }

    /// Applies `f` to every element.
    #[inline(always)]
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Tuple<U, N> {
        Tuple(self.0.map(f))
    }
}

impl<T: Copy, const N: usize> Tuple<T, N> {
    /// Every element equal to `value`.
    #[inline(always)]
    pub fn constant(value: T) -> Self { Self([value; N]) }

    /// Converts each element with `as`-cast semantics.
    ///
    /// ```
    /// use gridtuple::Tuple;
    /// assert_eq!(Tuple([1.7f64, -2.5]).cast::<i32>(), Tuple([1, -2]));
    /// ```
    #[inline(always)]
    pub fn cast<U: Copy + 'static>(self) -> Tuple<U, N> where T: AsPrimitive<U> {
        self.map(|t| t.as_())
    }

    /// Overwrites the leading `min(src.len(), N)` elements with those of
    /// `src`. The remaining elements keep their values.
    pub fn fill_from_slice(&mut self, src: &[T]) {
        let n = src.len().min(N);
        self.0[..n].copy_from_slice(&src[..n]);
    }
}

impl<T: Copy + 'static, const N: usize> Tuple<T, N> where usize: AsPrimitive<T> {
    /// `(0, 1, ..., N - 1)`.
    ///
    /// ```
    /// use gridtuple::Tuple;
    /// assert_eq!(Tuple::<i64, 3>::sequence(), Tuple([0, 1, 2]));
    /// ```
    pub fn sequence() -> Self { Self::from_fn(|i| i.as_()) }
}

impl<T: Default, const N: usize> Default for Tuple<T, N> {
    fn default() -> Self { Self::from_fn(|_| T::default()) }
}

impl<T, const N: usize> From<[T; N]> for Tuple<T, N> {
    fn from(a: [T; N]) -> Self { Self(a) }
}

impl<T, const N: usize> From<Tuple<T, N>> for [T; N] {
    fn from(t: Tuple<T, N>) -> Self { t.0 }
}

impl<T, const N: usize> std::ops::Index<usize> for Tuple<T, N> {
    type Output = T;
    #[inline(always)]
    fn index(&self, axis: usize) -> &T { &self.0[axis] }
}

impl<T, const N: usize> std::ops::IndexMut<usize> for Tuple<T, N> {
    #[inline(always)]
    fn index_mut(&mut self, axis: usize) -> &mut T { &mut self.0[axis] }
}

impl<T, const N: usize> AsRef<[T]> for Tuple<T, N> {
    fn as_ref(&self) -> &[T] { &self.0 }
}

impl<T, const N: usize> AsMut<[T]> for Tuple<T, N> {
    fn as_mut(&mut self) -> &mut [T] { &mut self.0 }
}

impl<T, const N: usize> IntoIterator for Tuple<T, N> {
    type Item = T;
    type IntoIter = std::array::IntoIter<T, N>;
    fn into_iter(self) -> Self::IntoIter { self.0.into_iter() }
}

impl<'a, T, const N: usize> IntoIterator for &'a Tuple<T, N> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter { self.0.iter() }
}

// ----------------------------------------------------------------------------

/// Renders as `(e0,e1,...,)`: every element is followed by a comma, and the
/// empty tuple is `()`. Downstream parsers of solver logs rely on this form.
impl<T: Display, const N: usize> Display for Tuple<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for t in &self.0 { write!(f, "{},", t)?; }
        f.write_str(")")
    }
}

// ----------------------------------------------------------------------------

/// Tuples are ordered with the *last* axis most significant. Axis `N - 1` is
/// compared first, and axis 0 only breaks a tie on all other axes.
///
/// ```
/// use gridtuple::Tuple;
/// assert!(Tuple([9, 0]) < Tuple([0, 1]));
/// assert!(Tuple([0, 1]) < Tuple([1, 1]));
/// ```
impl<T: PartialOrd, const N: usize> PartialOrd for Tuple<T, N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        for i in (0..N).rev() {
            match self.0[i].partial_cmp(&other.0[i]) {
                Some(Ordering::Equal) => {},
                unequal => return unequal,
            }
        }
        Some(Ordering::Equal)
    }
}

impl<T: Ord, const N: usize> Ord for Tuple<T, N> {
    fn cmp(&self, other: &Self) -> Ordering {
        for i in (0..N).rev() {
            match self.0[i].cmp(&other.0[i]) {
                Ordering::Equal => {},
                unequal => return unequal,
            }
        }
        Ordering::Equal
    }
}

/// `a < b` in the last-axis-major order. Usable wherever a comparator
/// function is wanted, e.g. `slice::sort_by`.
pub fn rless<T: PartialOrd, const N: usize>(a: &Tuple<T, N>, b: &Tuple<T, N>) -> bool {
    a < b
}

// ----------------------------------------------------------------------------

/// Converts a [`Tuple`] into a native Rust tuple, so that a closure can
/// destructure it positionally: `|(i, j)| ...`.
pub trait Unpack {
    type Native;

    fn unpack(self) -> Self::Native;
}

impl<T> Unpack for Tuple<T, 1> {
    type Native = (T,);
    #[inline(always)]
    fn unpack(self) -> Self::Native {
        let [a] = self.0;
        (a,)
    }
}

impl<T> Unpack for Tuple<T, 2> {
    type Native = (T, T);
    #[inline(always)]
    fn unpack(self) -> Self::Native {
        let [a, b] = self.0;
        (a, b)
    }
}

impl<T> Unpack for Tuple<T, 3> {
    type Native = (T, T, T);
    #[inline(always)]
    fn unpack(self) -> Self::Native {
        let [a, b, c] = self.0;
        (a, b, c)
    }
}

impl<T> Unpack for Tuple<T, 4> {
    type Native = (T, T, T, T);
    #[inline(always)]
    fn unpack(self) -> Self::Native {
        let [a, b, c, d] = self.0;
        (a, b, c, d)
    }
}

// ----------------------------------------------------------------------------

/// Tuples serialize as a fixed-length sequence, which is a plain array in
/// JSON. This lets shapes and masks be read straight out of a solver
/// configuration document.
#[cfg(feature = "serde")]
mod serde_impl {
    use std::fmt;
    use std::marker::{PhantomData};

    use serde::de::{self, Deserialize, Deserializer, IgnoredAny, SeqAccess, Visitor};
    use serde::ser::{Serialize, SerializeTuple, Serializer};

    use super::{Tuple};

    impl<T: Serialize, const N: usize> Serialize for Tuple<T, N> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut seq = serializer.serialize_tuple(N)?;
            for t in &self.0 { seq.serialize_element(t)?; }
            seq.end()
        }
    }

    struct TupleVisitor<T, const N: usize>(PhantomData<T>);

    impl<'de, T, const N: usize> Visitor<'de> for TupleVisitor<T, N> where
        T: Deserialize<'de> + Default + Copy,
    {
        type Value = Tuple<T, N>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "a sequence of {} elements", N)
        }

        fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
            let mut items = [T::default(); N];
            for (i, item) in items.iter_mut().enumerate() {
                *item = seq.next_element()?.ok_or_else(|| de::Error::invalid_length(i, &self))?;
            }
            if seq.next_element::<IgnoredAny>()?.is_some() {
                return Err(de::Error::invalid_length(N + 1, &self));
            }
            Ok(Tuple(items))
        }
    }

    impl<'de, T, const N: usize> Deserialize<'de> for Tuple<T, N> where
        T: Deserialize<'de> + Default + Copy,
    {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_tuple(N, TupleVisitor(PhantomData))
        }
    }
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::collections::{BTreeSet};

    use super::*;

    #[test]
    fn construct() {
        assert_eq!(Tuple::<u8, 3>::constant(7), Tuple([7, 7, 7]));
        assert_eq!(Tuple::<usize, 4>::from_fn(|i| i * 10), Tuple([0, 10, 20, 30]));
        assert_eq!(Tuple::<f32, 2>::default(), Tuple([0.0, 0.0]));
        assert_eq!(Tuple::<i32, 0>::sequence(), Tuple([]));
        let a: [i32; 2] = Tuple([1, 2]).into();
        assert_eq!(a, [1, 2]);
    }

    #[test]
    fn fill_from_slice() {
        let mut a = Tuple([0; 3]);
        a.fill_from_slice(&[4, 5]);
        assert_eq!(a, Tuple([4, 5, 0]));
        a.fill_from_slice(&[1, 2, 3, 4, 5]);
        assert_eq!(a, Tuple([1, 2, 3]));
    }

    #[test]
    fn display() {
        assert_eq!(Tuple([1, 2, 3]).to_string(), "(1,2,3,)");
        assert_eq!(Tuple([true]).to_string(), "(true,)");
        assert_eq!(Tuple::<i32, 0>([]).to_string(), "()");
        assert_eq!(Tuple([0.5f64, -1.25]).to_string(), "(0.5,-1.25,)");
    }

    #[test]
    fn last_axis_major_order() {
        let set: BTreeSet<_> = [
            Tuple([1, 1]), Tuple([0, 1]), Tuple([1, 0]), Tuple([0, 0]),
        ].into_iter().collect();
        let sorted: Vec<_> = set.into_iter().collect();
        assert_eq!(sorted, [Tuple([0, 0]), Tuple([1, 0]), Tuple([0, 1]), Tuple([1, 1])]);
        assert!(rless(&Tuple([5, 0, 0]), &Tuple([0, 0, 1])));
        assert!(!rless(&Tuple([2, 2]), &Tuple([2, 2])));
    }

    #[test]
    fn partial_order_with_nan() {
        assert_eq!(Tuple([f64::NAN, 1.0]).partial_cmp(&Tuple([0.0, 2.0])), Some(Ordering::Less));
        assert_eq!(Tuple([f64::NAN, 1.0]).partial_cmp(&Tuple([0.0, 1.0])), None);
    }

    #[test]
    fn unpack() {
        assert_eq!(Tuple([1]).unpack(), (1,));
        let (i, j, k) = Tuple([3, 4, 5]).unpack();
        assert_eq!(i + j + k, 12);
        assert_eq!(Tuple(['a', 'b', 'c', 'd']).unpack(), ('a', 'b', 'c', 'd'));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn json_round_trip() {
        let shape: Tuple<usize, 3> = serde_json::from_str("[8, 16, 32]").unwrap();
        assert_eq!(shape, Tuple([8, 16, 32]));
        assert_eq!(serde_json::to_string(&Tuple([true, false])).unwrap(), "[true,false]");
        assert!(serde_json::from_str::<Tuple<usize, 3>>("[8, 16]").is_err());
        assert!(serde_json::from_str::<Tuple<usize, 3>>("[8, 16, 32, 64]").is_err());
    }
}
