//! Operators between a [`Tuple`] and a single scalar.
//!
//! The scalar is broadcast to every axis: `(t + s)[i] == t[i] + s`. These
//! cannot be written as one blanket `impl<T> Add<T> for Tuple<T, N>`, because
//! that would overlap with `Tuple + Tuple` when `T` is itself a `Tuple`.
//! Instead they are generated for each primitive numeric type.

use super::{Tuple, ops, for_each_axis};

macro_rules! impl_scalar_op {
    ($op:ident { $method:ident } $op_assign:ident { $method_assign:ident } for $($t:ty)*) => {$(
        impl<const N: usize> std::ops::$op<$t> for Tuple<$t, N> {
            type Output = Tuple<$t, N>;
            #[inline(always)]
            fn $method(self, s: $t) -> Self::Output { self.binary_scalar::<ops::$op, $t>(s) }
        }

        impl<const N: usize> std::ops::$op_assign<$t> for Tuple<$t, N> {
            #[inline(always)]
            fn $method_assign(&mut self, s: $t) {
                for_each_axis::<N>(|i| std::ops::$op_assign::$method_assign(&mut self[i], s));
            }
        }
    )*};
}

macro_rules! impl_scalar_ops {
    (arithmetic for $($t:ty)*) => {
        impl_scalar_op! { Add { add } AddAssign { add_assign } for $($t)* }
        impl_scalar_op! { Sub { sub } SubAssign { sub_assign } for $($t)* }
        impl_scalar_op! { Mul { mul } MulAssign { mul_assign } for $($t)* }
        impl_scalar_op! { Div { div } DivAssign { div_assign } for $($t)* }
        impl_scalar_op! { Rem { rem } RemAssign { rem_assign } for $($t)* }

        // `s * t` as well as `t * s`.
        $(
            impl<const N: usize> std::ops::Mul<Tuple<$t, N>> for $t {
                type Output = Tuple<$t, N>;
                #[inline(always)]
                fn mul(self, t: Tuple<$t, N>) -> Self::Output { t.map(|x| self * x) }
            }
        )*
    };
    (bitwise for $($t:ty)*) => {
        impl_scalar_op! { BitAnd { bitand } BitAndAssign { bitand_assign } for $($t)* }
        impl_scalar_op! { BitOr { bitor } BitOrAssign { bitor_assign } for $($t)* }
        impl_scalar_op! { BitXor { bitxor } BitXorAssign { bitxor_assign } for $($t)* }
    };
}

impl_scalar_ops! { arithmetic for i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize f32 f64 }
impl_scalar_ops! { bitwise for i8 i16 i32 i64 i128 isize u8 u16 u32 u64 u128 usize }

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic() {
        let a = Tuple([4i32, -7, 9]);
        assert_eq!(a + 1, Tuple([5, -6, 10]));
        assert_eq!(a - 1, Tuple([3, -8, 8]));
        assert_eq!(a * 2, Tuple([8, -14, 18]));
        assert_eq!(2i32 * a, Tuple([8, -14, 18]));
        assert_eq!(a / 2, Tuple([2, -3, 4]));
        assert_eq!(a % 4, Tuple([0, -3, 1]));
        assert_eq!(Tuple([1.0f64, 3.0]) / 2.0, Tuple([0.5, 1.5]));
    }

    #[test]
    fn bitwise() {
        let a = Tuple([0b0110u32, 0b1001]);
        assert_eq!(a & 0b0011, Tuple([0b0010, 0b0001]));
        assert_eq!(a | 0b0001, Tuple([0b0111, 0b1001]));
        assert_eq!(a ^ 0b1111, Tuple([0b1001, 0b0110]));
    }

    #[test]
    fn compound() {
        let mut a = Tuple([1usize, 2, 3]);
        a += 10;
        assert_eq!(a, Tuple([11, 12, 13]));
        a %= 4;
        assert_eq!(a, Tuple([3, 0, 1]));
        a &= 1;
        assert_eq!(a, Tuple([1, 0, 1]));
        let mut f = Tuple([2.0f32, -8.0]);
        f /= 4.0;
        assert_eq!(f, Tuple([0.5, -2.0]));
    }
}
