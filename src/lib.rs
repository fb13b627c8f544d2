//! A pure-Rust library of fixed-dimension numeric tuples, for the
//! coordinates, shapes, strides and boundary masks of structured-grid
//! solvers.
//!
//! [`Tuple<T, N>`] is `N` values of type `T`, where `N` is a compile-time
//! constant, typically 1 to 4. Tuples are `Copy` values on the stack; nothing
//! in this crate allocates or holds state, so every function can be called
//! from any thread.
//!
//! Arithmetic operators act axis by axis, between two tuples of the same
//! length or between a tuple and a scalar. Using tuples of different lengths
//! together is a compile error. Where a result length depends on an input
//! length (slicing, concatenation, dropping an axis), the relationship is
//! checked when the code is compiled, not when it runs.
//!
//! ```
//! use gridtuple::{Tuple, flat_to_cart, cart_to_flat, mod_periodic};
//! let shape = Tuple([3, 4]);
//! let cell = flat_to_cart(7, shape);
//! assert_eq!(cell, Tuple([1, 2]));
//! assert_eq!(cart_to_flat(cell, shape), 7);
//!
//! // Step one cell left on a grid that is periodic along axis 0 only.
//! let left = mod_periodic(cell - Tuple([2, 0]), Tuple([0, 0]), shape, Tuple([true, false]));
//! assert_eq!(left, Tuple([2, 2]));
//! ```
//!
//! Violated run-time preconditions, such as a zero divisor or a value with
//! too many digits for [`base_to_array()`], are programmer errors. They are
//! logged through the [`log`] facade and then panic; see [`error`].
//!
//! With the `serde` feature, tuples serialize as fixed-length sequences, so
//! shapes and masks can be read from configuration files.

pub mod error;
pub use error::{Violation};
use error::{require, debug_require};

mod unroll;
pub use unroll::{for_each_axis, for_each_axis_sum};

mod tuple;
pub use tuple::{Tuple, Mask, Shape, Cart, Square, Unpack, rless};

pub mod ops;
pub use ops::{Binary};

mod broadcast;

pub mod scalar;

mod reduce;
pub use reduce::{
    power, minmod, maxmod, ceil_div, floor_div,
    clamp, clamp_scalar, in_range, in_range_scalar, in_range_with_mask, mod_periodic,
};

mod index;
pub use index::{
    flat_to_cart, cart_to_flat, cart_to_flat_short, base_to_array, array_to_base,
    nested_loop, nested_loop_unpack, cartesian, Cartesian,
};

mod layout;
pub use layout::{Slice, Axis, inverse_permutation};

mod linalg;
pub use linalg::{
    Determinant, OuterProduct, det, outer_product, cross_product, inner_product,
    kronecker_product, tensor_product, scale,
};
