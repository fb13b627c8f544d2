//! Run-time contract violations.
//!
//! Mismatched tuple lengths and bad slice bounds are rejected at build time.
//! The preconditions below can only be checked at run time. They are
//! programmer errors in the caller, so there is no recoverable path: the
//! violation is logged at `error` level and the thread panics with its
//! description.

use thiserror::Error;

/// A precondition that a caller failed to establish.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("divisor must be strictly positive, got {0}")]
    NonPositiveDivisor(String),

    #[error("flat index {index} is out of range for shape {shape}")]
    FlatIndexOutOfRange { index: String, shape: String },

    #[error("unable to represent {value} with {digits} digits of base {base}")]
    DigitsOverflow { value: String, base: String, digits: usize },

    #[error("cut of {len} elements at offset {offset} exceeds length {size}")]
    CutOutOfRange { offset: usize, len: usize, size: usize },

    #[error("axis {axis} is out of range for length {size}")]
    AxisOutOfRange { axis: usize, size: usize },

    #[error("period on a wrapped axis must be strictly positive, got {0}")]
    NonPositivePeriod(String),
}

/// Logs `violation` and panics with it.
#[cold]
#[inline(never)]
#[track_caller]
pub(crate) fn fail(violation: Violation) -> ! {
    log::error!(target: "gridtuple", "{}", violation);
    panic!("{}", violation);
}

/// Checks a precondition in every build profile.
///
/// The second argument is only evaluated on failure.
macro_rules! require {
    ($cond:expr, $violation:expr) => {
        if !$cond { $crate::error::fail($violation); }
    };
}
pub(crate) use require;

/// Like [`require!`], but compiled out without `debug_assertions`.
///
/// Used on hot paths such as index decoding inside grid traversals.
macro_rules! debug_require {
    ($cond:expr, $violation:expr) => {
        if cfg!(debug_assertions) && !$cond { $crate::error::fail($violation); }
    };
}
pub(crate) use debug_require;

// ----------------------------------------------------------------------------
