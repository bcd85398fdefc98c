//! Structured failures raised by the core.
//!
//! Mirrors the enum-of-variants shape used for error types elsewhere in the
//! ecosystem (one variant per failure class, a human-readable `#[error]`
//! message, no wrapped I/O errors since the core never touches I/O).
//!
//! A fourth failure kind, invariant violation, has no variant here: it can
//! only follow a bug in this crate rather than a caller mistake, so it is
//! raised through `debug_assert!` in `BigInt::assert_valid` and compiled out
//! of release builds entirely rather than returned to callers.

use thiserror::Error;

/// Failure surfaced by a fallible [`crate::BigInt`] operation.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BigIntError {
    /// `/`, `%`, `div_rem`, or `mod_pow` with a zero divisor/modulus.
    #[error("attempt to divide by zero")]
    DivideByZero,

    /// A conversion could not represent the value in the target type, an
    /// export with `is_unsigned = true` saw a negative value, or a
    /// `f64` -> `BigInt` conversion saw a non-finite input.
    #[error("value does not fit in the target representation")]
    Overflow,

    /// `pow`/`mod_pow` with a negative exponent.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}

pub type Result<T> = std::result::Result<T, BigIntError>;
