//! Arbitrary-precision signed integer core.
//!
//! [`BigInt`] picks its own representation: a fast `i32` inline path for
//! small values, falling back to a sign plus little-endian `u32` limb vector
//! once a value no longer fits. Magnitude arithmetic, multiplication
//! (schoolbook and Karatsuba), and division (Knuth's Algorithm D) live in
//! their own modules and operate on plain `[u32]` slices; `bigint` is the
//! only module that knows about signs and normalization.

mod algorithms;
mod bigint;
mod bytes;
mod div;
mod error;
mod limb;
mod magnitude;
mod mul;
mod scratch;

#[cfg(test)]
mod reference;

pub use bigint::BigInt;
pub use error::{BigIntError, Result};
