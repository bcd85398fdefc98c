//! Schoolbook and Karatsuba multiplication/squaring on magnitude slices.
//!
//! The schoolbook kernels accumulate column sums with explicit 64-bit carry
//! tracking across an arbitrary number of 32-bit limbs, one operand limb at
//! a time. The recursive Karatsuba split follows the usual low/high
//! decomposition (`z0`/`z2`/`z_mid` corner products) over plain slices.

use crate::limb::{adc, mac2};
use crate::magnitude::{self, add_self, sub_self};
use crate::scratch::Scratch;
#[cfg(test)]
use std::cell::Cell;

/// Default shorter-operand-length threshold below which schoolbook
/// multiplication is used instead of recursing. Fixed in release builds;
/// test code may override it via [`set_karatsuba_threshold_for_test`] to
/// exercise the recursive path on small inputs.
pub const DEFAULT_KARATSUBA_THRESHOLD: usize = 32;

#[cfg(test)]
thread_local! {
    static KARATSUBA_THRESHOLD: Cell<usize> = const { Cell::new(DEFAULT_KARATSUBA_THRESHOLD) };
}

#[inline]
fn threshold() -> usize {
    #[cfg(test)]
    {
        KARATSUBA_THRESHOLD.with(Cell::get)
    }
    #[cfg(not(test))]
    {
        DEFAULT_KARATSUBA_THRESHOLD
    }
}

/// Test-only hook: overrides the Karatsuba dispatch threshold for the
/// calling thread so small fixtures can exercise the recursive path.
/// Production code paths never call this — thresholds are fixed constants
/// outside of `cfg(test)`; no process-wide mutable state exists in
/// production.
#[cfg(test)]
pub fn set_karatsuba_threshold_for_test(n: usize) {
    KARATSUBA_THRESHOLD.with(|t| t.set(n));
}

/// A split point below which this module never recurses, regardless of the
/// configured threshold: it guarantees the scratch-length arithmetic in
/// `karatsuba_*_into` never underflows (see module-internal derivation in
/// the doc comments on those functions).
const MIN_KARATSUBA_SPLIT_LEN: usize = 4;

/// `a * b`, full `|a| + |b|`-limb product. `a` and `b` need not be
/// pre-sorted by length.
pub fn multiply(a: &[u32], b: &[u32]) -> Vec<u32> {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let mut out = vec![0u32; long.len() + short.len()];
    multiply_into(&mut out, long, short);
    out
}

/// `a * a`, full `2*|a|`-limb product.
pub fn square(a: &[u32]) -> Vec<u32> {
    let mut out = vec![0u32; 2 * a.len()];
    square_into(&mut out, a);
    out
}

fn multiply_into(out: &mut [u32], a: &[u32], b: &[u32]) {
    debug_assert!(a.len() >= b.len());
    debug_assert_eq!(out.len(), a.len() + b.len());

    if b.len() < MIN_KARATSUBA_SPLIT_LEN || b.len() < threshold() {
        schoolbook_multiply_into(out, a, b);
    } else {
        karatsuba_multiply_into(out, a, b);
    }
}

fn square_into(out: &mut [u32], a: &[u32]) {
    debug_assert_eq!(out.len(), 2 * a.len());

    if a.len() < MIN_KARATSUBA_SPLIT_LEN || a.len() < threshold() {
        schoolbook_square_into(out, a);
    } else {
        karatsuba_square_into(out, a);
    }
}

/// Long multiplication: for each limb of `b`, multiply-accumulate the
/// entire `a` into `out` starting at that limb's offset, threading a
/// 64-bit carry that may propagate past `a`'s length (into limbs already
/// touched by a lower `b` limb). `c[i+j] + a[j]*b[i] + carry` never exceeds
/// `2^64 - 1`: each term is bounded by `(2^32-1)^2 + (2^32-1) + (2^32-1)`,
/// one short of `2^64`.
fn schoolbook_multiply_into(out: &mut [u32], a: &[u32], b: &[u32]) {
    out.fill(0);
    for (i, &bi) in b.iter().enumerate() {
        if bi == 0 {
            continue;
        }
        let mut carry = 0u32;
        for (j, &aj) in a.iter().enumerate() {
            let (lo, hi) = mac2(aj, bi, out[i + j], carry);
            out[i + j] = lo;
            carry = hi;
        }
        let mut k = i + a.len();
        while carry != 0 {
            let (sum, c) = adc(out[k], 0, carry);
            out[k] = sum;
            carry = c;
            k += 1;
        }
    }
}

/// Squaring via cross-terms-then-double-then-diagonal, rather than fusing
/// the `2*a_i*a_j` doubling into the accumulate loop. A fused
/// `c + 2*a_j*a_i + carry` can overflow 64 bits (two terms near `2^32-1`
/// each contribute close to `2^64` once doubled, leaving no room for `c` or
/// the carry), so the doubling has to happen as its own pass rather than
/// inline with the accumulate. This implementation computes the undoubled
/// cross-sum first, doubles it as one carry-propagating left shift, and
/// only then adds the diagonal terms — each step individually fits in a
/// 64-bit accumulator.
fn schoolbook_square_into(out: &mut [u32], a: &[u32]) {
    out.fill(0);
    let n = a.len();
    if n == 0 {
        return;
    }

    // Cross terms: sum over i < j of a[i]*a[j], accumulated at offset i+j.
    for i in 0..n - 1 {
        let ai = a[i];
        if ai == 0 {
            continue;
        }
        let mut carry = 0u32;
        for (j, &aj) in a.iter().enumerate().skip(i + 1) {
            let (lo, hi) = mac2(ai, aj, out[i + j], carry);
            out[i + j] = lo;
            carry = hi;
        }
        let mut k = i + n;
        while carry != 0 {
            let (sum, c) = adc(out[k], 0, carry);
            out[k] = sum;
            carry = c;
            k += 1;
        }
    }

    // Double the accumulated cross-sum in place.
    let mut carry = 0u32;
    for limb in out.iter_mut() {
        let doubled = ((*limb as u64) << 1) | carry as u64;
        *limb = doubled as u32;
        carry = (doubled >> 32) as u32;
    }
    debug_assert_eq!(carry, 0, "cross-term sum must fit before the diagonal is added");

    // Diagonal terms: a[i]*a[i] at offset 2*i.
    for (i, &ai) in a.iter().enumerate() {
        let (lo, hi) = mac2(ai, ai, out[2 * i], 0);
        out[2 * i] = lo;
        let mut carry = hi;
        let mut k = 2 * i + 1;
        while carry != 0 {
            let (sum, c) = adc(out[k], 0, carry);
            out[k] = sum;
            carry = c;
            k += 1;
        }
    }
}

/// Recursive split-and-combine multiplication (Karatsuba). `a.len() >=
/// b.len() >= MIN_KARATSUBA_SPLIT_LEN`. Splits both operands at `n =
/// b.len() / 2`, computes the two "corner" products directly into `out`,
/// and folds in the cross term `z_mid = (a_lo+a_hi)*(b_lo+b_hi) - z0 - z2`
/// shifted up by `n` limbs.
///
/// Scratch-length bookkeeping: `a_sum` and `b_sum` have length at most
/// `max(a.len(), b.len()) - n + 1`; `z_mid` therefore has length at most
/// `a.len() + b.len() - 2*n + 2`. Folding it in starting at offset `n`
/// needs `out.len() - n = a.len() + b.len() - n` limbs of room, which
/// exceeds `z_mid`'s length exactly when `n >= 2` — guaranteed by
/// `MIN_KARATSUBA_SPLIT_LEN`.
fn karatsuba_multiply_into(out: &mut [u32], a: &[u32], b: &[u32]) {
    let n = b.len() / 2;
    let (a_lo, a_hi) = a.split_at(n);
    let (b_lo, b_hi) = b.split_at(n);

    let (z0_part, rest) = out.split_at_mut(2 * n);
    multiply_into(z0_part, a_lo, b_lo);
    let z2_len = rest.len();
    multiply_into(rest, a_hi, b_hi);

    let a_sum = magnitude::add(a_lo, a_hi);
    let b_sum = magnitude::add(b_lo, b_hi);
    let mut z_mid = Scratch::new(a_sum.len() + b_sum.len());
    multiply_into(&mut z_mid, &a_sum, &b_sum);

    sub_self(&mut z_mid, &out[..2 * n]);
    let z2_end = 2 * n + z2_len;
    sub_self(&mut z_mid, &out[2 * n..z2_end]);

    add_self(&mut out[n..], &z_mid);
}

/// Recursive squaring, same split as [`karatsuba_multiply_into`] with
/// `a = b`: `z0 = square(a_lo)`, `z2 = square(a_hi)`,
/// `z_mid = square(a_lo+a_hi) - z0 - z2`.
fn karatsuba_square_into(out: &mut [u32], a: &[u32]) {
    let n = a.len() / 2;
    let (a_lo, a_hi) = a.split_at(n);

    let (z0_part, rest) = out.split_at_mut(2 * n);
    square_into(z0_part, a_lo);
    let z2_len = rest.len();
    square_into(rest, a_hi);

    let a_sum = magnitude::add(a_lo, a_hi);
    let mut z_mid = Scratch::new(2 * a_sum.len());
    square_into(&mut z_mid, &a_sum);

    sub_self(&mut z_mid, &out[..2 * n]);
    let z2_end = 2 * n + z2_len;
    sub_self(&mut z_mid, &out[2 * n..z2_end]);

    add_self(&mut out[n..], &z_mid);
}

/// `a * d` for a single-limb `d`, appended with the final carry limb —
/// used by the division engine's multiply-subtract step and by byte
/// export's base conversions.
pub fn multiply_single(a: &[u32], d: u32) -> Vec<u32> {
    let mut out = Vec::with_capacity(a.len() + 1);
    let mut carry = 0u32;
    for &ai in a {
        let (lo, hi) = mac2(ai, d, 0, carry);
        out.push(lo);
        carry = hi;
    }
    out.push(carry);
    out
}
