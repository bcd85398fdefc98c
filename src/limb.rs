//! 32-bit limb primitives: carry/borrow propagation, leading-zero counts,
//! and in-place two's-complement negation on a limb slice.
//!
//! A limb is one digit of a big-integer magnitude, little-endian within the
//! owning `Vec<u32>`. All widening arithmetic here goes through `u64`
//! intermediates rather than the nightly `bigint_helper_methods` feature
//! (`carrying_add`/`borrowing_sub`), since a published crate targets
//! stable.

pub const LIMB_BITS: u32 = u32::BITS;

/// `a + b + carry_in`, returning `(sum, carry_out)` with `carry_out` in `{0, 1}`.
#[inline]
pub fn adc(a: u32, b: u32, carry_in: u32) -> (u32, u32) {
    let sum = a as u64 + b as u64 + carry_in as u64;
    (sum as u32, (sum >> 32) as u32)
}

/// `a - b - borrow_in`, returning `(diff, borrow_out)` with `borrow_out` in `{0, 1}`.
#[inline]
pub fn sbb(a: u32, b: u32, borrow_in: u32) -> (u32, u32) {
    let (d1, b1) = a.overflowing_sub(b);
    let (d2, b2) = d1.overflowing_sub(borrow_in);
    (d2, (b1 as u32) + (b2 as u32))
}

/// `a * b + carry_in`, returning `(low, high)` of the 64-bit product.
#[inline]
pub fn mac(a: u32, b: u32, carry_in: u32) -> (u32, u32) {
    let wide = a as u64 * b as u64 + carry_in as u64;
    (wide as u32, (wide >> 32) as u32)
}

/// `a * b + c + carry_in`, returning `(low, high)`.
#[inline]
pub fn mac2(a: u32, b: u32, c: u32, carry_in: u32) -> (u32, u32) {
    let wide = a as u64 * b as u64 + c as u64 + carry_in as u64;
    (wide as u32, (wide >> 32) as u32)
}

/// Number of leading zero bits in a little-endian limb slice's most
/// significant *set* limb. `limbs` must have no leading (high-index) zero
/// limbs, i.e. it is already trimmed; `limbs` may be empty, in which case
/// this returns 0 (the caller treats an empty magnitude as zero separately).
#[inline]
pub fn leading_zeros(limbs: &[u32]) -> u32 {
    match limbs.last() {
        Some(&top) => top.leading_zeros(),
        None => 0,
    }
}

/// Two's-complement negation of `limbs` in place: bitwise-not then add one.
/// Used both when materializing a two's-complement *view* of a negative
/// magnitude and when converting a two's-complement import buffer back to
/// sign-magnitude form.
pub fn negate_in_place(limbs: &mut [u32]) {
    let mut carry = 1u32;
    for limb in limbs.iter_mut() {
        let inverted = !*limb;
        let (sum, c) = adc(inverted, 0, carry);
        *limb = sum;
        carry = c;
    }
}
