//! Schoolbook-only oracle used by the property tests below to fuzz-check
//! the Karatsuba path against a trusted (non-recursive) implementation of
//! the same operation.
//!
//! `ref_mul`/`ref_square` force the Karatsuba threshold to `usize::MAX`
//! for the duration of the call so `mul::multiply`/`mul::square` never
//! recurse; every other operation here has only one algorithm in this
//! crate, so it's its own oracle and these wrappers exist only so the
//! fuzz targets below have one name per operator to call.

use crate::bigint::BigInt;
use crate::mul::{self, DEFAULT_KARATSUBA_THRESHOLD};

fn schoolbook_only<T>(f: impl FnOnce() -> T) -> T {
    mul::set_karatsuba_threshold_for_test(usize::MAX);
    let result = f();
    mul::set_karatsuba_threshold_for_test(DEFAULT_KARATSUBA_THRESHOLD);
    result
}

pub fn ref_mul(a: &BigInt, b: &BigInt) -> BigInt {
    schoolbook_only(|| a * b)
}

pub fn ref_square(a: &BigInt) -> BigInt {
    schoolbook_only(|| a.square())
}

pub fn ref_add(a: &BigInt, b: &BigInt) -> BigInt {
    a + b
}

pub fn ref_sub(a: &BigInt, b: &BigInt) -> BigInt {
    a - b
}

pub fn ref_div_rem(a: &BigInt, b: &BigInt) -> crate::Result<(BigInt, BigInt)> {
    a.div_rem(b)
}

pub fn ref_shl(a: &BigInt, k: u32) -> BigInt {
    a.clone() << k
}

pub fn ref_shr(a: &BigInt, k: u32) -> BigInt {
    a.clone() >> k
}

pub fn ref_and(a: &BigInt, b: &BigInt) -> BigInt {
    a & b
}

pub fn ref_or(a: &BigInt, b: &BigInt) -> BigInt {
    a | b
}

pub fn ref_xor(a: &BigInt, b: &BigInt) -> BigInt {
    a ^ b
}

pub fn ref_bytes_round_trip(a: &BigInt, is_big_endian: bool) -> BigInt {
    let bytes = a.to_bytes(false, is_big_endian).expect("signed export never fails");
    BigInt::from_bytes(&bytes, false, is_big_endian)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    fn to_bigint(digits: Vec<u32>, negative: bool) -> BigInt {
        let mut v = BigInt::ZERO;
        for &d in digits.iter().take(200) {
            v = (v << 32) + BigInt::from(d);
        }
        if negative {
            -v
        } else {
            v
        }
    }

    #[quickcheck]
    fn karatsuba_matches_schoolbook_multiply(a_digits: Vec<u32>, a_neg: bool, b_digits: Vec<u32>, b_neg: bool) -> bool {
        let a = to_bigint(a_digits, a_neg);
        let b = to_bigint(b_digits, b_neg);
        &a * &b == ref_mul(&a, &b)
    }

    #[quickcheck]
    fn karatsuba_matches_schoolbook_square(digits: Vec<u32>, negative: bool) -> bool {
        let a = to_bigint(digits, negative);
        a.square() == ref_square(&a)
    }

    #[quickcheck]
    fn add_sub_round_trip(a_digits: Vec<u32>, a_neg: bool, b_digits: Vec<u32>, b_neg: bool) -> bool {
        let a = to_bigint(a_digits, a_neg);
        let b = to_bigint(b_digits, b_neg);
        ref_add(&ref_sub(&a, &b), &b) == a
    }

    #[quickcheck]
    fn division_identity_holds(a_digits: Vec<u32>, a_neg: bool, b_digits: Vec<u32>, b_neg: bool) -> bool {
        let a = to_bigint(a_digits, a_neg);
        let mut b = to_bigint(b_digits, b_neg);
        if b.is_zero() {
            b = BigInt::ONE;
        }
        match ref_div_rem(&a, &b) {
            Ok((q, r)) => &(&q * &b) + &r == a,
            Err(_) => false,
        }
    }

    #[quickcheck]
    fn shift_round_trip_for_nonnegative(digits: Vec<u32>, k: u8) -> bool {
        let a = to_bigint(digits, false);
        let k = k as u32 % 256;
        ref_shr(&ref_shl(&a, k), k) == a
    }

    #[quickcheck]
    fn bitwise_ops_agree_with_de_morgan(a_digits: Vec<u32>, a_neg: bool, b_digits: Vec<u32>, b_neg: bool) -> bool {
        let a = to_bigint(a_digits, a_neg);
        let b = to_bigint(b_digits, b_neg);
        !ref_and(&a, &b) == ref_or(&!a.clone(), &!b.clone())
    }

    #[quickcheck]
    fn byte_round_trip_holds(digits: Vec<u32>, negative: bool, big_endian: bool) -> bool {
        let a = to_bigint(digits, negative);
        ref_bytes_round_trip(&a, big_endian) == a
    }
}
