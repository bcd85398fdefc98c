//! GCD, modular exponentiation, integer power, and integer logarithm.
//!
//! `mod_pow`/`pow` use the standard right-to-left square-and-multiply
//! method; GCD is a binary (Stein's) GCD over an arbitrary-length
//! magnitude.

use crate::bigint::BigInt;
use crate::error::BigIntError;
use crate::limb;
use crate::magnitude;
use std::cmp::Ordering;

impl BigInt {
    /// Non-negative greatest common divisor. `gcd(a, 0) = |a|`.
    pub fn gcd(&self, other: &BigInt) -> BigInt {
        let g = gcd_magnitude(self.magnitude_limbs(), other.magnitude_limbs());
        BigInt::from_sign_magnitude(1, g)
    }

    /// `(self mod modulus)^exponent mod modulus`, right-to-left
    /// square-and-multiply. The result's sign is negative iff `self` is
    /// negative and `exponent` is odd (and the result is nonzero),
    /// matching truncated-division sign conventions.
    pub fn mod_pow(&self, exponent: i64, modulus: &BigInt) -> Result<BigInt, BigIntError> {
        if exponent < 0 {
            return Err(BigIntError::InvalidArgument("mod_pow exponent must be non-negative"));
        }
        if modulus.is_zero() {
            return Err(BigIntError::DivideByZero);
        }

        let m_abs = modulus.abs();
        let mut base = self.abs().checked_rem(&m_abs)?;
        let mut exp = exponent as u64;
        let mut result = BigInt::ONE.checked_rem(&m_abs)?;

        while exp > 0 {
            if exp & 1 == 1 {
                result = (&result * &base).checked_rem(&m_abs)?;
            }
            exp >>= 1;
            if exp > 0 {
                base = (&base * &base).checked_rem(&m_abs)?;
            }
        }

        let negative = self.sign() < 0 && exponent % 2 == 1 && !result.is_zero();
        Ok(if negative { -result } else { result })
    }

    /// `self^exponent`, without modular reduction.
    pub fn pow(&self, exponent: i64) -> Result<BigInt, BigIntError> {
        if exponent < 0 {
            return Err(BigIntError::InvalidArgument("pow exponent must be non-negative"));
        }
        if exponent == 0 {
            return Ok(BigInt::ONE);
        }
        if self.is_zero() {
            return Ok(BigInt::ZERO);
        }

        let mut exp = exponent as u64;
        let mut base = self.clone();
        let mut result = BigInt::ONE;
        while exp > 0 {
            if exp & 1 == 1 {
                result = &result * &base;
            }
            exp >>= 1;
            if exp > 0 {
                base = base.square();
            }
        }
        Ok(result)
    }

    /// Logarithm of `self` in the given `base`, as an `f64`. `NaN` for
    /// non-positive `self`, matching `f64::ln`'s own convention for
    /// non-positive inputs.
    pub fn log(&self, base: f64) -> f64 {
        if self.sign() <= 0 {
            return f64::NAN;
        }
        let m = self.magnitude_limbs();
        let bit_count = 32 * m.len() as u32 - limb::leading_zeros(&m);
        let shift = bit_count.saturating_sub(64);
        let top_bits = if shift == 0 {
            magnitude::low_u64(&m)
        } else {
            magnitude::low_u64(&magnitude::shr(&m, shift))
        };
        let ln_v = (top_bits as f64).ln() + (shift as f64) * std::f64::consts::LN_2;
        ln_v / base.ln()
    }
}

fn gcd_magnitude(mut a: Vec<u32>, mut b: Vec<u32>) -> Vec<u32> {
    magnitude::trim(&mut a);
    magnitude::trim(&mut b);
    if magnitude::is_zero(&a) {
        return b;
    }
    if magnitude::is_zero(&b) {
        return a;
    }

    let shift = magnitude::trailing_zeros(&a).min(magnitude::trailing_zeros(&b));
    a = magnitude::shr(&a, magnitude::trailing_zeros(&a));

    loop {
        let tz_b = magnitude::trailing_zeros(&b);
        b = magnitude::shr(&b, tz_b);
        if magnitude::cmp(&a, &b) == Ordering::Greater {
            std::mem::swap(&mut a, &mut b);
        }
        b = magnitude::sub(&b, &a);
        magnitude::trim(&mut b);
        if magnitude::is_zero(&b) {
            break;
        }
    }

    let mut result = magnitude::shl(&a, shift);
    magnitude::trim(&mut result);
    result
}
