//! Two's-complement byte import/export, either endianness, signed or
//! unsigned.
//!
//! Bytes are packed limb-by-limb into a flat little-endian buffer, then
//! trimmed to the minimal length; negative values go through an explicit
//! two's-complement negation step before packing (and after unpacking, on
//! import).

use crate::bigint::BigInt;
use crate::error::BigIntError;
use crate::limb;

impl BigInt {
    /// Reconstructs a value from a two's-complement (or, if `is_unsigned`,
    /// plain magnitude) byte buffer.
    pub fn from_bytes(bytes: &[u8], is_unsigned: bool, is_big_endian: bool) -> BigInt {
        if bytes.is_empty() {
            return BigInt::ZERO;
        }

        let mut le = bytes.to_vec();
        if is_big_endian {
            le.reverse();
        }
        let negative = !is_unsigned && (*le.last().unwrap() & 0x80 != 0);

        let pad_byte = if negative { 0xFFu8 } else { 0x00u8 };
        while le.len() % 4 != 0 {
            le.push(pad_byte);
        }
        let mut limbs: Vec<u32> = le
            .chunks_exact(4)
            .map(|c| u32::from_le_bytes([c[0], c[1], c[2], c[3]]))
            .collect();

        if negative {
            limb::negate_in_place(&mut limbs);
            BigInt::from_sign_magnitude(-1, limbs)
        } else {
            BigInt::from_sign_magnitude(1, limbs)
        }
    }

    /// Serializes to a minimal-length two's-complement (or plain magnitude,
    /// if `is_unsigned`) byte buffer. Errors if `is_unsigned` and `self` is
    /// negative.
    pub fn to_bytes(&self, is_unsigned: bool, is_big_endian: bool) -> Result<Vec<u8>, BigIntError> {
        let negative = self.sign() < 0;
        if is_unsigned && negative {
            return Err(BigIntError::Overflow);
        }

        let mut limbs = self.magnitude_limbs();
        if limbs.is_empty() {
            limbs.push(0);
        }
        if negative {
            limb::negate_in_place(&mut limbs);
        }

        let mut bytes = Vec::with_capacity(limbs.len() * 4);
        for limb in &limbs {
            bytes.extend_from_slice(&limb.to_le_bytes());
        }

        if is_unsigned {
            while bytes.len() > 1 && *bytes.last().unwrap() == 0 {
                bytes.pop();
            }
        } else {
            let sign_extend = if negative { 0xFFu8 } else { 0x00u8 };
            while bytes.len() > 1 && *bytes.last().unwrap() == sign_extend {
                let next = bytes[bytes.len() - 2];
                if (next & 0x80 != 0) == (sign_extend & 0x80 != 0) {
                    bytes.pop();
                } else {
                    break;
                }
            }
            if !negative && *bytes.last().unwrap() & 0x80 != 0 {
                bytes.push(0);
            }
        }

        if is_big_endian {
            bytes.reverse();
        }
        Ok(bytes)
    }
}
