//! Big-endian conversion between integers and byte strings.

use num_bigint::{BigInt, Sign};
use num_traits::Zero;

/// Interpret `bytes` as an unsigned big-endian integer.
///
/// The empty string decodes to zero.
pub fn int_from_be_bytes(bytes: &[u8]) -> BigInt {
    BigInt::from_bytes_be(Sign::Plus, bytes)
}

/// Encode `n` as exactly `width` big-endian bytes, left-padded with zeros.
///
/// # Panics
///
/// Panics if `n` is negative or needs more than `width` bytes; callers pass
/// values already reduced below the relevant modulus.
pub fn int_to_be_bytes(n: &BigInt, width: usize) -> Vec<u8> {
    if n.is_zero() {
        return vec![0; width];
    }
    let (sign, bytes) = n.to_bytes_be();
    assert!(sign != Sign::Minus, "negative integer in byte encoding");
    assert!(bytes.len() <= width, "integer wider than {width} bytes");
    let mut out = vec![0; width - bytes.len()];
    out.extend_from_slice(&bytes);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_with_padding() {
        let n = BigInt::from(0x01_02_03u32);
        let bytes = int_to_be_bytes(&n, 6);
        assert_eq!(bytes, [0, 0, 0, 1, 2, 3]);
        assert_eq!(int_from_be_bytes(&bytes), n);
    }

    #[test]
    fn zero_fills_the_width() {
        assert_eq!(int_to_be_bytes(&BigInt::zero(), 4), [0, 0, 0, 0]);
    }

    #[test]
    fn empty_input_is_zero() {
        assert!(int_from_be_bytes(&[]).is_zero());
    }

    #[test]
    #[should_panic(expected = "wider than")]
    fn oversized_value_is_an_invariant_violation() {
        int_to_be_bytes(&BigInt::from(0x1_0000u32), 2);
    }
}
