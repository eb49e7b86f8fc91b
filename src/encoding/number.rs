//! Canonical byte forms of IEEE-754 doubles.
//!
//! Two forms exist. The hashing form is the raw bit pattern, little-endian,
//! and keeps the sign of zero. The binary-encoding form is an order-preserving
//! variable-length encoding used for the hash prefix and number payloads of V1
//! digests; it maps `-0.0` and `+0.0` to the same bytes.

use super::prefix::BytePrefix;

const SIGN_BIT: u64 = 0x8000_0000_0000_0000;

/// Raw double bits, little-endian.
pub fn double_to_bytes(value: f64) -> [u8; 8] {
    value.to_bits().to_le_bytes()
}

/// Flip positive doubles above all negatives so that unsigned comparison of
/// the result follows numeric order.
fn encode_double_as_u64(value: f64) -> u64 {
    let bits = value.to_bits();
    if bits < SIGN_BIT {
        bits ^ SIGN_BIT
    } else {
        (!bits).wrapping_add(1)
    }
}

/// Append the binary encoding of `value`: the Number tag, the top 8 payload
/// bits, then 7-bit groups each ending in a continuation bit. The last group
/// has its continuation bit cleared.
pub fn write_number_for_binary_encoding(value: f64, out: &mut Vec<u8>) {
    out.push(BytePrefix::Number.byte());

    let mut payload = encode_double_as_u64(value);
    out.push((payload >> 56) as u8);
    payload <<= 8;

    let mut byte_to_write = 0u8;
    let mut first_iteration = true;
    loop {
        if !first_iteration {
            out.push(byte_to_write);
        }
        first_iteration = false;

        byte_to_write = ((payload >> 56) as u8) | 0x01;
        payload <<= 7;
        if payload == 0 {
            break;
        }
    }

    out.push(byte_to_write & 0xFE);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn binary(value: f64) -> Vec<u8> {
        let mut out = Vec::new();
        write_number_for_binary_encoding(value, &mut out);
        out
    }

    #[test]
    fn test_double_to_bytes_is_little_endian() {
        assert_eq!(double_to_bytes(1.0), [0, 0, 0, 0, 0, 0, 0xF0, 0x3F]);
        assert_eq!(double_to_bytes(0.0), [0; 8]);
    }

    #[test]
    fn test_sign_of_zero() {
        assert_eq!(double_to_bytes(-0.0), [0, 0, 0, 0, 0, 0, 0, 0x80]);
        assert_ne!(double_to_bytes(-0.0), double_to_bytes(0.0));
        assert_eq!(binary(-0.0), binary(0.0));
        assert_eq!(binary(0.0), vec![0x05, 0x80, 0x00]);
    }

    #[test]
    fn test_binary_encoding_vectors() {
        assert_eq!(binary(5.0), vec![0x05, 0xC0, 0x14]);
        assert_eq!(binary(-1.0), vec![0x05, 0x40, 0x10]);
        assert_eq!(
            binary(9007199254740991.0),
            vec![0x05, 0xC3, 0x3F, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFE]
        );
    }

    #[test]
    fn test_binary_encoding_of_hash_value() {
        // murmur_hash32 of the V1 hashing form of "redmond"
        assert_eq!(
            binary(f64::from(0xFE22_6086_u32)),
            vec![0x05, 0xC1, 0xEF, 0xE3, 0x13, 0x83, 0x0C]
        );
    }

    #[test]
    fn test_binary_encoding_preserves_order() {
        let values = [-1e9, -2.5, -1.0, 0.0, 1.0, 2.5, 1e9];
        for pair in values.windows(2) {
            assert!(binary(pair[0]) < binary(pair[1]), "{} < {}", pair[0], pair[1]);
        }
    }
}
