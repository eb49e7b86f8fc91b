//! Byte encodings of partition key components.
//!
//! Every component has a *hashing* form, which is fed to MurmurHash, and a
//! *binary* form, which V1 digests carry verbatim after the hash. V1 and V2
//! disagree on the hashing form of strings only:
//!
//! | Value | V1 hashing | V2 hashing | Binary |
//! |---|---|---|---|
//! | String | `08` truncated UTF-8 `00` | `08` full UTF-8 `FF` | `08` bytes+1 [`00`] |
//! | Number | `05` raw LE bits | `05` raw LE bits | `05` order-preserving |
//! | true / false | `03` / `02` | `03` / `02` | `03` / `02` |
//! | null | `01` | `01` | `01` |
//! | undefined | `00` | `00` | `00` |

pub mod number;
pub mod prefix;
pub mod string;

pub use prefix::BytePrefix;

use crate::partition::PartitionKeyValue;

/// Hashing form consumed by the V1 algorithm. Strings are truncated first.
pub fn write_for_hashing_v1(value: &PartitionKeyValue, out: &mut Vec<u8>) {
    write_for_hashing(value, out, |s, out| {
        out.push(BytePrefix::String.byte());
        out.extend_from_slice(string::truncate(s).as_bytes());
        out.push(BytePrefix::Undefined.byte());
    })
}

/// Hashing form consumed by the V2 algorithm. Strings are hashed whole.
pub fn write_for_hashing_v2(value: &PartitionKeyValue, out: &mut Vec<u8>) {
    write_for_hashing(value, out, |s, out| {
        out.push(BytePrefix::String.byte());
        out.extend_from_slice(s.as_bytes());
        out.push(BytePrefix::Infinity.byte());
    })
}

fn write_for_hashing(
    value: &PartitionKeyValue,
    out: &mut Vec<u8>,
    write_string: impl FnOnce(&str, &mut Vec<u8>),
) {
    match value {
        PartitionKeyValue::String(s) => write_string(s, out),
        PartitionKeyValue::Number(n) => {
            out.push(BytePrefix::Number.byte());
            out.extend_from_slice(&number::double_to_bytes(*n));
        }
        PartitionKeyValue::Boolean(b) => out.push(BytePrefix::for_bool(*b).byte()),
        PartitionKeyValue::Null => out.push(BytePrefix::Null.byte()),
        PartitionKeyValue::Undefined => out.push(BytePrefix::Undefined.byte()),
    }
}

/// Binary (payload) form embedded in V1 digests. Strings are truncated first.
pub fn write_for_binary_encoding(value: &PartitionKeyValue, out: &mut Vec<u8>) {
    match value {
        PartitionKeyValue::String(s) => {
            string::write_string_for_binary_encoding(&string::truncate(s), out)
        }
        PartitionKeyValue::Number(n) => number::write_number_for_binary_encoding(*n, out),
        PartitionKeyValue::Boolean(b) => out.push(BytePrefix::for_bool(*b).byte()),
        PartitionKeyValue::Null => out.push(BytePrefix::Null.byte()),
        PartitionKeyValue::Undefined => out.push(BytePrefix::Undefined.byte()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hashing_v1(value: impl Into<PartitionKeyValue>) -> Vec<u8> {
        let mut out = Vec::new();
        write_for_hashing_v1(&value.into(), &mut out);
        out
    }

    fn hashing_v2(value: impl Into<PartitionKeyValue>) -> Vec<u8> {
        let mut out = Vec::new();
        write_for_hashing_v2(&value.into(), &mut out);
        out
    }

    #[test]
    fn test_string_hashing_forms() {
        assert_eq!(hashing_v1("ab"), vec![0x08, b'a', b'b', 0x00]);
        assert_eq!(hashing_v2("ab"), vec![0x08, b'a', b'b', 0xFF]);
    }

    #[test]
    fn test_v1_truncates_but_v2_does_not() {
        let long = "a".repeat(120);
        assert_eq!(hashing_v1(long.as_str()).len(), 1 + 100 + 1);
        assert_eq!(hashing_v2(long.as_str()).len(), 1 + 120 + 1);
    }

    #[test]
    fn test_scalar_hashing_forms() {
        assert_eq!(hashing_v1(1.0), vec![0x05, 0, 0, 0, 0, 0, 0, 0xF0, 0x3F]);
        assert_eq!(hashing_v1(true), vec![0x03]);
        assert_eq!(hashing_v1(false), vec![0x02]);
        assert_eq!(hashing_v1(PartitionKeyValue::Null), vec![0x01]);
        assert_eq!(hashing_v1(PartitionKeyValue::Undefined), vec![0x00]);
        assert_eq!(hashing_v2(PartitionKeyValue::Null), vec![0x01]);
    }

    #[test]
    fn test_binary_forms() {
        let encode = |v: PartitionKeyValue| {
            let mut out = Vec::new();
            write_for_binary_encoding(&v, &mut out);
            out
        };
        assert_eq!(encode("a".into()), vec![0x08, 0x62, 0x00]);
        assert_eq!(encode(5.0f64.into()), vec![0x05, 0xC0, 0x14]);
        assert_eq!(encode(true.into()), vec![0x03]);
        assert_eq!(encode(PartitionKeyValue::Null), vec![0x01]);
        assert_eq!(encode(PartitionKeyValue::Undefined), vec![0x00]);
    }
}
