//! Legacy V1 effective partition key

use super::murmur::murmur_hash32;
use crate::encoding::{self, number};
use crate::partition::PartitionKeyValue;

static UNDEFINED: PartitionKeyValue = PartitionKeyValue::Undefined;

/// V1 hasher. Only the first component of a key is ever used; an empty key
/// hashes as `Undefined`.
pub struct V1Hasher;

impl V1Hasher {
    /// Hash the first component into an uppercase hex digest: the binary
    /// encoding of the 32-bit hash (as a number) followed by the binary
    /// encoding of the value itself.
    pub fn hash(components: &[PartitionKeyValue]) -> String {
        let value = components.first().unwrap_or(&UNDEFINED);

        let mut to_hash = Vec::new();
        encoding::write_for_hashing_v1(value, &mut to_hash);
        let hash = murmur_hash32(&to_hash);

        let mut out = Vec::with_capacity(to_hash.len() + 12);
        number::write_number_for_binary_encoding(f64::from(hash), &mut out);
        encoding::write_for_binary_encoding(value, &mut out);

        hex::encode_upper(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v1(value: impl Into<PartitionKeyValue>) -> String {
        V1Hasher::hash(&[value.into()])
    }

    #[test]
    fn test_known_strings() {
        assert_eq!(v1("redmond"), "05C1EFE313830C087366656E706F6500");
        assert_eq!(v1("partitionKey"), "05C1E1B3D9CD2608716273756A756A706F4C667A00");
        assert_eq!(v1(""), "05C1CF33970FF80800");
    }

    #[test]
    fn test_scalars() {
        assert_eq!(v1(5.0), "05C1D9C1C5517C05C014");
        assert_eq!(v1(true), "05C1D7C5A903D803");
        assert_eq!(v1(false), "05C1DB857D857C02");
        assert_eq!(v1(PartitionKeyValue::Null), "05C1ED45D7475601");
        assert_eq!(v1(PartitionKeyValue::Undefined), "05C1D529E345DC00");
    }

    #[test]
    fn test_only_first_component_is_used() {
        let single = V1Hasher::hash(&["redmond".into()]);
        let composite = V1Hasher::hash(&["redmond".into(), "98052".into()]);
        assert_eq!(single, composite);
    }

    #[test]
    fn test_empty_key_hashes_as_undefined() {
        assert_eq!(V1Hasher::hash(&[]), v1(PartitionKeyValue::Undefined));
    }

    #[test]
    fn test_signed_zero_differs_in_hash_only() {
        let pos = v1(0.0);
        let neg = v1(-0.0);
        assert_eq!(pos, "05C1BF6DA11560058000");
        assert_eq!(neg, "05C1E703ED99A0058000");
        // identical payload
        assert!(pos.ends_with("058000") && neg.ends_with("058000"));
    }
}
