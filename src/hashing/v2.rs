//! V2 effective partition key

use super::murmur::murmur_hash3_x64_128;
use crate::encoding;
use crate::partition::PartitionKeyValue;

/// Width of every V2 digest in hex characters
pub const V2_DIGEST_LEN: usize = 32;

/// V2 hasher: MurmurHash3 x64 128 over the V2 hashing form of the key.
pub struct V2Hasher;

impl V2Hasher {
    /// Hash all components together. The 128-bit result is written as `h2`
    /// then `h1`, both big-endian, with the two top bits of the first byte
    /// cleared so every digest sorts below the `FF` upper bound.
    pub fn hash(components: &[PartitionKeyValue]) -> String {
        let mut to_hash = Vec::new();
        for component in components {
            encoding::write_for_hashing_v2(component, &mut to_hash);
        }

        let (h1, h2) = murmur_hash3_x64_128(&to_hash);

        let mut digest = [0u8; 16];
        digest[..8].copy_from_slice(&h2.to_be_bytes());
        digest[8..].copy_from_slice(&h1.to_be_bytes());
        digest[0] &= 0x3F;

        hex::encode_upper(digest)
    }
}
