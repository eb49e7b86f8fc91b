//! Hierarchical (MultiHash) effective partition keys

use super::v2::{V2Hasher, V2_DIGEST_LEN};
use crate::error::{PkHashError, PkHashResult};
use crate::partition::PartitionKeyValue;

/// Hashes each component on its own with V2 and concatenates the digests in
/// key order. Because every V2 digest is [`V2_DIGEST_LEN`] characters wide, a
/// prefix of the composite digest identifies a prefix of the key.
pub struct MultiHashComposer;

impl MultiHashComposer {
    pub fn hash(components: &[PartitionKeyValue]) -> String {
        let mut out = String::with_capacity(components.len() * V2_DIGEST_LEN);
        for component in components {
            out.push_str(&V2Hasher::hash(std::slice::from_ref(component)));
        }
        out
    }
}

/// Split a MultiHash digest back into its per-component V2 digests.
pub fn split_multi_hash_digest(digest: &str) -> PkHashResult<Vec<&str>> {
    if digest.len() % V2_DIGEST_LEN != 0 || !digest.is_ascii() {
        return Err(PkHashError::InvalidDigest(format!(
            "MultiHash digest of length {} is not a sequence of {}-character V2 digests",
            digest.len(),
            V2_DIGEST_LEN
        )));
    }

    Ok((0..digest.len())
        .step_by(V2_DIGEST_LEN)
        .map(|start| &digest[start..start + V2_DIGEST_LEN])
        .collect())
}
