//! Effective partition key hashing.
//!
//! [`hash_partition_key`] picks the algorithm from the container's partition
//! key definition:
//!
//! - no definition, or `Hash` without version 2: [`V1Hasher`]
//! - `Hash` with version 2: [`V2Hasher`]
//! - `MultiHash` (any version): [`MultiHashComposer`]
//! - `Range`: rejected, range-partitioned containers are never hashed

pub mod multi_hash;
pub mod murmur;
pub mod v1;
pub mod v2;

pub use multi_hash::{split_multi_hash_digest, MultiHashComposer};
pub use murmur::{murmur_hash3_x64_128, murmur_hash32};
pub use v1::V1Hasher;
pub use v2::{V2Hasher, V2_DIGEST_LEN};

use serde_json::Value;

use crate::error::{PkHashError, PkHashResult};
use crate::partition::{PartitionKey, PartitionKeyDefinition, PartitionKeyKind};

/// Compute the effective partition key of `key`.
///
/// A missing `definition` means `{kind: Hash}` with V1 hashing.
pub fn hash_partition_key(
    key: &PartitionKey,
    definition: Option<&PartitionKeyDefinition>,
) -> PkHashResult<String> {
    let kind = definition.map(|d| d.kind).unwrap_or_default();
    let is_v2 = definition.is_some_and(PartitionKeyDefinition::is_v2);

    let digest = match kind {
        PartitionKeyKind::Hash if is_v2 => {
            tracing::trace!("Hashing {} component(s) with V2", key.len());
            V2Hasher::hash(key.components())
        }
        PartitionKeyKind::Hash => {
            tracing::trace!("Hashing {} component(s) with V1", key.len());
            V1Hasher::hash(key.components())
        }
        PartitionKeyKind::MultiHash => {
            tracing::trace!("Hashing {} component(s) with MultiHash", key.len());
            MultiHashComposer::hash(key.components())
        }
        other => {
            tracing::debug!("Refusing to hash partition key of kind {}", other);
            return Err(PkHashError::UnsupportedPartitionKeyKind(other.to_string()));
        }
    };

    tracing::trace!(digest = %digest, "Computed effective partition key");
    Ok(digest)
}

/// Like [`hash_partition_key`] but takes the key as JSON: a scalar, or an
/// array of scalars for composite keys.
pub fn hash_partition_key_json(
    value: &Value,
    definition: Option<&PartitionKeyDefinition>,
) -> PkHashResult<String> {
    let key = PartitionKey::try_from(value).inspect_err(|e| {
        tracing::debug!("Rejected partition key value: {}", e);
    })?;
    hash_partition_key(&key, definition)
}
