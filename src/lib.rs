//! pkhash-core - effective partition key hashing.
//!
//! Computes the digest a partitioned document store uses to decide which
//! physical partition holds a document. The output is wire-compatible with
//! the service-side hashing protocol, so it can be compared against partition
//! key ranges returned by the service.
//!
//! # Main Components
//!
//! - **Partition model**: `PartitionKeyValue`, `PartitionKey` and the
//!   container's `PartitionKeyDefinition`
//! - **Encoding**: the canonical byte forms of each value type
//! - **Hashing**: MurmurHash3 plus the V1, V2 and MultiHash algorithms, and
//!   the `hash_partition_key` dispatcher
//!
//! # Example
//!
//! ```rust
//! use pkhash_core::{hash_partition_key_json, PartitionKeyDefinition};
//! use serde_json::json;
//!
//! let def = PartitionKeyDefinition::from_json(r#"{"paths":["/city"],"kind":"Hash","version":2}"#).unwrap();
//! let epk = hash_partition_key_json(&json!("redmond"), Some(&def)).unwrap();
//! assert_eq!(epk, "22E342F38A486A088463DFF7838A5963");
//!
//! // No definition: legacy V1
//! let epk = hash_partition_key_json(&json!("redmond"), None).unwrap();
//! assert_eq!(epk, "05C1EFE313830C087366656E706F6500");
//! ```

pub mod encoding;
pub mod error;
pub mod hashing;
pub mod partition;

pub use error::{PkHashError, PkHashResult};
pub use hashing::{
    hash_partition_key, hash_partition_key_json, murmur_hash3_x64_128, murmur_hash32,
    split_multi_hash_digest, MultiHashComposer, V1Hasher, V2Hasher, V2_DIGEST_LEN,
};
pub use partition::{
    PartitionKey, PartitionKeyDefinition, PartitionKeyDefinitionVersion, PartitionKeyKind,
    PartitionKeyValue,
};
