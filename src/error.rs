//! Error types for pkhash-core.
//!
//! Hashing itself cannot fail once a key is typed; every error is raised at
//! the boundary where untyped input (JSON values, container metadata) becomes
//! a `PartitionKey` or a `PartitionKeyDefinition`.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PkHashError {
    #[error("Unsupported partition key value type: {0}")]
    UnsupportedValueType(String),

    #[error("Unsupported partition key kind: {0}")]
    UnsupportedPartitionKeyKind(String),

    #[error("Unsupported partition key definition version: {0}")]
    UnsupportedPartitionKeyVersion(u8),

    #[error("Invalid digest: {0}")]
    InvalidDigest(String),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type for partition key hashing
pub type PkHashResult<T> = Result<T, PkHashError>;

impl serde::Serialize for PkHashError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}
