//! Partition key definitions as stored in container metadata

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{PkHashError, PkHashResult};

/// How a container's partition key is turned into an effective partition key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PartitionKeyKind {
    #[default]
    Hash,
    /// Legacy range partitioning; never hashed
    Range,
    /// Hierarchical keys, one V2 digest per component
    MultiHash,
}

impl PartitionKeyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PartitionKeyKind::Hash => "Hash",
            PartitionKeyKind::Range => "Range",
            PartitionKeyKind::MultiHash => "MultiHash",
        }
    }
}

impl fmt::Display for PartitionKeyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PartitionKeyKind {
    type Err = PkHashError;

    fn from_str(s: &str) -> PkHashResult<Self> {
        match s {
            "Hash" => Ok(PartitionKeyKind::Hash),
            "Range" => Ok(PartitionKeyKind::Range),
            "MultiHash" => Ok(PartitionKeyKind::MultiHash),
            other => Err(PkHashError::UnsupportedPartitionKeyKind(other.to_string())),
        }
    }
}

impl TryFrom<String> for PartitionKeyKind {
    type Error = PkHashError;

    fn try_from(value: String) -> PkHashResult<Self> {
        value.parse()
    }
}

impl From<PartitionKeyKind> for String {
    fn from(kind: PartitionKeyKind) -> Self {
        kind.as_str().to_string()
    }
}

/// Hash algorithm generation of a `Hash` container. Serialized as the
/// integer the service uses (`1` or `2`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum PartitionKeyDefinitionVersion {
    V1,
    V2,
}

impl TryFrom<u8> for PartitionKeyDefinitionVersion {
    type Error = PkHashError;

    fn try_from(value: u8) -> PkHashResult<Self> {
        match value {
            1 => Ok(PartitionKeyDefinitionVersion::V1),
            2 => Ok(PartitionKeyDefinitionVersion::V2),
            other => Err(PkHashError::UnsupportedPartitionKeyVersion(other)),
        }
    }
}

impl From<PartitionKeyDefinitionVersion> for u8 {
    fn from(version: PartitionKeyDefinitionVersion) -> Self {
        match version {
            PartitionKeyDefinitionVersion::V1 => 1,
            PartitionKeyDefinitionVersion::V2 => 2,
        }
    }
}

/// Container partition key definition
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartitionKeyDefinition {
    /// Document paths of the key components (`/id`, `/address/city`, ...)
    #[serde(default)]
    pub paths: Vec<String>,
    #[serde(default)]
    pub kind: PartitionKeyKind,
    /// Unset means V1 behaviour
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<PartitionKeyDefinitionVersion>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_key: Option<bool>,
}

impl PartitionKeyDefinition {
    /// Single-path `Hash` definition
    pub fn hash(path: impl Into<String>, version: PartitionKeyDefinitionVersion) -> Self {
        Self {
            paths: vec![path.into()],
            kind: PartitionKeyKind::Hash,
            version: Some(version),
            system_key: None,
        }
    }

    /// Hierarchical definition; always hashed with V2 per component
    pub fn multi_hash<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            paths: paths.into_iter().map(Into::into).collect(),
            kind: PartitionKeyKind::MultiHash,
            version: Some(PartitionKeyDefinitionVersion::V2),
            system_key: None,
        }
    }

    /// Parse the `partitionKey` object of a container's metadata.
    pub fn from_json(json: &str) -> PkHashResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn is_v2(&self) -> bool {
        self.version == Some(PartitionKeyDefinitionVersion::V2)
    }
}
