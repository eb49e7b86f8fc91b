//! Partition key data model: values, composite keys and container definitions.

pub mod definition;
pub mod value;

pub use definition::{PartitionKeyDefinition, PartitionKeyDefinitionVersion, PartitionKeyKind};
pub use value::{PartitionKey, PartitionKeyValue};
