//! Partition key values as seen by the hashers

use serde_json::Value;

use crate::error::{PkHashError, PkHashResult};

/// One scalar component of a partition key.
#[derive(Debug, Clone, PartialEq)]
pub enum PartitionKeyValue {
    String(String),
    Number(f64),
    Boolean(bool),
    Null,
    /// The partition key path is absent from the document
    Undefined,
}

impl PartitionKeyValue {
    /// Short type name used in error messages and logs
    pub fn type_name(&self) -> &'static str {
        match self {
            PartitionKeyValue::String(_) => "string",
            PartitionKeyValue::Number(_) => "number",
            PartitionKeyValue::Boolean(_) => "boolean",
            PartitionKeyValue::Null => "null",
            PartitionKeyValue::Undefined => "undefined",
        }
    }
}

impl From<&str> for PartitionKeyValue {
    fn from(value: &str) -> Self {
        PartitionKeyValue::String(value.to_string())
    }
}

impl From<String> for PartitionKeyValue {
    fn from(value: String) -> Self {
        PartitionKeyValue::String(value)
    }
}

impl From<f64> for PartitionKeyValue {
    fn from(value: f64) -> Self {
        PartitionKeyValue::Number(value)
    }
}

impl From<i32> for PartitionKeyValue {
    fn from(value: i32) -> Self {
        PartitionKeyValue::Number(f64::from(value))
    }
}

impl From<u32> for PartitionKeyValue {
    fn from(value: u32) -> Self {
        PartitionKeyValue::Number(f64::from(value))
    }
}

// Precision beyond 2^53 is lost, same as on the wire.
impl From<i64> for PartitionKeyValue {
    fn from(value: i64) -> Self {
        PartitionKeyValue::Number(value as f64)
    }
}

impl From<bool> for PartitionKeyValue {
    fn from(value: bool) -> Self {
        PartitionKeyValue::Boolean(value)
    }
}

impl TryFrom<&Value> for PartitionKeyValue {
    type Error = PkHashError;

    fn try_from(value: &Value) -> PkHashResult<Self> {
        match value {
            Value::String(s) => Ok(PartitionKeyValue::String(s.clone())),
            Value::Number(n) => n.as_f64().map(PartitionKeyValue::Number).ok_or_else(|| {
                PkHashError::UnsupportedValueType(format!("number {} outside f64 range", n))
            }),
            Value::Bool(b) => Ok(PartitionKeyValue::Boolean(*b)),
            Value::Null => Ok(PartitionKeyValue::Null),
            Value::Array(_) => Err(PkHashError::UnsupportedValueType("array".to_string())),
            Value::Object(_) => Err(PkHashError::UnsupportedValueType("object".to_string())),
        }
    }
}

/// A missing field maps to `Undefined`, which hashes differently from `null`.
impl TryFrom<Option<&Value>> for PartitionKeyValue {
    type Error = PkHashError;

    fn try_from(value: Option<&Value>) -> PkHashResult<Self> {
        match value {
            Some(v) => PartitionKeyValue::try_from(v),
            None => Ok(PartitionKeyValue::Undefined),
        }
    }
}

/// An ordered partition key: one component for `Hash` containers, one per
/// path for `MultiHash` (hierarchical) containers. Order is never changed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PartitionKey {
    components: Vec<PartitionKeyValue>,
}

impl PartitionKey {
    pub fn new(components: Vec<PartitionKeyValue>) -> Self {
        Self { components }
    }

    /// Key for a document that has no value at its partition key path
    pub fn none() -> Self {
        Self::single(PartitionKeyValue::Undefined)
    }

    pub fn single(value: impl Into<PartitionKeyValue>) -> Self {
        Self {
            components: vec![value.into()],
        }
    }

    pub fn components(&self) -> &[PartitionKeyValue] {
        &self.components
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

impl From<PartitionKeyValue> for PartitionKey {
    fn from(value: PartitionKeyValue) -> Self {
        Self::single(value)
    }
}

impl From<Vec<PartitionKeyValue>> for PartitionKey {
    fn from(components: Vec<PartitionKeyValue>) -> Self {
        Self::new(components)
    }
}

impl FromIterator<PartitionKeyValue> for PartitionKey {
    fn from_iter<I: IntoIterator<Item = PartitionKeyValue>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// A JSON array becomes a composite key whose elements must all be scalars;
/// any scalar becomes a one-component key.
impl TryFrom<&Value> for PartitionKey {
    type Error = PkHashError;

    fn try_from(value: &Value) -> PkHashResult<Self> {
        match value {
            Value::Array(items) => items
                .iter()
                .map(|item| {
                    PartitionKeyValue::try_from(item).map_err(|e| match e {
                        PkHashError::UnsupportedValueType(kind) => {
                            PkHashError::UnsupportedValueType(format!(
                                "{} inside composite partition key",
                                kind
                            ))
                        }
                        other => other,
                    })
                })
                .collect(),
            scalar => PartitionKeyValue::try_from(scalar).map(PartitionKey::single),
        }
    }
}
