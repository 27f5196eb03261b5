//! Opaque node identifiers

use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// Identifier of a pipeline node.
///
/// Any JSON value, `null` included, can act as an identifier. Two identifiers
/// are the same node when their compact JSON encodings match, so `"1"` and `1`
/// name different nodes, and so do `1`, `1.0` and `true`, which a dynamically
/// typed host would treat as one key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    pub fn from_value(value: &Value) -> Self {
        NodeId(value.to_string())
    }

    /// Compact JSON encoding of the original value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        NodeId(Value::from(s).to_string())
    }
}

impl From<i64> for NodeId {
    fn from(n: i64) -> Self {
        NodeId(Value::from(n).to_string())
    }
}
