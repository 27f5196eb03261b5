//! Extraction of typed nodes and edges from loosely-shaped records

use serde_json::Value;
use crate::id::NodeId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub id: NodeId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub source: NodeId,
    pub target: NodeId,
}

/// Reads a node out of a record. Only the `id` key is consulted; records that
/// are not objects or have no `id` key yield `None`. An explicit `null` id is
/// still a node, one that no edge can reach.
pub fn extract_node(record: &Value) -> Option<Node> {
    let id = record.as_object()?.get("id").map(NodeId::from_value)?;
    Some(Node { id })
}

/// Reads an edge out of a record. Both `source` and `target` must be present
/// and non-null. Whether they name known nodes is decided during graph
/// construction.
pub fn extract_edge(record: &Value) -> Option<Edge> {
    let fields = record.as_object()?;
    let source = endpoint(fields.get("source"))?;
    let target = endpoint(fields.get("target"))?;
    Some(Edge { source, target })
}

fn endpoint(value: Option<&Value>) -> Option<NodeId> {
    value.filter(|v| !v.is_null()).map(NodeId::from_value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_node_ignores_extra_keys() {
        let record = json!({"id": "llm-1", "type": "llm", "position": {"x": 10, "y": 20}});
        assert_eq!(extract_node(&record), Some(Node { id: NodeId::from("llm-1") }));
    }

    #[test]
    fn test_extract_node_keeps_null_id() {
        let node = extract_node(&json!({"id": null})).unwrap();
        assert_eq!(node.id.as_str(), "null");
    }

    #[test]
    fn test_extract_node_rejects_missing_id() {
        assert_eq!(extract_node(&json!({"type": "input"})), None);
        assert_eq!(extract_node(&json!("llm-1")), None);
        assert_eq!(extract_node(&json!([1, 2])), None);
    }

    #[test]
    fn test_extract_edge_requires_both_endpoints() {
        assert_eq!(
            extract_edge(&json!({"id": "e1", "source": 1, "target": 2})),
            Some(Edge { source: NodeId::from(1), target: NodeId::from(2) })
        );
        assert_eq!(extract_edge(&json!({"source": 1})), None);
        assert_eq!(extract_edge(&json!({"target": 2})), None);
        assert_eq!(extract_edge(&json!({"source": null, "target": 2})), None);
        assert_eq!(extract_edge(&json!(null)), None);
    }
}
