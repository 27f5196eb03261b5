//! Pipeline validation entry point

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;
use crate::graph::Graph;
use crate::record::{extract_edge, extract_node};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Node records carrying an `id` key, duplicates and `null` included
    pub node_count: usize,
    /// Raw number of edge records supplied, usable or not
    pub edge_count: usize,
    /// Every id-bearing record was visited by the Kahn pass. A repeated id
    /// is visited once, so duplicates make this false.
    pub is_acyclic: bool,
}

/// Validates a pipeline given as loosely-shaped node and edge records.
///
/// Malformed records are filtered out rather than rejected: nodes without an
/// `id` key are dropped, and edges missing an endpoint or pointing at an
/// unknown node do not take part in the cycle check. `edge_count` still
/// reports every supplied edge record.
pub fn validate(nodes: &[Value], edges: &[Value]) -> ValidationReport {
    let typed_nodes: Vec<_> = nodes.iter().filter_map(extract_node).collect();
    let node_count = typed_nodes.len();

    let graph = Graph::build(typed_nodes, edges.iter().filter_map(extract_edge));
    let traversal = graph.traverse();

    debug!(
        node_records = nodes.len(),
        distinct_nodes = graph.node_count(),
        edge_records = edges.len(),
        linked_edges = graph.edge_count(),
        dangling_edges = graph.dangling_edges(),
        blocked = traversal.blocked.len(),
        "validated pipeline graph"
    );

    ValidationReport {
        node_count,
        edge_count: edges.len(),
        is_acyclic: traversal.order.len() == node_count,
    }
}

/// Same as [`validate`], with absent sequences treated as empty.
pub fn validate_optional(nodes: Option<&[Value]>, edges: Option<&[Value]>) -> ValidationReport {
    validate(nodes.unwrap_or_default(), edges.unwrap_or_default())
}
