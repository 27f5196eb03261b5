//! Wire models for the pipeline API

use serde::{Deserialize, Serialize};
use serde_json::Value;
use pipeline_core::ValidationReport;

/// Body of `POST /pipelines/parse`.
///
/// Missing or `null` fields decode as `None`. Each element is left as raw
/// JSON; the validator decides which records are usable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PipelineRequest {
    #[serde(default)]
    pub nodes: Option<Vec<Value>>,
    #[serde(default)]
    pub edges: Option<Vec<Value>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineResponse {
    pub num_nodes: usize,
    pub num_edges: usize,
    pub is_dag: bool,
}

impl From<ValidationReport> for PipelineResponse {
    fn from(report: ValidationReport) -> Self {
        Self {
            num_nodes: report.node_count,
            num_edges: report.edge_count,
            is_dag: report.is_acyclic,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PingResponse {
    #[serde(rename = "Ping")]
    pub ping: String,
}

impl Default for PingResponse {
    fn default() -> Self {
        Self { ping: "Pong".to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_accepts_missing_and_null_fields() {
        let request: PipelineRequest = serde_json::from_value(json!({})).unwrap();
        assert!(request.nodes.is_none());
        assert!(request.edges.is_none());

        let request: PipelineRequest = serde_json::from_value(json!({"nodes": null, "edges": [{}]})).unwrap();
        assert!(request.nodes.is_none());
        assert_eq!(request.edges.map(|e| e.len()), Some(1));
    }

    #[test]
    fn test_request_rejects_non_sequence_fields() {
        assert!(serde_json::from_value::<PipelineRequest>(json!({"nodes": "a,b"})).is_err());
        assert!(serde_json::from_value::<PipelineRequest>(json!({"edges": {"source": 1}})).is_err());
    }

    #[test]
    fn test_response_from_report() {
        let report = ValidationReport { node_count: 3, edge_count: 4, is_acyclic: false };
        let response = PipelineResponse::from(report);
        assert_eq!(
            serde_json::to_value(response).unwrap(),
            json!({"num_nodes": 3, "num_edges": 4, "is_dag": false})
        );
    }

    #[test]
    fn test_ping_wire_shape() {
        assert_eq!(serde_json::to_value(PingResponse::default()).unwrap(), json!({"Ping": "Pong"}));
    }
}
