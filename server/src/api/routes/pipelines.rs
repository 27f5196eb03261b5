//! Pipeline routes

use axum::{
    Router,
    routing::post,
    extract::rejection::JsonRejection,
    Json,
};
use pipeline_core::validate_optional;
use tracing::debug;
use crate::models::{PipelineRequest, PipelineResponse};
use crate::error::Result;

pub fn routes() -> Router {
    Router::new()
        .route("/pipelines/parse", post(parse_pipeline))
}

#[axum::debug_handler]
async fn parse_pipeline(
    payload: std::result::Result<Json<PipelineRequest>, JsonRejection>,
) -> Result<Json<PipelineResponse>> {
    let Json(request) = payload?;

    let report = validate_optional(request.nodes.as_deref(), request.edges.as_deref());
    debug!(
        num_nodes = report.node_count,
        num_edges = report.edge_count,
        is_dag = report.is_acyclic,
        "parsed pipeline"
    );

    Ok(Json(report.into()))
}
