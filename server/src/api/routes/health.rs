//! Liveness route

use axum::{
    Router,
    routing::get,
    Json,
};
use crate::models::PingResponse;

pub fn routes() -> Router {
    Router::new()
        .route("/", get(ping))
}

#[axum::debug_handler]
async fn ping() -> Json<PingResponse> {
    Json(PingResponse::default())
}
