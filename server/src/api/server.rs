//! API server implementation

use axum::{
    Router,
    http::HeaderValue,
};
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use crate::api::routes;
use crate::config::{Config, CorsConfig};
use crate::error::{PipelineError, Result};

pub struct ApiServer {
    config: Config,
    cors: CorsLayer,
}

impl ApiServer {
    pub fn new(config: Config) -> Result<Self> {
        let cors = cors_layer(&config.cors)?;
        Ok(Self { config, cors })
    }

    pub fn router(&self) -> Router {
        Router::new()
            .merge(routes::health::routes())
            .merge(routes::pipelines::routes())
            .layer(self.cors.clone())
            .layer(TraceLayer::new_for_http())
    }

    pub async fn start(&self) -> Result<()> {
        let addr = self.config.listen_address();
        let listener = TcpListener::bind(&addr).await
            .map_err(|e| PipelineError::Internal(format!("Failed to bind {}: {}", addr, e)))?;

        self.serve(listener).await
    }

    /// Serves on an already bound listener until Ctrl+C
    pub async fn serve(&self, listener: TcpListener) -> Result<()> {
        let app = self.router();
        let addr = listener.local_addr()?;
        info!("API server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| PipelineError::Internal(format!("Server error: {}", e)))?;

        info!("API server stopped");
        Ok(())
    }
}

fn cors_layer(config: &CorsConfig) -> Result<CorsLayer> {
    let origin = if config.allows_any_origin() {
        AllowOrigin::from(Any)
    } else {
        let origins = config
            .allowed_origins
            .iter()
            .map(|o| {
                HeaderValue::from_str(o)
                    .map_err(|e| PipelineError::Config(format!("Invalid CORS origin {:?}: {}", o, e)))
            })
            .collect::<Result<Vec<_>>>()?;
        AllowOrigin::list(origins)
    };

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(Any)
        .allow_headers(Any))
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received Ctrl+C, shutting down"),
        Err(e) => {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
