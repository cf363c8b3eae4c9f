//! HTTP adapters - REST API implementations.

pub mod middleware;
pub mod relay;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::config::{ServerConfig, ValidationError};

// Re-export key types for convenience
pub use relay::relay_router;
pub use relay::RelayAppState;

/// Builds the complete application: relay routes, CORS, and request tracing.
pub fn app_router(state: RelayAppState, server: &ServerConfig) -> Result<Router, ValidationError> {
    let cors = middleware::cors_layer(&server.cors_origins_list())?;

    Ok(relay_router()
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http()))
}
