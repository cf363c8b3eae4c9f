//! Cross-origin policy for the front end.
//!
//! Only the configured origins are allowed, and credentials are permitted.
//! Browsers refuse `*` together with credentials, so methods and headers are
//! mirrored from the preflight request instead.

use axum::http::HeaderValue;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

use crate::config::ValidationError;

/// Builds the CORS layer for the given origins.
pub fn cors_layer(origins: &[String]) -> Result<CorsLayer, ValidationError> {
    let origins = origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin)
                .map_err(|_| ValidationError::InvalidCorsOrigin(origin.clone()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request()))
}
