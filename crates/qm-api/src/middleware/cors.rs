use axum::http::{Method, header};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::middleware::request_id::REQUEST_ID_HEADER;

/// Creates a CORS layer for browser-based quiz clients
///
/// The API is read-only JSON over `GET`/`POST`, so only those methods (plus
/// preflight) are allowed. The request ID header may be sent and read back.
/// No cookies are involved, so credentials stay disabled.
pub fn create_cors_layer(allowed_origins: Vec<String>) -> CorsLayer {
    let origins = allowed_origins
        .into_iter()
        .filter_map(|s| s.parse::<axum::http::HeaderValue>().ok())
        .collect::<Vec<_>>();

    let request_id = header::HeaderName::from_static(REQUEST_ID_HEADER);

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, request_id.clone()])
        .expose_headers([request_id])
}
