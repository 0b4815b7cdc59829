//! Middleware stack for the API server
//!
//! Request-id generation, request tracing, and CORS. The request flow itself
//! carries no timeout or throttling layer; a query failure is terminal for
//! the request and nothing is retried.

use axum::{
    body::Body,
    http::{header, HeaderValue, Method, Request},
    Router,
};
use live_common::CorsConfig;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::state::AppState;

/// Header name for request ID
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Apply the middleware stack to the router.
///
/// Tower applies layers inside-out, so adding CORS first means the request
/// passes through request-id generation, then propagation, then tracing,
/// then CORS before reaching a handler.
pub fn apply_middleware(
    router: Router<AppState>,
    cors_config: &CorsConfig,
    is_production: bool,
) -> Router<AppState> {
    let request_id_header = header::HeaderName::from_static(REQUEST_ID_HEADER);

    router
        .layer(create_cors_layer(cors_config, is_production))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(request_span)
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
}

/// Span wrapping one request, tagged with its id
fn request_span(request: &Request<Body>) -> tracing::Span {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown");

    tracing::info_span!(
        "http_request",
        method = %request.method(),
        uri = %request.uri(),
        request_id = %request_id,
    )
}

/// CORS policy: configured origins only in production, anything in a
/// development setup with no origins configured.
fn create_cors_layer(config: &CorsConfig, is_production: bool) -> CorsLayer {
    let base_layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::HeaderName::from_static(REQUEST_ID_HEADER),
        ])
        .expose_headers([header::HeaderName::from_static(REQUEST_ID_HEADER)]);

    if !is_production && config.allowed_origins.is_empty() {
        return base_layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| {
            origin.parse::<HeaderValue>().ok().or_else(|| {
                tracing::warn!("Invalid CORS origin: {}", origin);
                None
            })
        })
        .collect();

    if origins.is_empty() {
        tracing::warn!("CORS: no valid origins configured; browsers will be blocked");
    }
    base_layer.allow_origin(AllowOrigin::list(origins))
}
