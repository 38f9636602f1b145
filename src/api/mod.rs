//! HTTP API Module
//!
//! Wires the search engine and the document store into an Axum router.
//!
//! ## Routes
//! - `GET /`: health check.
//! - `GET /docs`: stored document metadata and an endpoint overview.
//! - `POST /generate`: run a query and return ranked documents with a summary.
//!
//! ## Layers
//! Requests are traced with `TraceLayer`, filtered through a credentialed CORS
//! policy for the configured frontend origins, and handler panics are turned
//! into 500 responses by `CatchPanicLayer`.

pub mod errors;
pub mod handlers;
pub mod protocol;


use crate::search::engine::Matcher;
use crate::search::handlers::handle_generate;
use axum::http::HeaderValue;
use axum::{
    Router,
    extract::Extension,
    routing::{get, post},
};
use errors::handle_panic;
use handlers::{handle_docs, handle_health};
use protocol::{ENDPOINT_DOCS, ENDPOINT_GENERATE, ENDPOINT_HEALTH};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

/// Builds the application router.
///
/// `allowed_origins` are the browser origins permitted to call the API with
/// credentials.
pub fn create_router(matcher: Matcher, allowed_origins: Vec<HeaderValue>) -> Router {
    Router::new()
        .route(ENDPOINT_HEALTH, get(handle_health))
        .route(ENDPOINT_DOCS, get(handle_docs))
        .route(ENDPOINT_GENERATE, post(handle_generate))
        .layer(Extension(matcher))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(cors_layer(allowed_origins))
        .layer(TraceLayer::new_for_http())
}

/// Credentialed CORS cannot use `*`, so methods and headers are mirrored back
/// from the preflight request instead.
fn cors_layer(allowed_origins: Vec<HeaderValue>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed_origins))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
}
