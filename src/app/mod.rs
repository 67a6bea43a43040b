//! The embedded web application.
//!
//! Only `GET /` is routed. Everything else is answered by axum's defaults:
//! unknown paths get an empty 404, other methods on `/` get an empty 405 with
//! an `allow` header, and `HEAD /` reuses the GET handler without a body.

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

pub const GREETING: &str = "Hello, World!";

/// Builds the router. Called once per process, before the runtime loop starts.
pub fn router() -> Router {
    Router::new()
        .route("/", get(say_hello))
        .layer(TraceLayer::new_for_http())
}

async fn say_hello() -> &'static str {
    GREETING
}
