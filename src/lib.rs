//! hello-fn - a single HTTP cloud function that answers `GET /` with a greeting.
//!
//! `lambda_http` turns the API Gateway, Function URL or ALB event into an
//! `http::Request`; the handler dispatches it once through an embedded axum
//! router and hands the router's response back for rendering.
//!
//! # Example
//!
//! ```no_run
//! use hello_fn::{api, app};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), lambda_http::Error> {
//!     hello_fn::setup_logging();
//!
//!     let request = lambda_http::request::from_str(
//!         r#"{"version":"2.0","rawPath":"/","rawQueryString":"",
//!             "requestContext":{"http":{"method":"GET","path":"/"}},
//!             "isBase64Encoded":false}"#,
//!     )?;
//!     let response = api::handler::function_handler(app::router(), request).await?;
//!
//!     assert_eq!(response.status(), 200);
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod api;
pub mod app;
pub mod core;
pub mod errors;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// Log levels follow `RUST_LOG`, defaulting to `info`. Calling this more than
/// once is harmless; only the first subscriber is installed.
///
/// # Example
///
/// ```
/// hello_fn::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
