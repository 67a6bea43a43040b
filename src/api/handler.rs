//! API Lambda handler - forwards one HTTP request into the embedded application.
//!
//! `lambda_http` has already turned the API Gateway, Function URL or ALB event
//! into an `http::Request` and renders whatever comes back. This handler only
//! scopes the dispatch to the invocation and runs the router exactly once.

use axum::Router;
use axum::response::Response;
use lambda_http::{Error, Request, RequestExt};
use tower::ServiceExt;
use tracing::{Instrument, info, info_span};

/// Lambda handler for the API entrypoint.
///
/// `app` is built once in `main`; cloning it is a reference-count bump.
pub async fn function_handler(app: Router, request: Request) -> Result<Response, Error> {
    let request_id = request
        .lambda_context_ref()
        .map(|ctx| ctx.request_id.clone())
        .unwrap_or_default();
    let span = info_span!("invocation", request_id = %request_id);

    async move {
        info!(
            method = %request.method(),
            uri = %request.uri(),
            "Dispatching request"
        );

        let response = match app.oneshot(request).await {
            Ok(response) => response,
            Err(never) => match never {},
        };
        info!(status = response.status().as_u16(), "Request dispatched");

        Ok(response)
    }
    .instrument(span)
    .await
}
