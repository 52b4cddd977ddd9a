//! Registration handlers.

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::{Method, Uri},
    routing::{post, MethodRouter},
};
use tracing::{info, warn};

use crate::response::ApiResponse;
use crate::state::AppState;

/// `POST` registers; any other method on the route is rejected.
pub fn register_route() -> MethodRouter<AppState> {
    post(register).fallback(method_not_allowed)
}

/// Register a customer, optionally anonymous.
///
/// The body is taken as raw bytes so a missing content type or a broken
/// payload is reported by the pipeline as malformed input. A body the
/// extractor refuses (too large, interrupted) gets the same answer.
pub async fn register(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    body: Result<Bytes, BytesRejection>,
) -> ApiResponse {
    info!(path = %uri.path(), method = %method, "Received a request");

    let body = match body {
        Ok(body) => body,
        Err(rejection) => {
            warn!(reason = %rejection, "Request body rejected");
            return ApiResponse::invalid_request_body();
        }
    };

    ApiResponse::from(state.registrar.register(&body).await)
}

/// Fallback for unsupported routes and methods.
pub async fn method_not_allowed(method: Method, uri: Uri) -> ApiResponse {
    info!(path = %uri.path(), method = %method, "Received a request");

    ApiResponse::method_not_allowed()
}
