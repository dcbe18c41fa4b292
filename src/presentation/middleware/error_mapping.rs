//! Error Mapping Middleware
//!
//! Rewrites error responses at the transport boundary into a JSON body
//! describing the failed method, URL, and underlying error.

use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use crate::shared::error::{ErrorDetail, ErrorResponse};

/// Fold the request method and URL into any error response produced by a
/// handler. The originating status code is preserved; successful responses
/// pass through untouched.
pub async fn map_error_response(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;

    let Some(detail) = response.extensions().get::<ErrorDetail>().cloned() else {
        return response;
    };

    let status = response.status();
    let body = ErrorResponse {
        detail: format!(
            "Failed method {} at URL {}. Exception message is {}.",
            method, uri, detail.0
        ),
    };

    (status, Json(body)).into_response()
}
