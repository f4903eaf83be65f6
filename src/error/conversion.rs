/**
 * Error Conversion
 *
 * This module implements `IntoResponse` for `ApiError`, so handlers can
 * return `Result<_, ApiError>` directly. The error becomes a JSON body:
 *
 * ```json
 * { "error": "Error message" }
 * ```
 *
 * Storage and internal failures log their detail here and return a
 * generic message to the client.
 */

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

use crate::error::types::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("request failed: {self}");
        }

        let body = serde_json::json!({
            "error": self.client_message(),
        });

        (status, Json(body)).into_response()
    }
}
