//! Application error type mapping to HTTP status codes.
//!
//! Validation errors become 400, upstream failures 502 with the status
//! and body surfaced verbatim, everything else 500. Stream errors never
//! reach this mapping: once streaming headers are committed they can
//! only truncate the body (handled in the chat handler).

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use foliogate_types::error::{ContactError, RelayError};

/// Application-level error mapped to an HTTP response.
#[derive(Debug)]
pub enum AppError {
    Relay(RelayError),
    Contact(ContactError),
}

impl From<RelayError> for AppError {
    fn from(err: RelayError) -> Self {
        AppError::Relay(err)
    }
}

impl From<ContactError> for AppError {
    fn from(err: ContactError) -> Self {
        AppError::Contact(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Relay(RelayError::InvalidRequest(msg)) => {
                (StatusCode::BAD_REQUEST, json!({ "error": msg }))
            }
            AppError::Relay(RelayError::Upstream { status, body }) => (
                StatusCode::BAD_GATEWAY,
                json!({
                    "error": "Upstream API error",
                    "status": status,
                    "details": body,
                }),
            ),
            AppError::Relay(err) => {
                tracing::error!("chat relay failed: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Internal Server Error" }),
                )
            }
            AppError::Contact(ContactError::InvalidRequest(msg)) => {
                (StatusCode::BAD_REQUEST, json!({ "error": msg }))
            }
            AppError::Contact(ContactError::Delivery(err)) => {
                tracing::error!("email delivery failed: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Failed to send email." }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn response_parts(err: AppError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_invalid_request_maps_to_400() {
        let (status, body) = response_parts(AppError::Relay(RelayError::InvalidRequest(
            "Missing `message` field in request.".to_string(),
        )))
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Missing `message` field in request.");
    }

    #[tokio::test]
    async fn test_upstream_error_maps_to_502_with_details() {
        let (status, body) = response_parts(AppError::Relay(RelayError::Upstream {
            status: 500,
            body: "rate limited".to_string(),
        }))
        .await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["status"], 500);
        assert_eq!(body["details"], "rate limited");
    }

    #[tokio::test]
    async fn test_transport_error_maps_to_500() {
        let (status, body) = response_parts(AppError::Relay(RelayError::Transport(
            "connection refused".to_string(),
        )))
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Internal Server Error");
    }

    #[tokio::test]
    async fn test_delivery_error_maps_to_500() {
        let (status, body) = response_parts(AppError::Contact(ContactError::Delivery(
            "tls handshake".to_string(),
        )))
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Failed to send email.");
    }
}
