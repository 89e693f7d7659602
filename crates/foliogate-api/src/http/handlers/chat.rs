//! POST /api/chat -- chat relay endpoint.
//!
//! A streaming backend reply is written as plain incremental text under
//! event-stream headers (the fragments are NOT re-wrapped as SSE; the
//! widget appends them to the in-flight message as they arrive). A
//! consolidated reply is returned as one JSON object.

use std::convert::Infallible;

use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use futures_util::StreamExt;

use foliogate_core::chat::{ChatOutcome, DeltaStream};
use foliogate_types::chat::ChatRequest;

use crate::http::error::AppError;
use crate::state::AppState;

pub async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Response, AppError> {
    match state.chat.handle(request).await? {
        ChatOutcome::Complete(reply) => Ok(Json(reply).into_response()),
        ChatOutcome::Stream(deltas) => Ok(stream_response(deltas)),
    }
}

/// Write delta fragments as they arrive.
///
/// Headers are committed before the first fragment, so a mid-stream read
/// error can only truncate the body: it is logged and the response ends
/// without a synthetic error payload. The client treats a truncated body
/// as an incomplete answer, not a success.
fn stream_response(deltas: DeltaStream) -> Response {
    let body = async_stream::stream! {
        let mut deltas = std::pin::pin!(deltas);
        while let Some(item) = deltas.next().await {
            match item {
                Ok(fragment) => yield Ok::<_, Infallible>(Bytes::from(fragment.into_bytes())),
                Err(err) => {
                    tracing::error!("upstream stream read failed: {err}");
                    break;
                }
            }
        }
    };

    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/event-stream; charset=utf-8"),
            (header::CACHE_CONTROL, "no-cache, no-transform"),
        ],
        Body::from_stream(body),
    )
        .into_response()
}
