//! POST /api/send-email -- contact relay endpoint.

use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use foliogate_types::contact::ContactSubmission;

use crate::http::error::AppError;
use crate::state::AppState;

pub async fn send_email(
    State(state): State<AppState>,
    Json(submission): Json<ContactSubmission>,
) -> Result<Json<Value>, AppError> {
    let outcome = state.contact.handle(submission).await?;
    Ok(Json(json!({ "message": outcome.message() })))
}
