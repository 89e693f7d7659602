//! Chat relay service: validation and payload assembly.

use std::sync::Arc;

use foliogate_types::chat::{ChatRequest, ChatTurn, CompletionPayload};
use foliogate_types::content::PortfolioContent;
use foliogate_types::error::RelayError;

use crate::chat::backend::{ChatBackend, ChatOutcome};
use crate::content::system_prompt;

/// Generation parameters applied to every upstream payload.
#[derive(Debug, Clone)]
pub struct ChatParams {
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f64,
}

/// Validates inbound chat requests, assembles the upstream payload, and
/// hands it to the configured backend.
///
/// The service holds no per-request state; the content store and params
/// are read-only for the life of the process.
pub struct ChatService<B: ChatBackend> {
    backend: B,
    content: Arc<PortfolioContent>,
    params: ChatParams,
}

impl<B: ChatBackend> ChatService<B> {
    pub fn new(backend: B, content: Arc<PortfolioContent>, params: ChatParams) -> Self {
        Self {
            backend,
            content,
            params,
        }
    }

    /// Handle one chat request.
    ///
    /// Fails with `InvalidRequest` before any backend call when `message`
    /// is absent, not a string, or empty.
    pub async fn handle(&self, request: ChatRequest) -> Result<ChatOutcome, RelayError> {
        let Some(message) = request.message_text() else {
            return Err(RelayError::InvalidRequest(
                "Missing `message` field in request.".to_string(),
            ));
        };

        let payload = self.build_payload(message, &request.history);
        tracing::debug!(
            backend = self.backend.name(),
            model = %payload.model,
            turns = payload.messages.len(),
            "relaying chat request"
        );
        self.backend.relay(payload).await
    }

    /// Assemble the upstream payload: synthesized system turn first,
    /// caller history verbatim, new user turn last.
    fn build_payload(&self, message: &str, history: &[ChatTurn]) -> CompletionPayload {
        let mut messages = Vec::with_capacity(history.len() + 2);
        messages.push(ChatTurn::system(system_prompt(&self.content)));
        messages.extend(history.iter().cloned());
        messages.push(ChatTurn::user(message));

        CompletionPayload {
            model: self.params.model.clone(),
            messages,
            max_tokens: self.params.max_tokens,
            temperature: self.params.temperature,
            stream: true,
        }
    }
}
