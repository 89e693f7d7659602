//! Live upstream chat backend.
//!
//! One outbound POST per request to `{base}/chat/completions` with bearer
//! authentication. A streaming upstream response is handed to the SSE
//! re-framer; a JSON response is consolidated into a single reply.

pub mod streaming;
pub mod wire;

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use foliogate_core::chat::{ChatBackend, ChatOutcome};
use foliogate_types::chat::CompletionPayload;
use foliogate_types::error::RelayError;

use self::streaming::reframe;
use self::wire::extract_reply;

/// Connect timeout for the upstream call. The original relay applies no
/// timeout at all; bounding connection setup is a hardening measure that
/// still never cuts a long-running stream.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Chat backend that relays to the configured upstream provider.
///
/// Single-shot: a non-success upstream status is surfaced verbatim and
/// never retried. No state is retained across requests.
pub struct UpstreamRelay {
    client: reqwest::Client,
    endpoint: String,
    api_key: SecretString,
}

impl UpstreamRelay {
    /// Build a relay for an already-normalized API base URL.
    pub fn new(api_base: &str, api_key: SecretString) -> Result<Self, RelayError> {
        let client = reqwest::Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .map_err(|err| RelayError::Transport(err.to_string()))?;

        Ok(Self {
            client,
            endpoint: format!("{api_base}/chat/completions"),
            api_key,
        })
    }

    /// The resolved chat-completions endpoint.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// Whether an upstream content-type indicates an incremental transfer.
///
/// Matches SSE (`text/event-stream`), explicit stream types, and the
/// `text/plain` chunked replies some providers use.
fn is_streaming(content_type: &str) -> bool {
    let ct = content_type.to_ascii_lowercase();
    ct.contains("stream") || ct.contains("text/plain")
}

impl ChatBackend for UpstreamRelay {
    fn name(&self) -> &str {
        "groq"
    }

    async fn relay(&self, payload: CompletionPayload) -> Result<ChatOutcome, RelayError> {
        tracing::info!(endpoint = %self.endpoint, model = %payload.model, "sending upstream request");

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(self.api_key.expose_secret())
            .json(&payload)
            .send()
            .await
            .map_err(|err| RelayError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status = status.as_u16(), %body, "upstream returned an error");
            return Err(RelayError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_owned();

        if is_streaming(&content_type) {
            // Dropping the returned stream drops the reqwest body and
            // tears down the upstream connection, so a downstream
            // disconnect propagates without extra wiring.
            return Ok(ChatOutcome::Stream(reframe(response.bytes_stream())));
        }

        let raw: serde_json::Value = response
            .json()
            .await
            .map_err(|err| RelayError::Transport(err.to_string()))?;
        Ok(ChatOutcome::Complete(extract_reply(raw)))
    }
}
