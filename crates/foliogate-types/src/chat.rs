//! Chat relay request/response types.
//!
//! These types model the data shapes flowing through the chat relay:
//! the inbound widget request, the conversation turns, the payload sent
//! to the upstream chat-completions API, and the consolidated reply.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Role of a turn in a chat conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnRole {
    System,
    User,
    Assistant,
}

impl fmt::Display for TurnRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TurnRole::System => write!(f, "system"),
            TurnRole::User => write!(f, "user"),
            TurnRole::Assistant => write!(f, "assistant"),
        }
    }
}

impl FromStr for TurnRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "system" => Ok(TurnRole::System),
            "user" => Ok(TurnRole::User),
            "assistant" => Ok(TurnRole::Assistant),
            other => Err(format!("invalid turn role: '{other}'")),
        }
    }
}

/// A single turn in a chat conversation. Immutable once constructed;
/// turns are only ever appended to a sequence, never edited in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: TurnRole,
    pub content: String,
}

impl ChatTurn {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: TurnRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: TurnRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: TurnRole::Assistant,
            content: content.into(),
        }
    }
}

/// Inbound chat request from the site widget.
///
/// `message` is kept as a raw JSON value: a missing or non-string field
/// must map to the relay's own 400 response, not to a rejection from the
/// JSON extractor. History length is caller-controlled and unvalidated.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<serde_json::Value>,
    #[serde(default)]
    pub history: Vec<ChatTurn>,
}

impl ChatRequest {
    /// The user message, if it is a non-empty string.
    pub fn message_text(&self) -> Option<&str> {
        self.message
            .as_ref()
            .and_then(|v| v.as_str())
            .filter(|s| !s.is_empty())
    }
}

/// Payload sent to the upstream chat-completions endpoint.
///
/// `messages[0]` is always a freshly synthesized system turn; caller
/// history follows in original order and the new user turn comes last.
#[derive(Debug, Clone, Serialize)]
pub struct CompletionPayload {
    pub model: String,
    pub messages: Vec<ChatTurn>,
    pub max_tokens: u32,
    pub temperature: f64,
    pub stream: bool,
}

/// Consolidated (non-streaming) reply returned to the widget.
///
/// `raw` carries the verbatim upstream body for diagnosability; the
/// scripted backend has no upstream body and sets it to `null`.
#[derive(Debug, Clone, Serialize)]
pub struct ChatReply {
    pub reply: String,
    pub raw: serde_json::Value,
}
