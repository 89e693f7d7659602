//! ChatBackend trait definition and its object-safe boxed wrapper.
//!
//! The trait is the seam between the relay service and whatever answers
//! chat requests: the live upstream relay in `foliogate-infra`, the
//! scripted FAQ responder, or a test double. Uses RPITIT for `relay`;
//! `BoxChatBackend` provides dynamic dispatch for runtime mode selection
//! via the usual blanket-impl pattern:
//! 1. an object-safe `ChatBackendDyn` trait with a boxed future
//! 2. a blanket impl of `ChatBackendDyn` for all `T: ChatBackend`
//! 3. `BoxChatBackend` wrapping `Box<dyn ChatBackendDyn>` and delegating

use std::future::Future;
use std::pin::Pin;

use futures_util::Stream;

use foliogate_types::chat::{ChatReply, CompletionPayload};
use foliogate_types::error::RelayError;

/// Boxed stream of plain-text fragments from a streaming reply.
///
/// Items arrive strictly in upstream order. An `Err` item means the
/// transport failed mid-stream; no further items follow it.
pub type DeltaStream = Pin<Box<dyn Stream<Item = Result<String, RelayError>> + Send + 'static>>;

/// How a backend answered a chat request.
pub enum ChatOutcome {
    /// Incremental text fragments to be written to the response as they
    /// arrive.
    Stream(DeltaStream),
    /// One consolidated reply.
    Complete(ChatReply),
}

/// Trait for chat backends (live upstream relay, scripted FAQ).
pub trait ChatBackend: Send + Sync {
    /// Short backend name for log lines (e.g., "groq", "scripted").
    fn name(&self) -> &str;

    /// Answer one assembled chat payload. At most one upstream attempt;
    /// retries are out of scope for the relay.
    fn relay(
        &self,
        payload: CompletionPayload,
    ) -> impl Future<Output = Result<ChatOutcome, RelayError>> + Send;
}

/// Object-safe version of [`ChatBackend`] with a boxed future.
///
/// Exists solely to enable dynamic dispatch; a blanket implementation
/// covers every `ChatBackend`.
pub trait ChatBackendDyn: Send + Sync {
    fn name(&self) -> &str;

    fn relay_boxed(
        &self,
        payload: CompletionPayload,
    ) -> Pin<Box<dyn Future<Output = Result<ChatOutcome, RelayError>> + Send + '_>>;
}

impl<T: ChatBackend> ChatBackendDyn for T {
    fn name(&self) -> &str {
        ChatBackend::name(self)
    }

    fn relay_boxed(
        &self,
        payload: CompletionPayload,
    ) -> Pin<Box<dyn Future<Output = Result<ChatOutcome, RelayError>> + Send + '_>> {
        Box::pin(self.relay(payload))
    }
}

/// Type-erased chat backend for runtime mode selection.
pub struct BoxChatBackend {
    inner: Box<dyn ChatBackendDyn>,
}

impl BoxChatBackend {
    pub fn new(backend: impl ChatBackend + 'static) -> Self {
        Self {
            inner: Box::new(backend),
        }
    }
}

impl ChatBackend for BoxChatBackend {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn relay(
        &self,
        payload: CompletionPayload,
    ) -> impl Future<Output = Result<ChatOutcome, RelayError>> + Send {
        self.inner.relay_boxed(payload)
    }
}
