//! Chat relay: validation, payload assembly, and the backend seam.

pub mod backend;
pub mod scripted;
pub mod service;

pub use backend::{BoxChatBackend, ChatBackend, ChatOutcome, DeltaStream};
pub use scripted::ScriptedFaqBackend;
pub use service::ChatService;
