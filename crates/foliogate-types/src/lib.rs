//! Shared domain types for Foliogate.
//!
//! Plain data shapes and error taxonomies used across the workspace:
//! chat turns and payloads, contact submissions, portfolio content,
//! configuration, and `thiserror`-derived error enums. No I/O here.

pub mod chat;
pub mod config;
pub mod contact;
pub mod content;
pub mod error;
