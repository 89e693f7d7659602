//! Infrastructure implementations for Foliogate.
//!
//! Everything that talks to the outside world: the environment-sourced
//! configuration loader, the live upstream chat relay with its SSE
//! re-framer, and the SMTP mailer.

pub mod config;
pub mod email;
pub mod upstream;
