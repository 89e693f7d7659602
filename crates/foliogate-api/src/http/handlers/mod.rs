//! HTTP handlers, one module per endpoint.

pub mod chat;
pub mod contact;
pub mod health;
