//! Contact relay: validation, mock fallback, and the mailer seam.

pub mod service;

pub use service::{ContactOutcome, ContactService, Mailer};
