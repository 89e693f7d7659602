//! Contact-form submission types.

use serde::Deserialize;

/// A contact-form submission relayed as an outbound email.
///
/// All three fields are required; the email address format is not
/// validated; the relay forwards what the caller typed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactSubmission {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

impl ContactSubmission {
    /// True when every required field is present and non-empty.
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.email.is_empty() && !self.message.is_empty()
    }
}
