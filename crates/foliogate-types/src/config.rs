//! Application configuration types.
//!
//! Configuration is read from the environment exactly once at startup
//! (see `foliogate-infra::config`) and carried through the process as an
//! immutable struct; components never reach for ambient env lookups, so
//! they stay testable with fake configuration.

use secrecy::SecretString;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Which chat backend serves the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChatMode {
    /// Relay to the upstream chat-completions API with streaming.
    #[default]
    Live,
    /// Keyword-matched FAQ responses over the content store, no network.
    Scripted,
}

impl fmt::Display for ChatMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChatMode::Live => write!(f, "live"),
            ChatMode::Scripted => write!(f, "scripted"),
        }
    }
}

impl FromStr for ChatMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "live" => Ok(ChatMode::Live),
            "scripted" => Ok(ChatMode::Scripted),
            other => Err(format!("invalid chat mode: '{other}'")),
        }
    }
}

/// Immutable process-wide configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub chat_mode: ChatMode,
    /// Upstream API key. Required in live mode; irrelevant in scripted mode.
    pub api_key: Option<SecretString>,
    /// Upstream API root, already normalized (no trailing slash).
    pub api_base: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f64,
    pub port: u16,
    /// Optional TOML file overriding the built-in portfolio content.
    pub content_path: Option<PathBuf>,
    /// SMTP transport settings; `None` selects the contact mock path.
    pub email: Option<EmailConfig>,
}

/// SMTP transport configuration for the contact relay.
#[derive(Debug, Clone)]
pub struct EmailConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub pass: SecretString,
    pub receiver: String,
}

impl EmailConfig {
    /// Port 465 is implicit TLS; everything else negotiates STARTTLS.
    pub fn implicit_tls(&self) -> bool {
        self.port == 465
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_mode_roundtrip() {
        for mode in [ChatMode::Live, ChatMode::Scripted] {
            let parsed: ChatMode = mode.to_string().parse().unwrap();
            assert_eq!(mode, parsed);
        }
    }

    #[test]
    fn test_chat_mode_rejects_unknown() {
        assert!("faq".parse::<ChatMode>().is_err());
    }

    #[test]
    fn test_implicit_tls_port() {
        let config = EmailConfig {
            host: "smtp.example.com".to_string(),
            port: 465,
            user: "u".to_string(),
            pass: SecretString::from("p"),
            receiver: "r@example.com".to_string(),
        };
        assert!(config.implicit_tls());

        let config = EmailConfig { port: 587, ..config };
        assert!(!config.implicit_tls());
    }
}
