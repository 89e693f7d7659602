//! Environment-sourced configuration loader.
//!
//! Builds the immutable [`AppConfig`] once at startup. The loader is
//! written against a key-lookup closure so tests can feed it a fake
//! environment without mutating process state.

use secrecy::SecretString;
use std::path::PathBuf;

use foliogate_types::config::{AppConfig, ChatMode, EmailConfig};
use foliogate_types::error::ConfigError;

pub const DEFAULT_API_BASE: &str = "https://api.groq.com/openai/v1";
const DEFAULT_MODEL: &str = "openai/gpt-oss-120b";
const DEFAULT_PORT: u16 = 8083;
const DEFAULT_MAX_TOKENS: u32 = 512;
const DEFAULT_TEMPERATURE: f64 = 0.7;
const DEFAULT_SMTP_PORT: u16 = 587;

/// Load configuration from the process environment.
pub fn from_env() -> Result<AppConfig, ConfigError> {
    load(|key| std::env::var(key).ok())
}

/// Load configuration through a key-lookup closure.
///
/// Empty values are treated as unset, matching shell `VAR=` exports.
pub fn load(get: impl Fn(&str) -> Option<String>) -> Result<AppConfig, ConfigError> {
    let get = |key: &str| get(key).filter(|v| !v.is_empty());

    let chat_mode = match get("CHAT_MODE") {
        Some(raw) => raw.parse::<ChatMode>().map_err(|_| ConfigError::InvalidValue {
            name: "CHAT_MODE",
            value: raw,
        })?,
        None => ChatMode::default(),
    };

    let api_key = get("GROQ_API_KEY").map(SecretString::from);
    if chat_mode == ChatMode::Live && api_key.is_none() {
        return Err(ConfigError::MissingApiKey);
    }

    let api_base = normalize_api_base(get("GROQ_API_BASE").as_deref());
    let model = get("GROQ_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());
    let port = parse_or("PORT", get("PORT"), DEFAULT_PORT)?;
    let max_tokens = parse_or("CHAT_MAX_TOKENS", get("CHAT_MAX_TOKENS"), DEFAULT_MAX_TOKENS)?;
    let temperature = parse_or(
        "CHAT_TEMPERATURE",
        get("CHAT_TEMPERATURE"),
        DEFAULT_TEMPERATURE,
    )?;

    let email = match (get("EMAIL_USER"), get("EMAIL_PASS")) {
        (Some(user), Some(pass)) => {
            let receiver = get("EMAIL_RECEIVER").unwrap_or_else(|| user.clone());
            Some(EmailConfig {
                host: get("EMAIL_HOST").unwrap_or_else(|| "localhost".to_string()),
                port: parse_or("EMAIL_PORT", get("EMAIL_PORT"), DEFAULT_SMTP_PORT)?,
                user,
                pass: SecretString::from(pass),
                receiver,
            })
        }
        // Without both credentials the contact relay takes the mock path.
        _ => None,
    };

    Ok(AppConfig {
        chat_mode,
        api_key,
        api_base,
        model,
        max_tokens,
        temperature,
        port,
        content_path: get("PORTFOLIO_CONTENT").map(PathBuf::from),
        email,
    })
}

/// Normalize the upstream API root.
///
/// The console/root-host rewrite is provider-specific special-casing
/// carried over from the original deployment; it does not generalize to
/// other providers (see DESIGN.md).
pub fn normalize_api_base(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return DEFAULT_API_BASE.to_string();
    };

    let trimmed = raw.trim_end_matches('/');
    if trimmed.is_empty()
        || trimmed == "https://api.groq.com"
        || trimmed.contains("console.groq.com")
    {
        return DEFAULT_API_BASE.to_string();
    }
    trimmed.to_string()
}

fn parse_or<T: std::str::FromStr>(
    name: &'static str,
    raw: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match raw {
        Some(raw) => raw
            .parse::<T>()
            .map_err(|_| ConfigError::InvalidValue { name, value: raw }),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_live_mode_requires_api_key() {
        let result = load(env(&[]));
        assert!(matches!(result, Err(ConfigError::MissingApiKey)));
    }

    #[test]
    fn test_scripted_mode_runs_without_api_key() {
        let config = load(env(&[("CHAT_MODE", "scripted")])).unwrap();
        assert_eq!(config.chat_mode, ChatMode::Scripted);
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_defaults() {
        let config = load(env(&[("GROQ_API_KEY", "gsk-test")])).unwrap();
        assert_eq!(config.api_base, DEFAULT_API_BASE);
        assert_eq!(config.model, "openai/gpt-oss-120b");
        assert_eq!(config.port, 8083);
        assert_eq!(config.max_tokens, 512);
        assert!((config.temperature - 0.7).abs() < f64::EPSILON);
        assert!(config.email.is_none());
    }

    #[test]
    fn test_empty_value_treated_as_unset() {
        let result = load(env(&[("GROQ_API_KEY", "")]));
        assert!(matches!(result, Err(ConfigError::MissingApiKey)));
    }

    #[test]
    fn test_invalid_port_rejected() {
        let result = load(env(&[("GROQ_API_KEY", "gsk-test"), ("PORT", "eighty")]));
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { name: "PORT", .. })
        ));
    }

    #[test]
    fn test_email_config_requires_both_credentials() {
        let config = load(env(&[
            ("GROQ_API_KEY", "gsk-test"),
            ("EMAIL_USER", "mailer@example.com"),
        ]))
        .unwrap();
        assert!(config.email.is_none());
    }

    #[test]
    fn test_email_config_complete() {
        let config = load(env(&[
            ("GROQ_API_KEY", "gsk-test"),
            ("EMAIL_HOST", "smtp.example.com"),
            ("EMAIL_PORT", "465"),
            ("EMAIL_USER", "mailer@example.com"),
            ("EMAIL_PASS", "hunter2"),
            ("EMAIL_RECEIVER", "owner@example.com"),
        ]))
        .unwrap();

        let email = config.email.unwrap();
        assert_eq!(email.host, "smtp.example.com");
        assert_eq!(email.port, 465);
        assert!(email.implicit_tls());
        assert_eq!(email.receiver, "owner@example.com");
    }

    #[test]
    fn test_email_receiver_defaults_to_user() {
        let config = load(env(&[
            ("GROQ_API_KEY", "gsk-test"),
            ("EMAIL_USER", "mailer@example.com"),
            ("EMAIL_PASS", "hunter2"),
        ]))
        .unwrap();
        assert_eq!(config.email.unwrap().receiver, "mailer@example.com");
    }

    #[test]
    fn test_normalize_bare_host_rewritten() {
        assert_eq!(
            normalize_api_base(Some("https://api.groq.com")),
            DEFAULT_API_BASE
        );
        assert_eq!(
            normalize_api_base(Some("https://console.groq.com/keys")),
            DEFAULT_API_BASE
        );
    }

    #[test]
    fn test_normalize_trims_trailing_slash() {
        assert_eq!(
            normalize_api_base(Some("https://proxy.example.com/v1/")),
            "https://proxy.example.com/v1"
        );
    }

    #[test]
    fn test_normalize_keeps_other_providers() {
        assert_eq!(
            normalize_api_base(Some("https://api.openai.com/v1")),
            "https://api.openai.com/v1"
        );
    }
}
