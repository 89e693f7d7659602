//! Application state wiring services to their concrete implementations.
//!
//! Services are generic over their seam traits; `AppState` pins them to
//! the configured backend (live upstream relay or scripted FAQ) and the
//! SMTP mailer when credentials exist.

use std::sync::Arc;

use foliogate_core::chat::{BoxChatBackend, ChatService, ScriptedFaqBackend};
use foliogate_core::chat::service::ChatParams;
use foliogate_core::contact::ContactService;
use foliogate_infra::email::SmtpMailer;
use foliogate_infra::upstream::UpstreamRelay;
use foliogate_types::config::{AppConfig, ChatMode};
use foliogate_types::content::PortfolioContent;
use foliogate_types::error::ConfigError;

pub type ConcreteChatService = ChatService<BoxChatBackend>;
pub type ConcreteContactService = ContactService<SmtpMailer>;

/// Shared application state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub chat: Arc<ConcreteChatService>,
    pub contact: Arc<ConcreteContactService>,
}

impl AppState {
    /// Wire services from configuration and the loaded content store.
    pub fn build(config: &AppConfig, content: Arc<PortfolioContent>) -> anyhow::Result<Self> {
        let backend = match config.chat_mode {
            ChatMode::Live => {
                let api_key = config
                    .api_key
                    .clone()
                    .ok_or(ConfigError::MissingApiKey)?;
                BoxChatBackend::new(UpstreamRelay::new(&config.api_base, api_key)?)
            }
            ChatMode::Scripted => BoxChatBackend::new(ScriptedFaqBackend::new(content.clone())),
        };

        let chat = Arc::new(ChatService::new(
            backend,
            content,
            ChatParams {
                model: config.model.clone(),
                max_tokens: config.max_tokens,
                temperature: config.temperature,
            },
        ));

        let mailer = match &config.email {
            Some(email) => Some(SmtpMailer::new(email)?),
            None => None,
        };
        let contact = Arc::new(ContactService::new(mailer));

        Ok(Self { chat, contact })
    }
}
