//! Scripted FAQ chat backend.
//!
//! A keyword-matched responder over the content store, selectable with
//! `CHAT_MODE=scripted`. Runs entirely offline so the widget stays usable
//! without upstream credentials. Same `ChatBackend` seam as the live
//! relay, not a separate path at the HTTP layer.

use std::sync::Arc;

use foliogate_types::chat::{ChatReply, CompletionPayload, TurnRole};
use foliogate_types::content::PortfolioContent;
use foliogate_types::error::RelayError;

use crate::chat::backend::{ChatBackend, ChatOutcome};

/// Offline FAQ backend answering from the portfolio content.
pub struct ScriptedFaqBackend {
    content: Arc<PortfolioContent>,
}

impl ScriptedFaqBackend {
    pub fn new(content: Arc<PortfolioContent>) -> Self {
        Self { content }
    }

    fn answer(&self, message: &str) -> String {
        let content = &self.content;
        let name = &content.personal_info.name;
        let lower = message.to_lowercase();

        if contains_any(&lower, &["hello", "hi ", "hey"]) || lower.trim() == "hi" {
            return format!(
                "Hi! I'm {name}'s assistant. Ask me about skills, projects, \
                 background, or how to get in touch."
            );
        }

        if contains_any(&lower, &["skill", "stack", "technolog", "tool"]) {
            let skills = content
                .skills
                .iter()
                .map(|s| format!("{} ({})", s.name, s.level))
                .collect::<Vec<_>>()
                .join(", ");
            return format!("{name}'s core skills: {skills}.");
        }

        if contains_any(&lower, &["project", "built", "portfolio", "work"]) {
            let projects = content
                .projects
                .iter()
                .map(|p| format!("{}: {}", p.title, p.description))
                .collect::<Vec<_>>()
                .join("\n");
            return format!("Here are {name}'s highlighted projects:\n{projects}");
        }

        if contains_any(&lower, &["contact", "email", "phone", "reach", "hire"]) {
            return format!(
                "You can reach {name} at {} or {}.",
                content.personal_info.email, content.personal_info.phone
            );
        }

        if contains_any(&lower, &["experience", "background", "about", "who"]) {
            return format!("{} {}", name, content.summary);
        }

        if contains_any(&lower, &["github", "linkedin", "social"]) {
            return format!(
                "GitHub: {} / LinkedIn: {}",
                content.social_links.github, content.social_links.linkedin
            );
        }

        format!(
            "I can tell you about {name}'s skills, projects, background, or \
             contact details. Which would you like?"
        )
    }
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

impl ChatBackend for ScriptedFaqBackend {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn relay(&self, payload: CompletionPayload) -> Result<ChatOutcome, RelayError> {
        // The new user turn is always last in the assembled payload.
        let message = payload
            .messages
            .iter()
            .rev()
            .find(|turn| turn.role == TurnRole::User)
            .map(|turn| turn.content.as_str())
            .unwrap_or_default();

        Ok(ChatOutcome::Complete(ChatReply {
            reply: self.answer(message),
            raw: serde_json::Value::Null,
        }))
    }
}
