//! Portfolio content record.
//!
//! The process-lifetime content store: identity, skills, and projects
//! injected into outbound chat requests as grounding context. Loaded once
//! at startup and read-only thereafter.
//!
//! Field names serialize as camelCase so the JSON embedded in the system
//! prompt matches the shape the site's content files use.

use serde::{Deserialize, Serialize};

/// The full portfolio content record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioContent {
    pub personal_info: PersonalInfo,
    pub social_links: SocialLinks,
    pub summary: String,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub projects: Vec<Project>,
}

/// Identity and contact details of the portfolio owner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub name: String,
    pub role: String,
    pub location: String,
    pub email: String,
    pub phone: String,
    pub resume_link: String,
}

/// Social profile links.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLinks {
    pub github: String,
    pub linkedin: String,
}

/// A single skill with a self-assessed proficiency level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub name: String,
    pub level: String,
}

/// A portfolio project entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub title: String,
    pub description: String,
    pub tech_stack: Vec<String>,
    pub live_url: String,
    pub github_url: String,
}
