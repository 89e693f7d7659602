//! Portfolio content store: built-in default, optional TOML override,
//! and system-prompt synthesis.
//!
//! The content record is the only process-lifetime entity in the service.
//! It is loaded once at startup, wrapped in an `Arc`, and never mutated;
//! the system prompt is derived fresh from it on every request.

use std::path::Path;

use foliogate_types::content::{
    PersonalInfo, PortfolioContent, Project, Skill, SocialLinks,
};

/// Built-in portfolio content, used when no override file is configured.
pub fn default_content() -> PortfolioContent {
    PortfolioContent {
        personal_info: PersonalInfo {
            name: "Arjun Mehta".to_string(),
            role: "AI/ML Engineer & Full-Stack Developer".to_string(),
            location: "Pune, Maharashtra, India".to_string(),
            email: "arjun.mehta.dev@example.com".to_string(),
            phone: "+91 98765 43210".to_string(),
            resume_link: "/assets/ArjunMehta_Resume.pdf".to_string(),
        },
        social_links: SocialLinks {
            github: "https://github.com/arjunmehta-dev".to_string(),
            linkedin: "https://www.linkedin.com/in/arjun-mehta-dev/".to_string(),
        },
        summary: "AI & Machine Learning engineer building data-driven \
                  applications that bridge research and production. Focused \
                  on computer vision, NLP, and LLM-based systems with clean \
                  architecture and efficient model deployment."
            .to_string(),
        skills: vec![
            skill("Machine Learning", "92%"),
            skill("Deep Learning (Keras/TensorFlow)", "90%"),
            skill("Computer Vision", "88%"),
            skill("NLP / Transformers", "86%"),
            skill("Python / FastAPI / Flask", "90%"),
            skill("SQL / MongoDB", "84%"),
            skill("Model Deployment / Streamlit", "83%"),
            skill("Git / GitHub", "91%"),
        ],
        projects: vec![
            Project {
                title: "Medical Report Analyzer".to_string(),
                description: "Multi-agent LLM pipeline with retrieval \
                              augmentation that analyzes medical reports and \
                              supports context-aware Q&A."
                    .to_string(),
                tech_stack: vec![
                    "Python".to_string(),
                    "RAG".to_string(),
                    "LangChain".to_string(),
                    "FAISS".to_string(),
                    "Streamlit".to_string(),
                ],
                live_url: "https://medical-report-analyzer.example.com/".to_string(),
                github_url: "https://github.com/arjunmehta-dev/medical-report-analyzer"
                    .to_string(),
            },
            Project {
                title: "TeleCare Platform".to_string(),
                description: "End-to-end tele-medicine platform with video \
                              consults, secure messaging, triage scheduling, \
                              RBAC, and audit logging."
                    .to_string(),
                tech_stack: vec![
                    "React".to_string(),
                    "FastAPI".to_string(),
                    "WebRTC".to_string(),
                    "PostgreSQL".to_string(),
                ],
                live_url: String::new(),
                github_url: "https://github.com/arjunmehta-dev/telecare".to_string(),
            },
            Project {
                title: "HematoVision".to_string(),
                description: "Transfer-learning pipeline (MobileNetV2) for \
                              blood-cell classification, served via a Flask \
                              inference API."
                    .to_string(),
                tech_stack: vec![
                    "TensorFlow".to_string(),
                    "Keras".to_string(),
                    "Flask".to_string(),
                ],
                live_url: String::new(),
                github_url: "https://github.com/arjunmehta-dev/hematovision".to_string(),
            },
        ],
    }
}

fn skill(name: &str, level: &str) -> Skill {
    Skill {
        name: name.to_string(),
        level: level.to_string(),
    }
}

/// Load portfolio content from a TOML file, falling back to the built-in
/// default.
///
/// - `None`, or a path that does not exist: built-in default.
/// - A file that fails to read or parse: logs a warning and returns the
///   default.
pub async fn load_content(path: Option<&Path>) -> PortfolioContent {
    let Some(path) = path else {
        return default_content();
    };

    let raw = match tokio::fs::read_to_string(path).await {
        Ok(raw) => raw,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("no content file at {}, using built-in content", path.display());
            return default_content();
        }
        Err(err) => {
            tracing::warn!("failed to read {}: {err}, using built-in content", path.display());
            return default_content();
        }
    };

    match toml::from_str::<PortfolioContent>(&raw) {
        Ok(content) => content,
        Err(err) => {
            tracing::warn!("failed to parse {}: {err}, using built-in content", path.display());
            default_content()
        }
    }
}

/// Synthesize the grounding system turn for a chat request.
///
/// Pure function of the content record: identical content yields a
/// byte-identical prompt, so repeated requests see the same system turn.
pub fn system_prompt(content: &PortfolioContent) -> String {
    let name = &content.personal_info.name;
    let context = serde_json::to_string_pretty(content)
        .unwrap_or_else(|_| "{}".to_string());

    format!(
        "You are an AI assistant for the portfolio of {name}.\n\
         Your goal is to answer questions about {name}'s skills, projects, \
         and background using the provided context.\n\
         \n\
         Context:\n\
         {context}\n\
         \n\
         Guidelines:\n\
         - Be friendly, professional, and concise.\n\
         - Answer as if you are a helpful assistant representing {name}.\n\
         - If asked about contact info, provide the email and phone from the context.\n\
         - If asked about projects, mention the specific ones in the context.\n\
         - Do not make up facts not present in the context.\n"
    )
}
