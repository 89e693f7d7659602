//! Axum router configuration with middleware.
//!
//! All routes live under `/api/`. Middleware: permissive CORS (the site
//! and the relay are served from different origins in development) and
//! request tracing.

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete API router.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/health", get(handlers::health::health))
        .route("/api/chat", post(handlers::chat::chat))
        .route("/api/send-email", post(handlers::contact::send_email))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;

    use foliogate_core::content::default_content;
    use foliogate_infra::config::DEFAULT_API_BASE;
    use foliogate_types::config::{AppConfig, ChatMode};

    /// Offline state: scripted chat backend, no email transport.
    fn scripted_state() -> AppState {
        let config = AppConfig {
            chat_mode: ChatMode::Scripted,
            api_key: None,
            api_base: DEFAULT_API_BASE.to_string(),
            model: "openai/gpt-oss-120b".to_string(),
            max_tokens: 512,
            temperature: 0.7,
            port: 0,
            content_path: None,
            email: None,
        };
        AppState::build(&config, Arc::new(default_content())).unwrap()
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = build_router(scripted_state())
            .oneshot(Request::get("/api/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["ok"], true);
        assert!(body["message"].is_string());
    }

    #[tokio::test]
    async fn test_chat_missing_message_is_400() {
        let response = build_router(scripted_state())
            .oneshot(post_json("/api/chat", "{}"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Missing `message` field in request.");
    }

    #[tokio::test]
    async fn test_chat_non_string_message_is_400() {
        let response = build_router(scripted_state())
            .oneshot(post_json("/api/chat", r#"{"message": 42}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_chat_scripted_reply() {
        let response = build_router(scripted_state())
            .oneshot(post_json(
                "/api/chat",
                r#"{"message": "tell me about the projects"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert!(body["reply"].as_str().unwrap().contains("HematoVision"));
        assert!(body["raw"].is_null());
    }

    #[tokio::test]
    async fn test_send_email_missing_field_is_400() {
        let response = build_router(scripted_state())
            .oneshot(post_json(
                "/api/send-email",
                r#"{"name": "Ada", "email": "ada@example.com"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Missing required fields.");
    }

    #[tokio::test(start_paused = true)]
    async fn test_send_email_mock_mode() {
        let response = build_router(scripted_state())
            .oneshot(post_json(
                "/api/send-email",
                r#"{"name": "Ada", "email": "ada@example.com", "message": "Hello"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert!(body["message"].as_str().unwrap().contains("mock mode"));
    }
}
