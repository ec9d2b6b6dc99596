//! Router configuration and server setup.

use axum::{
    extract::DefaultBodyLimit,
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::ApiConfig;
use crate::handlers;
use crate::state::AppState;

/// Creates the API router with all routes configured.
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config);
    let body_limit = DefaultBodyLimit::max(state.config.max_upload_bytes);

    Router::new()
        // Status
        .route("/", get(handlers::root))
        .route("/api/health", get(handlers::health))
        // Chat flows
        .route("/api/chat", post(handlers::chat))
        .route("/api/autogen_chat", post(handlers::autogen_chat))
        .route("/api/self_improve", post(handlers::self_improve))
        .route("/api/orchestrate", post(handlers::orchestrate))
        // Speech
        .route("/api/text-to-speech", post(handlers::text_to_speech))
        .route("/api/speech-to-text", post(handlers::speech_to_text))
        // Apply middleware
        .layer(body_limit)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Builds the CORS layer for the configured origins.
///
/// An explicit origin list allows credentials, which rules out wildcard
/// methods and headers; those are mirrored from the request instead.
fn cors_layer(config: &ApiConfig) -> CorsLayer {
    if config.allows_any_origin() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

/// Starts the API server.
pub async fn serve(config: ApiConfig, state: AppState) -> Result<(), std::io::Error> {
    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("API server listening on {}", addr);
    axum::serve(listener, create_router(state)).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{make_test_state, state_with, StubChat, StubSpeech};
    use axum::http::{header, StatusCode};
    use axum_test::multipart::{MultipartForm, Part};
    use axum_test::TestServer;
    use relay_adapters::AdapterError;
    use relay_orchestrator::{Intent, DEFAULT_WORKER_PROMPT};
    use serde_json::json;
    use std::sync::Arc;

    fn server(state: AppState) -> TestServer {
        TestServer::new(create_router(state)).unwrap()
    }

    #[tokio::test]
    async fn test_root_endpoint() {
        let server = server(make_test_state(Vec::<&str>::new()));

        let response = server.get("/").await;
        response.assert_status_ok();
        response.assert_json(&json!({"status": "Server is running"}));
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let server = server(make_test_state(Vec::<&str>::new()));

        let response = server.get("/api/health").await;
        response.assert_status_ok();

        let body: serde_json::Value = response.json();
        assert_eq!(body["status"], "ok");
        assert!(!body["version"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_chat_endpoint() {
        let server = server(make_test_state(["4"]));

        let response = server
            .post("/api/chat")
            .json(&json!({"text": "2+2?", "model": "gpt-4.1", "context": {}}))
            .await;

        response.assert_status_ok();
        response.assert_json(&json!({"response": "4"}));
    }

    #[tokio::test]
    async fn test_chat_upstream_error_is_200() {
        let chat = Arc::new(StubChat::from_results(vec![Err(
            AdapterError::UpstreamFailure("OpenAI API error 500: down".into()),
        )]));
        let server = server(state_with(chat, None, Arc::new(StubSpeech::working())));

        let response = server.post("/api/chat").json(&json!({"text": "hi"})).await;

        response.assert_status(StatusCode::OK);
        response.assert_json(&json!({"error": "OpenAI error: OpenAI API error 500: down"}));
    }

    #[tokio::test]
    async fn test_autogen_endpoint() {
        let server = server(make_test_state(["c1", "m1", "c2", "m2", "c3", "m3"]));

        let response = server
            .post("/api/autogen_chat")
            .json(&json!({"prompt": "Write a CLI"}))
            .await;
        response.assert_status_ok();

        let body: serde_json::Value = response.json();
        let conversation = body["conversation"].as_array().unwrap();
        assert_eq!(conversation.len(), 6);
        let senders: Vec<&str> = conversation
            .iter()
            .map(|t| t["sender"].as_str().unwrap())
            .collect();
        assert_eq!(
            senders,
            vec![
                "Coder",
                "Product_Manager",
                "Coder",
                "Product_Manager",
                "Coder",
                "Product_Manager"
            ]
        );
    }

    #[tokio::test]
    async fn test_autogen_partial_failure_returns_only_error() {
        let chat = Arc::new(StubChat::from_results(vec![
            Ok("c1".into()),
            Ok("m1".into()),
            Err(AdapterError::UpstreamFailure("timeout".into())),
        ]));
        let server = server(state_with(chat, None, Arc::new(StubSpeech::working())));

        let response = server
            .post("/api/autogen_chat")
            .json(&json!({"prompt": "Write a CLI"}))
            .await;

        response.assert_json(&json!({"error": "OpenAI error: timeout"}));
    }

    #[tokio::test]
    async fn test_self_improve_endpoint() {
        let server = server(make_test_state(["Hi", "too short", "Be warm and brief"]));

        let response = server
            .post("/api/self_improve")
            .json(&json!({"task": "improve greeting"}))
            .await;

        response.assert_status_ok();
        response.assert_json(&json!({
            "initial_prompt": DEFAULT_WORKER_PROMPT,
            "worker_result": "Hi",
            "critic_feedback": "too short",
            "new_prompt": "Be warm and brief"
        }));
    }

    #[tokio::test]
    async fn test_orchestrate_chat() {
        let chat = Arc::new(StubChat::new(["Hello there!"]));
        let server = server(state_with(
            chat,
            Some(Intent::SimpleChat),
            Arc::new(StubSpeech::working()),
        ));

        let response = server
            .post("/api/orchestrate")
            .json(&json!({"text": "Hello"}))
            .await;

        response.assert_status_ok();
        response.assert_json(&json!({"type": "chat", "data": "Hello there!"}));
    }

    #[tokio::test]
    async fn test_orchestrate_conversation() {
        let chat = Arc::new(StubChat::new(["c1", "m1", "c2", "m2", "c3", "m3"]));
        let server = server(state_with(
            chat,
            Some(Intent::AgentDialogue),
            Arc::new(StubSpeech::working()),
        ));

        let response = server
            .post("/api/orchestrate")
            .json(&json!({"text": "Build a game", "model": "gpt-4.1", "context": {}}))
            .await;

        let body: serde_json::Value = response.json();
        assert_eq!(body["type"], "conversation");
        assert_eq!(body["data"].as_array().unwrap().len(), 6);
    }

    #[tokio::test]
    async fn test_orchestrate_failure_envelope() {
        let chat = Arc::new(StubChat::from_results(vec![Err(
            AdapterError::UpstreamFailure("bad gateway".into()),
        )]));
        let server = server(state_with(
            chat,
            Some(Intent::SimpleChat),
            Arc::new(StubSpeech::working()),
        ));

        let response = server
            .post("/api/orchestrate")
            .json(&json!({"text": "Hello"}))
            .await;

        response.assert_status_ok();
        response.assert_json(&json!({"type": "error", "data": "OpenAI error: bad gateway"}));
    }

    #[tokio::test]
    async fn test_text_to_speech_streams_audio() {
        let server = server(make_test_state(Vec::<&str>::new()));

        let response = server
            .post("/api/text-to-speech")
            .json(&json!({"text": "Hello"}))
            .await;

        response.assert_status_ok();
        assert_eq!(response.header("content-type"), "audio/mpeg");
        assert_eq!(response.as_bytes().as_ref(), b"ID3-audio");
    }

    #[tokio::test]
    async fn test_text_to_speech_failure() {
        let server = server(state_with(
            Arc::new(StubChat::new(Vec::<&str>::new())),
            None,
            Arc::new(StubSpeech::failing()),
        ));

        let response = server
            .post("/api/text-to-speech")
            .json(&json!({"text": "Hello"}))
            .await;

        response.assert_status_ok();
        response.assert_json(&json!({"error": "Failed to generate speech."}));
    }

    #[tokio::test]
    async fn test_speech_to_text() {
        let server = server(make_test_state(Vec::<&str>::new()));

        let form = MultipartForm::new().add_part(
            "audio_file",
            Part::bytes(b"fake-webm".to_vec())
                .file_name("clip.webm")
                .mime_type("audio/webm"),
        );
        let response = server.post("/api/speech-to-text").multipart(form).await;

        response.assert_status_ok();
        response.assert_json(&json!({"text": "hello from audio"}));
    }

    #[tokio::test]
    async fn test_speech_to_text_without_file() {
        let server = server(make_test_state(Vec::<&str>::new()));

        let form = MultipartForm::new().add_text("note", "no audio here");
        let response = server.post("/api/speech-to-text").multipart(form).await;

        response.assert_status_ok();
        response.assert_json(&json!({"error": "No audio file was uploaded."}));
    }

    #[tokio::test]
    async fn test_cors_headers() {
        let server = server(make_test_state(Vec::<&str>::new()));

        let response = server
            .get("/")
            .add_header(
                header::ORIGIN,
                HeaderValue::from_static("http://localhost:5173"),
            )
            .await;

        assert_eq!(
            response.header("access-control-allow-origin"),
            "http://localhost:5173"
        );
    }

    #[tokio::test]
    async fn test_cors_rejects_unknown_origin() {
        let server = server(make_test_state(Vec::<&str>::new()));

        let response = server
            .get("/")
            .add_header(
                header::ORIGIN,
                HeaderValue::from_static("https://evil.example"),
            )
            .await;

        assert!(!response
            .headers()
            .contains_key("access-control-allow-origin"));
    }
}
