use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    routing::{get, post},
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use deckguard_core::{Outline, topic_from_body};
use deckguard_security::Redactor;

pub struct OutlineServer {
    pub redactor: Redactor,
}

#[derive(Clone)]
struct AppState {
    server: Arc<OutlineServer>,
}

impl OutlineServer {
    pub fn new(redactor: Redactor) -> Self {
        Self { redactor }
    }

    /// Sanitize the topic carried by a raw request body and build the outline
    pub fn outline_for_body(&self, body: &[u8]) -> Outline {
        let raw_topic = topic_from_body(body);
        let (safe_topic, redactions) = self.redactor.redact_with_report(&raw_topic);
        let redacted: usize = redactions.iter().map(|r| r.count).sum();

        info!(topic = %safe_topic, redactions = redacted, "Sanitized prompt");

        Outline::for_topic(&safe_topic)
    }

    pub async fn serve(redactor: Redactor, host: &str, port: u16) -> anyhow::Result<()> {
        let server = Arc::new(Self::new(redactor));
        let app = router(server);

        let addr = format!("{}:{}", host, port);
        let listener = TcpListener::bind(&addr).await?;

        info!("Outline server listening on {}", addr);

        axum::serve(listener, app).await?;

        Ok(())
    }
}

/// Build the HTTP router with permissive CORS
pub fn router(server: Arc<OutlineServer>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handle_info))
        .route("/health", get(handle_health))
        .route("/generate-outline", post(handle_generate_outline))
        .layer(cors)
        .with_state(AppState { server })
}

/// GET / - server info
async fn handle_info() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": "deckguard",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// GET /health
async fn handle_health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// POST /generate-outline - body is read raw so malformed JSON still gets an outline
async fn handle_generate_outline(State(state): State<AppState>, body: Bytes) -> Json<Outline> {
    info!(bytes = body.len(), "Outline request received");
    Json(state.server.outline_for_body(&body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use deckguard_security::RedactionRuleSet;

    #[test]
    fn test_outline_for_body_redacts_topic() {
        let server = OutlineServer::new(Redactor::default());

        let outline = server.outline_for_body(br#"{"topic": "my password is confidential"}"#);

        assert_eq!(
            outline.title,
            "Security-Enhanced Presentation: my [REDACTED-SEC] is [REDACTED-SEC]"
        );
        assert_eq!(
            outline.slides[0].bullets[2],
            "Topic: my [REDACTED-SEC] is [REDACTED-SEC]"
        );
    }

    #[test]
    fn test_outline_for_body_with_custom_rules() {
        let rules = RedactionRuleSet::builder()
            .rule("acme", "[CLIENT]")
            .build()
            .unwrap();
        let server = OutlineServer::new(Redactor::new(rules));

        let outline = server.outline_for_body(br#"{"topic": "ACME password"}"#);

        assert_eq!(outline.title, "Security-Enhanced Presentation: [CLIENT] password");
    }

    #[test]
    fn test_outline_for_malformed_body() {
        let server = OutlineServer::new(Redactor::default());

        let outline = server.outline_for_body(b"{{{");

        assert_eq!(
            outline.title,
            "Security-Enhanced Presentation: General Presentation"
        );
    }
}
