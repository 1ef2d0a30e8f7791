mod config;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};
use folio_core::form::validate;
use folio_types::{ContactPayload, ContactReceipt};
use serde::Serialize;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::config::ServiceConfig;

#[derive(Debug, Serialize)]
struct HealthResponse {
    service: &'static str,
    status: &'static str,
    messages_received: u64,
}

#[derive(Debug, Serialize)]
struct VersionResponse {
    service: &'static str,
    version: &'static str,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

type ApiResult<T> = Result<Json<T>, (StatusCode, Json<ErrorResponse>)>;

#[derive(Clone, Default)]
struct AppState {
    received: Arc<AtomicU64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = ServiceConfig::from_env()?;
    let app = router(AppState::default(), config.cors_layer()?);

    match &config.allowed_origin {
        Some(origin) => info!("accepting cross-origin requests from {}", origin),
        None => info!("accepting cross-origin requests from any origin"),
    }
    info!("contact-service listening on {}", config.addr);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/version", get(version))
        .route("/api/contact", post(contact))
        .layer(cors)
        .with_state(state)
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        service: "contact-service",
        status: "ok",
        messages_received: state.received.load(Ordering::Relaxed),
    })
}

async fn version() -> Json<VersionResponse> {
    Json(VersionResponse {
        service: "contact-service",
        version: env!("CARGO_PKG_VERSION"),
    })
}

async fn contact(
    State(state): State<AppState>,
    Json(request): Json<ContactPayload>,
) -> ApiResult<ContactReceipt> {
    let payload = validate(&request).map_err(|err| {
        warn!("rejected contact message: {}", err);
        bad_request(&err.to_string())
    })?;

    state.received.fetch_add(1, Ordering::Relaxed);
    info!(
        name = %payload.name,
        email = %payload.email,
        subject = %payload.subject,
        length = payload.message.chars().count(),
        "contact message received"
    );

    Ok(Json(ContactReceipt { accepted: true }))
}

fn bad_request(message: &str) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: message.to_owned(),
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, header};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn app(state: AppState) -> Router {
        router(state, CorsLayer::permissive())
    }

    async fn post_contact(state: AppState, body: Value) -> anyhow::Result<(StatusCode, Value)> {
        let response = app(state)
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/contact")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))?,
            )
            .await?;

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await?;
        Ok((status, serde_json::from_slice(&bytes)?))
    }

    fn message() -> Value {
        json!({
            "name": "Ada",
            "email": "ada@example.com",
            "subject": "Hello",
            "message": "Let's build something."
        })
    }

    #[tokio::test]
    async fn accepts_valid_message() -> anyhow::Result<()> {
        let state = AppState::default();
        let (status, body) = post_contact(state.clone(), message()).await?;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "accepted": true }));
        assert_eq!(state.received.load(Ordering::Relaxed), 1);
        Ok(())
    }

    #[tokio::test]
    async fn rejects_blank_field() -> anyhow::Result<()> {
        let mut body = message();
        body["subject"] = json!("   ");

        let state = AppState::default();
        let (status, body) = post_contact(state.clone(), body).await?;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Please fill in all fields");
        assert_eq!(state.received.load(Ordering::Relaxed), 0);
        Ok(())
    }

    #[tokio::test]
    async fn rejects_malformed_email() -> anyhow::Result<()> {
        let mut body = message();
        body["email"] = json!("ada@example");

        let (status, body) = post_contact(AppState::default(), body).await?;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Please enter a valid email address");
        Ok(())
    }

    #[tokio::test]
    async fn health_reports_received_count() -> anyhow::Result<()> {
        let state = AppState::default();
        post_contact(state.clone(), message()).await?;
        post_contact(state.clone(), message()).await?;

        let response = app(state)
            .oneshot(Request::builder().uri("/health").body(Body::empty())?)
            .await?;
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await?;
        let body: Value = serde_json::from_slice(&bytes)?;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["messages_received"], 2);
        Ok(())
    }
}
