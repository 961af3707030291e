//! Spendwise REST API
//!
//! HTTP API layer for Spendwise, built with Axum.
//!
//! # Endpoints
//!
//! ## Auth
//! - `POST /api/register` - Create a user
//! - `POST /api/login` - Verify credentials
//!
//! ## Spending
//! - `GET /api/spending-summary` - All spending entries
//!
//! ## Summary
//! - `POST /api/generate-summary` - Generate an AI summary of the spending
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! # Example
//!
//! ```rust,ignore
//! use spendwise::advisor::SummaryEngine;
//! use spendwise::api::{serve, ApiConfig, AppState};
//! use spendwise::store::SpendStore;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let store = Arc::new(SpendStore::open("spendwise.db".as_ref())?);
//!     let advisor = Arc::new(SummaryEngine::local_only());
//!     let config = ApiConfig::default();
//!
//!     let state = AppState::new(store, advisor, config.clone());
//!     serve(state, &config).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::{ApiConfig, AppState};

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Build the API router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        // Auth routes
        .route("/register", post(routes::auth::register))
        .route("/login", post(routes::auth::login))
        // Spending routes
        .route("/spending-summary", get(routes::spending::spending_summary))
        // Summary routes
        .route("/generate-summary", post(routes::summary::generate_summary));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    // Create shared state
    let shared_state = Arc::new(state);

    Router::new()
        .nest("/api", api_routes)
        .nest("/health", health_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()) // Configure properly in production
        .with_state(shared_state)
}

/// Start the API server
pub async fn serve(state: AppState, config: &ApiConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Spendwise API listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Spendwise API shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisor::SummaryEngine;
    use crate::store::SpendStore;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::util::ServiceExt;

    async fn create_test_app() -> Router {
        let store = Arc::new(SpendStore::open_in_memory().unwrap());
        store.seed_spending().await.unwrap();

        let advisor = Arc::new(SummaryEngine::local_only());
        let state = AppState::new(store, advisor, ApiConfig::default());

        build_router(state)
    }

    fn json_post(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("Content-Type", "application/json")
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
    async fn test_register_created() {
        let app = create_test_app().await;

        let response = app
            .oneshot(json_post(
                "/api/register",
                r#"{"username": "alice", "password": "hunter2"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);

        let body = body_json(response).await;
        assert_eq!(body["message"], "User registered successfully");
    }

    #[tokio::test]
    async fn test_register_duplicate_conflict() {
        let app = create_test_app().await;

        let creds = r#"{"username": "alice", "password": "hunter2"}"#;
        let response = app
            .clone()
            .oneshot(json_post("/api/register", creds))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let response = app.oneshot(json_post("/api/register", creds)).await.unwrap();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let body = body_json(response).await;
        assert_eq!(body["code"], "USER_EXISTS");
    }

    #[tokio::test]
    async fn test_register_then_login() {
        let app = create_test_app().await;

        let creds = r#"{"username": "alice", "password": "hunter2"}"#;
        let response = app
            .clone()
            .oneshot(json_post("/api/register", creds))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let response = app.oneshot(json_post("/api/login", creds)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["message"], "Login successful");
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let app = create_test_app().await;

        let response = app
            .clone()
            .oneshot(json_post(
                "/api/register",
                r#"{"username": "alice", "password": "hunter2"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let response = app
            .oneshot(json_post(
                "/api/login",
                r#"{"username": "alice", "password": "wrong"}"#,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_login_unknown_user() {
        let app = create_test_app().await;

        let response = app
            .oneshot(json_post(
                "/api/login",
                r#"{"username": "nobody", "password": "hunter2"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_register_invalid_json() {
        let app = create_test_app().await;

        let response = app
            .oneshot(json_post("/api/register", "not json"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_register_empty_username() {
        let app = create_test_app().await;

        let response = app
            .oneshot(json_post(
                "/api/register",
                r#"{"username": "", "password": "hunter2"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_spending_summary_returns_seed_rows() {
        let app = create_test_app().await;

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/spending-summary")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        let items = body.as_array().unwrap();
        assert_eq!(items.len(), 4);
        assert_eq!(items[0]["category"], "Food");
        assert_eq!(items[0]["amount"], 150.50);
    }

    #[tokio::test]
    async fn test_generate_summary() {
        let app = create_test_app().await;

        let response = app
            .oneshot(json_post("/api/generate-summary", ""))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        let summary = body["summary"].as_str().unwrap();
        // Entertainment is the largest seed category
        assert!(summary.contains("Entertainment"));
        assert!(summary.contains("$545.50"));
    }

    #[tokio::test]
    async fn test_health_live() {
        let app = create_test_app().await;

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health/live")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_ready() {
        let app = create_test_app().await;

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health/ready")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_full() {
        let app = create_test_app().await;

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["spending_rows"], 4);
        assert_eq!(body["advisor_configured"], false);
    }
}
