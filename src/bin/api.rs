//! Spendwise API Server
//!
//! Run with: cargo run --bin spendwise-api
//!
//! # Configuration
//!
//! Environment variables:
//! - `SPENDWISE_HOST`: Host to bind to (default: 0.0.0.0)
//! - `SPENDWISE_PORT`: Port to listen on (default: 8080)
//! - `SPENDWISE_DB_PATH`: SQLite database path (default: spendwise.db)
//! - `SPENDWISE_SEED_DEMO_DATA`: Seed mock spending rows (default: true)
//! - `SPENDWISE_ADVISOR_URL`: Advisor service URL (optional, enables AI summaries)
//! - `RUST_LOG`: Log level (default: info)

use spendwise::advisor::{AdvisorClient, AdvisorConfig, SummaryEngine};
use spendwise::api::{serve, ApiConfig, AppState};
use spendwise::store::SpendStore;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "spendwise=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Spendwise API server v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration from environment
    let api_config = load_api_config();
    let db_path = load_db_path();
    let advisor_config = load_advisor_config();

    tracing::info!("Database: {:?}", db_path);

    // Open the store
    let store = Arc::new(SpendStore::open(&db_path)?);

    if api_config.seed_demo_data {
        let seeded = store.seed_spending().await?;
        if seeded > 0 {
            tracing::info!("Inserted {} mock spending rows", seeded);
        }
    }

    // Create the summary engine (with or without the advisor service)
    let advisor = if let Some(config) = advisor_config {
        tracing::info!("Advisor service enabled: {}", config.base_url);

        let client = Arc::new(AdvisorClient::new(config)?);

        // Check advisor availability
        match client.health_check().await {
            Ok(_) => tracing::info!("Advisor connection verified"),
            Err(e) => tracing::warn!(
                "Advisor not available: {} (summaries will use the local digest)",
                e
            ),
        }

        SummaryEngine::with_client(client)
    } else {
        tracing::info!("Advisor service disabled (set SPENDWISE_ADVISOR_URL to enable)");
        SummaryEngine::local_only()
    };

    // Run server
    tracing::info!("Starting server on {}:{}", api_config.host, api_config.port);
    let state = AppState::new(store, Arc::new(advisor), api_config.clone());
    serve(state, &api_config).await?;

    tracing::info!("Spendwise API server stopped");

    Ok(())
}

/// Load API configuration from environment
fn load_api_config() -> ApiConfig {
    let host = std::env::var("SPENDWISE_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

    let port = std::env::var("SPENDWISE_PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8080);

    let seed_demo_data = std::env::var("SPENDWISE_SEED_DEMO_DATA")
        .map(|s| s.to_lowercase() != "false" && s != "0")
        .unwrap_or(true);

    ApiConfig {
        host,
        port,
        seed_demo_data,
    }
}

/// Load the database path from environment
fn load_db_path() -> PathBuf {
    std::env::var("SPENDWISE_DB_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("spendwise.db"))
}

/// Load advisor configuration from environment
///
/// Returns None when SPENDWISE_ADVISOR_URL is not set.
fn load_advisor_config() -> Option<AdvisorConfig> {
    let base_url = std::env::var("SPENDWISE_ADVISOR_URL").ok()?;

    let request_timeout_ms = std::env::var("SPENDWISE_ADVISOR_TIMEOUT_MS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(5000);

    Some(AdvisorConfig {
        base_url,
        request_timeout_ms,
    })
}
