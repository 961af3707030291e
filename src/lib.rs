//! # Spendwise
//!
//! Personal Finance Tracker - A full-stack Rust application for recording
//! spending and generating AI summaries of it.
//!
//! ## Features
//!
//! - **User accounts**: registration and login with salted password hashes
//! - **Spending summary**: category/amount entries served over a REST API
//! - **AI summaries**: free-text digests via an optional external service,
//!   with a deterministic local fallback
//!
//! ## Modules
//!
//! - [`store`]: SQLite-backed persistence for users and spending
//! - [`auth`]: password hashing and verification
//! - [`advisor`]: AI summary generation
//! - [`api`]: REST API server with Axum
//!
//! The matching single-page client lives in the `spendwise-ui` crate.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use spendwise::advisor::SummaryEngine;
//! use spendwise::api::{serve, ApiConfig, AppState};
//! use spendwise::store::SpendStore;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let store = Arc::new(SpendStore::open("spendwise.db".as_ref())?);
//!     store.seed_spending().await?;
//!
//!     let advisor = Arc::new(SummaryEngine::local_only());
//!     let config = ApiConfig::default();
//!
//!     let state = AppState::new(store, advisor, config.clone());
//!     serve(state, &config).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod advisor;
pub mod api;
pub mod auth;
pub mod config;
pub mod store;

// Re-export top-level types for convenience
pub use store::{SpendStore, SpendingRow, StoreError, StoreResult, StoreStats};

pub use advisor::{AdvisorClient, AdvisorError, SummaryEngine};

pub use api::{build_router, serve, ApiConfig, ApiError, AppState};

pub use config::{
    Config, ConfigError, LoggingConfig, AdvisorConfig as ConfigAdvisorConfig,
    ApiConfig as ConfigApiConfig, StoreConfig as ConfigStoreConfig,
};
