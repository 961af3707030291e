//! Summary Routes
//!
//! AI summary generation for the dashboard.
//!
//! - POST /api/generate-summary

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::SummaryResponse;
use crate::api::error::ApiResult;
use crate::api::state::AppState;

/// POST /api/generate-summary
///
/// Generates a free-text summary of the stored spending. Uses the external
/// advisor service when configured; the local digest otherwise, so this
/// endpoint always answers 200 unless the store itself fails.
pub async fn generate_summary(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<SummaryResponse>> {
    let rows = state.store.list_spending().await?;
    let summary = state.advisor.generate(&rows).await;

    tracing::info!(rows = rows.len(), "generated spending summary");

    Ok(Json(SummaryResponse { summary }))
}
