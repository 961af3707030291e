//! Spending Routes
//!
//! - GET /api/spending-summary - All spending entries

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::SpendingItem;
use crate::api::error::ApiResult;
use crate::api::state::AppState;

/// GET /api/spending-summary
///
/// Returns every spending entry as a JSON array of category/amount pairs.
pub async fn spending_summary(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<SpendingItem>>> {
    let rows = state.store.list_spending().await?;

    tracing::debug!(rows = rows.len(), "served spending summary");

    Ok(Json(rows.into_iter().map(SpendingItem::from).collect()))
}
