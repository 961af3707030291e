//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.

use serde::{Deserialize, Serialize};

use crate::store::SpendingRow;

// ============================================
// AUTH DTOs
// ============================================

/// Register/login request body
#[derive(Debug, Deserialize)]
pub struct Credentials {
    /// Account name, unique per user
    pub username: String,
    /// Plaintext password; hashed before it reaches the store
    pub password: String,
}

/// Confirmation body for register and login
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

// ============================================
// SPENDING DTOs
// ============================================

/// One spending entry as served to the client
#[derive(Debug, Serialize)]
pub struct SpendingItem {
    pub category: String,
    pub amount: f64,
}

impl From<SpendingRow> for SpendingItem {
    fn from(row: SpendingRow) -> Self {
        Self {
            category: row.category,
            amount: row.amount,
        }
    }
}

// ============================================
// SUMMARY DTOs
// ============================================

/// Generated AI summary
#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub summary: String,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Full health status
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// "healthy" or "degraded"
    pub status: String,
    /// Store reachability: "ok" or "error"
    pub store: String,
    /// Whether an external advisor service is configured
    pub advisor_configured: bool,
    /// Seconds since the server started
    pub uptime_seconds: u64,
    /// Crate version
    pub version: String,
    /// Registered users
    pub users: u64,
    /// Spending rows
    pub spending_rows: u64,
}
