//! HTTP API Client
//!
//! Functions for communicating with the Spendwise REST API.

use gloo_net::http::Request;

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8080/api";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item("spendwise_api_url") {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

// ============ Request/Response Types ============

/// Credentials sent to register and login
#[derive(Debug, Clone, serde::Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// One spending entry from the API
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct SpendingItem {
    pub category: String,
    pub amount: f64,
}

#[derive(Debug, serde::Deserialize)]
pub struct SummaryResponse {
    pub summary: String,
}

#[derive(Debug, serde::Deserialize)]
pub struct ApiError {
    pub error: String,
    #[serde(default)]
    pub code: Option<String>,
}

// ============ API Functions ============

/// Register a new account
pub async fn register(credentials: &Credentials) -> Result<(), String> {
    let api_base = get_api_base();

    let response = Request::post(&format!("{}/register", api_base))
        .json(credentials)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await
            .unwrap_or(ApiError { error: "Unknown error".to_string(), code: None });
        return Err(error.error);
    }

    Ok(())
}

/// Log in with existing credentials
pub async fn login(credentials: &Credentials) -> Result<(), String> {
    let api_base = get_api_base();

    let response = Request::post(&format!("{}/login", api_base))
        .json(credentials)
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await
            .unwrap_or(ApiError { error: "Unknown error".to_string(), code: None });
        return Err(error.error);
    }

    Ok(())
}

/// Fetch the spending summary
pub async fn fetch_spending_summary() -> Result<Vec<SpendingItem>, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/spending-summary", api_base))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await
            .unwrap_or(ApiError { error: "Unknown error".to_string(), code: None });
        return Err(error.error);
    }

    response.json().await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Request a generated AI summary of the spending
pub async fn generate_summary() -> Result<String, String> {
    let api_base = get_api_base();

    let response = Request::post(&format!("{}/generate-summary", api_base))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await
            .unwrap_or(ApiError { error: "Unable to generate summary".to_string(), code: None });
        return Err(error.error);
    }

    let summary_response: SummaryResponse = response.json().await
        .map_err(|e| format!("Parse error: {}", e))?;

    Ok(summary_response.summary)
}
