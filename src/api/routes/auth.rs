//! Auth Routes
//!
//! User registration and login.
//!
//! - POST /api/register - Create a user
//! - POST /api/login - Verify credentials

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::api::dto::{Credentials, MessageResponse};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::auth;

/// Longest accepted username or password
const MAX_CREDENTIAL_LEN: usize = 128;

/// POST /api/register
///
/// Creates a user with a salted password hash. 409 when the username is
/// already registered.
pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(req): Json<Credentials>,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    validate_credentials(&req)?;

    let password_hash = auth::hash_password(&req.password);
    state.store.create_user(&req.username, &password_hash).await?;

    tracing::info!(username = %req.username, "user registered");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("User registered successfully")),
    ))
}

/// POST /api/login
///
/// Verifies credentials against the stored hash. An unknown username and a
/// wrong password both answer 401, so the response does not leak which
/// usernames exist.
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<Credentials>,
) -> ApiResult<Json<MessageResponse>> {
    validate_credentials(&req)?;

    let verified = match state.store.password_hash(&req.username).await? {
        Some(stored) => auth::verify_password(&stored, &req.password),
        None => false,
    };

    if !verified {
        return Err(ApiError::Unauthorized);
    }

    tracing::info!(username = %req.username, "user logged in");

    Ok(Json(MessageResponse::new("Login successful")))
}

/// Reject empty or oversized credentials
fn validate_credentials(req: &Credentials) -> ApiResult<()> {
    if req.username.trim().is_empty() {
        return Err(ApiError::Validation("username cannot be empty".to_string()));
    }
    if req.password.is_empty() {
        return Err(ApiError::Validation("password cannot be empty".to_string()));
    }
    if req.username.len() > MAX_CREDENTIAL_LEN || req.password.len() > MAX_CREDENTIAL_LEN {
        return Err(ApiError::Validation(format!(
            "username and password must be at most {} bytes",
            MAX_CREDENTIAL_LEN
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creds(username: &str, password: &str) -> Credentials {
        Credentials {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_valid_credentials_accepted() {
        assert!(validate_credentials(&creds("alice", "hunter2")).is_ok());
    }

    #[test]
    fn test_empty_username_rejected() {
        assert!(validate_credentials(&creds("", "hunter2")).is_err());
        assert!(validate_credentials(&creds("   ", "hunter2")).is_err());
    }

    #[test]
    fn test_empty_password_rejected() {
        assert!(validate_credentials(&creds("alice", "")).is_err());
    }

    #[test]
    fn test_oversized_credentials_rejected() {
        let long = "x".repeat(MAX_CREDENTIAL_LEN + 1);
        assert!(validate_credentials(&creds(&long, "pw")).is_err());
        assert!(validate_credentials(&creds("alice", &long)).is_err());
    }
}
