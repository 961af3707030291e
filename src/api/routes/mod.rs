//! API Route Handlers
//!
//! One module per resource.

pub mod auth;
pub mod health;
pub mod spending;
pub mod summary;
