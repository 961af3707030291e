//! API Layer
//!
//! HTTP client for the Spendwise REST API.

pub mod client;

pub use client::*;
