//! Spending Advisor
//!
//! AI summary generation for the dashboard. The [`SummaryEngine`] prefers
//! an external completion service when one is configured and falls back to
//! a deterministic local digest of the spending data otherwise, so the
//! generate-summary endpoint always answers.

pub mod client;
pub mod engine;

pub use client::{AdvisorClient, AdvisorConfig, AdvisorError};
pub use engine::SummaryEngine;
