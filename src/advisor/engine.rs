//! Summary Engine
//!
//! Produces the AI summary text for the dashboard. When a completion
//! service is configured the engine sends it a digest of the spending data;
//! on any failure, or when no service is configured, it falls back to a
//! locally composed summary so the endpoint always has an answer.

use std::sync::Arc;

use crate::advisor::client::AdvisorClient;
use crate::store::SpendingRow;

/// Generates summary text from spending entries
pub struct SummaryEngine {
    client: Option<Arc<AdvisorClient>>,
}

impl SummaryEngine {
    /// Engine backed by an external completion service
    pub fn with_client(client: Arc<AdvisorClient>) -> Self {
        Self {
            client: Some(client),
        }
    }

    /// Engine that only uses the local digest
    pub fn local_only() -> Self {
        Self { client: None }
    }

    /// Whether an external service is configured
    pub fn has_client(&self) -> bool {
        self.client.is_some()
    }

    /// Generate a summary for the given spending entries
    pub async fn generate(&self, items: &[SpendingRow]) -> String {
        if let Some(client) = &self.client {
            match client.complete(&build_prompt(items)).await {
                Ok(text) if !text.trim().is_empty() => return text,
                Ok(_) => {
                    tracing::warn!("Advisor returned an empty completion, using local digest")
                }
                Err(e) => {
                    tracing::warn!("Advisor unavailable ({}), using local digest", e)
                }
            }
        }

        local_digest(items)
    }
}

/// Prompt sent to the completion service
fn build_prompt(items: &[SpendingRow]) -> String {
    let mut prompt = String::from(
        "Summarize this personal spending in two encouraging sentences:\n",
    );
    for item in items {
        prompt.push_str(&format!("- {}: ${:.2}\n", item.category, item.amount));
    }
    prompt
}

/// Deterministic summary composed from the spending entries
///
/// Names the total, the largest category and its share of the total.
pub fn local_digest(items: &[SpendingRow]) -> String {
    let Some(top) = items.iter().max_by(|a, b| a.amount.total_cmp(&b.amount)) else {
        return "No spending recorded yet. Log a few expenses and ask again for a summary."
            .to_string();
    };

    let total: f64 = items.iter().map(|i| i.amount).sum();
    let share = if total > 0.0 {
        top.amount / total * 100.0
    } else {
        0.0
    };

    format!(
        "You spent ${:.2} across {} categories. {} was your largest expense at ${:.2} \
         ({:.0}% of the total). Based on your spending, you are doing great - keep it up!",
        total,
        items.len(),
        top.category,
        top.amount,
        share,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_rows() -> Vec<SpendingRow> {
        vec![
            SpendingRow {
                category: "Food".to_string(),
                amount: 150.50,
            },
            SpendingRow {
                category: "Transport".to_string(),
                amount: 75.00,
            },
            SpendingRow {
                category: "Entertainment".to_string(),
                amount: 200.00,
            },
            SpendingRow {
                category: "Utilities".to_string(),
                amount: 120.00,
            },
        ]
    }

    #[test]
    fn test_digest_names_total_and_top_category() {
        let digest = local_digest(&sample_rows());

        assert!(digest.contains("$545.50"));
        assert!(digest.contains("Entertainment"));
        assert!(digest.contains("$200.00"));
        assert!(digest.contains("4 categories"));
    }

    #[test]
    fn test_digest_share_is_rounded_percentage() {
        let digest = local_digest(&sample_rows());
        // 200 / 545.5 = 36.66..%
        assert!(digest.contains("(37% of the total)"));
    }

    #[test]
    fn test_digest_empty_spending() {
        let digest = local_digest(&[]);
        assert!(digest.contains("No spending recorded yet"));
    }

    #[test]
    fn test_digest_is_deterministic() {
        assert_eq!(local_digest(&sample_rows()), local_digest(&sample_rows()));
    }

    #[tokio::test]
    async fn test_engine_without_client_uses_digest() {
        let engine = SummaryEngine::local_only();
        let summary = engine.generate(&sample_rows()).await;

        assert!(!engine.has_client());
        assert_eq!(summary, local_digest(&sample_rows()));
    }

    #[test]
    fn test_prompt_lists_every_category() {
        let prompt = build_prompt(&sample_rows());
        for row in sample_rows() {
            assert!(prompt.contains(&row.category));
        }
    }
}
