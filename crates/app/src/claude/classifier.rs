//! Expense classification backed by Claude.

use tracing::debug;

use crate::categorize::{Classifier, ClassifierError};

use super::client::ClaudeClient;
use super::types::Message;

const SYSTEM_PROMPT: &str = "You categorize expenses for a small business's books. \
Reply with one short expense category of one to three words in Title Case, for example \
Software, Travel, Meals, Office Expenses, Business Development, Utilities, Rent, \
Marketing, or Professional Services. Reply with the category name only.";

/// Labels are a few words; this leaves headroom without paying for prose.
const MAX_CATEGORY_TOKENS: u32 = 16;

/// Suggests expense categories by asking Claude.
#[derive(Clone)]
pub struct ClaudeClassifier {
    client: ClaudeClient,
}

impl ClaudeClassifier {
    /// Wrap a configured client.
    #[must_use]
    pub const fn new(client: ClaudeClient) -> Self {
        Self { client }
    }
}

impl Classifier for ClaudeClassifier {
    async fn classify(&self, description: &str) -> Result<String, ClassifierError> {
        let response = self
            .client
            .chat(
                vec![Message::user(description)],
                Some(SYSTEM_PROMPT.to_string()),
                MAX_CATEGORY_TOKENS,
            )
            .await?;

        debug!(
            response_id = %response.id,
            output_tokens = response.usage.output_tokens,
            "category response received"
        );

        response
            .first_text()
            .map(clean_label)
            .filter(|label| !label.is_empty())
            .ok_or(ClassifierError::EmptyLabel)
    }
}

/// Reduce a model reply to a bare label: first line, no quotes, no trailing period.
fn clean_label(reply: &str) -> String {
    reply
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or_default()
        .trim_end_matches('.')
        .trim_matches(|c: char| matches!(c, '"' | '\'' | '`' | '*'))
        .trim_end_matches('.')
        .trim()
        .to_string()
}
