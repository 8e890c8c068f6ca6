//! Expense category suggestions.
//!
//! The [`Categorizer`] turns a free-text expense description into a
//! suggested category. It never fails: blank input is skipped without a
//! remote call, and any classifier failure becomes the
//! [`FALLBACK_CATEGORY`]. The suggestion is advisory and only ever lands in a
//! form field; the ledger store never calls this module.

use std::future::Future;

use thiserror::Error;
use tracing::{debug, instrument, warn};

use crate::claude::{ClaudeClassifier, ClaudeClient, ClaudeError};
use crate::config::ClaudeConfig;

/// Category used when the classifier cannot produce one.
pub const FALLBACK_CATEGORY: &str = "Uncategorized";

/// Errors from a classifier call.
#[derive(Debug, Error)]
pub enum ClassifierError {
    /// No classifier backend is configured.
    #[error("categorization is not configured")]
    NotConfigured,

    /// The remote classifier could not be reached or returned an error.
    #[error("categorization service unavailable: {0}")]
    Unavailable(#[from] ClaudeError),

    /// The classifier answered without a usable label.
    #[error("categorization service returned no category")]
    EmptyLabel,
}

impl ClassifierError {
    /// Whether asking again later could give a real category.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Unavailable(e) if e.is_transient())
    }
}

/// A backend that maps an expense description to a category label.
pub trait Classifier: Send + Sync {
    /// Classify a non-blank description.
    fn classify(
        &self,
        description: &str,
    ) -> impl Future<Output = Result<String, ClassifierError>> + Send;
}

/// Classifier used when no backend is configured. Every call fails with
/// [`ClassifierError::NotConfigured`].
#[derive(Debug, Clone, Copy, Default)]
pub struct UnconfiguredClassifier;

impl Classifier for UnconfiguredClassifier {
    async fn classify(&self, _description: &str) -> Result<String, ClassifierError> {
        Err(ClassifierError::NotConfigured)
    }
}

/// The classifier selected by configuration.
#[derive(Clone)]
pub enum ConfiguredClassifier {
    /// Claude-backed classification.
    Claude(ClaudeClassifier),
    /// No API key set.
    Unconfigured(UnconfiguredClassifier),
}

impl ConfiguredClassifier {
    /// Build the classifier for an optional Claude configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ClaudeError`] if a Claude configuration is present but the
    /// HTTP client cannot be built from it.
    pub fn from_config(claude: Option<&ClaudeConfig>) -> Result<Self, ClaudeError> {
        match claude {
            Some(config) => {
                let client = ClaudeClient::new(config)?;
                debug!(model = client.model(), "Claude categorization enabled");
                Ok(Self::Claude(ClaudeClassifier::new(client)))
            }
            None => {
                debug!("CLAUDE_API_KEY not set, categorization disabled");
                Ok(Self::Unconfigured(UnconfiguredClassifier))
            }
        }
    }
}

impl Classifier for ConfiguredClassifier {
    async fn classify(&self, description: &str) -> Result<String, ClassifierError> {
        match self {
            Self::Claude(classifier) => classifier.classify(description).await,
            Self::Unconfigured(classifier) => classifier.classify(description).await,
        }
    }
}

/// Outcome of a category suggestion.
#[derive(Debug)]
pub enum CategorySuggestion {
    /// The description was blank; no call was made.
    Skipped,
    /// The classifier produced a label.
    Suggested(String),
    /// The classifier failed; the fallback category is suggested instead.
    Fallback {
        /// Always [`FALLBACK_CATEGORY`].
        category: String,
        /// Why the classifier failed.
        reason: ClassifierError,
    },
}

impl CategorySuggestion {
    /// The suggested category (empty for [`CategorySuggestion::Skipped`]).
    #[must_use]
    pub fn category(&self) -> &str {
        match self {
            Self::Skipped => "",
            Self::Suggested(category) | Self::Fallback { category, .. } => category,
        }
    }

    /// Consume the suggestion, keeping only the category text.
    #[must_use]
    pub fn into_category(self) -> String {
        match self {
            Self::Skipped => String::new(),
            Self::Suggested(category) | Self::Fallback { category, .. } => category,
        }
    }

    /// Whether the classifier failed and the fallback was used.
    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }
}

/// Wraps a [`Classifier`] with the blank-input and failure policy.
#[derive(Debug, Clone)]
pub struct Categorizer<C> {
    classifier: C,
}

impl<C: Classifier> Categorizer<C> {
    /// Create a categorizer over `classifier`.
    #[must_use]
    pub const fn new(classifier: C) -> Self {
        Self { classifier }
    }

    /// The wrapped classifier.
    #[must_use]
    pub const fn classifier(&self) -> &C {
        &self.classifier
    }

    /// Suggest a category for `description`.
    ///
    /// Blank descriptions return [`CategorySuggestion::Skipped`] without
    /// calling the classifier. Failures are logged and mapped to
    /// [`CategorySuggestion::Fallback`]; they are never returned as errors.
    #[instrument(skip(self, description), fields(len = description.len()))]
    pub async fn suggest(&self, description: &str) -> CategorySuggestion {
        let description = description.trim();
        if description.is_empty() {
            return CategorySuggestion::Skipped;
        }

        match self.classifier.classify(description).await {
            Ok(label) if !label.trim().is_empty() => {
                let label = label.trim().to_string();
                debug!(category = %label, "category suggested");
                CategorySuggestion::Suggested(label)
            }
            Ok(_) => fallback(ClassifierError::EmptyLabel),
            Err(reason) => fallback(reason),
        }
    }

    /// Suggest a category and return only its text.
    ///
    /// Returns `""` for blank input and [`FALLBACK_CATEGORY`] on failure.
    pub async fn classify(&self, description: &str) -> String {
        self.suggest(description).await.into_category()
    }
}

fn fallback(reason: ClassifierError) -> CategorySuggestion {
    warn!(
        error = %reason,
        transient = reason.is_transient(),
        "categorization failed, using fallback category"
    );
    CategorySuggestion::Fallback {
        category: FALLBACK_CATEGORY.to_string(),
        reason,
    }
}
