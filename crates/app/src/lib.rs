//! BizBoard application library.
//!
//! Everything around the ledger that the command line (or any other
//! front end) needs:
//! - [`config`] - Environment configuration
//! - [`categorize`] - Expense category suggestions with a fixed fallback
//! - [`claude`] - Anthropic Messages API client backing the suggestions
//! - [`screens`] - Display-ready view models and push-based screen feeds
//! - [`forms`] - View-local form state for the add dialogs
//!
//! # Security
//!
//! The Claude API key is held as a [`secrecy::SecretString`] and is never
//! logged or printed.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod categorize;
pub mod claude;
pub mod config;
pub mod forms;
pub mod screens;

pub use categorize::{
    CategorySuggestion, Categorizer, Classifier, ClassifierError, ConfiguredClassifier,
    FALLBACK_CATEGORY, UnconfiguredClassifier,
};
pub use config::{BizBoardConfig, ClaudeConfig, ConfigError};
