//! CLI error type.

use bizboard_app::ConfigError;
use bizboard_app::claude::ClaudeError;
use bizboard_core::ValidationError;
use thiserror::Error;

/// Errors that end a `bizboard` invocation.
#[derive(Debug, Error)]
pub enum CliError {
    /// Environment configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The Claude client could not be built.
    #[error("Claude client error: {0}")]
    Claude(#[from] ClaudeError),

    /// A command argument failed validation.
    #[error("{}", .0.field_message())]
    Validation(#[from] ValidationError),

    /// A session file operation failed validation.
    #[error("Operation {index} failed: {}", .source.field_message())]
    Operation {
        /// 1-based position in the session file.
        index: usize,
        source: ValidationError,
    },

    /// Reading the session file or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The session file is not valid YAML for a session.
    #[error("Invalid session file: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON output could not be produced.
    #[error("JSON output error: {0}")]
    Json(#[from] serde_json::Error),
}
