//! Claude API integration for expense categorization.
//!
//! # Features
//!
//! - Single-turn Messages API client with typed error mapping
//! - [`ClaudeClassifier`], the remote side of the categorization collaborator
//!
//! Streaming and tool use are not needed for one-word category suggestions
//! and are not implemented.

mod classifier;
mod client;
mod error;
mod types;

pub use classifier::ClaudeClassifier;
pub use client::ClaudeClient;
pub use error::ClaudeError;
pub use types::{ChatRequest, ChatResponse, ContentBlock, Message, StopReason, Usage};
