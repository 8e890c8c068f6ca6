//! BizBoard Core - ledger store and shared types.
//!
//! This crate provides the bookkeeping core used by every BizBoard component:
//! - `app` - Configuration, expense categorization, and screen view models
//! - `cli` - Command-line dashboard over a seeded session
//!
//! # Architecture
//!
//! The core crate contains only types and the in-memory ledger - no I/O, no
//! HTTP clients, no async. The [`LedgerStore`] is the single owner of the
//! revenue, expense, and appointment collections, the only path by which
//! they change, and the source of every aggregate.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for IDs, validated text, amounts, timestamps, and money formatting
//! - [`ledger`] - Records, the store, change events, and derived views

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod ledger;
pub mod types;

pub use ledger::*;
pub use types::*;
