//! Core types for BizBoard.
//!
//! This module provides type-safe wrappers for identifiers, validated text,
//! amounts, timestamps, and currency formatting.

pub mod amount;
pub mod date;
pub mod id;
pub mod money;
pub mod text;
pub mod validation;

pub use amount::Amount;
pub use date::{Timestamp, parse_day, parse_timestamp, start_of_day};
pub use id::*;
pub use money::{CurrencyCode, Locale, MoneyFormat, MoneyFormatError};
pub use text::RequiredText;
pub use validation::{Field, ValidationError};
