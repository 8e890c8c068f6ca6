//! Required (non-empty) text type.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::validation::{Field, ValidationError};

/// Non-empty text for descriptions, categories, and titles.
///
/// ## Constraints
///
/// - Surrounding whitespace is trimmed
/// - The trimmed value must not be empty
///
/// ## Examples
///
/// ```
/// use bizboard_core::{Field, RequiredText};
///
/// let text = RequiredText::parse(Field::Title, "  Project Kickoff ").unwrap();
/// assert_eq!(text.as_str(), "Project Kickoff");
///
/// assert!(RequiredText::parse(Field::Title, "").is_err());
/// assert!(RequiredText::parse(Field::Title, "   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequiredText(String);

impl RequiredText {
    /// Parse required text for `field`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Required`] if the input is empty after trimming.
    pub fn parse(field: Field, s: &str) -> Result<Self, ValidationError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Required { field });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the text as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `RequiredText` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for RequiredText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for RequiredText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims() {
        let text = RequiredText::parse(Field::Description, "  Logo Design\n");
        assert_eq!(text.map(RequiredText::into_inner), Ok("Logo Design".to_string()));
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(
            RequiredText::parse(Field::Description, ""),
            Err(ValidationError::Required {
                field: Field::Description
            })
        );
    }

    #[test]
    fn test_parse_whitespace_only() {
        assert!(matches!(
            RequiredText::parse(Field::Category, " \t "),
            Err(ValidationError::Required {
                field: Field::Category
            })
        ));
    }
}
