//! Strictly positive monetary amount.

use core::fmt;
use core::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::validation::{Field, ValidationError};

/// A currency-denominated amount that is always greater than zero.
///
/// Amounts are stored in the currency's standard unit (dollars, not cents)
/// using decimal arithmetic, so sums like `49.99 + 75.50` are exact.
///
/// A single amount is capped at [`Amount::MAX`], which keeps ledger totals far
/// away from the limits of [`Decimal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(Decimal);

impl Amount {
    /// Largest amount a single record may carry (one quadrillion).
    pub const MAX: Decimal = Decimal::from_parts(0xA4C6_8000, 0x0003_8D7E, 0, false, 0); // 10^15

    /// Smallest amount accepted from user input: one cent.
    pub const MIN_INPUT: Decimal = Decimal::from_parts(1, 0, 0, false, 2); // 0.01

    /// Validate a decimal value for `field`.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NonPositiveAmount`] if `value <= 0`, or
    /// [`ValidationError::AmountTooLarge`] if `value > Amount::MAX`.
    pub fn new(field: Field, value: Decimal) -> Result<Self, ValidationError> {
        if value <= Decimal::ZERO {
            return Err(ValidationError::NonPositiveAmount {
                field,
                amount: value,
            });
        }
        if value > Self::MAX {
            return Err(ValidationError::AmountTooLarge {
                field,
                amount: value,
            });
        }
        Ok(Self(value))
    }

    /// Parse and validate user input such as `"1200"` or `"49.99"`.
    ///
    /// Typed input must be at least [`Amount::MIN_INPUT`], so nothing that
    /// displays as `$0.00` gets in through a form.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MalformedAmount`] for text that is not a
    /// decimal number, [`ValidationError::NonPositiveAmount`] for values
    /// that are not positive, [`ValidationError::BelowMinimum`] for positive
    /// values under one cent, or [`ValidationError::AmountTooLarge`].
    pub fn parse(field: Field, input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        let value = Decimal::from_str(trimmed).map_err(|_| ValidationError::MalformedAmount {
            field,
            input: input.to_owned(),
        })?;
        let amount = Self::new(field, value)?;
        if value < Self::MIN_INPUT {
            return Err(ValidationError::BelowMinimum {
                field,
                amount: value,
            });
        }
        Ok(amount)
    }

    /// The underlying decimal value.
    #[must_use]
    pub const fn value(self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_positive() {
        let amount = Amount::new(Field::Amount, Decimal::new(4999, 2));
        assert_eq!(amount.map(Amount::value), Ok(Decimal::new(4999, 2)));
    }

    #[test]
    fn test_new_rejects_zero_and_negative() {
        for value in [Decimal::ZERO, Decimal::new(-1, 2), Decimal::new(-2500, 0)] {
            assert_eq!(
                Amount::new(Field::Amount, value),
                Err(ValidationError::NonPositiveAmount {
                    field: Field::Amount,
                    amount: value,
                })
            );
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!(
            Amount::parse(Field::Amount, " 75.5 ").map(Amount::value),
            Ok(Decimal::new(755, 1))
        );
        assert!(matches!(
            Amount::parse(Field::Amount, "twelve"),
            Err(ValidationError::MalformedAmount { .. })
        ));
        assert!(matches!(
            Amount::parse(Field::Amount, "-3"),
            Err(ValidationError::NonPositiveAmount { .. })
        ));
    }

    #[test]
    fn test_new_rejects_above_max() {
        assert!(Amount::new(Field::Amount, Amount::MAX).is_ok());
        assert_eq!(
            Amount::new(Field::Amount, Decimal::MAX),
            Err(ValidationError::AmountTooLarge {
                field: Field::Amount,
                amount: Decimal::MAX,
            })
        );
    }

    #[test]
    fn test_parse_rejects_sub_cent_input() {
        let err = Amount::parse(Field::Amount, "0.001").unwrap_err();
        assert_eq!(
            err,
            ValidationError::BelowMinimum {
                field: Field::Amount,
                amount: Decimal::new(1, 3),
            }
        );
        assert_eq!(err.field_message(), "Amount must be positive");

        assert_eq!(
            Amount::parse(Field::Amount, "0.01").map(Amount::value),
            Ok(Decimal::new(1, 2))
        );
        // Values typed with extra precision are fine once they reach a cent.
        assert!(Amount::parse(Field::Amount, "12.345").is_ok());
    }
}
