//! Currency formatting with decimal arithmetic.
//!
//! Amounts are presented with a fixed currency and locale convention. The
//! default is US dollars with US numeral grouping (`$1,234.56`).

use core::fmt;
use core::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a currency code or locale tag.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MoneyFormatError {
    /// The currency code is not supported.
    #[error("unsupported currency code: {0}")]
    UnknownCurrency(String),
    /// The locale tag is not supported.
    #[error("unsupported locale: {0}")]
    UnknownLocale(String),
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum CurrencyCode {
    #[default]
    Usd,
    Eur,
    Gbp,
    Cad,
    Aud,
}

impl CurrencyCode {
    /// The three-letter ISO code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Usd => "USD",
            Self::Eur => "EUR",
            Self::Gbp => "GBP",
            Self::Cad => "CAD",
            Self::Aud => "AUD",
        }
    }

    /// Currency symbol as written in `locale`.
    ///
    /// Dollar currencies use the bare `$` only in their home locale (and for
    /// USD in continental European locales); elsewhere they are prefixed to
    /// stay unambiguous.
    #[must_use]
    pub const fn symbol(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Self::Usd, Locale::EnUs | Locale::DeDe | Locale::FrFr)
            | (Self::Cad, Locale::EnCa)
            | (Self::Aud, Locale::EnAu) => "$",
            (Self::Usd, _) => "US$",
            (Self::Cad, _) => "CA$",
            (Self::Aud, _) => "A$",
            (Self::Eur, _) => "€",
            (Self::Gbp, _) => "£",
        }
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for CurrencyCode {
    type Err = MoneyFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "USD" => Ok(Self::Usd),
            "EUR" => Ok(Self::Eur),
            "GBP" => Ok(Self::Gbp),
            "CAD" => Ok(Self::Cad),
            "AUD" => Ok(Self::Aud),
            _ => Err(MoneyFormatError::UnknownCurrency(s.to_owned())),
        }
    }
}

/// Numeral and symbol conventions for presenting amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Locale {
    #[default]
    #[serde(rename = "en-US")]
    EnUs,
    #[serde(rename = "en-GB")]
    EnGb,
    #[serde(rename = "en-CA")]
    EnCa,
    #[serde(rename = "en-AU")]
    EnAu,
    #[serde(rename = "de-DE")]
    DeDe,
    #[serde(rename = "fr-FR")]
    FrFr,
}

impl Locale {
    /// BCP 47 language tag.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::EnUs => "en-US",
            Self::EnGb => "en-GB",
            Self::EnCa => "en-CA",
            Self::EnAu => "en-AU",
            Self::DeDe => "de-DE",
            Self::FrFr => "fr-FR",
        }
    }

    const fn group_separator(self) -> &'static str {
        match self {
            Self::EnUs | Self::EnGb | Self::EnCa | Self::EnAu => ",",
            Self::DeDe => ".",
            // narrow no-break space
            Self::FrFr => "\u{202f}",
        }
    }

    const fn decimal_separator(self) -> char {
        match self {
            Self::EnUs | Self::EnGb | Self::EnCa | Self::EnAu => '.',
            Self::DeDe | Self::FrFr => ',',
        }
    }

    const fn symbol_after(self) -> bool {
        matches!(self, Self::DeDe | Self::FrFr)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Locale {
    type Err = MoneyFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().replace('_', "-").to_ascii_lowercase().as_str() {
            "en-us" => Ok(Self::EnUs),
            "en-gb" => Ok(Self::EnGb),
            "en-ca" => Ok(Self::EnCa),
            "en-au" => Ok(Self::EnAu),
            "de-de" => Ok(Self::DeDe),
            "fr-fr" => Ok(Self::FrFr),
            _ => Err(MoneyFormatError::UnknownLocale(s.to_owned())),
        }
    }
}

/// Currency plus locale, applied to every amount a screen displays.
///
/// ## Examples
///
/// ```
/// use bizboard_core::{CurrencyCode, Locale, MoneyFormat};
/// use rust_decimal::Decimal;
///
/// let usd = MoneyFormat::default();
/// assert_eq!(usd.format(Decimal::new(123450, 2)), "$1,234.50");
/// assert_eq!(usd.format(Decimal::new(-50, 0)), "-$50.00");
///
/// let eur = MoneyFormat::new(CurrencyCode::Eur, Locale::DeDe);
/// assert_eq!(eur.format(Decimal::new(123450, 2)), "1.234,50\u{a0}€");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct MoneyFormat {
    /// Currency of every amount in the ledger.
    pub currency: CurrencyCode,
    /// Presentation conventions.
    pub locale: Locale,
}

impl MoneyFormat {
    /// Create a new money format.
    #[must_use]
    pub const fn new(currency: CurrencyCode, locale: Locale) -> Self {
        Self { currency, locale }
    }

    /// Format `value` with two decimal places, rounding half away from zero.
    #[must_use]
    pub fn format(&self, value: Decimal) -> String {
        let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        let negative = rounded.is_sign_negative() && !rounded.is_zero();
        let digits = format!("{:.2}", rounded.abs());
        let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

        let mut number = group_digits(int_part, self.locale.group_separator());
        number.push(self.locale.decimal_separator());
        number.push_str(frac_part);

        let symbol = self.currency.symbol(self.locale);
        let sign = if negative { "-" } else { "" };
        if self.locale.symbol_after() {
            format!("{sign}{number}\u{a0}{symbol}")
        } else {
            format!("{sign}{symbol}{number}")
        }
    }
}

/// Insert `separator` between groups of three integer digits.
fn group_digits(int_part: &str, separator: &str) -> String {
    let len = int_part.chars().count();
    let mut out = String::with_capacity(len + len / 3 * separator.len());
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_default_is_usd_en_us() {
        let fmt = MoneyFormat::default();
        assert_eq!(fmt.currency, CurrencyCode::Usd);
        assert_eq!(fmt.locale, Locale::EnUs);
    }

    #[test]
    fn test_format_us() {
        let fmt = MoneyFormat::default();
        assert_eq!(fmt.format(dec("0")), "$0.00");
        assert_eq!(fmt.format(dec("49.99")), "$49.99");
        assert_eq!(fmt.format(dec("4500")), "$4,500.00");
        assert_eq!(fmt.format(dec("1234567.891")), "$1,234,567.89");
        assert_eq!(fmt.format(dec("-50")), "-$50.00");
    }

    #[test]
    fn test_format_rounds_half_away_from_zero() {
        let fmt = MoneyFormat::default();
        assert_eq!(fmt.format(dec("0.125")), "$0.13");
        assert_eq!(fmt.format(dec("-0.125")), "-$0.13");
        assert_eq!(fmt.format(dec("-0.001")), "$0.00");
    }

    #[test]
    fn test_format_continental() {
        let de = MoneyFormat::new(CurrencyCode::Eur, Locale::DeDe);
        assert_eq!(de.format(dec("-4254.51")), "-4.254,51\u{a0}€");

        let fr = MoneyFormat::new(CurrencyCode::Eur, Locale::FrFr);
        assert_eq!(fr.format(dec("1234.5")), "1\u{202f}234,50\u{a0}€");
    }

    #[test]
    fn test_symbol_disambiguation() {
        assert_eq!(CurrencyCode::Cad.symbol(Locale::EnCa), "$");
        assert_eq!(CurrencyCode::Cad.symbol(Locale::EnUs), "CA$");
        assert_eq!(CurrencyCode::Usd.symbol(Locale::EnGb), "US$");
        assert_eq!(CurrencyCode::Gbp.symbol(Locale::EnGb), "£");
    }

    #[test]
    fn test_parse_codes() {
        assert_eq!("usd".parse::<CurrencyCode>(), Ok(CurrencyCode::Usd));
        assert_eq!("en_GB".parse::<Locale>(), Ok(Locale::EnGb));
        assert!(matches!(
            "XYZ".parse::<CurrencyCode>(),
            Err(MoneyFormatError::UnknownCurrency(_))
        ));
        assert!(matches!(
            "tlh".parse::<Locale>(),
            Err(MoneyFormatError::UnknownLocale(_))
        ));
    }

    #[test]
    fn test_serde_uses_codes() {
        let fmt = MoneyFormat::new(CurrencyCode::Gbp, Locale::EnGb);
        let json = serde_json::to_string(&fmt).unwrap();
        assert_eq!(json, r#"{"currency":"GBP","locale":"en-GB"}"#);
    }
}
