//! BizBoard configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//!
//! - `CLAUDE_API_KEY` - Anthropic Claude API key (enables category suggestions)
//! - `CLAUDE_MODEL` - Claude model ID (default: claude-sonnet-4-20250514)
//! - `CLAUDE_API_URL` - Messages endpoint (default: <https://api.anthropic.com/v1/messages>)
//! - `CLAUDE_TIMEOUT_SECS` - Request timeout in seconds (default: 15)
//! - `BIZBOARD_CURRENCY` - ISO 4217 currency code for display (default: USD)
//! - `BIZBOARD_LOCALE` - Number formatting locale (default: en-US)
//! - `BIZBOARD_SAMPLE_DATA` - Seed sample records at startup (default: true)

use std::collections::HashMap;
use std::time::Duration;

use bizboard_core::{CurrencyCode, Locale, MoneyFormat};
use secrecy::SecretString;
use thiserror::Error;

const DEFAULT_CLAUDE_MODEL: &str = "claude-sonnet-4-20250514";
const DEFAULT_CLAUDE_API_URL: &str = "https://api.anthropic.com/v1/messages";
const DEFAULT_CLAUDE_TIMEOUT_SECS: u64 = 15;
const MIN_ENTROPY_BITS_PER_CHAR: f64 = 3.3;

/// Blocklist of common placeholder patterns (case-insensitive)
const PLACEHOLDER_PATTERNS: &[&str] = &[
    "your-",
    "changeme",
    "replace",
    "placeholder",
    "example",
    "xxx",
    "todo",
    "insert",
    "put-your",
];

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Insecure secret in {0}: {1}")]
    InsecureSecret(String, String),
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct BizBoardConfig {
    /// Claude configuration; `None` disables category suggestions.
    pub claude: Option<ClaudeConfig>,
    /// Currency and locale for displayed amounts.
    pub money: MoneyFormat,
    /// Whether to seed the sample records at startup.
    pub sample_data: bool,
}

impl Default for BizBoardConfig {
    fn default() -> Self {
        Self {
            claude: None,
            money: MoneyFormat::default(),
            sample_data: true,
        }
    }
}

/// Claude AI API configuration.
///
/// Implements `Debug` manually to redact the API key.
#[derive(Clone)]
pub struct ClaudeConfig {
    /// Anthropic API key
    pub api_key: SecretString,
    /// Model ID (e.g., claude-sonnet-4-20250514)
    pub model: String,
    /// Messages endpoint URL
    pub api_url: String,
    /// Per-request timeout
    pub timeout: Duration,
}

impl std::fmt::Debug for ClaudeConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClaudeConfig")
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .field("api_url", &self.api_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl BizBoardConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unparsable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an unparsable value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let currency = parse_var::<CurrencyCode>(&lookup, "BIZBOARD_CURRENCY")?.unwrap_or_default();
        let locale = parse_var::<Locale>(&lookup, "BIZBOARD_LOCALE")?.unwrap_or_default();
        let sample_data = lookup("BIZBOARD_SAMPLE_DATA")
            .map(|v| parse_bool("BIZBOARD_SAMPLE_DATA", &v))
            .transpose()?
            .unwrap_or(true);
        let claude = ClaudeConfig::from_lookup(&lookup)?;

        Ok(Self {
            claude,
            money: MoneyFormat::new(currency, locale),
            sample_data,
        })
    }

    /// Returns a reference to the Claude configuration, if available.
    ///
    /// Returns `None` if `CLAUDE_API_KEY` was not set, which makes every
    /// category suggestion fall back to "Uncategorized".
    #[must_use]
    pub const fn claude(&self) -> Option<&ClaudeConfig> {
        self.claude.as_ref()
    }
}

impl ClaudeConfig {
    fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Result<Option<Self>, ConfigError> {
        let Some(api_key) = lookup("CLAUDE_API_KEY").filter(|k| !k.trim().is_empty()) else {
            return Ok(None);
        };

        // Validate the key if present
        if let Err(e) = validate_secret_strength(&api_key, "CLAUDE_API_KEY") {
            tracing::warn!("CLAUDE_API_KEY validation warning: {e}");
        }

        let timeout_secs = parse_var::<u64>(lookup, "CLAUDE_TIMEOUT_SECS")?
            .unwrap_or(DEFAULT_CLAUDE_TIMEOUT_SECS);
        if timeout_secs == 0 {
            return Err(ConfigError::InvalidEnvVar(
                "CLAUDE_TIMEOUT_SECS".to_string(),
                "must be at least 1".to_string(),
            ));
        }

        Ok(Some(Self {
            api_key: SecretString::from(api_key),
            model: lookup("CLAUDE_MODEL").unwrap_or_else(|| DEFAULT_CLAUDE_MODEL.to_string()),
            api_url: lookup("CLAUDE_API_URL")
                .unwrap_or_else(|| DEFAULT_CLAUDE_API_URL.to_string()),
            timeout: Duration::from_secs(timeout_secs),
        }))
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Parse an optional variable with `FromStr`.
fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    lookup(key)
        .map(|value| {
            value
                .trim()
                .parse::<T>()
                .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
        })
        .transpose()
}

/// Parse a boolean flag (`true/false`, `1/0`, `yes/no`, `on/off`).
fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        other => Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("expected a boolean, got {other:?}"),
        )),
    }
}

/// Calculate Shannon entropy in bits per character.
fn shannon_entropy(s: &str) -> f64 {
    if s.is_empty() {
        return 0.0;
    }

    let mut freq: HashMap<char, usize> = HashMap::new();
    for c in s.chars() {
        *freq.entry(c).or_insert(0) += 1;
    }

    #[allow(clippy::cast_precision_loss)] // String length will never exceed f64 precision
    let len = s.chars().count() as f64;
    freq.values()
        .map(|&count| {
            #[allow(clippy::cast_precision_loss)] // Character count will never exceed f64 precision
            let p = count as f64 / len;
            -p * p.log2()
        })
        .sum()
}

/// Validate that a secret is not a placeholder and has sufficient entropy.
fn validate_secret_strength(secret: &str, var_name: &str) -> Result<(), ConfigError> {
    let lower = secret.to_lowercase();

    if let Some(pattern) = PLACEHOLDER_PATTERNS.iter().find(|p| lower.contains(*p)) {
        return Err(ConfigError::InsecureSecret(
            var_name.to_string(),
            format!("appears to be a placeholder (contains '{pattern}')"),
        ));
    }

    let entropy = shannon_entropy(secret);
    if entropy < MIN_ENTROPY_BITS_PER_CHAR {
        return Err(ConfigError::InsecureSecret(
            var_name.to_string(),
            format!(
                "entropy too low ({entropy:.2} bits/char, need >= {MIN_ENTROPY_BITS_PER_CHAR:.1})"
            ),
        ));
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use secrecy::ExposeSecret;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = BizBoardConfig::from_lookup(lookup_from(&[])).unwrap();
        assert!(config.claude().is_none());
        assert_eq!(config.money, MoneyFormat::default());
        assert!(config.sample_data);
    }

    #[test]
    fn test_money_and_seed_overrides() {
        let config = BizBoardConfig::from_lookup(lookup_from(&[
            ("BIZBOARD_CURRENCY", "eur"),
            ("BIZBOARD_LOCALE", "de-DE"),
            ("BIZBOARD_SAMPLE_DATA", "no"),
        ]))
        .unwrap();
        assert_eq!(
            config.money,
            MoneyFormat::new(CurrencyCode::Eur, Locale::DeDe)
        );
        assert!(!config.sample_data);
    }

    #[test]
    fn test_invalid_values_are_errors() {
        for (key, value) in [
            ("BIZBOARD_CURRENCY", "doubloons"),
            ("BIZBOARD_LOCALE", "xx-YY"),
            ("BIZBOARD_SAMPLE_DATA", "maybe"),
        ] {
            let result = BizBoardConfig::from_lookup(lookup_from(&[(key, value)]));
            assert!(
                matches!(result, Err(ConfigError::InvalidEnvVar(ref k, _)) if k == key),
                "{key}={value} should be rejected"
            );
        }
    }

    #[test]
    fn test_claude_config() {
        let config = BizBoardConfig::from_lookup(lookup_from(&[
            ("CLAUDE_API_KEY", "sk-ant-REDACTED"),
            ("CLAUDE_TIMEOUT_SECS", "5"),
        ]))
        .unwrap();
        let claude = config.claude().unwrap();
        assert_eq!(claude.model, DEFAULT_CLAUDE_MODEL);
        assert_eq!(claude.api_url, DEFAULT_CLAUDE_API_URL);
        assert_eq!(claude.timeout, Duration::from_secs(5));
        assert_eq!(
            claude.api_key.expose_secret(),
            "sk-ant-REDACTED"
        );
    }

    #[test]
    fn test_blank_api_key_disables_claude() {
        let config = BizBoardConfig::from_lookup(lookup_from(&[("CLAUDE_API_KEY", "  ")])).unwrap();
        assert!(config.claude().is_none());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let result = BizBoardConfig::from_lookup(lookup_from(&[
            ("CLAUDE_API_KEY", "sk-ant-REDACTED"),
            ("CLAUDE_TIMEOUT_SECS", "0"),
        ]));
        assert!(matches!(result, Err(ConfigError::InvalidEnvVar(_, _))));
    }

    #[test]
    fn test_shannon_entropy() {
        assert!((shannon_entropy("") - 0.0).abs() < f64::EPSILON);
        assert!((shannon_entropy("aaaaaaa") - 0.0).abs() < f64::EPSILON);
        assert!((shannon_entropy("ab") - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_validate_secret_strength() {
        assert!(matches!(
            validate_secret_strength("your-api-key-here", "TEST_VAR"),
            Err(ConfigError::InsecureSecret(_, _))
        ));
        assert!(validate_secret_strength("aaaaaaaaaaaaaaaaaaaaaaaa", "TEST_VAR").is_err());
        assert!(validate_secret_strength("aB3$xY9!mK2@nL5#pQ7&rT0*uW4^zC6", "TEST_VAR").is_ok());
    }

    #[test]
    fn test_claude_config_debug_redacts_secrets() {
        let config = ClaudeConfig {
            api_key: SecretString::from("sk-ant-super-secret-key"),
            model: "claude-sonnet-4-20250514".to_string(),
            api_url: DEFAULT_CLAUDE_API_URL.to_string(),
            timeout: Duration::from_secs(15),
        };

        let debug_output = format!("{config:?}");

        assert!(debug_output.contains("claude-sonnet-4-20250514"));
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("sk-ant-super-secret-key"));
    }
}
