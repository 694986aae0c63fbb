//! Console configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `CATALOG_API_URL` - GraphQL endpoint of the catalog mutation API
//! - `CATALOG_API_TOKEN` - Staff access token sent as a bearer token (HIGH PRIVILEGE)
//!
//! ## Optional
//! - `CATALOG_DECIMAL_SEPARATOR` - `.` (default) or `,`; how price and weight
//!   fields are written in the product form
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//! - `SENTRY_SAMPLE_RATE` - Sentry error sample rate (default: 1.0)
//! - `LOG_FORMAT` - `json` for structured log output, text otherwise

use std::collections::HashMap;

use catalog_console_core::DecimalSeparator;
use secrecy::SecretString;
use thiserror::Error;
use url::Url;

const MIN_ENTROPY_BITS_PER_CHAR: f64 = 3.3;

/// Blocklist of common placeholder patterns (case-insensitive)
const PLACEHOLDER_PATTERNS: &[&str] = &[
    "your-",
    "your_",
    "changeme",
    "replace",
    "placeholder",
    "example",
    "xxx",
    "staff-token-here",
];

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Insecure secret in {0}: {1}")]
    InsecureSecret(String, String),
}

/// Console configuration.
#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    /// Mutation API configuration
    pub api: ApiConfig,
    /// Decimal separator used by numeric form fields
    pub decimal_separator: DecimalSeparator,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment (e.g., "development", "staging", "production")
    pub sentry_environment: Option<String>,
    /// Sentry error sample rate (0.0 to 1.0)
    pub sentry_sample_rate: f32,
    /// Emit JSON log lines instead of human-readable text
    pub json_logs: bool,
}

/// Catalog mutation API configuration.
///
/// Implements `Debug` manually to redact the HIGH PRIVILEGE token.
#[derive(Clone)]
pub struct ApiConfig {
    /// GraphQL endpoint URL
    pub url: Url,
    /// Staff access token (HIGH PRIVILEGE - full catalog write access)
    pub token: SecretString,
}

impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("url", &self.url.as_str())
            .field("token", &"[REDACTED]")
            .finish()
    }
}

impl ApiConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let raw_url = get_required_env("CATALOG_API_URL")?;
        Ok(Self {
            url: parse_api_url(&raw_url)?,
            token: get_staff_token("CATALOG_API_TOKEN")?,
        })
    }
}

impl ConsoleConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing, invalid, or
    /// if the API token fails validation (placeholder detection, entropy check).
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let api = ApiConfig::from_env()?;
        let decimal_separator = get_env_or_default("CATALOG_DECIMAL_SEPARATOR", ".")
            .parse::<DecimalSeparator>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("CATALOG_DECIMAL_SEPARATOR".to_string(), e.to_string())
            })?;
        let sentry_dsn = get_optional_env("SENTRY_DSN");
        let sentry_environment = get_optional_env("SENTRY_ENVIRONMENT");
        let sentry_sample_rate = get_optional_env("SENTRY_SAMPLE_RATE")
            .and_then(|s| s.parse().ok())
            .unwrap_or(1.0);
        let json_logs = get_optional_env("LOG_FORMAT").is_some_and(|f| f.eq_ignore_ascii_case("json"));

        Ok(Self {
            api,
            decimal_separator,
            sentry_dsn,
            sentry_environment,
            sentry_sample_rate,
            json_logs,
        })
    }

    /// Returns a reference to the mutation API configuration.
    #[must_use]
    pub const fn api(&self) -> &ApiConfig {
        &self.api
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse the API endpoint, accepting only http(s) URLs.
fn parse_api_url(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw)
        .map_err(|e| ConfigError::InvalidEnvVar("CATALOG_API_URL".to_string(), e.to_string()))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(ConfigError::InvalidEnvVar(
            "CATALOG_API_URL".to_string(),
            format!("unsupported scheme '{scheme}'"),
        )),
    }
}

/// Shannon entropy of `token` in bits per character.
fn token_entropy(token: &str) -> f64 {
    let mut counts: HashMap<char, u32> = HashMap::new();
    let mut total = 0_u32;
    for c in token.chars() {
        *counts.entry(c).or_default() += 1;
        total += 1;
    }
    if total == 0 {
        return 0.0;
    }

    let total = f64::from(total);
    counts
        .values()
        .map(|&count| {
            let p = f64::from(count) / total;
            -p * p.log2()
        })
        .sum()
}

/// Reject tokens copied from a template or typed by hand.
fn check_token(token: &str, key: &str) -> Result<(), ConfigError> {
    let lower = token.to_lowercase();
    if let Some(pattern) = PLACEHOLDER_PATTERNS.iter().find(|p| lower.contains(**p)) {
        return Err(ConfigError::InsecureSecret(
            key.to_string(),
            format!("looks like a template value (contains '{pattern}')"),
        ));
    }

    let entropy = token_entropy(token);
    if entropy < MIN_ENTROPY_BITS_PER_CHAR {
        return Err(ConfigError::InsecureSecret(
            key.to_string(),
            format!(
                "{entropy:.2} bits/char is below {MIN_ENTROPY_BITS_PER_CHAR:.1}; issue a new staff token"
            ),
        ));
    }

    Ok(())
}

/// Read the staff token and check it before it is wrapped.
fn get_staff_token(key: &str) -> Result<SecretString, ConfigError> {
    let value = get_required_env(key)?;
    check_token(&value, key)?;
    Ok(SecretString::from(value))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_token_entropy() {
        assert!(token_entropy("").abs() < f64::EPSILON);
        assert!((token_entropy("abab") - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_check_token_rejects_template_values() {
        for token in ["your-staff-token", "CHANGEME-7f3k", "replace_with_token"] {
            assert!(matches!(
                check_token(token, "CATALOG_API_TOKEN"),
                Err(ConfigError::InsecureSecret(_, _))
            ));
        }
    }

    #[test]
    fn test_check_token_rejects_low_entropy() {
        assert!(matches!(
            check_token("abababababababababab", "CATALOG_API_TOKEN"),
            Err(ConfigError::InsecureSecret(_, _))
        ));
    }

    #[test]
    fn test_check_token_accepts_generated_token() {
        assert!(check_token("eyJhbGciOiJSUzI1NiIsInR5cCI6IkpXVCJ9.q8Zt2", "CATALOG_API_TOKEN").is_ok());
    }

    #[test]
    fn test_parse_api_url() {
        let url = parse_api_url("https://shop.test/graphql/").unwrap();
        assert_eq!(url.host_str(), Some("shop.test"));

        assert!(matches!(
            parse_api_url("ftp://shop.test/graphql/"),
            Err(ConfigError::InvalidEnvVar(_, _))
        ));
        assert!(matches!(
            parse_api_url("not a url"),
            Err(ConfigError::InvalidEnvVar(_, _))
        ));
    }

    #[test]
    fn test_api_config_debug_redacts_token() {
        let config = ApiConfig {
            url: Url::parse("https://shop.test/graphql/").unwrap(),
            token: SecretString::from("super_secret_staff_token"),
        };

        let debug_output = format!("{config:?}");

        assert!(debug_output.contains("https://shop.test/graphql/"));
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("super_secret_staff_token"));
    }
}
