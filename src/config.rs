//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts.
//!
//! ## Required Variables
//!
//! - `RAKUTEN_APP_ID` - Application credential for the Rakuten Books API
//!
//! ## Optional Variables
//!
//! - `RAKUTEN_API_URL` - Search endpoint override (default: official endpoint)
//! - `RAKUTEN_GENRE_ID` - Books genre filter (default: `001001`, comics)
//! - `OPENBD_API_URL` - openBD base URL override (default: `https://api.openbd.jp`)
//! - `PAGE_DELAY_MS` - Pause between search page requests (default: 300)
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use std::env;
use url::Url;

/// Official Rakuten Books search endpoint.
const DEFAULT_RAKUTEN_API_URL: &str =
    "https://app.rakuten.co.jp/services/api/BooksBook/Search/20170404";

/// Rakuten genre identifier for comics.
const DEFAULT_GENRE_ID: &str = "001001";

const DEFAULT_OPENBD_API_URL: &str = "https://api.openbd.jp";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Rakuten application credential sent with every search request.
    pub rakuten_app_id: String,
    pub rakuten_api_url: String,
    /// Fixed category filter restricting searches to the comics genre.
    pub rakuten_genre_id: String,
    pub openbd_api_url: String,
    /// Pause in milliseconds before every search page request after the
    /// first. Upstream rate-limit compliance, keep at the default unless the
    /// provider changes its policy.
    pub page_delay_ms: u64,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `RAKUTEN_APP_ID` is missing.
    pub fn from_env() -> Result<Self> {
        let rakuten_app_id =
            env::var("RAKUTEN_APP_ID").context("RAKUTEN_APP_ID must be set")?;

        let rakuten_api_url = env::var("RAKUTEN_API_URL")
            .unwrap_or_else(|_| DEFAULT_RAKUTEN_API_URL.to_string());
        let rakuten_genre_id =
            env::var("RAKUTEN_GENRE_ID").unwrap_or_else(|_| DEFAULT_GENRE_ID.to_string());
        let openbd_api_url =
            env::var("OPENBD_API_URL").unwrap_or_else(|_| DEFAULT_OPENBD_API_URL.to_string());

        let page_delay_ms = env::var("PAGE_DELAY_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(300);

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            rakuten_app_id,
            rakuten_api_url,
            rakuten_genre_id,
            openbd_api_url,
            page_delay_ms,
            listen_addr,
            log_level,
            log_format,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `rakuten_app_id` is empty
    /// - either API URL is not a valid http(s) URL
    /// - `page_delay_ms` exceeds 60000
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    pub fn validate(&self) -> Result<()> {
        if self.rakuten_app_id.is_empty() {
            anyhow::bail!("RAKUTEN_APP_ID must not be empty");
        }

        validate_http_url("RAKUTEN_API_URL", &self.rakuten_api_url)?;
        validate_http_url("OPENBD_API_URL", &self.openbd_api_url)?;

        if self.page_delay_ms > 60_000 {
            anyhow::bail!(
                "PAGE_DELAY_MS is too large (max: 60000), got {}",
                self.page_delay_ms
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        Ok(())
    }

    /// Parsed Rakuten search endpoint.
    pub fn rakuten_endpoint(&self) -> Result<Url> {
        Url::parse(&self.rakuten_api_url).context("Invalid RAKUTEN_API_URL")
    }

    /// Parsed openBD base URL.
    pub fn openbd_endpoint(&self) -> Result<Url> {
        Url::parse(&self.openbd_api_url).context("Invalid OPENBD_API_URL")
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Rakuten endpoint: {}", self.rakuten_api_url);
        tracing::info!("  Rakuten app id: {}", mask_credential(&self.rakuten_app_id));
        tracing::info!("  Genre filter: {}", self.rakuten_genre_id);
        tracing::info!("  openBD endpoint: {}", self.openbd_api_url);
        tracing::info!("  Page delay: {}ms", self.page_delay_ms);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

fn validate_http_url(name: &str, value: &str) -> Result<()> {
    let url =
        Url::parse(value).with_context(|| format!("{} is not a valid URL: '{}'", name, value))?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        other => anyhow::bail!("{} must use http or https, got '{}'", name, other),
    }
}

/// Masks a credential for logging, keeping a short recognizable prefix.
fn mask_credential(value: &str) -> String {
    if value.len() <= 4 {
        "***".to_string()
    } else {
        format!("{}***", &value[..4])
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn base_config() -> Config {
        Config {
            rakuten_app_id: "1234567890123456789".to_string(),
            rakuten_api_url: DEFAULT_RAKUTEN_API_URL.to_string(),
            rakuten_genre_id: DEFAULT_GENRE_ID.to_string(),
            openbd_api_url: DEFAULT_OPENBD_API_URL.to_string(),
            page_delay_ms: 300,
            listen_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
        }
    }

    #[test]
    fn test_mask_credential() {
        assert_eq!(mask_credential("1234567890"), "1234***");
        assert_eq!(mask_credential("abc"), "***");
        assert_eq!(mask_credential(""), "***");
    }

    #[test]
    fn test_config_validation() {
        let mut config = base_config();
        assert!(config.validate().is_ok());

        // Empty credential
        config.rakuten_app_id = String::new();
        assert!(config.validate().is_err());
        config.rakuten_app_id = "id".to_string();

        // Invalid API URL
        config.rakuten_api_url = "not-a-url".to_string();
        assert!(config.validate().is_err());
        config.rakuten_api_url = "ftp://example.com".to_string();
        assert!(config.validate().is_err());
        config.rakuten_api_url = DEFAULT_RAKUTEN_API_URL.to_string();

        // Excessive page delay
        config.page_delay_ms = 120_000;
        assert!(config.validate().is_err());
        config.page_delay_ms = 300;

        // Invalid log format
        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());
        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        // Invalid listen address
        config.listen_addr = "3000".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("RAKUTEN_APP_ID", "test-app-id");
            env::remove_var("RAKUTEN_API_URL");
            env::remove_var("RAKUTEN_GENRE_ID");
            env::remove_var("OPENBD_API_URL");
            env::remove_var("PAGE_DELAY_MS");
            env::remove_var("LISTEN");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.rakuten_app_id, "test-app-id");
        assert_eq!(config.rakuten_api_url, DEFAULT_RAKUTEN_API_URL);
        assert_eq!(config.rakuten_genre_id, "001001");
        assert_eq!(config.page_delay_ms, 300);
        assert_eq!(config.listen_addr, "0.0.0.0:3000");

        // Cleanup
        unsafe {
            env::remove_var("RAKUTEN_APP_ID");
        }
    }

    #[test]
    #[serial]
    fn test_from_env_missing_app_id_fails() {
        // SAFETY: Tests are run serially
        unsafe {
            env::remove_var("RAKUTEN_APP_ID");
        }

        assert!(Config::from_env().is_err());
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("RAKUTEN_APP_ID", "test-app-id");
            env::set_var("RAKUTEN_API_URL", "http://localhost:9000/search");
            env::set_var("PAGE_DELAY_MS", "50");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.rakuten_api_url, "http://localhost:9000/search");
        assert_eq!(config.page_delay_ms, 50);

        // Cleanup
        unsafe {
            env::remove_var("RAKUTEN_APP_ID");
            env::remove_var("RAKUTEN_API_URL");
            env::remove_var("PAGE_DELAY_MS");
        }
    }

    #[test]
    fn test_endpoint_parsing() {
        let config = base_config();
        let endpoint = config.rakuten_endpoint().unwrap();
        assert_eq!(endpoint.scheme(), "https");
        assert_eq!(endpoint.host_str(), Some("app.rakuten.co.jp"));
    }
}
