//! Configuration management for the wiki session client
//!
//! Settings are layered: built-in defaults, then an optional `config.toml`,
//! then `WIKITEXT_*` environment variables.

use config::{Config, ConfigBuilder, Environment, File, FileFormat, builder::DefaultState};
use serde::Deserialize;
use std::fmt;
use std::time::Duration;

use crate::auth::Credentials;

/// Environment variable that may point at an alternative config file
pub const CONFIG_PATH_ENV: &str = "WIKITEXT_CONFIG";

const DEFAULT_CONFIG_PATH: &str = "config";

/// Settings read by the session manager
#[derive(Deserialize, Clone)]
pub struct WikiConfig {
    /// Account name used for `action=login`
    #[serde(default)]
    pub user_name: Option<String>,

    /// Bot password or account password
    #[serde(default)]
    pub password: Option<String>,

    /// Scheme prefix, e.g. `https://`
    pub transfer_protocol: String,

    /// Path of `api.php` on the host, e.g. `/w/api.php`
    pub api_path: String,

    /// Host the user works against; empty means "not configured"
    #[serde(default)]
    pub host: Option<String>,

    /// Per-request timeout for the HTTP client
    pub request_timeout_secs: u64,

    pub user_agent: String,
}

impl fmt::Debug for WikiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WikiConfig")
            .field("user_name", &self.user_name)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("transfer_protocol", &self.transfer_protocol)
            .field("api_path", &self.api_path)
            .field("host", &self.host)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl Default for WikiConfig {
    fn default() -> Self {
        Self {
            user_name: None,
            password: None,
            transfer_protocol: "https://".to_string(),
            api_path: "/w/api.php".to_string(),
            host: Some("en.wikipedia.org".to_string()),
            request_timeout_secs: 30,
            user_agent: concat!("wikitext-session/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl WikiConfig {
    /// Load configuration from `config.toml` (or `$WIKITEXT_CONFIG`) with
    /// environment overrides. A missing file is not an error.
    pub fn load() -> Result<Self, config::ConfigError> {
        let path =
            std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        let builder = Self::defaults()?
            .add_source(File::with_name(&path).required(false))
            .add_source(Environment::with_prefix("WIKITEXT"));

        Self::finish(builder)
    }

    /// Parse configuration from TOML text layered over the defaults.
    pub fn from_toml(source: &str) -> Result<Self, config::ConfigError> {
        let builder = Self::defaults()?.add_source(File::from_str(source, FileFormat::Toml));
        Self::finish(builder)
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, config::ConfigError> {
        let defaults = Self::default();
        Config::builder()
            .set_default("transfer_protocol", defaults.transfer_protocol)?
            .set_default("api_path", defaults.api_path)?
            .set_default("host", defaults.host)?
            .set_default("request_timeout_secs", defaults.request_timeout_secs as i64)?
            .set_default("user_agent", defaults.user_agent)
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> Result<Self, config::ConfigError> {
        let config: WikiConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), config::ConfigError> {
        if self.transfer_protocol.trim().is_empty() {
            return Err(config::ConfigError::Message(
                "transfer_protocol cannot be empty".into(),
            ));
        }

        if self.api_path.trim().is_empty() {
            return Err(config::ConfigError::Message(
                "api_path cannot be empty".into(),
            ));
        }

        if self.request_timeout_secs == 0 {
            return Err(config::ConfigError::Message(
                "request_timeout_secs must be greater than 0".into(),
            ));
        }

        Ok(())
    }

    /// Endpoint URL for a resolved host. Plain concatenation, no normalisation.
    pub fn api_url(&self, host: &str) -> String {
        format!("{}{}{}", self.transfer_protocol, host, self.api_path)
    }

    /// Both credentials, or `None` if either is missing or blank.
    pub fn credentials(&self) -> Option<Credentials> {
        Credentials::from_parts(self.user_name.as_deref(), self.password.as_deref())
    }

    /// Get request timeout as Duration
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_apply_when_keys_missing() {
        let config = WikiConfig::from_toml("").unwrap();
        assert_eq!(config.transfer_protocol, "https://");
        assert_eq!(config.api_path, "/w/api.php");
        assert_eq!(config.host.as_deref(), Some("en.wikipedia.org"));
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert!(config.credentials().is_none());
    }

    #[test]
    fn test_toml_overrides_defaults() {
        let config = WikiConfig::from_toml(
            r#"
            user_name = "Alice@bot"
            password = "hunter2"
            transfer_protocol = "http://"
            api_path = "/api.php"
            host = "wiki.local"
            "#,
        )
        .unwrap();

        assert_eq!(config.api_url("wiki.local"), "http://wiki.local/api.php");
        let creds = config.credentials().unwrap();
        assert_eq!(creds.username(), "Alice@bot");
        assert_eq!(creds.password(), "hunter2");
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let err = WikiConfig::from_toml("request_timeout_secs = 0").unwrap_err();
        assert!(err.to_string().contains("request_timeout_secs"));
    }

    #[test]
    fn test_empty_api_path_rejected() {
        assert!(WikiConfig::from_toml("api_path = \"\"").is_err());
    }

    #[test]
    fn test_debug_redacts_password() {
        let config = WikiConfig {
            password: Some("hunter2".into()),
            ..WikiConfig::default()
        };
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("<redacted>"));
    }
}
