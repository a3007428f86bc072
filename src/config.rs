//! Top-level application configuration.
//!
//! Configuration is stored in `.ticketdesk/config.yaml` and includes:
//! - The ticket API base URL and optional bearer token
//! - Request timeout
//! - Display time zone for dates

use std::env;
use std::fmt;
use std::fs;
use std::time::Duration;

use jiff::tz::TimeZone;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{Result, TicketDeskError};
use crate::paths::config_path;

pub const API_URL_ENV: &str = "TICKETDESK_API_URL";
pub const API_TOKEN_ENV: &str = "TICKETDESK_API_TOKEN";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Ticket API connection settings
    #[serde(default)]
    pub api: ApiConfig,

    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,

    /// Display settings
    #[serde(default, skip_serializing_if = "DisplayConfig::is_default")]
    pub display: DisplayConfig,
}

fn default_request_timeout() -> u64 {
    30
}

fn default_api_url() -> String {
    "http://localhost:8000/api/".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            request_timeout: default_request_timeout(),
            display: DisplayConfig::default(),
        }
    }
}

/// Ticket API connection settings
#[derive(Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_api_url")]
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            url: default_api_url(),
            token: None,
        }
    }
}

impl fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiConfig")
            .field("url", &self.url)
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

/// Display settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// IANA time zone name used for dates (default: UTC)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}

impl DisplayConfig {
    pub fn is_default(&self) -> bool {
        self.timezone.is_none()
    }
}

impl Config {
    /// Load configuration from file, or return default if not found
    pub fn load() -> Result<Self> {
        let path = config_path();
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path).map_err(|e| {
            TicketDeskError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read config at {}: {}", path.display(), e),
            ))
        })?;
        let config: Config = serde_yaml_ng::from_str(&content)?;
        validate_request_timeout(config.request_timeout)?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let path = config_path();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                TicketDeskError::Io(std::io::Error::new(
                    e.kind(),
                    format!(
                        "Failed to create directory for config at {}: {}",
                        parent.display(),
                        e
                    ),
                ))
            })?;
        }

        let content = serde_yaml_ng::to_string(self)?;
        fs::write(&path, content).map_err(|e| {
            TicketDeskError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to write config at {}: {}", path.display(), e),
            ))
        })?;

        // Owner read/write only, the file may hold a token
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let permissions = fs::Permissions::from_mode(0o600);
            fs::set_permissions(&path, permissions)?;
        }

        Ok(())
    }

    /// API base URL from environment or config file.
    ///
    /// A trailing slash is added so relative endpoint paths join under it.
    pub fn api_url(&self) -> Result<Url> {
        let raw = match env::var(API_URL_ENV) {
            Ok(url) if !url.is_empty() => url,
            _ => self.api.url.clone(),
        };
        parse_base_url(&raw)
    }

    /// API token from environment or config file
    pub fn api_token(&self) -> Option<String> {
        if let Ok(token) = env::var(API_TOKEN_ENV)
            && !token.is_empty()
        {
            return Some(token);
        }

        self.api.token.clone()
    }

    pub fn set_api_url(&mut self, url: &str) -> Result<()> {
        parse_base_url(url)?;
        self.api.url = url.to_string();
        Ok(())
    }

    pub fn set_api_token(&mut self, token: String) {
        self.api.token = Some(token);
    }

    /// Get the request timeout duration
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }

    pub fn set_request_timeout(&mut self, seconds: u64) -> Result<()> {
        validate_request_timeout(seconds)?;
        self.request_timeout = seconds;
        Ok(())
    }

    /// Time zone used when formatting dates
    pub fn timezone(&self) -> Result<TimeZone> {
        match &self.display.timezone {
            None => Ok(TimeZone::UTC),
            Some(name) => TimeZone::get(name).map_err(|e| {
                TicketDeskError::Config(format!("unknown time zone '{name}': {e}"))
            }),
        }
    }

    pub fn set_timezone(&mut self, name: &str) -> Result<()> {
        TimeZone::get(name)
            .map_err(|e| TicketDeskError::Config(format!("unknown time zone '{name}': {e}")))?;
        self.display.timezone = Some(name.to_string());
        Ok(())
    }
}

fn validate_request_timeout(seconds: u64) -> Result<()> {
    if seconds == 0 {
        return Err(TicketDeskError::Config(
            "request_timeout must be at least 1 second".to_string(),
        ));
    }
    Ok(())
}

fn parse_base_url(raw: &str) -> Result<Url> {
    let with_slash = if raw.ends_with('/') {
        raw.to_string()
    } else {
        format!("{raw}/")
    };
    let url = Url::parse(&with_slash)
        .map_err(|e| TicketDeskError::Config(format!("invalid API URL '{raw}': {e}")))?;
    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(TicketDeskError::Config(format!(
            "invalid API URL '{raw}': expected an http or https URL"
        )));
    }
    Ok(url)
}
