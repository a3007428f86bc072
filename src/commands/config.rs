//! Configuration commands.
//!
//! - `config show`: Display current configuration
//! - `config get`: Print one value, tokens masked
//! - `config set`: Set a configuration value

use owo_colors::OwoColorize;
use serde_json::json;

use super::CommandOutput;
use crate::config::Config;
use crate::error::{Result, TicketDeskError};
use crate::paths::config_path;

const VALID_KEYS: &[&str] = &[
    "api.url",
    "api.token",
    "request_timeout",
    "display.timezone",
];

/// Reject unknown keys, pointing underscore spellings at their dotted form
fn validate_config_key(key: &str) -> Result<&str> {
    if VALID_KEYS.contains(&key) {
        return Ok(key);
    }

    if let Some(pos) = key.find('_') {
        let dot_version = format!("{}.{}", &key[..pos], &key[pos + 1..]);
        if VALID_KEYS.contains(&dot_version.as_str()) {
            return Err(TicketDeskError::Config(format!(
                "invalid config key '{key}'. Use dot notation: '{dot_version}'"
            )));
        }
    }

    Err(unknown_key(key))
}

fn unknown_key(key: &str) -> TicketDeskError {
    TicketDeskError::Config(format!(
        "unknown config key '{key}'. Valid keys: {}",
        VALID_KEYS.join(", ")
    ))
}

/// Mask a sensitive value by showing only the first 2 and last 2 characters
fn mask_sensitive_value(value: &str) -> String {
    let char_count = value.chars().count();
    if char_count > 4 {
        let first: String = value.chars().take(2).collect();
        let last: String = value.chars().skip(char_count - 2).collect();
        format!("{first}...{last}")
    } else {
        "****".to_string()
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value.parse::<T>().map_err(|_| {
        TicketDeskError::Config(format!(
            "invalid value '{value}' for {key}. Expected a non-negative integer"
        ))
    })
}

/// Show current configuration
pub fn cmd_config_show(json: bool) -> Result<()> {
    let config = Config::load()?;
    let api_url = config.api_url()?;
    let token = config.api_token().map(|t| mask_sensitive_value(&t));
    let timezone = config.display.timezone.clone();

    let json_output = json!({
        "api": {
            "url": api_url.as_str(),
            "token": token,
            "token_configured": token.is_some(),
        },
        "request_timeout": config.request_timeout,
        "display": {
            "timezone": timezone.as_deref().unwrap_or("UTC"),
        },
        "config_file": config_path().to_string_lossy(),
    });

    let mut text = format!("{}\n\n", "Configuration:".cyan().bold());
    text.push_str(&format!("{}:\n", "api".cyan()));
    text.push_str(&format!("  url: {api_url}\n"));
    match &token {
        Some(masked) => text.push_str(&format!("  token: {}\n", masked.green())),
        None => text.push_str(&format!("  token: {}\n", "not configured".dimmed())),
    }
    text.push('\n');
    text.push_str(&format!(
        "{}: {}s\n",
        "request_timeout".cyan(),
        config.request_timeout
    ));
    text.push('\n');
    text.push_str(&format!("{}:\n", "display".cyan()));
    text.push_str(&format!(
        "  timezone: {}\n",
        timezone.as_deref().unwrap_or("UTC")
    ));
    text.push('\n');
    text.push_str(
        &format!("Config file: {}", config_path().display())
            .dimmed()
            .to_string(),
    );

    CommandOutput::new(json_output).with_text(text).print(json)
}

/// Set a configuration value
pub fn cmd_config_set(key: &str, value: &str, json: bool) -> Result<()> {
    validate_config_key(key)?;

    let mut config = Config::load()?;
    let shown_value = match key {
        "api.url" => {
            config.set_api_url(value)?;
            value.to_string()
        }
        "api.token" => {
            config.set_api_token(value.to_string());
            mask_sensitive_value(value)
        }
        "request_timeout" => {
            config.set_request_timeout(parse_number(key, value)?)?;
            value.to_string()
        }
        "display.timezone" => {
            config.set_timezone(value)?;
            value.to_string()
        }
        other => return Err(unknown_key(other)),
    };
    config.save()?;

    let json_output = json!({
        "action": "config_set",
        "key": key,
        "value": shown_value,
        "success": true,
    });
    let text = format!("Set {} to {}", key.cyan(), shown_value);

    CommandOutput::new(json_output).with_text(text).print(json)
}

/// Get a specific configuration value
pub fn cmd_config_get(key: &str, json: bool) -> Result<()> {
    validate_config_key(key)?;

    let config = Config::load()?;
    let (value, masked) = match key {
        "api.url" => (config.api_url()?.to_string(), false),
        "api.token" => match config.api_token() {
            Some(token) => (mask_sensitive_value(&token), true),
            None => return Err(TicketDeskError::Config("api.token not set".to_string())),
        },
        "request_timeout" => (config.request_timeout.to_string(), false),
        "display.timezone" => (
            config
                .display
                .timezone
                .clone()
                .unwrap_or_else(|| "UTC".to_string()),
            false,
        ),
        other => return Err(unknown_key(other)),
    };

    let json_output = json!({
        "key": key,
        "value": value,
        "masked": masked,
    });
    let text = if masked {
        format!("{value} (masked - showing first 2 and last 2 characters)")
    } else {
        value
    };

    CommandOutput::new(json_output).with_text(text).print(json)
}
