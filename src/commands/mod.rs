mod config;
mod dashboard;
mod show;
mod update;

pub use config::{cmd_config_get, cmd_config_set, cmd_config_show};
pub use dashboard::cmd_dashboard;
pub use show::cmd_show;
pub use update::{cmd_assign_pro, cmd_intake_date, cmd_intake_done, parse_intake_date};

use serde_json::Value;

use crate::api::HttpBackend;
use crate::config::Config;
use crate::error::Result;

/// Print a JSON value to stdout, pretty-printed
pub fn print_json(value: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Output of a command in both machine and human form
pub struct CommandOutput {
    json: Value,
    text: Option<String>,
}

impl CommandOutput {
    pub fn new(json: Value) -> Self {
        Self { json, text: None }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Print as JSON when `json` is set, otherwise the text form.
    ///
    /// Falls back to JSON when no text form was given.
    pub fn print(self, json: bool) -> Result<()> {
        match (json, self.text) {
            (false, Some(text)) => {
                println!("{text}");
                Ok(())
            }
            _ => print_json(&self.json),
        }
    }
}

/// Load configuration and build the HTTP backend it describes
fn connect() -> Result<(Config, HttpBackend)> {
    let config = Config::load()?;
    let backend = HttpBackend::from_config(&config)?;
    tracing::debug!(url = %backend.base_url(), "using ticket API");
    Ok((config, backend))
}
