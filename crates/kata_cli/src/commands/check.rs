//! Check command implementation
//!
//! Validates and prints the effective configuration.

use serde_json::Value;
use tracing::info;

use crate::config::KataConfig;
use crate::Result;

/// Run the check command
pub fn run(config: &KataConfig) -> Result<Value> {
    info!("Checking configuration...");
    config.validate()?;
    let rendered = config.to_toml()?;
    info!("Configuration OK");
    Ok(Value::String(rendered.trim_end().to_string()))
}
