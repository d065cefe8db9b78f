//! Startup configuration loading.

use std::path::Path;

use anyhow::{Context, Result};

use serpix_sim::SimConfig;

/// Parse and validate a TOML simulation config. Missing keys take defaults.
pub fn sim_config_from_toml_str(raw: &str) -> Result<SimConfig> {
    let config: SimConfig =
        toml::from_str(raw).context("sim config TOML failed schema deserialization")?;
    config
        .game
        .validate()
        .context("sim config failed validation")?;
    Ok(config)
}

pub fn load_sim_config(path: &Path) -> Result<SimConfig> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read sim config from {}", path.display()))?;
    sim_config_from_toml_str(&raw)
        .with_context(|| format!("failed to parse sim config from {}", path.display()))
}
