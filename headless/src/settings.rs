use anyhow::{Context, Result};
use game_core::{AiConfig, Config};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Tuning file: `[game]` and `[ai]` tables, every key optional
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub game: Config,
    pub ai: AiConfig,
}

impl Settings {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let settings: Settings = toml::from_str(content).context("invalid settings")?;
        settings.game.validate().context("invalid [game] settings")?;
        settings.ai.validate().context("invalid [ai] settings")?;
        Ok(settings)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_toml_str(&content).with_context(|| format!("failed to parse {}", path.display()))
    }
}
