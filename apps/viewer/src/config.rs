//! Viewer configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use vocab_core::AggregatorSettings;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    #[serde(flatten)]
    pub settings: AggregatorSettings,
    pub viewport_width: f64,
    pub viewport_height: f64,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            settings: AggregatorSettings::default(),
            viewport_width: 1024.0,
            viewport_height: 768.0,
        }
    }
}

impl ViewerConfig {
    /// Load from the process environment, reading `.env` first if present.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build from a variable lookup. Unset variables keep their defaults.
    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup("VOCAB_DEBOUNCE_MS") {
            config.settings.debounce_ms = value
                .trim()
                .parse()
                .with_context(|| format!("invalid VOCAB_DEBOUNCE_MS: {value}"))?;
        }
        if let Some(value) = lookup("VOCAB_LOOKAHEAD_PX") {
            config.settings.lookahead_margin_px = value
                .trim()
                .parse()
                .with_context(|| format!("invalid VOCAB_LOOKAHEAD_PX: {value}"))?;
        }
        if let Some(value) = lookup("VOCAB_VIEWPORT_WIDTH") {
            config.viewport_width = value
                .trim()
                .parse()
                .with_context(|| format!("invalid VOCAB_VIEWPORT_WIDTH: {value}"))?;
        }
        if let Some(value) = lookup("VOCAB_VIEWPORT_HEIGHT") {
            config.viewport_height = value
                .trim()
                .parse()
                .with_context(|| format!("invalid VOCAB_VIEWPORT_HEIGHT: {value}"))?;
        }

        Ok(config)
    }

    /// Parse a JSON settings document. Missing keys keep their defaults.
    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).context("invalid viewer config JSON")
    }
}
