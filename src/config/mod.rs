use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_range, validate_url, Validate};
use serde::{Deserialize, Serialize};

/// Fixed values of the activation procedure. `Default` carries the pinned
/// constants; overriding them is only expected in embedding tests.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivatorConfig {
    pub tag_name: String,

    /// Well-known global names probed before the full-bindings scan, in order.
    pub factory_globals: Vec<String>,

    /// Same-origin path of the local bundle, resolved against the page base URL.
    pub bundle_path: String,

    /// Version-pinned remote bundle used as the last-resort strategy.
    pub cdn_url: String,

    pub preload: bool,

    pub ready_delay_ms: u64,
    pub fallback_delay_ms: u64,
}

impl Default for ActivatorConfig {
    fn default() -> Self {
        Self {
            tag_name: "asciinema-player".to_string(),
            factory_globals: [
                "AsciinemaPlayer",
                "asciinemaPlayer",
                "Asciinema",
                "asciinema",
                "AsciinemaPlayerJS",
            ]
            .iter()
            .map(|name| name.to_string())
            .collect(),
            bundle_path: "./asciinema-player.min.js".to_string(),
            cdn_url:
                "https://cdn.jsdelivr.net/npm/asciinema-player@3.11.1/dist/asciinema-player.min.js"
                    .to_string(),
            preload: true,
            ready_delay_ms: 200,
            fallback_delay_ms: 600,
        }
    }
}

impl ActivatorConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }
}

impl Validate for ActivatorConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("tag_name", &self.tag_name)?;
        validate_non_empty_string("bundle_path", &self.bundle_path)?;
        validate_url("cdn_url", &self.cdn_url)?;
        validate_range("ready_delay_ms", self.ready_delay_ms, 0, 60_000)?;
        validate_range("fallback_delay_ms", self.fallback_delay_ms, 0, 60_000)?;
        Ok(())
    }
}
