use bemkit::{BemResult, Composer, Separators};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, instrument};

pub const DEFAULT_CONFIG_NAME: &str = "bem.config.json";

/// bem configuration file format
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Separator tokens used when composing class names
    #[serde(default)]
    pub separators: Separators,
}

impl Config {
    /// Load config from a directory
    #[instrument]
    pub fn load(cwd: &str) -> BemResult<Self> {
        let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            debug!(path = %config_path.display(), "loading config");
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Apply command-line separator overrides on top of the file
    pub fn with_overrides(mut self, element: Option<String>, modifier: Option<String>) -> Self {
        if let Some(element) = element {
            self.separators.element = element;
        }
        if let Some(modifier) = modifier {
            self.separators.modifier = modifier;
        }
        self
    }

    pub fn composer(&self) -> BemResult<Composer> {
        Composer::with_separators(self.separators.clone())
    }
}
