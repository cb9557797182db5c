//! Configuration for the income tax filing system.
//!
//! The configuration document is compiled into the binary; nothing is read
//! from disk at runtime.

use incometax_types::{Banner, DEFAULT_SUBTITLE, DEFAULT_TITLE, NonEmptyString};
use serde::Deserialize;
use thiserror::Error;

// Default value functions for serde (bool::default() is false, so only true needs a fn)
const fn default_true() -> bool {
    true
}

fn default_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

pub const DEFAULT_LOG_LEVEL: &str = "info";

const EMBEDDED_CONFIG: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/incometax.toml"
));

#[derive(Debug, Default, Deserialize)]
pub struct IncomeTaxConfig {
    #[serde(default)]
    pub banner: BannerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse configuration: {source}")]
    Parse {
        #[from]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Deserialize)]
pub struct BannerConfig {
    pub title: NonEmptyString,
    pub subtitle: NonEmptyString,
}

impl Default for BannerConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.into(),
            subtitle: DEFAULT_SUBTITLE.into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log filter directive. Default: "info".
    #[serde(default = "default_level")]
    pub level: String,
    /// Colourize log output. Default: false.
    #[serde(default)]
    pub ansi: bool,
    /// Prefix each log line with a timestamp. Default: true.
    #[serde(default = "default_true")]
    pub timestamps: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            ansi: false,
            timestamps: true,
        }
    }
}

impl IncomeTaxConfig {
    /// Parse the configuration compiled into the binary.
    pub fn embedded() -> Result<Self, ConfigError> {
        Self::from_toml_str(EMBEDDED_CONFIG)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }

    #[must_use]
    pub fn banner(&self) -> Banner {
        Banner::new(self.banner.title.clone(), self.banner.subtitle.clone())
    }
}
