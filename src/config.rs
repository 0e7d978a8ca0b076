//! Configuration for the media store
//!
//! Optional settings loaded from `media-store.toml` with environment
//! overrides. Every field has a platform default, so a missing file is fine.

use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

/// Default name of the subdirectory holding persisted files.
pub const DEFAULT_MEDIA_DIR: &str = "Media";

/// Store configuration with platform defaults
#[derive(Debug, Deserialize, Clone)]
pub struct StoreConfig {
    /// Base directory for persisted files (defaults to the platform documents dir)
    pub base_dir: Option<PathBuf>,

    /// Directory for temp copies (defaults to the system temp dir)
    pub temp_dir: Option<PathBuf>,

    /// Name of the default subdirectory under the base directory
    #[serde(default = "default_media_dir")]
    pub media_dir: String,
}

fn default_media_dir() -> String {
    DEFAULT_MEDIA_DIR.to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            base_dir: None,
            temp_dir: None,
            media_dir: default_media_dir(),
        }
    }
}

impl StoreConfig {
    /// Load configuration from media-store.toml with environment overrides.
    ///
    /// The file is optional; environment variables use the `MEDIA_STORE`
    /// prefix (e.g. `MEDIA_STORE_MEDIA_DIR`).
    pub fn load() -> Result<Self, config::ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("media-store").required(false))
            .add_source(Environment::with_prefix("MEDIA_STORE"))
            .build()?;

        let config: StoreConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    pub fn validate(&self) -> Result<(), config::ConfigError> {
        if self.media_dir.is_empty() {
            return Err(config::ConfigError::Message(
                "media_dir cannot be empty".into(),
            ));
        }

        if self.media_dir.contains('/') || self.media_dir.contains('\\') {
            return Err(config::ConfigError::Message(
                "media_dir must be a single path component".into(),
            ));
        }

        Ok(())
    }
}
