//! Banner configuration
//!
//! File paths and naming conventions are configuration, not code: a TOML
//! file (or CLI flags layered on top of it) supplies the quote store path,
//! the assets directory, the image base name, and the output path.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::renderer::SvgConfig;

/// Errors that can occur when loading or parsing a configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Configuration for one banner generation run
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BannerConfig {
    /// Path to the JSON quote store
    pub quotes: PathBuf,

    /// Directory holding the themed image pairs
    pub assets_dir: PathBuf,

    /// Image base name; resolved as `<assets_dir>/<image>_{dark,light}.<image_ext>`
    pub image: String,

    /// Image file extension (fixed naming convention, not sniffed)
    pub image_ext: String,

    /// Output path for the rendered SVG
    pub output: PathBuf,

    /// SVG output options
    pub svg: SvgConfig,
}

impl Default for BannerConfig {
    fn default() -> Self {
        Self {
            quotes: PathBuf::from("assets/quotes.json"),
            assets_dir: PathBuf::from("assets"),
            image: "iroh".to_string(),
            image_ext: "png".to_string(),
            output: PathBuf::from("quote-banner.svg"),
            svg: SvgConfig::default(),
        }
    }
}

impl BannerConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Load configuration from a TOML string
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Set the quote store path
    pub fn with_quotes(mut self, path: impl Into<PathBuf>) -> Self {
        self.quotes = path.into();
        self
    }

    /// Set the assets directory
    pub fn with_assets_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.assets_dir = dir.into();
        self
    }

    /// Set the image base name
    pub fn with_image(mut self, name: impl Into<String>) -> Self {
        self.image = name.into();
        self
    }

    /// Set the output path
    pub fn with_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = path.into();
        self
    }

    /// Set the SVG output options
    pub fn with_svg(mut self, svg: SvgConfig) -> Self {
        self.svg = svg;
        self
    }
}
