//! Quote Banner - theme-aware SVG quote banner generator
//!
//! This library reads a JSON quote store, picks one quote at random, embeds
//! a dark/light image pair as base64 data URIs, and renders everything into
//! a single self-contained SVG suitable for a README banner.
//!
//! # Example
//!
//! ```rust,no_run
//! use quote_banner::{generate, BannerConfig};
//!
//! let config = BannerConfig::default();
//! let svg = generate(&config).unwrap();
//! assert!(svg.starts_with("<?xml"));
//! ```

pub mod config;
pub mod image;
pub mod output;
pub mod quote;
pub mod renderer;

pub use config::{BannerConfig, ConfigError};
pub use image::{ImageError, ThemedImage};
pub use quote::{Quote, QuoteError};
pub use renderer::{render_banner, render_banner_with_config, SvgConfig};

use thiserror::Error;

/// Errors that can occur during the generation pipeline.
///
/// Quote-store failures never surface here: the loader substitutes the
/// fallback quote at the smallest scope that has a sensible default. Image
/// failures have no fallback and propagate.
#[derive(Debug, Error)]
pub enum BannerError {
    /// Error loading the themed image pair
    #[error("image error: {0}")]
    Image(#[from] ImageError),

    /// Error loading a configuration file
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

/// Run the generation pipeline and return the rendered SVG.
///
/// Loads a random quote (falling back to the default on any store failure),
/// encodes the dark/light image pair, and renders the banner. The only
/// failure path is a missing or unreadable image.
pub fn generate(config: &BannerConfig) -> Result<String, BannerError> {
    let quote = quote::load_quote(&config.quotes);
    let image = image::load_themed(&config.assets_dir, &config.image, &config.image_ext)?;
    Ok(renderer::render_banner_with_config(
        &image,
        &quote,
        &config.svg,
    ))
}

/// Load a TOML configuration file and run the pipeline with it
pub fn generate_from_file(config_path: &std::path::Path) -> Result<String, BannerError> {
    let config = BannerConfig::from_file(config_path)?;
    generate(&config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_generate_full_pipeline() {
        let dir = tempfile::tempdir().expect("temp dir");
        fs::write(
            dir.path().join("quotes.json"),
            r#"[{"quote":"Only quote","author":"Only Author"}]"#,
        )
        .expect("write store");
        fs::write(dir.path().join("iroh_dark.png"), b"dark").expect("write dark");
        fs::write(dir.path().join("iroh_light.png"), b"light").expect("write light");

        let config = BannerConfig::new()
            .with_quotes(dir.path().join("quotes.json"))
            .with_assets_dir(dir.path());

        let svg = generate(&config).expect("should generate");
        assert!(svg.starts_with("<?xml"));
        assert!(svg.contains("Only quote"));
        assert!(svg.contains("Only Author"));
        assert!(svg.contains("prefers-color-scheme"));
    }

    #[test]
    fn test_generate_missing_quote_store_uses_fallback() {
        let dir = tempfile::tempdir().expect("temp dir");
        fs::write(dir.path().join("iroh_dark.png"), b"dark").expect("write dark");
        fs::write(dir.path().join("iroh_light.png"), b"light").expect("write light");

        let config = BannerConfig::new()
            .with_quotes(dir.path().join("absent.json"))
            .with_assets_dir(dir.path());

        let svg = generate(&config).expect("should generate");
        assert!(svg.contains("Where ever you go, there you are"));
    }

    #[test]
    fn test_generate_missing_image_fails() {
        let dir = tempfile::tempdir().expect("temp dir");
        fs::write(
            dir.path().join("quotes.json"),
            r#"[{"quote":"Only quote","author":"Only Author"}]"#,
        )
        .expect("write store");

        let config = BannerConfig::new()
            .with_quotes(dir.path().join("quotes.json"))
            .with_assets_dir(dir.path());

        let result = generate(&config);
        assert!(matches!(result, Err(BannerError::Image(_))));
    }
}
