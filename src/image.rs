//! Base64 data-URI encoding for the themed image pair
//!
//! Images are embedded into the SVG as `data:image/<ext>;base64,...` URIs so
//! the banner is a single self-contained file. Unlike the quote store there
//! is no sensible fallback for a missing image, so failures here propagate.

use std::path::{Path, PathBuf};

use base64::{engine::general_purpose::STANDARD, Engine as _};
use thiserror::Error;

/// Errors that can occur when encoding an image file
#[derive(Error, Debug)]
pub enum ImageError {
    #[error("Failed to read image '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Image path '{0}' has no file extension")]
    MissingExtension(PathBuf),
}

/// A dark/light pair of data-URI encoded images.
///
/// Both variants are always present; the SVG embeds both and lets a CSS
/// media query decide which one is visible.
#[derive(Debug, Clone)]
pub struct ThemedImage {
    pub light: String,
    pub dark: String,
}

/// Encode an image file as a `data:` URI.
///
/// The MIME subtype is taken from the file extension as-is; the content is
/// not sniffed or validated.
pub fn image_to_base64(path: &Path) -> Result<String, ImageError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .ok_or_else(|| ImageError::MissingExtension(path.to_path_buf()))?;

    let bytes = std::fs::read(path).map_err(|source| ImageError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let encoded = STANDARD.encode(&bytes);
    Ok(format!("data:image/{};base64,{}", extension, encoded))
}

/// Load the dark/light variants for a base name.
///
/// Paths follow the fixed convention `<assets_dir>/<name>_dark.<ext>` and
/// `<assets_dir>/<name>_light.<ext>`. The first read failure propagates.
pub fn load_themed(assets_dir: &Path, name: &str, ext: &str) -> Result<ThemedImage, ImageError> {
    let dark_path = assets_dir.join(format!("{}_dark.{}", name, ext));
    let light_path = assets_dir.join(format!("{}_light.{}", name, ext));

    let dark = image_to_base64(&dark_path)?;
    let light = image_to_base64(&light_path)?;

    Ok(ThemedImage { light, dark })
}
