//! Configuration for SVG banner output

use serde::Deserialize;

/// Configuration options for the rendered banner
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SvgConfig {
    /// Banner width in pixels
    pub width: u32,

    /// Banner height in pixels
    pub height: u32,

    /// Maximum quote line length in characters before wrapping
    pub max_line_chars: usize,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            width: 900,
            height: 200,
            max_line_chars: 80,
        }
    }
}

impl SvgConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the banner dimensions
    pub fn with_dimensions(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the wrap column for quote text
    pub fn with_max_line_chars(mut self, max: usize) -> Self {
        self.max_line_chars = max;
        self
    }
}
