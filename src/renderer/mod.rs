//! SVG renderer for the banner
//!
//! This module takes a themed image pair and a quote and produces the
//! complete SVG document string.

pub mod config;
pub mod svg;

pub use config::SvgConfig;
pub use svg::{quote_tspans, render_banner, render_banner_with_config};
