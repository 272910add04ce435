//! SVG banner generation
//!
//! Produces the complete banner document as a string: both themed images
//! embedded as data URIs, the quote wrapped into stacked tspans, and the
//! author line below. Theme selection happens entirely in CSS via a
//! `prefers-color-scheme` media query; there is no runtime branching.

use crate::image::ThemedImage;
use crate::quote::Quote;

use super::SvgConfig;

/// Render a banner to an SVG string (with default configuration)
pub fn render_banner(image: &ThemedImage, quote: &Quote) -> String {
    render_banner_with_config(image, quote, &SvgConfig::default())
}

/// Render a banner to an SVG string with a custom configuration
///
/// Pure function: the same image, quote, and config always produce the same
/// document.
pub fn render_banner_with_config(
    image: &ThemedImage,
    quote: &Quote,
    config: &SvgConfig,
) -> String {
    let tspans = quote_tspans(&quote.quote, config.max_line_chars).join("\n      ");
    let author = escape_xml(&quote.author);

    format!(
        r#"<?xml version="1.0" encoding="utf-8"?>
<svg xmlns="http://www.w3.org/2000/svg"
     width="{width}" height="{height}" viewBox="0 0 {width} {height}" role="img" aria-label="Banner with image and quote">
  <defs>
    <style>
      .imageDark {{ display: inline }}
      .imageLight {{ display: none }}
      .bg {{ fill: none; }}
      .card {{ rx: 14; ry: 14; }}
      .quote {{ font-family: "Helvetica Neue", Arial, sans-serif; font-size: 20px; fill: #cccccc; font-weight: 500; }}
      .author {{ font-family: "Helvetica Neue", Arial, sans-serif; font-size: 14px; fill: #aaaaaa; font-weight: 600; }}
      .vertLine {{ stroke: #e6eef6 }}

      @media (prefers-color-scheme: light) {{
        .imageDark {{ display: none }}
        .imageLight {{ display: inline }}
        .quote {{ fill: #555555 }}
        .author {{ fill: #333333 }}
        .vertLine {{ stroke: #232323 }}
      }}
    </style>
  </defs>

  <!-- Background card -->
  <rect class="bg card" x="8" y="8" width="{card_width}" height="{card_height}" stroke="transparent" />

  <!-- Left image area (one variant per color scheme) -->
  <g transform="translate(30,20)">
    <image class="imageDark" width="160" height="160" href="{dark}"/>
    <image class="imageLight" width="160" height="160" href="{light}"/>
  </g>

  <!-- Right text area -->
  <g transform="translate(225,36)">
    <text class="quote" x="0" y="20">
      {tspans}
      <tspan class="author" x="0" dy="2.5em">&#8212; {author}</tspan>
    </text>
  </g>

  <!-- Decorative separator line -->
  <line class="vertLine" x1="200" y1="30" x2="200" y2="170" stroke-width="1" opacity="0.2"/>
</svg>
"#,
        width = config.width,
        height = config.height,
        card_width = config.width.saturating_sub(16),
        card_height = config.height.saturating_sub(16),
        dark = image.dark,
        light = image.light,
        tspans = tspans,
        author = author,
    )
}

/// Wrap a quote into tspan fragments, one per display line.
///
/// The first line carries `dy="0"`, every subsequent line `dy="1.3em"` so
/// the fragments stack vertically. Line content is XML-escaped.
pub fn quote_tspans(quote: &str, max_cols: usize) -> Vec<String> {
    wrap_lines(quote, max_cols)
        .into_iter()
        .enumerate()
        .map(|(i, line)| {
            let dy = if i == 0 { "0" } else { "1.3em" };
            format!(r#"<tspan x="0" dy="{}">{}</tspan>"#, dy, escape_xml(line))
        })
        .collect()
}

/// Greedy single-pass word wrap.
///
/// While more than `max_cols` characters remain, break at the first space at
/// or after character position `max_cols`. If no such space exists the
/// remainder stays on one line regardless of length; words are never split.
/// Positions count characters, not bytes.
fn wrap_lines(text: &str, max_cols: usize) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = text;

    while rest.chars().count() > max_cols {
        // Byte offset of the character at position `max_cols`
        let search_from = match rest.char_indices().nth(max_cols) {
            Some((offset, _)) => offset,
            None => break,
        };
        match rest[search_from..].find(' ') {
            Some(space) => {
                let split = search_from + space;
                lines.push(&rest[..split]);
                rest = &rest[split + 1..];
            }
            None => break,
        }
    }

    lines.push(rest);
    lines
}

/// Escape special XML characters
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn test_image() -> ThemedImage {
        ThemedImage {
            light: "data:image/png;base64,bGlnaHQ=".to_string(),
            dark: "data:image/png;base64,ZGFyaw==".to_string(),
        }
    }

    fn test_quote() -> Quote {
        Quote {
            quote: "Test quote".to_string(),
            author: "Test Author".to_string(),
        }
    }

    #[test]
    fn test_wrap_short_text_single_line() {
        assert_eq!(wrap_lines("Short quote", 80), vec!["Short quote"]);
    }

    #[test]
    fn test_wrap_exactly_at_limit_single_line() {
        let text = "a".repeat(80);
        assert_eq!(wrap_lines(&text, 80), vec![text.as_str()]);
    }

    #[test]
    fn test_wrap_long_spaceless_text_single_line() {
        let text = "a".repeat(85);
        assert_eq!(wrap_lines(&text, 80), vec![text.as_str()]);
    }

    #[test]
    fn test_wrap_breaks_at_first_space_after_limit() {
        let text = format!("{} tail words", "a".repeat(82));
        let lines = wrap_lines(&text, 80);
        assert_eq!(lines, vec!["a".repeat(82).as_str(), "tail words"]);
    }

    #[test]
    fn test_wrap_reconstructs_original_text() {
        let text = "This is a very long quote that should be broken into multiple \
                    lines because it exceeds the character limit for a single line \
                    in the SVG template";
        let lines = wrap_lines(text, 80);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(line.len() < text.len());
        }
        assert_eq!(lines.join(" "), text);
    }

    #[test]
    fn test_wrap_counts_characters_not_bytes() {
        // 82 two-byte characters then a space: must split at the space, not
        // panic on a byte boundary
        let head: String = "é".repeat(82);
        let text = format!("{} tail", head);
        let lines = wrap_lines(&text, 80);
        assert_eq!(lines, vec![head.as_str(), "tail"]);
    }

    #[test]
    fn test_quote_tspans_single_line_offsets() {
        let tspans = quote_tspans("Short quote", 80);
        assert_eq!(tspans.len(), 1);
        assert_eq!(tspans[0], r#"<tspan x="0" dy="0">Short quote</tspan>"#);
    }

    #[test]
    fn test_quote_tspans_stacked_offsets() {
        let text = format!("{} second line here", "a".repeat(81));
        let tspans = quote_tspans(&text, 80);
        assert_eq!(tspans.len(), 2);
        assert!(tspans[0].contains(r#"dy="0""#));
        assert!(tspans[1].contains(r#"dy="1.3em""#));
    }

    #[test]
    fn test_quote_tspans_escapes_content() {
        let tspans = quote_tspans("a < b & c", 80);
        assert_eq!(tspans[0], r#"<tspan x="0" dy="0">a &lt; b &amp; c</tspan>"#);
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a < b"), "a &lt; b");
        assert_eq!(escape_xml("a & b"), "a &amp; b");
        assert_eq!(escape_xml(r#"say "hi""#), "say &quot;hi&quot;");
        assert_eq!(escape_xml("it's"), "it&apos;s");
    }

    #[test]
    fn test_render_banner_structure() {
        let svg = render_banner(&test_image(), &test_quote());
        assert!(svg.starts_with("<?xml"));
        assert!(svg.contains("<svg"));
        assert!(svg.contains("</svg>"));
        assert!(svg.contains("xmlns"));
        assert!(svg.contains("Test quote"));
        assert!(svg.contains("Test Author"));
    }

    #[test]
    fn test_render_banner_embeds_both_theme_images() {
        let svg = render_banner(&test_image(), &test_quote());
        assert!(svg.contains("imageDark"));
        assert!(svg.contains("imageLight"));
        assert!(svg.contains("data:image/png;base64,ZGFyaw=="));
        assert!(svg.contains("data:image/png;base64,bGlnaHQ="));
    }

    #[test]
    fn test_render_banner_has_media_query() {
        let svg = render_banner(&test_image(), &test_quote());
        assert!(svg.contains("prefers-color-scheme"));
    }

    #[test]
    fn test_render_banner_escapes_quote_and_author() {
        let quote = Quote {
            quote: "Ship <fast> & break nothing".to_string(),
            author: r#"A "careful" person"#.to_string(),
        };
        let svg = render_banner(&test_image(), &quote);
        assert!(svg.contains("Ship &lt;fast&gt; &amp; break nothing"));
        assert!(svg.contains("A &quot;careful&quot; person"));
        assert!(!svg.contains("<fast>"));
    }

    #[test]
    fn test_render_banner_is_deterministic() {
        let a = render_banner(&test_image(), &test_quote());
        let b = render_banner(&test_image(), &test_quote());
        assert_eq!(a, b);
    }

    #[test]
    fn test_render_banner_custom_dimensions() {
        let config = SvgConfig::new().with_dimensions(600, 150);
        let svg = render_banner_with_config(&test_image(), &test_quote(), &config);
        assert!(svg.contains(r#"width="600" height="150""#));
        assert!(svg.contains(r#"viewBox="0 0 600 150""#));
    }
}
