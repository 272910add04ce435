//! SVG file writing
//!
//! The writer is a log-and-continue boundary: a failed write is reported but
//! never propagated, so a run with a write failure still exits cleanly with
//! no artifact produced.

use std::path::Path;

/// Write the rendered SVG to disk, overwriting any existing file.
///
/// Returns whether the write succeeded; both outcomes are also reported
/// (success to stdout, failure to stderr). Callers that need the artifact
/// must treat a reported failure as "no output produced".
pub fn save_svg(path: &Path, content: &str) -> bool {
    match std::fs::write(path, content) {
        Ok(()) => {
            println!("Successfully created {}", path.display());
            true
        }
        Err(e) => {
            eprintln!("Error writing SVG file '{}': {}", path.display(), e);
            false
        }
    }
}
