//! Quote store loading and random selection
//!
//! The quote store is a JSON array of `{quote, author}` records. Loading is
//! deliberately forgiving: any failure (missing file, malformed JSON, empty
//! array) falls back to a fixed default quote so the render pipeline always
//! has something to draw.

use std::path::Path;

use rand::Rng;
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when reading the quote store
#[derive(Error, Debug)]
pub enum QuoteError {
    #[error("Failed to read quote store: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse quote store JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A single quote record
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Quote {
    pub quote: String,
    pub author: String,
}

impl Quote {
    /// The fallback used whenever the store cannot supply a quote
    pub fn fallback() -> Self {
        Quote {
            quote: "Where ever you go, there you are".to_string(),
            author: "me".to_string(),
        }
    }
}

/// Read and parse the quote store file into a list of records
pub fn read_quote_store(path: &Path) -> Result<Vec<Quote>, QuoteError> {
    let content = std::fs::read_to_string(path)?;
    let quotes: Vec<Quote> = serde_json::from_str(&content)?;
    Ok(quotes)
}

/// Load one quote from the store, selected uniformly at random.
///
/// Never fails: read/parse errors and an empty store both log to stderr and
/// yield [`Quote::fallback`].
pub fn load_quote(path: &Path) -> Quote {
    load_quote_with(path, |len| rand::rng().random_range(0..len))
}

/// Load one quote using an injectable index picker.
///
/// `pick` receives the store length (always > 0) and returns the index to
/// select. This is the seam for deterministic tests; [`load_quote`] plugs in
/// an unseeded random source.
pub fn load_quote_with<F>(path: &Path, pick: F) -> Quote
where
    F: FnOnce(usize) -> usize,
{
    let mut quotes = match read_quote_store(path) {
        Ok(quotes) => quotes,
        Err(e) => {
            eprintln!("Error reading or parsing '{}': {}", path.display(), e);
            return Quote::fallback();
        }
    };

    if quotes.is_empty() {
        eprintln!("Quote store '{}' is empty, using fallback", path.display());
        return Quote::fallback();
    }

    // Clamp so a misbehaving picker cannot index past the end
    let index = pick(quotes.len()).min(quotes.len() - 1);
    quotes.swap_remove(index)
}
