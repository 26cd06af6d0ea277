//! Classifier backends for assisted annotation.
//!
//! Each backend implements the [`Classifier`](crate::Classifier) trait and
//! pre-fills span suggestions for the line being annotated. Backends are
//! looked up through an explicit registry by name rather than discovered
//! dynamically, so the caller always states which implementation it wants.
//!
//! | Backend | Model file | Suggests |
//! |---------|-----------|----------|
//! | `lexicon` | required | labels from a phrase lexicon |
//! | `pattern` | ignored | DATE / MONEY / PERCENT / EMAIL / URL |
//!
//! Suggestions only reach the annotation table when their label is in the
//! session's configured label set; everything else is discarded.

use std::path::Path;

use crate::error::{Error, Result};
use crate::Classifier;

pub mod lexicon;
pub mod pattern;

pub use lexicon::LexiconClassifier;
pub use pattern::PatternClassifier;

/// Create a classifier backend by registry name.
///
/// `model` is the path given on the command line; the `lexicon` backend
/// requires it, the `pattern` backend ignores it.
pub fn create(name: &str, model: Option<&Path>) -> Result<Box<dyn Classifier>> {
    match name.to_lowercase().as_str() {
        "lexicon" => {
            let path = model.ok_or_else(|| {
                Error::config("the lexicon backend requires a model file (--model)")
            })?;
            Ok(Box::new(LexiconClassifier::from_path(path)?))
        }
        "pattern" => Ok(Box::new(PatternClassifier::new())),
        other => Err(Error::config(format!("unknown backend '{other}'"))),
    }
}

/// Registry names of all built-in backends.
#[must_use]
pub fn available() -> &'static [&'static str] {
    &["lexicon", "pattern"]
}

/// Convert a byte range produced by string search into character offsets.
pub(crate) fn to_char_span(text: &str, byte_start: usize, byte_end: usize) -> (usize, usize) {
    let start = text[..byte_start].chars().count();
    let end = start + text[byte_start..byte_end].chars().count();
    (start, end)
}
