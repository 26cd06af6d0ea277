//! Lexicon classifier - suggests spans from a label-to-phrases lexicon.
//!
//! The model file is a JSON object mapping each label to the surface
//! phrases that should be suggested under it:
//!
//! ```json
//! {"PERSON": ["Alice", "Bob"], "GPE": ["Paris"]}
//! ```
//!
//! Matching is exact and case-sensitive; overlapping matches are resolved
//! by position, longest first.

use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{Error, Result};
use crate::span::Suggestion;
use crate::Classifier;

use super::to_char_span;

/// Phrase-lexicon classifier, the stand-in for a trained NER model.
pub struct LexiconClassifier {
    // BTreeMap keeps suggestion order deterministic across runs.
    entries: BTreeMap<String, Vec<String>>,
}

impl LexiconClassifier {
    /// Load a lexicon from a JSON model file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            Error::model_init(format!("could not read model file '{}': {e}", path.display()))
        })?;
        let entries: BTreeMap<String, Vec<String>> =
            serde_json::from_str(&text).map_err(|e| {
                Error::model_init(format!("invalid lexicon model '{}': {e}", path.display()))
            })?;
        if entries.is_empty() {
            return Err(Error::model_init(format!(
                "lexicon model '{}' has no entries",
                path.display()
            )));
        }
        Ok(Self { entries })
    }

    /// Build a lexicon directly, for tests and embedding.
    #[must_use]
    pub fn from_entries(entries: BTreeMap<String, Vec<String>>) -> Self {
        Self { entries }
    }
}

impl Classifier for LexiconClassifier {
    fn classify(&self, text: &str) -> Result<Vec<Suggestion>> {
        let mut matches = Vec::new();
        for (label, phrases) in &self.entries {
            for phrase in phrases {
                if phrase.is_empty() {
                    continue;
                }
                for (byte_start, found) in text.match_indices(phrase.as_str()) {
                    let (start, end) = to_char_span(text, byte_start, byte_start + found.len());
                    matches.push(Suggestion {
                        label: label.clone(),
                        start,
                        end,
                        text: found.to_string(),
                    });
                }
            }
        }

        // Position order, longest match first when two start together.
        matches.sort_by(|a, b| a.start.cmp(&b.start).then(b.end.cmp(&a.end)));

        let mut kept: Vec<Suggestion> = Vec::new();
        for m in matches {
            if kept.iter().all(|k| m.start >= k.end || m.end <= k.start) {
                kept.push(m);
            }
        }
        Ok(kept)
    }

    fn name(&self) -> &'static str {
        "lexicon"
    }

    fn description(&self) -> &'static str {
        "Phrase-lexicon matching from a JSON model file"
    }
}
