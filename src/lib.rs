//! # ner-annotate
//!
//! Manual span annotation for building NER training data.
//!
//! Step through the lines of a text file, tag character ranges with entity
//! labels, and persist the result as JSON records ready for model training:
//!
//! ```json
//! [{"content": "Alice went to Paris.", "entities": [[0, 5, "PERSON"], [14, 19, "GPE"]]}]
//! ```
//!
//! ## Architecture
//!
//! - [`AnnotationStore`] - ordered, content-keyed record collection; the
//!   single source of truth for what has been tagged
//! - [`AnnotationSession`] - line navigation, row recording, atomic saves
//! - [`backends`] - optional classifiers that pre-fill span suggestions
//! - [`config`] - path validation and label-set resolution, run explicitly
//!   at startup
//!
//! Any front-end (the bundled interactive CLI, or a GUI) renders rows
//! derived from the store and hands edited rows back; it is never the
//! authority over what is recorded.
//!
//! ## Quick start
//!
//! ```rust
//! use ner_annotate::{AnnotationSession, SpanRow};
//! use std::path::PathBuf;
//!
//! let lines = vec!["Alice went to Paris.".to_string()];
//! let labels = vec!["PERSON".to_string(), "GPE".to_string()];
//! let mut session =
//!     AnnotationSession::new(lines, PathBuf::from("output.json"), labels).unwrap();
//!
//! session.record(&[SpanRow::new("PERSON", "Alice", 0, 5)]);
//! assert_eq!(session.records().len(), 1);
//! ```

#![warn(missing_docs)]

pub mod backends;
pub mod cli;
pub mod config;
mod error;
pub mod rows;
pub mod session;
pub mod span;
pub mod store;

pub use error::{Error, Result};
pub use rows::{collect_spans, SpanRow};
pub use session::{AnnotationSession, SaveOutcome};
pub use span::{char_slice, AnnotationRecord, EntitySpan, Suggestion};
pub use store::AnnotationStore;

/// Trait for classifier backends used in assist mode.
///
/// A classifier looks at one line of text and proposes labeled spans. The
/// session keeps only suggestions whose label is in its configured label
/// set, so backends are free to suggest anything they recognize.
pub trait Classifier: Send + Sync {
    /// Propose labeled spans for `text`, in position order.
    ///
    /// Offsets are character offsets over `text`, `end` exclusive.
    fn classify(&self, text: &str) -> Result<Vec<Suggestion>>;

    /// Registry name of the backend.
    fn name(&self) -> &'static str;

    /// One-line description.
    fn description(&self) -> &'static str {
        "Unknown classifier backend"
    }
}

/// A mock classifier for testing.
///
/// Returns a canned suggestion list regardless of input.
///
/// # Example
///
/// ```rust
/// use ner_annotate::{Classifier, MockClassifier, Suggestion};
///
/// let mock = MockClassifier::new("test-mock").with_suggestions(vec![Suggestion {
///     label: "PERSON".into(),
///     start: 0,
///     end: 5,
///     text: "Alice".into(),
/// }]);
/// assert_eq!(mock.classify("anything").unwrap().len(), 1);
/// ```
#[derive(Clone, Default)]
pub struct MockClassifier {
    name: &'static str,
    suggestions: Vec<Suggestion>,
}

impl MockClassifier {
    /// Create a new mock classifier.
    #[must_use]
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            suggestions: Vec::new(),
        }
    }

    /// Set the suggestions to return on classification.
    #[must_use]
    pub fn with_suggestions(mut self, suggestions: Vec<Suggestion>) -> Self {
        self.suggestions = suggestions;
        self
    }
}

impl Classifier for MockClassifier {
    fn classify(&self, _text: &str) -> Result<Vec<Suggestion>> {
        Ok(self.suggestions.clone())
    }

    fn name(&self) -> &'static str {
        self.name
    }

    fn description(&self) -> &'static str {
        "Mock classifier for testing"
    }
}
