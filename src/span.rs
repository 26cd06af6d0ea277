//! Entity spans and annotation records.
//!
//! The output file is a JSON array of records, each record pairing one line
//! of input text with its labeled spans:
//!
//! ```json
//! [{"content": "Alice went to Paris.", "entities": [[0, 5, "PERSON"], [14, 19, "GPE"]]}]
//! ```
//!
//! Spans are serialized as `[start, end, label]` triples, the shape consumed
//! by downstream NER training pipelines. Offsets count characters over the
//! owning line, `end` exclusive.

use serde::de::{Deserializer, Error as DeError};
use serde::ser::{SerializeTuple, Serializer};
use serde::{Deserialize, Serialize};

/// A labeled character range within one line of text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntitySpan {
    /// Start offset in characters (inclusive).
    pub start: usize,
    /// End offset in characters (exclusive, always > start).
    pub end: usize,
    /// Entity label, e.g. "PERSON".
    pub label: String,
}

impl EntitySpan {
    /// Create a new span. Validity (`end > start`) is the caller's business;
    /// use [`EntitySpan::is_valid`] before storing.
    #[must_use]
    pub fn new(start: usize, end: usize, label: impl Into<String>) -> Self {
        Self {
            start,
            end,
            label: label.into(),
        }
    }

    /// A span is valid when it covers at least one character.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.end > self.start
    }
}

// Wire shape is the [start, end, label] triple, not a JSON object.
impl Serialize for EntitySpan {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tup = serializer.serialize_tuple(3)?;
        tup.serialize_element(&self.start)?;
        tup.serialize_element(&self.end)?;
        tup.serialize_element(&self.label)?;
        tup.end()
    }
}

impl<'de> Deserialize<'de> for EntitySpan {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let (start, end, label) = <(usize, usize, String)>::deserialize(deserializer)?;
        if end <= start {
            return Err(D::Error::custom(format!(
                "invalid span: end ({end}) must be greater than start ({start})"
            )));
        }
        Ok(Self { start, end, label })
    }
}

/// The entity spans recorded for one distinct line of input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationRecord {
    /// One line of the input file. Primary key within a session.
    pub content: String,
    /// Labeled spans over `content`, in the order the user added them.
    pub entities: Vec<EntitySpan>,
}

impl AnnotationRecord {
    /// Create a record.
    #[must_use]
    pub fn new(content: impl Into<String>, entities: Vec<EntitySpan>) -> Self {
        Self {
            content: content.into(),
            entities,
        }
    }
}

/// A classifier suggestion: a labeled span plus its surface text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    /// Suggested entity label.
    pub label: String,
    /// Start offset in characters.
    pub start: usize,
    /// End offset in characters (exclusive).
    pub end: usize,
    /// The covered text.
    pub text: String,
}

/// Slice `text` by character offsets, clamping out-of-range requests.
#[must_use]
pub fn char_slice(text: &str, start: usize, end: usize) -> String {
    if end <= start {
        return String::new();
    }
    text.chars().skip(start).take(end - start).collect()
}
