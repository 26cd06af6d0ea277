//! Span rows: the editable table behind the annotation view.
//!
//! A row holds its cells as strings, exactly as a user-edited table does.
//! Turning rows into spans is deliberately lenient: rows with an empty
//! label, non-numeric offsets, or a degenerate range are dropped silently
//! rather than raised as errors.

use crate::span::{char_slice, EntitySpan, Suggestion};

/// One row of the span table, all cells as entered.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpanRow {
    /// Entity label cell.
    pub label: String,
    /// Covered text cell (display only; offsets are authoritative).
    pub value: String,
    /// Start offset cell.
    pub start: String,
    /// End offset cell.
    pub end: String,
}

impl SpanRow {
    /// Build a row from known-good offsets.
    #[must_use]
    pub fn new(label: impl Into<String>, value: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            start: start.to_string(),
            end: end.to_string(),
        }
    }

    /// Build a row from a stored span, re-slicing the value from `text`.
    #[must_use]
    pub fn from_span(span: &EntitySpan, text: &str) -> Self {
        Self::new(
            span.label.clone(),
            char_slice(text, span.start, span.end),
            span.start,
            span.end,
        )
    }

    /// Build a row from a classifier suggestion.
    #[must_use]
    pub fn from_suggestion(suggestion: &Suggestion) -> Self {
        Self::new(
            suggestion.label.clone(),
            suggestion.text.clone(),
            suggestion.start,
            suggestion.end,
        )
    }

    fn parse(&self) -> Option<EntitySpan> {
        if self.label.is_empty() {
            return None;
        }
        let start = self.start.parse::<usize>().ok()?;
        let end = self.end.parse::<usize>().ok()?;
        let span = EntitySpan::new(start, end, self.label.clone());
        span.is_valid().then_some(span)
    }
}

/// Collect the valid spans out of a set of rows, dropping malformed ones.
#[must_use]
pub fn collect_spans(rows: &[SpanRow]) -> Vec<EntitySpan> {
    rows.iter().filter_map(SpanRow::parse).collect()
}
