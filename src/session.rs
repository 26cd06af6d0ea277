//! Annotation session: line navigation, recording, and saving.
//!
//! The session owns the split input lines, the [`AnnotationStore`], the
//! cursor, and the last-saved snapshot. A front-end (the interactive CLI,
//! or a test) hands edited rows in and renders the rows it gets back; the
//! store is the single source of truth throughout.

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::{Error, Result};
use crate::rows::{collect_spans, SpanRow};
use crate::span::AnnotationRecord;
use crate::store::AnnotationStore;
use crate::Classifier;

/// What a save attempt did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The output file was written.
    Written,
    /// The store matched the last saved snapshot; nothing was written.
    NoNewData,
}

/// A single annotating pass over one input file.
pub struct AnnotationSession {
    lines: Vec<String>,
    output: PathBuf,
    labels: Vec<String>,
    classifier: Option<Box<dyn Classifier>>,
    store: AnnotationStore,
    cursor: usize,
    last_saved: Vec<AnnotationRecord>,
}

impl AnnotationSession {
    /// Start a session over pre-split input lines.
    ///
    /// Fails when there are no lines or no labels, both of which would make
    /// the session pointless.
    pub fn new(lines: Vec<String>, output: PathBuf, labels: Vec<String>) -> Result<Self> {
        if lines.is_empty() {
            return Err(Error::invalid_input("the input file has no lines"));
        }
        if labels.is_empty() {
            return Err(Error::invalid_input("the label set is empty"));
        }
        Ok(Self {
            lines,
            output,
            labels,
            classifier: None,
            store: AnnotationStore::new(),
            cursor: 0,
            last_saved: Vec::new(),
        })
    }

    /// Attach an optional classifier used by [`AnnotationSession::suggest`].
    #[must_use]
    pub fn with_classifier(mut self, classifier: Box<dyn Classifier>) -> Self {
        self.classifier = Some(classifier);
        self
    }

    /// Text of the line under the cursor.
    #[must_use]
    pub fn current_line(&self) -> &str {
        &self.lines[self.cursor]
    }

    /// Cursor position as (0-based index, total lines).
    #[must_use]
    pub fn position(&self) -> (usize, usize) {
        (self.cursor, self.lines.len())
    }

    /// Configured entity labels.
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Whether a classifier is attached.
    #[must_use]
    pub fn has_classifier(&self) -> bool {
        self.classifier.is_some()
    }

    /// The store's current records, for inspection.
    #[must_use]
    pub fn records(&self) -> &[AnnotationRecord] {
        self.store.records()
    }

    /// Rows to render for the line under the cursor, reconstituted from the
    /// store. Value cells are re-sliced from the line text by offsets.
    #[must_use]
    pub fn rows_for_current(&self) -> Vec<SpanRow> {
        let text = self.current_line();
        match self.store.find(text) {
            Some(i) => self
                .store
                .get(i)
                .map(|record| {
                    record
                        .entities
                        .iter()
                        .map(|span| SpanRow::from_span(span, text))
                        .collect()
                })
                .unwrap_or_default(),
            None => Vec::new(),
        }
    }

    /// Record the edited rows for the current line. Malformed rows are
    /// dropped; an all-empty row set removes any existing record.
    pub fn record(&mut self, rows: &[SpanRow]) {
        let content = self.lines[self.cursor].clone();
        self.store.upsert(&content, collect_spans(rows));
    }

    /// Move to the next line without recording, discarding current edits.
    ///
    /// Returns the rows for the newly shown line, or `None` when already at
    /// the last line (the cursor does not move).
    pub fn advance(&mut self) -> Option<Vec<SpanRow>> {
        if self.cursor + 1 >= self.lines.len() {
            return None;
        }
        self.cursor += 1;
        Some(self.rows_for_current())
    }

    /// Move to the previous line without recording.
    ///
    /// Returns the rows for the newly shown line, or `None` when already at
    /// the first line.
    pub fn retreat(&mut self) -> Option<Vec<SpanRow>> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(self.rows_for_current())
    }

    /// Record the rows, then move forward.
    pub fn next(&mut self, rows: &[SpanRow]) -> Option<Vec<SpanRow>> {
        self.record(rows);
        self.advance()
    }

    /// Record the rows, then move backward.
    pub fn prev(&mut self, rows: &[SpanRow]) -> Option<Vec<SpanRow>> {
        self.record(rows);
        self.retreat()
    }

    /// Run the classifier over the current line and return suggestion rows.
    ///
    /// Suggestions whose label is outside the configured label set are
    /// discarded.
    pub fn suggest(&self) -> Result<Vec<SpanRow>> {
        let classifier = self
            .classifier
            .as_deref()
            .ok_or_else(|| Error::classify("no classifier model is loaded"))?;
        let suggestions = classifier.classify(self.current_line())?;
        Ok(suggestions
            .iter()
            .filter(|s| self.labels.iter().any(|l| l == &s.label))
            .map(SpanRow::from_suggestion)
            .collect())
    }

    /// True when the store differs from the last saved snapshot.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        !self.store.matches_snapshot(&self.last_saved)
    }

    /// Serialize the store to the output path.
    ///
    /// Returns [`SaveOutcome::NoNewData`] without touching the file when
    /// nothing changed since the last save. The write goes through a temp
    /// file in the target directory followed by a rename, so a failed save
    /// never leaves a truncated output file behind; the in-memory store is
    /// untouched either way and the caller can retry.
    pub fn save(&mut self) -> Result<SaveOutcome> {
        if self.store.matches_snapshot(&self.last_saved) {
            return Ok(SaveOutcome::NoNewData);
        }
        let json = serde_json::to_string(self.store.records())?;
        let dir = self
            .output
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(json.as_bytes())?;
        tmp.persist(&self.output).map_err(|e| Error::Io(e.error))?;
        self.last_saved = self.store.snapshot();
        Ok(SaveOutcome::Written)
    }

    /// Record the rows, then save: the end-of-session action.
    pub fn finish(&mut self, rows: &[SpanRow]) -> Result<SaveOutcome> {
        self.record(rows);
        self.save()
    }
}
