//! The annotation store: the session's authoritative record collection.
//!
//! The store maps line content to its current set of entity spans, exposed
//! as an ordered list for serialization. Insertion order is first-seen order
//! of distinct line contents and is never disturbed by later updates. The
//! presentation layer (a span table in whatever front-end drives the
//! session) is a derived view re-rendered from the store on navigation,
//! never the authority.

use std::collections::HashMap;

use crate::span::{AnnotationRecord, EntitySpan};

/// Ordered, content-keyed collection of [`AnnotationRecord`]s.
///
/// `upsert` is the only mutation entry point and is idempotent: calling it
/// twice with the same arguments yields the same state as calling it once.
///
/// Lookup goes through a content-to-index map. Removals shift later
/// records down, so the map is rebuilt whenever a record is deleted.
#[derive(Debug, Clone, Default)]
pub struct AnnotationStore {
    records: Vec<AnnotationRecord>,
    index: HashMap<String, usize>,
}

impl AnnotationStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert, replace, or remove the record for `content`.
    ///
    /// - absent + non-empty spans: append a new record at the end
    /// - present + non-empty spans: replace entities in place
    /// - present + empty spans: remove the record
    /// - absent + empty spans: no-op
    ///
    /// Span validity (`end > start`) is the caller's responsibility;
    /// malformed rows are dropped before they get here (see [`crate::rows`]).
    pub fn upsert(&mut self, content: &str, spans: Vec<EntitySpan>) {
        match self.find(content) {
            None if spans.is_empty() => {}
            None => {
                self.index.insert(content.to_string(), self.records.len());
                self.records.push(AnnotationRecord::new(content, spans));
            }
            Some(i) if spans.is_empty() => {
                self.records.remove(i);
                self.rebuild_index();
            }
            Some(i) => {
                self.records[i].entities = spans;
            }
        }
    }

    /// Index of the record whose content equals the argument.
    #[must_use]
    pub fn find(&self, content: &str) -> Option<usize> {
        self.index.get(content).copied()
    }

    /// Record at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&AnnotationRecord> {
        self.records.get(index)
    }

    /// Current records in first-insertion order, ready for serialization.
    #[must_use]
    pub fn records(&self) -> &[AnnotationRecord] {
        &self.records
    }

    /// Deep copy of the current records, used as a persisted-state snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Vec<AnnotationRecord> {
        self.records.clone()
    }

    /// Structural equality against a previously captured snapshot.
    #[must_use]
    pub fn matches_snapshot(&self, snapshot: &[AnnotationRecord]) -> bool {
        self.records == snapshot
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when no line has any recorded span.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn rebuild_index(&mut self) {
        self.index.clear();
        for (i, record) in self.records.iter().enumerate() {
            self.index.insert(record.content.clone(), i);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn span(start: usize, end: usize, label: &str) -> EntitySpan {
        EntitySpan::new(start, end, label)
    }

    #[test]
    fn empty_upsert_on_absent_content_is_noop() {
        let mut store = AnnotationStore::new();
        store.upsert("no spans here", vec![]);
        assert!(store.is_empty());
        assert_eq!(store.find("no spans here"), None);
    }

    #[test]
    fn upsert_is_idempotent() {
        let mut store = AnnotationStore::new();
        let spans = vec![span(0, 5, "PERSON")];
        store.upsert("Alice went home.", spans.clone());
        let first = store.snapshot();
        store.upsert("Alice went home.", spans);
        assert!(store.matches_snapshot(&first));
    }

    #[test]
    fn replacement_keeps_position() {
        let mut store = AnnotationStore::new();
        store.upsert("first line", vec![span(0, 5, "A")]);
        store.upsert("second line", vec![span(0, 6, "B")]);
        store.upsert("first line", vec![span(2, 4, "C")]);

        assert_eq!(store.find("first line"), Some(0));
        assert_eq!(store.get(0).unwrap().entities, vec![span(2, 4, "C")]);
        assert_eq!(store.find("second line"), Some(1));
    }

    #[test]
    fn empty_upsert_removes_existing_record() {
        let mut store = AnnotationStore::new();
        store.upsert("first", vec![span(0, 5, "A")]);
        store.upsert("second", vec![span(0, 6, "B")]);
        store.upsert("first", vec![]);

        assert_eq!(store.find("first"), None);
        assert_eq!(store.len(), 1);
        // Index must stay consistent after the shift.
        assert_eq!(store.find("second"), Some(0));
        assert_eq!(store.get(0).unwrap().content, "second");
    }

    #[test]
    fn serialization_order_is_first_insertion_order() {
        let mut store = AnnotationStore::new();
        store.upsert("c", vec![span(0, 1, "X")]);
        store.upsert("a", vec![span(0, 1, "X")]);
        store.upsert("b", vec![span(0, 1, "X")]);
        store.upsert("a", vec![span(0, 1, "Y")]);

        let order: Vec<&str> = store
            .records()
            .iter()
            .map(|r| r.content.as_str())
            .collect();
        assert_eq!(order, vec!["c", "a", "b"]);
    }

    #[test]
    fn identical_lines_share_one_record() {
        // Content is the primary key, so duplicate input lines conflate.
        let mut store = AnnotationStore::new();
        store.upsert("same text", vec![span(0, 4, "A")]);
        store.upsert("same text", vec![span(5, 9, "B")]);
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(0).unwrap().entities, vec![span(5, 9, "B")]);
    }

    #[test]
    fn snapshot_detects_changes() {
        let mut store = AnnotationStore::new();
        store.upsert("line", vec![span(0, 4, "A")]);
        let snap = store.snapshot();
        assert!(store.matches_snapshot(&snap));

        store.upsert("line", vec![span(0, 4, "B")]);
        assert!(!store.matches_snapshot(&snap));
    }
}
