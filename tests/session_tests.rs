//! End-to-end tests for the annotation session: navigation, recording,
//! and the atomic save path.

use std::fs;
use std::path::PathBuf;

use ner_annotate::{AnnotationRecord, AnnotationSession, SaveOutcome, SpanRow};

fn session(lines: &[&str], output: PathBuf) -> AnnotationSession {
    AnnotationSession::new(
        lines.iter().map(|s| s.to_string()).collect(),
        output,
        vec!["PERSON".to_string(), "GPE".to_string()],
    )
    .unwrap()
}

#[test]
fn end_to_end_tagging_matches_expected_json() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("output.json");
    let mut s = session(
        &["Alice went to Paris.", "Bob stayed home."],
        output.clone(),
    );

    let rows = vec![
        SpanRow::new("PERSON", "Alice", 0, 5),
        SpanRow::new("GPE", "Paris", 14, 19),
    ];
    // Tag line 1, move to line 2 with no tags, save.
    assert!(s.next(&rows).unwrap().is_empty());
    assert_eq!(s.finish(&[]).unwrap(), SaveOutcome::Written);

    let written = fs::read_to_string(&output).unwrap();
    assert_eq!(
        written,
        r#"[{"content":"Alice went to Paris.","entities":[[0,5,"PERSON"],[14,19,"GPE"]]}]"#
    );
}

#[test]
fn saved_file_round_trips_through_serde() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("output.json");
    let mut s = session(&["Alice went to Paris."], output.clone());

    s.record(&[SpanRow::new("GPE", "Paris", 14, 19)]);
    s.save().unwrap();

    let written = fs::read_to_string(&output).unwrap();
    let records: Vec<AnnotationRecord> = serde_json::from_str(&written).unwrap();
    assert_eq!(records, s.records());
}

#[test]
fn second_save_without_changes_is_a_noop() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("output.json");
    let mut s = session(&["Alice went to Paris."], output);

    s.record(&[SpanRow::new("PERSON", "Alice", 0, 5)]);
    assert_eq!(s.save().unwrap(), SaveOutcome::Written);
    assert!(!s.is_dirty());
    assert_eq!(s.save().unwrap(), SaveOutcome::NoNewData);
}

#[test]
fn clearing_all_rows_removes_the_record_from_output() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("output.json");
    let mut s = session(&["Alice went to Paris."], output.clone());

    s.record(&[SpanRow::new("PERSON", "Alice", 0, 5)]);
    s.save().unwrap();

    s.record(&[]);
    assert_eq!(s.save().unwrap(), SaveOutcome::Written);
    assert_eq!(fs::read_to_string(&output).unwrap(), "[]");
}

#[test]
fn failed_save_preserves_store_and_allows_retry() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("missing").join("output.json");
    let mut s = session(&["Alice went to Paris."], output.clone());

    s.record(&[SpanRow::new("PERSON", "Alice", 0, 5)]);
    assert!(s.save().is_err());

    // Nothing was written anywhere and the store is untouched.
    assert!(!output.exists());
    assert!(s.is_dirty());
    assert_eq!(s.records().len(), 1);

    // Retry succeeds once the directory exists.
    fs::create_dir(dir.path().join("missing")).unwrap();
    assert_eq!(s.save().unwrap(), SaveOutcome::Written);
    assert!(output.exists());
}

#[test]
fn save_onto_a_directory_fails_without_partial_writes() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("output.json");
    // The output path is occupied by a directory; the rename must fail.
    fs::create_dir(&output).unwrap();

    let mut s = session(&["Alice went to Paris."], output.clone());
    s.record(&[SpanRow::new("PERSON", "Alice", 0, 5)]);
    assert!(s.save().is_err());
    assert!(s.is_dirty());
    // No stray temp file is left behind in the target directory.
    let leftovers: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.path() != output)
        .collect();
    assert!(leftovers.is_empty());
}

#[test]
fn duplicate_lines_share_one_record() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("output.json");
    let mut s = session(&["same text", "same text"], output);

    s.next(&[SpanRow::new("PERSON", "same", 0, 4)]).unwrap();
    // The duplicate line shows the first line's spans.
    assert_eq!(s.rows_for_current(), vec![SpanRow::new("PERSON", "same", 0, 4)]);

    // Re-recording under the duplicate updates the shared record.
    s.record(&[SpanRow::new("GPE", "text", 5, 9)]);
    assert_eq!(s.records().len(), 1);
    assert_eq!(s.records()[0].entities.len(), 1);
    assert_eq!(s.records()[0].entities[0].label, "GPE");
}

#[test]
fn malformed_rows_never_reach_the_output() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("output.json");
    let mut s = session(&["Alice went to Paris."], output.clone());

    let rows = vec![
        SpanRow {
            label: "PERSON".into(),
            value: "Alice".into(),
            start: "zero".into(),
            end: "5".into(),
        },
        SpanRow::new("GPE", "Paris", 14, 19),
    ];
    s.finish(&rows).unwrap();

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        r#"[{"content":"Alice went to Paris.","entities":[[14,19,"GPE"]]}]"#
    );
}
