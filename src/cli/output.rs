//! Output formatting utilities for the interactive loop

use crate::rows::SpanRow;
use crate::AnnotationSession;

/// Log info message to stderr (respects quiet flag)
pub fn log_info(msg: &str, quiet: bool) {
    if !quiet {
        eprintln!("{msg}");
    }
}

/// Print the configured labels with their shortcut numbers.
pub fn print_labels(labels: &[String]) {
    println!("Labels:");
    for (i, label) in labels.iter().enumerate() {
        println!("  {}. {}", i + 1, label);
    }
}

/// Print the current line with its position counter.
pub fn print_line(session: &AnnotationSession) {
    let (index, total) = session.position();
    println!("Line {}/{}", index + 1, total);
    println!("{}", session.current_line());
}

/// Print the span table for the current line.
pub fn print_rows(rows: &[SpanRow]) {
    if rows.is_empty() {
        println!("(no spans)");
        return;
    }
    println!("{:<4} {:<12} {:>5} {:>5}  value", "#", "entity", "start", "end");
    for (i, row) in rows.iter().enumerate() {
        println!(
            "{:<4} {:<12} {:>5} {:>5}  {}",
            i, row.label, row.start, row.end, row.value
        );
    }
}
