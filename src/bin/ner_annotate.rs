//! ner-annotate - interactive span annotation for NER training data
//!
//! Validates the configuration up front, then drives an
//! [`AnnotationSession`] through a line-oriented command loop on stdin:
//!
//! ```text
//! tag 0 5 PERSON     add a span over the current line
//! del 0              remove span row 0
//! next / prev / skip move through the input file
//! classify           pre-fill suggestions from the loaded model
//! save               write the output JSON
//! quit               leave (prompts when there is unsaved work)
//! ```

use std::io::{self, BufRead};
use std::process::ExitCode;

use clap::Parser;

use ner_annotate::cli::output::{log_info, print_labels, print_line, print_rows};
use ner_annotate::cli::{self, Cli};
use ner_annotate::{char_slice, AnnotationSession, Result, SaveOutcome, SpanRow};

fn main() -> ExitCode {
    let cli = Cli::parse();
    let mut session = match cli::setup(&cli) {
        Ok(session) => session,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };
    match run(&mut session, cli.quiet) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(session: &mut AnnotationSession, quiet: bool) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock().lines();
    let mut rows = session.rows_for_current();

    print_labels(session.labels());
    if session.has_classifier() {
        log_info("Assist mode on: 'classify' pre-fills suggestions", quiet);
    }
    log_info("Type 'help' for commands", quiet);
    print_line(session);
    print_rows(&rows);

    while let Some(line) = input.next() {
        let line = line?;
        let mut parts = line.split_whitespace();
        let Some(command) = parts.next() else {
            continue;
        };
        match command {
            "help" | "?" => print_help(),
            "tag" | "t" => tag(session, &mut rows, &mut parts),
            "del" | "d" => del(&mut rows, &mut parts),
            "rows" | "r" => print_rows(&rows),
            "line" | "l" => print_line(session),
            "next" | "n" => match session.next(&rows) {
                Some(new_rows) => {
                    rows = new_rows;
                    print_line(session);
                    print_rows(&rows);
                }
                None => log_info(
                    "No more lines in the input file. You should save the results.",
                    quiet,
                ),
            },
            "prev" | "p" => match session.prev(&rows) {
                Some(new_rows) => {
                    rows = new_rows;
                    print_line(session);
                    print_rows(&rows);
                }
                None => log_info(
                    "No more previous lines in the input file. You should save the results.",
                    quiet,
                ),
            },
            "skip" => match session.advance() {
                Some(new_rows) => {
                    rows = new_rows;
                    print_line(session);
                    print_rows(&rows);
                }
                None => log_info(
                    "No more lines in the input file. You should save the results.",
                    quiet,
                ),
            },
            "classify" | "c" => match session.suggest() {
                Ok(suggestions) if suggestions.is_empty() => {
                    log_info("No suggestions for this line", quiet);
                }
                Ok(suggestions) => {
                    rows.extend(suggestions);
                    print_rows(&rows);
                }
                Err(err) => eprintln!("{err}"),
            },
            "save" | "s" => save(session, &rows, quiet),
            "quit" | "q" => {
                session.record(&rows);
                if session.is_dirty() {
                    println!("You have unsaved work. Save before exit? [y/N]");
                    if let Some(Ok(answer)) = input.next() {
                        if answer.trim().eq_ignore_ascii_case("y") {
                            save(session, &rows, quiet);
                        }
                    }
                }
                return Ok(());
            }
            other => println!("Unknown command '{other}'; type 'help'"),
        }
    }

    // stdin closed without an explicit quit
    session.record(&rows);
    if session.is_dirty() {
        log_info("Exiting with unsaved work; the output file was not updated", quiet);
    }
    Ok(())
}

/// Add a span row from `tag START END LABEL`. The label may be given as
/// its shortcut number. Invalid arguments are reported, never fatal.
fn tag<'a>(
    session: &AnnotationSession,
    rows: &mut Vec<SpanRow>,
    parts: &mut impl Iterator<Item = &'a str>,
) {
    let (Some(start), Some(end), Some(label)) = (parts.next(), parts.next(), parts.next())
    else {
        println!("usage: tag <start> <end> <label>");
        return;
    };
    let (Ok(start), Ok(end)) = (start.parse::<usize>(), end.parse::<usize>()) else {
        println!("usage: tag <start> <end> <label> (offsets must be non-negative integers)");
        return;
    };
    if end <= start {
        println!("The selection is empty (end must be greater than start)");
        return;
    }
    let Some(label) = resolve_label(label, session.labels()) else {
        println!("Unknown label '{label}'; pick one of the configured labels");
        return;
    };
    let value = char_slice(session.current_line(), start, end);
    rows.push(SpanRow::new(label, value, start, end));
    print_rows(rows);
}

/// Remove a span row from `del INDEX`.
fn del<'a>(rows: &mut Vec<SpanRow>, parts: &mut impl Iterator<Item = &'a str>) {
    match parts.next().map(str::parse::<usize>) {
        Some(Ok(index)) if index < rows.len() => {
            rows.remove(index);
            print_rows(rows);
        }
        _ => println!("usage: del <row number>"),
    }
}

/// A label argument is either a configured label or its shortcut number.
fn resolve_label(arg: &str, labels: &[String]) -> Option<String> {
    if let Ok(i) = arg.parse::<usize>() {
        if (1..=labels.len()).contains(&i) {
            return Some(labels[i - 1].clone());
        }
    }
    labels.iter().find(|l| l.as_str() == arg).cloned()
}

/// Record the current rows and write the output file. Save failures are
/// reported and the session continues so the user can retry.
fn save(session: &mut AnnotationSession, rows: &[SpanRow], quiet: bool) {
    match session.finish(rows) {
        Ok(SaveOutcome::Written) => {
            log_info("The output file was successfully saved", quiet);
        }
        Ok(SaveOutcome::NoNewData) => {
            log_info("You do not have new data to save", quiet);
        }
        Err(err) => {
            eprintln!("An error occurred while saving the output file: {err}");
        }
    }
}

fn print_help() {
    println!(
        r#"Commands:
  tag <start> <end> <label>   add a span (label name or shortcut number)
  del <row>                   remove a span row
  rows                        show the span table
  line                        show the current line again
  next / prev                 record this line's spans, then move
  skip                        move forward without recording
  classify                    pre-fill suggestions from the loaded model
  save                        record and write the output file
  quit                        exit (prompts when there is unsaved work)"#
    );
}
