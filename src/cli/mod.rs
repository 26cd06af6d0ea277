//! CLI library modules for the ner-annotate binary.
//!
//! Argument parsing and session setup live here so they can be tested
//! independently of the interactive loop in the binary.

pub mod output;
pub mod parser;

use crate::config::{self, LabelConfig};
use crate::error::{Error, Result};
use crate::{backends, AnnotationSession, Classifier};

pub use parser::{Backend, Cli};

/// Validate every configuration input and build the session.
///
/// All failures here are fatal and happen before any prompt is shown,
/// in this order: input path, output path, model path, label set.
pub fn setup(cli: &Cli) -> Result<AnnotationSession> {
    config::validate_input_path(&cli.input)?;
    let lines = config::read_lines(&cli.input)?;

    let output = match &cli.output {
        Some(path) => {
            config::validate_output_path(path)?;
            path.clone()
        }
        None => config::default_output_path(&cli.input),
    };

    let classifier = resolve_classifier(cli)?;
    let labels = resolve_labels(cli)?;

    let mut session = AnnotationSession::new(lines, output, labels)?;
    if let Some(classifier) = classifier {
        session = session.with_classifier(classifier);
    }
    Ok(session)
}

/// Labels from `--entities`, or from the config document when one is given
/// (the config wins, matching the original tool).
fn resolve_labels(cli: &Cli) -> Result<Vec<String>> {
    if let Some(config_path) = &cli.config {
        if !config_path.exists() {
            return Err(Error::config(format!(
                "the given config file '{}' does not exist",
                config_path.display()
            )));
        }
        let name = cli.config_model.as_deref().ok_or_else(|| {
            Error::config("a config file requires --config-model to pick a label set")
        })?;
        let label_config = LabelConfig::load(config_path)?;
        return label_config
            .entities_for(name)
            .map(<[String]>::to_vec)
            .ok_or_else(|| {
                Error::config(format!("no model named '{name}' in the config file"))
            });
    }
    match &cli.entities {
        Some(entities) if !entities.is_empty() => Ok(entities.clone()),
        _ => Err(Error::config(
            "supply entity labels with --entities or a config file",
        )),
    }
}

/// Build the optional classifier from `--backend` / `--model`.
///
/// Neither flag means no assist mode. A model path must exist before the
/// backend is asked to load it.
fn resolve_classifier(cli: &Cli) -> Result<Option<Box<dyn Classifier>>> {
    if cli.backend.is_none() && cli.model.is_none() {
        return Ok(None);
    }
    if let Some(path) = &cli.model {
        if !path.exists() {
            return Err(Error::config(format!(
                "the given model path '{}' does not exist",
                path.display()
            )));
        }
    }
    let name = cli.backend.map_or("lexicon", Backend::as_name);
    backends::create(name, cli.model.as_deref()).map(Some)
}
