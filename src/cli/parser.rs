//! CLI argument parsing and structure definitions

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Manual span annotation for NER training data
#[derive(Parser, Debug)]
#[command(name = "ner-annotate")]
#[command(
    author,
    version,
    about = "Manual span annotation for NER training data",
    long_about = r#"
ner-annotate - tag character spans in text lines with entity labels

Steps through the lines of a .txt file. For each line you add labeled
spans, then move on; records are written as JSON training data:

  [{"content": "...", "entities": [[start, end, "LABEL"], ...]}]

LABELS:
  Either -e/--entities PERSON GPE ... on the command line, or a config
  document with named label sets, picked via -c FILE -n NAME.

ASSIST MODE:
  -b lexicon -m lexicon.json   suggest spans from a phrase lexicon
  -b pattern                   suggest dates, money, emails, URLs

EXAMPLES:
  ner-annotate corpus.txt -e PERSON GPE
  ner-annotate corpus.txt -c labels.json -n news -o train.json
  ner-annotate corpus.txt -e DATE MONEY -b pattern
"#
)]
pub struct Cli {
    /// Path to the training text file (.txt, one unit per line)
    pub input: PathBuf,

    /// List of entity labels to annotate with
    #[arg(short, long, num_args = 1..)]
    pub entities: Option<Vec<String>>,

    /// Path to a classifier model file for assist mode
    #[arg(short, long, value_name = "PATH")]
    pub model: Option<PathBuf>,

    /// Classifier backend to load the model with
    #[arg(short, long, value_enum)]
    pub backend: Option<Backend>,

    /// Path to the output file (.json; defaults to output.json next to the input)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Path to a config file holding named label sets
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Name of the label set to load from the config file
    #[arg(short = 'n', long = "config-model", value_name = "NAME")]
    pub config_model: Option<String>,

    /// Suppress informational output
    #[arg(short, long)]
    pub quiet: bool,
}

/// Classifier backend selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Backend {
    /// Phrase lexicon loaded from a JSON model file (requires --model)
    Lexicon,
    /// Regex suggestions for dates, money, emails, URLs (no model file)
    Pattern,
}

impl Backend {
    /// Registry name used by [`crate::backends::create`].
    #[must_use]
    pub fn as_name(self) -> &'static str {
        match self {
            Backend::Lexicon => "lexicon",
            Backend::Pattern => "pattern",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_surface() {
        let cli = Cli::parse_from([
            "ner-annotate",
            "corpus.txt",
            "-e",
            "PERSON",
            "GPE",
            "-m",
            "model.json",
            "-b",
            "lexicon",
            "-o",
            "train.json",
            "-q",
        ]);
        assert_eq!(cli.input, PathBuf::from("corpus.txt"));
        assert_eq!(cli.entities.as_deref().unwrap(), ["PERSON", "GPE"]);
        assert_eq!(cli.backend, Some(Backend::Lexicon));
        assert!(cli.quiet);
    }

    #[test]
    fn input_is_required() {
        assert!(Cli::try_parse_from(["ner-annotate"]).is_err());
    }

    #[test]
    fn backend_names_match_registry() {
        for backend in [Backend::Lexicon, Backend::Pattern] {
            assert!(crate::backends::available().contains(&backend.as_name()));
        }
    }
}
