//! Input/output path validation and label-set configuration.
//!
//! Everything here runs once, explicitly, before a session starts. Any
//! failure is a configuration error and the process never shows a prompt.
//!
//! Label sets come either from the command line or from a config document:
//!
//! ```json
//! {"models": [{"name": "news", "entities": ["PERSON", "ORG", "GPE"]}]}
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};

/// Required extension for input files.
pub const VALID_INPUT_EXT: &str = "txt";

/// Required extension for output files.
pub const VALID_OUTPUT_EXT: &str = "json";

/// Default output file name, placed next to the input file.
pub const DEFAULT_OUTPUT_NAME: &str = "output.json";

/// Check that the input path is an existing `.txt` file.
pub fn validate_input_path(path: &Path) -> Result<()> {
    if !path.is_file() {
        return Err(Error::config(format!(
            "the input path '{}' does not exist or is not a file",
            path.display()
        )));
    }
    if path.extension().and_then(|e| e.to_str()) != Some(VALID_INPUT_EXT) {
        return Err(Error::config(format!(
            "the input file '{}' has an invalid extension (expected .{VALID_INPUT_EXT})",
            path.display()
        )));
    }
    Ok(())
}

/// Check that an explicitly given output path carries a `.json` extension.
pub fn validate_output_path(path: &Path) -> Result<()> {
    if path.extension().and_then(|e| e.to_str()) != Some(VALID_OUTPUT_EXT) {
        return Err(Error::config(format!(
            "the output file '{}' has an invalid extension (expected .{VALID_OUTPUT_EXT})",
            path.display()
        )));
    }
    Ok(())
}

/// Default output path: `output.json` alongside the input file.
#[must_use]
pub fn default_output_path(input: &Path) -> PathBuf {
    input
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .join(DEFAULT_OUTPUT_NAME)
}

/// Read the input file as newline-split lines.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let text = std::fs::read_to_string(path)?;
    Ok(text.lines().map(str::to_string).collect())
}

/// A named, pre-defined label set inside a config document.
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigModel {
    /// Name the set is resolved by.
    pub name: String,
    /// Entity labels.
    pub entities: Vec<String>,
}

/// Top-level config document.
#[derive(Debug, Clone, Deserialize)]
pub struct LabelConfig {
    /// Named label sets.
    pub models: Vec<ConfigModel>,
}

impl LabelConfig {
    /// Load a config document from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!("could not read config file '{}': {e}", path.display()))
        })?;
        serde_json::from_str(&text).map_err(|e| {
            Error::config(format!("invalid config file '{}': {e}", path.display()))
        })
    }

    /// Entities of the model named `name`, if any.
    #[must_use]
    pub fn entities_for(&self, name: &str) -> Option<&[String]> {
        self.models
            .iter()
            .find(|m| m.name == name)
            .map(|m| m.entities.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn input_path_must_exist_and_be_txt() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.txt");
        assert!(validate_input_path(&missing).is_err());

        let wrong_ext = dir.path().join("data.csv");
        fs::write(&wrong_ext, "a,b\n").unwrap();
        assert!(validate_input_path(&wrong_ext).is_err());

        let good = dir.path().join("data.txt");
        fs::write(&good, "a line\n").unwrap();
        assert!(validate_input_path(&good).is_ok());
    }

    #[test]
    fn output_extension_checked() {
        assert!(validate_output_path(Path::new("out.json")).is_ok());
        assert!(validate_output_path(Path::new("out.txt")).is_err());
        assert!(validate_output_path(Path::new("out")).is_err());
    }

    #[test]
    fn default_output_sits_next_to_input() {
        let out = default_output_path(Path::new("/data/corpus/train.txt"));
        assert_eq!(out, PathBuf::from("/data/corpus/output.json"));
    }

    #[test]
    fn read_lines_splits_on_newlines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("in.txt");
        fs::write(&path, "first\nsecond\n").unwrap();
        assert_eq!(read_lines(&path).unwrap(), vec!["first", "second"]);
    }

    #[test]
    fn config_model_resolution() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r#"{"models": [{"name": "news", "entities": ["PERSON", "GPE"]}]}"#,
        )
        .unwrap();

        let config = LabelConfig::load(&path).unwrap();
        assert_eq!(config.entities_for("news").unwrap(), ["PERSON", "GPE"]);
        assert!(config.entities_for("legal").is_none());
    }

    #[test]
    fn invalid_config_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "not json").unwrap();
        assert!(matches!(
            LabelConfig::load(&path),
            Err(Error::Config(_))
        ));
    }
}
