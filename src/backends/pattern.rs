//! Pattern classifier - suggests entities with recognizable formats.
//!
//! No gazetteers. Only spans that can be reliably identified by shape are
//! suggested:
//! - Dates: ISO 8601, MM/DD/YYYY, "January 15, 2024"
//! - Money: $100, "50 dollars"
//! - Percentages: 15%, 3.5%
//! - Emails and URLs
//!
//! Labels are the conventional upper-case tags (DATE, MONEY, PERCENT,
//! EMAIL, URL); suggestions only survive when those labels are part of the
//! session's configured set.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::Result;
use crate::span::Suggestion;
use crate::Classifier;

use super::to_char_span;

/// Regex-based classifier, useful without any model file.
pub struct PatternClassifier;

impl PatternClassifier {
    /// Create the classifier.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for PatternClassifier {
    fn default() -> Self {
        Self::new()
    }
}

static DATE_ISO: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\d{4}-\d{2}-\d{2}\b").unwrap());
static DATE_US: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\d{1,2}/\d{1,2}/\d{4}\b").unwrap());
static DATE_WRITTEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:January|February|March|April|May|June|July|August|September|October|November|December)\s+\d{1,2}(?:,\s*\d{4})?\b").unwrap()
});
static MONEY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\$[\d,]+(?:\.\d+)?|\b\d+(?:\.\d+)?\s*(?:dollars?|USD|EUR|GBP)\b").unwrap()
});
static PERCENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\d+(?:\.\d+)?\s*%").unwrap());
static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[\w.+-]+@[\w-]+(?:\.[\w-]+)+\b").unwrap());
static URL: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bhttps?://[^\s<>]+").unwrap());

impl Classifier for PatternClassifier {
    fn classify(&self, text: &str) -> Result<Vec<Suggestion>> {
        let mut suggestions: Vec<Suggestion> = Vec::new();

        let rules: [(&Lazy<Regex>, &str); 7] = [
            (&DATE_ISO, "DATE"),
            (&DATE_US, "DATE"),
            (&DATE_WRITTEN, "DATE"),
            (&MONEY, "MONEY"),
            (&PERCENT, "PERCENT"),
            (&EMAIL, "EMAIL"),
            (&URL, "URL"),
        ];

        for (pattern, label) in rules {
            for m in pattern.find_iter(text) {
                let (start, end) = to_char_span(text, m.start(), m.end());
                if !overlaps(&suggestions, start, end) {
                    suggestions.push(Suggestion {
                        label: label.to_string(),
                        start,
                        end,
                        text: m.as_str().to_string(),
                    });
                }
            }
        }

        suggestions.sort_by_key(|s| (s.start, s.end));
        Ok(suggestions)
    }

    fn name(&self) -> &'static str {
        "pattern"
    }

    fn description(&self) -> &'static str {
        "Regex suggestions for dates, money, percentages, emails, URLs"
    }
}

/// Check if a span overlaps with an already suggested one.
fn overlaps(suggestions: &[Suggestion], start: usize, end: usize) -> bool {
    suggestions.iter().any(|s| !(end <= s.start || start >= s.end))
}
