use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Middle segment of a recording name: either a capture date or the `EXT` token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recorded {
    Date(String),
    External,
}

/// Components captured from a filename that matched the recording pattern.
/// Only `first_number`, `second_number`, `title` and `extension` survive into the new name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedRecord {
    pub first_number: String,
    pub second_number: String,
    pub recorded: Recorded,
    pub title: String,
    pub version: String,
    pub extension: String,
}

impl ParsedRecord {
    /// Digit concatenation of both numbers, zero-padded to four characters.
    /// Longer values keep every significant digit.
    pub fn combined_prefix(&self) -> String {
        let digits = format!("{}{}", self.first_number, self.second_number);
        let trimmed = digits.trim_start_matches('0');
        let significant = if trimmed.is_empty() { "0" } else { trimmed };
        format!("{:0>4}", significant)
    }

    pub fn new_filename(&self) -> String {
        format!("{}_{}.{}", self.combined_prefix(), self.title, self.extension)
    }
}

/// Original base filename -> new filename, iterated in sorted order of the original.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RenameMapping {
    entries: BTreeMap<String, String>,
}

impl RenameMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the previous target if `original` was already present.
    pub fn insert(&mut self, original: String, renamed: String) -> Option<String> {
        self.entries.insert(original, renamed)
    }

    pub fn get(&self, original: &str) -> Option<&str> {
        self.entries.get(original).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Originals that map onto `renamed`, in sorted order.
    pub fn targets_of<'a>(&'a self, renamed: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.iter()
            .filter(move |(_, v)| *v == renamed)
            .map(|(k, _)| k)
    }
}
