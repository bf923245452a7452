use crate::models::{ParsedRecord, Recorded, RenameMapping};
use crate::report::Reporter;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

/// `P_<n>-<m>_<date|EXT>_<title>_v<date>.<mp3|MP3>`, dates as `YYYY-MM-DD` with
/// an optional lowercase suffix letter. Digits are ASCII only. The title is
/// greedy, so it ends at the last `_v<date>` before the extension.
static RECORDING_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^P_([0-9]+)-([0-9]+)_([0-9]{4}-[0-9]{2}-[0-9]{2}[a-z]?|EXT)_(.+)_v([0-9]{4}-[0-9]{2}-[0-9]{2}[a-z]?)\.(mp3|MP3)$",
    )
    .expect("recording pattern is a valid regex")
});

const EXTERNAL_TOKEN: &str = "EXT";

/// Filename component of `candidate`; the whole string when it has none (e.g. `..`).
pub fn base_filename(candidate: &str) -> &str {
    Path::new(candidate)
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or(candidate)
}

/// Match a base filename against the recording pattern.
pub fn parse_filename(base: &str) -> Option<ParsedRecord> {
    let caps = RECORDING_PATTERN.captures(base)?;
    let recorded = match &caps[3] {
        EXTERNAL_TOKEN => Recorded::External,
        date => Recorded::Date(date.to_string()),
    };
    Some(ParsedRecord {
        first_number: caps[1].to_string(),
        second_number: caps[2].to_string(),
        recorded,
        title: caps[4].to_string(),
        version: caps[5].to_string(),
        extension: caps[6].to_string(),
    })
}

/// Build the rename mapping for a batch of candidates.
///
/// Candidates are reduced to their base filename before matching. Names that
/// do not match are reported as warnings and left out of the mapping. Two
/// originals that land on the same new name are reported too, since copying
/// both would overwrite one of them.
pub fn transform_filenames<S: AsRef<str>>(candidates: &[S], reporter: &dyn Reporter) -> RenameMapping {
    let mut mapping = RenameMapping::new();

    for candidate in candidates {
        let base = base_filename(candidate.as_ref());
        match parse_filename(base) {
            Some(record) => {
                let renamed = record.new_filename();
                debug!("{} -> {}", base, renamed);
                mapping.insert(base.to_string(), renamed);
            }
            None => {
                reporter.warn(&format!(
                    "Filename '{}' does not match the expected pattern. Skipping transformation.",
                    base
                ));
            }
        }
    }

    let mut by_target: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    for (original, renamed) in mapping.iter() {
        by_target.entry(renamed).or_default().push(original);
    }
    for (renamed, originals) in by_target.iter().filter(|(_, o)| o.len() > 1) {
        reporter.warn(&format!(
            "'{}' is the new name for several files: {}",
            renamed,
            originals.join(", ")
        ));
    }

    mapping
}
