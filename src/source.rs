use crate::report::Reporter;
use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Where the candidate filenames come from. Exactly one is used per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CandidateSource {
    Files(Vec<String>),
    Json(PathBuf),
    Directory(PathBuf),
}

fn has_json_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("json"))
        .unwrap_or(false)
}

impl CandidateSource {
    /// An existing `.json` file (any case) or an existing directory; anything else is reported.
    pub fn from_path(path: &Path, reporter: &dyn Reporter) -> Option<Self> {
        if path.is_file() && has_json_extension(path) {
            Some(CandidateSource::Json(path.to_path_buf()))
        } else if path.is_dir() {
            Some(CandidateSource::Directory(path.to_path_buf()))
        } else {
            reporter.error(&format!(
                "Invalid input '{}': must be an existing JSON file or a directory",
                path.display()
            ));
            None
        }
    }

    pub fn input_root(&self) -> PathBuf {
        match self {
            CandidateSource::Directory(dir) => dir.clone(),
            CandidateSource::Files(_) | CandidateSource::Json(_) => PathBuf::from("."),
        }
    }

    /// Produce the raw candidate list. Failures are reported and yield an empty list.
    pub fn resolve(&self, reporter: &dyn Reporter) -> Vec<String> {
        match self {
            CandidateSource::Files(files) => files.clone(),
            CandidateSource::Json(path) => match read_json_list(path, reporter) {
                Ok(list) => list,
                Err(e) => {
                    reporter.error(&format!("{:#}", e));
                    Vec::new()
                }
            },
            CandidateSource::Directory(dir) => match list_regular_files(dir, reporter) {
                Ok(list) => list,
                Err(e) => {
                    reporter.error(&format!("{:#}", e));
                    Vec::new()
                }
            },
        }
    }
}

/// Read a JSON array of filenames. A valid document of another shape is a
/// warning (empty list); unreadable or malformed input is an error.
fn read_json_list(path: &Path, reporter: &dyn Reporter) -> Result<Vec<String>> {
    let s = std::fs::read_to_string(path)
        .with_context(|| format!("reading JSON file '{}'", path.display()))?;
    let value: serde_json::Value = serde_json::from_str(&s)
        .with_context(|| format!("invalid JSON format in '{}'", path.display()))?;

    let items = match value {
        serde_json::Value::Array(items) => items,
        _ => {
            reporter.warn(&format!(
                "JSON file '{}' does not contain a list.",
                path.display()
            ));
            return Ok(Vec::new());
        }
    };

    let mut out = Vec::with_capacity(items.len());
    for item in items {
        match item {
            serde_json::Value::String(s) => out.push(s),
            other => reporter.warn(&format!(
                "Ignoring non-string entry {} in '{}'",
                other,
                path.display()
            )),
        }
    }
    Ok(out)
}

/// Names of the regular files directly inside `dir`, sorted. Names that are not
/// valid UTF-8 cannot be renamed and are reported instead of listed.
fn list_regular_files(dir: &Path, reporter: &dyn Reporter) -> Result<Vec<String>> {
    if !dir.is_dir() {
        bail!("'{}' is not a directory", dir.display());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).follow_links(false) {
        let entry = entry.with_context(|| format!("accessing directory '{}'", dir.display()))?;
        let is_file = entry.file_type().is_file()
            || (entry.file_type().is_symlink() && entry.path().is_file());
        if !is_file {
            continue;
        }
        match entry.file_name().to_str() {
            Some(name) => files.push(name.to_string()),
            None => reporter.warn(&format!(
                "Filename '{}' is not valid UTF-8. Skipping transformation.",
                entry.file_name().to_string_lossy()
            )),
        }
    }
    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::MemoryReporter;

    #[test]
    fn json_extension_is_case_insensitive() {
        assert!(has_json_extension(Path::new("list.JSON")));
        assert!(has_json_extension(Path::new("list.json")));
        assert!(!has_json_extension(Path::new("list.txt")));
        assert!(!has_json_extension(Path::new("json")));
    }

    #[test]
    fn explicit_list_is_used_as_is() {
        let reporter = MemoryReporter::new();
        let src = CandidateSource::Files(vec!["b".into(), "a".into()]);
        assert_eq!(src.resolve(&reporter), vec!["b".to_string(), "a".to_string()]);
        assert_eq!(src.input_root(), PathBuf::from("."));
    }
}
