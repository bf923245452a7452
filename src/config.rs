use crate::source::CandidateSource;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// How the mapping is printed with `--print`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `mv <original> <destination>` lines
    #[default]
    Text,
    /// The mapping as one JSON object
    Json,
}

/// Options for a single rename run, assembled from the command line.
#[derive(Debug, Clone)]
pub struct Config {
    pub source: CandidateSource,
    pub output_root: Option<PathBuf>,
    pub print: bool,
    pub copy: bool,
    pub format: OutputFormat,
}

impl Config {
    pub fn new(source: CandidateSource) -> Self {
        Self { source, output_root: None, print: false, copy: false, format: OutputFormat::default() }
    }

    /// Copy destination root, only when both `copy` and an output root are set.
    pub fn copy_target(&self) -> Option<&Path> {
        if self.copy {
            self.output_root.as_deref()
        } else {
            None
        }
    }
}
