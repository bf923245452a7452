use crate::config::{Config, OutputFormat};
use crate::materialize::{self, CopyReport};
use crate::models::RenameMapping;
use crate::naming;
use crate::report::Reporter;
use anyhow::{Context, Result};
use std::io::Write;
use tracing::info;

/// Outcome of one run: the mapping that was built and, when copying, what happened.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub candidates: usize,
    pub mapping: RenameMapping,
    pub copy: Option<CopyReport>,
}

/// Resolve candidates, build the mapping, then print and/or copy as configured.
///
/// Per-file problems go to `reporter`; only a failure to write to `out` is returned as an error.
pub fn run_batch<W: Write>(cfg: &Config, reporter: &dyn Reporter, out: &mut W) -> Result<RunSummary> {
    let candidates = cfg.source.resolve(reporter);
    info!("Resolved {} candidate file(s)", candidates.len());

    let mapping = naming::transform_filenames(&candidates, reporter);
    info!("{} of {} candidate(s) matched", mapping.len(), candidates.len());

    if cfg.print {
        match cfg.format {
            OutputFormat::Text => {
                materialize::write_move_script(&mapping, cfg.output_root.as_deref(), out)
                    .context("writing move script")?;
            }
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *out, &mapping).context("writing JSON mapping")?;
                writeln!(out).context("writing JSON mapping")?;
            }
        }
    }

    let copy = match (cfg.copy, cfg.copy_target()) {
        (true, Some(root)) => {
            let report = materialize::copy_files(&mapping, &cfg.source.input_root(), root, reporter);
            info!("Copied {} file(s), {} failure(s)", report.copied, report.failed);
            Some(report)
        }
        (true, None) => {
            reporter.warn("--copy has no effect without --output; no files were copied");
            None
        }
        (false, _) => None,
    };

    Ok(RunSummary { candidates: candidates.len(), mapping, copy })
}
