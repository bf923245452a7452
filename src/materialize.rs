use crate::models::RenameMapping;
use crate::report::Reporter;
use anyhow::Context;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

/// Renamed files are always written below this folder of the output root.
pub const OUTPUT_SUBFOLDER: &str = "mp3";

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CopyReport {
    pub copied: usize,
    pub failed: usize,
}

pub fn destination_dir(output_root: &Path) -> PathBuf {
    output_root.join(OUTPUT_SUBFOLDER)
}

pub fn destination_path(renamed: &str, output_root: Option<&Path>) -> PathBuf {
    match output_root {
        Some(root) => destination_dir(root).join(renamed),
        None => PathBuf::from(renamed),
    }
}

/// Write a `Script to rename files:` header, then one `mv <original> <destination>`
/// line per entry. The destination is the bare new name without an output root.
pub fn write_move_script<W: Write>(
    mapping: &RenameMapping,
    output_root: Option<&Path>,
    out: &mut W,
) -> std::io::Result<()> {
    if mapping.is_empty() {
        writeln!(out, "No files processed or found matching the criteria.")?;
        return Ok(());
    }
    writeln!(out, "Script to rename files:")?;
    for (original, renamed) in mapping.iter() {
        let dest = destination_path(renamed, output_root);
        writeln!(out, "mv {} {}", original, dest.display())?;
    }
    Ok(())
}

/// Copy every mapped file from `input_root` into `<output_root>/mp3/` under its new name.
///
/// The destination folder is created with its parents. A file that cannot be
/// copied is reported and counted; the rest of the batch still runs.
pub fn copy_files(
    mapping: &RenameMapping,
    input_root: &Path,
    output_root: &Path,
    reporter: &dyn Reporter,
) -> CopyReport {
    let mut report = CopyReport::default();
    if mapping.is_empty() {
        return report;
    }

    let dest_dir = destination_dir(output_root);
    if let Err(e) = std::fs::create_dir_all(&dest_dir) {
        reporter.error(&format!(
            "Failed to create output directory '{}': {}",
            dest_dir.display(),
            e
        ));
        report.failed = mapping.len();
        return report;
    }

    for (original, renamed) in mapping.iter() {
        let src = input_root.join(original);
        let dest = dest_dir.join(renamed);
        let res = std::fs::copy(&src, &dest)
            .with_context(|| format!("copying '{}' to '{}'", src.display(), dest.display()));
        match res {
            Ok(_) => {
                info!("Copied {} -> {}", src.display(), dest.display());
                report.copied += 1;
            }
            Err(e) => {
                reporter.error(&format!("{:#}", e));
                report.failed += 1;
            }
        }
    }

    report
}
