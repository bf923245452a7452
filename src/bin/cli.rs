use anyhow::{Context, Result};
use clap::{ArgGroup, CommandFactory, Parser};
use std::path::PathBuf;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use recording_rename as lib;
use lib::config::{Config, OutputFormat};
use lib::report::{Reporter, TracingReporter};
use lib::source::CandidateSource;

/// Rename exported recordings: strip the date/version segments and normalize the numeric prefix.
#[derive(Parser)]
#[command(name = "recording-rename", version)]
#[command(group(ArgGroup::new("source").args(["files", "json", "directory"]).multiple(false)))]
struct Cli {
    /// A list of file names separated by spaces
    #[arg(short, long, num_args = 0..)]
    files: Option<Vec<String>>,

    /// Path to a JSON file containing a list of file names
    #[arg(short, long, value_name = "FILE")]
    json: Option<PathBuf>,

    /// Path to a directory to scan for files (not recursive)
    #[arg(short, long, value_name = "DIR")]
    directory: Option<PathBuf>,

    /// Destination root; renamed files go to <OUTPUT>/mp3/
    #[arg(short, long, value_name = "DIR")]
    output: Option<PathBuf>,

    /// Print the mapping as move commands
    #[arg(short, long)]
    print: bool,

    /// Copy matched files to the output folder (requires --output)
    #[arg(short, long)]
    copy: bool,

    /// Format used by --print
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

fn init_logging() {
    // Honor RUST_LOG if set, otherwise default to info.
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let stderr_layer = fmt::layer().with_writer(std::io::stderr).with_target(false);
    let _ = tracing_subscriber::registry().with(env_filter).with(stderr_layer).try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();
    let reporter = TracingReporter;

    let source = match (cli.files, cli.json, cli.directory) {
        (Some(files), _, _) if !files.is_empty() => Some(CandidateSource::Files(files)),
        (_, Some(path), _) | (_, _, Some(path)) => {
            // An unusable path still runs, with no candidates.
            Some(CandidateSource::from_path(&path, &reporter).unwrap_or(CandidateSource::Files(Vec::new())))
        }
        _ => None,
    };

    let source = match source {
        Some(s) => s,
        None => {
            Cli::command().print_help().context("printing help")?;
            println!();
            std::process::exit(1);
        }
    };

    let cfg = Config {
        source,
        output_root: cli.output,
        print: cli.print,
        copy: cli.copy,
        format: cli.format,
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let summary = lib::batch::run_batch(&cfg, &reporter, &mut out).context("running rename batch")?;

    if summary.mapping.is_empty() && !cfg.print {
        println!("No files processed or found matching the criteria.");
    }
    if let Some(report) = summary.copy {
        if report.failed > 0 {
            reporter.warn(&format!("Completed with {} copy failure(s).", report.failed));
        }
    }

    Ok(())
}
