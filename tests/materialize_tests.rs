use std::fs::{self, File};
use std::io::Write;
use tempfile::tempdir;

use recording_rename::batch::run_batch;
use recording_rename::config::{Config, OutputFormat};
use recording_rename::materialize::copy_files;
use recording_rename::models::RenameMapping;
use recording_rename::report::MemoryReporter;
use recording_rename::source::CandidateSource;

#[test]
fn copy_creates_destination_and_continues_after_failure() {
    let td = tempdir().unwrap();
    let input = td.path().join("in");
    fs::create_dir_all(&input).unwrap();
    let mut f = File::create(input.join("P_1-2_EXT_Song_v2024-01-01.mp3")).unwrap();
    writeln!(f, "data").unwrap();

    let mut mapping = RenameMapping::new();
    mapping.insert("P_0-0_EXT_Missing_v2024-01-01.mp3".into(), "0000_Missing.mp3".into());
    mapping.insert("P_1-2_EXT_Song_v2024-01-01.mp3".into(), "0012_Song.mp3".into());

    let out = td.path().join("nested").join("out");
    let reporter = MemoryReporter::new();
    let report = copy_files(&mapping, &input, &out, &reporter);

    assert_eq!(report.copied, 1);
    assert_eq!(report.failed, 1);
    assert_eq!(reporter.errors().len(), 1);
    let copied = fs::read_to_string(out.join("mp3").join("0012_Song.mp3")).unwrap();
    assert_eq!(copied, "data\n");
    assert!(!out.join("mp3").join("0000_Missing.mp3").exists());
    // source is copied, not moved
    assert!(input.join("P_1-2_EXT_Song_v2024-01-01.mp3").exists());
}

#[test]
fn copy_without_output_writes_nothing() {
    let td = tempdir().unwrap();
    let input = td.path().join("in");
    fs::create_dir_all(&input).unwrap();
    File::create(input.join("P_1-2_EXT_Song_v2024-01-01.mp3")).unwrap();

    let mut cfg = Config::new(CandidateSource::Directory(input.clone()));
    cfg.copy = true;

    let reporter = MemoryReporter::new();
    let mut buf = Vec::new();
    let summary = run_batch(&cfg, &reporter, &mut buf).unwrap();

    assert_eq!(summary.mapping.len(), 1);
    assert!(summary.copy.is_none());
    assert!(buf.is_empty());
    assert_eq!(fs::read_dir(&input).unwrap().count(), 1);
    assert_eq!(fs::read_dir(td.path()).unwrap().count(), 1);
    assert_eq!(reporter.warnings().len(), 1);
}

#[test]
fn directory_run_prints_and_copies() {
    let td = tempdir().unwrap();
    let input = td.path().join("in");
    fs::create_dir_all(&input).unwrap();
    File::create(input.join("P_3-45_EXT_Interview_v2023-12-31e.MP3")).unwrap();
    File::create(input.join("random_file.mp3")).unwrap();
    let out = td.path().join("out");

    let mut cfg = Config::new(CandidateSource::Directory(input.clone()));
    cfg.output_root = Some(out.clone());
    cfg.copy = true;
    cfg.print = true;

    let reporter = MemoryReporter::new();
    let mut buf = Vec::new();
    let summary = run_batch(&cfg, &reporter, &mut buf).unwrap();

    assert_eq!(summary.candidates, 2);
    assert_eq!(summary.copy.unwrap().copied, 1);
    assert!(out.join("mp3").join("0345_Interview.MP3").exists());
    let printed = String::from_utf8(buf).unwrap();
    let lines: Vec<&str> = printed.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "Script to rename files:");
    assert!(lines[1].starts_with("mv P_3-45_EXT_Interview_v2023-12-31e.MP3 "));
    assert!(printed.trim_end().ends_with("0345_Interview.MP3"));
    assert_eq!(reporter.warnings().len(), 1);
}

#[test]
fn json_format_prints_mapping_object() {
    let mut cfg = Config::new(CandidateSource::Files(vec![
        "P_01-2_2024-01-05b_MyTitle_v2024-02-01.mp3".into(),
    ]));
    cfg.print = true;
    cfg.format = OutputFormat::Json;

    let mut buf = Vec::new();
    run_batch(&cfg, &MemoryReporter::new(), &mut buf).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
    assert_eq!(value["P_01-2_2024-01-05b_MyTitle_v2024-02-01.mp3"], "0012_MyTitle.mp3");
}
