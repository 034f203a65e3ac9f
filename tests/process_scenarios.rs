//! End-to-end runs of the processor against scratch directories

use std::fs;
use std::path::{Path, PathBuf};
use swift_compile_times::{LogProcessor, ProcessorConfig, ReportError};
use tempfile::TempDir;

struct Workspace {
    _dir: TempDir,
    log: PathBuf,
    out: PathBuf,
}

fn workspace(log_contents: &str) -> Workspace {
    let dir = TempDir::new().unwrap();
    let log = dir.path().join("build.log");
    let out = dir.path().join("reports");
    fs::write(&log, log_contents).unwrap();
    fs::create_dir(&out).unwrap();

    Workspace {
        _dir: dir,
        log,
        out,
    }
}

fn config(ws: &Workspace, total_build_time: f64, limit: usize) -> ProcessorConfig {
    ProcessorConfig {
        path: ws.log.clone(),
        output_path: ws.out.clone(),
        total_build_time,
        limit,
    }
}

fn report_files(dir: &Path) -> Vec<PathBuf> {
    fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .collect()
}

#[test]
fn merges_and_ranks_duplicate_locations() {
    let ws = workspace("foo.swift:1:1 1.5ms\nfoo.swift:1:1 2.5ms\nbar.swift:2:2 0.5ms");

    let summary = LogProcessor::new(config(&ws, 10.0, 2))
        .unwrap()
        .process()
        .unwrap();

    assert_eq!(report_files(&ws.out), vec![summary.output_file.clone()]);
    let report = fs::read_to_string(&summary.output_file).unwrap();
    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(
        lines,
        vec![
            "Total build time: 10.0",
            "4.0ms\tfoo.swift:1:1",
            "0.5ms\tbar.swift:2:2"
        ]
    );
}

#[test]
fn empty_log_with_zero_limit_writes_header_only() {
    let ws = workspace("");

    let summary = LogProcessor::new(config(&ws, 3.0, 0))
        .unwrap()
        .process()
        .unwrap();

    assert_eq!(summary.parsed_entries, 0);
    assert_eq!(summary.written_entries, 0);
    assert_eq!(
        fs::read_to_string(&summary.output_file).unwrap(),
        "Total build time: 3.0"
    );
}

#[test]
fn malformed_line_is_skipped() {
    let ws = workspace("a.swift:1:1 2ms\na.swift:1:1\nb.swift:3:4 1ms\n");

    let summary = LogProcessor::new(config(&ws, 1.0, 2))
        .unwrap()
        .process()
        .unwrap();

    assert_eq!(summary.parsed_entries, 2);
    assert_eq!(summary.distinct_entries, 2);
    assert_eq!(
        fs::read_to_string(&summary.output_file).unwrap(),
        "Total build time: 1.0\n2.0ms\ta.swift:1:1\n1.0ms\tb.swift:3:4"
    );
}

#[test]
fn limit_above_distinct_count_fails_without_output() {
    let ws = workspace("foo.swift:1:1 1.5ms\nfoo.swift:1:1 2.5ms\nbar.swift:2:2 0.5ms");

    let err = LogProcessor::new(config(&ws, 10.0, 3))
        .unwrap()
        .process()
        .unwrap_err();

    assert!(matches!(
        err,
        ReportError::LimitOutOfRange {
            limit: 3,
            available: 2
        }
    ));
    assert!(report_files(&ws.out).is_empty());
}

#[test]
fn missing_output_directory_is_fatal() {
    let ws = workspace("foo.swift:1:1 1.5ms");
    let mut cfg = config(&ws, 1.0, 1);
    cfg.output_path = ws.out.join("does-not-exist");

    let err = LogProcessor::new(cfg).unwrap().process().unwrap_err();

    assert!(matches!(err, ReportError::DirectoryAccess { .. }));
}

#[test]
fn non_utf8_input_is_a_read_error() {
    let ws = workspace("");
    fs::write(&ws.log, [0xff, 0xfe, 0x00, 0x41]).unwrap();

    let err = LogProcessor::new(config(&ws, 1.0, 0))
        .unwrap()
        .process()
        .unwrap_err();

    assert!(matches!(err, ReportError::FileRead { .. }));
    assert!(report_files(&ws.out).is_empty());
}

#[test]
fn repeated_runs_write_distinct_files() {
    let ws = workspace("foo.swift:1:1 1.5ms");
    let processor = LogProcessor::new(config(&ws, 1.0, 1)).unwrap();

    let first = processor.process().unwrap();
    let second = processor.process().unwrap();

    assert_ne!(first.output_file, second.output_file);
    assert_eq!(report_files(&ws.out).len(), 2);
}

#[test]
fn config_loaded_from_json_file() {
    let ws = workspace("1.0ms\tmain.swift:3:1\ttop-level code");
    let config_path = ws.out.with_file_name("config.json");
    fs::write(
        &config_path,
        serde_json::json!({
            "path": ws.log,
            "outputPath": ws.out,
            "totalBuildTime": 2.5,
            "limit": 1
        })
        .to_string(),
    )
    .unwrap();

    let config = ProcessorConfig::from_json_file(&config_path).unwrap();
    let summary = LogProcessor::new(config).unwrap().process().unwrap();

    assert_eq!(
        fs::read_to_string(&summary.output_file).unwrap(),
        "Total build time: 2.5\n1.0ms\tmain.swift:3:1\ttop-level code"
    );
}
