/// Integration tests for the text analyzer
///
/// These tests verify the single-file and multi-file flows end to end,
/// including the artifacts they write.

use std::fs;
use std::path::{Path, PathBuf};

use text_analyzer::app::{run_batch_analysis, run_file_analysis};
use text_analyzer::config::{load_config, Config};
use text_analyzer::utils::output_formatter::{create_csv_report, export_summaries_json};
use text_analyzer::{
    merge_files, read_lines, summarize_file, write_lines, ErrorKind, FileAnalyzer, ScanOrder,
};

fn config_for(out_dir: &Path) -> Config {
    Config {
        out_dir: out_dir.to_path_buf(),
        ..Config::default()
    }
}

fn write_corpus(dir: &Path) {
    fs::create_dir_all(dir.join("nested")).expect("Failed to create nested dir");
    fs::write(dir.join("a.txt"), "alpha\nbeta\n").expect("write");
    fs::write(dir.join("nested").join("b.TXT"), "gamma").expect("write");
    fs::write(dir.join("notes.md"), "not included\n").expect("write");
}

#[test]
fn test_analyze_test_file() {
    let test_file = Path::new("tests/test_data.txt");
    let (summary, lines) = summarize_file(test_file).expect("Failed to analyze test file");

    assert_eq!(summary.line_count, 7);
    assert_eq!(lines.len(), 7);
    assert_eq!(lines[3], "");
    assert_eq!(summary.size, fs::metadata(test_file).unwrap().len());
    assert_eq!(summary.word_count, 27);
    assert!((summary.average_word_length - 109.0 / 27.0).abs() < 1e-9);
}

#[test]
fn test_empty_file() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let empty_file_path = temp_dir.path().join("empty.txt");
    fs::write(&empty_file_path, "").expect("Failed to write empty file");

    let (summary, lines) = summarize_file(&empty_file_path).expect("Failed to analyze empty file");
    assert!(lines.is_empty());
    assert_eq!(summary.size, 0);
    assert_eq!(summary.line_count, 0);
    assert_eq!(summary.word_count, 0);
    assert_eq!(summary.average_word_length, 0.0);
}

#[test]
fn test_write_read_round_trip() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = temp_dir.path().join("round.txt");

    let cases: Vec<Vec<&str>> = vec![
        vec![],
        vec![""],
        vec!["a", "b"],
        vec!["a", ""],
        vec!["", "middle", "", "end"],
    ];

    for lines in cases {
        write_lines(&path, &lines).expect("Failed to write lines");
        let read_back = read_lines(&path).expect("Failed to read lines");
        assert_eq!(read_back, lines);
    }
}

#[test]
fn test_single_file_flow_writes_artifacts() {
    let out_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config = config_for(out_dir.path());

    let outcome = run_file_analysis(&config, Path::new("tests/test_data.txt"), "go", 2, 2)
        .expect("File analysis failed");

    assert_eq!(outcome.keyword_matches, 3);
    assert_eq!(
        outcome.artifacts,
        vec![
            out_dir.path().join("filtered.txt"),
            out_dir.path().join("filtered_not.txt"),
            out_dir.path().join("head.txt"),
            out_dir.path().join("tail.txt"),
        ]
    );

    let read = |name: &str| fs::read_to_string(out_dir.path().join(name)).expect("missing artifact");
    assert_eq!(read("filtered.txt"), "Go is fun\nGo: great!\ngopher GOPHER Gopher\n");
    assert_eq!(
        read("filtered_not.txt"),
        "42\n\nThe quick brown fox jumps over the lazy dog.\n\
         Numbers like 2024 and 3.14 are not words; \"quoted\" ones are.\n"
    );
    assert_eq!(read("head.txt"), "Go is fun\n42\n");
    assert_eq!(
        read("tail.txt"),
        "Numbers like 2024 and 3.14 are not words; \"quoted\" ones are.\ngopher GOPHER Gopher\n"
    );
}

#[test]
fn test_single_file_flow_blank_keyword() {
    let out_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config = config_for(out_dir.path());

    let outcome = run_file_analysis(&config, Path::new("tests/test_data.txt"), "   ", 0, 100)
        .expect("File analysis failed");

    assert_eq!(outcome.keyword_matches, 0);
    assert_eq!(fs::read_to_string(out_dir.path().join("filtered.txt")).unwrap(), "");
    assert_eq!(fs::read_to_string(out_dir.path().join("filtered_not.txt")).unwrap(), "");
    assert_eq!(fs::read_to_string(out_dir.path().join("head.txt")).unwrap(), "");
    assert_eq!(
        read_lines(&out_dir.path().join("tail.txt")).unwrap(),
        read_lines(Path::new("tests/test_data.txt")).unwrap()
    );
}

#[test]
fn test_single_file_flow_missing_file() {
    let out_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let config = config_for(out_dir.path());

    let err = run_file_analysis(&config, &out_dir.path().join("missing.txt"), "go", 1, 1).unwrap_err();
    let source = err
        .downcast_ref::<text_analyzer::AnalysisError>()
        .expect("Expected an analysis error");
    assert_eq!(source.kind(), ErrorKind::NotFound);
    assert!(!out_dir.path().join("filtered.txt").exists());
}

#[test]
fn test_batch_flow_writes_report_index_and_merge() {
    let data_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let out_dir = tempfile::tempdir().expect("Failed to create temp dir");
    write_corpus(data_dir.path());
    let config = config_for(out_dir.path());

    let mut progress = 0;
    let outcome = run_batch_analysis(&config, data_dir.path(), ScanOrder::Lexicographic, |_, total| {
        assert_eq!(total, 2);
        progress += 1;
    })
    .expect("Batch analysis failed");

    assert_eq!(progress, 2);
    assert!(outcome.is_complete());
    assert_eq!(outcome.merged_files, 2);
    let paths: Vec<PathBuf> = outcome.summaries.iter().map(|s| s.path.clone()).collect();
    assert_eq!(
        paths,
        vec![data_dir.path().join("a.txt"), data_dir.path().join("nested").join("b.TXT")]
    );

    let report = fs::read_to_string(out_dir.path().join("report.txt")).expect("missing report");
    assert!(report.starts_with("Global Report\n=============\n\n"));
    assert!(report.contains(&format!("File: {}\nSize: 11 bytes\n", paths[0].display())));
    assert!(report.contains("Lines: 2\nWords: 2 | Average length: 4.50\n\n"));
    assert!(report.contains("Lines: 1\nWords: 1 | Average length: 5.00\n\n"));

    let index = fs::read_to_string(out_dir.path().join("index.txt")).expect("missing index");
    let index_lines: Vec<&str> = index.lines().collect();
    assert_eq!(index_lines.len(), 4);
    assert_eq!(&index_lines[..2], &["Index", "====="]);
    assert!(index_lines[2].starts_with(&format!("{} | 11 | ", paths[0].display())));
    assert!(index_lines[3].starts_with(&format!("{} | 5 | ", paths[1].display())));

    let merged = fs::read_to_string(out_dir.path().join("merged.txt")).expect("missing merge");
    assert_eq!(merged, "alpha\nbeta\n\ngamma\n");
}

#[test]
fn test_batch_flow_keeps_writing_after_failed_artifact() {
    let data_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let out_dir = tempfile::tempdir().expect("Failed to create temp dir");
    write_corpus(data_dir.path());
    let config = config_for(out_dir.path());

    // A directory where the report should go makes that one write fail
    fs::create_dir(out_dir.path().join("report.txt")).expect("Failed to create dir");

    let outcome = run_batch_analysis(&config, data_dir.path(), ScanOrder::Lexicographic, |_, _| {})
        .expect("Batch analysis failed");

    assert!(!outcome.is_complete());
    assert_eq!(outcome.failures.len(), 1);
    assert_eq!(outcome.failures[0].0, out_dir.path().join("report.txt"));
    assert_eq!(
        outcome.artifacts,
        vec![out_dir.path().join("index.txt"), out_dir.path().join("merged.txt")]
    );
    assert_eq!(outcome.merged_files, 2);
    assert!(fs::read_to_string(out_dir.path().join("index.txt")).unwrap().starts_with("Index\n"));
    assert_eq!(
        fs::read_to_string(out_dir.path().join("merged.txt")).unwrap(),
        "alpha\nbeta\n\ngamma\n"
    );
}

#[test]
fn test_batch_flow_rerun_ignores_own_artifacts() {
    let data_dir = tempfile::tempdir().expect("Failed to create temp dir");
    fs::write(data_dir.path().join("a.txt"), "alpha\n").expect("write");
    let config = config_for(&data_dir.path().join("out"));

    for _ in 0..2 {
        let outcome = run_batch_analysis(&config, data_dir.path(), ScanOrder::Traversal, |_, _| {})
            .expect("Batch analysis failed");
        assert!(outcome.is_complete());
        assert_eq!(outcome.summaries.len(), 1);
        assert_eq!(outcome.summaries[0].path, data_dir.path().join("a.txt"));
        assert_eq!(outcome.merged_files, 1);
    }

    let merged = fs::read_to_string(data_dir.path().join("out").join("merged.txt")).expect("missing merge");
    assert_eq!(merged, "alpha\n");
}

#[test]
fn test_batch_flow_merges_only_analyzed_files() {
    let data_dir = tempfile::tempdir().expect("Failed to create temp dir");
    fs::write(data_dir.path().join("a.txt"), "alpha\n").expect("write");
    let out_dir = data_dir.path().join("out");
    fs::create_dir(&out_dir).expect("Failed to create dir");
    fs::write(out_dir.join("leftover.txt"), "stale\n").expect("write");

    // Relative spelling of the same output directory
    let config = config_for(&data_dir.path().join("out").join("..").join("out"));
    let outcome = run_batch_analysis(&config, data_dir.path(), ScanOrder::Traversal, |_, _| {})
        .expect("Batch analysis failed");

    assert_eq!(outcome.summaries.len(), 1);
    assert_eq!(outcome.merged_files, 1);
    assert_eq!(fs::read_to_string(out_dir.join("merged.txt")).unwrap(), "alpha\n");
}

#[test]
fn test_batch_flow_without_matches_writes_nothing() {
    let data_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let out_dir = tempfile::tempdir().expect("Failed to create temp dir");
    fs::write(data_dir.path().join("notes.md"), "markdown\n").expect("write");
    let config = config_for(&out_dir.path().join("out"));

    let outcome = run_batch_analysis(&config, data_dir.path(), ScanOrder::Traversal, |_, _| {})
        .expect("Batch analysis failed");

    assert!(outcome.summaries.is_empty());
    assert!(outcome.artifacts.is_empty());
    assert!(!out_dir.path().join("out").exists());
}

#[test]
fn test_merge_empty_match_set_fails() {
    let data_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let merged_path = data_dir.path().join("merged.out");

    let err = merge_files(data_dir.path(), ".txt", ScanOrder::Traversal, &merged_path).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::EmptyResult);
    assert_eq!(err.path(), data_dir.path());
    assert!(!merged_path.exists());
}

#[test]
fn test_merge_overwrites_previous_output() {
    let data_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let out_dir = tempfile::tempdir().expect("Failed to create temp dir");
    fs::write(data_dir.path().join("only.txt"), "line one\nline two\n").expect("write");
    let merged_path = out_dir.path().join("merged.txt");
    fs::write(&merged_path, "stale content that is longer than the merge\n").expect("write");

    let count = merge_files(data_dir.path(), "txt", ScanOrder::Traversal, &merged_path).expect("merge failed");
    assert_eq!(count, 1);
    assert_eq!(fs::read_to_string(&merged_path).unwrap(), "line one\nline two\n");
}

#[test]
fn test_exports() {
    let data_dir = tempfile::tempdir().expect("Failed to create temp dir");
    write_corpus(data_dir.path());
    let summaries = FileAnalyzer::new()
        .with_order(ScanOrder::Lexicographic)
        .analyze_directory(data_dir.path(), ".txt")
        .expect("Batch analysis failed");

    let json_path = data_dir.path().join("summaries.json");
    export_summaries_json(&summaries, &json_path).expect("JSON export failed");
    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&json_path).unwrap()).unwrap();
    let entries = json.as_array().expect("Expected a JSON array");
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["word_count"], 2);
    assert_eq!(entries[1]["line_count"], 1);

    let csv_path = data_dir.path().join("summaries.csv");
    create_csv_report(&summaries, &csv_path).expect("CSV export failed");
    let csv = fs::read_to_string(&csv_path).unwrap();
    let mut rows = csv.lines();
    assert_eq!(rows.next(), Some("Path,Size,Created,Modified,Lines,Words,Average Length"));
    assert_eq!(rows.count(), 2);
}

#[test]
fn test_load_config() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");

    let missing = load_config(Some(temp_dir.path().join("none.json").as_path())).expect("load failed");
    assert_eq!(missing, Config::default());

    let partial = temp_dir.path().join("partial.json");
    fs::write(&partial, r#"{"out_dir": "reports", "default_ext": ".log"}"#).expect("write");
    let config = load_config(Some(partial.as_path())).expect("load failed");
    assert_eq!(config.out_dir, PathBuf::from("reports"));
    assert_eq!(config.default_ext, ".log");
    assert_eq!(config.base_dir, PathBuf::from("data"));
    assert_eq!(config.artifact_path("report"), PathBuf::from("reports").join("report.log"));

    let invalid = temp_dir.path().join("invalid.json");
    fs::write(&invalid, "default_file = notes.txt").expect("write");
    assert_eq!(load_config(Some(invalid.as_path())).expect("load failed"), Config::default());
}
