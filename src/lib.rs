/// Text Analyzer - plain-text file inspection and reporting
///
/// This library computes word statistics, filters and extracts line subsets,
/// and produces aggregate reports, indexes and merged corpora for directories
/// of text files.

// Re-export core modules
pub mod core;
pub mod utils;

// Re-export main analyzer types for convenience
pub use crate::core::analyzer::{batch_analyze, summarize_file, FileAnalyzer, FileSummary};
pub use crate::core::error::{AnalysisError, ErrorKind};
pub use crate::core::filter::{count_matching, filter_lines, head, tail};
pub use crate::core::scanner::{list_files, ScanOrder};
pub use crate::core::stats::{word_stats, WordStats};
pub use crate::utils::file_utils::{read_lines, write_lines};
pub use crate::utils::output_formatter::{merge_files, write_index, write_report};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Analyze a single file and return its summary
///
/// This is a convenience function for simple use cases.
///
/// # Arguments
///
/// * `file_path` - Path to the file to analyze
pub fn analyze_file<P: AsRef<std::path::Path>>(file_path: P) -> anyhow::Result<FileSummary> {
    let (summary, _) = summarize_file(file_path.as_ref())?;
    Ok(summary)
}

/// Library configuration and utilities
pub mod config {
    use std::path::{Path, PathBuf};

    use anyhow::{Context, Result};
    use log::{error, info};
    use serde::{Deserialize, Serialize};

    use crate::utils::file_utils::normalize_extension;

    /// Locations and defaults shared by the analysis flows
    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct Config {
        /// File analyzed when none is given
        pub default_file: PathBuf,
        /// Directory analyzed when none is given
        pub base_dir: PathBuf,
        /// Where the artifacts are written
        pub out_dir: PathBuf,
        /// Extension used for scanning and for artifact names
        pub default_ext: String,
    }

    impl Default for Config {
        fn default() -> Self {
            Self {
                default_file: PathBuf::from("data/input.txt"),
                base_dir: PathBuf::from("data"),
                out_dir: PathBuf::from("out"),
                default_ext: ".txt".to_string(),
            }
        }
    }

    impl Config {
        /// Path of an artifact such as `report` inside the output directory
        pub fn artifact_path(&self, stem: &str) -> PathBuf {
            self.out_dir
                .join(format!("{}{}", stem, normalize_extension(&self.default_ext)))
        }
    }

    /// Create default configuration
    pub fn default_config() -> Config {
        Config::default()
    }

    /// Load configuration from a JSON file.
    ///
    /// A missing file or invalid JSON is logged and the defaults are used;
    /// fields absent from the file keep their default values.
    pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
        let Some(path) = config_path else {
            return Ok(default_config());
        };

        if !path.exists() {
            error!("Configuration file not found: {}", path.display());
            return Ok(default_config());
        }

        let config_str = std::fs::read_to_string(path)
            .context(format!("Failed to read configuration file: {}", path.display()))?;
        match serde_json::from_str(&config_str) {
            Ok(config) => {
                info!("Loaded configuration from {}", path.display());
                Ok(config)
            }
            Err(e) => {
                error!("Invalid JSON in configuration file: {}", e);
                Ok(default_config())
            }
        }
    }
}

/// End-to-end analysis flows writing their artifacts to the output directory
pub mod app {
    use std::fs;
    use std::path::{Path, PathBuf};

    use anyhow::{Context, Result};
    use log::{error, info};

    use crate::config::Config;
    use crate::core::analyzer::{FileAnalyzer, FileSummary};
    use crate::core::filter::{count_matching, filter_lines, head, tail};
    use crate::core::scanner::ScanOrder;
    use crate::utils::file_utils::write_lines;
    use crate::utils::output_formatter::{write_index, write_merge, write_report};

    /// Result of the single-file flow
    #[derive(Debug)]
    pub struct FileAnalysisOutcome {
        pub summary: FileSummary,
        /// Lines containing the keyword
        pub keyword_matches: usize,
        /// Files written, in order
        pub artifacts: Vec<PathBuf>,
    }

    /// Result of the multi-file flow
    #[derive(Debug)]
    pub struct BatchOutcome {
        pub summaries: Vec<FileSummary>,
        /// Files in the merged corpus; 0 when the merge could not be written
        pub merged_files: usize,
        /// Files written, in order; empty when no file matched
        pub artifacts: Vec<PathBuf>,
        /// Artifacts that could not be written, with the cause
        pub failures: Vec<(PathBuf, anyhow::Error)>,
    }

    impl BatchOutcome {
        fn empty(summaries: Vec<FileSummary>) -> Self {
            Self { summaries, merged_files: 0, artifacts: Vec::new(), failures: Vec::new() }
        }

        /// True when every artifact was written
        pub fn is_complete(&self) -> bool {
            self.failures.is_empty()
        }

        fn record<T>(&mut self, path: PathBuf, result: Result<T>) -> Option<T> {
            match result {
                Ok(value) => {
                    self.artifacts.push(path);
                    Some(value)
                }
                Err(e) => {
                    error!("{:#}", e);
                    self.failures.push((path, e));
                    None
                }
            }
        }
    }

    fn ensure_out_dir(config: &Config) -> Result<()> {
        fs::create_dir_all(&config.out_dir)
            .context(format!("Failed to create output directory: {}", config.out_dir.display()))
    }

    /// Summarize `file_path`, then write the keyword include/exclude subsets
    /// and the head/tail extracts.
    ///
    /// # Arguments
    ///
    /// * `config` - Output directory and extension for the artifacts
    /// * `file_path` - File to analyze
    /// * `keyword` - Keyword for the filters (blank yields empty subsets)
    /// * `head_n` - Number of lines for the head extract
    /// * `tail_n` - Number of lines for the tail extract
    pub fn run_file_analysis(
        config: &Config,
        file_path: &Path,
        keyword: &str,
        head_n: usize,
        tail_n: usize,
    ) -> Result<FileAnalysisOutcome> {
        let (summary, lines) = FileAnalyzer::new()
            .analyze_file(file_path)
            .context(format!("Failed to analyze {}", file_path.display()))?;

        let keyword_matches = count_matching(&lines, keyword);
        info!("Lines containing \"{}\": {}", keyword, keyword_matches);

        ensure_out_dir(config)?;

        let outputs: [(&str, Vec<&str>); 4] = [
            ("filtered", filter_lines(&lines, keyword, true)),
            ("filtered_not", filter_lines(&lines, keyword, false)),
            ("head", head(&lines, head_n).iter().map(String::as_str).collect()),
            ("tail", tail(&lines, tail_n).iter().map(String::as_str).collect()),
        ];

        let mut artifacts = Vec::with_capacity(outputs.len());
        for (stem, subset) in outputs {
            let path = config.artifact_path(stem);
            write_lines(&path, &subset).context(format!("Failed to write {}", path.display()))?;
            artifacts.push(path);
        }

        Ok(FileAnalysisOutcome { summary, keyword_matches, artifacts })
    }

    /// Summarize every matching file under `dir`, then write the report, the
    /// index and the merged corpus.
    ///
    /// `on_file(path, total)` is called before each file is analyzed. When no
    /// file matches, nothing is written. Files under `config.out_dir` are never
    /// analyzed, and the merge covers exactly the analyzed files.
    ///
    /// Each artifact is attempted even when an earlier one fails; failures are
    /// collected in [`BatchOutcome::failures`].
    pub fn run_batch_analysis<F>(config: &Config, dir: &Path, order: ScanOrder, on_file: F) -> Result<BatchOutcome>
    where
        F: FnMut(&Path, usize),
    {
        let summaries = FileAnalyzer::new()
            .with_order(order)
            .with_excluded_dir(&config.out_dir)
            .analyze_directory_with(dir, &config.default_ext, on_file)
            .context(format!("Batch analysis failed for {}", dir.display()))?;

        if summaries.is_empty() {
            info!("No {} files found in {}", config.default_ext, dir.display());
            return Ok(BatchOutcome::empty(summaries));
        }

        ensure_out_dir(config)?;

        let report_path = config.artifact_path("report");
        let index_path = config.artifact_path("index");
        let merged_path = config.artifact_path("merged");
        let analyzed: Vec<PathBuf> = summaries.iter().map(|s| s.path.clone()).collect();

        let mut outcome = BatchOutcome::empty(summaries);

        let report = write_report(&report_path, &outcome.summaries)
            .context(format!("Failed to write report {}", report_path.display()));
        outcome.record(report_path, report);

        let index = write_index(&index_path, &outcome.summaries)
            .context(format!("Failed to write index {}", index_path.display()));
        outcome.record(index_path, index);

        let merged = write_merge(&merged_path, &analyzed, dir, &config.default_ext)
            .context(format!("Failed to merge files into {}", merged_path.display()));
        outcome.merged_files = outcome.record(merged_path, merged).unwrap_or(0);

        Ok(outcome)
    }
}
