/// Core file analyzer implementation
///
/// This file contains the FileAnalyzer which builds a FileSummary for a single
/// file and runs batch analysis over a directory, one file at a time.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use chrono::{DateTime, Local};
use log::{debug, info};
use serde::Serialize;

use crate::core::error::{AnalysisError, Result};
use crate::core::scanner::{self, ScanOrder};
use crate::core::stats::word_stats;
use crate::utils::file_utils::{read_lines, to_local};
use crate::utils::platform;

/// Descriptive record for one analyzed file
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileSummary {
    /// Path as given by the caller or produced by the scanner
    pub path: PathBuf,

    /// Size in bytes
    pub size: u64,

    /// Last modification time
    pub modified: DateTime<Local>,

    /// Creation time, when the platform and filesystem report one
    pub created: Option<DateTime<Local>>,

    pub line_count: usize,
    pub word_count: usize,

    /// Average cleaned word length in characters; 0.0 when `word_count` is 0
    pub average_word_length: f64,
}

impl FileSummary {
    pub fn has_created(&self) -> bool {
        self.created.is_some()
    }
}

/// Sequential analyzer for single files and directories
#[derive(Debug, Clone, Default)]
pub struct FileAnalyzer {
    /// Order used when scanning directories
    order: ScanOrder,

    /// Directory whose contents directory scans skip
    excluded_dir: Option<PathBuf>,
}

impl FileAnalyzer {
    /// Create a new FileAnalyzer that keeps filesystem traversal order
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `order` for directory scans
    pub fn with_order(mut self, order: ScanOrder) -> Self {
        self.order = order;
        self
    }

    pub fn order(&self) -> ScanOrder {
        self.order
    }

    /// Skip files under `dir` during directory scans, e.g. where this run
    /// writes its own artifacts
    pub fn with_excluded_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.excluded_dir = Some(dir.into());
        self
    }

    fn is_excluded(&self, path: &Path) -> bool {
        let Some(excluded) = &self.excluded_dir else {
            return false;
        };
        if path.starts_with(excluded) {
            return true;
        }
        // Relative and absolute spellings of the same directory
        match (fs::canonicalize(excluded), fs::canonicalize(path)) {
            (Ok(excluded), Ok(path)) => path.starts_with(excluded),
            _ => false,
        }
    }

    /// Analyze one file
    ///
    /// # Arguments
    ///
    /// * `file_path` - Path to the file to analyze
    ///
    /// # Returns
    ///
    /// The summary together with the loaded lines, so callers can filter
    /// without reading the file again
    pub fn analyze_file(&self, file_path: &Path) -> Result<(FileSummary, Vec<String>)> {
        info!("Analyzing file: {}", file_path.display());
        let start_time = Instant::now();

        let metadata = fs::metadata(file_path).map_err(|e| AnalysisError::from_io(file_path, e))?;
        if metadata.is_dir() {
            return Err(AnalysisError::not_a_file(file_path));
        }

        let lines = read_lines(file_path)?;
        let stats = word_stats(&lines);

        let modified = metadata
            .modified()
            .map_err(|e| AnalysisError::Io { path: file_path.to_path_buf(), source: e })?;
        let created = platform::creation_time(&metadata).map(to_local);

        let summary = FileSummary {
            path: file_path.to_path_buf(),
            size: metadata.len(),
            modified: to_local(modified),
            created,
            line_count: lines.len(),
            word_count: stats.word_count,
            average_word_length: stats.average_length,
        };

        debug!(
            "{}: {} lines, {} words, created time {}",
            file_path.display(),
            summary.line_count,
            summary.word_count,
            if summary.has_created() { "available" } else { "unavailable" }
        );
        info!("Analysis completed in {:?}", start_time.elapsed());

        Ok((summary, lines))
    }

    /// Summarize every file under `dir` with extension `ext`
    pub fn analyze_directory(&self, dir: &Path, ext: &str) -> Result<Vec<FileSummary>> {
        self.analyze_directory_with(dir, ext, |_, _| {})
    }

    /// Like [`analyze_directory`](Self::analyze_directory), calling
    /// `on_file(path, total)` before each file is analyzed.
    ///
    /// Files are processed strictly in scan order and the first failure aborts
    /// the whole batch.
    pub fn analyze_directory_with<F>(&self, dir: &Path, ext: &str, mut on_file: F) -> Result<Vec<FileSummary>>
    where
        F: FnMut(&Path, usize),
    {
        let mut files = scanner::list_files(dir, ext, self.order)?;
        if self.excluded_dir.is_some() {
            files.retain(|path| {
                let skip = self.is_excluded(path);
                if skip {
                    debug!("Skipping {} in excluded directory", path.display());
                }
                !skip
            });
        }
        let total = files.len();

        let mut summaries = Vec::with_capacity(total);
        for path in &files {
            on_file(path, total);
            let (summary, _) = self.analyze_file(path)?;
            summaries.push(summary);
        }

        info!("Analyzed {} files in {}", summaries.len(), dir.display());
        Ok(summaries)
    }
}

/// Analyze one file with default settings
pub fn summarize_file(file_path: &Path) -> Result<(FileSummary, Vec<String>)> {
    FileAnalyzer::new().analyze_file(file_path)
}

/// Summarize every matching file under `dir`, in filesystem traversal order
pub fn batch_analyze(dir: &Path, ext: &str) -> Result<Vec<FileSummary>> {
    FileAnalyzer::new().analyze_directory(dir, ext)
}
