/// Error types for the text analysis engine
///
/// Every failure carries the offending path so callers can report or retry.

use std::io;
use std::path::{Path, PathBuf};

/// Coarse classification of an [`AnalysisError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    InvalidPath,
    Io,
    EmptyResult,
}

/// Errors produced by loading, scanning, summarizing and writing
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    /// The path does not exist
    #[error("Path not found: {}", .path.display())]
    NotFound { path: PathBuf },

    /// A directory was given where a file is required, or vice versa
    #[error("Invalid path {}: {reason}", .path.display())]
    InvalidPath { path: PathBuf, reason: String },

    /// Any read, write, stat or traversal failure other than not-found
    #[error("I/O error on {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A merge was requested over zero matching files
    #[error("No {ext} files to merge in {}", .dir.display())]
    EmptyResult { dir: PathBuf, ext: String },
}

impl AnalysisError {
    /// Map an `io::Error` for `path`, keeping not-found distinct
    pub fn from_io(path: &Path, err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::NotFound {
            AnalysisError::NotFound { path: path.to_path_buf() }
        } else {
            AnalysisError::Io { path: path.to_path_buf(), source: err }
        }
    }

    pub fn not_a_file(path: &Path) -> Self {
        AnalysisError::InvalidPath {
            path: path.to_path_buf(),
            reason: "is a directory, expected a file".to_string(),
        }
    }

    pub fn not_a_directory(path: &Path) -> Self {
        AnalysisError::InvalidPath {
            path: path.to_path_buf(),
            reason: "is not a directory".to_string(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            AnalysisError::NotFound { .. } => ErrorKind::NotFound,
            AnalysisError::InvalidPath { .. } => ErrorKind::InvalidPath,
            AnalysisError::Io { .. } => ErrorKind::Io,
            AnalysisError::EmptyResult { .. } => ErrorKind::EmptyResult,
        }
    }

    /// The path the failure refers to (the scanned directory for `EmptyResult`)
    pub fn path(&self) -> &Path {
        match self {
            AnalysisError::NotFound { path }
            | AnalysisError::InvalidPath { path, .. }
            | AnalysisError::Io { path, .. } => path,
            AnalysisError::EmptyResult { dir, .. } => dir,
        }
    }
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
