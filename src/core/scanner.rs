/// Recursive directory scanning for files with a given extension

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};
use walkdir::WalkDir;

use crate::core::error::{AnalysisError, Result};
use crate::utils::file_utils::{extension_matches, normalize_extension};

/// Order in which scanned paths are returned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanOrder {
    /// Whatever order the filesystem yields; not guaranteed to be sorted
    #[default]
    Traversal,
    /// Sorted by full path
    Lexicographic,
}

/// List every regular file under `dir` whose extension matches `ext`
/// case-insensitively, descending into subdirectories.
///
/// # Arguments
///
/// * `dir` - Root directory
/// * `ext` - Extension such as `.txt` (a missing leading dot is added)
/// * `order` - Traversal order or lexicographic order
///
/// # Returns
///
/// Matching paths, or `NotFound`/`InvalidPath` for a bad root and `Io` for
/// any traversal failure
pub fn list_files(dir: &Path, ext: &str, order: ScanOrder) -> Result<Vec<PathBuf>> {
    let metadata = fs::metadata(dir).map_err(|e| AnalysisError::from_io(dir, e))?;
    if !metadata.is_dir() {
        return Err(AnalysisError::not_a_directory(dir));
    }

    let ext = normalize_extension(ext);
    let mut files = Vec::new();

    for entry in WalkDir::new(dir).follow_links(false) {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(dir).to_path_buf();
            AnalysisError::Io { path, source: e.into() }
        })?;

        // Links count when their target is a regular file
        let file_type = entry.file_type();
        let is_file = file_type.is_file() || (file_type.is_symlink() && entry.path().is_file());
        if !is_file {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy();
        if extension_matches(&file_name, &ext) {
            debug!("Matched {}", entry.path().display());
            files.push(entry.into_path());
        }
    }

    if order == ScanOrder::Lexicographic {
        files.sort();
    }

    info!("Found {} {} files under {}", files.len(), ext, dir.display());
    Ok(files)
}
