/// File handling utilities
///
/// This module provides the line-oriented reader and writer used by every
/// analysis, plus small helpers for timestamps and extension matching.

use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::SystemTime;

use chrono::{DateTime, Local};
use log::debug;

use crate::core::error::{AnalysisError, Result};

/// Initial read buffer; lines longer than this grow the buffer instead of failing
const READ_BUFFER_SIZE: usize = 64 * 1024;

/// Timestamp layout used in every rendered artifact
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Read a file into its sequence of lines.
///
/// Line terminators (`\n` or `\r\n`) are stripped, empty lines are kept and a
/// final terminator does not produce a trailing empty line. Invalid UTF-8 is
/// replaced rather than rejected.
///
/// # Arguments
///
/// * `file_path` - Path to the file
///
/// # Returns
///
/// The lines in file order, or `NotFound`, `InvalidPath` (directory) or `Io`
pub fn read_lines(file_path: &Path) -> Result<Vec<String>> {
    let metadata = fs::metadata(file_path).map_err(|e| AnalysisError::from_io(file_path, e))?;
    if metadata.is_dir() {
        return Err(AnalysisError::not_a_file(file_path));
    }

    let file = File::open(file_path).map_err(|e| AnalysisError::from_io(file_path, e))?;
    let mut reader = BufReader::with_capacity(READ_BUFFER_SIZE, file);

    let mut lines = Vec::new();
    let mut buffer = Vec::with_capacity(READ_BUFFER_SIZE);
    loop {
        buffer.clear();
        let read = reader
            .read_until(b'\n', &mut buffer)
            .map_err(|e| AnalysisError::from_io(file_path, e))?;
        if read == 0 {
            break;
        }

        if buffer.last() == Some(&b'\n') {
            buffer.pop();
        }
        if buffer.last() == Some(&b'\r') {
            buffer.pop();
        }
        lines.push(String::from_utf8_lossy(&buffer).into_owned());
    }

    debug!("Read {} lines from {}", lines.len(), file_path.display());
    Ok(lines)
}

/// Join lines into file content: `\n` between lines and one terminating `\n`.
/// An empty sequence yields empty content.
pub fn join_lines<S: AsRef<str>>(lines: &[S]) -> String {
    let mut content = String::new();
    for line in lines {
        content.push_str(line.as_ref());
        content.push('\n');
    }
    content
}

/// Write lines to `file_path`, replacing any previous content.
///
/// Reading the file back with [`read_lines`] yields the same sequence.
pub fn write_lines<S: AsRef<str>>(file_path: &Path, lines: &[S]) -> Result<()> {
    write_text(file_path, &join_lines(lines))?;
    debug!("Wrote {} lines to {}", lines.len(), file_path.display());
    Ok(())
}

/// Overwrite `file_path` with `content`
pub fn write_text(file_path: &Path, content: &str) -> Result<()> {
    fs::write(file_path, content).map_err(|e| AnalysisError::from_io(file_path, e))
}

/// Convert a filesystem timestamp to local time
pub fn to_local(time: SystemTime) -> DateTime<Local> {
    DateTime::<Local>::from(time)
}

pub fn format_time(time: &DateTime<Local>) -> String {
    time.format(TIME_FORMAT).to_string()
}

/// Format an optional timestamp, using `n/a` when it is absent
pub fn format_optional_time(time: Option<&DateTime<Local>>) -> String {
    time.map(format_time).unwrap_or_else(|| "n/a".to_string())
}

/// Normalize an extension to its dotted form (`txt` becomes `.txt`)
pub fn normalize_extension(ext: &str) -> String {
    let ext = ext.trim();
    if ext.starts_with('.') {
        ext.to_string()
    } else {
        format!(".{}", ext)
    }
}

/// Case-insensitive comparison of a file name's final `.suffix` with `ext`.
///
/// `ext` must be in dotted form. A name such as `.txt` has extension `.txt`;
/// a name without any dot has no extension and never matches.
pub fn extension_matches(file_name: &str, ext: &str) -> bool {
    match file_name.rfind('.') {
        Some(idx) => file_name[idx..].to_lowercase() == ext.to_lowercase(),
        None => false,
    }
}
