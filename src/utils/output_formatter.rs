/// Output formatter for analysis results
///
/// This module renders file summaries for the console and writes the
/// aggregate artifacts: the report, the index, the merged corpus and the
/// JSON/CSV exports. Every writer replaces its target file.

use std::fmt::Write as _;
use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use colored::Colorize;
use log::info;

use crate::core::analyzer::FileSummary;
use crate::core::error::{self, AnalysisError};
use crate::core::scanner::{self, ScanOrder};
use crate::utils::file_utils::{format_optional_time, format_time, normalize_extension, read_lines, write_text};

/// Format one summary for console output
///
/// # Arguments
///
/// * `summary` - The file summary to display
/// * `use_markdown` - Whether to wrap the block in markdown triple backticks
pub fn format_summary(summary: &FileSummary, use_markdown: bool) -> String {
    let mut output = String::new();

    if use_markdown {
        output.push_str("```\n");
    }

    let _ = writeln!(output, "{}", "File Information".yellow().bold());
    let _ = writeln!(output, "  {} {}", "Path:".cyan(), summary.path.display());
    let _ = writeln!(output, "  {} {} bytes", "Size:".cyan(), summary.size);
    let _ = writeln!(output, "  {} {}", "Created:".cyan(), format_optional_time(summary.created.as_ref()));
    let _ = writeln!(output, "  {} {}", "Modified:".cyan(), format_time(&summary.modified));
    let _ = writeln!(output, "  {} {}", "Lines:".cyan(), summary.line_count);
    let _ = writeln!(
        output,
        "  {} {} | {} {:.2}",
        "Words:".cyan(),
        summary.word_count,
        "Average length:".cyan(),
        summary.average_word_length
    );

    if use_markdown {
        output.push_str("```\n");
    }

    output
}

/// Render the long-form report: a fixed header, then one block per summary
/// followed by a blank line. The creation line is omitted when unknown.
pub fn render_report(summaries: &[FileSummary]) -> String {
    let mut output = String::from("Global Report\n=============\n\n");

    for summary in summaries {
        let _ = writeln!(output, "File: {}", summary.path.display());
        let _ = writeln!(output, "Size: {} bytes", summary.size);
        if let Some(created) = &summary.created {
            let _ = writeln!(output, "Created: {}", format_time(created));
        }
        let _ = writeln!(output, "Modified: {}", format_time(&summary.modified));
        let _ = writeln!(output, "Lines: {}", summary.line_count);
        let _ = writeln!(
            output,
            "Words: {} | Average length: {:.2}",
            summary.word_count, summary.average_word_length
        );
        output.push('\n');
    }

    output
}

/// Render the compact index: `path | size | modified` per summary
pub fn render_index(summaries: &[FileSummary]) -> String {
    let mut output = String::from("Index\n=====\n");

    for summary in summaries {
        let _ = writeln!(
            output,
            "{} | {} | {}",
            summary.path.display(),
            summary.size,
            format_time(&summary.modified)
        );
    }

    output
}

/// Concatenate the contents of `paths`: each file's lines joined with `\n`,
/// files separated by one blank line, and a single trailing newline.
pub fn render_merge(paths: &[PathBuf]) -> error::Result<String> {
    let mut output = String::new();

    for (i, path) in paths.iter().enumerate() {
        let lines = read_lines(path)?;
        if i > 0 {
            output.push_str("\n\n");
        }
        output.push_str(&lines.join("\n"));
    }
    output.push('\n');

    Ok(output)
}

/// Write the report for `summaries` to `output_path`
pub fn write_report(output_path: &Path, summaries: &[FileSummary]) -> error::Result<()> {
    write_text(output_path, &render_report(summaries))?;
    info!("Report written to {}", output_path.display());
    Ok(())
}

/// Write the index for `summaries` to `output_path`
pub fn write_index(output_path: &Path, summaries: &[FileSummary]) -> error::Result<()> {
    write_text(output_path, &render_index(summaries))?;
    info!("Index written to {}", output_path.display());
    Ok(())
}

/// Merge every `ext` file under `dir` into `output_path`.
///
/// Fails with `EmptyResult` when the scan finds nothing; the output file is
/// not touched in that case.
///
/// # Returns
///
/// The number of merged files
pub fn merge_files(dir: &Path, ext: &str, order: ScanOrder, output_path: &Path) -> error::Result<usize> {
    let files = scanner::list_files(dir, ext, order)?;
    write_merge(output_path, &files, dir, ext)
}

/// Merge exactly `paths` into `output_path`, in the given order.
///
/// `dir` and `ext` only describe where `paths` came from; an empty `paths`
/// fails with `EmptyResult` for them and leaves `output_path` untouched.
pub fn write_merge(output_path: &Path, paths: &[PathBuf], dir: &Path, ext: &str) -> error::Result<usize> {
    if paths.is_empty() {
        return Err(AnalysisError::EmptyResult {
            dir: dir.to_path_buf(),
            ext: normalize_extension(ext),
        });
    }

    let merged = render_merge(paths)?;
    write_text(output_path, &merged)?;
    info!("Merged {} files into {}", paths.len(), output_path.display());

    Ok(paths.len())
}

/// Export summaries to a pretty-printed JSON array
pub fn export_summaries_json(summaries: &[FileSummary], output_path: &Path) -> Result<()> {
    let file = File::create(output_path)
        .context(format!("Failed to create JSON output file: {}", output_path.display()))?;

    serde_json::to_writer_pretty(file, summaries).context("Failed to write JSON data")?;

    Ok(())
}

/// Create a CSV report with one row per summary
pub fn create_csv_report(summaries: &[FileSummary], output_path: &Path) -> Result<()> {
    let file = File::create(output_path)
        .context(format!("Failed to create CSV output file: {}", output_path.display()))?;

    let mut writer = csv::Writer::from_writer(file);

    writer
        .write_record(["Path", "Size", "Created", "Modified", "Lines", "Words", "Average Length"])
        .context("Failed to write CSV header")?;

    for summary in summaries {
        writer
            .write_record([
                summary.path.display().to_string(),
                summary.size.to_string(),
                format_optional_time(summary.created.as_ref()),
                format_time(&summary.modified),
                summary.line_count.to_string(),
                summary.word_count.to_string(),
                format!("{:.2}", summary.average_word_length),
            ])
            .context("Failed to write CSV record")?;
    }

    writer.flush().context("Failed to flush CSV writer")?;

    Ok(())
}

/// One console line per analyzed file, preceded by the file count
pub fn create_batch_listing(summaries: &[FileSummary]) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "{} {}", "Files analyzed:".green(), summaries.len());
    for summary in summaries {
        let _ = writeln!(
            output,
            "- {} | lines: {} | words: {}",
            summary.path.display(),
            summary.line_count,
            summary.word_count
        );
    }

    output
}
