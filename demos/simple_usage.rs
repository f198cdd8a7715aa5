/// Simple example demonstrating how to use the Text Analyzer library

use anyhow::Result;
use std::path::Path;
use text_analyzer::{analyze_file, count_matching, filter_lines, read_lines, tail};

fn main() -> Result<()> {
    // Path to file for analysis
    let file_path = Path::new("demos/sample_data.txt");

    // Create sample file
    std::fs::write(
        file_path,
        r#"Rust makes systems programming approachable.
Release 1.0 shipped in 2015.
rustfmt keeps formatting consistent!
Cargo builds, tests and documents crates.
"#,
    )?;

    println!("Analyzing file: {}", file_path.display());

    let summary = analyze_file(file_path)?;
    println!(
        "{} lines, {} words, average word length {:.2}",
        summary.line_count, summary.word_count, summary.average_word_length
    );

    let lines = read_lines(file_path)?;
    println!("Lines mentioning \"rust\": {}", count_matching(&lines, "rust"));
    for line in filter_lines(&lines, "rust", false) {
        println!("  without keyword: {}", line);
    }
    for line in tail(&lines, 1) {
        println!("  last line: {}", line);
    }

    Ok(())
}
