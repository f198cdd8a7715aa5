/// Text Analyzer - plain-text file inspection and reporting
///
/// The main entry point for the text analyzer application. It parses
/// command-line arguments, loads the configuration and runs either the
/// single-file or the multi-file analysis flow.

use anyhow::{bail, Result};
use clap::{ArgAction, Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, LevelFilter};
use std::fs::File;
use std::path::PathBuf;
use std::process;
use std::time::Instant;

use text_analyzer::app::{run_batch_analysis, run_file_analysis, BatchOutcome};
use text_analyzer::config::{load_config, Config};
use text_analyzer::utils::output_formatter;
use text_analyzer::ScanOrder;

/// Command line argument structure
#[derive(Parser, Debug)]
#[command(
    name = "text_analyzer",
    version,
    about = "Inspect, filter and summarize plain-text files",
    long_about = "This tool analyzes plain-text files and writes derived artifacts:
- word statistics and file metadata
- keyword include/exclude subsets and head/tail extracts
- multi-file reports, a compact index and a merged corpus"
)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Path to configuration file
    #[arg(long = "config", default_value = "config.json")]
    config: PathBuf,

    /// Directory to store all output files (overrides the configuration)
    #[arg(long = "output-dir")]
    output_dir: Option<PathBuf>,

    /// File extension to scan and to name artifacts with (overrides the configuration)
    #[arg(long = "ext")]
    ext: Option<String>,

    /// Output in markdown format (wrapped in triple backticks)
    #[arg(long = "md", action = ArgAction::SetTrue)]
    md: bool,

    /// Suppress terminal output
    #[arg(long = "quiet", action = ArgAction::SetTrue)]
    quiet: bool,

    /// Set logging level (default: INFO)
    #[arg(long = "log-level", default_value = "info")]
    log_level: LevelFilter,

    /// Log file path (default: text_analyzer.log)
    #[arg(long = "log-file", default_value = "text_analyzer.log")]
    log_file: String,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze one file and write filtered, head and tail extracts
    File {
        /// File to analyze (default: configured default file)
        path: Option<PathBuf>,

        /// Keyword for the include/exclude filters
        #[arg(long = "keyword", short = 'k')]
        keyword: String,

        /// Number of lines for the head extract
        #[arg(long = "head", default_value = "5")]
        head: usize,

        /// Number of lines for the tail extract
        #[arg(long = "tail", default_value = "5")]
        tail: usize,
    },

    /// Analyze every matching file in a directory and write report, index and merge
    Batch {
        /// Directory to analyze recursively (default: configured base directory)
        dir: Option<PathBuf>,

        /// Process files in path order instead of filesystem order
        #[arg(long = "sorted", action = ArgAction::SetTrue)]
        sorted: bool,

        /// Export summaries to JSON file
        #[arg(long = "json")]
        json: Option<PathBuf>,

        /// Export summaries to CSV file
        #[arg(long = "csv")]
        csv: Option<PathBuf>,
    },
}

/// Main entry point function
fn main() -> Result<()> {
    let start_time = Instant::now();

    // Parse command line arguments
    let args = Args::parse();

    // Set up logging
    let _ = setup_logging(&args);

    // Load configuration, then apply command line overrides
    let mut config = load_config(Some(args.config.as_path()))?;
    if let Some(output_dir) = &args.output_dir {
        config.out_dir = output_dir.clone();
    }
    if let Some(ext) = &args.ext {
        config.default_ext = ext.clone();
    }

    // Run the requested analysis
    let outcome = match &args.command {
        Command::File { path, keyword, head, tail } => {
            run_file_command(&config, &args, path.as_ref(), keyword, *head, *tail)
        }
        Command::Batch { dir, sorted, json, csv } => {
            run_batch_command(&config, &args, dir.as_ref(), *sorted, json.as_ref(), csv.as_ref())
        }
    };

    // Report the first error and exit non-zero
    if let Err(e) = outcome {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        process::exit(1);
    }

    info!("Finished in {:?}", start_time.elapsed());
    if !args.quiet {
        println!(
            "{} {:.2} seconds",
            "Time elapsed:".green(),
            start_time.elapsed().as_secs_f64()
        );
    }

    Ok(())
}

/// Set up logging with file output
fn setup_logging(args: &Args) -> Result<()> {
    let mut builder = env_logger::Builder::new();

    builder.filter_level(args.log_level);

    builder.format(|buf, record| {
        use chrono::Local;
        use std::io::Write;
        writeln!(
            buf,
            "{} - {} - {} - {}",
            Local::now().format("%Y-%m-%d %H:%M:%S"),
            record.level(),
            record.target(),
            record.args()
        )
    });

    if let Ok(file) = File::create(&args.log_file) {
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.try_init()?;

    Ok(())
}

fn run_file_command(
    config: &Config,
    args: &Args,
    path: Option<&PathBuf>,
    keyword: &str,
    head: usize,
    tail: usize,
) -> Result<()> {
    // Fall back to the configured default file
    let path = path.unwrap_or(&config.default_file);
    let outcome = run_file_analysis(config, path, keyword, head, tail)?;

    if args.quiet {
        return Ok(());
    }

    println!("{}", output_formatter::format_summary(&outcome.summary, args.md));
    println!(
        "{} \"{}\": {}",
        "Lines containing".green(),
        keyword,
        outcome.keyword_matches
    );
    for artifact in &outcome.artifacts {
        println!("{} {}", "OK:".green(), artifact.display());
    }

    Ok(())
}

fn run_batch_command(
    config: &Config,
    args: &Args,
    dir: Option<&PathBuf>,
    sorted: bool,
    json: Option<&PathBuf>,
    csv: Option<&PathBuf>,
) -> Result<()> {
    let dir = dir.unwrap_or(&config.base_dir);
    let order = if sorted { ScanOrder::Lexicographic } else { ScanOrder::Traversal };

    // The progress bar is created on the first file, once the total is known
    let mut progress_bar: Option<ProgressBar> = None;
    let quiet = args.quiet;
    let outcome = run_batch_analysis(config, dir, order, |_, total| {
        if quiet {
            return;
        }
        let pb = progress_bar.get_or_insert_with(|| {
            let pb = ProgressBar::new(total as u64);
            if let Ok(style) = ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files ({eta})")
            {
                pb.set_style(style.progress_chars("#>-"));
            }
            pb
        });
        pb.inc(1);
    })?;

    if let Some(pb) = progress_bar {
        pb.finish_with_message("Analysis complete");
    }

    if outcome.summaries.is_empty() {
        if !quiet {
            println!("No {} files found in {}", config.default_ext, dir.display());
        }
        return Ok(());
    }

    // Failed artifacts are always reported, even in quiet mode
    for (path, e) in &outcome.failures {
        eprintln!("{} {}: {:#}", "FAILED:".red().bold(), path.display(), e);
    }

    // Optional exports
    if let Some(json_path) = json {
        output_formatter::export_summaries_json(&outcome.summaries, json_path)?;
    }
    if let Some(csv_path) = csv {
        output_formatter::create_csv_report(&outcome.summaries, csv_path)?;
    }

    if !quiet {
        print_batch_results(&outcome, json, csv);
    }

    if !outcome.is_complete() {
        bail!(
            "{} of {} artifacts could not be written",
            outcome.failures.len(),
            outcome.failures.len() + outcome.artifacts.len()
        );
    }

    Ok(())
}

fn print_batch_results(outcome: &BatchOutcome, json: Option<&PathBuf>, csv: Option<&PathBuf>) {
    println!("\n{}", "Analysis Complete".bold());
    print!("{}", output_formatter::create_batch_listing(&outcome.summaries));
    for artifact in &outcome.artifacts {
        println!("{} {}", "OK:".green(), artifact.display());
    }
    println!("{} {}", "Merged files:".green(), outcome.merged_files);
    for extra in json.into_iter().chain(csv) {
        println!("{} {}", "OK:".green(), extra.display());
    }
}
