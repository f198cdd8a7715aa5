/// Core module for text analysis
///
/// This module contains the analysis engine: word statistics, line filtering
/// and extraction, directory scanning and per-file summaries.

pub mod analyzer;
pub mod error;
pub mod filter;
pub mod scanner;
pub mod stats;
