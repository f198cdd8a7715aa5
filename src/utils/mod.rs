/// Utility modules for text analyzer
///
/// This module contains utility functions for file handling, platform
/// capabilities and output formatting.

pub mod file_utils;
pub mod output_formatter;
pub mod platform;
