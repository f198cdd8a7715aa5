/// Word statistics over a sequence of lines
///
/// Tokens are whitespace-delimited. A token is counted as a word once its
/// leading and trailing punctuation/symbol characters are stripped, provided
/// the remainder is non-empty and not made only of decimal digits.

use serde::Serialize;
use unicode_general_category::{get_general_category, GeneralCategory};

/// Result of running the tokenizer over a line sequence
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct WordStats {
    /// Number of counted words
    pub word_count: usize,
    /// Sum of the cleaned word lengths, in characters
    pub total_length: usize,
    /// `total_length / word_count`, or 0.0 when no word was counted
    pub average_length: f64,
}

/// Punctuation (P*) or symbol (S*) general category
fn is_punct_or_symbol(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::ConnectorPunctuation
            | GeneralCategory::DashPunctuation
            | GeneralCategory::OpenPunctuation
            | GeneralCategory::ClosePunctuation
            | GeneralCategory::InitialPunctuation
            | GeneralCategory::FinalPunctuation
            | GeneralCategory::OtherPunctuation
            | GeneralCategory::MathSymbol
            | GeneralCategory::CurrencySymbol
            | GeneralCategory::ModifierSymbol
            | GeneralCategory::OtherSymbol
    )
}

/// Strip leading and trailing punctuation/symbol characters from a token
pub fn clean_token(token: &str) -> &str {
    token.trim_matches(is_punct_or_symbol)
}

/// True when `s` is non-empty and every character is a decimal digit
pub fn is_numeric(s: &str) -> bool {
    !s.is_empty()
        && s
            .chars()
            .all(|c| get_general_category(c) == GeneralCategory::DecimalNumber)
}

/// Compute word count and average word length for `lines`.
///
/// # Arguments
///
/// * `lines` - Line sequence, in file order
///
/// # Returns
///
/// The word statistics; all zero when no token qualifies as a word
pub fn word_stats<S: AsRef<str>>(lines: &[S]) -> WordStats {
    let mut word_count = 0usize;
    let mut total_length = 0usize;

    for line in lines {
        for token in line.as_ref().split_whitespace() {
            let cleaned = clean_token(token);
            if cleaned.is_empty() || is_numeric(cleaned) {
                continue;
            }
            word_count += 1;
            total_length += cleaned.chars().count();
        }
    }

    if word_count == 0 {
        return WordStats::default();
    }

    WordStats {
        word_count,
        total_length,
        average_length: total_length as f64 / word_count as f64,
    }
}
