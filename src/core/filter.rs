/// Keyword filtering and head/tail extraction over line sequences
///
/// Keyword matching is a case-insensitive substring test against the whole
/// line. A keyword that is empty after trimming matches nothing.

/// Normalized keyword, or `None` when it is blank
fn normalize_keyword(keyword: &str) -> Option<String> {
    let keyword = keyword.trim().to_lowercase();
    if keyword.is_empty() {
        None
    } else {
        Some(keyword)
    }
}

fn line_matches(line: &str, keyword: &str) -> bool {
    line.to_lowercase().contains(keyword)
}

/// Count the lines containing `keyword`
pub fn count_matching<S: AsRef<str>>(lines: &[S], keyword: &str) -> usize {
    match normalize_keyword(keyword) {
        Some(keyword) => lines
            .iter()
            .filter(|line| line_matches(line.as_ref(), &keyword))
            .count(),
        None => 0,
    }
}

/// Keep the lines that contain `keyword` (`include == true`) or the lines
/// that do not (`include == false`), in original order.
///
/// Returns an empty vector when the keyword is blank, whatever `include` is.
pub fn filter_lines<'a, S: AsRef<str>>(lines: &'a [S], keyword: &str, include: bool) -> Vec<&'a str> {
    let Some(keyword) = normalize_keyword(keyword) else {
        return Vec::new();
    };

    lines
        .iter()
        .map(|line| -> &str { line.as_ref() })
        .filter(|line| line_matches(line, &keyword) == include)
        .collect()
}

/// First `n` lines; `n` larger than the sequence is clamped
pub fn head<T>(lines: &[T], n: usize) -> &[T] {
    &lines[..n.min(lines.len())]
}

/// Last `n` lines in original order; `n` larger than the sequence is clamped
pub fn tail<T>(lines: &[T], n: usize) -> &[T] {
    let n = n.min(lines.len());
    &lines[lines.len() - n..]
}
