//! Top-level section extraction over converted wiki markup.

/// Error returned when a requested section does not exist.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("section {requested} out of range: document has {available} top-level section(s)")]
pub struct SectionError {
    /// Requested 1-indexed section number.
    pub requested: usize,
    /// Number of top-level sections in the document.
    pub available: usize,
}

/// Extract the nth top-level section (1-indexed) of a wiki markup document.
///
/// A top-level section runs from an `h1.` heading line (inclusive) up to
/// the next `h1.` heading line or the end of the document. Deeper headings
/// do not start a new section, and content before the first `h1.` heading
/// belongs to no section.
///
/// # Errors
///
/// Returns [`SectionError`] if `n` is zero or exceeds the number of
/// top-level sections.
pub fn section(markup: &str, n: usize) -> Result<String, SectionError> {
    let lines: Vec<&str> = markup.lines().collect();
    let starts: Vec<usize> = lines
        .iter()
        .enumerate()
        .filter(|(_, line)| is_top_level_heading(line))
        .map(|(index, _)| index)
        .collect();

    if n == 0 || n > starts.len() {
        return Err(SectionError {
            requested: n,
            available: starts.len(),
        });
    }

    let begin = starts[n - 1];
    let end = starts.get(n).copied().unwrap_or(lines.len());
    Ok(lines[begin..end].join("\n"))
}

fn is_top_level_heading(line: &str) -> bool {
    line.starts_with("h1. ")
}
