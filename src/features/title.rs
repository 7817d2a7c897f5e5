pub const TITLE_MAX_WORDS: usize = 12;
pub const UNTITLED: &str = "Untitled Summary";

/// Derives a short title from the first words of a summary.
///
/// Titles that do not end in a period get a trailing `...`, including the
/// fallback used for an empty summary.
#[must_use]
pub fn derive_title(summary: &str) -> String {
    let mut title = summary
        .split_whitespace()
        .take(TITLE_MAX_WORDS)
        .collect::<Vec<_>>()
        .join(" ");

    if title.is_empty() {
        title = UNTITLED.to_string();
    }
    if !title.ends_with('.') {
        title.push_str("...");
    }
    title
}
