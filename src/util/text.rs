// src/util/text.rs

/// Truncate body text for display in the note list.
///
/// Text longer than `max_chars` characters is cut and suffixed with `...`.
/// Counts characters, not bytes, so multi-byte text is cut on a boundary.
///
/// # Examples
///
/// ```
/// use jotter::util::text::preview;
///
/// assert_eq!(preview("short", 50), "short");
/// assert_eq!(preview("abcdef", 3), "abc...");
/// ```
pub fn preview(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let truncated: String = text.chars().take(max_chars).collect();
    format!("{truncated}...")
}
