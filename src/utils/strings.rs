//! String utility functions

/// Split file content into lines, keeping each line's `\n` terminator.
///
/// The final line keeps no terminator when the content does not end with one,
/// so concatenating the result always reproduces the input byte-for-byte:
/// - `"a\nb"` → `["a\n", "b"]`
/// - `"a\n"` → `["a\n"]`
/// - `"a\n\n"` → `["a\n", "\n"]`
///
/// # Examples
///
/// ```
/// use configkeys::utils::strings::split_lines_keep_terminators;
///
/// assert_eq!(split_lines_keep_terminators("a\nb"), vec!["a\n", "b"]);
/// assert_eq!(split_lines_keep_terminators("a\n\n"), vec!["a\n", "\n"]);
/// assert_eq!(split_lines_keep_terminators(""), Vec::<String>::new());
/// ```
pub fn split_lines_keep_terminators(s: &str) -> Vec<String> {
    s.split_inclusive('\n').map(String::from).collect()
}

/// Truncate a string to at most `max_width` characters, ending in "..." if cut.
///
/// Counts characters, not bytes, so multi-byte values are never split.
pub fn truncate_value(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else if max_width <= 3 {
        s.chars().take(max_width).collect()
    } else {
        format!("{}...", s.chars().take(max_width - 3).collect::<String>())
    }
}
