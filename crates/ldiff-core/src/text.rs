//! Text helpers shared by renderers.

/// Marker appended to a truncated column.
pub const TRUNCATION_MARKER: char = '>';

/// Fit `s` into exactly `width` characters.
///
/// Shorter strings are padded with spaces. Longer strings keep their first
/// `width - 1` characters followed by [`TRUNCATION_MARKER`]. Widths count
/// `char`s, so multi-byte text is never split inside a code point.
pub fn truncate_or_pad(s: &str, width: usize) -> String {
    let len = s.chars().count();
    if len > width {
        if width == 0 {
            return String::new();
        }
        let mut out: String = s.chars().take(width - 1).collect();
        out.push(TRUNCATION_MARKER);
        out
    } else {
        format!("{s}{}", " ".repeat(width - len))
    }
}

/// Split text into lines, accepting both `\n` and `\r\n` endings.
///
/// A trailing newline does not produce an extra empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.lines().collect()
}
