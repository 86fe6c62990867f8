//! Terminal display width helpers.
//!
//! Provides ANSI-aware width calculation for rendered content so layout
//! padding stays aligned when components emit styled text.

use unicode_width::UnicodeWidthChar;

/// Compute the display width of a string after stripping ANSI escapes.
///
/// Tabs count as zero cells; expand them first with
/// [`expand_tabs`](crate::text::expand_tabs).
pub fn display_width(text: &str) -> usize {
    let clean = strip_ansi_escapes::strip(text);
    let clean_str = String::from_utf8_lossy(&clean);
    unicode_width::UnicodeWidthStr::width(&*clean_str)
}

/// Display width of a single character; control characters count as zero.
pub fn char_width(ch: char) -> usize {
    ch.width().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ignores_escape_sequences() {
        assert_eq!(display_width("\x1b[31mred\x1b[0m"), 3);
    }

    #[test]
    fn counts_wide_glyphs() {
        assert_eq!(display_width("日本"), 4);
        assert_eq!(char_width('╭'), 1);
    }
}
