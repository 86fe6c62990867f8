//! Text block primitives shared by the frame decorator and the grid engine.
//!
//! A block is a string of newline separated lines. Widths are measured in
//! display cells with ANSI escapes ignored, so styled content can be clipped
//! and padded without corrupting its colours.

use std::iter::{self, Peekable};
use std::str::Chars;

use crate::geometry::Size;
use crate::width::{char_width, display_width};

const ESC: char = '\x1b';
const BEL: char = '\x07';
const RESET: &str = "\x1b[0m";

/// Split a block into its lines. The empty block has no lines.
pub fn lines(block: &str) -> Vec<&str> {
    if block.is_empty() {
        Vec::new()
    } else {
        block.split('\n').collect()
    }
}

/// Number of newline delimited lines in `block`.
pub fn line_count(block: &str) -> u16 {
    if block.is_empty() {
        return 0;
    }
    let count = block.bytes().filter(|b| *b == b'\n').count() + 1;
    count.min(u16::MAX as usize) as u16
}

/// Display width of the widest line in `block`.
pub fn block_width(block: &str) -> u16 {
    block
        .split('\n')
        .map(display_width)
        .max()
        .unwrap_or(0)
        .min(u16::MAX as usize) as u16
}

/// Clip or pad `line` so it occupies exactly `width` display cells.
pub fn fit_line(line: &str, width: u16) -> String {
    let width = width as usize;
    let current = display_width(line);
    if current == width {
        return line.to_string();
    }
    if current < width {
        let mut out = String::with_capacity(line.len() + width - current);
        out.push_str(line);
        out.extend(iter::repeat(' ').take(width - current));
        return out;
    }
    clip_line(line, width)
}

fn clip_line(line: &str, width: usize) -> String {
    let mut out = String::with_capacity(line.len());
    let mut used = 0;
    let mut styled = false;
    let mut clipped = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == ESC {
            // Escapes past the edge are still copied so hyperlinks and
            // colours opened earlier in the line get closed.
            styled = true;
            copy_escape(&mut chars, &mut out);
            continue;
        }
        if clipped {
            continue;
        }

        let cells = char_width(ch);
        if used + cells > width {
            clipped = true;
            continue;
        }
        out.push(ch);
        used += cells;
    }

    if styled && !out.ends_with(RESET) {
        out.push_str(RESET);
    }
    // A wide glyph straddling the edge leaves a gap.
    out.extend(iter::repeat(' ').take(width - used));
    out
}

/// Copy one escape sequence whose leading ESC was already consumed.
///
/// CSI runs to its final byte, OSC runs to BEL or `ESC \`, anything else is
/// a two character sequence.
fn copy_escape(chars: &mut Peekable<Chars<'_>>, out: &mut String) {
    out.push(ESC);
    match chars.next() {
        Some('[') => {
            out.push('[');
            for next in chars.by_ref() {
                out.push(next);
                if ('\x40'..='\x7e').contains(&next) {
                    break;
                }
            }
        }
        Some(']') => {
            out.push(']');
            while let Some(next) = chars.next() {
                out.push(next);
                if next == BEL {
                    break;
                }
                if next == ESC {
                    if let Some(st) = chars.next_if_eq(&'\\') {
                        out.push(st);
                    }
                    break;
                }
            }
        }
        Some(next) => out.push(next),
        None => {}
    }
}

/// Replace tab characters with spaces up to the next multiple of `tab_width`.
///
/// Tabs have no display width of their own, so content is expanded before it
/// is measured or fitted. Escape sequences do not advance the column.
pub fn expand_tabs(block: &str, tab_width: usize) -> String {
    if !block.contains('\t') {
        return block.to_string();
    }
    let tab_width = tab_width.max(1);
    let mut out = String::with_capacity(block.len() + tab_width);
    let mut column = 0;
    let mut chars = block.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            ESC => copy_escape(&mut chars, &mut out),
            '\t' => {
                let pad = tab_width - column % tab_width;
                out.extend(iter::repeat(' ').take(pad));
                column += pad;
            }
            '\n' => {
                out.push(ch);
                column = 0;
            }
            _ => {
                out.push(ch);
                column += char_width(ch);
            }
        }
    }
    out
}

/// Fit `block` into a `size` box, one entry per output line.
pub fn fit_lines(block: &str, size: Size) -> Vec<String> {
    let height = size.height as usize;
    let mut out: Vec<String> = lines(block)
        .into_iter()
        .take(height)
        .map(|line| fit_line(line, size.width))
        .collect();
    while out.len() < height {
        out.push(" ".repeat(size.width as usize));
    }
    out
}

/// Clip or pad `block` to exactly `size`, without reflowing any line.
pub fn fit_block(block: &str, size: Size) -> String {
    fit_lines(block, size).join("\n")
}

/// Fit every line of `block` to `width`, keeping its line count.
pub fn constrain_width(block: &str, width: u16) -> String {
    lines(block)
        .into_iter()
        .map(|line| fit_line(line, width))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Stack blocks top to bottom.
pub fn join_vertical<S: AsRef<str>>(blocks: &[S]) -> String {
    blocks
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Place blocks side by side, aligned to the top edge.
///
/// Each block keeps its own widest line as its width; shorter blocks are
/// padded with blank lines to the tallest block's height.
pub fn join_horizontal<S: AsRef<str>>(blocks: &[S]) -> String {
    let columns: Vec<(Vec<&str>, u16)> = blocks
        .iter()
        .map(|block| {
            let block = block.as_ref();
            (lines(block), block_width(block))
        })
        .collect();
    let height = columns
        .iter()
        .map(|(lines, _)| lines.len())
        .max()
        .unwrap_or(0);

    let mut rows = Vec::with_capacity(height);
    for row in 0..height {
        let mut line = String::new();
        for (lines, width) in &columns {
            let segment = lines.get(row).copied().unwrap_or("");
            line.push_str(&fit_line(segment, *width));
        }
        rows.push(line);
    }
    rows.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_count_matches_newlines() {
        assert_eq!(line_count(""), 0);
        assert_eq!(line_count("one"), 1);
        assert_eq!(line_count("one\ntwo\nthree"), 3);
        assert_eq!(line_count("trailing\n"), 2);
    }

    #[test]
    fn fit_line_pads_and_clips() {
        assert_eq!(fit_line("ab", 4), "ab  ");
        assert_eq!(fit_line("abcdef", 3), "abc");
        assert_eq!(fit_line("abc", 3), "abc");
    }

    #[test]
    fn clipping_keeps_escapes_and_resets() {
        let clipped = fit_line("\x1b[31mhello\x1b[0m", 2);
        assert_eq!(clipped, "\x1b[31mhe\x1b[0m");
        assert_eq!(display_width(&clipped), 2);
    }

    #[test]
    fn clipping_keeps_hyperlink_sequences_whole() {
        let line = "\x1b]8;;http://x\x07link\x1b]8;;\x07tail";
        let clipped = fit_line(line, 6);
        assert_eq!(clipped, "\x1b]8;;http://x\x07link\x1b]8;;\x07ta\x1b[0m");
        assert_eq!(display_width(&clipped), 6);

        // Closing sequence survives even when the link text itself is cut.
        let cut = fit_line(line, 2);
        assert!(cut.starts_with("\x1b]8;;http://x\x07li"));
        assert!(cut.contains("\x1b]8;;\x07"));
        assert_eq!(display_width(&cut), 2);
    }

    #[test]
    fn string_terminated_osc_is_zero_width() {
        let line = "\x1b]0;title\x1b\\abcdef";
        let clipped = fit_line(line, 3);
        assert_eq!(clipped, "\x1b]0;title\x1b\\abc\x1b[0m");
        assert_eq!(display_width(&clipped), 3);
    }

    #[test]
    fn tabs_expand_to_the_next_stop() {
        assert_eq!(expand_tabs("a\tb", 4), "a   b");
        assert_eq!(expand_tabs("abcd\tx\n\ty", 4), "abcd    x\n    y");
        assert_eq!(expand_tabs("\x1b[31ma\tb", 4), "\x1b[31ma   b");
        assert_eq!(expand_tabs("no tabs", 4), "no tabs");
    }

    #[test]
    fn wide_glyph_at_edge_is_replaced_by_padding() {
        let clipped = fit_line("a日本", 2);
        assert_eq!(clipped, "a ");
    }

    #[test]
    fn fit_block_clips_and_pads_both_axes() {
        let fitted = fit_block("one\ntwo\nthree", Size::new(2, 2));
        assert_eq!(fitted, "on\ntw");

        let padded = fit_block("x", Size::new(3, 3));
        assert_eq!(padded, "x  \n   \n   ");
    }

    #[test]
    fn fit_block_with_zero_height_is_empty() {
        assert_eq!(fit_block("content", Size::new(5, 0)), "");
    }

    #[test]
    fn join_horizontal_top_aligns() {
        let joined = join_horizontal(&["a\nb\nc", "xy"]);
        assert_eq!(joined, "axy\nb  \nc  ");
    }

    #[test]
    fn join_horizontal_skips_empty_blocks() {
        let joined = join_horizontal(&["", "ab", "c"]);
        assert_eq!(joined, "abc");
    }

    #[test]
    fn constrain_width_keeps_line_count() {
        let constrained = constrain_width("long line\nx", 4);
        assert_eq!(constrained, "long\nx   ");
        assert_eq!(line_count(&constrained), 2);
    }
}
