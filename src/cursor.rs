//! Terminal cursor helpers for composing ANSI sequences.
//!
//! All functions return owned `String`s or static slices so callers can write
//! them straight into a terminal handle.

const CSI: &str = "\x1b[";

/// Move the cursor to an absolute 1-based `row` and `column`.
pub fn move_to(row: u16, column: u16) -> String {
    format!("{CSI}{row};{column}H")
}

/// Hide the cursor.
pub fn hide() -> &'static str {
    "\x1b[?25l"
}

/// Show the cursor.
pub fn show() -> &'static str {
    "\x1b[?25h"
}

/// Clear the whole screen without moving the cursor.
pub fn clear_screen() -> &'static str {
    "\x1b[2J"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_position_is_well_formed() {
        assert_eq!(move_to(3, 5), "\x1b[3;5H");
    }

    #[test]
    fn visibility_toggles() {
        assert_eq!(hide(), "\x1b[?25l");
        assert_eq!(show(), "\x1b[?25h");
    }
}
