use crossterm::style::Color;
use serde::{Deserialize, Serialize};

use crate::geometry::Size;

/// Border glyph families.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderKind {
    None,
    Normal,
    #[default]
    Rounded,
    Thick,
    Double,
}

/// Glyphs for each edge and corner of a border.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderGlyphs {
    pub top_left: char,
    pub top: char,
    pub top_right: char,
    pub left: char,
    pub right: char,
    pub bottom_left: char,
    pub bottom: char,
    pub bottom_right: char,
}

impl BorderGlyphs {
    const fn new(corners: [char; 4], horizontal: char, vertical: char) -> Self {
        Self {
            top_left: corners[0],
            top: horizontal,
            top_right: corners[1],
            left: vertical,
            right: vertical,
            bottom_left: corners[2],
            bottom: horizontal,
            bottom_right: corners[3],
        }
    }
}

impl BorderKind {
    /// Cells the border occupies on each side.
    pub fn thickness(self) -> u16 {
        match self {
            Self::None => 0,
            _ => 1,
        }
    }

    pub fn glyphs(self) -> Option<BorderGlyphs> {
        match self {
            Self::None => None,
            Self::Normal => Some(BorderGlyphs::new(['┌', '┐', '└', '┘'], '─', '│')),
            Self::Rounded => Some(BorderGlyphs::new(['╭', '╮', '╰', '╯'], '─', '│')),
            Self::Thick => Some(BorderGlyphs::new(['┏', '┓', '┗', '┛'], '━', '┃')),
            Self::Double => Some(BorderGlyphs::new(['╔', '╗', '╚', '╝'], '═', '║')),
        }
    }
}

/// Blank cells between the border and the content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Padding {
    #[serde(default)]
    pub vertical: u16,
    #[serde(default)]
    pub horizontal: u16,
}

impl Padding {
    pub const fn new(vertical: u16, horizontal: u16) -> Self {
        Self {
            vertical,
            horizontal,
        }
    }

    pub const fn uniform(cells: u16) -> Self {
        Self::new(cells, cells)
    }
}

/// Decoration applied by a [`Frame`](super::Frame).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameStyle {
    #[serde(default)]
    pub border: BorderKind,
    #[serde(default)]
    pub padding: Padding,
    #[serde(default)]
    pub border_color: Option<Color>,
}

impl Default for FrameStyle {
    fn default() -> Self {
        Self {
            border: BorderKind::Rounded,
            padding: Padding::uniform(1),
            border_color: Some(DEFAULT_BORDER_COLOR),
        }
    }
}

pub const DEFAULT_BORDER_COLOR: Color = Color::Rgb {
    r: 0x87,
    g: 0x4b,
    b: 0xfd,
};

impl FrameStyle {
    /// Undecorated style: no border, no padding.
    pub fn plain() -> Self {
        Self {
            border: BorderKind::None,
            padding: Padding::default(),
            border_color: None,
        }
    }

    pub fn with_border(mut self, border: BorderKind) -> Self {
        self.border = border;
        self
    }

    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_border_color(mut self, color: Option<Color>) -> Self {
        self.border_color = color;
        self
    }

    /// Horizontal and vertical cells consumed by border and padding together.
    pub fn overhead(&self) -> Size {
        let border = self.border.thickness().saturating_mul(2);
        Size::new(
            border.saturating_add(self.padding.horizontal.saturating_mul(2)),
            border.saturating_add(self.padding.vertical.saturating_mul(2)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_overhead_is_four_cells_each_way() {
        assert_eq!(FrameStyle::default().overhead(), Size::new(4, 4));
    }

    #[test]
    fn borderless_overhead_is_padding_only() {
        let style = FrameStyle::plain().with_padding(Padding::new(1, 2));
        assert_eq!(style.overhead(), Size::new(4, 2));
    }

    #[test]
    fn style_deserializes_with_defaults() {
        let style: FrameStyle =
            serde_json::from_str(r#"{"border":"double","padding":{"horizontal":3}}"#).unwrap();
        assert_eq!(style.border, BorderKind::Double);
        assert_eq!(style.padding, Padding::new(0, 3));
        assert_eq!(style.border_color, None);
        assert_eq!(style.overhead(), Size::new(8, 2));
    }
}
