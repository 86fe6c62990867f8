//! Frame decorator: border and padding around a single child.
//!
//! Styling metrics live in `style`; the frame itself only needs the cell
//! overhead they produce.

mod core;
mod style;

pub use self::core::Frame;
pub use self::style::{BorderGlyphs, BorderKind, DEFAULT_BORDER_COLOR, FrameStyle, Padding};
