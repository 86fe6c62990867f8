use std::io::Write;

use crate::cursor;
use crate::error::Result;
use crate::geometry::Rect;
use crate::text::fit_lines;

/// Renderer runtime parameters.
#[derive(Debug, Clone, Default)]
pub struct RendererSettings {
    /// Zero-based (row, column) to leave the cursor at after painting.
    pub restore_cursor: Option<(u16, u16)>,
    /// Hide the cursor while painting and show it again afterwards.
    pub hide_cursor: bool,
}

/// ANSI escape code renderer writing directly to a terminal handle.
#[derive(Debug, Clone, Default)]
pub struct AnsiRenderer {
    settings: RendererSettings,
}

impl AnsiRenderer {
    pub fn new(settings: RendererSettings) -> Self {
        Self { settings }
    }

    pub fn with_default() -> Self {
        Self::new(RendererSettings::default())
    }

    pub fn settings(&self) -> &RendererSettings {
        &self.settings
    }

    /// Paint `block` into `area`, clipping or padding it to the area's size.
    pub fn paint(&mut self, writer: &mut impl Write, area: Rect, block: &str) -> Result<()> {
        if area.width == 0 || area.height == 0 {
            return Ok(());
        }

        if self.settings.hide_cursor {
            writer.write_all(cursor::hide().as_bytes())?;
        }

        for (offset, line) in fit_lines(block, area.size()).iter().enumerate() {
            let row = area.y.saturating_add(offset as u16).saturating_add(1);
            write!(writer, "{}{}", cursor::move_to(row, area.x.saturating_add(1)), line)?;
        }

        if let Some((row, col)) = self.settings.restore_cursor {
            writer.write_all(cursor::move_to(row + 1, col + 1).as_bytes())?;
        }

        if self.settings.hide_cursor {
            writer.write_all(cursor::show().as_bytes())?;
        }

        writer.flush()?;
        Ok(())
    }
}
