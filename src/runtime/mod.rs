//! Host adapter: turns terminal size notifications into grid renders.
//!
//! The viewport owns the root grid. Hosts feed it events as they arrive and
//! call [`Viewport::paint`] whenever a paint is pending. Access is `&mut`, so
//! a host dispatching from several threads wraps the viewport in a mutex.

use std::io::Write;

use crossterm::event::Event as CrosstermEvent;
use serde_json::json;

use crate::cursor;
use crate::error::Result;
use crate::geometry::{Rect, Size};
use crate::layout::Grid;
use crate::logging::{LogLevel, Logger, event_with_fields, json_kv};
use crate::render::AnsiRenderer;
use crate::text::{block_width, line_count};

const LOG_TARGET: &str = "stackgrid::runtime";

/// Host notifications the viewport reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    Resize(Size),
    Redraw,
    Ignored,
}

impl From<CrosstermEvent> for HostEvent {
    fn from(event: CrosstermEvent) -> Self {
        match event {
            CrosstermEvent::Resize(width, height) => HostEvent::Resize(Size::new(width, height)),
            _ => HostEvent::Ignored,
        }
    }
}

/// Root grid plus the renderer that paints it.
pub struct Viewport {
    grid: Grid,
    renderer: AnsiRenderer,
    logger: Option<Logger>,
    paint_pending: bool,
    clear_pending: bool,
}

impl Viewport {
    pub fn new(grid: Grid, renderer: AnsiRenderer) -> Self {
        Self {
            grid,
            renderer,
            logger: None,
            paint_pending: true,
            clear_pending: true,
        }
    }

    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = Some(logger);
        self
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable access to the root grid; schedules a paint.
    pub fn grid_mut(&mut self) -> &mut Grid {
        self.paint_pending = true;
        &mut self.grid
    }

    /// Swap in a different root grid, keeping the current size.
    pub fn replace_grid(&mut self, mut grid: Grid) -> Grid {
        let size = self.grid.size();
        grid.set_size(size.width, size.height);
        self.clear_pending = true;
        self.paint_pending = true;
        std::mem::replace(&mut self.grid, grid)
    }

    pub fn paint_pending(&self) -> bool {
        self.paint_pending
    }

    /// Apply `event`; returns whether a paint is now pending.
    pub fn handle(&mut self, event: impl Into<HostEvent>) -> bool {
        match event.into() {
            HostEvent::Resize(size) => {
                if size != self.grid.size() {
                    self.grid.set_size(size.width, size.height);
                    self.clear_pending = true;
                    self.paint_pending = true;
                    self.log(
                        LogLevel::Debug,
                        "viewport_resized",
                        [
                            json_kv("width", size.width),
                            json_kv("height", size.height),
                        ],
                    );
                }
            }
            HostEvent::Redraw => self.paint_pending = true,
            HostEvent::Ignored => {}
        }
        self.paint_pending
    }

    /// Render the grid and paint it at the top-left corner.
    pub fn paint(&mut self, writer: &mut impl Write) -> Result<()> {
        if self.clear_pending {
            writer.write_all(cursor::clear_screen().as_bytes())?;
            self.clear_pending = false;
        }

        let block = self.grid.render();
        let size = self.grid.size();
        // The placeholder is painted at its own size while the grid is unsized.
        let area = if size.is_empty() {
            Rect::new(0, 0, block_width(&block), line_count(&block))
        } else {
            Rect::from_size(size)
        };

        self.renderer.paint(writer, area, &block)?;
        self.paint_pending = false;
        self.log(
            LogLevel::Trace,
            "viewport_painted",
            [json_kv("lines", json!(line_count(&block)))],
        );
        Ok(())
    }

    fn log(
        &self,
        level: LogLevel,
        message: &str,
        fields: impl IntoIterator<Item = (String, serde_json::Value)>,
    ) {
        if let Some(logger) = &self.logger {
            if logger.enabled(level) {
                let _ = logger.log_event(event_with_fields(level, LOG_TARGET, message, fields));
            }
        }
    }
}
