//! Placement hints and grid configuration.
//!
//! Items are placed by column index only. Rows are implicit: items sharing a
//! column stack top to bottom in insertion order, and column indices need not
//! be contiguous.
//!
//! # Example
//! ```
//! use stackgrid::{Grid, Placement, Text};
//!
//! let mut grid = Grid::new();
//! grid.add_item(Text::new("sidebar"), Placement::column(0));
//! grid.add_item(Text::new("header"), Placement::column(1));
//! grid.add_item(Text::new("body"), Placement::column(1).expand());
//! grid.set_size(80, 24);
//!
//! let rendered = grid.render();
//! assert_eq!(rendered.lines().count(), 24);
//! ```

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use crate::logging::Logger;
use crate::metrics::LayoutMetrics;

/// Text shown by a grid that cannot lay anything out yet.
pub const DEFAULT_PLACEHOLDER: &str = "Loading...";

/// Where an item goes and whether it soaks up leftover height.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement {
    pub column: u16,
    #[serde(default)]
    pub expand: bool,
}

impl Placement {
    pub const fn column(column: u16) -> Self {
        Self {
            column,
            expand: false,
        }
    }

    /// Share the column's leftover height with the other expanding items.
    pub const fn expand(mut self) -> Self {
        self.expand = true;
        self
    }
}

/// How a grid uses its assigned height.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitPolicy {
    /// Allocate every cell so each column fills the assigned area.
    #[default]
    Stretch,
    /// Render items at their natural size and just stack them.
    Natural,
}

/// What happens to the cells left over when the width does not divide
/// evenly between columns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WidthRemainder {
    /// Give the leftover cells to the last column.
    #[default]
    LastColumn,
    /// Leave them unused; the grid renders narrower than assigned.
    Drop,
}

/// Grid configuration.
#[derive(Debug, Clone)]
pub struct GridOptions {
    pub fit: FitPolicy,
    pub width_remainder: WidthRemainder,
    /// Returned verbatim while the grid is unsized or empty.
    pub placeholder: String,
    /// Optional structured logger for layout decisions.
    pub logger: Option<Logger>,
    /// Metrics accumulator updated on every render.
    pub metrics: Option<Arc<Mutex<LayoutMetrics>>>,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            fit: FitPolicy::Stretch,
            width_remainder: WidthRemainder::LastColumn,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            logger: None,
            metrics: None,
        }
    }
}

impl GridOptions {
    pub fn with_fit(mut self, fit: FitPolicy) -> Self {
        self.fit = fit;
        self
    }

    pub fn with_width_remainder(mut self, remainder: WidthRemainder) -> Self {
        self.width_remainder = remainder;
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Enable metrics collection if it has not already been configured.
    pub fn enable_metrics(&mut self) {
        if self.metrics.is_none() {
            self.metrics = Some(Arc::new(Mutex::new(LayoutMetrics::new())));
        }
    }

    /// Access the shared metrics handle if metrics are enabled.
    pub fn metrics_handle(&self) -> Option<Arc<Mutex<LayoutMetrics>>> {
        self.metrics.as_ref().map(Arc::clone)
    }
}
