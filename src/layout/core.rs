use std::collections::BTreeMap;
use std::sync::PoisonError;

use crate::component::{Component, RenderSized, Renderable, Resizable, SizedView};
use crate::geometry::Size;
use crate::logging::{LogLevel, event_with_fields, json_kv};
use crate::measure::MeasureCache;
use crate::text::{block_width, constrain_width, fit_block, join_horizontal, join_vertical};

use super::grid::{FitPolicy, GridOptions, Placement, WidthRemainder};

const LOG_TARGET: &str = "stackgrid::layout";

/// A placed component.
#[derive(Debug)]
pub struct GridItem {
    pub component: Component,
    pub placement: Placement,
}

/// Solved allocation for one item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowLayout {
    /// Index of the item in insertion order.
    pub item: usize,
    pub height: u16,
    pub expand: bool,
}

/// Solved allocation for one column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnLayout {
    pub key: u16,
    pub width: u16,
    pub rows: Vec<RowLayout>,
}

impl ColumnLayout {
    pub fn height(&self) -> u32 {
        self.rows.iter().map(|row| row.height as u32).sum()
    }
}

/// Result of solving a grid for a size. Columns are in ascending key order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridLayout {
    pub size: Size,
    pub columns: Vec<ColumnLayout>,
}

impl GridLayout {
    pub fn width(&self) -> u32 {
        self.columns.iter().map(|column| column.width as u32).sum()
    }

    pub fn column(&self, key: u16) -> Option<&ColumnLayout> {
        self.columns.iter().find(|column| column.key == key)
    }
}

/// Column-stacked layout engine.
///
/// Items are appended with a [`Placement`]; every render regroups them by
/// column, divides the width evenly between columns and the height between
/// the items of each column, then renders each item into its cell.
#[derive(Debug, Default)]
pub struct Grid {
    items: Vec<GridItem>,
    size: Size,
    options: GridOptions,
}

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: GridOptions) -> Self {
        Self {
            items: Vec::new(),
            size: Size::ZERO,
            options,
        }
    }

    pub fn add_item(&mut self, component: impl Into<Component>, placement: Placement) {
        self.items.push(GridItem {
            component: component.into(),
            placement,
        });
    }

    /// Builder form of [`Grid::add_item`], handy for nested grids.
    pub fn with_item(mut self, component: impl Into<Component>, placement: Placement) -> Self {
        self.add_item(component, placement);
        self
    }

    /// Store the area the next render lays out into.
    pub fn set_size(&mut self, width: u16, height: u16) {
        self.size = Size::new(width, height);
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn options(&self) -> &GridOptions {
        &self.options
    }

    pub fn items(&self) -> &[GridItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Render at the stored size.
    pub fn render(&self) -> String {
        self.render_into(self.size)
    }

    /// Solve the layout for `size` without rendering the cells.
    ///
    /// Returns `None` when the grid would render its placeholder.
    pub fn solve(&self, size: Size) -> Option<GridLayout> {
        self.solve_with(size, &mut MeasureCache::new())
    }

    fn solve_with(&self, size: Size, cache: &mut MeasureCache) -> Option<GridLayout> {
        if size.is_empty() || self.items.is_empty() {
            return None;
        }

        let groups = self.group_columns();
        let columns: Vec<ColumnLayout> = match self.options.fit {
            FitPolicy::Stretch => {
                let widths =
                    column_widths(size.width, groups.len(), self.options.width_remainder);
                groups
                    .into_iter()
                    .zip(widths)
                    .map(|((key, indices), width)| ColumnLayout {
                        key,
                        width,
                        rows: self.stretch_rows(&indices, size.height, cache),
                    })
                    .collect()
            }
            FitPolicy::Natural => groups
                .into_iter()
                .map(|(key, indices)| self.natural_column(key, &indices, cache))
                .collect(),
        };

        Some(GridLayout { size, columns })
    }

    /// Item indices keyed by column, insertion order kept within a column.
    fn group_columns(&self) -> BTreeMap<u16, Vec<usize>> {
        let mut groups: BTreeMap<u16, Vec<usize>> = BTreeMap::new();
        for (index, item) in self.items.iter().enumerate() {
            groups.entry(item.placement.column).or_default().push(index);
        }
        groups
    }

    fn stretch_rows(
        &self,
        indices: &[usize],
        height: u16,
        cache: &mut MeasureCache,
    ) -> Vec<RowLayout> {
        let expanding = indices
            .iter()
            .filter(|&&index| self.items[index].placement.expand)
            .count();

        let heights = if expanding == 0 {
            split_evenly(height, indices.len())
        } else {
            let mut heights = vec![0; indices.len()];
            let mut reserved: u16 = 0;
            for (slot, &index) in indices.iter().enumerate() {
                let item = &self.items[index];
                if item.placement.expand {
                    continue;
                }
                let natural = cache.measure(index, &item.component).height;
                // Reserved space never exceeds the column; later items give way first.
                let granted = natural.min(height - reserved);
                heights[slot] = granted;
                reserved += granted;
            }

            let mut shares = split_evenly(height - reserved, expanding).into_iter();
            for (slot, &index) in indices.iter().enumerate() {
                if self.items[index].placement.expand {
                    heights[slot] = shares.next().unwrap_or(0);
                }
            }
            heights
        };

        indices
            .iter()
            .zip(heights)
            .map(|(&item, height)| RowLayout {
                item,
                height,
                expand: self.items[item].placement.expand,
            })
            .collect()
    }

    fn natural_column(
        &self,
        key: u16,
        indices: &[usize],
        cache: &mut MeasureCache,
    ) -> ColumnLayout {
        let mut width = 0;
        let rows: Vec<RowLayout> = indices
            .iter()
            .map(|&index| {
                let item = &self.items[index];
                let measured = cache.measure(index, &item.component);
                width = width.max(block_width(&measured.text));
                RowLayout {
                    item: index,
                    height: measured.height,
                    expand: item.placement.expand,
                }
            })
            .collect();
        ColumnLayout { key, width, rows }
    }

    fn render_into(&self, size: Size) -> String {
        let mut cache = MeasureCache::new();
        let Some(layout) = self.solve_with(size, &mut cache) else {
            self.record_placeholder(size);
            return self.options.placeholder.clone();
        };

        let columns: Vec<String> = layout
            .columns
            .iter()
            .map(|column| self.render_column(column, &mut cache))
            .collect();

        self.record_render(&layout, cache.renders());
        join_horizontal(&columns)
    }

    fn render_column(&self, column: &ColumnLayout, cache: &mut MeasureCache) -> String {
        let mut rows = Vec::with_capacity(column.rows.len());
        for row in &column.rows {
            let component = &self.items[row.item].component;
            let measured = cache.take_text(row.item);

            // Zero-height rows, including empty output under natural fit, take no lines.
            if row.height == 0 {
                continue;
            }
            let block = match self.options.fit {
                FitPolicy::Natural => measured.unwrap_or_else(|| component.render()),
                FitPolicy::Stretch => {
                    let cell = Size::new(column.width, row.height);
                    match (component, measured) {
                        // Fixed output does not depend on size; reuse the measurement.
                        (Component::Fixed(_), Some(text)) => fit_block(&text, cell),
                        (Component::Fixed(_), None) => component.render_at(cell),
                        // Keeps the column exact when a child ignores its size.
                        (Component::Resizable(_), _) => {
                            fit_block(&component.render_at(cell), cell)
                        }
                    }
                }
            };
            rows.push(block);
        }

        let stacked = join_vertical(&rows);
        match self.options.fit {
            FitPolicy::Stretch => constrain_width(&stacked, column.width),
            FitPolicy::Natural => stacked,
        }
    }

    fn record_render(&self, layout: &GridLayout, measurements: u64) {
        if let Some(metrics) = &self.options.metrics {
            let mut metrics = metrics.lock().unwrap_or_else(PoisonError::into_inner);
            metrics.record_render(self.items.len());
            metrics.record_measurements(measurements);
        }

        if let Some(logger) = &self.options.logger {
            if logger.enabled(LogLevel::Debug) {
                let event = event_with_fields(
                    LogLevel::Debug,
                    LOG_TARGET,
                    "grid_solved",
                    [
                        json_kv("width", layout.size.width),
                        json_kv("height", layout.size.height),
                        json_kv("columns", layout.columns.len()),
                        json_kv("items", self.items.len()),
                        json_kv("measurements", measurements),
                    ],
                );
                let _ = logger.log_event(event);
            }
        }
    }

    fn record_placeholder(&self, size: Size) {
        if let Some(metrics) = &self.options.metrics {
            metrics
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .record_placeholder();
        }

        if let Some(logger) = &self.options.logger {
            if logger.enabled(LogLevel::Trace) {
                let event = event_with_fields(
                    LogLevel::Trace,
                    LOG_TARGET,
                    "grid_placeholder",
                    [
                        json_kv("width", size.width),
                        json_kv("height", size.height),
                        json_kv("items", self.items.len()),
                    ],
                );
                let _ = logger.log_event(event);
            }
        }
    }
}

impl Renderable for Grid {
    fn render(&self) -> String {
        Grid::render(self)
    }
}

impl RenderSized for Grid {
    fn render_sized(&self, size: Size) -> String {
        self.render_into(size)
    }
}

impl Resizable for Grid {
    fn resize(&self, size: Size) -> Box<dyn Renderable + '_> {
        Box::new(SizedView::new(self, size))
    }
}

impl From<Grid> for Component {
    fn from(grid: Grid) -> Self {
        Component::resizable(grid)
    }
}

/// Split `total` into `parts` floor shares; the last share takes the remainder.
fn split_evenly(total: u16, parts: usize) -> Vec<u16> {
    if parts == 0 {
        return Vec::new();
    }
    let base = (total as usize / parts) as u16;
    let remainder = (total as usize % parts) as u16;
    let mut shares = vec![base; parts];
    if let Some(last) = shares.last_mut() {
        *last += remainder;
    }
    shares
}

fn column_widths(width: u16, columns: usize, remainder: WidthRemainder) -> Vec<u16> {
    let mut widths = split_evenly(width, columns);
    if remainder == WidthRemainder::Drop {
        let base = (width as usize / columns.max(1)) as u16;
        if let Some(last) = widths.last_mut() {
            *last = base;
        }
    }
    widths
}
