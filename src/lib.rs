//! Recursive column-stacked layout engine for character-cell interfaces.
//!
//! A [`Grid`] places components in columns, divides its assigned area between
//! them and renders the result as a single text block. Components are either
//! fixed (rendered as-is and boxed into their cell) or resizable (told their
//! cell size first), which lets grids and [`Frame`]s nest to any depth.
//!
//! The modules follow the `mod.rs` orchestrator plus private `core` layout so
//! each concern keeps its public surface in one place.

pub mod component;
pub mod cursor;
pub mod error;
pub mod frame;
pub mod geometry;
pub mod layout;
pub mod logging;
pub mod measure;
pub mod metrics;
pub mod render;
pub mod runtime;
pub mod text;
pub mod width;

pub use component::{Component, Renderable, Resizable, Text};
pub use error::{LayoutError, Result};
pub use frame::{BorderKind, Frame, FrameStyle, Padding};
pub use geometry::{Rect, Size};
pub use layout::{
    ColumnLayout, FitPolicy, Grid, GridItem, GridLayout, GridOptions, Placement, RowLayout,
    WidthRemainder,
};
pub use logging::{
    FileSink, LogEvent, LogFields, LogLevel, LogSink, Logger, LoggingError, LoggingResult,
    MemorySink,
};
pub use measure::{MeasureCache, Measurement, natural_height};
pub use metrics::{LayoutMetrics, MetricSnapshot};
pub use render::{AnsiRenderer, RendererSettings};
pub use runtime::{HostEvent, Viewport};
pub use width::display_width;
