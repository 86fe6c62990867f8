//! Layout module orchestrator.
//!
//! Placement and configuration types live in `grid`; the engine that solves
//! and renders a grid lives in the private `core` module.

mod core;
pub mod grid;

pub use self::core::{ColumnLayout, Grid, GridItem, GridLayout, RowLayout};
pub use self::grid::{DEFAULT_PLACEHOLDER, FitPolicy, GridOptions, Placement, WidthRemainder};
