//! Error types for the crate.
//!
//! The layout core never fails; errors come from terminal writers and log sinks.

mod core;

pub use self::core::{LayoutError, Result};
