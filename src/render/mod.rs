//! Terminal output for rendered blocks.

mod core;

pub use self::core::{AnsiRenderer, RendererSettings};
