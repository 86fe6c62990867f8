//! Natural-size measurement.
//!
//! A component's natural height is the line count of its unconstrained
//! render. Measuring costs a render, so the grid keeps a [`MeasureCache`]
//! for the duration of a single render pass.

use std::collections::HashMap;

use crate::component::Component;
use crate::text::line_count;

/// Line count of `component`'s unconstrained render.
pub fn natural_height(component: &Component) -> u16 {
    line_count(&component.render())
}

/// A single measurement: the rendered text and its line count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Measurement {
    pub text: String,
    pub height: u16,
}

/// Per-render memo of natural measurements keyed by item index.
#[derive(Debug, Default)]
pub struct MeasureCache {
    entries: HashMap<usize, Measurement>,
    renders: u64,
}

impl MeasureCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Measure item `index`, rendering it only the first time it is asked for.
    pub fn measure(&mut self, index: usize, component: &Component) -> &Measurement {
        let renders = &mut self.renders;
        self.entries.entry(index).or_insert_with(|| {
            *renders += 1;
            let text = component.render();
            let height = line_count(&text);
            Measurement { text, height }
        })
    }

    /// Hand back the measured text of item `index`, if it was measured.
    pub fn take_text(&mut self, index: usize) -> Option<String> {
        self.entries.remove(&index).map(|m| m.text)
    }

    /// Number of renders spent on measurement.
    pub fn renders(&self) -> u64 {
        self.renders
    }
}
