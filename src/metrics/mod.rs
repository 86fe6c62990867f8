use crate::logging::{LogEvent, LogFields, LogLevel};
use serde_json::json;

/// Counters accumulated across grid renders.
#[derive(Debug, Default, Clone)]
pub struct LayoutMetrics {
    renders: u64,
    placeholders: u64,
    measurements: u64,
    items_rendered: u64,
}

impl LayoutMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_render(&mut self, items: usize) {
        self.renders = self.renders.saturating_add(1);
        self.items_rendered = self.items_rendered.saturating_add(items as u64);
    }

    pub fn record_placeholder(&mut self) {
        self.renders = self.renders.saturating_add(1);
        self.placeholders = self.placeholders.saturating_add(1);
    }

    pub fn record_measurements(&mut self, count: u64) {
        self.measurements = self.measurements.saturating_add(count);
    }

    pub fn snapshot(&self) -> MetricSnapshot {
        MetricSnapshot {
            renders: self.renders,
            placeholders: self.placeholders,
            measurements: self.measurements,
            items_rendered: self.items_rendered,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricSnapshot {
    pub renders: u64,
    pub placeholders: u64,
    pub measurements: u64,
    pub items_rendered: u64,
}

impl MetricSnapshot {
    pub fn to_log_event(&self, target: &str) -> LogEvent {
        LogEvent::with_fields(LogLevel::Info, target, "layout_metrics", self.as_fields())
    }

    pub fn as_fields(&self) -> LogFields {
        let mut map = LogFields::new();
        map.insert("renders".to_string(), json!(self.renders));
        map.insert("placeholders".to_string(), json!(self.placeholders));
        map.insert("measurements".to_string(), json!(self.measurements));
        map.insert("items_rendered".to_string(), json!(self.items_rendered));
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_reflects_recorded_counts() {
        let mut metrics = LayoutMetrics::new();
        metrics.record_render(3);
        metrics.record_placeholder();
        metrics.record_measurements(2);

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.renders, 2);
        assert_eq!(snapshot.placeholders, 1);
        assert_eq!(snapshot.measurements, 2);
        assert_eq!(snapshot.items_rendered, 3);

        let event = snapshot.to_log_event("stackgrid::metrics");
        assert_eq!(event.message, "layout_metrics");
        assert_eq!(event.fields["items_rendered"], json!(3));
    }
}
