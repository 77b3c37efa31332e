use serde::Serialize;
use std::fmt;

/// Action recorded for a clone at a timepoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CloneAction {
    Seeded,
    FedAndSampled,
    Harvested,
}

impl CloneAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            CloneAction::Seeded => "seeded",
            CloneAction::FedAndSampled => "fed_and_sampled",
            CloneAction::Harvested => "harvested",
        }
    }
}

impl fmt::Display for CloneAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One structured record in the campaign's append-only event log.
///
/// Entries are ordered by day, then by clone creation order within a day.
/// Metrics are free-form key/value pairs; display formatting is the
/// reporting sink's concern.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogEntry {
    pub day: u8,
    pub clone_id: String,
    pub action: CloneAction,
    pub metrics: Vec<(String, f64)>,
}

impl LogEntry {
    pub fn new(day: u8, clone_id: impl Into<String>, action: CloneAction) -> Self {
        Self {
            day,
            clone_id: clone_id.into(),
            action,
            metrics: Vec::new(),
        }
    }

    pub fn with_metric(mut self, key: &str, value: f64) -> Self {
        self.metrics.push((key.to_string(), value));
        self
    }

    pub fn metric(&self, key: &str) -> Option<f64> {
        self.metrics
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| *v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_accumulate_metrics_in_order() {
        let entry = LogEntry::new(3, "Clone_004", CloneAction::FedAndSampled)
            .with_metric("feed_volume_ul", 50.0)
            .with_metric("density", 2.4e6);

        assert_eq!(entry.day, 3);
        assert_eq!(entry.metrics.len(), 2);
        assert_eq!(entry.metric("feed_volume_ul"), Some(50.0));
        assert_eq!(entry.metric("density"), Some(2.4e6));
        assert_eq!(entry.metric("missing"), None);
    }
}
