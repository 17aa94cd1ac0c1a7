use crate::chart::ChartSpec;
use log::{info, warn, Level};

/// Logs derivation events under a fixed target.
pub struct LogManager {
    target: &'static str,
}

impl LogManager {
    pub fn new() -> Self {
        Self::with_target("launchcore")
    }

    pub fn with_target(target: &'static str) -> Self {
        Self { target }
    }

    pub fn record(&self, message: &str) {
        info!(target: self.target, "{}", message);
    }

    /// Logs one derived chart for output `slot`. Empty charts are logged as
    /// warnings; returns the level used.
    pub fn record_chart(&self, slot: &str, selection: &str, chart: &ChartSpec) -> Level {
        if chart.is_empty() {
            warn!(
                target: self.target,
                "{}: {:?} chart for {} is empty ({})", slot, chart.kind, selection, chart.title
            );
            Level::Warn
        } else {
            info!(
                target: self.target,
                "{}: {:?} chart for {}: {} items", slot, chart.kind, selection, chart.len()
            );
            Level::Info
        }
    }
}

impl Default for LogManager {
    fn default() -> Self {
        Self::new()
    }
}
