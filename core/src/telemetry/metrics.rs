use crate::chart::{ChartKind, ChartSpec};
use std::sync::Mutex;

/// Counts derivations across sessions.
pub struct MetricsRecorder {
    inner: Mutex<Metrics>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub proportion: usize,
    pub scatter: usize,
    pub empty: usize,
}

#[derive(Default)]
struct Metrics {
    proportion: usize,
    scatter: usize,
    empty: usize,
}

impl MetricsRecorder {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Metrics::default()),
        }
    }

    pub fn record_chart(&self, chart: &ChartSpec) {
        if let Ok(mut metrics) = self.inner.lock() {
            match chart.kind {
                ChartKind::Proportion => metrics.proportion += 1,
                ChartKind::Scatter => metrics.scatter += 1,
            }
            if chart.is_empty() {
                metrics.empty += 1;
            }
        }
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        if let Ok(metrics) = self.inner.lock() {
            MetricsSnapshot {
                proportion: metrics.proportion,
                scatter: metrics.scatter,
                empty: metrics.empty,
            }
        } else {
            MetricsSnapshot::default()
        }
    }
}

impl Default for MetricsRecorder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{ChartData, Encoding};

    fn chart(kind: ChartKind, data: ChartData) -> ChartSpec {
        ChartSpec {
            kind,
            title: "t".into(),
            data,
            encoding: Encoding::default(),
        }
    }

    #[test]
    fn counts_kinds_and_empty_results() {
        let recorder = MetricsRecorder::new();
        recorder.record_chart(&chart(ChartKind::Proportion, ChartData::Slices(vec![])));
        recorder.record_chart(&chart(ChartKind::Scatter, ChartData::Points(vec![])));
        recorder.record_chart(&chart(ChartKind::Scatter, ChartData::Points(vec![])));
        assert_eq!(
            recorder.snapshot(),
            MetricsSnapshot {
                proportion: 1,
                scatter: 2,
                empty: 3,
            }
        );
    }
}
