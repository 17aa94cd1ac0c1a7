use launchcore::chart::ChartSpec;
use launchcore::math::PayloadSummary;
use launchcore::{ChartPair, DashboardLayout, SelectionState};
use serde::{Deserialize, Serialize};

/// Everything a renderer needs to draw the dashboard for one selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardModel {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<DashboardLayout>,
    pub selection: SelectionState,
    pub proportion: ChartSpec,
    pub scatter: ChartSpec,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload_summary: Option<PayloadSummary>,
}

impl DashboardModel {
    pub fn new(selection: SelectionState, charts: ChartPair) -> Self {
        Self {
            layout: None,
            selection,
            proportion: charts.proportion,
            scatter: charts.scatter,
            payload_summary: None,
        }
    }

    pub fn with_layout(mut self, layout: DashboardLayout) -> Self {
        self.layout = Some(layout);
        self
    }

    pub fn with_payload_summary(mut self, summary: Option<PayloadSummary>) -> Self {
        self.payload_summary = summary;
        self
    }

    pub fn summary_line(&self) -> String {
        let payload = match &self.payload_summary {
            Some(summary) => format!(
                "payload {:.0}..{:.0} kg (mean {:.1})",
                summary.min_kg, summary.max_kg, summary.mean_kg
            ),
            None => "payload n/a".to_string(),
        };
        format!(
            "site={} range=[{:.0}, {:.0}] slices={} points={} {}",
            self.selection.site,
            self.selection.payload_range.low,
            self.selection.payload_range.high,
            self.proportion.len(),
            self.scatter.len(),
            payload
        )
    }
}
