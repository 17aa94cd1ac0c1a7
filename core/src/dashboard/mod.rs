//! Pure mapping from a dashboard selection to its two charts.
//!
//! The proportion chart depends on the site only; the scatter chart depends on
//! the site and the payload range. Both are recomputed in full on every call.

pub mod layout;

pub use layout::{DashboardLayout, SiteOption, SliderSpec};

use crate::chart::{build_proportion_chart, build_scatter_chart, ChartSpec};
use crate::dataset::Dataset;
use crate::filter::{filter_by_payload_range, filter_by_site, PayloadRange};
use crate::records::SiteSelection;
use crate::telemetry::{LogManager, MetricsRecorder};
use serde::{Deserialize, Serialize};

/// Inputs owned by one dashboard session.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SelectionState {
    pub site: SiteSelection,
    pub payload_range: PayloadRange,
}

impl SelectionState {
    pub fn new(site: SiteSelection, payload_range: PayloadRange) -> Self {
        Self {
            site,
            payload_range,
        }
    }
}

/// Both charts derived for one selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPair {
    pub proportion: ChartSpec,
    pub scatter: ChartSpec,
}

/// One dashboard output slot.
pub trait ChartDerivation {
    fn name(&self) -> &'static str;
    fn derive(&self, selection: &SelectionState, dataset: &Dataset) -> ChartSpec;
}

pub struct ProportionDerivation;

impl ChartDerivation for ProportionDerivation {
    fn name(&self) -> &'static str {
        "success-pie-chart"
    }

    fn derive(&self, selection: &SelectionState, dataset: &Dataset) -> ChartSpec {
        let rows = filter_by_site(&dataset.rows(), &selection.site);
        build_proportion_chart(&rows, &selection.site)
    }
}

pub struct ScatterDerivation;

impl ChartDerivation for ScatterDerivation {
    fn name(&self) -> &'static str {
        "success-payload-scatter-chart"
    }

    fn derive(&self, selection: &SelectionState, dataset: &Dataset) -> ChartSpec {
        let range = selection.payload_range;
        let rows = filter_by_payload_range(&dataset.rows(), range.low, range.high);
        build_scatter_chart(&rows, &selection.site)
    }
}

pub fn derive_charts(selection: &SelectionState, dataset: &Dataset) -> ChartPair {
    ChartPair {
        proportion: ProportionDerivation.derive(selection, dataset),
        scatter: ScatterDerivation.derive(selection, dataset),
    }
}

/// Runs both derivations and records each result, tagged with its output
/// slot, through the telemetry helpers.
pub fn derive_charts_observed(
    selection: &SelectionState,
    dataset: &Dataset,
    logger: &LogManager,
    metrics: &MetricsRecorder,
) -> ChartPair {
    let observe = |derivation: &dyn ChartDerivation| {
        let chart = derivation.derive(selection, dataset);
        logger.record_chart(derivation.name(), selection.site.as_str(), &chart);
        metrics.record_chart(&chart);
        chart
    };
    ChartPair {
        proportion: observe(&ProportionDerivation),
        scatter: observe(&ScatterDerivation),
    }
}
