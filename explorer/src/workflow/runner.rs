use crate::generator::profile::build_dataset_from_config;
use crate::workflow::config::ExplorerConfig;
use anyhow::{bail, Context};
use launchcore::dataset::Dataset;
use launchcore::math::{PayloadSummary, StatsHelper};
use launchcore::telemetry::{LogManager, MetricsRecorder, MetricsSnapshot};
use launchcore::{derive_charts_observed, ChartPair, SelectionState};
use std::sync::Arc;

const LOG_TARGET: &str = "explorer::runner";

pub struct WorkflowResult {
    pub charts: ChartPair,
    pub payload_summary: Option<PayloadSummary>,
}

#[derive(Clone)]
pub struct Runner {
    dataset: Dataset,
    metrics: Arc<MetricsRecorder>,
}

impl Runner {
    pub fn new(dataset: Dataset) -> Self {
        Self {
            dataset,
            metrics: Arc::new(MetricsRecorder::new()),
        }
    }

    /// Loads the CSV named in `config`, or generates a synthetic table.
    pub fn from_config(config: &ExplorerConfig) -> anyhow::Result<Self> {
        let dataset = if let Some(path) = &config.dataset {
            Dataset::load(path)
                .with_context(|| format!("loading launch dataset {}", path.display()))?
        } else if let Some(generator) = &config.synthetic {
            build_dataset_from_config(generator).context("generating synthetic dataset")?
        } else {
            bail!("no dataset configured: pass --dataset or --synthetic");
        };
        LogManager::with_target(LOG_TARGET).record(&format!(
            "dataset ready: {} launches across {} sites",
            dataset.len(),
            dataset.sites().len()
        ));
        Ok(Self::new(dataset))
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn execute(&self, selection: &SelectionState) -> WorkflowResult {
        let logger = LogManager::with_target(LOG_TARGET);
        let charts = derive_charts_observed(selection, &self.dataset, &logger, &self.metrics);
        let masses: Vec<f64> = charts
            .scatter
            .points()
            .iter()
            .map(|point| point.payload_mass_kg)
            .collect();

        WorkflowResult {
            payload_summary: StatsHelper::payload_summary(&masses),
            charts,
        }
    }

    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }
}
