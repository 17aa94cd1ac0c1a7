use anyhow::Context;
use clap::Parser;
use generator::profile::GeneratorConfig;
use launchcore::DashboardLayout;
use log::info;
use publish::model::DashboardModel;
use publish::publisher::ChartPublisher;
use std::path::PathBuf;
use workflow::config::ExplorerConfig;
use workflow::runner::Runner;

mod generator;
mod publish;
mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Launch records dashboard chart explorer")]
struct Args {
    /// Load an explorer config from YAML
    #[arg(long)]
    config: Option<PathBuf>,
    /// Launch CSV with `Launch Site`, `Payload Mass (kg)`, `class` and
    /// `Booster Version Category` columns
    #[arg(long)]
    dataset: Option<PathBuf>,
    /// Generate this many synthetic launches instead of reading a CSV
    #[arg(long)]
    synthetic: Option<usize>,
    /// Seed for the synthetic generator
    #[arg(long)]
    seed: Option<u64>,
    /// Launch site, or ALL
    #[arg(long)]
    site: Option<String>,
    /// Lower payload bound in kg (inclusive)
    #[arg(long)]
    low: Option<f64>,
    /// Upper payload bound in kg (inclusive)
    #[arg(long)]
    high: Option<f64>,
    /// Write chart specs to this file instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
    /// Append a one-line summary to this log file
    #[arg(long)]
    report_log: Option<PathBuf>,
    /// Include the dashboard control layout in the output
    #[arg(long, default_value_t = false)]
    layout: bool,
}

impl Args {
    fn apply(self, mut config: ExplorerConfig) -> (ExplorerConfig, bool) {
        if let Some(dataset) = self.dataset {
            config.dataset = Some(dataset);
            config.synthetic = None;
        }
        if let Some(records) = self.synthetic {
            config.dataset = None;
            config.synthetic = Some(GeneratorConfig {
                records,
                ..config.synthetic.unwrap_or_default()
            });
        }
        if let Some(seed) = self.seed {
            if let Some(generator) = config.synthetic.as_mut() {
                generator.seed = seed;
            }
        }
        if let Some(site) = self.site {
            config.site = site;
        }
        if let Some(low) = self.low {
            config.payload_low = low;
        }
        if let Some(high) = self.high {
            config.payload_high = high;
        }
        if let Some(output) = self.output {
            config.output = Some(output);
        }
        if let Some(report_log) = self.report_log {
            config.report_log = Some(report_log);
        }
        (config, self.layout)
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let base_config = if let Some(path) = &args.config {
        ExplorerConfig::load(path)?
    } else {
        ExplorerConfig::default()
    };
    let (config, include_layout) = args.apply(base_config);

    let runner = Runner::from_config(&config)?;
    let publisher = ChartPublisher::new(config.output.clone());
    let selection = config.selection();
    if !selection.payload_range.is_ordered() {
        publisher.publish_status("payload range is inverted; the scatter chart will be empty");
    }

    let result = runner.execute(&selection);
    let mut model = DashboardModel::new(selection, result.charts)
        .with_payload_summary(result.payload_summary);
    if include_layout {
        model = model.with_layout(DashboardLayout::for_dataset(runner.dataset()));
    }

    publisher.publish_status(&format!(
        "{} launches loaded -> {}",
        runner.dataset().len(),
        model.summary_line()
    ));
    publisher.publish(&model)?;

    if let Some(report_path) = &config.report_log {
        publisher
            .append_report(report_path, &model)
            .context("writing explorer report")?;
    }

    let metrics = runner.metrics();
    info!(
        "derivations: proportion={} scatter={} empty={}",
        metrics.proportion, metrics.scatter, metrics.empty
    );

    Ok(())
}
