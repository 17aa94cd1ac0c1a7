use crate::publish::model::DashboardModel;
use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Writes derived dashboard models as JSON, to a file or to stdout.
pub struct ChartPublisher {
    output: Option<PathBuf>,
}

impl ChartPublisher {
    pub fn new(output: Option<PathBuf>) -> Self {
        Self { output }
    }

    pub fn render(&self, model: &DashboardModel) -> Result<String> {
        serde_json::to_string_pretty(model).context("serializing dashboard model")
    }

    pub fn publish(&self, model: &DashboardModel) -> Result<()> {
        let rendered = self.render(model)?;
        match &self.output {
            Some(path) => {
                ensure_parent(path)?;
                fs::write(path, rendered.as_bytes())
                    .with_context(|| format!("writing chart specs to {}", path.display()))?;
                self.publish_status(&format!("chart specs written to {}", path.display()));
            }
            None => {
                let stdout = io::stdout();
                let mut handle = stdout.lock();
                writeln!(handle, "{}", rendered).context("writing chart specs to stdout")?;
            }
        }
        Ok(())
    }

    pub fn publish_status(&self, message: &str) {
        // Keep stdout clean for the JSON payload when no output file is set.
        if self.output.is_some() {
            println!("[DASH] {}", message);
        } else {
            eprintln!("[DASH] {}", message);
        }
    }

    /// Appends one summary line to `path`, creating parent directories.
    pub fn append_report(&self, path: &Path, model: &DashboardModel) -> Result<()> {
        ensure_parent(path)?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("opening report log {}", path.display()))?;
        writeln!(file, "{}", model.summary_line())
            .with_context(|| format!("appending to report log {}", path.display()))?;
        Ok(())
    }
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating directory {}", parent.display()))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::profile::build_dataset;
    use crate::workflow::runner::Runner;
    use launchcore::{DashboardLayout, SelectionState};

    fn model() -> DashboardModel {
        let runner = Runner::new(build_dataset(12, 5).unwrap());
        let selection = SelectionState::default();
        let result = runner.execute(&selection);
        DashboardModel::new(selection, result.charts)
            .with_layout(DashboardLayout::for_dataset(runner.dataset()))
            .with_payload_summary(result.payload_summary)
    }

    #[test]
    fn publisher_writes_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("charts.json");
        let publisher = ChartPublisher::new(Some(path.clone()));
        publisher.publish(&model()).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let parsed: DashboardModel = serde_json::from_str(&contents).unwrap();
        assert_eq!(parsed.scatter.len(), 12);
        assert_eq!(
            parsed.layout.unwrap().heading,
            "SpaceX Launch Records Dashboard"
        );
    }

    #[test]
    fn report_log_appends_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("explorer.log");
        let publisher = ChartPublisher::new(None);
        let model = model();
        publisher.append_report(&path, &model).unwrap();
        publisher.append_report(&path, &model).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 2);
        assert!(contents.starts_with("site=ALL range=[0, 10000]"));
    }
}
