use crate::generator::profile::GeneratorConfig;
use anyhow::Context;
use launchcore::filter::PayloadRange;
use launchcore::records::SiteSelection;
use launchcore::SelectionState;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplorerConfig {
    pub dataset: Option<PathBuf>,
    pub synthetic: Option<GeneratorConfig>,
    pub site: String,
    pub payload_low: f64,
    pub payload_high: f64,
    pub output: Option<PathBuf>,
    pub report_log: Option<PathBuf>,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            dataset: None,
            synthetic: None,
            site: SiteSelection::All.to_string(),
            payload_low: PayloadRange::MIN_KG,
            payload_high: PayloadRange::MAX_KG,
            output: None,
            report_log: None,
        }
    }
}

impl ExplorerConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading explorer config {}", path_ref.display()))?;
        let config: ExplorerConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing explorer config {}", path_ref.display()))?;
        Ok(config)
    }

    pub fn selection(&self) -> SelectionState {
        SelectionState::new(
            SiteSelection::from(self.site.as_str()),
            PayloadRange::new(self.payload_low, self.payload_high),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn default_config_selects_everything() {
        let cfg = ExplorerConfig::default();
        assert_eq!(cfg.selection(), SelectionState::default());
    }

    #[test]
    fn config_load_reads_yaml() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(
            b"dataset: spacex_launch_dash.csv\nsite: KSC LC-39A\npayload_low: 2000\npayload_high: 8000\n",
        )
        .unwrap();
        let path = temp.into_temp_path();
        let cfg = ExplorerConfig::load(&path).unwrap();
        assert_eq!(cfg.dataset, Some(PathBuf::from("spacex_launch_dash.csv")));
        let selection = cfg.selection();
        assert_eq!(selection.site, SiteSelection::site("KSC LC-39A"));
        assert_eq!(selection.payload_range, PayloadRange::new(2000.0, 8000.0));
        assert!(cfg.synthetic.is_none());
    }

    #[test]
    fn config_load_accepts_partial_synthetic_section() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(b"synthetic:\n  records: 12\n  seed: 9\n").unwrap();
        let path = temp.into_temp_path();
        let cfg = ExplorerConfig::load(&path).unwrap();
        let synthetic = cfg.synthetic.unwrap();
        assert_eq!(synthetic.records, 12);
        assert_eq!(synthetic.sites.len(), 4);
        assert_eq!(cfg.site, "ALL");
    }

    #[test]
    fn bundled_configs_parse() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("config");
        let reference = ExplorerConfig::load(dir.join("reference.yaml")).unwrap();
        assert_eq!(reference.selection().site, SiteSelection::site("KSC LC-39A"));
        let synthetic = ExplorerConfig::load(dir.join("synthetic.yaml")).unwrap();
        assert_eq!(synthetic.synthetic.map(|g| g.seed), Some(312));
    }
}
