use crate::dataset::Dataset;
use crate::filter::PayloadRange;
use crate::records::{SiteSelection, ALL_SITES};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const DASHBOARD_HEADING: &str = "SpaceX Launch Records Dashboard";

/// Entry of the site picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteOption {
    pub label: String,
    pub value: String,
}

impl SiteOption {
    pub fn all_sites() -> Self {
        Self {
            label: "All Sites".into(),
            value: ALL_SITES.into(),
        }
    }

    pub fn site(name: &str) -> Self {
        Self {
            label: name.into(),
            value: name.into(),
        }
    }

    pub fn selection(&self) -> SiteSelection {
        SiteSelection::from(self.value.as_str())
    }
}

impl fmt::Display for SiteOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// Payload range control bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderSpec {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub marks: Vec<f64>,
    pub value: PayloadRange,
}

impl Default for SliderSpec {
    fn default() -> Self {
        Self {
            min: PayloadRange::MIN_KG,
            max: PayloadRange::MAX_KG,
            step: PayloadRange::STEP_KG,
            marks: PayloadRange::MARKS_KG.to_vec(),
            value: PayloadRange::full(),
        }
    }
}

/// Static description of the dashboard controls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardLayout {
    pub heading: String,
    pub site_options: Vec<SiteOption>,
    pub default_site: SiteSelection,
    pub payload_slider: SliderSpec,
}

impl DashboardLayout {
    /// Site options follow the dataset's sites in first-appearance order.
    pub fn for_dataset(dataset: &Dataset) -> Self {
        let site_options = std::iter::once(SiteOption::all_sites())
            .chain(dataset.sites().iter().map(|site| SiteOption::site(site)))
            .collect();
        Self {
            heading: DASHBOARD_HEADING.into(),
            site_options,
            default_site: SiteSelection::All,
            payload_slider: SliderSpec::default(),
        }
    }

    pub fn option_for(&self, selection: &SiteSelection) -> Option<&SiteOption> {
        self.site_options
            .iter()
            .find(|option| option.value == selection.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{LaunchRecord, OutcomeClass, KNOWN_SITES};

    #[test]
    fn layout_lists_all_sites_first_then_dataset_sites() {
        let records = KNOWN_SITES
            .iter()
            .map(|site| LaunchRecord::new(*site, 100.0, OutcomeClass::Success, "FT"))
            .collect();
        let layout = DashboardLayout::for_dataset(&Dataset::from_records(records).unwrap());
        let values: Vec<&str> = layout.site_options.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(
            values,
            vec!["ALL", "CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A", "CCAFS SLC-40"]
        );
        assert_eq!(layout.site_options[0].label, "All Sites");
        assert_eq!(layout.heading, DASHBOARD_HEADING);
    }

    #[test]
    fn slider_matches_payload_control() {
        let slider = SliderSpec::default();
        assert_eq!(slider.step, 1000.0);
        assert_eq!(slider.marks, vec![0.0, 2500.0, 5000.0, 7500.0, 10_000.0]);
        assert_eq!(slider.value, PayloadRange::new(0.0, 10_000.0));
    }

    #[test]
    fn option_lookup_uses_selection_value() {
        let dataset = Dataset::from_records(vec![LaunchRecord::new(
            "KSC LC-39A",
            1.0,
            OutcomeClass::Failure,
            "FT",
        )])
        .unwrap();
        let layout = DashboardLayout::for_dataset(&dataset);
        assert_eq!(
            layout.option_for(&SiteSelection::All).map(|o| o.label.as_str()),
            Some("All Sites")
        );
        assert!(layout.option_for(&SiteSelection::site("Omelek")).is_none());
        assert_eq!(
            layout.site_options[1].selection(),
            SiteSelection::site("KSC LC-39A")
        );
    }
}
