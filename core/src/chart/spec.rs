use crate::records::OutcomeClass;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Proportion,
    Scatter,
}

/// One wedge of a proportion chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slice {
    pub label: String,
    pub value: f64,
    pub fraction: f64,
}

/// One launch plotted on the payload/outcome scatter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    pub payload_mass_kg: f64,
    pub outcome: OutcomeClass,
    pub booster_version_category: String,
    pub launch_site: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "items", rename_all = "snake_case")]
pub enum ChartData {
    Slices(Vec<Slice>),
    Points(Vec<ScatterPoint>),
}

/// Column names bound to each visual channel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Encoding {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<String>,
}

/// Renderer-independent description of a chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: String,
    pub data: ChartData,
    pub encoding: Encoding,
}

impl ChartSpec {
    pub fn slices(&self) -> &[Slice] {
        match &self.data {
            ChartData::Slices(slices) => slices,
            ChartData::Points(_) => &[],
        }
    }

    pub fn points(&self) -> &[ScatterPoint] {
        match &self.data {
            ChartData::Points(points) => points,
            ChartData::Slices(_) => &[],
        }
    }

    /// Number of slices or points.
    pub fn len(&self) -> usize {
        match &self.data {
            ChartData::Slices(slices) => slices.len(),
            ChartData::Points(points) => points.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Value of the slice labelled `label`, if present.
    pub fn slice_value(&self, label: &str) -> Option<f64> {
        self.slices()
            .iter()
            .find(|slice| slice.label == label)
            .map(|slice| slice.value)
    }
}
