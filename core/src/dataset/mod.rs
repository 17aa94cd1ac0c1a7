pub mod loader;
pub mod rows;

pub use rows::RowSet;

use crate::prelude::{DatasetError, DatasetResult};
use crate::records::LaunchRecord;
use indexmap::IndexSet;
use std::path::Path;
use std::sync::Arc;

/// Immutable launch table shared by every derivation.
///
/// Cloning is cheap and the table is `Send + Sync`, so one instance can back
/// any number of independent dashboard sessions.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    records: Arc<[LaunchRecord]>,
}

impl Dataset {
    /// Builds a dataset, rejecting rows that break the record invariants.
    pub fn from_records(records: Vec<LaunchRecord>) -> DatasetResult<Self> {
        for (idx, record) in records.iter().enumerate() {
            record
                .validate()
                .map_err(|reason| DatasetError::InvalidRecord {
                    row: idx + 1,
                    reason,
                })?;
        }
        Ok(Self {
            records: records.into(),
        })
    }

    pub fn load<P: AsRef<Path>>(path: P) -> DatasetResult<Self> {
        loader::load_csv(path)
    }

    pub fn from_csv_str(contents: &str) -> DatasetResult<Self> {
        loader::read_csv(contents.as_bytes())
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Every row, in dataset order.
    pub fn rows(&self) -> RowSet<'_> {
        RowSet::from_records(&self.records)
    }

    /// Distinct launch sites in order of first appearance.
    pub fn sites(&self) -> Vec<String> {
        self.records
            .iter()
            .map(|record| record.launch_site.as_str())
            .collect::<IndexSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }
}
