pub use crate::chart::{ChartData, ChartKind, ChartSpec};
pub use crate::dashboard::{ChartPair, SelectionState};
pub use crate::dataset::{Dataset, RowSet};
pub use crate::filter::PayloadRange;
pub use crate::records::{LaunchRecord, OutcomeClass, SiteSelection};

/// Errors surfaced while building a [`Dataset`]. Derivations never fail.
#[derive(thiserror::Error, Debug)]
pub enum DatasetError {
    #[error("reading dataset: {0}")]
    Io(#[from] std::io::Error),
    #[error("parsing dataset: {0}")]
    Csv(#[from] csv::Error),
    #[error("invalid record at row {row}: {reason}")]
    InvalidRecord { row: usize, reason: String },
}

pub type DatasetResult<T> = Result<T, DatasetError>;
