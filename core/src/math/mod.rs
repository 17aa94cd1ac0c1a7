pub mod stats;

pub use stats::{PayloadSummary, StatsHelper};
