//! Core data model and chart derivations for the launch records dashboard.
//!
//! The dataset is loaded once and never mutated. Everything downstream of it is
//! a pure function of `(SelectionState, Dataset)`: filters select rows, builders
//! turn rows into declarative chart specs, and the caller decides how to render.

pub mod chart;
pub mod dashboard;
pub mod dataset;
pub mod filter;
pub mod math;
pub mod prelude;
pub mod records;
pub mod telemetry;

pub use dashboard::{
    derive_charts, derive_charts_observed, ChartDerivation, ChartPair, DashboardLayout,
    SelectionState,
};
pub use prelude::{DatasetError, DatasetResult};
