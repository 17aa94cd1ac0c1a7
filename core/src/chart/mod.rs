pub mod proportion;
pub mod scatter;
pub mod spec;

pub use proportion::build_proportion_chart;
pub use scatter::build_scatter_chart;
pub use spec::{ChartData, ChartKind, ChartSpec, Encoding, ScatterPoint, Slice};
