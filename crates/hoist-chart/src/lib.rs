// hoist-chart: Renders the gear ratio comparison chart from a sizing
// catalog sweep.

pub mod render;
pub mod series;

pub use render::{ChartError, render_comparison};
pub use series::ComparisonSeries;
