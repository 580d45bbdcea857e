pub mod compare;
pub mod metrics;

pub use compare::{Comparison, ComparisonHarness, Improvement, ImprovementSet, StrategyRun};
pub use metrics::{MetricsReport, ProcessMetrics};
