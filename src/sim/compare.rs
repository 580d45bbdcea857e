use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

use super::metrics::{self, MetricsReport};
use crate::core::SchedError;
use crate::scheduler::Strategy;
use crate::workload::WorkloadDataset;

/// Relative change of one average against the baseline, in percent.
/// Positive means the alternative is better (lower).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Improvement {
    Percent(f64),
    // Baseline average was zero
    Undefined,
}

impl Improvement {
    pub fn between(baseline: f64, alternative: f64) -> Self {
        if baseline == 0.0 {
            return Self::Undefined;
        }
        Self::Percent((baseline - alternative) / baseline * 100.0)
    }

    pub fn percent(self, metric: &'static str) -> Result<f64, SchedError> {
        match self {
            Self::Percent(value) => Ok(value),
            Self::Undefined => Err(SchedError::ImprovementUndefined { metric }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrategyRun {
    pub strategy: String,
    pub metrics: MetricsReport,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImprovementSet {
    pub baseline: String,
    pub alternative: String,
    pub waiting: Improvement,
    pub turnaround: Improvement,
    pub response: Improvement,
}

impl ImprovementSet {
    fn between(baseline: &StrategyRun, alternative: &StrategyRun) -> Self {
        let (b, a) = (&baseline.metrics, &alternative.metrics);
        Self {
            baseline: baseline.strategy.clone(),
            alternative: alternative.strategy.clone(),
            waiting: Improvement::between(b.avg_waiting, a.avg_waiting),
            turnaround: Improvement::between(b.avg_turnaround, a.avg_turnaround),
            response: Improvement::between(b.avg_response, a.avg_response),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub dataset: String,
    pub quantum: u64,
    /// One entry per strategy, in the order they were given.
    pub runs: Vec<StrategyRun>,
    /// Every strategy after the first, measured against the first.
    pub improvements: Vec<ImprovementSet>,
}

impl Comparison {
    pub fn baseline(&self) -> &StrategyRun {
        &self.runs[0]
    }
}

/// Runs several strategies over the same dataset and compares their
/// averages. The first strategy is the baseline.
#[derive(Default)]
pub struct ComparisonHarness<'a> {
    strategies: Vec<&'a dyn Strategy>,
}

impl<'a> ComparisonHarness<'a> {
    pub fn new() -> Self {
        Self {
            strategies: Vec::new(),
        }
    }

    pub fn with(mut self, strategy: &'a dyn Strategy) -> Self {
        self.strategies.push(strategy);
        self
    }

    pub fn strategies(&self) -> usize {
        self.strategies.len()
    }

    /// Each strategy simulates its own copy of the workload, so the runs are
    /// independent and execute in parallel.
    pub fn run(&self, dataset: &WorkloadDataset) -> Result<Comparison, SchedError> {
        if self.strategies.is_empty() {
            return Err(SchedError::NoStrategies);
        }

        let runs = self
            .strategies
            .par_iter()
            .map(|strategy| -> Result<StrategyRun, SchedError> {
                let processes = strategy.schedule(&dataset.processes, dataset.quantum)?;
                let metrics = metrics::calculate(&processes)?;
                debug!(
                    dataset = %dataset.name,
                    strategy = strategy.name(),
                    avg_waiting = metrics.avg_waiting,
                    avg_turnaround = metrics.avg_turnaround,
                    avg_response = metrics.avg_response,
                    "strategy finished"
                );
                Ok(StrategyRun {
                    strategy: strategy.name().to_string(),
                    metrics,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let improvements = runs[1..]
            .iter()
            .map(|alternative| ImprovementSet::between(&runs[0], alternative))
            .collect();

        Ok(Comparison {
            dataset: dataset.name.clone(),
            quantum: dataset.quantum,
            runs,
            improvements,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn improvement_is_relative_to_baseline() {
        assert_eq!(Improvement::between(10.0, 8.0), Improvement::Percent(20.0));
        assert_eq!(Improvement::between(4.0, 5.0), Improvement::Percent(-25.0));
        assert_eq!(Improvement::between(0.0, 3.0), Improvement::Undefined);
    }

    #[test]
    fn undefined_improvement_is_an_error() {
        assert_eq!(Improvement::Percent(12.5).percent("waiting"), Ok(12.5));
        assert_eq!(
            Improvement::Undefined.percent("response"),
            Err(SchedError::ImprovementUndefined { metric: "response" })
        );
    }

    #[test]
    fn harness_needs_a_strategy() {
        let dataset = WorkloadDataset::builder("empty harness", 2)
            .process(1, 0, 3)
            .build();
        assert_eq!(
            ComparisonHarness::new().run(&dataset),
            Err(SchedError::NoStrategies)
        );
    }
}
