use rand::prelude::*;

use super::{WorkloadDataset, WorkloadProvider};
use crate::core::{ProcessId, Ticks};

/// Random arrivals: on every tick a process arrives with probability
/// `p_arrival`, and is short with probability `p_short`. Fully determined by
/// `seed`.
#[derive(Debug, Clone)]
pub struct BernoulliWorkload {
    pub ticks: Ticks,
    pub p_arrival: f64,
    pub p_short: f64,
    pub short_ticks: Ticks,
    pub long_ticks: Ticks,
    pub quantum: Ticks,
    pub seed: u64,
}

impl Default for BernoulliWorkload {
    fn default() -> Self {
        Self {
            ticks: 100,
            p_arrival: 0.3,
            p_short: 0.3,
            short_ticks: 2,
            long_ticks: 6,
            quantum: 3,
            seed: 0,
        }
    }
}

impl BernoulliWorkload {
    pub fn generate(&self) -> WorkloadDataset {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let name = format!("Bernoulli (seed {})", self.seed);
        let description = format!(
            "arrival p={}, short p={} over {} ticks",
            self.p_arrival, self.p_short, self.ticks
        );
        let mut builder = WorkloadDataset::builder(name, self.quantum).description(description);

        let mut next_id: ProcessId = 1;
        for t in 0..self.ticks {
            if rng.random::<f64>() < self.p_arrival {
                let burst = if rng.random::<f64>() < self.p_short {
                    self.short_ticks
                } else {
                    self.long_ticks
                };
                let priority = f64::from(rng.random_range(1..=5u8));

                builder = builder.process_with_priority(next_id, t, burst, priority);
                next_id += 1;
            }
        }

        builder.build()
    }
}

impl WorkloadProvider for BernoulliWorkload {
    fn datasets(&self) -> Vec<WorkloadDataset> {
        vec![self.generate()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_workload() {
        let config = BernoulliWorkload {
            seed: 42,
            ..Default::default()
        };
        assert_eq!(config.generate(), config.generate());
    }

    #[test]
    fn arrivals_are_ordered_and_bursts_bounded() {
        let config = BernoulliWorkload {
            ticks: 200,
            p_arrival: 0.5,
            ..Default::default()
        };
        let dataset = config.generate();
        assert!(!dataset.is_empty());

        for pair in dataset.processes.windows(2) {
            assert!(pair[0].arrival_time < pair[1].arrival_time);
            assert_eq!(pair[1].id, pair[0].id + 1);
        }
        for process in &dataset.processes {
            assert!(process.burst_time == 2 || process.burst_time == 6);
            assert!((1.0..=5.0).contains(&process.priority));
        }
    }
}
