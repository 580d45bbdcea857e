use super::{WorkloadDataset, WorkloadProvider};
use crate::core::Ticks;

/// The six fixed comparison workloads.
#[derive(Debug, Clone, Copy, Default)]
pub struct Presets;

impl WorkloadProvider for Presets {
    fn datasets(&self) -> Vec<WorkloadDataset> {
        vec![
            small_cpu_intensive(),
            interactive(),
            mixed(),
            high_load(),
            priority_sensitive(),
            real_time(),
        ]
    }
}

pub fn small_cpu_intensive() -> WorkloadDataset {
    WorkloadDataset::builder("Small CPU-Intensive", 4)
        .description("10 processes with moderate to high burst times")
        .rows(&[
            (0, 12, 3.0),
            (1, 8, 2.0),
            (2, 15, 4.0),
            (3, 6, 1.0),
            (4, 10, 5.0),
            (5, 20, 2.5),
            (6, 4, 3.5),
            (7, 18, 1.5),
            (8, 7, 4.5),
            (9, 25, 2.8),
        ])
        .build()
}

pub fn interactive() -> WorkloadDataset {
    WorkloadDataset::builder("Interactive Workload", 3)
        .description("15 processes simulating interactive applications")
        .rows(&[
            (0, 3, 2.0),
            (1, 5, 1.0),
            (2, 2, 3.0),
            (3, 8, 2.5),
            (4, 1, 1.5),
            (5, 12, 4.0),
            (6, 4, 2.0),
            (7, 7, 1.8),
            (8, 3, 2.2),
            (9, 15, 3.5),
            (10, 6, 1.2),
            (11, 9, 2.8),
            (12, 2, 1.0),
            (13, 11, 3.2),
            (14, 4, 2.5),
        ])
        .build()
}

pub fn mixed() -> WorkloadDataset {
    WorkloadDataset::builder("Mixed Workload", 5)
        .description("20 processes with varied characteristics")
        .rows(&[
            (0, 25, 4.0),
            (1, 3, 1.0),
            (2, 18, 3.5),
            (3, 5, 2.0),
            (4, 30, 5.0),
            (5, 2, 1.5),
            (6, 22, 4.2),
            (7, 7, 2.8),
            (8, 12, 3.0),
            (9, 4, 1.8),
            (10, 35, 4.8),
            (11, 6, 2.2),
            (12, 28, 4.5),
            (13, 8, 2.5),
            (14, 15, 3.2),
            (15, 3, 1.2),
            (16, 40, 5.0),
            (17, 9, 2.7),
            (18, 20, 3.8),
            (19, 5, 1.9),
        ])
        .build()
}

/// Startup burst, steady middle period, then a late wave.
pub fn high_load() -> WorkloadDataset {
    let startup = (0..8).map(|i: Ticks| (i, 5 + i * 2, 2.0 + (i % 3) as f64));
    let steady = (8..18).map(|i: Ticks| (i + 2, 10 + (i - 8) * 3, 3.0 + (i % 4) as f64));
    let late = (18..25).map(|i: Ticks| (i + 5, 8 + (i - 18) * 2, 1.5 + (i % 5) as f64));
    let rows: Vec<_> = startup.chain(steady).chain(late).collect();

    WorkloadDataset::builder("High Load", 6)
        .description("25 processes under heavy system load")
        .rows(&rows)
        .build()
}

pub fn priority_sensitive() -> WorkloadDataset {
    WorkloadDataset::builder("Priority-Sensitive", 4)
        .description("12 processes with distinct priority levels")
        .rows(&[
            (0, 20, 1.0),
            (1, 15, 1.0),
            (2, 12, 2.0),
            (3, 8, 2.0),
            (4, 25, 3.0),
            (5, 18, 3.0),
            (6, 10, 4.0),
            (7, 30, 4.0),
            (8, 5, 5.0),
            (9, 35, 5.0),
            (10, 22, 2.5),
            (11, 14, 3.5),
        ])
        .build()
}

/// Arrivals are deliberately out of order; dataset order still decides ties.
pub fn real_time() -> WorkloadDataset {
    WorkloadDataset::builder("Real-time Simulation", 2)
        .description("18 processes simulating real-time constraints")
        .rows(&[
            (0, 5, 1.0),
            (2, 3, 1.0),
            (4, 7, 1.5),
            (1, 12, 2.0),
            (6, 4, 1.5),
            (3, 18, 3.0),
            (8, 6, 1.0),
            (5, 25, 4.0),
            (10, 8, 2.0),
            (7, 15, 2.5),
            (12, 10, 1.5),
            (9, 30, 4.5),
            (14, 2, 1.0),
            (11, 20, 3.5),
            (16, 9, 2.2),
            (13, 35, 5.0),
            (18, 11, 2.8),
            (15, 28, 4.2),
        ])
        .build()
}
