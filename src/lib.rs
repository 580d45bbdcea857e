pub mod config;
pub mod core;
pub mod report;
pub mod scheduler;
pub mod sim;
pub mod workload;

pub use crate::core::{ProcessRecord, SchedCore, SchedError, SchedEvent, schedule, simulate};
pub use scheduler::{PriorityRoundRobin, RoundRobin, Scheduler, Strategy};
pub use sim::{ComparisonHarness, metrics};
pub use workload::{WorkloadDataset, WorkloadProvider};
