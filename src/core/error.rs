use thiserror::Error;

use super::state::ProcessId;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SchedError {
    #[error("quantum must be positive, got {0}")]
    InvalidQuantum(u64),

    #[error("cannot average metrics over an empty process set")]
    EmptyDataset,

    #[error("process id {0} appears more than once")]
    DuplicateProcessId(ProcessId),

    #[error("process id must be positive")]
    InvalidProcessId,

    #[error("process {0} has a zero burst time")]
    ZeroBurst(ProcessId),

    #[error("process {0} has no completion data")]
    IncompleteProcess(ProcessId),

    #[error("improvement in {metric} is undefined: baseline average is zero")]
    ImprovementUndefined { metric: &'static str },

    #[error("comparison needs at least one strategy")]
    NoStrategies,
}
