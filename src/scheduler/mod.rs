pub mod priority;
pub mod round_robin;

use crate::core::{
    SchedError,
    state::{KernelCtx, ProcessId, ProcessRecord, Ticks},
};
pub use priority::{PriorityRoundRobin, PriorityScheduler};
pub use round_robin::{RoundRobin, RoundRobinScheduler};

pub type EnqueueFlags = u64;

pub const ENQ_ARRIVAL: EnqueueFlags = 1 << 0;
pub const ENQ_PREEMPT: EnqueueFlags = 1 << 1;
pub const ENQ_REENQ: EnqueueFlags = 1 << 2;

/// Ready-queue policy driven by [`SchedCore`](crate::core::SchedCore).
///
/// The core owns the clock, admission and queued flags; a policy only
/// decides the order in which queued processes are dispatched and how long
/// each slice may be.
pub trait Scheduler {
    fn init(ctx: &KernelCtx) -> Self;

    fn enqueue(&mut self, ctx: &KernelCtx, process: ProcessId, flags: EnqueueFlags);

    /// Removes and returns the next process to run.
    fn dispatch(&mut self, ctx: &KernelCtx) -> Option<ProcessId>;

    fn slice(&self, ctx: &KernelCtx, _process: ProcessId) -> Ticks {
        ctx.quantum.get()
    }

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A complete scheduling algorithm as seen by the comparison layer: takes a
/// workload and a quantum, returns the same processes with completion data.
pub trait Strategy: Sync {
    fn name(&self) -> &str;

    fn schedule(
        &self,
        processes: &[ProcessRecord],
        quantum: Ticks,
    ) -> Result<Vec<ProcessRecord>, SchedError>;
}
