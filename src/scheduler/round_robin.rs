use std::collections::VecDeque;

use super::{EnqueueFlags, KernelCtx, ProcessId, ProcessRecord, Scheduler, Strategy, Ticks};
use crate::core::{SchedError, schedule};

/// FIFO ready queue. Arrivals and preempted processes both go to the tail.
pub struct RoundRobinScheduler {
    ready: VecDeque<ProcessId>,
}

impl Scheduler for RoundRobinScheduler {
    fn init(ctx: &KernelCtx) -> Self {
        Self {
            ready: VecDeque::with_capacity(ctx.processes().len()),
        }
    }

    fn enqueue(&mut self, _ctx: &KernelCtx, process: ProcessId, flags: EnqueueFlags) {
        let _ = flags;
        self.ready.push_back(process);
    }

    fn dispatch(&mut self, _ctx: &KernelCtx) -> Option<ProcessId> {
        self.ready.pop_front()
    }

    fn len(&self) -> usize {
        self.ready.len()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RoundRobin;

impl Strategy for RoundRobin {
    fn name(&self) -> &str {
        "Round Robin"
    }

    fn schedule(
        &self,
        processes: &[ProcessRecord],
        quantum: Ticks,
    ) -> Result<Vec<ProcessRecord>, SchedError> {
        schedule::<RoundRobinScheduler>(processes, quantum)
    }
}
