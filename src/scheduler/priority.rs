use std::cmp::Ordering;

use keyed_priority_queue::KeyedPriorityQueue;

use super::{EnqueueFlags, KernelCtx, ProcessId, ProcessRecord, Scheduler, Strategy, Ticks};
use crate::core::{SchedError, schedule};

/// Position in the ready queue: priority value first, then enqueue order.
#[derive(Debug, Clone, Copy)]
struct Rank {
    priority: f64,
    seq: u64,
}

// KeyedPriorityQueue is a max-heap, so the smallest (priority, seq) must
// compare greatest
impl Ord for Rank {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Rank {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Rank {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Rank {}

/// Quantum-bounded scheduling where the most urgent queued process (lowest
/// priority value) runs next. Every enqueue takes a fresh sequence number, so
/// processes of equal priority rotate like plain Round Robin.
pub struct PriorityScheduler {
    ready: KeyedPriorityQueue<ProcessId, Rank>,
    next_seq: u64,
}

impl Scheduler for PriorityScheduler {
    fn init(_ctx: &KernelCtx) -> Self {
        Self {
            ready: KeyedPriorityQueue::new(),
            next_seq: 0,
        }
    }

    fn enqueue(&mut self, ctx: &KernelCtx, process: ProcessId, _flags: EnqueueFlags) {
        let rank = Rank {
            priority: ctx.process(process).priority,
            seq: self.next_seq,
        };
        self.next_seq += 1;

        let previous = self.ready.push(process, rank);
        debug_assert!(previous.is_none(), "Process {process} enqueued twice");
    }

    fn dispatch(&mut self, _ctx: &KernelCtx) -> Option<ProcessId> {
        self.ready.pop().map(|(process, _)| process)
    }

    fn len(&self) -> usize {
        self.ready.len()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PriorityRoundRobin;

impl Strategy for PriorityRoundRobin {
    fn name(&self) -> &str {
        "Priority Round Robin"
    }

    fn schedule(
        &self,
        processes: &[ProcessRecord],
        quantum: Ticks,
    ) -> Result<Vec<ProcessRecord>, SchedError> {
        schedule::<PriorityScheduler>(processes, quantum)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::Quantum;
    use crate::scheduler::{ENQ_ARRIVAL, ENQ_PREEMPT, ENQ_REENQ};

    fn ctx() -> KernelCtx {
        let processes = [
            ProcessRecord::new(1, 0, 4, 3.0),
            ProcessRecord::new(2, 0, 4, 1.0),
            ProcessRecord::new(3, 0, 4, 3.0),
        ];
        KernelCtx::new(&processes, Quantum::new(2).unwrap()).unwrap()
    }

    #[test]
    fn lower_value_runs_first() {
        let ctx = ctx();
        let mut priq = PriorityScheduler::init(&ctx);
        priq.enqueue(&ctx, 1, ENQ_ARRIVAL);
        priq.enqueue(&ctx, 2, ENQ_ARRIVAL);
        priq.enqueue(&ctx, 3, ENQ_ARRIVAL);

        assert_eq!(priq.dispatch(&ctx), Some(2));
        assert_eq!(priq.dispatch(&ctx), Some(1));
        assert_eq!(priq.dispatch(&ctx), Some(3));
        assert!(priq.is_empty());
    }

    #[test]
    fn equal_priorities_rotate() {
        let ctx = ctx();
        let mut priq = PriorityScheduler::init(&ctx);
        priq.enqueue(&ctx, 1, ENQ_ARRIVAL);
        priq.enqueue(&ctx, 3, ENQ_ARRIVAL);

        let first = priq.dispatch(&ctx);
        assert_eq!(first, Some(1));
        priq.enqueue(&ctx, 1, ENQ_PREEMPT | ENQ_REENQ);

        assert_eq!(priq.dispatch(&ctx), Some(3));
        assert_eq!(priq.dispatch(&ctx), Some(1));
    }
}
