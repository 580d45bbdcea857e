use tracing::trace;

use super::{event::SchedEvent, state::KernelCtx};

/// Logs every scheduling event and checks the process table after each step.
#[derive(Debug, Default)]
pub struct Observer {
    step: u64,
}

impl Observer {
    pub fn new() -> Self {
        Self { step: 0 }
    }

    pub fn steps(&self) -> u64 {
        self.step
    }

    pub fn observe(&mut self, ctx: &KernelCtx, ready_len: usize, events: &[SchedEvent]) {
        self.step += 1;

        for event in events {
            trace!(step = self.step, now = ctx.now, ?event, "sched event");
        }

        debug_assert_eq!(
            ctx.queued_len(),
            ready_len,
            "Queued flags disagree with ready queue length"
        );

        for process in ctx.processes() {
            let id = process.id;
            debug_assert!(
                process.remaining_time <= process.burst_time,
                "Process {id} has more remaining time than its burst"
            );
            debug_assert_eq!(
                process.first_execution,
                process.response_time.is_none(),
                "Process {id} response time out of sync with first_execution"
            );

            if let Some(completion) = process.completion_time {
                debug_assert_eq!(process.remaining_time, 0, "Completed process {id} still has work");
                debug_assert!(
                    !ctx.is_queued(id),
                    "Completed process {id} still present in ready queue"
                );
                debug_assert_eq!(
                    process.turnaround_time,
                    Some(completion - process.arrival_time),
                    "Process {id} turnaround mismatch"
                );
                debug_assert_eq!(
                    process.waiting_time,
                    process.turnaround_time.map(|t| t - process.burst_time),
                    "Process {id} waiting time mismatch"
                );
            }
        }
    }
}
