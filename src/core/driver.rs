use serde::Serialize;
use tracing::debug;

use super::{
    error::SchedError,
    event::SchedEvent,
    observer::Observer,
    state::{KernelCtx, ProcessId, ProcessRecord, Quantum, Ticks},
};
use crate::scheduler::{ENQ_ARRIVAL, ENQ_PREEMPT, ENQ_REENQ, Scheduler};

/// One contiguous stretch of CPU time given to a process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Slice {
    pub process: ProcessId,
    pub start: Ticks,
    pub duration: Ticks,
}

#[derive(Debug, Clone)]
pub struct SimOutcome {
    /// Completed processes, in dataset order.
    pub processes: Vec<ProcessRecord>,
    pub timeline: Vec<Slice>,
}

pub struct SchedCore<S: Scheduler> {
    pub ctx: KernelCtx,
    pub scheduler: S,
    observer: Observer,
    timeline: Vec<Slice>,
}

impl<S: Scheduler> SchedCore<S> {
    pub fn new(processes: &[ProcessRecord], quantum: Ticks) -> Result<Self, SchedError> {
        let quantum = Quantum::new(quantum)?;
        let ctx = KernelCtx::new(processes, quantum)?;
        let scheduler = S::init(&ctx);
        Ok(Self {
            ctx,
            scheduler,
            observer: Observer::new(),
            timeline: Vec::new(),
        })
    }

    /// One iteration: admit arrivals, then dispatch at most one process for
    /// at most one quantum.
    pub fn step(&mut self) -> Vec<SchedEvent> {
        let mut events = Vec::new();
        self.admit_arrivals(&mut events);

        match self.scheduler.dispatch(&self.ctx) {
            Some(process) => self.run_slice(process, &mut events),
            None => self.idle(&mut events),
        }

        self.observer
            .observe(&self.ctx, self.scheduler.len(), &events);
        events
    }

    // Scan in dataset order, so simultaneous arrivals keep their input order
    fn admit_arrivals(&mut self, events: &mut Vec<SchedEvent>) {
        for process in self.ctx.admissible() {
            self.ctx.mark_queued(process);
            self.scheduler.enqueue(&self.ctx, process, ENQ_ARRIVAL);
            events.push(SchedEvent::Admitted {
                process,
                at: self.ctx.now,
            });
        }
    }

    fn run_slice(&mut self, process: ProcessId, events: &mut Vec<SchedEvent>) {
        self.ctx.mark_dequeued(process);
        let start = self.ctx.now;
        self.ctx.mark_dispatched(process);

        let slice = self.scheduler.slice(&self.ctx, process);
        let used = self.ctx.execute(process, slice);
        events.push(SchedEvent::Dispatched {
            process,
            at: start,
            slice: used,
        });
        self.timeline.push(Slice {
            process,
            start,
            duration: used,
        });

        let remaining = self.ctx.process(process).remaining_time;
        if remaining == 0 {
            self.ctx.mark_completed(process);
            events.push(SchedEvent::Completed {
                process,
                at: self.ctx.now,
            });
            return;
        }

        // Arrivals admitted earlier in this step are already ahead of us
        self.ctx.mark_queued(process);
        self.scheduler
            .enqueue(&self.ctx, process, ENQ_PREEMPT | ENQ_REENQ);
        events.push(SchedEvent::Preempted {
            process,
            at: self.ctx.now,
            remaining,
        });
    }

    // Nothing can be dispatched before the next arrival, so skip straight to it
    fn idle(&mut self, events: &mut Vec<SchedEvent>) {
        let from = self.ctx.now;
        let to = match self.ctx.next_arrival() {
            Some(arrival) if arrival > from => arrival,
            _ => from + 1,
        };
        self.ctx.advance_time(to - from);
        events.push(SchedEvent::Idle { from, to });
    }

    pub fn all_completed(&self) -> bool {
        self.ctx.all_completed()
    }

    pub fn now(&self) -> Ticks {
        self.ctx.now
    }

    pub fn observer(&self) -> &Observer {
        &self.observer
    }

    pub fn run(mut self) -> SimOutcome {
        while !self.all_completed() {
            self.step();
        }

        debug!(
            processes = self.ctx.processes().len(),
            steps = self.observer.steps(),
            finished_at = self.ctx.now,
            "simulation finished"
        );

        SimOutcome {
            processes: self.ctx.into_processes(),
            timeline: self.timeline,
        }
    }
}

/// Runs policy `S` over a private copy of `processes` and returns the
/// completed records together with the execution timeline.
pub fn simulate<S: Scheduler>(
    processes: &[ProcessRecord],
    quantum: Ticks,
) -> Result<SimOutcome, SchedError> {
    Ok(SchedCore::<S>::new(processes, quantum)?.run())
}

pub fn schedule<S: Scheduler>(
    processes: &[ProcessRecord],
    quantum: Ticks,
) -> Result<Vec<ProcessRecord>, SchedError> {
    simulate::<S>(processes, quantum).map(|outcome| outcome.processes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::DEFAULT_PRIORITY;
    use crate::scheduler::RoundRobinScheduler;

    fn p(id: ProcessId, arrival: Ticks, burst: Ticks) -> ProcessRecord {
        ProcessRecord::new(id, arrival, burst, DEFAULT_PRIORITY)
    }

    #[test]
    fn zero_quantum_never_runs() {
        let err = SchedCore::<RoundRobinScheduler>::new(&[p(1, 0, 3)], 0)
            .err()
            .unwrap();
        assert_eq!(err, SchedError::InvalidQuantum(0));
    }

    #[test]
    fn empty_input_finishes_immediately() {
        let core = SchedCore::<RoundRobinScheduler>::new(&[], 4).unwrap();
        assert!(core.all_completed());
        let outcome = core.run();
        assert!(outcome.processes.is_empty());
        assert!(outcome.timeline.is_empty());
    }

    #[test]
    fn idle_gap_is_collapsed() {
        let mut core = SchedCore::<RoundRobinScheduler>::new(&[p(1, 5, 2)], 4).unwrap();

        let events = core.step();
        assert_eq!(events, vec![SchedEvent::Idle { from: 0, to: 5 }]);
        assert_eq!(core.now(), 5);

        let events = core.step();
        assert_eq!(
            events,
            vec![
                SchedEvent::Admitted { process: 1, at: 5 },
                SchedEvent::Dispatched {
                    process: 1,
                    at: 5,
                    slice: 2
                },
                SchedEvent::Completed { process: 1, at: 7 },
            ]
        );
        assert!(core.all_completed());
    }

    #[test]
    fn preempted_process_stays_ahead_of_later_scan() {
        // P1 is re-enqueued at t=2 before the next scan admits P2
        let mut core =
            SchedCore::<RoundRobinScheduler>::new(&[p(1, 0, 4), p(2, 2, 2)], 2).unwrap();

        core.step();
        let events = core.step();
        assert_eq!(
            events,
            vec![
                SchedEvent::Admitted { process: 2, at: 2 },
                SchedEvent::Dispatched {
                    process: 1,
                    at: 2,
                    slice: 2
                },
                SchedEvent::Completed { process: 1, at: 4 },
            ]
        );
        let _ = core.step();
        assert!(core.all_completed());
    }

    #[test]
    fn timeline_covers_each_burst() {
        let processes = [p(1, 0, 5), p(2, 1, 3), p(3, 2, 1)];
        let outcome = simulate::<RoundRobinScheduler>(&processes, 2).unwrap();

        for process in &processes {
            let total: Ticks = outcome
                .timeline
                .iter()
                .filter(|slice| slice.process == process.id)
                .map(|slice| slice.duration)
                .sum();
            assert_eq!(total, process.burst_time);
        }
    }
}
