use std::num::NonZeroU64;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::error::SchedError;

pub type ProcessId = u32;
pub type Ticks = u64;

/// Priority a process gets when none is given.
pub const DEFAULT_PRIORITY: f64 = 5.0;

/// Length of one time slice. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Quantum(NonZeroU64);

impl Quantum {
    pub fn new(ticks: Ticks) -> Result<Self, SchedError> {
        NonZeroU64::new(ticks)
            .map(Self)
            .ok_or(SchedError::InvalidQuantum(ticks))
    }

    pub fn get(self) -> Ticks {
        self.0.get()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessRecord {
    pub id: ProcessId,
    pub arrival_time: Ticks,
    pub burst_time: Ticks,
    pub remaining_time: Ticks,
    /// Lower is more urgent. Ignored by plain Round Robin.
    pub priority: f64,
    pub completion_time: Option<Ticks>,
    pub turnaround_time: Option<Ticks>,
    pub waiting_time: Option<Ticks>,
    pub response_time: Option<Ticks>,
    pub first_execution: bool,
}

impl ProcessRecord {
    pub fn new(id: ProcessId, arrival_time: Ticks, burst_time: Ticks, priority: f64) -> Self {
        Self {
            id,
            arrival_time,
            burst_time,
            remaining_time: burst_time,
            priority,
            completion_time: None,
            turnaround_time: None,
            waiting_time: None,
            response_time: None,
            first_execution: true,
        }
    }

    /// Copy of the static attributes with all simulation state reset.
    pub fn fresh(&self) -> Self {
        Self::new(self.id, self.arrival_time, self.burst_time, self.priority)
    }

    pub fn is_completed(&self) -> bool {
        self.completion_time.is_some()
    }
}

/// Mutable state of a single simulation run. Owns a private copy of the
/// workload, so runs over the same dataset never share memory.
#[derive(Debug)]
pub struct KernelCtx {
    pub now: Ticks,
    pub quantum: Quantum,
    processes: Vec<ProcessRecord>,
    // ProcessId --> processes[index]
    index: FxHashMap<ProcessId, usize>,
    queued: Vec<bool>,
    completed: usize,
}

impl KernelCtx {
    pub fn new(processes: &[ProcessRecord], quantum: Quantum) -> Result<Self, SchedError> {
        let mut index = FxHashMap::default();
        index.reserve(processes.len());

        let mut copies = Vec::with_capacity(processes.len());
        for (slot, process) in processes.iter().enumerate() {
            if process.id == 0 {
                return Err(SchedError::InvalidProcessId);
            }
            if process.burst_time == 0 {
                return Err(SchedError::ZeroBurst(process.id));
            }
            if index.insert(process.id, slot).is_some() {
                return Err(SchedError::DuplicateProcessId(process.id));
            }
            copies.push(process.fresh());
        }

        Ok(Self {
            now: 0,
            quantum,
            queued: vec![false; copies.len()],
            processes: copies,
            index,
            completed: 0,
        })
    }

    pub fn advance_time(&mut self, delta: Ticks) {
        self.now = self.now.saturating_add(delta);
    }

    pub fn process(&self, id: ProcessId) -> &ProcessRecord {
        &self.processes[self.slot(id)]
    }

    pub fn processes(&self) -> &[ProcessRecord] {
        &self.processes
    }

    pub fn into_processes(self) -> Vec<ProcessRecord> {
        self.processes
    }

    fn slot(&self, id: ProcessId) -> usize {
        *self
            .index
            .get(&id)
            .expect("Process id missing from process table")
    }

    pub fn is_queued(&self, id: ProcessId) -> bool {
        self.queued[self.slot(id)]
    }

    pub fn queued_len(&self) -> usize {
        self.queued.iter().filter(|queued| **queued).count()
    }

    /// Processes eligible for admission at `now`, in dataset order.
    pub fn admissible(&self) -> Vec<ProcessId> {
        self.processes
            .iter()
            .zip(&self.queued)
            .filter(|(p, queued)| p.arrival_time <= self.now && p.remaining_time > 0 && !**queued)
            .map(|(p, _)| p.id)
            .collect()
    }

    /// Earliest arrival among processes that still need the CPU and are not
    /// queued.
    pub fn next_arrival(&self) -> Option<Ticks> {
        self.processes
            .iter()
            .zip(&self.queued)
            .filter(|(p, queued)| p.remaining_time > 0 && !**queued)
            .map(|(p, _)| p.arrival_time)
            .min()
    }

    pub fn mark_queued(&mut self, id: ProcessId) {
        let slot = self.slot(id);
        debug_assert!(!self.queued[slot], "Process {id} already queued");
        debug_assert!(
            self.processes[slot].remaining_time > 0,
            "Completed process {id} cannot be queued"
        );
        self.queued[slot] = true;
    }

    pub fn mark_dequeued(&mut self, id: ProcessId) {
        let slot = self.slot(id);
        debug_assert!(self.queued[slot], "Process {id} dispatched without being queued");
        self.queued[slot] = false;
    }

    /// Records a dispatch at `now`. Returns the response time if this was the
    /// first one.
    pub fn mark_dispatched(&mut self, id: ProcessId) -> Option<Ticks> {
        let now = self.now;
        let slot = self.slot(id);
        let process = &mut self.processes[slot];
        debug_assert!(
            process.arrival_time <= now,
            "Process {id} dispatched at {now} before arrival {}",
            process.arrival_time
        );

        if !process.first_execution {
            return None;
        }
        process.first_execution = false;
        let response = now - process.arrival_time;
        process.response_time = Some(response);
        Some(response)
    }

    /// Runs `id` for at most `slice` ticks and returns the time actually used.
    pub fn execute(&mut self, id: ProcessId, slice: Ticks) -> Ticks {
        let slot = self.slot(id);
        let exec_time = slice.min(self.processes[slot].remaining_time);
        self.processes[slot].remaining_time -= exec_time;
        self.advance_time(exec_time);
        exec_time
    }

    pub fn mark_completed(&mut self, id: ProcessId) {
        let now = self.now;
        let slot = self.slot(id);
        let process = &mut self.processes[slot];
        debug_assert_eq!(process.remaining_time, 0, "Process {id} completed early");
        debug_assert!(!process.is_completed(), "Process {id} completed twice");

        let turnaround = now - process.arrival_time;
        process.completion_time = Some(now);
        process.turnaround_time = Some(turnaround);
        process.waiting_time = Some(turnaround - process.burst_time);
        self.completed += 1;
    }

    pub fn all_completed(&self) -> bool {
        self.completed == self.processes.len()
    }
}
