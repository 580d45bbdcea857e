use average::{Estimate, Mean};
use serde::Serialize;

use crate::core::{ProcessId, ProcessRecord, SchedError, Ticks};

/// Timing figures of one completed process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProcessMetrics {
    pub id: ProcessId,
    pub arrival_time: Ticks,
    pub burst_time: Ticks,
    pub completion_time: Ticks,
    pub turnaround_time: Ticks,
    pub waiting_time: Ticks,
    pub response_time: Ticks,
}

impl ProcessMetrics {
    fn from_record(process: &ProcessRecord) -> Result<Self, SchedError> {
        let incomplete = || SchedError::IncompleteProcess(process.id);
        Ok(Self {
            id: process.id,
            arrival_time: process.arrival_time,
            burst_time: process.burst_time,
            completion_time: process.completion_time.ok_or_else(incomplete)?,
            turnaround_time: process.turnaround_time.ok_or_else(incomplete)?,
            waiting_time: process.waiting_time.ok_or_else(incomplete)?,
            response_time: process.response_time.ok_or_else(incomplete)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsReport {
    pub per_process: Vec<ProcessMetrics>,
    pub avg_waiting: f64,
    pub avg_turnaround: f64,
    pub avg_response: f64,
    pub max_waiting: Ticks,
    /// Time at which the last process completed.
    pub makespan: Ticks,
}

/// Averages waiting, turnaround and response time over completed processes.
pub fn calculate(processes: &[ProcessRecord]) -> Result<MetricsReport, SchedError> {
    if processes.is_empty() {
        return Err(SchedError::EmptyDataset);
    }

    let per_process = processes
        .iter()
        .map(ProcessMetrics::from_record)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(MetricsReport {
        avg_waiting: avg(per_process.iter().map(|m| m.waiting_time)),
        avg_turnaround: avg(per_process.iter().map(|m| m.turnaround_time)),
        avg_response: avg(per_process.iter().map(|m| m.response_time)),
        max_waiting: per_process.iter().map(|m| m.waiting_time).max().unwrap_or(0),
        makespan: per_process
            .iter()
            .map(|m| m.completion_time)
            .max()
            .unwrap_or(0),
        per_process,
    })
}

fn avg(iter: impl Iterator<Item = Ticks>) -> f64 {
    iter.map(|t| t as f64).collect::<Mean>().estimate()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DEFAULT_PRIORITY;

    fn completed(
        id: ProcessId,
        arrival: Ticks,
        burst: Ticks,
        completion: Ticks,
        first: Ticks,
    ) -> ProcessRecord {
        let mut process = ProcessRecord::new(id, arrival, burst, DEFAULT_PRIORITY);
        process.remaining_time = 0;
        process.first_execution = false;
        process.completion_time = Some(completion);
        process.turnaround_time = Some(completion - arrival);
        process.waiting_time = Some(completion - arrival - burst);
        process.response_time = Some(first - arrival);
        process
    }

    #[test]
    fn empty_set_has_no_average() {
        assert_eq!(calculate(&[]), Err(SchedError::EmptyDataset));
    }

    #[test]
    fn unfinished_process_is_reported() {
        let processes = [
            completed(1, 0, 2, 2, 0),
            ProcessRecord::new(2, 0, 3, DEFAULT_PRIORITY),
        ];
        assert_eq!(calculate(&processes), Err(SchedError::IncompleteProcess(2)));
    }

    #[test]
    fn averages_and_extremes() {
        let processes = [completed(1, 0, 2, 2, 0), completed(2, 1, 3, 5, 2)];
        let report = calculate(&processes).unwrap();

        // waiting: 0, 1; turnaround: 2, 4; response: 0, 1
        assert_eq!(report.avg_waiting, 0.5);
        assert_eq!(report.avg_turnaround, 3.0);
        assert_eq!(report.avg_response, 0.5);
        assert_eq!(report.max_waiting, 1);
        assert_eq!(report.makespan, 5);
        assert_eq!(report.per_process.len(), 2);
        assert_eq!(report.per_process[1].completion_time, 5);
    }

    #[test]
    fn does_not_touch_input() {
        let processes = vec![completed(1, 0, 2, 2, 0)];
        let before = processes.clone();
        calculate(&processes).unwrap();
        assert_eq!(processes, before);
    }
}
