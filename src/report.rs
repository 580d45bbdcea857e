//! Plain-text rendering of simulation results.

use std::fmt::Write;

use crate::core::Slice;
use crate::sim::{Comparison, Improvement, ImprovementSet, MetricsReport};
use crate::workload::WorkloadDataset;

pub fn dataset_header(dataset: &WorkloadDataset) -> String {
    let mut out = String::new();
    let rule = "=".repeat(60);
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "DATASET: {}", dataset.name);
    if !dataset.description.is_empty() {
        let _ = writeln!(out, "Description: {}", dataset.description);
    }
    let _ = writeln!(out, "Processes: {}", dataset.len());
    let _ = writeln!(out, "Time Quantum: {}", dataset.quantum);
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "PID\tArrival\tBurst\tPriority");
    for p in &dataset.processes {
        let _ = writeln!(
            out,
            "P{}\t{}\t{}\t{:.1}",
            p.id, p.arrival_time, p.burst_time, p.priority
        );
    }
    out
}

pub fn timeline(slices: &[Slice]) -> String {
    let mut out = String::from("Time\tProcess\tRun\n");
    for slice in slices {
        let _ = writeln!(out, "{}\tP{}\t{}", slice.start, slice.process, slice.duration);
    }
    out
}

pub fn metrics_table(title: &str, metrics: &MetricsReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== {title} ===");
    let _ = writeln!(out, "PID\tAT\tBT\tCT\tTAT\tWT\tRT");
    for m in &metrics.per_process {
        let _ = writeln!(
            out,
            "P{}\t{}\t{}\t{}\t{}\t{}\t{}",
            m.id,
            m.arrival_time,
            m.burst_time,
            m.completion_time,
            m.turnaround_time,
            m.waiting_time,
            m.response_time
        );
    }
    let _ = writeln!(out, "Average Waiting Time: {:.2}", metrics.avg_waiting);
    let _ = writeln!(out, "Average Turnaround Time: {:.2}", metrics.avg_turnaround);
    let _ = writeln!(out, "Average Response Time: {:.2}", metrics.avg_response);
    let _ = writeln!(out, "Longest Wait: {}", metrics.max_waiting);
    let _ = writeln!(out, "Makespan: {}", metrics.makespan);
    out
}

fn improvement(value: Improvement) -> String {
    match value {
        Improvement::Percent(p) => format!("{p:.2}%"),
        Improvement::Undefined => "n/a".to_string(),
    }
}

/// One row per dataset and strategy; improvement columns are filled for
/// every strategy after the baseline.
pub fn summary(comparisons: &[Comparison]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<22}{:<24}{:>10}{:>10}{:>10}{:>10}{:>10}{:>10}",
        "Dataset", "Strategy", "Wait", "Improve", "TAT", "Improve", "Resp", "Improve"
    );
    let _ = writeln!(out, "{}", "-".repeat(106));

    for comparison in comparisons {
        for (i, run) in comparison.runs.iter().enumerate() {
            let gains = i
                .checked_sub(1)
                .and_then(|idx| comparison.improvements.get(idx));
            let cell = |pick: fn(&ImprovementSet) -> Improvement| {
                gains.map(|g| improvement(pick(g))).unwrap_or_default()
            };
            let m = &run.metrics;
            let _ = writeln!(
                out,
                "{:<22}{:<24}{:>10.2}{:>10}{:>10.2}{:>10}{:>10.2}{:>10}",
                comparison.dataset,
                run.strategy,
                m.avg_waiting,
                cell(|g| g.waiting),
                m.avg_turnaround,
                cell(|g| g.turnaround),
                m.avg_response,
                cell(|g| g.response),
            );
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::{PriorityRoundRobin, RoundRobin};
    use crate::sim::ComparisonHarness;

    #[test]
    fn summary_marks_only_alternatives() {
        let dataset = WorkloadDataset::builder("demo", 2)
            .process_with_priority(1, 0, 5, 3.0)
            .process_with_priority(2, 1, 3, 1.0)
            .build();
        let comparison = ComparisonHarness::new()
            .with(&RoundRobin)
            .with(&PriorityRoundRobin)
            .run(&dataset)
            .unwrap();

        let text = summary(&[comparison]);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[2].starts_with("demo"));
        assert!(!lines[2].contains('%'));
        assert!(lines[3].contains("Priority Round Robin"));
    }

    #[test]
    fn timeline_rows() {
        let slices = [
            Slice {
                process: 1,
                start: 0,
                duration: 2,
            },
            Slice {
                process: 2,
                start: 2,
                duration: 1,
            },
        ];
        assert_eq!(timeline(&slices), "Time\tProcess\tRun\n0\tP1\t2\n2\tP2\t1\n");
    }
}
