pub mod presets;
pub mod random;

use serde::Serialize;

use crate::core::{DEFAULT_PRIORITY, ProcessId, ProcessRecord, Ticks};
pub use presets::Presets;
pub use random::BernoulliWorkload;

/// A named set of processes plus the quantum to schedule them with.
///
/// Process order is the admission scan order and is kept as given. Runs
/// never mutate a dataset; each one works on its own copy.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkloadDataset {
    pub name: String,
    pub description: String,
    pub quantum: Ticks,
    pub processes: Vec<ProcessRecord>,
}

impl WorkloadDataset {
    pub fn builder(name: impl Into<String>, quantum: Ticks) -> DatasetBuilder {
        DatasetBuilder {
            dataset: WorkloadDataset {
                name: name.into(),
                description: String::new(),
                quantum,
                processes: Vec::new(),
            },
        }
    }

    pub fn len(&self) -> usize {
        self.processes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    /// Same dataset scheduled with a different quantum.
    pub fn with_quantum(&self, quantum: Ticks) -> Self {
        Self {
            quantum,
            ..self.clone()
        }
    }
}

pub struct DatasetBuilder {
    dataset: WorkloadDataset,
}

impl DatasetBuilder {
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.dataset.description = description.into();
        self
    }

    pub fn process(self, id: ProcessId, arrival: Ticks, burst: Ticks) -> Self {
        self.process_with_priority(id, arrival, burst, DEFAULT_PRIORITY)
    }

    pub fn process_with_priority(
        mut self,
        id: ProcessId,
        arrival: Ticks,
        burst: Ticks,
        priority: f64,
    ) -> Self {
        self.dataset
            .processes
            .push(ProcessRecord::new(id, arrival, burst, priority));
        self
    }

    /// Adds `(arrival, burst, priority)` rows, numbering ids on from the
    /// processes already present.
    pub fn rows(mut self, rows: &[(Ticks, Ticks, f64)]) -> Self {
        let first_id = self.dataset.processes.len() as ProcessId + 1;
        for (offset, &(arrival, burst, priority)) in rows.iter().enumerate() {
            let id = first_id + offset as ProcessId;
            self = self.process_with_priority(id, arrival, burst, priority);
        }
        self
    }

    pub fn build(self) -> WorkloadDataset {
        self.dataset
    }
}

/// Source of datasets for the driver.
pub trait WorkloadProvider {
    fn datasets(&self) -> Vec<WorkloadDataset>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_keeps_order_and_assigns_ids() {
        let dataset = WorkloadDataset::builder("rows", 3)
            .description("two rows and a manual one")
            .rows(&[(4, 2, 1.0), (0, 6, 2.0)])
            .process(9, 1, 1)
            .build();

        let ids: Vec<_> = dataset.processes.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 9]);
        assert_eq!(dataset.processes[0].arrival_time, 4);
        assert_eq!(dataset.processes[1].priority, 2.0);
        assert_eq!(dataset.processes[2].priority, DEFAULT_PRIORITY);
        assert_eq!(dataset.description, "two rows and a manual one");
        assert_eq!(dataset.len(), 3);
    }

    #[test]
    fn quantum_override_is_a_copy() {
        let dataset = WorkloadDataset::builder("q", 3).process(1, 0, 5).build();
        let other = dataset.with_quantum(7);
        assert_eq!(other.quantum, 7);
        assert_eq!(dataset.quantum, 3);
        assert_eq!(other.processes, dataset.processes);
    }
}
