//! Workload files for the driver.
//!
//! ```toml
//! [[dataset]]
//! name = "tiny"
//! quantum = 2
//!
//! [[dataset.process]]
//! id = 1
//! arrival = 0
//! burst = 5
//! priority = 1.5   # optional
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::core::{DEFAULT_PRIORITY, ProcessId, Ticks};
use crate::workload::{WorkloadDataset, WorkloadProvider};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid workload file: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Deserialize)]
pub struct WorkloadFile {
    #[serde(rename = "dataset", default)]
    pub datasets: Vec<DatasetEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatasetEntry {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub quantum: Ticks,
    #[serde(rename = "process", default)]
    pub processes: Vec<ProcessEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProcessEntry {
    pub id: ProcessId,
    pub arrival: Ticks,
    pub burst: Ticks,
    #[serde(default = "default_priority")]
    pub priority: f64,
}

fn default_priority() -> f64 {
    DEFAULT_PRIORITY
}

impl WorkloadFile {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }

    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }
}

impl DatasetEntry {
    pub fn to_dataset(&self) -> WorkloadDataset {
        self.processes
            .iter()
            .fold(
                WorkloadDataset::builder(self.name.clone(), self.quantum)
                    .description(self.description.clone()),
                |builder, p| builder.process_with_priority(p.id, p.arrival, p.burst, p.priority),
            )
            .build()
    }
}

impl WorkloadProvider for WorkloadFile {
    fn datasets(&self) -> Vec<WorkloadDataset> {
        self.datasets.iter().map(DatasetEntry::to_dataset).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
[[dataset]]
name = "tiny"
description = "three processes"
quantum = 2

[[dataset.process]]
id = 1
arrival = 0
burst = 5

[[dataset.process]]
id = 2
arrival = 1
burst = 3
priority = 1.5

[[dataset]]
name = "empty"
quantum = 4
"#;

    #[test]
    fn parses_datasets_in_order() {
        let file = WorkloadFile::parse(SAMPLE).unwrap();
        let datasets = file.datasets();
        assert_eq!(datasets.len(), 2);

        let tiny = &datasets[0];
        assert_eq!(tiny.name, "tiny");
        assert_eq!(tiny.description, "three processes");
        assert_eq!(tiny.quantum, 2);
        assert_eq!(tiny.processes[0].priority, DEFAULT_PRIORITY);
        assert_eq!(tiny.processes[1].priority, 1.5);
        assert_eq!(tiny.processes[1].remaining_time, 3);

        assert!(datasets[1].is_empty());
    }

    #[test]
    fn negative_quantum_is_a_parse_error() {
        let text = "[[dataset]]\nname = \"bad\"\nquantum = -1\n";
        assert!(matches!(
            WorkloadFile::parse(text),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = WorkloadFile::from_file("/nonexistent/workload.toml").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/workload.toml"));
    }
}
