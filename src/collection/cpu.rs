//! CPU time snapshots, taken from the aggregate `cpu` line of `/proc/stat`.

use std::{fs, path::PathBuf};

use super::error::{CollectionError, CollectionResult};
use crate::constants::PROC_STAT_PATH;

/// Position of the idle counter, after the leading `cpu` label is dropped.
pub const IDLE_FIELD: usize = 3;

/// The label that leads the aggregate CPU line.
const AGGREGATE_LABEL: &str = "cpu";

/// The counters of the aggregate CPU line, in kernel order (user, nice, system, idle,
/// iowait, irq, softirq, steal, ...). Always holds at least up to the idle field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CpuSnapshot {
    inner: Vec<u64>,
}

impl CpuSnapshot {
    /// Creates a snapshot from raw counters. Fails if there is no idle counter.
    pub fn new(fields: Vec<u64>) -> CollectionResult<Self> {
        if fields.len() <= IDLE_FIELD {
            return Err(CollectionError::parsing(format!(
                "expected at least {} CPU fields, found {}",
                IDLE_FIELD + 1,
                fields.len()
            )));
        }

        Ok(Self { inner: fields })
    }

    /// The total elapsed CPU time units, i.e. every field summed.
    pub fn total(&self) -> u64 {
        self.inner.iter().sum()
    }

    /// The idle CPU time units.
    pub fn idle(&self) -> u64 {
        // Guaranteed to be in bounds by new().
        self.inner[IDLE_FIELD]
    }
}

impl std::ops::Deref for CpuSnapshot {
    type Target = Vec<u64>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

/// Given the contents of `/proc/stat`, returns the fields of the aggregate CPU line
/// with the label dropped.
pub fn parse_cpu_snapshot(stat: &str) -> CollectionResult<CpuSnapshot> {
    let line = stat
        .lines()
        .find(|line| line.split_whitespace().next() == Some(AGGREGATE_LABEL))
        .ok_or_else(|| CollectionError::parsing("no aggregate 'cpu' line found"))?;

    let fields = line
        .split_whitespace()
        .skip(1)
        .map(|field| {
            field
                .parse::<u64>()
                .map_err(|source| CollectionError::InvalidField {
                    field: field.to_string(),
                    source,
                })
        })
        .collect::<CollectionResult<Vec<_>>>()?;

    CpuSnapshot::new(fields)
}

/// Something that can hand back the raw text of the kernel CPU statistics.
pub trait StatSource {
    fn read_stat(&mut self) -> CollectionResult<String>;

    /// Reads and parses a fresh [`CpuSnapshot`].
    fn snapshot(&mut self) -> CollectionResult<CpuSnapshot> {
        let stat = self.read_stat()?;
        parse_cpu_snapshot(&stat)
    }
}

/// Reads statistics from a file, `/proc/stat` by default.
#[derive(Debug, Clone)]
pub struct ProcStat {
    path: PathBuf,
}

impl ProcStat {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Default for ProcStat {
    fn default() -> Self {
        Self::new(PROC_STAT_PATH)
    }
}

impl StatSource for ProcStat {
    fn read_stat(&mut self) -> CollectionResult<String> {
        Ok(fs::read_to_string(&self.path)?)
    }
}
