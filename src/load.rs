//! Reducing two CPU time snapshots to a load percentage, and judging it against the
//! configured maximum.

use std::io::{self, Write};

use crate::collection::cpu::CpuSnapshot;

/// The intermediate quantities of a load calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadBreakdown {
    pub start_total: u64,
    pub end_total: u64,
    pub diff_idle: u64,
    pub diff_total: u64,
    pub diff_used: u64,
    /// The used share of elapsed CPU time as a whole percentage, truncated.
    pub cpu_load: u64,
}

impl LoadBreakdown {
    /// Computes the breakdown between two snapshots.
    ///
    /// Counters only grow, so the differences saturate at zero instead of wrapping if a
    /// snapshot pair ever goes backwards. A zero `diff_total` gives a load of zero.
    pub fn between(start: &CpuSnapshot, end: &CpuSnapshot) -> Self {
        let start_total = start.total();
        let end_total = end.total();
        let diff_idle = end.idle().saturating_sub(start.idle());
        let diff_total = end_total.saturating_sub(start_total);
        let diff_used = diff_total.saturating_sub(diff_idle);

        let cpu_load = if diff_total != 0 {
            diff_used.saturating_mul(100) / diff_total
        } else {
            0
        };

        Self {
            start_total,
            end_total,
            diff_idle,
            diff_total,
            diff_used,
            cpu_load,
        }
    }
}

/// Returns the CPU load between `start` and `end`, as a whole percentage. In verbose
/// mode the intermediate values are written to `out` first.
pub fn compute_cpu_load(
    start: &CpuSnapshot, end: &CpuSnapshot, verbose: bool, out: &mut impl Write,
) -> io::Result<u64> {
    let breakdown = LoadBreakdown::between(start, end);

    if verbose {
        writeln!(out, "Start CPU time = {}", breakdown.start_total)?;
        writeln!(out, "End CPU time = {}", breakdown.end_total)?;
        writeln!(out, "CPU time used = {}", breakdown.diff_used)?;
        writeln!(out, "Total elapsed time = {}", breakdown.diff_total)?;
    }

    Ok(breakdown.cpu_load)
}

/// How a test run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestOutcome {
    Passed,
    Failed,
}

impl TestOutcome {
    /// A load only fails the test if it is strictly greater than the maximum. Any
    /// load is greater than a negative maximum.
    pub fn judge(cpu_load: u64, max_load: i64) -> Self {
        if i128::from(cpu_load) > i128::from(max_load) {
            TestOutcome::Failed
        } else {
            TestOutcome::Passed
        }
    }

    pub fn exit_code(self) -> u8 {
        match self {
            TestOutcome::Passed => 0,
            TestOutcome::Failed => 1,
        }
    }
}
