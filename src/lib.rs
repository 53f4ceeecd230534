//! A small tool that measures how much CPU time a large sequential read from a block
//! device costs, and fails if that load goes over a threshold.
//!
//! The run is a straight line: resolve a [`TestConfig`](options::TestConfig), take a
//! [`LoadSample`](collection::LoadSample) around a raw read of the device, reduce it
//! to a percentage, and judge it.

pub mod utils {
    pub mod logging;
}
pub mod collection;
pub mod constants;
pub mod load;
pub mod options;

use std::io::Write;

use anyhow::{Context, Result};
use log::info;

use collection::{cpu::StatSource, device::DeviceRunner, LoadSampler};
use constants::FAILURE_BANNER;
use load::{compute_cpu_load, TestOutcome};
use options::TestConfig;

/// Runs a full test for `config`, writing the report to `out`.
pub fn run_test<S: StatSource, D: DeviceRunner>(
    config: &TestConfig, sampler: &mut LoadSampler<S, D>, out: &mut impl Write,
) -> Result<TestOutcome> {
    writeln!(
        out,
        "Testing CPU load when reading {} MiB from {}",
        config.xfer,
        config.device.display()
    )?;
    writeln!(out, "Maximum acceptable CPU load is {}", config.max_load)?;

    let sample = sampler
        .sample(config, out)
        .context("Unable to sample CPU time around the disk read.")?;

    let cpu_load = compute_cpu_load(&sample.start, &sample.end, config.verbose, out)?;
    writeln!(out, "Detected disk read CPU load is {cpu_load}")?;

    let outcome = TestOutcome::judge(cpu_load, config.max_load);
    if outcome == TestOutcome::Failed {
        writeln!(out, "{FAILURE_BANNER}")?;
    }
    info!(
        "Load of {cpu_load} against a maximum of {} gives {outcome:?}",
        config.max_load
    );

    Ok(outcome)
}
