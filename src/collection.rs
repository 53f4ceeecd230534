//! The measurement sequence: flush the device, snapshot CPU time, read from the
//! device, and snapshot CPU time again.

pub mod cpu;
pub mod device;
pub mod error;

use std::io::Write;

use log::{debug, info};

use self::{
    cpu::{CpuSnapshot, StatSource},
    device::DeviceRunner,
    error::CollectionResult,
};
use crate::options::TestConfig;

/// The CPU time snapshots taken around the disk read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadSample {
    pub start: CpuSnapshot,
    pub end: CpuSnapshot,
}

/// Runs the measurement steps, in order, against a statistics source and a device.
pub struct LoadSampler<S, D> {
    stat_source: S,
    device: D,
}

impl<S: StatSource, D: DeviceRunner> LoadSampler<S, D> {
    pub fn new(stat_source: S, device: D) -> Self {
        Self {
            stat_source,
            device,
        }
    }

    /// Takes a [`LoadSample`] for `config`. Progress markers are written to `out` in
    /// verbose mode.
    pub fn sample(
        &mut self, config: &TestConfig, out: &mut impl Write,
    ) -> CollectionResult<LoadSample> {
        let device = config.device.as_path();

        debug!("Flushing buffers of {}", device.display());
        self.device.flush_buffers(device);

        let start = self.stat_source.snapshot()?;
        debug!("Start snapshot: {:?}", *start);

        if config.verbose {
            writeln!(out, "Beginning disk read....")?;
        }
        info!("Reading {} MiB from {}", config.xfer, device.display());
        self.device.read_raw(device, config.xfer)?;
        if config.verbose {
            writeln!(out, "Disk read complete!")?;
        }

        let end = self.stat_source.snapshot()?;
        debug!("End snapshot: {:?}", *end);

        Ok(LoadSample { start, end })
    }
}
