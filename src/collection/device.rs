//! Driving the external tools that touch the block device.
//!
//! Exit statuses of these tools are logged but never acted on; a failed flush or a
//! short read does not change how the test proceeds.

use std::{
    ffi::OsString,
    path::Path,
    process::{Command, Stdio},
};

use log::{debug, warn};

use super::error::{CollectionError, CollectionResult};
use crate::constants::{BLOCK_SIZE_BYTES, DISCARD_SINK};

/// The device-side steps of a measurement.
pub trait DeviceRunner {
    /// Flushes the buffers of `device`. Best-effort, never fails.
    fn flush_buffers(&mut self, device: &Path);

    /// Reads `mebibytes` MiB from `device` into a discard sink, in 1 MiB blocks.
    /// The count is handed to the tool as given, even if it is negative. Only failing
    /// to start the read at all is an error.
    fn read_raw(&mut self, device: &Path, mebibytes: i64) -> CollectionResult<()>;
}

/// Uses `blockdev` and `dd` from the host system.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemTools;

impl SystemTools {
    pub(crate) fn flush_command(device: &Path) -> Command {
        let mut cmd = Command::new("blockdev");
        cmd.arg("--flushbufs").arg(device);
        cmd
    }

    pub(crate) fn read_command(device: &Path, mebibytes: i64) -> Command {
        let mut input = OsString::from("if=");
        input.push(device);

        let mut cmd = Command::new("dd");
        cmd.arg(input)
            .arg(format!("of={DISCARD_SINK}"))
            .arg(format!("bs={BLOCK_SIZE_BYTES}"))
            .arg(format!("count={mebibytes}"))
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        cmd
    }
}

impl DeviceRunner for SystemTools {
    fn flush_buffers(&mut self, device: &Path) {
        match Self::flush_command(device).status() {
            Ok(status) => debug!("blockdev --flushbufs {} exited with {status}", device.display()),
            Err(err) => warn!("Unable to run blockdev on {}: {err}", device.display()),
        }
    }

    fn read_raw(&mut self, device: &Path, mebibytes: i64) -> CollectionResult<()> {
        let status = Self::read_command(device, mebibytes)
            .status()
            .map_err(|err| CollectionError::Spawn("dd".into(), err))?;

        debug!("dd read of {mebibytes} MiB from {} exited with {status}", device.display());
        Ok(())
    }
}
