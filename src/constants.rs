//! Default values and fixed paths.

/// The device read from if none is given.
pub const DEFAULT_DEVICE: &str = "/dev/sda";

/// The default maximum acceptable CPU load, as a percentage.
pub const DEFAULT_MAX_LOAD: i64 = 30;

/// The default amount of data to read, in mebibytes.
pub const DEFAULT_XFER_MIB: i64 = 4096;

/// Size of a single transfer unit for the raw read. One block per mebibyte.
pub const BLOCK_SIZE_BYTES: u64 = 1024 * 1024;

/// The prefix every device path is normalized to carry exactly once.
pub const DEV_PREFIX: &str = "/dev/";

pub const PROC_STAT_PATH: &str = "/proc/stat";

/// Where the raw read output is discarded.
pub const DISCARD_SINK: &str = "/dev/null";

pub const USAGE_LINE: &str =
    "Usage: disk_cpu_load [ --max-load <load> ] [ --xfer <mebibytes> ] [ device-file ]";

pub const FAILURE_BANNER: &str = "*** DISK CPU LOAD TEST HAS FAILED! ***";
