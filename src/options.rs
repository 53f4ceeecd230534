//! How to resolve the test configuration from the command-line arguments and an
//! optional config file.

pub mod args;
pub mod config;
mod error;

use std::path::{Path, PathBuf};

use clap::{
    error::{ContextKind, ContextValue, ErrorKind},
    Parser,
};
pub use config::{read_config, Config};
pub use error::{OptionError, OptionResult};

use self::{args::Args, config::ConfigFlags};
use crate::constants::*;

/// The fully resolved settings for a single test run. Built once, never changed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestConfig {
    /// The device to read from. Always carries a single `/dev/` prefix.
    pub device: PathBuf,
    pub verbose: bool,
    /// The maximum acceptable CPU load, as a percentage.
    pub max_load: i64,
    /// How much to read, in mebibytes.
    pub xfer: i64,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            device: PathBuf::from(DEFAULT_DEVICE),
            verbose: false,
            max_load: DEFAULT_MAX_LOAD,
            xfer: DEFAULT_XFER_MIB,
        }
    }
}

impl TestConfig {
    /// Resolves a [`TestConfig`] from parsed arguments and config file flags.
    ///
    /// Command-line values win over config file values, which win over the defaults.
    /// Each device candidate is checked with `device_exists` in the order it was given,
    /// and the first one that does not exist stops resolution with
    /// [`OptionError::UnknownDevice`]. The last device given is the one used.
    pub fn from_sources(
        args: &Args, flags: &ConfigFlags, device_exists: impl Fn(&Path) -> bool,
    ) -> OptionResult<Self> {
        let test_args = &args.test_args;

        let candidates: Vec<&str> = if test_args.devices.is_empty() {
            flags.device.as_deref().into_iter().collect()
        } else {
            test_args.devices.iter().map(String::as_str).collect()
        };

        let mut device = PathBuf::from(DEFAULT_DEVICE);
        for candidate in candidates {
            let path = normalize_device(candidate);
            if !device_exists(&path) {
                return Err(OptionError::UnknownDevice(path));
            }
            device = path;
        }

        let max_load = match &test_args.max_load {
            Some(value) => parse_integer("--max-load", value)?,
            None => flags.max_load.unwrap_or(DEFAULT_MAX_LOAD),
        };

        let xfer = match &test_args.xfer {
            Some(value) => parse_integer("--xfer", value)?,
            None => flags.xfer.unwrap_or(DEFAULT_XFER_MIB),
        };

        let verbose = args.general_args.verbose || flags.verbose.unwrap_or(false);

        Ok(Self {
            device,
            verbose,
            max_load,
            xfer,
        })
    }
}

/// Returns the parsed command-line arguments. Help and version requests come back
/// as errors too, and are left for the caller to print.
pub fn get_args() -> Result<Args, clap::Error> {
    Args::try_parse()
}

/// Flag-like tokens that are not options still name a device, so `--foo` refers to
/// `/dev/--foo`. Returns that device for an unknown-argument error.
pub fn stray_token_device(err: &clap::Error) -> Option<PathBuf> {
    if err.kind() != ErrorKind::UnknownArgument {
        return None;
    }

    match err.get(ContextKind::InvalidArg) {
        Some(ContextValue::String(token)) => Some(normalize_device(token)),
        _ => None,
    }
}

/// Resolves the [`TestConfig`] for this run, reading the config file if one was
/// given and checking devices against the real filesystem.
pub fn resolve_test_config(args: &Args) -> OptionResult<TestConfig> {
    let config = match &args.general_args.config_location {
        Some(location) => read_config(Path::new(location))?,
        None => Config::default(),
    };

    TestConfig::from_sources(args, &config.flags(), Path::exists)
}

/// Turns a device token into a path with exactly one `/dev/` prefix. Both `sda` and
/// `/dev/sda` become `/dev/sda`.
pub fn normalize_device(token: &str) -> PathBuf {
    let joined = format!("{DEV_PREFIX}{token}");
    PathBuf::from(joined.replace("/dev//dev", "/dev"))
}

fn parse_integer(option: &'static str, value: &str) -> OptionResult<i64> {
    value
        .parse::<i64>()
        .map_err(|err| OptionError::invalid_integer(option, value, err))
}
