//! Optional TOML config file support.

use std::{fs, path::Path};

use serde::Deserialize;

use super::{OptionError, OptionResult};

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    pub(crate) flags: Option<ConfigFlags>,
}

/// Values that can be set from the `[flags]` table. Anything set on the command line
/// takes precedence over these.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ConfigFlags {
    pub(crate) device: Option<String>,
    pub(crate) max_load: Option<i64>,
    pub(crate) xfer: Option<i64>,
    pub(crate) verbose: Option<bool>,
}

impl Config {
    /// Returns the `[flags]` table, or an empty one if it was not set.
    pub(crate) fn flags(&self) -> ConfigFlags {
        self.flags.clone().unwrap_or_default()
    }
}

/// Reads and parses the config file at `path`.
pub fn read_config(path: &Path) -> OptionResult<Config> {
    let contents = fs::read_to_string(path).map_err(|err| {
        OptionError::config(format!("unable to read '{}', {err}", path.display()))
    })?;

    Ok(toml_edit::de::from_str(&contents)?)
}
