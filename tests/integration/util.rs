use std::{ffi::OsString, path::Path, process::Command};

use tempfile::NamedTempFile;

const EXE_PATH: &str = env!("CARGO_BIN_EXE_disk_cpu_load");

pub fn abs_path(path: &str) -> OsString {
    let path = Path::new(path);

    if path.exists() {
        path.canonicalize().unwrap().into_os_string()
    } else {
        // We are going to trust that the path given is valid...
        path.to_owned().into_os_string()
    }
}

/// Returns the [`Command`] of a binary invocation of disk_cpu_load with the given
/// arguments. Any config file path given via `-C` is made absolute.
pub fn test_command(args: &[&str]) -> Command {
    let mut cmd = Command::new(EXE_PATH);

    let mut prev = "";
    for arg in args.iter() {
        if prev == "-C" || prev == "--config" {
            cmd.arg(abs_path(arg));
        } else {
            cmd.arg(arg);
        }

        prev = arg;
    }

    cmd
}

/// Writes `contents` to a temporary TOML config file.
pub fn config_file(contents: &str) -> NamedTempFile {
    let file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    std::fs::write(file.path(), contents).unwrap();

    file
}
