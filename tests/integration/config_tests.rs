//! Tests for the optional config file.

use assert_cmd::prelude::*;
use predicates::prelude::*;

use crate::util::{config_file, test_command};

#[test]
fn test_missing_config_file() {
    test_command(&["-C", "./tests/this_config_does_not_exist.toml"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Configuration file error"))
        .stderr(predicate::str::contains("this_config_does_not_exist.toml"));
}

#[test]
fn test_malformed_config_file() {
    let file = config_file("[flags]\nmax_load = \"very high\"\n");

    test_command(&["-C", file.path().to_str().unwrap()])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Configuration file error"));
}

#[test]
fn test_config_unknown_device() {
    let file = config_file("[flags]\ndevice = \"disk_cpu_load_missing_device\"\n");

    test_command(&["--config", file.path().to_str().unwrap()])
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "Unknown block device \"/dev/disk_cpu_load_missing_device\"",
        ));
}

#[test]
fn test_args_override_config_device() {
    let file = config_file("[flags]\ndevice = \"sda\"\n");

    test_command(&["-C", file.path().to_str().unwrap(), "disk_cpu_load_missing_device"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "Unknown block device \"/dev/disk_cpu_load_missing_device\"",
        ));
}
