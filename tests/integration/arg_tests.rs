//! These tests are mostly here just to ensure that invalid results will be
//! caught when passing arguments.

use assert_cmd::prelude::*;
use predicates::prelude::*;

use crate::util::test_command;

const MISSING_DEVICE: &str = "/dev/disk_cpu_load_missing_device";

#[test]
fn test_unknown_device() {
    test_command(&[MISSING_DEVICE])
        .assert()
        .code(1)
        .stdout(predicate::str::contains(format!(
            "Unknown block device \"{MISSING_DEVICE}\""
        )))
        .stdout(predicate::str::contains("Usage: disk_cpu_load"))
        .stdout(predicate::str::contains("Testing CPU load").not());
}

#[test]
fn test_unknown_bare_device() {
    test_command(&["disk_cpu_load_missing_device"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains(format!(
            "Unknown block device \"{MISSING_DEVICE}\""
        )));
}

#[test]
fn test_unknown_device_before_known_one() {
    test_command(&[MISSING_DEVICE, "null"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Unknown block device"));
}

#[test]
fn test_invalid_max_load() {
    test_command(&["null", "--max-load", "thirty"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "'--max-load' was set with an invalid value 'thirty'",
        ))
        .stderr(predicate::str::contains("invalid digit found in string"));
}

#[test]
fn test_large_xfer() {
    test_command(&["null", "--xfer", "18446744073709551616"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("number too large"));
}

#[test]
fn test_missing_flag_value() {
    test_command(&["--max-load"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Testing CPU load").not());
}

#[test]
fn test_unknown_flag() {
    test_command(&["--fake-flag"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "Unknown block device \"/dev/--fake-flag\"",
        ))
        .stdout(predicate::str::contains("Usage: disk_cpu_load"));
}

#[test]
fn test_unknown_short_flag() {
    test_command(&["null", "-x"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Unknown block device \"/dev/-x\""))
        .stdout(predicate::str::contains("Testing CPU load").not());
}

#[test]
fn test_help() {
    test_command(&["--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--max-load"))
        .stdout(predicate::str::contains("--xfer"))
        .stdout(predicate::str::contains("--verbose"));
}
