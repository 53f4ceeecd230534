//! Full runs against `/dev/null`, which always exists and reads back nothing. These
//! need `/proc/stat` and `dd` on the host.

use assert_cmd::prelude::*;
use predicates::prelude::*;

use crate::util::{config_file, test_command};

#[test]
fn test_full_run_passes() {
    // No load can be over 100%.
    test_command(&["null", "--xfer", "0", "--max-load", "100"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Testing CPU load when reading 0 MiB from /dev/null",
        ))
        .stdout(predicate::str::contains("Maximum acceptable CPU load is 100"))
        .stdout(predicate::str::contains("Detected disk read CPU load is"))
        .stdout(predicate::str::contains("HAS FAILED").not())
        .stdout(predicate::str::contains("Beginning disk read").not());
}

#[test]
fn test_negative_xfer_still_runs() {
    // dd refuses the count, which does not stop the run.
    test_command(&["null", "--xfer", "-1", "--max-load", "100"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Testing CPU load when reading -1 MiB from /dev/null",
        ))
        .stdout(predicate::str::contains("Detected disk read CPU load is"));
}

#[test]
fn test_negative_max_load_fails_after_measuring() {
    test_command(&["null", "--xfer", "0", "--max-load", "-5"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Maximum acceptable CPU load is -5"))
        .stdout(predicate::str::contains("Detected disk read CPU load is"))
        .stdout(predicate::str::contains("*** DISK CPU LOAD TEST HAS FAILED! ***"));
}

#[test]
fn test_verbose_run() {
    test_command(&["/dev/null", "--xfer", "0", "--max-load", "100", "--verbose"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Beginning disk read....\n"))
        .stdout(predicate::str::contains("Disk read complete!\n"))
        .stdout(predicate::str::contains("Start CPU time = "))
        .stdout(predicate::str::contains("End CPU time = "))
        .stdout(predicate::str::contains("CPU time used = "))
        .stdout(predicate::str::contains("Total elapsed time = "));
}

#[test]
fn test_run_from_config() {
    let file = config_file("[flags]\ndevice = \"null\"\nxfer = 0\nmax_load = 100\nverbose = true\n");

    test_command(&["-C", file.path().to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Testing CPU load when reading 0 MiB from /dev/null",
        ))
        .stdout(predicate::str::contains("Disk read complete!"));
}
