//! Integration tests for disk_cpu_load.

mod util;

mod arg_tests;
mod config_tests;

#[cfg(target_os = "linux")]
mod run_tests;
