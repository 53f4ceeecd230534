use std::{io::stdout, process::ExitCode};

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use disk_cpu_load::{
    collection::{cpu::ProcStat, device::SystemTools, LoadSampler},
    constants::USAGE_LINE,
    options::{get_args, resolve_test_config, stray_token_device, OptionError},
    run_test,
};

fn report_unknown_device(err: &OptionError) -> ExitCode {
    println!("{err}");
    println!("{USAGE_LINE}");
    ExitCode::FAILURE
}

fn main() -> Result<ExitCode> {
    #[cfg(all(feature = "logging", debug_assertions))]
    {
        disk_cpu_load::utils::logging::init_logger(
            log::LevelFilter::Debug,
            std::ffi::OsStr::new("debug.log"),
        )?;
    }

    let args = match get_args() {
        Ok(args) => args,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
            _ => match stray_token_device(&err) {
                Some(device) if !device.exists() => {
                    return Ok(report_unknown_device(&OptionError::UnknownDevice(device)));
                }
                _ => {
                    err.print()?;
                    return Ok(ExitCode::FAILURE);
                }
            },
        },
    };

    let config = match resolve_test_config(&args) {
        Ok(config) => config,
        Err(err @ OptionError::UnknownDevice(_)) => return Ok(report_unknown_device(&err)),
        Err(err) => return Err(err).context("Unable to resolve the test options."),
    };
    log::debug!("Resolved options: {config:?}");

    let mut sampler = LoadSampler::new(ProcStat::default(), SystemTools);
    let outcome = run_test(&config, &mut sampler, &mut stdout().lock())?;

    Ok(ExitCode::from(outcome.exit_code()))
}
