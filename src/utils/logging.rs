/// Records from this crate's modules (and the binary) are kept down to the requested
/// level. Anything else only gets through from warnings up.
#[cfg(feature = "logging")]
const LOG_TARGET: &str = "disk_cpu_load";

/// Sends log records to `debug_file_name`, one timestamped line each.
#[cfg(feature = "logging")]
pub fn init_logger(
    min_level: log::LevelFilter, debug_file_name: &std::ffi::OsStr,
) -> Result<(), fern::InitError> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            let offset = time::OffsetDateTime::now_utc();

            out.finish(format_args!(
                "{}[{}][{}] {}",
                offset
                    .format(&time::macros::format_description!(
                        "[[[year]-[month]-[day]][[[hour]:[minute]:[second][subsecond digits:9]]"
                    ))
                    .unwrap_or_default(),
                record.target(),
                record.level(),
                message
            ))
        })
        .level(log::LevelFilter::Warn)
        .level_for(LOG_TARGET, min_level)
        .chain(fern::log_file(debug_file_name)?)
        .apply()?;

    Ok(())
}
