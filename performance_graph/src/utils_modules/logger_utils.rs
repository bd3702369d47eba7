use crate::common::*;

#[doc = r#"
    Initializes the global logger.

    Log lines go to daily rotated files under `log_directory` (the last 10 are
    kept) and warnings or worse are duplicated to stderr.

    # Arguments
    * `log_directory` - Directory of the log files
    * `log_level`     - flexi_logger spec string, e.g. `info`

    # Returns
    * `LoggerHandle` - Must stay alive for the whole run, dropping it flushes and stops logging
"#]
pub fn set_global_logger(log_directory: &str, log_level: &str) -> anyhow::Result<LoggerHandle> {
    let handle: LoggerHandle = Logger::try_with_str(log_level)?
        .log_to_file(
            FileSpec::default()
                .directory(log_directory)
                .discriminant("performance_graph"),
        )
        .rotate(
            Criterion::Age(Age::Day),
            Naming::Timestamps,
            Cleanup::KeepLogFiles(10),
        )
        .format_for_files(custom_format)
        .duplicate_to_stderr(Duplicate::Warn)
        .start()
        .context("[set_global_logger] Logger initialization failed")?;

    Ok(handle)
}

#[doc = "Custom Log Format Function"]
fn custom_format(
    w: &mut dyn Write,
    now: &mut DeferredNow,
    record: &Record,
) -> Result<(), std::io::Error> {
    write!(
        w,
        "[{}] [{}] T[{}] {}",
        now.format("%Y-%m-%d %H:%M:%S"),
        record.level(),
        std::thread::current().name().unwrap_or("unknown"),
        &record.args()
    )
}
