use log::LevelFilter::*;

#[cfg(test)]
static LOGGING_INITIALIZED: std::sync::Mutex<bool> = std::sync::Mutex::new(false);

/// Routes `log` records to stdout, which the Battlecode client shows per robot.
/// Outside of tests, it fails if a logger was already set.
pub fn init_logging(verbosity: log::LevelFilter) -> Result<(), log::SetLoggerError> {
    #[cfg(test)]
    {
        let mut lock = LOGGING_INITIALIZED.lock().unwrap();

        if *lock {
            return Ok(());
        }

        *lock = true;
    }

    fern::Dispatch::new()
        .level(verbosity)
        .format(|out, message, record| {
            if record.level() >= Trace {
                out.finish(format_args!("[TRACE] {}: {}", record.target(), message))
            } else if record.level() >= Debug {
                out.finish(format_args!("[DEBUG] {}: {}", record.target(), message))
            } else if record.level() <= Warn {
                out.finish(format_args!(
                    "[{}] {}: {}",
                    record.level(),
                    record.target(),
                    message
                ))
            } else {
                out.finish(format_args!("{}", message))
            }
        })
        .chain(std::io::stdout())
        .apply()
}
