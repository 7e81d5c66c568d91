//! Logger setup for binaries and demos
//!
//! Library code only talks to the `log` facade; this installs a `fern`
//! dispatcher that prints `[elapsed LVL] message` lines to stdout.

use std::time::Instant;

use colored::{ColoredString, Colorize};
use log::info;
use thiserror::Error;

pub use log::LevelFilter;

/// Errors associated with initialising the logger.
#[derive(Debug, Error)]
pub enum LoggerInitError {
    #[error("An error occured while setting up the logger: {0}")]
    FernInitError(#[from] log::SetLoggerError),
}

/// Initialise the global logger.
///
/// Levels more verbose than `Info` also print the record target. Only the
/// first call succeeds, later calls return `FernInitError`.
pub fn logger_init(min_level: LevelFilter) -> Result<(), LoggerInitError> {
    let epoch = Instant::now();

    fern::Dispatch::new()
        .format(move |out, message, record| {
            let elapsed = epoch.elapsed().as_secs_f64();
            if record.level() > log::Level::Info {
                out.finish(format_args!(
                    "[{:10.6} {}] {}: {}",
                    elapsed,
                    level_to_str(record.level()),
                    record.target(),
                    message
                ))
            } else {
                out.finish(format_args!(
                    "[{:10.6} {}] {}",
                    elapsed,
                    level_to_str(record.level()),
                    message
                ))
            }
        })
        .level(min_level)
        .chain(std::io::stdout())
        .apply()?;

    info!("Logging initialised");
    info!("    Log level: {:?}", min_level);

    Ok(())
}

/// Get the string representation of a log level
fn level_to_str(level: log::Level) -> ColoredString {
    match level {
        log::Level::Trace => "TRC".dimmed().italic(),
        log::Level::Debug => "DBG".dimmed(),
        log::Level::Info  => "INF".normal(),
        log::Level::Warn  => "WRN".yellow(),
        log::Level::Error => "ERR".red().bold(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_strings() {
        assert!(level_to_str(log::Level::Info).to_string().contains("INF"));
        assert!(level_to_str(log::Level::Error).to_string().contains("ERR"));
    }

    #[test]
    fn test_second_init_fails() {
        // the first call may already have happened in another test
        let _ = logger_init(LevelFilter::Warn);
        assert!(matches!(
            logger_init(LevelFilter::Warn),
            Err(LoggerInitError::FernInitError(_))
        ));
    }
}
