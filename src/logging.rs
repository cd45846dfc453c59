//! Logging setup.
//!
//! The library logs through the `log` facade. Applications that want output
//! call [`initialize`] once; later calls are no-ops.

use std::io::stdout;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::SystemTime;

use fern::colors::Color::{Blue, Green, Magenta, Red, Yellow};
use fern::colors::ColoredLevelConfig;
use fern::Dispatch;
use humantime::format_rfc3339;
use log::{info, warn, LevelFilter};

use crate::errors::{Result, TrackerError};

static LOGGER_INITIALIZED: AtomicBool = AtomicBool::new(false);

/// install a colored stdout logger, optionally mirrored to a plain log file
pub fn initialize(level: LevelFilter, log_file: Option<&Path>) -> Result<()> {
    if LOGGER_INITIALIZED.swap(true, Ordering::SeqCst) {
        warn!("logger already initialized");
        return Ok(());
    }

    let result = build_dispatch(level, log_file).and_then(|dispatch| Ok(dispatch.apply()?));
    match &result {
        Ok(()) => info!("logger initialized with level {level:?}"),
        Err(_) => LOGGER_INITIALIZED.store(false, Ordering::SeqCst),
    }
    result
}

fn build_dispatch(level: LevelFilter, log_file: Option<&Path>) -> Result<Dispatch> {
    let colors = ColoredLevelConfig::new()
        .debug(Blue)
        .info(Green)
        .warn(Yellow)
        .error(Red)
        .trace(Magenta);

    let stdout_dispatch = Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{date} - {level}] {message} [{target}]",
                date = format_rfc3339(SystemTime::now()),
                level = colors.color(record.level()),
                target = record.target(),
            ))
        })
        .chain(stdout());

    let mut dispatch = Dispatch::new().level(level).chain(stdout_dispatch);

    if let Some(path) = log_file {
        let file = fern::log_file(path).map_err(|e| TrackerError::Logger {
            message: format!("failed to open log file {}: {e}", path.display()),
        })?;
        dispatch = dispatch.chain(
            Dispatch::new()
                .format(|out, message, record| {
                    out.finish(format_args!(
                        "[{date} - {level}] {message} [{target}]",
                        date = format_rfc3339(SystemTime::now()),
                        level = record.level(),
                        target = record.target(),
                    ))
                })
                .chain(file),
        );
    }

    Ok(dispatch)
}
