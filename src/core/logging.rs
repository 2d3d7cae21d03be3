//! Append-only diagnostic log.
//!
//! Everything in the crate logs through the `log` facade. When the configured
//! [`LogLevel`] is `Debug` the records are appended to a plain text file, one
//! line per record; with `Off` nothing is installed and every record is dropped.

use crate::core::config::LogLevel;
use crate::core::error::{Result, ScratchpadError};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

pub fn init_logging(level: LogLevel, log_file: &Path) -> Result<()> {
    if level == LogLevel::Off {
        log::set_max_level(log::LevelFilter::Off);
        return Ok(());
    }

    if let Some(parent) = log_file.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| ScratchpadError::directory_creation_failed(parent, e))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
        .map_err(|e| ScratchpadError::file_creation_failed(log_file, e))?;

    let installed = env_logger::Builder::new()
        .filter_level(level.to_level_filter())
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] [{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init();

    if installed.is_err() {
        // A logger from an earlier setup call is still in place
        log::set_max_level(level.to_level_filter());
    }

    log::debug!("Logging to {}", log_file.display());
    Ok(())
}
