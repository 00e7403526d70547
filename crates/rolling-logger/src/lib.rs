//! Rolling Logger
//!
//! Installs a global `tracing` subscriber that writes to stderr and to a
//! size-rotated file in the application's log directory. Records emitted
//! through the `log` facade are forwarded as well.

mod writer;

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};

use thiserror::Error;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

pub use tracing_subscriber::filter::LevelFilter;
pub use writer::RollingFile;

/// Logger errors
#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("failed to open log file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("logger already initialized: {0}")]
    AlreadyInitialized(String),
}

/// Rotation and filtering settings
#[derive(Debug, Clone)]
pub struct LoggerConfig {
    /// Size at which the live file rolls over
    pub max_file_bytes: u64,
    /// Number of rotated files kept next to the live one
    pub max_backups: usize,
    pub level: LevelFilter,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            max_file_bytes: 1024 * 1024,
            max_backups: 3,
            level: LevelFilter::INFO,
        }
    }
}

static LOG_FILE: OnceLock<PathBuf> = OnceLock::new();

/// Local wall-clock timestamps with millisecond precision
struct LocalTime;

impl FormatTime for LocalTime {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"))
    }
}

/// Path of the live log file for an application
pub fn log_file_path(log_dir: impl AsRef<Path>, app_name: &str) -> PathBuf {
    log_dir.as_ref().join(format!("{}.log", app_name))
}

/// Initialize logging with default rotation settings
pub fn init_logger(log_dir: impl AsRef<Path>, app_name: &str) -> Result<(), LoggerError> {
    init_logger_with(log_dir, app_name, LoggerConfig::default())
}

/// Initialize logging; may only succeed once per process
pub fn init_logger_with(
    log_dir: impl AsRef<Path>,
    app_name: &str,
    config: LoggerConfig,
) -> Result<(), LoggerError> {
    let path = log_file_path(log_dir, app_name);
    let file = RollingFile::open(&path, config.max_file_bytes, config.max_backups).map_err(|source| {
        LoggerError::Io {
            path: path.clone(),
            source,
        }
    })?;

    let file_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_timer(LocalTime)
        .with_writer(Mutex::new(file));
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_timer(LocalTime)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(config.level)
        .with(file_layer)
        .with(stderr_layer)
        .try_init()
        .map_err(|e| LoggerError::AlreadyInitialized(e.to_string()))?;

    let _ = LOG_FILE.set(path);
    tracing::info!("Logging to {}", current_log_file().map(|p| p.display().to_string()).unwrap_or_default());
    Ok(())
}

/// Live log file of the initialized logger
pub fn current_log_file() -> Option<&'static Path> {
    LOG_FILE.get().map(PathBuf::as_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_file_path() {
        assert_eq!(
            log_file_path("/var/log/planejaqui", "Planejaqui"),
            PathBuf::from("/var/log/planejaqui/Planejaqui.log")
        );
    }

    // Single test touching the global subscriber; tests share one process.
    #[test]
    fn test_init_once_and_write() {
        let dir = tempfile::tempdir().unwrap();
        init_logger(dir.path(), "Test").unwrap();

        assert_eq!(current_log_file(), Some(log_file_path(dir.path(), "Test").as_path()));
        tracing::info!("hello from test");
        log::warn!("bridged from log");

        let content = std::fs::read_to_string(log_file_path(dir.path(), "Test")).unwrap();
        assert!(content.contains("hello from test"));
        assert!(content.contains("bridged from log"));

        assert!(matches!(
            init_logger(dir.path(), "Again"),
            Err(LoggerError::AlreadyInitialized(_))
        ));
    }
}
