//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Environment variable that overrides the configured filter
pub const LOG_ENV: &str = "INTERFACES_LOG";

const LOG_FILE: &str = "interfaces.log";
const DEFAULT_FILTER: &str = "interfaces=info,interfaces_core=info,warn";

/// Where and how much to log
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogOptions {
    /// `EnvFilter` directives; `None` uses the built-in default
    pub filter: Option<String>,

    /// Log directory; `None` uses the platform data directory
    pub directory: Option<PathBuf>,
}

/// Initialize the logging subsystem
///
/// Logs are written to `<data dir>/interfaces/logs/` unless a directory is
/// configured. The filter is taken from `INTERFACES_LOG` first, then the
/// configured filter, then the default.
///
/// # Examples
/// ```bash
/// INTERFACES_LOG=debug cargo test
/// INTERFACES_LOG=interfaces_core=trace cargo test
/// ```
pub fn init(options: &LogOptions) -> Result<()> {
    let log_dir = log_directory(options);
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE);

    let env_filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        EnvFilter::new(options.filter.as_deref().unwrap_or(DEFAULT_FILTER))
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("Logging initialized");
    tracing::info!("Log directory: {}", log_dir.display());

    Ok(())
}

/// Resolve the log directory for `options`
pub fn log_directory(options: &LogOptions) -> PathBuf {
    if let Some(dir) = &options.directory {
        return dir.clone();
    }
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("interfaces").join("logs")
}

/// Most recent log file in the log directory, if any has been written.
///
/// Daily rotation names files `interfaces.log.YYYY-MM-DD`, so the newest
/// file is the greatest name carrying that prefix.
pub fn latest_log_file(options: &LogOptions) -> Option<PathBuf> {
    let prefix = format!("{}.", LOG_FILE);
    std::fs::read_dir(log_directory(options))
        .ok()?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.starts_with(&prefix))
        })
        .max()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_configured_directory_wins() {
        let temp = tempdir().unwrap();
        let options = LogOptions {
            filter: None,
            directory: Some(temp.path().to_path_buf()),
        };

        assert_eq!(log_directory(&options), temp.path());
    }

    #[test]
    fn test_latest_log_file_picks_newest_day() {
        let temp = tempdir().unwrap();
        let options = LogOptions {
            filter: None,
            directory: Some(temp.path().to_path_buf()),
        };
        assert_eq!(latest_log_file(&options), None);

        for name in [
            "interfaces.log.2026-10-13",
            "interfaces.log.2026-10-15",
            "interfaces.log.2026-10-14",
            "other.log.2026-12-01",
        ] {
            std::fs::write(temp.path().join(name), "").unwrap();
        }

        assert_eq!(
            latest_log_file(&options),
            Some(temp.path().join("interfaces.log.2026-10-15"))
        );
    }

    #[test]
    fn test_latest_log_file_missing_directory() {
        let temp = tempdir().unwrap();
        let options = LogOptions {
            filter: None,
            directory: Some(temp.path().join("absent")),
        };
        assert_eq!(latest_log_file(&options), None);
    }

    #[test]
    fn test_default_directory_is_namespaced() {
        let dir = log_directory(&LogOptions::default());
        assert!(dir.ends_with("interfaces/logs"));
    }
}
