//! Session logging.
//!
//! Every event goes to the console and to a per-run log file, both stamped
//! with an RFC 3339 timestamp. The file is written synchronously, so whatever
//! was logged before exit is on disk.
//!
//! The session log carries private keys in cleartext. It is created with
//! mode `0600` on Unix; its directory comes from `logging.directory` or
//! `--log-dir`.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use tracing::Subscriber;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;

/// Handle to the session log of this run.
#[derive(Debug, Clone)]
pub struct SessionLog {
    path: PathBuf,
}

impl SessionLog {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// `<directory>/<prefix>-<YYYY-MM-DDTHH-MM-SS>.log`
pub fn session_log_path(config: &LoggingConfig, started_at: DateTime<Utc>) -> PathBuf {
    let stamp = started_at.format("%Y-%m-%dT%H-%M-%S");
    config
        .directory
        .join(format!("{}-{}.log", config.file_prefix, stamp))
}

/// Create the log directory and open the file for appending.
pub fn open_session_log(path: &Path) -> io::Result<File> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir)?;
        }
    }

    let mut options = OpenOptions::new();
    options.create(true).append(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }
    options.open(path)
}

/// Console plus session file subscriber. `RUST_LOG` overrides `level`.
pub fn session_subscriber(level: &str, file: File) -> impl Subscriber + Send + Sync + 'static {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let console_layer = fmt::layer().with_target(false);
    let file_layer = fmt::layer()
        .with_target(false)
        .with_ansi(false)
        .with_writer(Mutex::new(file));

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
}

/// Open the session log and install the global subscriber.
pub fn init_logging(config: &LoggingConfig, started_at: DateTime<Utc>) -> io::Result<SessionLog> {
    let path = session_log_path(config, started_at);
    let file = open_session_log(&path)?;

    session_subscriber(&config.level, file)
        .try_init()
        .map_err(io::Error::other)?;

    Ok(SessionLog { path })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::io::Write;

    #[test]
    fn test_session_log_path_uses_timestamp() {
        let config = LoggingConfig {
            directory: PathBuf::from("logs"),
            file_prefix: "address-creator".to_string(),
            level: "info".to_string(),
        };
        let started_at = Utc.with_ymd_and_hms(2026, 10, 16, 9, 5, 7).unwrap();
        assert_eq!(
            session_log_path(&config, started_at),
            PathBuf::from("logs/address-creator-2026-10-16T09-05-07.log")
        );
    }

    #[test]
    fn test_open_session_log_creates_dir_and_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("run.log");

        writeln!(open_session_log(&path).unwrap(), "first").unwrap();
        writeln!(open_session_log(&path).unwrap(), "second").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "first\nsecond\n");
    }

    #[test]
    fn test_session_log_lines_are_timestamped_and_keep_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.log");
        let key = "0x4c0883a69102937d6231471b5dbb6204fe5129617082792ae468d01a3f362318";

        let subscriber = session_subscriber("info", open_session_log(&path).unwrap());
        tracing::subscriber::with_default(subscriber, || {
            tracing::info!(position = 1, private_key = key, "Generated account");
        });

        let contents = fs::read_to_string(&path).unwrap();
        let line = contents.lines().next().unwrap();
        let stamp = line.split_whitespace().next().unwrap();
        assert!(DateTime::parse_from_rfc3339(stamp).is_ok(), "bad timestamp in {line:?}");
        assert!(line.contains("Generated account"));
        assert!(line.contains(key));
        assert!(!line.contains('\x1b'));
    }

    #[cfg(unix)]
    #[test]
    fn test_session_log_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.log");
        open_session_log(&path).unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
