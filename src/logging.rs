use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use color_eyre::eyre::{Result, WrapErr};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

pub const LOG_ENV: &str = "TABALIGN_LOG";
pub const LOG_FILE: &str = "tabalign.log";
const DEFAULT_FILTER: &str = "warn";

/// Flushes the log file when dropped; keep it alive for the whole run.
pub struct LogGuard {
    _guard: WorkerGuard,
    pub path: PathBuf,
}

/// Filter from `TABALIGN_LOG`, falling back to `warn` when unset or invalid.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Logs go to a file; the terminal belongs to the viewer.
pub fn init_file_logging(dir: &Path) -> Result<LogGuard> {
    let path = dir.join(LOG_FILE);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .wrap_err_with(|| format!("Failed to open log file {}", path.display()))?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(env_filter())
        .with(file_layer)
        .try_init()
        .wrap_err("Failed to install log subscriber")?;

    Ok(LogGuard {
        _guard: guard,
        path,
    })
}
