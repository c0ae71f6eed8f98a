use std::fs::{self, OpenOptions};
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Log file name inside the data directory
pub const LOG_FILE_NAME: &str = "densquiz.log";

/// The log is emptied at startup once it grows past this size (5 MB)
const MAX_LOG_SIZE: u64 = 5 * 1024 * 1024;

/// Empty the log file if it has grown past `max_size`.
///
/// Returns `true` when the file was truncated.
fn truncate_if_oversized(log_path: &Path, max_size: u64) -> std::io::Result<bool> {
    match fs::metadata(log_path) {
        Ok(meta) if meta.len() > max_size => {
            OpenOptions::new()
                .write(true)
                .truncate(true)
                .open(log_path)?;
            Ok(true)
        }
        Ok(_) => Ok(false),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e),
    }
}

/// Initialize logging to `{data_dir}/densquiz.log`.
///
/// The terminal belongs to the UI, so nothing is logged to stdout or stderr.
/// `RUST_LOG` takes precedence over `level`. The returned guard flushes the
/// background writer on drop and must be held until the program exits.
pub fn init_logging(data_dir: &Path, level: &str) -> color_eyre::Result<WorkerGuard> {
    fs::create_dir_all(data_dir)?;

    let log_path = data_dir.join(LOG_FILE_NAME);
    let truncated = match truncate_if_oversized(&log_path, MAX_LOG_SIZE) {
        Ok(truncated) => truncated,
        Err(e) => {
            eprintln!("Warning: Failed to truncate log file: {}", e);
            false
        }
    };

    let appender = tracing_appender::rolling::never(data_dir, LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let default_filter = format!("densquiz={level},densquiz_core={level}");
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false),
        )
        .try_init()?;

    tracing::info!(
        log_path = %log_path.display(),
        truncated,
        "densquiz logging initialized"
    );
    Ok(guard)
}
