//! Logging setup. The shell owns the terminal, so log lines go to a file
//! instead of stdout; the returned guard must stay alive for the writer to
//! keep flushing.

use std::fs;
use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::infra::{config::LogConfig, error::AppError};

const LOG_FILE_NAME: &str = "teamchat.log";

pub fn init(config: &LogConfig) -> Result<WorkerGuard, AppError> {
    let log_dir = log_directory();
    fs::create_dir_all(&log_dir).map_err(|source| AppError::LogDir {
        path: log_dir.clone(),
        source,
    })?;

    let file_appender = tracing_appender::rolling::never(&log_dir, LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level)),
        )
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(AppError::LoggingInit)?;

    Ok(guard)
}

fn log_directory() -> PathBuf {
    dirs::state_dir()
        .or_else(dirs::data_local_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join("teamchat")
}
