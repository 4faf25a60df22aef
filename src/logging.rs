//! Debug-build file logging
//!
//! The terminal belongs to the UI, so log records go to a file in the user
//! cache directory instead of stderr.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

use env_logger::{Builder, Env, Target};

use crate::error::AppError;

const LOG_DIR: &str = "meal-suggest";
const LOG_FILE: &str = "debug.log";

pub fn log_file_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|p| p.join(LOG_DIR).join(LOG_FILE))
}

/// Install the global logger, appending to the debug log file
///
/// Level comes from `RUST_LOG`, defaulting to `debug`.
pub fn init() -> Result<PathBuf, AppError> {
    let path = log_file_path().ok_or(AppError::NoCacheDir)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    Builder::from_env(Env::default().default_filter_or("debug"))
        .target(Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} [{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init()?;

    Ok(path)
}

/// Status-line text for a logger that could not be started
pub fn failure_notice(err: &AppError) -> String {
    format!("Debug log disabled: {}", err)
}
