//! Logger bootstrap for the binary.
//!
//! The terminal is in raw/alternate-screen mode while playing, so log lines
//! go to ~/.flapper/flapper.log instead of stderr.

use super::persistence::data_path;
use crate::core::constants::LOG_FILE_NAME;
use env_logger::{Builder, Env, Target, WriteStyle};
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

/// Initialize logging. Returns the log file path, or `None` when the file
/// could not be opened and logging fell back to stderr at `warn`.
pub fn init() -> Option<PathBuf> {
    match data_path(LOG_FILE_NAME).and_then(|path| open_append(&path).map(|f| (path, f))) {
        Ok((path, file)) => {
            let _ = Builder::from_env(Env::default().default_filter_or("info"))
                .target(Target::Pipe(Box::new(file)))
                .write_style(WriteStyle::Never)
                .try_init();
            log::info!("flapper starting, logging to {}", path.display());
            Some(path)
        }
        Err(e) => {
            let _ = Builder::from_env(Env::default().default_filter_or("warn")).try_init();
            log::warn!("Could not open log file: {}", e);
            None
        }
    }
}

/// Open `path` for appending, creating it and its parent directory.
fn open_append(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}
