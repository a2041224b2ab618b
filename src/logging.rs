//! File logging for the terminal UI.
//!
//! The alternate screen owns stdout and stderr while the UI runs, so log
//! records go to a file instead.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::LevelFilter;
use simplelog::{ConfigBuilder, WriteLogger};

use crate::app_dirs;

/// File name used inside the data directory when no path is configured.
pub const LOG_FILE_NAME: &str = "widgetbox.log";

/// Where the log file goes when `--log-file` / `log.file` is not set.
pub fn default_log_path() -> Result<PathBuf> {
    Ok(app_dirs::get_data_dir()?.join(LOG_FILE_NAME))
}

/// Parse a level name such as `info` or `debug`; `off` disables logging.
pub fn parse_level(value: &str) -> Option<LevelFilter> {
    value.trim().parse().ok()
}

/// Install the global logger writing to `path`.
///
/// Does nothing when `level` is [`LevelFilter::Off`]. Returns the path that
/// was opened.
pub fn initialize(level: LevelFilter, path: &Path) -> Result<Option<PathBuf>> {
    if level == LevelFilter::Off {
        return Ok(None);
    }

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create log directory {}", parent.display()))?;
    }
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;

    let config = ConfigBuilder::new()
        .set_thread_level(LevelFilter::Error)
        .set_target_level(LevelFilter::Error)
        .build();
    WriteLogger::init(level, config, file).context("failed to install logger")?;
    log::info!("widgetbox {} logging at {level}", env!("CARGO_PKG_VERSION"));
    Ok(Some(path.to_path_buf()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_names_parse_case_insensitively() {
        assert_eq!(parse_level("debug"), Some(LevelFilter::Debug));
        assert_eq!(parse_level(" WARN "), Some(LevelFilter::Warn));
        assert_eq!(parse_level("off"), Some(LevelFilter::Off));
        assert_eq!(parse_level("chatty"), None);
    }

    #[test]
    fn off_level_skips_file_creation() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("widgetbox.log");
        assert!(initialize(LevelFilter::Off, &path).unwrap().is_none());
        assert!(!path.exists());
    }
}
