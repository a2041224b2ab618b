use std::path::PathBuf;

use anyhow::{Context, Result};
use log::LevelFilter;
use widgetbox::{UiConfig, logging};

use crate::settings::ResolvedConfig;

/// Installs logging and runs the widget gallery for a resolved configuration.
pub(crate) struct GalleryWorkflow {
    ui: UiConfig,
    log_level: LevelFilter,
    log_file: Option<PathBuf>,
}

impl GalleryWorkflow {
    pub(crate) fn from_config(config: ResolvedConfig) -> Self {
        let ResolvedConfig {
            ui,
            log_level,
            log_file,
            ..
        } = config;
        Self {
            ui,
            log_level,
            log_file,
        }
    }

    pub(crate) fn run(self) -> Result<()> {
        let log_path = match self.log_file {
            Some(path) => path,
            None => logging::default_log_path().context("no location for the log file")?,
        };
        logging::initialize(self.log_level, &log_path)?;
        log::debug!("starting on the {} widget", self.ui.start_tab.id());

        let result = widgetbox::run(self.ui);
        if let Err(err) = &result {
            log::error!("widgetbox exited with an error: {err:#}");
        }
        result
    }
}
