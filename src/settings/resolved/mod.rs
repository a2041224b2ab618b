use std::path::PathBuf;

use log::LevelFilter;
use widgetbox::UiConfig;

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Application-ready configuration derived from user input, config files and
/// sensible defaults.
#[derive(Debug)]
pub struct ResolvedConfig {
    pub ui: UiConfig,
    pub theme_name: String,
    pub faq_file: Option<PathBuf>,
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,
    pub(crate) sources: ConfigSources,
}

impl ResolvedConfig {
    pub(super) fn validate(&self) -> Result<(), ConfigError> {
        validation::validate(self, &self.sources)
    }

    /// Print a human readable summary of the effective configuration.
    pub fn print_summary(&self) {
        for line in summary::summary_lines(self) {
            println!("{line}");
        }
    }
}
