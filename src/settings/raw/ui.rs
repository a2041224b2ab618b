use serde::Deserialize;

use crate::cli::CliArgs;

/// `[ui]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(in crate::settings) struct UiSection {
    pub(in crate::settings) theme: Option<String>,
    pub(in crate::settings) widget: Option<String>,
    pub(in crate::settings) offline: Option<bool>,
}

impl UiSection {
    pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        if let Some(theme) = &cli.theme {
            self.theme = Some(theme.clone());
        }
        if let Some(widget) = &cli.widget {
            self.widget = Some(widget.clone());
        }
        if cli.offline {
            self.offline = Some(true);
        }
    }
}

/// `[log]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(in crate::settings) struct LogSection {
    pub(in crate::settings) level: Option<String>,
    pub(in crate::settings) file: Option<std::path::PathBuf>,
}

impl LogSection {
    pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        if let Some(level) = &cli.log_level {
            self.level = Some(level.clone());
        }
        if let Some(file) = &cli.log_file {
            self.file = Some(file.clone());
        }
    }
}
