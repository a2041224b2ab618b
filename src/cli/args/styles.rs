use std::fmt::Write;
use std::path::PathBuf;

use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use widgetbox::app_dirs;

/// Version banner listing every directory the binary reads or writes, with
/// the environment variable that overrides it.
pub(super) fn long_version() -> &'static str {
    let directories: [(&str, &str, anyhow::Result<PathBuf>); 3] = [
        ("config", app_dirs::CONFIG_DIR_ENV, app_dirs::get_config_dir()),
        ("data", app_dirs::DATA_DIR_ENV, app_dirs::get_data_dir()),
        ("cache", app_dirs::CACHE_DIR_ENV, app_dirs::get_cache_dir()),
    ];

    let mut details = String::from(env!("CARGO_PKG_VERSION"));
    for (label, env_var, dir) in directories {
        let shown = match dir {
            Ok(path) => path.display().to_string(),
            Err(err) => format!("unavailable ({err})"),
        };
        let _ = write!(details, "\n{label} directory: {shown} [{env_var}]");
    }

    Box::leak(details.into_boxed_str())
}

/// Help colours: green headings, cyan flags, yellow placeholders.
pub(super) fn cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Cyan.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_names_every_override() {
        let banner = long_version();
        assert!(banner.starts_with(env!("CARGO_PKG_VERSION")));
        for env_var in [
            app_dirs::CONFIG_DIR_ENV,
            app_dirs::DATA_DIR_ENV,
            app_dirs::CACHE_DIR_ENV,
        ] {
            assert!(banner.contains(env_var), "{banner}");
        }
    }
}
