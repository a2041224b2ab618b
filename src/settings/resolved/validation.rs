use widgetbox::SourceConfig;

use super::{ConfigError, ConfigSources, ResolvedConfig};

/// Largest star count the rating widget accepts.
pub(crate) const MAX_STARS: u8 = 10;
/// Largest page the catalogue endpoint is asked for in one request.
pub(crate) const MAX_PAGE_SIZE: usize = 100;

pub(super) fn validate(
    config: &ResolvedConfig,
    sources: &ConfigSources,
) -> Result<(), ConfigError> {
    let ui = &config.ui;

    if let SourceConfig::Http { products_url } = &ui.source
        && products_url.trim().is_empty()
    {
        return Err(ConfigError::invalid(
            "products.url",
            products_url.clone(),
            sources.source_for("products.url"),
            "must not be empty",
        ));
    }

    if !(1..=MAX_PAGE_SIZE).contains(&ui.page_size) {
        return Err(ConfigError::invalid(
            "products.page_size",
            ui.page_size.to_string(),
            sources.source_for("products.page_size"),
            format!("must be between 1 and {MAX_PAGE_SIZE}"),
        ));
    }

    if ui.image_page == 0 {
        return Err(ConfigError::invalid(
            "images.page",
            ui.image_page.to_string(),
            sources.source_for("images.page"),
            "pages start at 1",
        ));
    }

    if ui.image_limit == 0 {
        return Err(ConfigError::invalid(
            "images.limit",
            ui.image_limit.to_string(),
            sources.source_for("images.limit"),
            "must be at least 1",
        ));
    }

    if !(1..=MAX_STARS).contains(&ui.stars) {
        return Err(ConfigError::invalid(
            "rating.stars",
            ui.stars.to_string(),
            sources.source_for("rating.stars"),
            format!("must be between 1 and {MAX_STARS}"),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use log::LevelFilter;
    use widgetbox::UiConfig;

    use super::super::SettingSource;
    use super::*;

    fn config(ui: UiConfig, sources: ConfigSources) -> ResolvedConfig {
        ResolvedConfig {
            ui,
            theme_name: "slate".into(),
            faq_file: None,
            log_level: LevelFilter::Info,
            log_file: None,
            sources,
        }
    }

    #[test]
    fn defaults_are_valid() {
        let config = config(UiConfig::default(), ConfigSources::default());
        assert!(validate(&config, &config.sources).is_ok());
    }

    #[test]
    fn validation_rejects_zero_page_size() {
        let mut sources = ConfigSources::default();
        sources.record("products.page_size", SettingSource::CliFlag("--page-size"));
        let config = config(
            UiConfig {
                page_size: 0,
                ..UiConfig::default()
            },
            sources,
        );

        let err = validate(&config, &config.sources).unwrap_err();
        assert_eq!(err.key, "products.page_size");
        let message = err.to_string();
        assert!(message.contains("value: 0"));
        assert!(message.contains("CLI flag"));
    }

    #[test]
    fn validation_rejects_oversized_page() {
        let oversized = config(
            UiConfig {
                page_size: usize::MAX / 2 + 1,
                ..UiConfig::default()
            },
            ConfigSources::default(),
        );
        let err = validate(&oversized, &oversized.sources).unwrap_err();
        assert_eq!(err.key, "products.page_size");
        assert!(err.to_string().contains("between 1 and 100"));

        let config = config(
            UiConfig {
                page_size: MAX_PAGE_SIZE,
                ..UiConfig::default()
            },
            ConfigSources::default(),
        );
        assert!(validate(&config, &config.sources).is_ok());
    }

    #[test]
    fn validation_rejects_too_many_stars() {
        let mut sources = ConfigSources::default();
        sources.record(
            "rating.stars",
            SettingSource::Environment("WIDGETBOX__RATING__STARS"),
        );
        let config = config(
            UiConfig {
                stars: 11,
                ..UiConfig::default()
            },
            sources,
        );

        let err = validate(&config, &config.sources).unwrap_err();
        assert_eq!(err.key, "rating.stars");
        assert!(err.to_string().contains("environment variable"));
    }

    #[test]
    fn validation_rejects_zero_image_limit() {
        let config = config(
            UiConfig {
                image_limit: 0,
                ..UiConfig::default()
            },
            ConfigSources::default(),
        );
        let err = validate(&config, &config.sources).unwrap_err();
        assert_eq!(err.key, "images.limit");
        assert!(err.to_string().contains("configuration key `images.limit`"));
    }

    #[test]
    fn offline_ignores_products_url() {
        let config = config(UiConfig::offline(), ConfigSources::default());
        assert!(validate(&config, &config.sources).is_ok());
    }
}
