use std::env;

use anyhow::{Error, Result};
use serde::Deserialize;
use widgetbox::ui::style;
use widgetbox::{SourceConfig, Tab, UiConfig, logging};
use widgetbox_core::accordion;
use widgetbox_core::carousel::{DEFAULT_LIMIT, DEFAULT_PAGE};
use widgetbox_core::http::{DEFAULT_IMAGES_URL, DEFAULT_PRODUCTS_URL};
use widgetbox_core::pagination::{DEFAULT_CEILING, DEFAULT_PAGE_SIZE};
use widgetbox_core::rating::DEFAULT_STARS;

use crate::cli::CliArgs;

use super::resolved::{ConfigError, ConfigSources, ResolvedConfig, SettingSource};

mod ui;
mod widgets;

use ui::{LogSection, UiSection};
use widgets::{AccordionSection, ImagesSection, ProductsSection, RatingSection};

const DEFAULT_THEME: &str = "slate";
const DEFAULT_LOG_LEVEL: &str = "info";

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
    ui: UiSection,
    products: ProductsSection,
    images: ImagesSection,
    rating: RatingSection,
    accordion: AccordionSection,
    log: LogSection,
}

impl RawConfig {
    /// Apply CLI overrides on top of the raw configuration values.
    pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        self.ui.apply_cli_overrides(cli);
        self.products.apply_cli_overrides(cli);
        self.images.apply_cli_overrides(cli);
        self.rating.apply_cli_overrides(cli);
        self.accordion.apply_cli_overrides(cli);
        self.log.apply_cli_overrides(cli);
    }

    /// Convert the raw configuration into a [`ResolvedConfig`], validating and
    /// filling defaults where required.
    pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
        let sources = self.sources(cli);

        let theme_name = self
            .ui
            .theme
            .unwrap_or_else(|| DEFAULT_THEME.to_string());
        let theme = style::by_name(&theme_name).ok_or_else(|| {
            ConfigError::unknown(
                "ui.theme",
                theme_name.clone(),
                sources.source_for("ui.theme"),
                &style::names(),
            )
        })?;

        let start_tab = match self.ui.widget {
            Some(widget) => Tab::from_id(&widget).ok_or_else(|| {
                let ids: Vec<&str> = Tab::ALL.iter().map(|tab| tab.id()).collect();
                ConfigError::unknown("ui.widget", widget, sources.source_for("ui.widget"), &ids)
            })?,
            None => Tab::default(),
        };

        let level_name = self
            .log
            .level
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());
        let log_level = logging::parse_level(&level_name).ok_or_else(|| {
            ConfigError::unknown(
                "log.level",
                level_name.clone(),
                sources.source_for("log.level"),
                &["off", "error", "warn", "info", "debug", "trace"],
            )
        })?;

        let faq_items = match &self.accordion.faq {
            Some(path) => accordion::load_items(path).map_err(|err| {
                ConfigError::invalid(
                    "accordion.faq",
                    path.display().to_string(),
                    sources.source_for("accordion.faq"),
                    err.to_string(),
                )
            })?,
            None => accordion::builtin_items(),
        };

        let source = if self.ui.offline.unwrap_or(false) {
            SourceConfig::Offline
        } else {
            SourceConfig::Http {
                products_url: self
                    .products
                    .url
                    .unwrap_or_else(|| DEFAULT_PRODUCTS_URL.to_string()),
            }
        };

        let ui = UiConfig {
            theme,
            start_tab,
            source,
            page_size: self.products.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
            product_ceiling: self.products.ceiling.unwrap_or(DEFAULT_CEILING),
            images_url: self
                .images
                .url
                .unwrap_or_else(|| DEFAULT_IMAGES_URL.to_string()),
            image_page: self.images.page.unwrap_or(DEFAULT_PAGE),
            image_limit: self.images.limit.unwrap_or(DEFAULT_LIMIT),
            stars: self.rating.stars.unwrap_or(DEFAULT_STARS),
            faq_items,
            start_multi: self.accordion.multi.unwrap_or(false),
        };

        let config = ResolvedConfig {
            ui,
            theme_name,
            faq_file: self.accordion.faq,
            log_level,
            log_file: self.log.file,
            sources,
        };

        config.validate().map_err(Error::new)?;

        Ok(config)
    }

    fn sources(&self, cli: &CliArgs) -> ConfigSources {
        let mut sources = ConfigSources::default();
        let mut track = |key: &'static str,
                         cli_present: bool,
                         value_present: bool,
                         env_var: &'static str,
                         flag: &'static str| {
            sources.record(key, detect_source(cli_present, value_present, env_var, flag, key));
        };

        track(
            "ui.theme",
            cli.theme.is_some(),
            self.ui.theme.is_some(),
            "WIDGETBOX__UI__THEME",
            "--theme",
        );
        track(
            "ui.widget",
            cli.widget.is_some(),
            self.ui.widget.is_some(),
            "WIDGETBOX__UI__WIDGET",
            "--widget",
        );
        track(
            "ui.offline",
            cli.offline,
            self.ui.offline.is_some(),
            "WIDGETBOX__UI__OFFLINE",
            "--offline",
        );
        track(
            "products.url",
            cli.products_url.is_some(),
            self.products.url.is_some(),
            "WIDGETBOX__PRODUCTS__URL",
            "--products-url",
        );
        track(
            "products.page_size",
            cli.page_size.is_some(),
            self.products.page_size.is_some(),
            "WIDGETBOX__PRODUCTS__PAGE_SIZE",
            "--page-size",
        );
        track(
            "products.ceiling",
            cli.product_ceiling.is_some(),
            self.products.ceiling.is_some(),
            "WIDGETBOX__PRODUCTS__CEILING",
            "--product-ceiling",
        );
        track(
            "images.url",
            cli.images_url.is_some(),
            self.images.url.is_some(),
            "WIDGETBOX__IMAGES__URL",
            "--images-url",
        );
        track(
            "images.page",
            cli.image_page.is_some(),
            self.images.page.is_some(),
            "WIDGETBOX__IMAGES__PAGE",
            "--image-page",
        );
        track(
            "images.limit",
            cli.image_limit.is_some(),
            self.images.limit.is_some(),
            "WIDGETBOX__IMAGES__LIMIT",
            "--image-limit",
        );
        track(
            "rating.stars",
            cli.stars.is_some(),
            self.rating.stars.is_some(),
            "WIDGETBOX__RATING__STARS",
            "--stars",
        );
        track(
            "accordion.faq",
            cli.faq.is_some(),
            self.accordion.faq.is_some(),
            "WIDGETBOX__ACCORDION__FAQ",
            "--faq",
        );
        track(
            "accordion.multi",
            cli.multi.is_some(),
            self.accordion.multi.is_some(),
            "WIDGETBOX__ACCORDION__MULTI",
            "--multi",
        );
        track(
            "log.level",
            cli.log_level.is_some(),
            self.log.level.is_some(),
            "WIDGETBOX__LOG__LEVEL",
            "--log-level",
        );
        track(
            "log.file",
            cli.log_file.is_some(),
            self.log.file.is_some(),
            "WIDGETBOX__LOG__FILE",
            "--log-file",
        );

        sources
    }
}

fn detect_source(
    cli_present: bool,
    value_present: bool,
    env_var: &'static str,
    cli_flag: &'static str,
    key: &'static str,
) -> SettingSource {
    if !value_present {
        return SettingSource::Default;
    }

    if cli_present {
        return SettingSource::CliFlag(cli_flag);
    }

    if env::var_os(env_var).is_some() {
        return SettingSource::Environment(env_var);
    }

    SettingSource::ConfigKey(key)
}

#[cfg(test)]
mod tests;
