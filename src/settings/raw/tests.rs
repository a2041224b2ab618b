use std::io::Write;
use std::path::PathBuf;

use log::LevelFilter;
use tempfile::NamedTempFile;
use widgetbox::{SourceConfig, Tab};

use super::*;
use crate::settings::load;

fn config_file(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("temp config");
    file.write_all(contents.as_bytes()).expect("write config");
    file
}

fn cli_with(file: &NamedTempFile) -> CliArgs {
    CliArgs {
        no_config: true,
        config: vec![file.path().to_path_buf()],
        ..CliArgs::default()
    }
}

#[test]
fn empty_config_resolves_to_defaults() {
    let resolved = RawConfig::default()
        .resolve(&CliArgs::default())
        .expect("defaults resolve");
    assert_eq!(resolved.theme_name, "slate");
    assert_eq!(resolved.ui.start_tab, Tab::Accordion);
    assert_eq!(resolved.ui.page_size, 20);
    assert_eq!(resolved.ui.product_ceiling, 100);
    assert_eq!(resolved.ui.image_limit, 5);
    assert_eq!(resolved.ui.image_page, 1);
    assert_eq!(resolved.ui.stars, 5);
    assert_eq!(resolved.ui.faq_items.len(), 4);
    assert_eq!(resolved.log_level, LevelFilter::Info);
    assert!(matches!(resolved.ui.source, SourceConfig::Http { .. }));
    assert_eq!(resolved.sources.source_for("ui.theme"), SettingSource::Default);
}

#[test]
fn file_values_are_applied() {
    let file = config_file(
        r#"
[ui]
theme = "light"
widget = "colour"

[products]
url = "https://catalogue.invalid/products"
page_size = 10
ceiling = 30

[images]
url = ""
limit = 8

[rating]
stars = 7

[accordion]
multi = true

[log]
level = "debug"
"#,
    );

    let resolved = load(&cli_with(&file)).expect("config loads");
    assert_eq!(resolved.theme_name, "light");
    assert_eq!(resolved.ui.start_tab, Tab::Color);
    assert_eq!(
        resolved.ui.source,
        SourceConfig::Http {
            products_url: "https://catalogue.invalid/products".into()
        }
    );
    assert_eq!(resolved.ui.page_size, 10);
    assert_eq!(resolved.ui.product_ceiling, 30);
    assert_eq!(resolved.ui.images_url, "");
    assert_eq!(resolved.ui.image_limit, 8);
    assert_eq!(resolved.ui.stars, 7);
    assert!(resolved.ui.start_multi);
    assert_eq!(resolved.log_level, LevelFilter::Debug);
    assert_eq!(
        resolved.sources.source_for("rating.stars"),
        SettingSource::ConfigKey("rating.stars")
    );
}

#[test]
fn cli_overrides_file_values() {
    let file = config_file("[rating]\nstars = 7\n[ui]\ntheme = \"light\"\n");
    let cli = CliArgs {
        stars: Some(3),
        offline: true,
        ..cli_with(&file)
    };

    let resolved = load(&cli).expect("config loads");
    assert_eq!(resolved.ui.stars, 3);
    assert_eq!(resolved.theme_name, "light");
    assert_eq!(resolved.ui.source, SourceConfig::Offline);
    assert_eq!(
        resolved.sources.source_for("rating.stars"),
        SettingSource::CliFlag("--stars")
    );
}

#[test]
fn unknown_theme_is_rejected_with_choices() {
    let cli = CliArgs {
        theme: Some("neon".into()),
        ..CliArgs::default()
    };
    let mut raw = RawConfig::default();
    raw.apply_cli_overrides(&cli);

    let message = raw.resolve(&cli).unwrap_err().to_string();
    assert!(message.contains("ui.theme"), "{message}");
    assert!(message.contains("CLI flag `--theme`"));
    assert!(message.contains("slate"));
}

#[test]
fn unknown_widget_is_rejected() {
    let file = config_file("[ui]\nwidget = \"spinner\"\n");
    let message = load(&cli_with(&file)).unwrap_err().to_string();
    assert!(message.contains("ui.widget"), "{message}");
    assert!(message.contains("configuration key"));
}

#[test]
fn invalid_log_level_is_rejected() {
    let cli = CliArgs {
        log_level: Some("chatty".into()),
        ..CliArgs::default()
    };
    let mut raw = RawConfig::default();
    raw.apply_cli_overrides(&cli);
    let message = raw.resolve(&cli).unwrap_err().to_string();
    assert!(message.contains("log.level"), "{message}");
}

#[test]
fn zero_stars_fail_validation() {
    let file = config_file("[rating]\nstars = 0\n");
    let message = load(&cli_with(&file)).unwrap_err().to_string();
    assert!(message.contains("rating.stars"), "{message}");
    assert!(message.contains("between 1 and 10"));
}

#[test]
fn oversized_page_size_flag_is_rejected() {
    let cli = CliArgs {
        page_size: Some(usize::MAX / 2 + 1),
        ..CliArgs::default()
    };
    let mut raw = RawConfig::default();
    raw.apply_cli_overrides(&cli);
    let message = raw.resolve(&cli).unwrap_err().to_string();
    assert!(message.contains("products.page_size"), "{message}");
    assert!(message.contains("CLI flag `--page-size`"));
}

#[test]
fn faq_file_replaces_builtin_entries() {
    let mut faq = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("temp faq");
    faq.write_all(
        br#"
[[items]]
id = "only"
question = "Only question?"
answer = "Only answer."
"#,
    )
    .expect("write faq");

    let cli = CliArgs {
        faq: Some(faq.path().to_path_buf()),
        ..CliArgs::default()
    };
    let mut raw = RawConfig::default();
    raw.apply_cli_overrides(&cli);
    let resolved = raw.resolve(&cli).expect("faq loads");
    assert_eq!(resolved.ui.faq_items.len(), 1);
    assert_eq!(resolved.ui.faq_items[0].id, "only");
    assert_eq!(resolved.faq_file, Some(faq.path().to_path_buf()));
}

#[test]
fn missing_faq_file_names_the_key() {
    let cli = CliArgs {
        faq: Some(PathBuf::from("/definitely/missing/faq.toml")),
        ..CliArgs::default()
    };
    let mut raw = RawConfig::default();
    raw.apply_cli_overrides(&cli);
    let message = raw.resolve(&cli).unwrap_err().to_string();
    assert!(message.contains("accordion.faq"), "{message}");
}
