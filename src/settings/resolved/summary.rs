use widgetbox::{SourceConfig, app_dirs};

use super::ResolvedConfig;

pub(super) fn summary_lines(config: &ResolvedConfig) -> Vec<String> {
    let ui = &config.ui;
    let origin = |key: &'static str| config.sources.source_for(key);
    let mut lines = vec!["Effective configuration:".to_string()];

    lines.push(format!(
        "  Theme: {} ({})",
        config.theme_name,
        origin("ui.theme")
    ));
    lines.push(format!(
        "  Start widget: {} ({})",
        ui.start_tab.id(),
        origin("ui.widget")
    ));
    match &ui.source {
        SourceConfig::Offline => {
            lines.push(format!("  Data source: offline ({})", origin("ui.offline")));
        }
        SourceConfig::Http { products_url } => {
            lines.push("  Data source: network".to_string());
            lines.push(format!(
                "  Products URL: {products_url} ({})",
                origin("products.url")
            ));
        }
    }
    lines.push(format!(
        "  Page size: {} ({})",
        ui.page_size,
        origin("products.page_size")
    ));
    lines.push(format!(
        "  Product ceiling: {} ({})",
        ui.product_ceiling,
        origin("products.ceiling")
    ));
    let images_url = if ui.images_url.is_empty() {
        "(disabled)"
    } else {
        ui.images_url.as_str()
    };
    lines.push(format!("  Images URL: {images_url} ({})", origin("images.url")));
    lines.push(format!(
        "  Images page/limit: {}/{}",
        ui.image_page, ui.image_limit
    ));
    lines.push(format!("  Stars: {} ({})", ui.stars, origin("rating.stars")));
    match &config.faq_file {
        Some(path) => lines.push(format!(
            "  FAQ file: {} ({} entries)",
            path.display(),
            ui.faq_items.len()
        )),
        None => lines.push(format!(
            "  FAQ file: (built-in, {} entries)",
            ui.faq_items.len()
        )),
    }
    lines.push(format!(
        "  Multi selection: {} ({})",
        bool_to_word(ui.start_multi),
        origin("accordion.multi")
    ));
    lines.push(format!(
        "  Log level: {} ({})",
        config.log_level,
        origin("log.level")
    ));
    match &config.log_file {
        Some(path) => lines.push(format!("  Log file: {}", path.display())),
        None => lines.push("  Log file: (data directory)".to_string()),
    }
    for (label, dir) in [
        ("Config directory", app_dirs::get_config_dir()),
        ("Data directory", app_dirs::get_data_dir()),
        ("Cache directory", app_dirs::get_cache_dir()),
    ] {
        match dir {
            Ok(path) => lines.push(format!("  {label}: {}", path.display())),
            Err(err) => lines.push(format!("  {label}: unavailable ({err})")),
        }
    }
    lines
}

fn bool_to_word(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}
