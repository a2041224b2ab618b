use std::path::PathBuf;

use clap::builder::BoolishValueParser;
use clap::{ArgAction, ColorChoice, Parser};

use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `widgetbox` binary.
#[derive(Parser, Debug, Default)]
#[command(
    name = "widgetbox",
    version,
    long_version = long_version(),
    about = "Terminal gallery of small interactive widgets",
    color = ColorChoice::Auto,
    styles = cli_styles()
)]
pub(crate) struct CliArgs {
    #[arg(
        short,
        long = "config",
        value_name = "FILE",
        env = "WIDGETBOX_CONFIG",
        action = ArgAction::Append,
        help = "Additional configuration file to merge (default: none)"
    )]
    pub(crate) config: Vec<PathBuf>,
    #[arg(
        short = 'n',
        long = "no-config",
        help = "Skip loading default configuration files (default: disabled)"
    )]
    pub(crate) no_config: bool,
    #[arg(
        short = 'w',
        long,
        value_name = "WIDGET",
        help = "Widget shown first: accordion, carousel, products, color or rating (default: accordion)"
    )]
    pub(crate) widget: Option<String>,
    #[arg(
        long,
        value_name = "THEME",
        help = "Select a theme by name (default: slate)"
    )]
    pub(crate) theme: Option<String>,
    #[arg(
        long = "products-url",
        value_name = "URL",
        help = "Catalogue endpoint for the load-more list (default: https://dummyjson.com/products)"
    )]
    pub(crate) products_url: Option<String>,
    #[arg(
        long = "images-url",
        value_name = "URL",
        help = "Listing endpoint for the carousel; empty disables fetching (default: https://picsum.photos/v2/list)"
    )]
    pub(crate) images_url: Option<String>,
    #[arg(
        long = "page-size",
        value_name = "NUM",
        help = "Products requested per page (default: 20)"
    )]
    pub(crate) page_size: Option<usize>,
    #[arg(
        long = "product-ceiling",
        value_name = "NUM",
        help = "Stop loading once this many products are held (default: 100)"
    )]
    pub(crate) product_ceiling: Option<usize>,
    #[arg(
        long = "image-limit",
        value_name = "NUM",
        help = "Images requested for the carousel (default: 5)"
    )]
    pub(crate) image_limit: Option<u32>,
    #[arg(
        long = "image-page",
        value_name = "NUM",
        help = "Listing page requested for the carousel (default: 1)"
    )]
    pub(crate) image_page: Option<u32>,
    #[arg(
        short = 's',
        long,
        value_name = "NUM",
        help = "Number of stars in the rating widget (default: 5)"
    )]
    pub(crate) stars: Option<u8>,
    #[arg(
        long,
        value_name = "FILE",
        help = "TOML or JSON file with accordion entries (default: built-in list)"
    )]
    pub(crate) faq: Option<PathBuf>,
    #[arg(
        short = 'm',
        long,
        value_parser = BoolishValueParser::new(),
        help = "Start the accordion in multi selection mode (default: disabled)"
    )]
    pub(crate) multi: Option<bool>,
    #[arg(
        long = "log-level",
        value_name = "LEVEL",
        help = "Log level: off, error, warn, info, debug or trace (default: info)"
    )]
    pub(crate) log_level: Option<String>,
    #[arg(
        long = "log-file",
        value_name = "FILE",
        help = "Write the log here (default: widgetbox.log in the data directory)"
    )]
    pub(crate) log_file: Option<PathBuf>,
    #[arg(
        long,
        help = "Use generated in-memory data instead of the network (default: disabled)"
    )]
    pub(crate) offline: bool,
    #[arg(
        short = 'p',
        long = "print-config",
        help = "Print the resolved configuration before running (default: disabled)"
    )]
    pub(crate) print_config: bool,
    #[arg(
        short = 'l',
        long = "list-themes",
        help = "List supported themes and exit (default: disabled)"
    )]
    pub(crate) list_themes: bool,
}
