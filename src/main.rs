mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use cli::parse_cli;
use workflow::GalleryWorkflow;

fn main() -> Result<()> {
    let cli = parse_cli();

    if cli.list_themes {
        for definition in widgetbox::ui::style::definitions() {
            if definition.aliases.is_empty() {
                println!("{}", definition.name);
            } else {
                println!("{} ({})", definition.name, definition.aliases.join(", "));
            }
        }
        return Ok(());
    }

    let resolved = settings::load(&cli)?;

    if cli.print_config {
        resolved.print_summary();
    }

    GalleryWorkflow::from_config(resolved).run()
}
