use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use itemdeck::config::Config;
use itemdeck::item::Item;
use itemdeck::logging::init_tracing;
use itemdeck::store::Store;
use itemdeck::ui::runtime;

/// A list/detail/edit demo built on unidirectional state flow.
#[derive(Debug, Parser)]
#[command(name = "itemdeck", version, about)]
struct Args {
    /// Path to the config file (defaults to the platform config dir).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed the deck with these names instead of the config file.
    /// May be given multiple times; order is preserved.
    #[arg(long = "name")]
    names: Vec<String>,
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let items: Vec<Item> = if args.names.is_empty() {
        let config = match &args.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        config.seed_items()?
    } else {
        args.names.into_iter().map(Item::new).collect()
    };

    tracing::info!(count = items.len(), "seeding deck");
    let store = Store::seeded(items);
    runtime::run(store)?;
    Ok(())
}
