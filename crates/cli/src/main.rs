//! Prints the catalog loaded from a JSON file.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use storefront_events::TracingObserver;
use storefront_infra::{CatalogLoader, FixedPrompt, LoaderConfig, StdinPrompt};
use storefront_products::{Category, ProductFactory};

#[derive(Debug, Parser)]
#[command(name = "storefront", version, about = "Load a product catalog and print it")]
struct Cli {
    /// Project root holding the data directory (overrides STOREFRONT_ROOT).
    #[arg(long)]
    root: Option<PathBuf>,

    /// Catalog file name inside the data directory.
    #[arg(long)]
    file: Option<String>,

    /// How many replacement file names to ask for when the file is missing.
    #[arg(long)]
    max_attempts: Option<u32>,

    /// Never prompt; a missing file yields an empty catalog.
    #[arg(long)]
    non_interactive: bool,
}

fn main() -> Result<()> {
    storefront_observability::init();
    let cli = Cli::parse();

    let mut config = LoaderConfig::from_env();
    if let Some(root) = cli.root {
        config.project_root = root;
    }
    let file_name = cli.file.unwrap_or_else(|| config.default_file.clone());

    let factory = ProductFactory::new().with_observer(TracingObserver);
    let (mut loader, max_attempts) = if cli.non_interactive {
        let loader = CatalogLoader::new(config.clone(), FixedPrompt::new(config.default_file.clone()));
        (loader, Some(cli.max_attempts.unwrap_or(0)))
    } else {
        let loader = CatalogLoader::new(config.clone(), StdinPrompt::new(config.default_file.clone()));
        (loader, cli.max_attempts)
    };
    loader = loader.with_factory(factory);

    let categories = loader.load_catalog(&file_name, max_attempts);
    if categories.is_empty() {
        tracing::warn!(file = %file_name, "catalog is empty");
    }

    let mut out = std::io::stdout().lock();
    print_catalog(&mut out, &categories).context("failed to write catalog")?;

    let counters = loader.session().snapshot();
    writeln!(
        out,
        "Categories: {}, products: {}",
        counters.category_count, counters.product_count
    )
    .context("failed to write counters")?;

    Ok(())
}

fn print_catalog(out: &mut impl Write, categories: &[Category]) -> std::io::Result<()> {
    for category in categories {
        writeln!(out, "Category: {}, description: {}", category.name(), category.description())?;
        writeln!(out, "{}", category.formatted_products())?;
        writeln!(out, "Average price: {:.2}", category.middle_price())?;
        writeln!(out)?;
    }
    Ok(())
}
