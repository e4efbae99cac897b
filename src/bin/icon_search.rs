//! Command-line lookup over the icon catalog.
//!
//! Prints the matching records as pretty-printed JSON on stdout; logs go to
//! stderr so the output stays machine-readable.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use icon_search::{catalog, search, Catalog, SearchConfig, SearchError};

/// Keyword and fuzzy search over the icon catalog.
#[derive(Parser)]
#[command(name = "icon-search", version, about)]
struct Cli {
    /// Free-text search query.
    query: String,

    /// Maximum number of results to print. Zero or negative prints nothing.
    #[arg(default_value_t = 10)]
    limit: i64,

    /// Catalog file to search. Defaults to $ICON_SEARCH_CATALOG, then
    /// references/index.json.
    #[arg(short, long)]
    catalog: Option<PathBuf>,
}

fn main() {
    // Quiet by default; RUST_LOG overrides.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("icon_search=warn")),
        )
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("icon-search failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> icon_search::Result<()> {
    let path = cli
        .catalog
        .unwrap_or_else(catalog::default_catalog_path);
    let loaded = Catalog::load(&path)?;

    let config = SearchConfig {
        limit: usize::try_from(cli.limit).unwrap_or(0),
    };
    let results = search(&cli.query, &loaded.icons, &config);

    let rendered = serde_json::to_string_pretty(&results)
        .map_err(|e| SearchError::Output(e.to_string()))?;
    println!("{rendered}");
    Ok(())
}
