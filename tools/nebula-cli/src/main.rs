//! NebulaTide CLI - browse, scan and bookmark rated products.
//!
//! Commands:
//! - `nebula search` - Search products by name or brand
//! - `nebula show` - Show a product's rating, reasons and better choices
//! - `nebula scan` - Resolve scanned barcodes
//! - `nebula recommend` - List better-rated alternatives
//! - `nebula favorites` - List or toggle bookmarked products
//! - `nebula config` - Manage configuration

mod commands;
mod config;
mod context;
mod logging;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{ConfigArgs, FavoritesArgs, RecommendArgs, ScanArgs, SearchArgs, ShowArgs};

/// NebulaTide - environmental ratings for the products you buy
#[derive(Parser)]
#[command(name = "nebula")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search products by name or brand
    Search(SearchArgs),

    /// Show a product's rating and better choices
    Show(ShowArgs),

    /// Resolve a scanned barcode
    Scan(ScanArgs),

    /// List better-rated alternatives for a product
    Recommend(RecommendArgs),

    /// List or toggle favorites
    Favorites(FavoritesArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let ctx = match context::Context::load(cli.config.as_deref(), output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };
    logging::init_tracing(&ctx.config.log, cli.verbose)?;
    tracing::debug!(products = ctx.service.catalog().len(), "nebula starting");

    // Execute command
    let result = match cli.command {
        Commands::Search(args) => commands::search::run(args, &ctx).await,
        Commands::Show(args) => commands::show::run(args, &ctx).await,
        Commands::Scan(args) => commands::scan::run(args, &ctx).await,
        Commands::Recommend(args) => commands::recommend::run(args, &ctx).await,
        Commands::Favorites(args) => commands::favorites::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
