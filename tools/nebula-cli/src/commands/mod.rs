//! CLI command implementations.

pub mod config;
pub mod favorites;
pub mod recommend;
pub mod scan;
pub mod search;
pub mod show;

use clap::{Args, Subcommand, ValueEnum};

/// Arguments for the search command.
#[derive(Args)]
pub struct SearchArgs {
    /// Text to look for in product names and brands (empty lists everything).
    #[arg(default_value = "")]
    pub term: String,
}

/// Arguments for the show command.
#[derive(Args)]
pub struct ShowArgs {
    /// Product id.
    pub id: u32,

    /// List every alternative instead of the first three.
    #[arg(short, long)]
    pub all: bool,
}

/// Which scanner to use when no barcode is given.
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum ScannerChoice {
    /// Read decoded barcodes from stdin, one per line.
    #[default]
    Native,
    /// No camera on this target.
    Unavailable,
}

/// Arguments for the scan command.
#[derive(Args)]
pub struct ScanArgs {
    /// Decoded barcode; read from the scanner when omitted.
    pub barcode: Option<String>,

    /// Scanner used when no barcode is given.
    #[arg(long, value_enum, default_value_t = ScannerChoice::Native)]
    pub scanner: ScannerChoice,
}

/// Arguments for the recommend command.
#[derive(Args)]
pub struct RecommendArgs {
    /// Product to find alternatives for.
    pub id: u32,

    /// Maximum number of alternatives.
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for the favorites command.
#[derive(Args)]
pub struct FavoritesArgs {
    #[command(subcommand)]
    pub command: Option<FavoritesCommand>,
}

#[derive(Subcommand)]
pub enum FavoritesCommand {
    /// List bookmarked products
    List,
    /// Add or remove a product
    Toggle {
        /// Product id.
        id: u32,
    },
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,
    /// Write a default nebula.toml
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}
