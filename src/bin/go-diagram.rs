//! go-diagram CLI - Go game records and diagram snapshots
//!
//! This CLI provides a unified interface for:
//! - Recording small game trees from move lists
//! - Parsing and encoding treepaths
//! - Choosing crop regions for positions
//! - Flattening positions into diagrams

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "go-diagram")]
#[command(version, about = "Go game records and diagram snapshots", long_about = None)]
struct Cli {
    /// Log debug output to stderr (overridden by RUST_LOG)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a game as a move tree
    Record(go_diagram::cli::commands::record::RecordArgs),

    /// Parse, encode and explore treepaths
    Treepath(go_diagram::cli::commands::treepath::TreepathArgs),

    /// Choose a crop region for a position
    Crop(go_diagram::cli::commands::crop::CropArgs),

    /// Flatten a position into a diagram
    Flatten(go_diagram::cli::commands::flatten::FlattenArgs),
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "go_diagram=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Record(args) => go_diagram::cli::commands::record::execute(args),
        Commands::Treepath(args) => go_diagram::cli::commands::treepath::execute(args),
        Commands::Crop(args) => go_diagram::cli::commands::crop::execute(args),
        Commands::Flatten(args) => go_diagram::cli::commands::flatten::execute(args),
    }
}
