//! Flatten command - Render a position as a diagram snapshot

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use crate::{
    cli::{commands::load_tree, config::DiagramConfig, output::print_flattened},
    flattener::{Flattener, ShowVariations},
    orientation::{BoardRegion, auto_rotate_crop},
};

#[derive(Parser, Debug)]
#[command(about = "Flatten a position into a diagram")]
pub struct FlattenArgs {
    /// Move tree JSON written by `go-diagram record`
    #[arg(long, short = 't')]
    pub tree: PathBuf,

    /// Diagram configuration file (JSON)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Initial treepath of the position, e.g. `12` or `3.1`
    #[arg(long, short = 'i')]
    pub init: Option<String>,

    /// Next moves to number, as a treepath fragment, e.g. `0:4`
    #[arg(long, short = 'n')]
    pub next: Option<String>,

    /// Board region (all, top-left, top, ..., auto)
    #[arg(long, short = 'r')]
    pub region: Option<BoardRegion>,

    /// When to label variations (never, always, more-than-one)
    #[arg(long)]
    pub variations: Option<ShowVariations>,

    /// Mark the last move played
    #[arg(long)]
    pub mark_last_move: bool,

    /// Mark the ko point
    #[arg(long)]
    pub mark_ko: bool,

    /// Emit the flattened position as JSON
    #[arg(long)]
    pub json: bool,
}

/// Merge command-line flags over the configuration file.
fn resolve_config(args: &FlattenArgs) -> Result<DiagramConfig> {
    let mut config = match &args.config {
        Some(path) => DiagramConfig::load(path)?,
        None => DiagramConfig::new(),
    };
    let options = &mut config.flatten;
    if let Some(init) = &args.init {
        options.init_position = Some(init.clone());
    }
    if let Some(next) = &args.next {
        options.next_moves_path = Some(next.clone());
    }
    if let Some(region) = args.region {
        options.board_region = region;
    }
    if let Some(show) = args.variations {
        options.show_variations = show;
    }
    options.mark_last_move |= args.mark_last_move;
    options.mark_ko |= args.mark_ko;
    config.json |= args.json;
    Ok(config)
}

pub fn execute(args: FlattenArgs) -> Result<()> {
    let config = resolve_config(&args)?;
    let mut tree = load_tree(&args.tree)?;
    if let Some(prefs) = &config.auto_rotate {
        let (rotation, flip) = auto_rotate_crop(&mut tree, prefs)?;
        info!(?rotation, ?flip, "reoriented move tree");
    }

    let mut flattener = Flattener::new();
    let flattened = flattener.flatten(tree.new_tree_ref().root(), &config.flatten)?;
    if config.json {
        println!("{}", serde_json::to_string_pretty(&flattened)?);
    } else {
        print_flattened(&flattened);
    }
    Ok(())
}
