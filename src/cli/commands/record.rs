//! Record command - Build a move tree from a list of moves

use std::{fs, path::PathBuf};

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing::info;

use crate::{
    point::{MAX_BOARD_SIZE, Point},
    rules::{MoveTree, Prop, StoneColor, autonumber},
};

#[derive(Parser, Debug)]
#[command(about = "Record a game as a move tree")]
pub struct RecordArgs {
    /// Moves as SGF coordinates, alternating colors ("pass" for a pass)
    pub moves: Vec<String>,

    /// Board size
    #[arg(long, short = 's', default_value_t = 19)]
    pub size: i32,

    /// Black setup stones (SGF coordinates)
    #[arg(long = "black", short = 'b')]
    pub black: Vec<String>,

    /// White setup stones (SGF coordinates)
    #[arg(long = "white", short = 'w')]
    pub white: Vec<String>,

    /// Color of the first move (`black` or `white`)
    #[arg(long = "first-player", default_value = "black")]
    pub first_player: String,

    /// Comment on the root node
    #[arg(long, short = 'c')]
    pub comment: Option<String>,

    /// Label the moves of variations with their move numbers
    #[arg(long)]
    pub autonumber: bool,

    /// Write SGF instead of JSON
    #[arg(long)]
    pub sgf: bool,

    /// Output file (stdout when absent)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

fn sgf_coord(coord: &str, size: i32) -> Result<String> {
    let pt = Point::from_sgf(coord)?;
    if pt.x() >= size || pt.y() >= size {
        bail!("Move '{coord}' is off a {size}x{size} board");
    }
    Ok(coord.to_string())
}

/// Build the tree described by `args`.
pub fn build_tree(args: &RecordArgs) -> Result<MoveTree> {
    if !(1..=MAX_BOARD_SIZE).contains(&args.size) {
        bail!("Board size must be between 1 and {MAX_BOARD_SIZE}, got {}", args.size);
    }
    let first: StoneColor = args.first_player.parse()?;
    if !first.is_stone() {
        bail!("--first-player must be black or white");
    }

    let mut tree = MoveTree::with_intersections(args.size);
    tree.init_root_properties();
    for (prop, coords) in [(Prop::AB, &args.black), (Prop::AW, &args.white)] {
        for coord in coords {
            let value = sgf_coord(coord, args.size)?;
            tree.properties_mut().add(prop, value);
        }
    }
    if let Some(comment) = &args.comment {
        tree.properties_mut().add(Prop::C, comment.clone());
    }

    let mut color = first;
    for mv in &args.moves {
        let prop = if color == StoneColor::Black {
            Prop::B
        } else {
            Prop::W
        };
        let value = if mv.eq_ignore_ascii_case("pass") {
            String::new()
        } else {
            sgf_coord(mv, args.size)?
        };
        tree.add_node().properties_mut().add(prop, value);
        color = color.opponent();
    }
    if args.autonumber {
        autonumber(&mut tree)?;
    }
    Ok(tree)
}

pub fn execute(args: RecordArgs) -> Result<()> {
    let tree = build_tree(&args)?;
    let text = if args.sgf {
        tree.to_sgf()
    } else {
        serde_json::to_string_pretty(&tree)?
    };
    match &args.output {
        Some(path) => {
            fs::write(path, text)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(path = %path.display(), nodes = tree.len(), "recorded move tree");
            println!("Recorded {} moves to {}", args.moves.len(), path.display());
        }
        None => println!("{text}"),
    }
    Ok(())
}
