//! Treepath command - Convert between treepath text and variation lists

use std::path::PathBuf;

use anyhow::{Result, anyhow};
use clap::{Parser, Subcommand};

use crate::{
    cli::{commands::load_tree, output::print_kv},
    rules::{
        FindNextMovesOptions, TreepathSpec, find_next_moves_path, flatten_move_tree,
        parse_fragment, parse_initial_path, to_fragment_string, to_init_path_string,
        treepath::TO_END_LEN,
    },
};

#[derive(Parser, Debug)]
#[command(about = "Parse, encode and explore treepaths")]
pub struct TreepathArgs {
    #[command(subcommand)]
    pub command: TreepathCommand,
}

#[derive(Subcommand, Debug)]
pub enum TreepathCommand {
    /// Parse treepath text into variation indices
    Parse {
        /// Treepath text, e.g. `3.1` or `0:4`
        text: String,

        /// Read the text as a fragment (every number is a variation)
        #[arg(long)]
        fragment: bool,
    },

    /// Encode variation indices (comma separated) as treepath text
    Encode {
        /// Variation indices, e.g. `0,0,0,1`
        #[arg(value_delimiter = ',')]
        path: Vec<usize>,
    },

    /// List every path from the root of a recorded tree to its leaves
    Leaves {
        /// Move tree JSON written by `go-diagram record`
        #[arg(long, short = 't')]
        tree: PathBuf,
    },

    /// Find the start position and next moves leading to a position
    NextMoves {
        /// Move tree JSON written by `go-diagram record`
        #[arg(long, short = 't')]
        tree: PathBuf,

        /// Initial treepath of the final position
        #[arg(long, short = 'i')]
        init: String,

        /// Walk back at most this many moves
        #[arg(long)]
        minus_moves: Option<usize>,

        /// Stop walking back at a commented node
        #[arg(long)]
        break_on_comment: bool,
    },
}

/// Show a path, abbreviating a trailing run to the end of the game.
fn describe_path(path: &[usize]) -> String {
    if path.len() >= TO_END_LEN {
        let head = path.len() - TO_END_LEN;
        let shown: Vec<String> = path[..head].iter().map(ToString::to_string).collect();
        let mut out = format!("[{}", shown.join(", "));
        if !shown.is_empty() {
            out.push_str(", ");
        }
        out.push_str("0 ...]");
        return out;
    }
    format!("{path:?}")
}

pub fn execute(args: TreepathArgs) -> Result<()> {
    match args.command {
        TreepathCommand::Parse { text, fragment } => {
            let path = if fragment {
                parse_fragment(&text)?
            } else {
                parse_initial_path(TreepathSpec::Text(&text))?
            };
            println!("{}", describe_path(&path));
        }
        TreepathCommand::Encode { path } => {
            print_kv("Initial path", &to_init_path_string(&path));
            print_kv("Fragment", &to_fragment_string(&path));
        }
        TreepathCommand::Leaves { tree } => {
            let tree = load_tree(&tree)?;
            let paths = flatten_move_tree(tree.new_tree_ref().root());
            if paths.is_empty() {
                println!("(empty tree)");
            }
            for path in paths {
                println!("{}", to_init_path_string(&path));
            }
        }
        TreepathCommand::NextMoves {
            tree,
            init,
            minus_moves,
            break_on_comment,
        } => {
            let tree = load_tree(&tree)?;
            let init_treepath = parse_initial_path(TreepathSpec::Text(&init))?;
            let mut options = FindNextMovesOptions::new()
                .with_init_treepath(init_treepath)
                .with_break_on_comment(break_on_comment);
            if let Some(n) = minus_moves {
                if n == 0 {
                    return Err(anyhow!("--minus-moves must be at least 1"));
                }
                options = options.with_minus_moves_override(n);
            }
            let found = find_next_moves_path(tree.new_tree_ref(), &options);
            print_kv("Start position", &to_init_path_string(&found.treepath));
            print_kv("Next moves", &to_fragment_string(&found.next_moves));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_short_path() {
        assert_eq!(describe_path(&[0, 1]), "[0, 1]");
    }

    #[test]
    fn test_describe_path_to_end() {
        let path = parse_fragment("1+").unwrap();
        assert_eq!(describe_path(&path), "[1, 0 ...]");
    }
}
