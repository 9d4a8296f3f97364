//! Subcommands of the `go-diagram` binary

use std::{fs, path::Path};

use anyhow::{Context, Result};

use crate::rules::MoveTree;

pub mod crop;
pub mod flatten;
pub mod record;
pub mod treepath;

/// Read a move tree written by `go-diagram record`.
pub fn load_tree(path: &Path) -> Result<MoveTree> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read move tree {}", path.display()))?;
    let tree: MoveTree = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse move tree {}", path.display()))?;
    Ok(tree)
}
