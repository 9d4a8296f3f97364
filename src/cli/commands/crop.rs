//! Crop command - Choose the board region to display for a position

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::{
    cli::{
        commands::load_tree,
        output::{print_kv, print_section},
    },
    orientation::{Cropbox, Cropper, minimal_bounding_box},
    rules::{TreepathSpec, parse_fragment, parse_initial_path},
};

#[derive(Parser, Debug)]
#[command(about = "Choose a crop region for a position")]
pub struct CropArgs {
    /// Move tree JSON written by `go-diagram record`
    #[arg(long, short = 't')]
    pub tree: PathBuf,

    /// Initial treepath of the position
    #[arg(long, short = 'i')]
    pub init: Option<String>,

    /// Only consider the stones along this treepath fragment
    #[arg(long, short = 'n')]
    pub next: Option<String>,
}

pub fn execute(args: CropArgs) -> Result<()> {
    let tree = load_tree(&args.tree)?;
    let init = match &args.init {
        Some(text) => parse_initial_path(TreepathSpec::Text(text))?,
        None => Vec::new(),
    };
    let next = args.next.as_deref().map(parse_fragment).transpose()?;
    let position = tree.new_tree_ref().tree_from_root(&init);

    let minimal = minimal_bounding_box(position, next.as_deref())?;
    let region = Cropper::new().quad_crop(position, next.as_deref())?;
    let cropbox = Cropbox::get(region, position.intersections())?;

    print_section("Crop");
    print_kv("Board size", &position.intersections().to_string());
    print_kv("Minimal box", &minimal.to_string());
    print_kv("Region", region.as_str());
    print_kv("Crop box", &cropbox.bbox().to_string());
    print_kv(
        "Visible",
        &format!("{}x{}", cropbox.x_points(), cropbox.y_points()),
    );
    Ok(())
}
