//! Go game-record engine for diagram generation
//!
//! This crate provides:
//! - Board geometry: points, rotations, flips and bounding boxes
//! - SGF-style properties on an arena-backed variation tree
//! - Capture rules, ko tracking and position replay
//! - Treepaths for naming routes through variations
//! - Crop regions and whole-record reorientation
//! - Flattening a position into a renderable diagram snapshot

pub mod bbox;
pub mod cli;
pub mod error;
pub mod flattener;
pub mod identifiers;
pub mod orientation;
pub mod point;
pub mod rules;

pub use bbox::BoundingBox;
pub use error::{Error, Result};
pub use flattener::{FlattenOptions, Flattened, Flattener, ShowVariations};
pub use identifiers::{NodeId, NodeIndex};
pub use orientation::{BoardRegion, Cropbox, Cropper};
pub use point::{Flip, MAX_BOARD_SIZE, Point, Rotation};
pub use rules::{Goban, Move, MoveTree, Prop, Properties, Stone, StoneColor, TreeRef};
