//! Picking a display region from the stones and marks that matter.
//!
//! The board is split into quadrants; the chosen region is the first of a
//! fixed list of reference boxes that covers everything to be shown. Only
//! convex unions of quadrants (a corner, a side or the whole board) are ever
//! returned.

use std::collections::{HashMap, hash_map::Entry};

use tracing::{debug, trace};

use super::{
    cropbox::{Cropbox, MIN_CROPPABLE_SIZE},
    region::BoardRegion,
};
use crate::{Error, Result, bbox::BoundingBox, point::Point, rules::TreeRef};

/// Reference boxes in the order they are tried.
type CropboxMapping = Vec<(BoundingBox, BoardRegion)>;

/// Smallest box around the points that matter for display.
///
/// Without `next_moves`, every stone anywhere in the tree counts and marks are
/// ignored. With a path, only stones played along it count (or the stones of
/// the cursor node for an empty path), plus the marks at the final position.
/// Points off the board, such as an old-style `tt` pass on 19x19, are
/// skipped. An empty point set gives the whole board.
pub fn minimal_bounding_box(
    tree: TreeRef<'_>,
    next_moves: Option<&[usize]>,
) -> Result<BoundingBox> {
    let mut pts: Vec<Point> = Vec::new();
    match next_moves {
        None => tree.recurse_from_root(|here| {
            pts.extend(here.properties().get_all_stones().iter().map(|s| s.point));
        }),
        Some(path) => {
            let mut here = tree;
            for step in path {
                here = here.move_down(*step);
                pts.extend(here.properties().get_all_stones().iter().map(|s| s.point));
            }
            if path.is_empty() {
                pts.extend(here.properties().get_all_stones().iter().map(|s| s.point));
            }
            for marks in here.properties().get_all_marks().values() {
                pts.extend(marks.iter().map(|m| m.point));
            }
        }
    }
    let size = tree.intersections();
    pts.retain(|pt| (0..size).contains(&pt.x()) && (0..size).contains(&pt.y()));
    match BoundingBox::from_pts(&pts) {
        Some(bbox) => Ok(bbox),
        None => BoundingBox::full_board(size),
    }
}

/// Chooses crop regions, caching the reference boxes per board size.
#[derive(Debug, Default)]
pub struct Cropper {
    mappings: HashMap<i32, CropboxMapping>,
}

impl Cropper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Region to display for `tree`, optionally restricted to the stones along
    /// `next_moves` from its cursor. Boards below 19 lines are never cropped.
    pub fn quad_crop(
        &mut self,
        tree: TreeRef<'_>,
        next_moves: Option<&[usize]>,
    ) -> Result<BoardRegion> {
        let size = tree.intersections();
        if size < MIN_CROPPABLE_SIZE {
            return Ok(BoardRegion::All);
        }
        let minimal = minimal_bounding_box(tree, next_moves)?;
        let mapping = self.mapping(size)?;
        match mapping.iter().find(|(bbox, _)| bbox.covers(&minimal)) {
            Some((_, region)) => {
                debug!(%minimal, %region, "chose crop region");
                Ok(*region)
            }
            None => Err(Error::NoCoveringRegion {
                bbox: minimal.to_string(),
            }),
        }
    }

    fn mapping(&mut self, size: i32) -> Result<&CropboxMapping> {
        match self.mappings.entry(size) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                trace!(size, "building crop box mapping");
                Ok(entry.insert(build_mapping(size)?))
            }
        }
    }
}

// Overlaps of adjacent quadrants come first: the very middle of the board
// maps to ALL and the middle of each edge to its side. Then the corners,
// sides and finally the whole board.
fn build_mapping(size: i32) -> Result<CropboxMapping> {
    use BoardRegion::*;
    let cbox = |region: BoardRegion| Cropbox::get(region, size).map(|c| c.bbox());

    let overlaps = [
        (TopLeft, BottomRight, All),
        (TopLeft, TopRight, Top),
        (TopLeft, BottomLeft, Left),
        (BottomRight, TopRight, Right),
        (BottomRight, BottomLeft, Bottom),
    ];
    let mut mapping = Vec::new();
    for (a, b, result) in overlaps {
        if let Some(bbox) = cbox(a)?.intersect(&cbox(b)?) {
            mapping.push((bbox, result));
        }
    }
    for region in [
        TopLeft,
        TopRight,
        BottomLeft,
        BottomRight,
        Top,
        Bottom,
        Left,
        Right,
        All,
    ] {
        mapping.push((cbox(region)?, region));
    }
    Ok(mapping)
}

/// [`Cropper::quad_crop`] with a throwaway cache.
pub fn get_quad_crop_from_movetree(
    tree: TreeRef<'_>,
    next_moves: Option<&[usize]>,
) -> Result<BoardRegion> {
    Cropper::new().quad_crop(tree, next_moves)
}
