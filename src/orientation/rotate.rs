//! Rotating and mirroring whole game records.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{cropping::get_quad_crop_from_movetree, region::BoardRegion};
use crate::{
    Result,
    point::{Flip, Rotation},
    rules::{MoveTree, Prop, TreeRef},
};

/// Where [`auto_rotate_crop`] should move a problem to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AutoRotateCropPrefs {
    /// Target for problems that crop to a corner.
    pub corner: Option<BoardRegion>,
    /// Target for problems that crop to a side.
    pub side: Option<BoardRegion>,
    /// Rotate even when a mirror would reach the same region. Mirroring is
    /// usually nicer because crop boxes are not symmetric.
    pub prefer_rotate: bool,
}

impl AutoRotateCropPrefs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_corner(mut self, corner: BoardRegion) -> Self {
        self.corner = Some(corner);
        self
    }

    pub fn with_side(mut self, side: BoardRegion) -> Self {
        self.side = Some(side);
        self
    }

    pub fn with_prefer_rotate(mut self, prefer_rotate: bool) -> Self {
        self.prefer_rotate = prefer_rotate;
        self
    }
}

/// Rotate every point-valued property in the tree.
pub fn rotate_movetree(tree: &mut MoveTree, rotation: Rotation) {
    if rotation == Rotation::NoRotation {
        return;
    }
    let size = tree.intersections();
    for node in tree.nodes_mut() {
        node.properties_mut().rotate(size, rotation);
    }
    debug!(degrees = rotation.degrees(), "rotated move tree");
}

/// Mirror every point-valued property in the tree.
pub fn flip_movetree(tree: &mut MoveTree, flip: Flip) {
    let size = tree.intersections();
    for node in tree.nodes_mut() {
        let props = node.properties_mut();
        match flip {
            Flip::NoFlip => return,
            Flip::Vertical => props.flip_vert(size),
            Flip::Horizontal => props.flip_horz(size),
        }
    }
    debug!(?flip, "flipped move tree");
}

/// Rotate a game so its first move is in the upper-right quadrant. Returns
/// the rotation applied.
///
/// The first move is looked for at the root, then at its first child. Moves on
/// a centre line leave the game alone.
pub fn auto_rotate_game(tree: &mut MoveTree) -> Rotation {
    let root = tree.new_tree_ref().root();
    let first_point = |here: TreeRef<'_>| {
        let props = here.properties();
        props
            .get_as_point(Prop::W, 0)
            .or_else(|| props.get_as_point(Prop::B, 0))
    };
    let point = first_point(root).or_else(|| root.child(0).and_then(first_point));
    let Some(point) = point else {
        return Rotation::NoRotation;
    };

    let norm = point.normalize(tree.intersections());
    let rotation = match (norm.x().signum(), norm.y().signum()) {
        (-1, 1) => Rotation::Clockwise90,
        (-1, -1) => Rotation::Clockwise180,
        (1, -1) => Rotation::Clockwise270,
        _ => Rotation::NoRotation,
    };
    rotate_movetree(tree, rotation);
    rotation
}

/// Rotation that takes the tree's crop region to the preferred corner or side.
pub fn find_canonical_rotation(tree: TreeRef<'_>, prefs: &AutoRotateCropPrefs) -> Result<Rotation> {
    let region = get_quad_crop_from_movetree(tree.root(), None)?;
    Ok(find_crop_rotation(region, prefs))
}

fn corner_degrees(region: BoardRegion) -> Option<u16> {
    match region {
        BoardRegion::TopLeft => Some(0),
        BoardRegion::BottomLeft => Some(90),
        BoardRegion::BottomRight => Some(180),
        BoardRegion::TopRight => Some(270),
        _ => None,
    }
}

fn side_degrees(region: BoardRegion) -> Option<u16> {
    match region {
        BoardRegion::Top => Some(0),
        BoardRegion::Left => Some(90),
        BoardRegion::Bottom => Some(180),
        BoardRegion::Right => Some(270),
        _ => None,
    }
}

/// Rotation from `region` to the matching preference. Regions that are
/// neither a corner nor a side, or have no preference, are not rotated.
pub fn find_crop_rotation(region: BoardRegion, prefs: &AutoRotateCropPrefs) -> Rotation {
    let degrees = if region.is_corner() {
        corner_degrees(region).zip(prefs.corner.and_then(corner_degrees))
    } else if region.is_side() {
        side_degrees(region).zip(prefs.side.and_then(side_degrees))
    } else {
        None
    };
    degrees
        .and_then(|(start, end)| Rotation::from_degrees((360 + start - end) % 360))
        .unwrap_or_default()
}

/// A mirror that has the same effect as `rotation` on `region`'s crop, if any.
pub fn flip_for_rotation(region: BoardRegion, rotation: Rotation) -> Flip {
    use BoardRegion::*;
    match (rotation, region) {
        (Rotation::Clockwise90, TopLeft | BottomRight) => Flip::Horizontal,
        (Rotation::Clockwise90, TopRight | BottomLeft) => Flip::Vertical,
        (Rotation::Clockwise270, TopLeft | BottomRight) => Flip::Vertical,
        (Rotation::Clockwise270, TopRight | BottomLeft) => Flip::Horizontal,
        (Rotation::Clockwise180, Top | Bottom) => Flip::Vertical,
        (Rotation::Clockwise180, Left | Right) => Flip::Horizontal,
        _ => Flip::NoFlip,
    }
}

/// Move a problem's crop region to the preferred corner or side, mirroring
/// when possible unless `prefer_rotate` is set. Returns what was applied.
pub fn auto_rotate_crop(tree: &mut MoveTree, prefs: &AutoRotateCropPrefs) -> Result<(Rotation, Flip)> {
    let region = get_quad_crop_from_movetree(tree.new_tree_ref().root(), None)?;
    let rotation = find_crop_rotation(region, prefs);
    if rotation == Rotation::NoRotation {
        return Ok((Rotation::NoRotation, Flip::NoFlip));
    }
    let flip = if prefs.prefer_rotate {
        Flip::NoFlip
    } else {
        flip_for_rotation(region, rotation)
    };
    debug!(%region, degrees = rotation.degrees(), ?flip, "auto-rotating crop");
    if flip == Flip::NoFlip {
        rotate_movetree(tree, rotation);
        Ok((rotation, Flip::NoFlip))
    } else {
        flip_movetree(tree, flip);
        Ok((Rotation::NoRotation, flip))
    }
}
