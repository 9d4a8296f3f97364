//! Choosing crop regions and reorienting whole records.

mod common;

use go_diagram::{
    BoardRegion, Cropbox, Cropper, MoveTree, Point, Prop, Rotation,
    orientation::{AutoRotateCropPrefs, auto_rotate_crop, rotate_movetree},
};
use proptest::prelude::*;

fn with_setup_stones(size: i32, pts: &[Point]) -> MoveTree {
    let mut tree = MoveTree::with_intersections(size);
    for pt in pts {
        tree.properties_mut().add(Prop::AB, pt.to_sgf_coord());
    }
    tree
}

proptest! {
    #[test]
    fn chosen_region_shows_every_stone(
        pts in prop::collection::vec((0..19i32, 0..19i32), 1..12)
    ) {
        let pts: Vec<Point> = pts.into_iter().map(Point::from).collect();
        let tree = with_setup_stones(19, &pts);
        let region = Cropper::new().quad_crop(tree.new_tree_ref(), None).unwrap();
        let cropbox = Cropbox::get(region, 19).unwrap();
        for pt in &pts {
            prop_assert!(cropbox.bbox().contains(*pt), "{} outside {}", pt, region);
        }
    }
}

#[test]
fn one_cropper_serves_several_board_sizes() {
    let mut cropper = Cropper::new();
    let corner = with_setup_stones(19, &[Point::new(2, 2)]);
    let small = with_setup_stones(9, &[Point::new(2, 2)]);
    assert_eq!(
        cropper.quad_crop(corner.new_tree_ref(), None).unwrap(),
        BoardRegion::TopLeft
    );
    assert_eq!(
        cropper.quad_crop(small.new_tree_ref(), None).unwrap(),
        BoardRegion::All
    );
    assert_eq!(
        cropper.quad_crop(corner.new_tree_ref(), None).unwrap(),
        BoardRegion::TopLeft
    );
}

#[test]
fn next_moves_crop_ignores_the_rest_of_the_game() {
    let tree = common::branching_game();
    let position = tree.new_tree_ref().tree_from_root(&[0; 6]);
    let region = Cropper::new().quad_crop(position, Some(&[1, 0])).unwrap();
    assert_eq!(region, BoardRegion::BottomRight);
}

#[test]
fn rotation_moves_the_crop_region() {
    let mut tree = with_setup_stones(19, &[Point::new(16, 2)]);
    let crop = |tree: &MoveTree| Cropper::new().quad_crop(tree.new_tree_ref(), None).unwrap();
    assert_eq!(crop(&tree), BoardRegion::TopRight);

    rotate_movetree(&mut tree, Rotation::Clockwise90);
    assert_eq!(crop(&tree), BoardRegion::BottomRight);
    rotate_movetree(&mut tree, Rotation::Clockwise270);
    assert_eq!(crop(&tree), BoardRegion::TopRight);
}

#[test]
fn auto_rotate_crop_reaches_the_preferred_corner() {
    let mut tree = with_setup_stones(19, &[Point::new(16, 16)]);
    let prefs = AutoRotateCropPrefs::new()
        .with_corner(BoardRegion::TopLeft)
        .with_prefer_rotate(true);
    let (rotation, _) = auto_rotate_crop(&mut tree, &prefs).unwrap();
    assert_eq!(rotation, Rotation::Clockwise180);
    let region = Cropper::new().quad_crop(tree.new_tree_ref(), None).unwrap();
    assert_eq!(region, BoardRegion::TopLeft);
}
