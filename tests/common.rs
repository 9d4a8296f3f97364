//! Common test utilities for the go-diagram test suite.
//!
//! Builders for small game records used across the integration tests.

#![allow(dead_code)]

use go_diagram::{MoveTree, Point, Prop, StoneColor};

/// Append a move node below the cursor and leave the cursor on it.
pub fn play(tree: &mut MoveTree, color: StoneColor, sgf: &str) {
    let prop = match color {
        StoneColor::White => Prop::W,
        _ => Prop::B,
    };
    tree.add_node().properties_mut().add(prop, sgf);
}

/// A main line of alternating moves starting with Black. The cursor is left
/// at the root.
pub fn mainline(size: i32, moves: &[&str]) -> MoveTree {
    let mut tree = MoveTree::with_intersections(size);
    let mut color = StoneColor::Black;
    for mv in moves {
        play(&mut tree, color, mv);
        color = color.opponent();
    }
    tree.move_to(&[]);
    tree
}

/// Six main-line moves, then two sibling variations of two moves each below
/// the sixth move. Variation 0 continues the main line.
pub fn branching_game() -> MoveTree {
    let mut tree = mainline(19, &["pd", "dp", "pp", "dd", "qf", "nc"]);
    tree.move_to(&[0; 6]);
    play(&mut tree, StoneColor::Black, "cc");
    play(&mut tree, StoneColor::White, "dc");
    tree.move_to(&[0; 6]);
    play(&mut tree, StoneColor::Black, "qq");
    play(&mut tree, StoneColor::White, "qp");
    tree.move_to(&[]);
    tree
}

pub fn sgf(coord: &str) -> Point {
    Point::from_sgf(coord).unwrap()
}
