//! Flattening tree positions into diagram snapshots.

mod common;

use go_diagram::{
    BoardRegion, FlattenOptions, Flattened, Flattener, Goban,
    flattener::{MarkSymbol, ShowVariations, StoneSymbol, flatten, labels::create_full_label},
};

fn at_branch() -> FlattenOptions {
    FlattenOptions::new().with_init_position("6")
}

#[test]
fn flattening_is_pure() {
    let tree = common::branching_game();
    let before = tree.clone();
    let options = at_branch()
        .with_next_moves_path("1.0")
        .with_board_region(BoardRegion::Auto)
        .with_show_variations(ShowVariations::Always)
        .with_mark_last_move(true);

    let first = flatten(tree.new_tree_ref(), &options).unwrap();
    let second = flatten(tree.new_tree_ref(), &options).unwrap();
    assert_eq!(first, second);

    let mut flattener = Flattener::new();
    let cached_first = flattener.flatten(tree.new_tree_ref(), &options).unwrap();
    let cached_second = flattener.flatten(tree.new_tree_ref(), &options).unwrap();
    assert_eq!(cached_first, first);
    assert_eq!(cached_second, first);
    assert_eq!(tree, before);
}

#[test]
fn supplied_goban_is_not_modified() {
    let tree = common::branching_game();
    let position = tree.new_tree_ref().tree_from_root(&[0; 6]);
    let goban = Goban::from_position(position).unwrap();
    let options = FlattenOptions::new()
        .with_goban(goban.clone())
        .with_next_moves_path("1.0");
    let flattened = flatten(position, &options).unwrap();
    assert_eq!(options.goban.as_ref(), Some(&goban));
    assert_eq!(flattened.stone_map().len(), 8);
}

#[test]
fn variation_replay_is_numbered_from_one() {
    let tree = common::branching_game();
    let options = at_branch().with_next_moves_path("1.0");
    let flattened = flatten(tree.new_tree_ref(), &options).unwrap();

    assert_eq!(flattened.starting_move_num(), 1);
    assert_eq!(flattened.ending_move_num(), 2);
    assert!(!flattened.is_on_main_path());
    assert!(flattened.collisions().is_empty());

    let qq = common::sgf("qq");
    let qp = common::sgf("qp");
    assert_eq!(flattened.labels()[&qq], "1");
    assert_eq!(flattened.labels()[&qp], "2");
    assert_eq!(flattened.marks()[&qq], MarkSymbol::TextLabel);

    let board = flattened.board();
    assert_eq!(board.get_int_board_pt(qq).unwrap().stone(), StoneSymbol::BStone);
    assert_eq!(board.get_int_board_pt(qp).unwrap().stone(), StoneSymbol::WStone);
    assert_eq!(board.get_int_board_pt(qq).unwrap().to_char(), 'X');

    // Off the main line there is no move range, and nothing collided.
    assert_eq!(create_full_label(&flattened), "");
}

#[test]
fn mainline_replay_continues_the_numbering() {
    let tree = common::branching_game();
    let options = at_branch().with_next_moves_path("0:2");
    let flattened = flatten(tree.new_tree_ref(), &options).unwrap();
    assert_eq!(flattened.starting_move_num(), 7);
    assert_eq!(flattened.ending_move_num(), 8);
    assert!(flattened.is_on_main_path());
    assert_eq!(create_full_label(&flattened), "(Moves: 7-8)");
}

#[test]
fn variations_are_labelled_at_a_branch() {
    let tree = common::branching_game();
    let options = at_branch().with_show_variations(ShowVariations::MoreThanOne);
    let flattened = flatten(tree.new_tree_ref(), &options).unwrap();
    assert_eq!(flattened.labels()[&common::sgf("cc")], "1");
    assert_eq!(flattened.labels()[&common::sgf("qq")], "2");
    assert_eq!(
        flattened.marks()[&common::sgf("qq")],
        MarkSymbol::NextVariation
    );
    assert_eq!(
        flattened.next_mainline_move().and_then(|mv| mv.point),
        Some(common::sgf("cc"))
    );
    assert_eq!(flattened.mainline_move_num(), 6);
}

#[test]
fn whole_board_text_has_one_row_per_line() {
    let tree = common::mainline(9, &["cc", "gg"]);
    let options = FlattenOptions::new().with_init_position("2");
    let flattened = flatten(tree.new_tree_ref(), &options).unwrap();
    let text = flattened.board().to_string();
    let rows: Vec<&str> = text.lines().collect();
    assert_eq!(rows.len(), 9);
    assert!(rows.iter().all(|row| row.chars().count() == 17));
    assert_eq!(rows[2].chars().nth(4), Some('X'));
    assert_eq!(rows[6].chars().nth(12), Some('O'));
}

#[test]
fn snapshot_survives_json() {
    let tree = common::branching_game();
    let options = at_branch()
        .with_next_moves_path("1.0")
        .with_board_region(BoardRegion::BottomRight);
    let flattened = flatten(tree.new_tree_ref(), &options).unwrap();
    let json = serde_json::to_string(&flattened).unwrap();
    let back: Flattened = serde_json::from_str(&json).unwrap();
    assert_eq!(back, flattened);
    assert!(back.board().is_cropped());
}

#[test]
fn empty_boards_are_cached_per_size() {
    let mut flattener = Flattener::new();
    let nine = flattener.empty_flattened(9).unwrap().clone();
    assert_eq!(nine.board().width(), 9);
    assert!(nine.stone_map().is_empty());
    let again = flattener.empty_flattened(9).unwrap();
    assert_eq!(again, &nine);
    assert_eq!(flattener.empty_flattened(13).unwrap().board().height(), 13);
    assert!(nine.collisions().is_empty());
}
