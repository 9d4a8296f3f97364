//! Output formatting for CLI

use crate::{
    flattener::{Flattened, labels::create_full_label},
    rules::Move,
};

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a subsection header
pub fn print_subsection(title: &str) {
    println!("\n{title}");
    println!("{}", "-".repeat(40));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

/// Print statistics table
pub fn print_stats_table(stats: &[(&str, &str)]) {
    for (key, value) in stats {
        print_kv(key, value);
    }
}

fn describe_move(mv: Option<Move>) -> String {
    match mv {
        Some(Move {
            color,
            point: Some(pt),
        }) => format!("{color} {}", pt.to_sgf_coord()),
        Some(Move { color, point: None }) => format!("{color} pass"),
        None => "-".to_string(),
    }
}

/// Print a flattened position: the board followed by its caption data.
pub fn print_flattened(flattened: &Flattened) {
    let board = flattened.board();
    print_section(&format!(
        "Board ({}x{}, {})",
        board.width(),
        board.height(),
        board.bounding_box()
    ));
    println!("{board}");

    print_subsection("Position");
    let moves = format!(
        "{}-{}",
        flattened.starting_move_num(),
        flattened.ending_move_num()
    );
    let mainline = describe_move(flattened.mainline_move());
    let next = describe_move(flattened.next_mainline_move());
    let ko = flattened
        .ko()
        .map(|pt| pt.to_sgf_coord())
        .unwrap_or_else(|| "-".to_string());
    print_stats_table(&[
        ("Main path", if flattened.is_on_main_path() { "yes" } else { "no" }),
        ("Moves shown", &moves),
        ("Mainline move", &mainline),
        ("Next mainline move", &next),
        ("Ko", &ko),
    ]);

    let label = create_full_label(flattened);
    if !label.is_empty() {
        print_subsection("Label");
        println!("{label}");
    }
    if !flattened.comment().is_empty() {
        print_subsection("Comment");
        println!("{}", flattened.comment());
    }
}
