//! Captions for next-moves diagrams: move ranges and collisions, plus
//! helpers for finding stone references like "Black 12" in comments.

use super::flattened::{Flattened, MoveCollision};
use crate::rules::StoneColor;

/// Rows mentioning more labels than this are never merged.
const SHORT_ROW_LABELS: usize = 3;

/// Collision caption for a flattened diagram.
pub fn create_collision_label(flattened: &Flattened) -> String {
    label_from_collisions(flattened.collisions())
}

/// Move range (main line only) followed by the collision caption.
pub fn create_full_label(flattened: &Flattened) -> String {
    full_label_from_collisions(
        flattened.collisions(),
        flattened.is_on_main_path(),
        flattened.starting_move_num(),
        flattened.ending_move_num(),
    )
}

/// `"(Moves: 1-10)\nBlack 1, White 2 at Black (a)."`. Either half may be
/// missing: the range is only given on the main line and the collisions only
/// when there are some.
pub fn full_label_from_collisions(
    collisions: &[MoveCollision],
    is_on_main_path: bool,
    start: usize,
    end: usize,
) -> String {
    let moves = if is_on_main_path {
        construct_move_label(start, end)
    } else {
        String::new()
    };
    let cols = label_from_collisions(collisions);
    match (moves.is_empty(), cols.is_empty()) {
        (false, false) => format!("{moves}\n{cols}"),
        _ => moves + &cols,
    }
}

/// `"(Move: 3)"` or `"(Moves: 3-12)"`.
pub fn construct_move_label(start: usize, end: usize) -> String {
    if start == end {
        format!("(Move: {start})")
    } else {
        format!("(Moves: {start}-{end})")
    }
}

/// One row per collision point, in order of first appearance:
/// `"Black 13, White 16 at White (a),\nBlack 14 at Black 3."`
pub fn label_from_collisions(collisions: &[MoveCollision]) -> String {
    if collisions.is_empty() {
        return String::new();
    }

    let mut groups: Vec<(&str, Option<StoneColor>, Vec<&MoveCollision>)> = Vec::new();
    for col in collisions {
        match groups.iter_mut().find(|(label, ..)| *label == col.label) {
            Some((_, stone_color, members)) => {
                if stone_color.is_none() {
                    *stone_color = col.collision_stone_color;
                }
                members.push(col);
            }
            None => groups.push((col.label.as_str(), col.collision_stone_color, vec![col])),
        }
    }

    let mut rows: Vec<String> = groups
        .into_iter()
        .map(|(label, stone_color, members)| {
            let moves: Vec<String> = members
                .iter()
                .map(|c| format!("{} {}", player_name(Some(c.color)), c.move_num))
                .collect();
            let label = if is_letter_label(label) {
                format!("({label})")
            } else {
                label.to_string()
            };
            format!("{} at {} {}", moves.join(", "), player_name(stone_color), label)
        })
        .collect();

    if rows.len() >= 4 {
        rows = compactify_labels(rows);
    }
    rows.join(",\n") + "."
}

// Anything that is not black reads as White, including a missing stone.
fn player_name(color: Option<StoneColor>) -> &'static str {
    match color {
        Some(StoneColor::Black) => "Black",
        _ => "White",
    }
}

fn is_letter_label(label: &str) -> bool {
    let mut chars = label.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_ascii_lowercase())
}

/// Pair up consecutive short rows, `"row; row"`, to save space when there
/// are many collision points.
pub fn compactify_labels(rows: Vec<String>) -> Vec<String> {
    let mut out = Vec::with_capacity(rows.len());
    let mut buffer: Option<String> = None;
    for row in rows {
        let is_short = count_inline_labels(&row) <= SHORT_ROW_LABELS;
        buffer = match (buffer, is_short) {
            (None, false) => {
                out.push(row);
                None
            }
            (None, true) => Some(row),
            (Some(prev), true) => {
                out.push(format!("{prev}; {row}"));
                None
            }
            (Some(prev), false) => {
                out.push(prev);
                out.push(row);
                None
            }
        };
    }
    out.extend(buffer);
    out
}

/// A stone reference found in text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InlineLabel<'a> {
    /// The whole match, e.g. `"White (12)"`.
    pub full: &'a str,
    pub player: &'a str,
    /// The label without parentheses.
    pub label: &'a str,
}

/// Replace every stone reference in `text` ("Black A", "White 32",
/// "Black (x)", "White (126)") with the output of `f`.
///
/// References must be followed by the end of the text, whitespace or
/// punctuation.
pub fn replace_inline(text: &str, mut f: impl FnMut(InlineLabel<'_>) -> String) -> String {
    let mut out = String::with_capacity(text.len());
    let mut copied = 0;
    let mut i = 0;
    while i < text.len() {
        match match_inline_label(&text[i..]) {
            Some(found) => {
                out.push_str(&text[copied..i]);
                out.push_str(&f(found));
                i += found.full.len();
                copied = i;
            }
            None => i += text[i..].chars().next().map_or(1, char::len_utf8),
        }
    }
    out.push_str(&text[copied..]);
    out
}

pub fn count_inline_labels(text: &str) -> usize {
    let mut count = 0;
    replace_inline(text, |found| {
        count += 1;
        found.full.to_string()
    });
    count
}

fn match_inline_label(s: &str) -> Option<InlineLabel<'_>> {
    let player = ["Black", "White"]
        .into_iter()
        .find(|p| s.starts_with(p) && s[p.len()..].starts_with(' '))?;
    let body = &s[player.len() + 1..];

    let (label, consumed) = match body.strip_prefix('(') {
        Some(inner) => {
            let n = label_len(inner, true)?;
            if !inner[n..].starts_with(')') {
                return None;
            }
            (&inner[..n], n + 2)
        }
        None => {
            let n = label_len(body, false)?;
            (&body[..n], n)
        }
    };
    if !body[consumed..].chars().next().is_none_or(is_label_terminator) {
        return None;
    }
    let len = player.len() + 1 + consumed;
    Some(InlineLabel {
        full: &s[..len],
        player,
        label,
    })
}

// A single letter (lowercase only inside parentheses) or up to three digits.
fn label_len(s: &str, allow_lowercase: bool) -> Option<usize> {
    let first = s.chars().next()?;
    if first.is_ascii_uppercase() || (allow_lowercase && first.is_ascii_lowercase()) {
        return Some(1);
    }
    let digits = s.bytes().take_while(u8::is_ascii_digit).count();
    (digits > 0).then_some(digits.min(3))
}

fn is_label_terminator(c: char) -> bool {
    c.is_whitespace() || "\"',:;.$?~`<>{}[]()!@_-".contains(c)
}
