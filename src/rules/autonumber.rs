//! Move-number labels for commented positions.

use tracing::debug;

use super::{
    goban::Goban,
    movetree::{MoveTree, TreeRef},
    prop::Prop,
    treepath::{FindNextMovesOptions, apply_next_moves, find_next_moves_path},
};
use crate::{Result, identifiers::NodeIndex};

/// Marks removed when a label lands on the same point.
const COLLIDING_MARKS: [Prop; 2] = [Prop::TR, Prop::SQ];

/// Label every commented node with the move numbers of the moves leading up
/// to it.
///
/// For each node with a comment, labels containing a digit are dropped, the
/// moves from [`find_next_moves_path`] get numbered labels, and `TR`/`SQ`
/// marks under any label are removed. The cursor is left where it was.
///
/// Fails, leaving the tree untouched, when the root's `SZ` is not a usable
/// board size.
pub fn autonumber(tree: &mut MoveTree) -> Result<()> {
    let mut updates: Vec<(NodeIndex, Result<Vec<(String, String)>>)> = Vec::new();
    tree.recurse_from_root(|here| {
        if here.properties().get_comment().is_some_and(|c| !c.is_empty()) {
            updates.push((here.cursor(), number_labels(here)));
        }
    });
    debug!(nodes = updates.len(), "autonumbering commented nodes");
    let updates = updates
        .into_iter()
        .map(|(index, labels)| labels.map(|labels| (index, labels)))
        .collect::<Result<Vec<_>>>()?;

    for (index, labels) in updates {
        let props = tree.node_at_mut(index).properties_mut();
        if labels.is_empty() {
            props.remove(Prop::LB);
        } else {
            let values = labels
                .iter()
                .map(|(pt, label)| format!("{pt}:{}", truncate_label(label)))
                .collect();
            props.set(Prop::LB, values);
        }
        remove_colliding_labels(props, &labels);
    }
    Ok(())
}

// (sgf point, label) pairs in first-seen order.
fn number_labels(here: TreeRef<'_>) -> Result<Vec<(String, String)>> {
    let mut labels: Vec<(String, String)> = Vec::new();
    for value in here.properties().get_all_values(Prop::LB).unwrap_or_default() {
        let (pt, text) = value.split_once(':').unwrap_or((value.as_str(), ""));
        if !text.chars().any(|c| c.is_ascii_digit()) {
            upsert(&mut labels, pt, text.to_string());
        }
    }

    let split = find_next_moves_path(here, &FindNextMovesOptions::default());
    let start = split.position;
    let goban = Goban::from_position(start)?;
    let first_num = if here.on_mainline() {
        start.node().node_num() + 1
    } else {
        start.moves_to_mainline() + 1
    };
    let applied = apply_next_moves(start, &goban, &split.next_moves);
    let numbered = applied.stones.iter().filter(|s| s.collision.is_none());
    for (seen, stone) in numbered.enumerate() {
        upsert(
            &mut labels,
            &stone.point.to_sgf_coord(),
            (first_num + seen).to_string(),
        );
    }
    Ok(labels)
}

fn upsert(labels: &mut Vec<(String, String)>, pt: &str, label: String) {
    match labels.iter_mut().find(|(p, _)| p == pt) {
        Some(entry) => entry.1 = label,
        None => labels.push((pt.to_string(), label)),
    }
}

/// Shorten a label to fit on a stone: keep the last two characters unless
/// they are `00`, and drop a leading zero from what remains.
///
/// ```
/// use go_diagram::rules::autonumber::truncate_label;
/// assert_eq!(truncate_label("123"), "23");
/// assert_eq!(truncate_label("105"), "5");
/// assert_eq!(truncate_label("200"), "200");
/// assert_eq!(truncate_label("7"), "7");
/// ```
pub fn truncate_label(label: &str) -> String {
    let chars: Vec<char> = label.chars().collect();
    if chars.len() <= 2 {
        return label.to_string();
    }
    let tail = &chars[chars.len() - 2..];
    if tail == ['0', '0'] {
        return label.to_string();
    }
    if tail[0] == '0' && tail[1].is_ascii_digit() {
        tail[1].to_string()
    } else {
        tail.iter().collect()
    }
}

/// Drop `TR` and `SQ` values sitting on a labelled point.
pub fn remove_colliding_labels(props: &mut super::Properties, labels: &[(String, String)]) {
    for prop in COLLIDING_MARKS {
        let Some(values) = props.get_all_values(prop) else {
            continue;
        };
        let kept: Vec<String> = values
            .iter()
            .filter(|v| !labels.iter().any(|(pt, label)| pt == *v && !label.is_empty()))
            .cloned()
            .collect();
        if kept.is_empty() {
            props.remove(prop);
        } else {
            props.set(prop, kept);
        }
    }
}
