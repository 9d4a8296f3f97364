//! Classifying positions of a problem tree as correct or incorrect.

use serde::{Deserialize, Serialize};

use super::{color::Move, movetree::TreeRef, properties::Conditions, treepath::flatten_move_tree};

/// Property substrings that mark a node as a correct answer, for example
/// `GB` present or `C` containing "Correct".
pub type ProblemConditions = Conditions;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProblemResult {
    Correct,
    Incorrect,
    /// Some continuations reach a correct node and some do not.
    Indeterminate,
}

/// Classify the position at the cursor.
///
/// A node matching the conditions is correct. Otherwise each path to a leaf
/// is correct if it passes through a matching node: all correct paths give
/// `Correct`, a mix gives `Indeterminate`, and none gives `Incorrect`.
pub fn is_correct_position(tree: TreeRef<'_>, conditions: &ProblemConditions) -> ProblemResult {
    if tree.properties().matches(conditions) {
        return ProblemResult::Correct;
    }
    let mut any_correct = false;
    let mut any_incorrect = false;
    for path in flatten_move_tree(tree) {
        let mut here = tree;
        let mut path_correct = false;
        for step in path {
            here = here.move_down(step);
            path_correct |= here.properties().matches(conditions);
        }
        if path_correct {
            any_correct = true;
        } else {
            any_incorrect = true;
        }
    }
    match (any_correct, any_incorrect) {
        (true, false) => ProblemResult::Correct,
        (true, true) => ProblemResult::Indeterminate,
        _ => ProblemResult::Incorrect,
    }
}

/// Moves of the children that are not incorrect.
pub fn correct_next_moves(tree: TreeRef<'_>, conditions: &ProblemConditions) -> Vec<Move> {
    tree.node()
        .children()
        .iter()
        .map(|c| tree.at(*c))
        .filter(|child| is_correct_position(*child, conditions) != ProblemResult::Incorrect)
        .filter_map(|child| child.properties().get_move())
        .collect()
}
