//! The immutable result of flattening a position.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{board::Board, point_map, symbols::MarkSymbol};
use crate::{
    point::Point,
    rules::{Move, ProblemResult, Stone, StoneColor},
};

/// Every stone shown on the diagram, by point.
pub type StoneMap = BTreeMap<Point, Stone>;

/// Marks and text labels overlaid on the diagram.
///
/// A point with a label normally carries a textual mark too.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkMap {
    #[serde(with = "point_map")]
    pub marks: BTreeMap<Point, MarkSymbol>,
    #[serde(with = "point_map")]
    pub labels: BTreeMap<Point, String>,
}

impl MarkMap {
    /// Set `mark` at `pt` unless something is already marked there.
    pub fn mark_if_unset(&mut self, pt: Point, mark: MarkSymbol) {
        self.marks.entry(pt).or_insert(mark);
    }

    /// Drop every label and the text marks that displayed them.
    pub fn clear_labels(&mut self) {
        self.marks.retain(|_, mark| *mark != MarkSymbol::TextLabel);
        self.labels.clear();
    }
}

/// A next-moves stone that could not be shown because its point was taken.
///
/// Reads as "`color` `move_num` at `collision_stone_color` `label`", for
/// example "Black 13 at White 2".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveCollision {
    pub point: Point,
    pub color: StoneColor,
    pub move_num: usize,
    /// Label of the point the stone was played on.
    pub label: String,
    /// Stone under the label, if any.
    pub collision_stone_color: Option<StoneColor>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flattened {
    pub(super) board: Board,
    pub(super) collisions: Vec<MoveCollision>,
    pub(super) comment: String,
    pub(super) is_on_main_path: bool,
    pub(super) base_move_num: usize,
    pub(super) starting_move_num: usize,
    pub(super) ending_move_num: usize,
    pub(super) mainline_move_num: usize,
    pub(super) mainline_move: Option<Move>,
    pub(super) next_mainline_move: Option<Move>,
    #[serde(with = "point_map")]
    pub(super) stone_map: StoneMap,
    pub(super) mark_map: MarkMap,
    pub(super) ko: Option<Point>,
    #[serde(with = "point_map")]
    pub(super) correct_next_moves: BTreeMap<Point, Move>,
    pub(super) problem_result: Option<ProblemResult>,
}

impl Flattened {
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    /// Stones of the next-moves path that landed on occupied points.
    pub fn collisions(&self) -> &[MoveCollision] {
        &self.collisions
    }

    /// Whether the final position lies on the first variation all the way
    /// from the root.
    pub fn is_on_main_path(&self) -> bool {
        self.is_on_main_path
    }

    /// Node number of the position before the next-moves path.
    pub fn base_move_num(&self) -> usize {
        self.base_move_num
    }

    /// Number of the first next-moves stone. Counting restarts at 1 for
    /// stones that leave the main line.
    pub fn starting_move_num(&self) -> usize {
        self.starting_move_num
    }

    /// Number of the last next-moves stone; equal to the starting number
    /// when there is no path.
    pub fn ending_move_num(&self) -> usize {
        self.ending_move_num
    }

    pub fn mainline_move_num(&self) -> usize {
        self.mainline_move_num
    }

    pub fn next_mainline_move_num(&self) -> usize {
        self.mainline_move_num + 1
    }

    /// Move at the nearest main-line node above the position.
    pub fn mainline_move(&self) -> Option<Move> {
        self.mainline_move
    }

    pub fn next_mainline_move(&self) -> Option<Move> {
        self.next_mainline_move
    }

    pub fn stone_map(&self) -> &StoneMap {
        &self.stone_map
    }

    pub fn marks(&self) -> &BTreeMap<Point, MarkSymbol> {
        &self.mark_map.marks
    }

    pub fn labels(&self) -> &BTreeMap<Point, String> {
        &self.mark_map.labels
    }

    pub fn mark_map(&self) -> &MarkMap {
        &self.mark_map
    }

    /// Ko point of the board before any next moves were replayed.
    pub fn ko(&self) -> Option<Point> {
        self.ko
    }

    pub fn correct_next_moves(&self) -> &BTreeMap<Point, Move> {
        &self.correct_next_moves
    }

    pub fn problem_result(&self) -> Option<ProblemResult> {
        self.problem_result
    }

    pub fn set_problem_result(&mut self, result: ProblemResult) {
        self.problem_result = Some(result);
    }

    /// Shorten numeric labels above 100 to their last two digits, so 101
    /// shows as 1. Multiples of 100 and labels of branches spanning 100
    /// moves or more are kept whole; other labels pass through.
    pub fn auto_truncate_label(&self, label: &str) -> String {
        let Ok(num) = label.parse::<usize>() else {
            return label.to_string();
        };
        let branch_length = self.ending_move_num.saturating_sub(self.starting_move_num);
        if num > 100 && branch_length < 100 && num % 100 != 0 {
            (num % 100).to_string()
        } else {
            num.to_string()
        }
    }
}
