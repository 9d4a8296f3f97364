//! Options controlling how a position is flattened.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    orientation::BoardRegion,
    rules::{Goban, Move, ProblemConditions, to_fragment_string},
};

/// When to label the child moves of the position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShowVariations {
    #[default]
    Never,
    Always,
    /// Only when there is a real choice of next move.
    MoreThanOne,
}

impl fmt::Display for ShowVariations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ShowVariations::Never => "never",
            ShowVariations::Always => "always",
            ShowVariations::MoreThanOne => "more-than-one",
        };
        f.write_str(name)
    }
}

impl FromStr for ShowVariations {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "never" => Ok(ShowVariations::Never),
            "always" => Ok(ShowVariations::Always),
            "more-than-one" => Ok(ShowVariations::MoreThanOne),
            _ => Err(crate::Error::ParseShowVariations {
                input: s.to_string(),
                expected: "never, always, more-than-one".to_string(),
            }),
        }
    }
}

/// Options for [`Flattener::flatten`](super::Flattener::flatten).
///
/// # Examples
///
/// ```
/// use go_diagram::flattener::{FlattenOptions, ShowVariations};
/// use go_diagram::orientation::BoardRegion;
///
/// let options = FlattenOptions::new()
///     .with_next_moves_path("0:4")
///     .with_board_region(BoardRegion::Auto)
///     .with_show_variations(ShowVariations::MoreThanOne)
///     .with_mark_last_move(true);
/// assert_eq!(options.next_moves_path.as_deref(), Some("0:4"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlattenOptions {
    /// Board for the starting position. Replayed from the tree when absent.
    pub goban: Option<Goban>,
    /// Initial treepath (see [`parse_initial_path`](crate::rules::parse_initial_path))
    /// applied from the root before flattening.
    pub init_position: Option<String>,
    /// Treepath fragment of moves to show with number labels.
    pub next_moves_path: Option<String>,
    /// Number of the first next move. Worked out from the position when
    /// absent.
    pub starting_move_num: Option<usize>,
    pub board_region: BoardRegion,
    /// Crop to the stones of the next-moves path only.
    pub auto_box_crop_on_next_moves: bool,
    /// Allowed regions in order of preference. A chosen region outside the
    /// list falls back to the whole board.
    pub region_restrictions: Option<Vec<BoardRegion>>,
    pub show_variations: ShowVariations,
    pub mark_last_move: bool,
    /// Child move to highlight among the variation labels.
    pub selected_next_move: Option<Move>,
    /// Mark the ko point. Ignored when there is a next-moves path.
    pub mark_ko: bool,
    /// Drop the position's own marks and labels. Next-moves labels stay.
    pub clear_marks: bool,
    /// Drop every label, including next-moves labels.
    pub ignore_labels: bool,
    /// Conditions identifying correct answers in a problem tree. Correct
    /// child moves get their own variation mark.
    pub problem_conditions: ProblemConditions,
}

impl FlattenOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_goban(mut self, goban: Goban) -> Self {
        self.goban = Some(goban);
        self
    }

    pub fn with_init_position(mut self, init_position: impl Into<String>) -> Self {
        self.init_position = Some(init_position.into());
        self
    }

    pub fn with_next_moves_path(mut self, path: impl Into<String>) -> Self {
        self.next_moves_path = Some(path.into());
        self
    }

    /// Set the next-moves path from variation indices.
    pub fn with_next_moves(self, next_moves: &[usize]) -> Self {
        self.with_next_moves_path(to_fragment_string(next_moves))
    }

    pub fn with_starting_move_num(mut self, num: usize) -> Self {
        self.starting_move_num = Some(num);
        self
    }

    pub fn with_board_region(mut self, region: BoardRegion) -> Self {
        self.board_region = region;
        self
    }

    pub fn with_auto_box_crop_on_next_moves(mut self, enabled: bool) -> Self {
        self.auto_box_crop_on_next_moves = enabled;
        self
    }

    pub fn with_region_restrictions(mut self, regions: Vec<BoardRegion>) -> Self {
        self.region_restrictions = Some(regions);
        self
    }

    pub fn with_show_variations(mut self, show: ShowVariations) -> Self {
        self.show_variations = show;
        self
    }

    pub fn with_mark_last_move(mut self, enabled: bool) -> Self {
        self.mark_last_move = enabled;
        self
    }

    pub fn with_selected_next_move(mut self, mv: Move) -> Self {
        self.selected_next_move = Some(mv);
        self
    }

    pub fn with_mark_ko(mut self, enabled: bool) -> Self {
        self.mark_ko = enabled;
        self
    }

    pub fn with_clear_marks(mut self, enabled: bool) -> Self {
        self.clear_marks = enabled;
        self
    }

    pub fn with_ignore_labels(mut self, enabled: bool) -> Self {
        self.ignore_labels = enabled;
        self
    }

    pub fn with_problem_conditions(mut self, conditions: ProblemConditions) -> Self {
        self.problem_conditions = conditions;
        self
    }
}
