//! Game records and the rules of Go: properties, move trees, the board,
//! treepaths and move numbering

pub mod autonumber;
pub mod color;
pub mod goban;
pub mod movenode;
pub mod movetree;
pub mod problems;
pub mod prop;
pub mod properties;
pub mod treepath;

pub use autonumber::autonumber;
pub use color::{Move, Stone, StoneColor};
pub use goban::{CaptureTracker, ConnectedGroup, Goban, GobanReplay, StoneResult};
pub use movenode::MoveNode;
pub use movetree::{DEFAULT_INTERSECTIONS, MoveTree, TreeRef};
pub use problems::{ProblemConditions, ProblemResult, correct_next_moves, is_correct_position};
pub use prop::Prop;
pub use properties::{Conditions, GameInfoEntry, Mark, MarkPoint, NodeStones, Properties};
pub use treepath::{
    AppliedMoves, AppliedStone, Collision, FindNextMovesOptions, NextMovesPath, Treepath,
    TreepathSpec, apply_next_moves, find_next_moves_path, flatten_move_tree, parse_fragment,
    parse_initial_path, to_fragment_string, to_init_path_string,
};
