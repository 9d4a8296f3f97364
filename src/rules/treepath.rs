//! Treepaths: naming a route through the variations of a game record.
//!
//! A treepath is a list of variation indices, one per step down the tree.
//! `[0, 1, 0]` takes the first child, then the second, then the first again.
//! Paths also have a compact text form:
//!
//! ```text
//! 0.1+     take variation 0, then variation 1, then follow the mainline to the end
//! 0.1:2    take variation 0, then variation 1 twice
//! ```
//!
//! A *fragment* reads every number as a variation. An *initial path* reads
//! the first number as a move number along the mainline, so `3.1` means
//! "three mainline moves, then variation 1" (`[0, 0, 0, 1]`).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::{color::StoneColor, goban::Goban, movetree::TreeRef};
use crate::{Error, Result, point::Point};

/// Variation indices from some starting node downwards.
pub type Treepath = Vec<usize>;

/// How many mainline steps `+` expands to.
pub const TO_END_LEN: usize = 500;

/// Default cap on how far [`find_next_moves_path`] walks back.
pub const DEFAULT_MINUS_MOVES: usize = 1000;

/// A path of [`TO_END_LEN`] zeros: "follow the mainline to the end".
pub fn to_end() -> Treepath {
    vec![0; TO_END_LEN]
}

/// The accepted shapes of an initial position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TreepathSpec<'a> {
    /// No position given: the root.
    #[default]
    None,
    /// A mainline move number.
    Number(usize),
    /// Compact text form.
    Text(&'a str),
    /// An already structural path, used as is.
    Path(Treepath),
}

impl From<usize> for TreepathSpec<'_> {
    fn from(n: usize) -> Self {
        TreepathSpec::Number(n)
    }
}

impl<'a> From<&'a str> for TreepathSpec<'a> {
    fn from(s: &'a str) -> Self {
        TreepathSpec::Text(s)
    }
}

impl From<Treepath> for TreepathSpec<'_> {
    fn from(path: Treepath) -> Self {
        TreepathSpec::Path(path)
    }
}

fn treepath_error(input: &str, reason: impl Into<String>) -> Error {
    let err = Error::Treepath {
        input: input.to_string(),
        reason: reason.into(),
    };
    debug!(%err, "treepath rejected");
    err
}

/// Parse an initial position into a path from the root.
///
/// ```text
/// 0       => []
/// 53      => [0; 53]
/// 2.3     => [0, 0, 3]
/// 0.1+    => [1, 0, 0, ...]
/// 0.0:3.1 => [0, 0, 0, 1]
/// ```
pub fn parse_initial_path(position: TreepathSpec<'_>) -> Result<Treepath> {
    let text = match position {
        TreepathSpec::None => return Ok(Vec::new()),
        TreepathSpec::Number(n) => return Ok(vec![0; n]),
        TreepathSpec::Path(path) => return Ok(path),
        TreepathSpec::Text(text) => text,
    };
    if text == "+" {
        return Ok(to_end());
    }

    let digits = text.bytes().take_while(u8::is_ascii_digit).count();
    let move_num: usize = if digits == 0 {
        0
    } else {
        text[..digits]
            .parse()
            .map_err(|_| treepath_error(text, "move number is too large"))?
    };
    let mut out = vec![0; move_num];

    let rest = &text[digits..];
    match rest.chars().next() {
        None => Ok(out),
        Some('.') => {
            out.extend(parse_fragment(&rest[1..])?);
            Ok(out)
        }
        Some('+') => {
            out.extend(to_end());
            Ok(out)
        }
        Some(other) => Err(treepath_error(text, format!("unexpected token '{other}'"))),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FragmentState {
    Variation,
    Separator,
    Multiplier,
}

// Splits on '.', ':' and '+', keeping the separators. Consecutive separators
// produce an empty token between them.
fn tokenize(text: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start = 0;
    for (i, c) in text.char_indices() {
        if matches!(c, '.' | ':' | '+') {
            tokens.push(&text[start..i]);
            tokens.push(&text[i..i + 1]);
            start = i + 1;
        }
    }
    tokens.push(&text[start..]);
    tokens
}

/// Parse a fragment, where every number is a variation index.
///
/// ```text
/// 0            => [0]
/// 53           => [53]
/// 2.3          => [2, 3]
/// 0:4          => [0, 0, 0, 0]
/// 1+           => [1, 0, 0, ...]
/// 1.2:1.0.2:3  => [1, 2, 0, 2, 2, 2]
/// ```
///
/// A multiplier applies to the single variation before it, so `0:2:3` is an
/// error. `0:0` and `0:1` both mean `[0]`.
pub fn parse_fragment(text: &str) -> Result<Treepath> {
    if text.is_empty() {
        return Ok(Vec::new());
    }
    let mut out = Vec::new();
    let mut state = FragmentState::Variation;
    let mut prev_variation: Option<usize> = None;
    for token in tokenize(text) {
        if state == FragmentState::Separator {
            state = match token {
                "." => FragmentState::Variation,
                ":" => FragmentState::Multiplier,
                "+" => {
                    out.extend(to_end());
                    return Ok(out);
                }
                _ => return Err(treepath_error(text, format!("unexpected token '{token}'"))),
            };
            continue;
        }

        if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
            return Err(treepath_error(
                text,
                format!("expected a number but found '{token}'"),
            ));
        }
        let num: usize = token
            .parse()
            .map_err(|_| treepath_error(text, format!("number '{token}' is too large")))?;
        if state == FragmentState::Variation {
            out.push(num);
            prev_variation = Some(num);
        } else {
            let Some(variation) = prev_variation.take() else {
                return Err(treepath_error(text, "multiplier without a variation"));
            };
            // The variation was already pushed once.
            out.extend(std::iter::repeat_n(variation, num.saturating_sub(1)));
        }
        state = FragmentState::Separator;
    }
    Ok(out)
}

/// Canonical fragment text. Runs of two or more equal entries are written as
/// `v:n`; the empty path is the empty string.
///
/// ```text
/// [2, 0, 1, 2, 6]        => "2.0.1.2.6"
/// [0, 0, 0, 0]           => "0:4"
/// [0, 0, 0, 0, 1, 1, 1]  => "0:4.1:3"
/// ```
pub fn to_fragment_string(path: &[usize]) -> String {
    let mut components = Vec::new();
    let mut iter = path.iter().peekable();
    while let Some(&variation) = iter.next() {
        let mut repeated = 1;
        while iter.next_if_eq(&&variation).is_some() {
            repeated += 1;
        }
        if repeated < 2 {
            components.push(variation.to_string());
        } else {
            components.push(format!("{variation}:{repeated}"));
        }
    }
    components.join(".")
}

/// Canonical initial-path text: leading zeros collapse into a move number.
///
/// ```text
/// []         => "0"
/// [0, 0, 0]  => "3"
/// [0, 0, 1]  => "2.1"
/// ```
pub fn to_init_path_string(path: &[usize]) -> String {
    let move_num = path.iter().take_while(|v| **v == 0).count();
    let fragment = to_fragment_string(&path[move_num..]);
    if fragment.is_empty() {
        move_num.to_string()
    } else {
        format!("{move_num}.{fragment}")
    }
}

/// Options for [`find_next_moves_path`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FindNextMovesOptions {
    /// Where to start. Defaults to the tree's cursor.
    pub init_treepath: Option<Treepath>,
    /// Upper bound on the length of the returned next-moves path.
    pub minus_moves_override: Option<usize>,
    /// Stop walking back at a commented node.
    pub break_on_comment: bool,
}

impl Default for FindNextMovesOptions {
    fn default() -> Self {
        Self {
            init_treepath: None,
            minus_moves_override: None,
            break_on_comment: true,
        }
    }
}

impl FindNextMovesOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_init_treepath(mut self, treepath: Treepath) -> Self {
        self.init_treepath = Some(treepath);
        self
    }

    pub fn with_minus_moves_override(mut self, minus_moves: usize) -> Self {
        self.minus_moves_override = Some(minus_moves);
        self
    }

    pub fn with_break_on_comment(mut self, break_on_comment: bool) -> Self {
        self.break_on_comment = break_on_comment;
        self
    }
}

/// Result of [`find_next_moves_path`].
#[derive(Debug, Clone)]
pub struct NextMovesPath<'a> {
    /// The start position.
    pub position: TreeRef<'a>,
    /// Path from the root to `position`.
    pub treepath: Treepath,
    /// Path from `position` to the final position.
    pub next_moves: Treepath,
}

/// Walk back from a final position to find a sensible start for move
/// numbering.
///
/// The walk stops at the root, after `minus_moves_override` steps (default
/// [`DEFAULT_MINUS_MOVES`]), at a commented node when `break_on_comment` is
/// set, or on re-entering the mainline from a variation. The comment check
/// runs first at each step.
pub fn find_next_moves_path<'a>(
    tree: TreeRef<'a>,
    options: &FindNextMovesOptions,
) -> NextMovesPath<'a> {
    let init = match &options.init_treepath {
        Some(path) => path.clone(),
        None => tree.treepath_to_here(),
    };
    let minus_moves = options
        .minus_moves_override
        .filter(|n| *n > 0)
        .unwrap_or(DEFAULT_MINUS_MOVES);

    let mut here = tree.tree_from_root(&init);
    let start_mainline = here.on_mainline();
    let mut next_moves = Vec::new();
    while next_moves.len() < minus_moves {
        let Some(parent) = here.parent() else {
            break;
        };
        next_moves.push(here.node().var_num());
        here = parent;
        let commented = here.properties().get_comment().is_some_and(|c| !c.is_empty());
        if options.break_on_comment && commented {
            break;
        }
        if !start_mainline && here.on_mainline() {
            break;
        }
    }
    next_moves.reverse();
    trace!(?next_moves, "found next moves path");
    NextMovesPath {
        position: here,
        treepath: here.treepath_to_here(),
        next_moves,
    }
}

/// Why a replayed stone landed on an occupied point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Collision {
    /// The point was already occupied before the replay started.
    Existing,
    /// The point was played earlier in the same replay, by the stone at this
    /// index of [`AppliedMoves::stones`].
    Index(usize),
}

/// A move placed while replaying a path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedStone {
    pub point: Point,
    pub color: StoneColor,
    pub collision: Option<Collision>,
}

/// Result of [`apply_next_moves`].
#[derive(Debug, Clone)]
pub struct AppliedMoves<'a> {
    /// The position after the last step.
    pub position: TreeRef<'a>,
    /// The board after the replay. A colliding stone is on it only when its
    /// point was empty again by the time it was played.
    pub goban: Goban,
    /// Every move with a point, in play order. Passes are skipped.
    pub stones: Vec<AppliedStone>,
}

/// Replay `next_moves` from `tree`'s cursor onto a copy of `goban`.
///
/// A move onto an occupied point is still recorded, tagged with its
/// [`Collision`]. The replay stops early if a step names a missing variation.
pub fn apply_next_moves<'a>(
    tree: TreeRef<'a>,
    goban: &Goban,
    next_moves: &[usize],
) -> AppliedMoves<'a> {
    let mut replay = goban.clone();
    let mut here = tree;
    let mut stones: Vec<AppliedStone> = Vec::new();
    let mut placed: HashMap<Point, usize> = HashMap::new();
    for (step, variation) in next_moves.iter().enumerate() {
        let Some(child) = here.child(*variation) else {
            trace!(step, variation, "next moves path ran off the tree");
            break;
        };
        here = child;
        let Some(mv) = here.properties().get_move() else {
            continue;
        };
        let Some(point) = mv.point else {
            continue;
        };

        let occupied = goban.get_stone(point).map(|c| c.is_stone()).unwrap_or(false);
        let collision = if occupied {
            Some(Collision::Existing)
        } else {
            placed.get(&point).map(|idx| Collision::Index(*idx))
        };
        // A colliding point may have been emptied by a capture since.
        let result = replay.add_stone(point, mv.color);
        if collision.is_some() {
            debug!(%point, ?collision, placed = result.successful, "replayed move collides");
        }
        placed.insert(point, stones.len());
        stones.push(AppliedStone {
            point,
            color: mv.color,
            collision,
        });
    }
    AppliedMoves {
        position: here,
        goban: replay,
        stones,
    }
}

/// Every path from `tree`'s cursor down to a leaf, in variation order.
pub fn flatten_move_tree(tree: TreeRef<'_>) -> Vec<Treepath> {
    let mut out = Vec::new();
    let mut stack: Vec<(TreeRef<'_>, Treepath)> = tree
        .node()
        .children()
        .iter()
        .rev()
        .map(|c| {
            let child = tree.at(*c);
            (child, vec![child.node().var_num()])
        })
        .collect();
    while let Some((here, path)) = stack.pop() {
        let children = here.node().children();
        if children.is_empty() {
            out.push(path);
            continue;
        }
        for c in children.iter().rev() {
            let child = here.at(*c);
            let mut next = path.clone();
            next.push(child.node().var_num());
            stack.push((child, next));
        }
    }
    out
}
