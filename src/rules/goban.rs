//! The board: stone placement, capture and ko

use std::{collections::HashSet, fmt};

use serde::{Deserialize, Deserializer, Serialize, de};
use tracing::{debug, trace};

use super::{
    color::{Stone, StoneColor},
    movetree::TreeRef,
};
use crate::{
    Error, Result,
    point::{MAX_BOARD_SIZE, Point},
};

/// Outcome of [`Goban::add_stone`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoneResult {
    pub successful: bool,
    pub captures: Vec<Point>,
    /// Set when the placement created a ko.
    pub ko_pt: Option<Point>,
}

impl StoneResult {
    fn failure() -> Self {
        Self {
            successful: false,
            captures: Vec::new(),
            ko_pt: None,
        }
    }
}

/// A same-colored group reached by flood fill.
///
/// `liberties` counts every (stone, empty neighbour) adjacency, so an empty
/// point touching two stones of the group counts twice. Only zero versus
/// non-zero matters to the capture rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectedGroup {
    pub color: StoneColor,
    pub group: Vec<Point>,
    pub liberties: usize,
    seen: HashSet<Point>,
}

impl ConnectedGroup {
    fn new(color: StoneColor) -> Self {
        Self {
            color,
            group: Vec::new(),
            liberties: 0,
            seen: HashSet::new(),
        }
    }

    pub fn has_seen(&self, pt: Point) -> bool {
        self.seen.contains(&pt)
    }

    pub fn len(&self) -> usize {
        self.group.len()
    }

    pub fn is_empty(&self) -> bool {
        self.group.is_empty()
    }
}

/// Stones removed while loading a node, keyed by the color that was captured.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureTracker {
    pub black: Vec<Point>,
    pub white: Vec<Point>,
}

impl CaptureTracker {
    pub fn of(&self, color: StoneColor) -> &[Point] {
        match color {
            StoneColor::Black => &self.black,
            StoneColor::White => &self.white,
            StoneColor::Empty => &[],
        }
    }

    fn push(&mut self, captured: StoneColor, pt: Point) {
        match captured {
            StoneColor::Black => self.black.push(pt),
            StoneColor::White => self.white.push(pt),
            StoneColor::Empty => {}
        }
    }

    pub fn is_empty(&self) -> bool {
        self.black.is_empty() && self.white.is_empty()
    }
}

/// A board materialized from a tree position, with per-step history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GobanReplay {
    pub goban: Goban,
    /// Captures made at each step below the root.
    pub captures: Vec<CaptureTracker>,
    /// Non-empty points cleared by `AE` at each step below the root.
    pub clear_history: Vec<Vec<Stone>>,
}

/// Square board of `size` x `size` intersections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Goban {
    size: i32,
    /// Row-major: index `y * size + x`.
    stones: Vec<StoneColor>,
    ko: Option<Point>,
}

#[derive(Deserialize)]
struct GobanWire {
    size: i32,
    stones: Vec<StoneColor>,
    ko: Option<Point>,
}

impl TryFrom<GobanWire> for Goban {
    type Error = Error;

    fn try_from(wire: GobanWire) -> Result<Self> {
        let mut goban = Goban::new(wire.size)?;
        if wire.stones.len() != goban.stones.len() {
            return Err(Error::InvalidGoban {
                reason: format!(
                    "{} cells for a {}x{} board",
                    wire.stones.len(),
                    wire.size,
                    wire.size
                ),
            });
        }
        goban.stones = wire.stones;
        if let Some(ko) = wire.ko {
            goban.check_bounds(ko)?;
            goban.ko = Some(ko);
        }
        Ok(goban)
    }
}

impl<'de> Deserialize<'de> for Goban {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let wire = GobanWire::deserialize(deserializer)?;
        Goban::try_from(wire).map_err(de::Error::custom)
    }
}

impl Goban {
    /// An empty board. `size` must be in `1..=MAX_BOARD_SIZE`.
    pub fn new(size: i32) -> Result<Self> {
        if !(1..=MAX_BOARD_SIZE).contains(&size) {
            return Err(Error::InvalidBoardSize { size });
        }
        let cells = (size * size) as usize;
        Ok(Self {
            size,
            stones: vec![StoneColor::Empty; cells],
            ko: None,
        })
    }

    /// Replay a tree from its root along `treepath`: root placements first,
    /// then for each step the node's `AE` clears followed by its placements
    /// and move. Stops early at a leaf.
    ///
    /// Fails when the root's `SZ` is not a usable board size.
    pub fn from_movetree(tree: TreeRef<'_>, treepath: &[usize]) -> Result<GobanReplay> {
        let mut goban = Goban::new(tree.intersections())?;
        let mut here = tree.root();
        goban.load_stones_from_movetree(here);
        let mut captures = Vec::with_capacity(treepath.len());
        let mut clear_history = Vec::with_capacity(treepath.len());
        for step in treepath {
            if here.node().num_children() == 0 {
                break;
            }
            here = here.move_down(*step);
            clear_history.push(goban.apply_clear_locations_from_movetree(here));
            captures.push(goban.load_stones_from_movetree(here));
        }
        Ok(GobanReplay {
            goban,
            captures,
            clear_history,
        })
    }

    /// Board for the position at the view's cursor.
    pub fn from_position(tree: TreeRef<'_>) -> Result<Goban> {
        Ok(Goban::from_movetree(tree, &tree.treepath_to_here())?.goban)
    }

    pub fn intersections(&self) -> i32 {
        self.size
    }

    pub fn in_bounds(&self, pt: Point) -> bool {
        (0..self.size).contains(&pt.x()) && (0..self.size).contains(&pt.y())
    }

    fn check_bounds(&self, pt: Point) -> Result<()> {
        if self.in_bounds(pt) {
            Ok(())
        } else {
            Err(Error::PointOutOfBounds {
                x: pt.x(),
                y: pt.y(),
                size: self.size,
            })
        }
    }

    // Callers guarantee `pt` is in bounds.
    fn cell(&self, pt: Point) -> StoneColor {
        self.stones[(pt.y() * self.size + pt.x()) as usize]
    }

    fn put(&mut self, pt: Point, color: StoneColor) {
        let idx = (pt.y() * self.size + pt.x()) as usize;
        self.stones[idx] = color;
    }

    pub fn get_stone(&self, pt: Point) -> Result<StoneColor> {
        self.check_bounds(pt)?;
        Ok(self.cell(pt))
    }

    /// Raw write with no rule checks. Leaves the ko untouched.
    pub fn set_color(&mut self, pt: Point, color: StoneColor) -> Result<()> {
        self.check_bounds(pt)?;
        self.put(pt, color);
        Ok(())
    }

    pub fn get_ko(&self) -> Option<Point> {
        self.ko
    }

    /// Set the ko point. Out-of-bounds points are ignored.
    pub fn set_ko(&mut self, pt: Point) {
        if self.in_bounds(pt) {
            self.ko = Some(pt);
        }
    }

    pub fn clear_ko(&mut self) {
        self.ko = None;
    }

    /// In bounds, not the ko point, and empty.
    pub fn placeable(&self, pt: Point) -> bool {
        self.in_bounds(pt) && self.ko != Some(pt) && self.cell(pt) == StoneColor::Empty
    }

    /// Remove whatever is at `pt`, returning it. Always clears the ko.
    pub fn clear_stone(&mut self, pt: Point) -> Result<StoneColor> {
        self.check_bounds(pt)?;
        self.clear_ko();
        let color = self.cell(pt);
        self.put(pt, StoneColor::Empty);
        Ok(color)
    }

    /// Every stone on the board, in row-major order.
    pub fn get_all_placed_stones(&self) -> Vec<Stone> {
        let mut out = Vec::new();
        for y in 0..self.size {
            for x in 0..self.size {
                let pt = Point::new(x, y);
                let color = self.cell(pt);
                if color.is_stone() {
                    out.push(Stone::new(pt, color));
                }
            }
        }
        out
    }

    /// In-bounds orthogonal neighbours: left, right, up, down.
    pub fn neighbors(&self, pt: Point) -> Vec<Point> {
        [(-1, 0), (1, 0), (0, -1), (0, 1)]
            .into_iter()
            .map(|(dx, dy)| pt.translate(dx, dy))
            .filter(|p| self.in_bounds(*p))
            .collect()
    }

    /// Flood fill the `color` group containing `pt`. The group is empty when
    /// `pt` does not hold a `color` stone.
    pub fn find_connected(&self, pt: Point, color: StoneColor) -> ConnectedGroup {
        let mut group = ConnectedGroup::new(color);
        if !self.in_bounds(pt) {
            return group;
        }
        let mut stack = vec![pt];
        while let Some(next) = stack.pop() {
            if group.has_seen(next) {
                continue;
            }
            let stone = self.cell(next);
            if stone == color && color.is_stone() {
                group.seen.insert(next);
                group.group.push(next);
                stack.extend(self.neighbors(next));
            } else if stone == StoneColor::Empty {
                group.liberties += 1;
            }
        }
        group
    }

    // Opponent groups next to `pt` left without liberties.
    fn find_captured_groups(&self, pt: Point, color: StoneColor) -> Vec<ConnectedGroup> {
        let opponent = color.opponent();
        let mut groups: Vec<ConnectedGroup> = Vec::new();
        for nbor in self.neighbors(pt) {
            if groups.iter().any(|g| g.has_seen(nbor)) {
                continue;
            }
            let group = self.find_connected(nbor, opponent);
            if !group.is_empty() {
                groups.push(group);
            }
        }
        groups.retain(|g| g.liberties == 0);
        groups
    }

    /// Place a stone under capture, suicide and ko rules.
    ///
    /// Fails without touching the board when the point is out of bounds,
    /// occupied, the ko point, or the move would be suicide.
    pub fn add_stone(&mut self, pt: Point, color: StoneColor) -> StoneResult {
        if !color.is_stone() || !self.placeable(pt) {
            trace!(%pt, %color, "stone not placeable");
            return StoneResult::failure();
        }
        self.put(pt, color);

        let captured_groups = self.find_captured_groups(pt, color);
        if captured_groups.is_empty() && self.find_connected(pt, color).liberties == 0 {
            self.put(pt, StoneColor::Empty);
            trace!(%pt, %color, "suicide rejected");
            return StoneResult::failure();
        }

        self.clear_ko();
        let captures: Vec<Point> = captured_groups
            .into_iter()
            .flat_map(|g| g.group)
            .collect();
        for cap in &captures {
            self.put(*cap, StoneColor::Empty);
        }

        let mut ko_pt = None;
        if let [cap] = captures.as_slice() {
            let own = self.find_connected(pt, color);
            if own.len() == 1 && own.liberties == 1 {
                debug!(%pt, ko = %cap, "ko created");
                self.ko = Some(*cap);
                ko_pt = Some(*cap);
            }
        }
        if !captures.is_empty() {
            debug!(%pt, %color, count = captures.len(), "stones captured");
        }
        StoneResult {
            successful: true,
            captures,
            ko_pt,
        }
    }

    /// Whether `add_stone` would succeed. The board, including the ko, is left
    /// exactly as it was.
    pub fn test_add_stone(&mut self, pt: Point, color: StoneColor) -> bool {
        let ko = self.ko;
        let result = self.add_stone(pt, color);
        if result.successful {
            self.put(pt, StoneColor::Empty);
            for cap in &result.captures {
                self.put(*cap, color.opponent());
            }
        }
        self.ko = ko;
        result.successful
    }

    /// Apply the node's `AB`, `AW` and move. Illegal placements are skipped.
    pub fn load_stones_from_movetree(&mut self, node: TreeRef<'_>) -> CaptureTracker {
        let props = node.properties();
        let mut captures = CaptureTracker::default();
        let mut stones = Vec::new();
        for color in [StoneColor::Black, StoneColor::White] {
            stones.extend(
                props
                    .get_placements_as_points(color)
                    .into_iter()
                    .map(|pt| Stone::new(pt, color)),
            );
        }
        if let Some(mv) = props.get_move() {
            if let Some(pt) = mv.point {
                stones.push(Stone::new(pt, mv.color));
            }
        }
        for stone in stones {
            let result = self.add_stone(stone.point, stone.color);
            if result.successful {
                for cap in result.captures {
                    captures.push(stone.color.opponent(), cap);
                }
            } else {
                debug!(point = %stone.point, color = %stone.color, "skipping illegal placement");
            }
        }
        captures
    }

    /// Clear the node's `AE` points, returning the stones that were removed.
    pub fn apply_clear_locations_from_movetree(&mut self, node: TreeRef<'_>) -> Vec<Stone> {
        let mut cleared = Vec::new();
        for pt in node.properties().get_clear_locations_as_points() {
            match self.clear_stone(pt) {
                Ok(color) if color.is_stone() => cleared.push(Stone::new(pt, color)),
                Ok(_) => {}
                Err(err) => debug!(%err, "ignoring clear location"),
            }
        }
        cleared
    }
}

impl fmt::Display for Goban {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.size {
            let row: String = (0..self.size)
                .map(|x| self.cell(Point::new(x, y)).to_char())
                .collect();
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{MoveTree, Prop};

    const BLACK: StoneColor = StoneColor::Black;
    const WHITE: StoneColor = StoneColor::White;
    const EMPTY: StoneColor = StoneColor::Empty;

    fn pt(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn test_invalid_size() {
        assert!(Goban::new(0).is_err());
        assert!(Goban::new(-3).is_err());
        assert!(matches!(
            Goban::new(50_000),
            Err(Error::InvalidBoardSize { size: 50_000 })
        ));
        assert_eq!(Goban::new(9).unwrap().intersections(), 9);
        assert_eq!(Goban::new(MAX_BOARD_SIZE).unwrap().intersections(), 52);
    }

    #[test]
    fn test_unusable_sz_fails_replay() {
        let mt = MoveTree::with_intersections(50_000);
        assert!(matches!(
            Goban::from_position(mt.new_tree_ref()),
            Err(Error::InvalidBoardSize { .. })
        ));
        let mt = MoveTree::with_intersections(0);
        assert!(Goban::from_movetree(mt.new_tree_ref(), &[]).is_err());
    }

    #[test]
    fn test_deserialize_checks_cells() {
        let mut goban = Goban::new(3).unwrap();
        goban.add_stone(pt(1, 1), BLACK);
        let json = serde_json::to_value(&goban).unwrap();
        let back: Goban = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(back, goban);

        let mut short = json.clone();
        short["stones"].as_array_mut().unwrap().pop();
        assert!(serde_json::from_value::<Goban>(short).is_err());

        let mut huge = json.clone();
        huge["size"] = serde_json::json!(50_000);
        assert!(serde_json::from_value::<Goban>(huge).is_err());

        let mut stray_ko = json;
        stray_ko["ko"] = serde_json::to_value(pt(5, 5)).unwrap();
        assert!(serde_json::from_value::<Goban>(stray_ko).is_err());
    }

    #[test]
    fn test_successful_add_stone() {
        let mut goban = Goban::new(19).unwrap();
        let result = goban.add_stone(pt(1, 1), BLACK);
        assert!(result.successful);
        assert!(result.captures.is_empty());
        assert_eq!(goban.get_stone(pt(1, 1)).unwrap(), BLACK);
    }

    #[test]
    fn test_out_of_bounds_fails() {
        let mut goban = Goban::new(19).unwrap();
        assert!(!goban.add_stone(pt(-1, 1), BLACK).successful);
        assert!(!goban.add_stone(pt(2, 19), BLACK).successful);
        assert!(goban.get_stone(pt(2, 19)).is_err());
        assert!(goban.set_color(pt(19, 0), WHITE).is_err());
    }

    #[test]
    fn test_occupied_fails() {
        let mut goban = Goban::new(19).unwrap();
        goban.add_stone(pt(1, 1), BLACK);
        let result = goban.add_stone(pt(1, 1), WHITE);
        assert!(!result.successful);
        assert_eq!(goban.get_stone(pt(1, 1)).unwrap(), BLACK);
    }

    #[test]
    fn test_capture_center() {
        let mut goban = Goban::new(9).unwrap();
        goban.add_stone(pt(1, 1), BLACK);
        goban.add_stone(pt(0, 2), BLACK);
        goban.add_stone(pt(2, 2), BLACK);
        goban.add_stone(pt(1, 2), WHITE);
        let result = goban.add_stone(pt(1, 3), BLACK);
        assert!(result.successful);
        assert_eq!(result.captures, vec![pt(1, 2)]);
        assert_eq!(result.ko_pt, None);
        assert_eq!(goban.get_stone(pt(1, 2)).unwrap(), EMPTY);
    }

    #[test]
    fn test_capture_side_and_corner() {
        let mut goban = Goban::new(9).unwrap();
        goban.add_stone(pt(0, 1), BLACK);
        goban.add_stone(pt(0, 3), BLACK);
        goban.add_stone(pt(0, 2), WHITE);
        let result = goban.add_stone(pt(1, 2), BLACK);
        assert_eq!(result.captures, vec![pt(0, 2)]);

        let mut goban = Goban::new(9).unwrap();
        goban.add_stone(pt(0, 1), BLACK);
        goban.add_stone(pt(0, 0), WHITE);
        let result = goban.add_stone(pt(1, 0), BLACK);
        assert_eq!(result.captures, vec![pt(0, 0)]);
    }

    #[test]
    fn test_suicide_rejected() {
        let mut goban = Goban::new(9).unwrap();
        goban.add_stone(pt(1, 0), BLACK);
        goban.add_stone(pt(0, 1), BLACK);
        let result = goban.add_stone(pt(0, 0), WHITE);
        assert!(!result.successful);
        assert_eq!(goban.get_stone(pt(0, 0)).unwrap(), EMPTY);
    }

    #[test]
    fn test_neighbors() {
        let goban = Goban::new(19).unwrap();
        assert_eq!(goban.neighbors(pt(0, 0)), vec![pt(1, 0), pt(0, 1)]);
        assert_eq!(
            goban.neighbors(pt(18, 15)),
            vec![pt(17, 15), pt(18, 14), pt(18, 16)]
        );
        assert_eq!(
            goban.neighbors(pt(10, 11)),
            vec![pt(9, 11), pt(11, 11), pt(10, 10), pt(10, 12)]
        );
    }

    #[test]
    fn test_find_connected() {
        let mut goban = Goban::new(19).unwrap();
        // .OX..
        // OXO..
        // .OO..
        // O..O.
        for (p, c) in [
            (pt(1, 0), WHITE),
            (pt(2, 0), BLACK),
            (pt(0, 1), WHITE),
            (pt(1, 1), BLACK),
            (pt(2, 1), WHITE),
            (pt(1, 2), WHITE),
            (pt(2, 2), WHITE),
            (pt(0, 3), WHITE),
            (pt(3, 3), WHITE),
        ] {
            goban.set_color(p, c).unwrap();
        }
        let g = goban.find_connected(pt(2, 2), WHITE);
        assert_eq!(g.liberties, 5);
        assert_eq!(g.len(), 3);
        assert!(goban.find_connected(pt(2, 2), BLACK).is_empty());
        assert_eq!(goban.find_connected(pt(1, 0), WHITE).liberties, 1);
        assert_eq!(goban.find_connected(pt(2, 0), BLACK).liberties, 1);
        assert_eq!(goban.find_connected(pt(0, 1), WHITE).liberties, 2);
        assert_eq!(goban.find_connected(pt(1, 1), BLACK).liberties, 0);
        assert_eq!(goban.find_connected(pt(0, 3), WHITE).liberties, 3);
        assert_eq!(goban.find_connected(pt(3, 3), WHITE).liberties, 4);
    }

    #[test]
    fn test_ko_sequence() {
        let mut goban = Goban::new(19).unwrap();
        // .OX.
        // OX.X
        // .OX.
        // O...
        for (p, c) in [
            (pt(1, 0), WHITE),
            (pt(2, 0), BLACK),
            (pt(0, 1), WHITE),
            (pt(1, 1), BLACK),
            (pt(3, 1), BLACK),
            (pt(1, 2), WHITE),
            (pt(2, 2), BLACK),
            (pt(0, 3), WHITE),
        ] {
            goban.set_color(p, c).unwrap();
        }
        let result = goban.add_stone(pt(0, 0), BLACK);
        assert!(result.successful);
        assert_eq!(result.ko_pt, Some(pt(1, 0)));
        assert_eq!(goban.get_ko(), Some(pt(1, 0)));
        assert!(!goban.placeable(pt(1, 0)));
        assert!(!goban.add_stone(pt(1, 0), WHITE).successful);

        goban.clear_ko();
        let result = goban.add_stone(pt(1, 0), WHITE);
        assert_eq!(result.ko_pt, Some(pt(0, 0)));

        goban.clear_ko();
        let result = goban.add_stone(pt(2, 1), WHITE);
        assert_eq!(result.ko_pt, Some(pt(1, 1)));
        goban.clear_stone(pt(4, 4)).unwrap();
        assert_eq!(goban.get_ko(), None);

        let result = goban.add_stone(pt(1, 1), BLACK);
        assert_eq!(result.ko_pt, Some(pt(2, 1)));
        goban.add_stone(pt(4, 4), BLACK);
        assert_eq!(goban.get_ko(), None);
    }

    #[test]
    fn test_test_add_stone_leaves_board_alone() {
        let mut goban = Goban::new(19).unwrap();
        // .OX.
        // OX..
        // .O..
        // O...
        goban.add_stone(pt(1, 0), WHITE);
        goban.add_stone(pt(2, 0), BLACK);
        goban.add_stone(pt(0, 1), WHITE);
        goban.add_stone(pt(1, 1), BLACK);
        goban.add_stone(pt(1, 2), WHITE);
        goban.add_stone(pt(0, 3), WHITE);
        let before = goban.clone();

        assert!(goban.test_add_stone(pt(0, 0), WHITE));
        assert!(goban.test_add_stone(pt(0, 0), BLACK));
        assert!(!goban.test_add_stone(pt(0, 1), BLACK));
        assert!(!goban.test_add_stone(pt(2, 0), WHITE));
        assert!(!goban.test_add_stone(pt(0, 2), BLACK));
        assert!(goban.test_add_stone(pt(0, 2), WHITE));
        assert_eq!(goban, before);
    }

    #[test]
    fn test_load_and_clear_from_movetree() {
        let mut mt = MoveTree::new();
        for v in ["ba", "ab", "bc", "ac"] {
            mt.properties_mut().add(Prop::AB, v);
        }
        mt.properties_mut().add(Prop::AW, "bb").add(Prop::AW, "cc");
        mt.add_node().properties_mut().add(Prop::B, "cb");
        mt.add_node();
        for v in ["ac", "ad", "bb", "cc"] {
            mt.properties_mut().add(Prop::AE, v);
        }

        let mut goban = Goban::new(19).unwrap();
        let root = mt.new_tree_ref().root();
        goban.load_stones_from_movetree(root);
        assert_eq!(goban.get_stone(pt(1, 0)).unwrap(), BLACK);
        assert_eq!(goban.get_stone(pt(1, 1)).unwrap(), WHITE);

        let first = root.move_down(0);
        let caps = goban.load_stones_from_movetree(first);
        assert_eq!(caps.white, vec![pt(1, 1)]);
        assert!(goban.apply_clear_locations_from_movetree(first).is_empty());

        let second = first.move_down(0);
        let clears = goban.apply_clear_locations_from_movetree(second);
        assert_eq!(
            clears,
            vec![Stone::new(pt(0, 2), BLACK), Stone::new(pt(2, 2), WHITE)]
        );

        let replay = Goban::from_movetree(root, &mt.treepath_to_here()).unwrap();
        assert_eq!(replay.captures.len(), 2);
        assert_eq!(replay.captures[0].white, vec![pt(1, 1)]);
        assert!(replay.captures[1].is_empty());
        assert_eq!(replay.clear_history, vec![vec![], clears]);
        assert_eq!(replay.goban, goban);
    }

    #[test]
    fn test_display() {
        let mut goban = Goban::new(3).unwrap();
        goban.add_stone(pt(0, 0), BLACK);
        goban.add_stone(pt(2, 1), WHITE);
        assert_eq!(goban.to_string(), "X..\n..O\n...\n");
    }
}
