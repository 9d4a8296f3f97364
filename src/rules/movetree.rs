//! Branching game records with a navigable cursor.
//!
//! Nodes are stored in an arena owned by the [`MoveTree`]; the cursor is just
//! an index into it. [`TreeRef`] pairs a borrowed tree with its own cursor so
//! read-only algorithms can walk the tree without disturbing the caller's
//! position.

use serde::{Deserialize, Deserializer, Serialize, de};
use tracing::debug;

use super::{
    color::{Move, StoneColor},
    goban::Goban,
    movenode::MoveNode,
    prop::Prop,
};
use crate::{
    Error, Result,
    identifiers::{NodeId, NodeIndex},
    point::Point,
};

/// Board size assumed when the root has no `SZ` property.
pub const DEFAULT_INTERSECTIONS: i32 = 19;

/// A game record: an arena of [`MoveNode`]s plus a cursor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveTree {
    nodes: Vec<MoveNode>,
    cursor: NodeIndex,
}

#[derive(Deserialize)]
struct MoveTreeWire {
    nodes: Vec<MoveNode>,
    cursor: NodeIndex,
}

fn malformed(reason: String) -> Error {
    Error::InvalidMoveTree { reason }
}

impl TryFrom<MoveTreeWire> for MoveTree {
    type Error = Error;

    /// Accepts only arenas where every non-root node is the child of exactly
    /// one node, links back to it, and carries the id of its slot.
    fn try_from(wire: MoveTreeWire) -> Result<Self> {
        let MoveTreeWire { nodes, cursor } = wire;
        let Some(root) = nodes.first() else {
            return Err(malformed("no root node".to_string()));
        };
        if root.parent.is_some() || root.node_id != NodeId::default() {
            return Err(malformed("root node has a parent or a non-zero id".to_string()));
        }
        if cursor.as_usize() >= nodes.len() {
            return Err(malformed(format!(
                "cursor {cursor} is outside an arena of {} nodes",
                nodes.len()
            )));
        }

        let mut claimed = vec![false; nodes.len()];
        for (index, node) in nodes.iter().enumerate() {
            for (var_num, child) in node.children.iter().enumerate() {
                let slot = child.as_usize();
                let Some(child_node) = nodes.get(slot) else {
                    return Err(malformed(format!(
                        "node #{index} has child {child} outside the arena"
                    )));
                };
                if slot == 0 || claimed[slot] {
                    return Err(malformed(format!("node {child} has more than one parent")));
                }
                claimed[slot] = true;
                if child_node.parent != Some(NodeIndex::new(index)) {
                    return Err(malformed(format!(
                        "node {child} does not link back to its parent #{index}"
                    )));
                }
                if child_node.node_id != node.node_id.child(var_num) {
                    return Err(malformed(format!(
                        "node {child} has id {} in slot {var_num} below {}",
                        child_node.node_id, node.node_id
                    )));
                }
            }
        }
        if let Some(orphan) = claimed.iter().skip(1).position(|seen| !seen) {
            return Err(malformed(format!(
                "node #{} is not reachable from the root",
                orphan + 1
            )));
        }
        Ok(MoveTree { nodes, cursor })
    }
}

impl<'de> Deserialize<'de> for MoveTree {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let wire = MoveTreeWire::deserialize(deserializer)?;
        MoveTree::try_from(wire).map_err(de::Error::custom)
    }
}

impl Default for MoveTree {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveTree {
    /// A tree holding only an empty root node.
    pub fn new() -> Self {
        Self {
            nodes: vec![MoveNode::new(NodeId::default(), None)],
            cursor: NodeIndex::ROOT,
        }
    }

    /// A tree whose root records the board size.
    pub fn with_intersections(size: i32) -> Self {
        let mut tree = Self::new();
        tree.root_node_mut()
            .properties_mut()
            .add(Prop::SZ, size.to_string());
        tree
    }

    /// Read-only view positioned at this tree's cursor.
    pub fn new_tree_ref(&self) -> TreeRef<'_> {
        TreeRef {
            tree: self,
            cursor: self.cursor,
        }
    }

    pub fn cursor(&self) -> NodeIndex {
        self.cursor
    }

    /// Move the cursor to `index`, which must come from this tree.
    /// Returns false (and leaves the cursor alone) for a foreign index.
    pub fn set_cursor(&mut self, index: NodeIndex) -> bool {
        if index.as_usize() < self.nodes.len() {
            self.cursor = index;
            true
        } else {
            false
        }
    }

    pub fn node(&self) -> &MoveNode {
        self.node_at(self.cursor)
    }

    pub fn node_mut(&mut self) -> &mut MoveNode {
        &mut self.nodes[self.cursor.as_usize()]
    }

    pub fn node_at(&self, index: NodeIndex) -> &MoveNode {
        &self.nodes[index.as_usize()]
    }

    pub fn node_at_mut(&mut self, index: NodeIndex) -> &mut MoveNode {
        &mut self.nodes[index.as_usize()]
    }

    /// Every node, in arena order. Structure cannot be changed through these.
    pub fn nodes_mut(&mut self) -> impl Iterator<Item = &mut MoveNode> {
        self.nodes.iter_mut()
    }

    pub fn root_node(&self) -> &MoveNode {
        self.node_at(NodeIndex::ROOT)
    }

    fn root_node_mut(&mut self) -> &mut MoveNode {
        &mut self.nodes[NodeIndex::ROOT.as_usize()]
    }

    pub fn properties(&self) -> &super::Properties {
        self.node().properties()
    }

    pub fn properties_mut(&mut self) -> &mut super::Properties {
        self.node_mut().properties_mut()
    }

    /// Number of nodes in the arena.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Descend into variation `var_num`. No-op when it does not exist.
    pub fn move_down(&mut self, var_num: usize) -> &mut Self {
        if let Some(child) = self.node().get_child(var_num) {
            self.cursor = child;
        }
        self
    }

    /// Go to the parent. No-op at the root.
    pub fn move_up(&mut self) -> &mut Self {
        if let Some(parent) = self.node().parent() {
            self.cursor = parent;
        }
        self
    }

    /// Reposition the cursor at `root + treepath`, stopping early at a leaf.
    pub fn move_to(&mut self, treepath: &[usize]) -> &mut Self {
        self.cursor = self.new_tree_ref().tree_from_root(treepath).cursor;
        self
    }

    /// Append a child to the cursor node and descend into it.
    pub fn add_node(&mut self) -> &mut Self {
        self.cursor = self.push_child(self.cursor);
        self
    }

    fn push_child(&mut self, parent: NodeIndex) -> NodeIndex {
        let index = NodeIndex::new(self.nodes.len());
        let parent_node = &self.nodes[parent.as_usize()];
        let id = parent_node.node_id().child(parent_node.num_children());
        self.nodes.push(MoveNode::new(id, Some(parent)));
        self.nodes[parent.as_usize()].children.push(index);
        index
    }

    /// Delete the cursor node and its subtree; the cursor moves to the parent.
    /// Returns false at the root, which cannot be deleted.
    ///
    /// Later siblings shift down one variation slot.
    pub fn delete_node(&mut self) -> bool {
        let Some(parent) = self.node().parent() else {
            return false;
        };
        let doomed = self.cursor;
        self.nodes[parent.as_usize()]
            .children
            .retain(|child| *child != doomed);
        self.cursor = parent;
        self.compact();
        self.renumber();
        true
    }

    // Drop nodes unreachable from the root, remapping indices.
    fn compact(&mut self) {
        let mut order = Vec::with_capacity(self.nodes.len());
        self.new_tree_ref()
            .root()
            .recurse(|tree_ref| order.push(tree_ref.cursor()));
        let mut remap = vec![None; self.nodes.len()];
        for (new, old) in order.iter().enumerate() {
            remap[old.as_usize()] = Some(NodeIndex::new(new));
        }
        let lookup = |idx: NodeIndex| remap[idx.as_usize()];
        let mut nodes = Vec::with_capacity(order.len());
        for old in &order {
            let mut node = self.nodes[old.as_usize()].clone();
            node.parent = node.parent.and_then(lookup);
            node.children = node.children.iter().filter_map(|c| lookup(*c)).collect();
            nodes.push(node);
        }
        self.cursor = lookup(self.cursor).unwrap_or(NodeIndex::ROOT);
        self.nodes = nodes;
    }

    /// Recompute every node id from the root down.
    pub fn renumber(&mut self) {
        let mut stack = vec![NodeIndex::ROOT];
        self.root_node_mut().node_id = NodeId::default();
        while let Some(index) = stack.pop() {
            let id = self.nodes[index.as_usize()].node_id;
            let children = self.nodes[index.as_usize()].children.clone();
            for (var_num, child) in children.into_iter().enumerate() {
                self.nodes[child.as_usize()].node_id = id.child(var_num);
                stack.push(child);
            }
        }
    }

    /// Fill in the standard root properties that are missing.
    pub fn init_root_properties(&mut self) -> &mut Self {
        let defaults = [
            (Prop::GM, "1".to_string()),
            (Prop::FF, "4".to_string()),
            (Prop::CA, "UTF-8".to_string()),
            (Prop::AP, format!("go-diagram:{}", env!("CARGO_PKG_VERSION"))),
            (Prop::KM, "0.00".to_string()),
            (Prop::RU, "Japanese".to_string()),
            (Prop::SZ, DEFAULT_INTERSECTIONS.to_string()),
            (Prop::PB, "Black".to_string()),
            (Prop::PW, "White".to_string()),
        ];
        let props = self.root_node_mut().properties_mut();
        for (prop, value) in defaults {
            if !props.contains(prop) {
                props.add(prop, value);
            }
        }
        self
    }

    /// A new tree rooted at the cursor's position.
    ///
    /// The new root holds every stone on the board at the cursor as `AB`/`AW`
    /// placements, together with the cursor node's other properties; the
    /// cursor's subtree is copied beneath it. Ancestors and siblings are
    /// dropped. A `PL` property is added when needed to keep the player to move.
    ///
    /// Fails when the root's `SZ` is not a usable board size.
    pub fn rebase(&self) -> Result<MoveTree> {
        let here = self.new_tree_ref();
        let path = here.treepath_to_here();
        let old_player = here.current_player();
        let replay = Goban::from_movetree(here.root(), &path)?;

        let mut out = MoveTree::new();
        {
            let props = out.root_node_mut().properties_mut();
            for stone in replay.goban.get_all_placed_stones() {
                let prop = match stone.color {
                    StoneColor::White => Prop::AW,
                    _ => Prop::AB,
                };
                props.add(prop, stone.point.to_sgf_coord());
            }
        }

        // (old node, new node) pairs still to copy.
        let mut pending = vec![(self.cursor, NodeIndex::ROOT)];
        while let Some((old, new)) = pending.pop() {
            let old_node = &self.nodes[old.as_usize()];
            for (prop, values) in old_node.properties().iter() {
                if new == NodeIndex::ROOT && matches!(prop, Prop::AB | Prop::AW | Prop::AE) {
                    continue;
                }
                out.nodes[new.as_usize()]
                    .properties_mut()
                    .set(prop, values.to_vec());
            }
            for child in old_node.children().to_vec() {
                let new_child = out.push_child(new);
                pending.push((child, new_child));
            }
        }

        let root_props = out.root_node_mut().properties_mut();
        if !root_props.contains(Prop::SZ) {
            if let Some(size) = self.root_node().properties().get_one_value(Prop::SZ, 0) {
                root_props.add(Prop::SZ, size);
            }
        }
        // A move on the old cursor node no longer belongs to the position.
        root_props.remove(Prop::B);
        root_props.remove(Prop::W);
        if out.new_tree_ref().current_player() != old_player {
            if let Some(token) = old_player.sgf_token() {
                out.root_node_mut().properties_mut().add(Prop::PL, token);
            }
        }
        debug!(
            path_len = path.len(),
            nodes = out.len(),
            "rebased move tree at cursor"
        );
        Ok(out)
    }

    /// Serialize the whole tree as SGF text.
    pub fn to_sgf(&self) -> String {
        let mut out = String::new();
        self.write_sgf(NodeIndex::ROOT, &mut out);
        out
    }

    fn write_sgf(&self, index: NodeIndex, out: &mut String) {
        let node = self.node_at(index);
        let opens_variation = match node.parent() {
            None => true,
            Some(parent) => self.node_at(parent).num_children() > 1,
        };
        if node.parent().is_some() {
            out.push('\n');
        }
        if opens_variation {
            out.push('(');
        }
        out.push(';');
        for (prop, values) in node.properties().iter() {
            out.push_str(prop.as_str());
            if values.is_empty() {
                out.push_str("[]");
            }
            for value in values {
                out.push('[');
                out.push_str(&sgf_escape(value));
                out.push(']');
            }
        }
        for child in node.children() {
            self.write_sgf(*child, out);
        }
        if opens_variation {
            out.push(')');
        }
    }

    // Cursor-level shortcuts onto `TreeRef`.

    pub fn current_player(&self) -> StoneColor {
        self.new_tree_ref().current_player()
    }

    pub fn find_next_move(&self, point: Point, color: StoneColor) -> Option<usize> {
        self.new_tree_ref().find_next_move(point, color)
    }

    pub fn intersections(&self) -> i32 {
        self.new_tree_ref().intersections()
    }

    pub fn next_moves(&self) -> Vec<Move> {
        self.new_tree_ref().next_moves()
    }

    pub fn on_mainline(&self) -> bool {
        self.new_tree_ref().on_mainline()
    }

    pub fn treepath_to_here(&self) -> Vec<usize> {
        self.new_tree_ref().treepath_to_here()
    }

    pub fn last_move(&self) -> Option<Move> {
        self.new_tree_ref().last_move()
    }

    /// Pre-order walk of the whole tree. The cursor is untouched.
    pub fn recurse_from_root(&self, f: impl FnMut(TreeRef<'_>)) {
        self.new_tree_ref().recurse_from_root(f)
    }
}

fn sgf_escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        if c == ']' || c == '\\' {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// A borrowed tree plus an independent cursor.
///
/// Navigation consumes and returns the view, so several positions in the same
/// tree can be held at once.
#[derive(Debug, Clone, Copy)]
pub struct TreeRef<'a> {
    tree: &'a MoveTree,
    cursor: NodeIndex,
}

impl PartialEq for TreeRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.cursor == other.cursor
    }
}

impl<'a> TreeRef<'a> {
    pub fn tree(&self) -> &'a MoveTree {
        self.tree
    }

    pub fn cursor(&self) -> NodeIndex {
        self.cursor
    }

    pub fn node(&self) -> &'a MoveNode {
        self.tree.node_at(self.cursor)
    }

    pub fn properties(&self) -> &'a super::Properties {
        self.node().properties()
    }

    /// View of the same tree at `index`.
    pub fn at(self, index: NodeIndex) -> Self {
        TreeRef {
            tree: self.tree,
            cursor: index,
        }
    }

    pub fn root(self) -> Self {
        self.at(NodeIndex::ROOT)
    }

    pub fn child(self, var_num: usize) -> Option<Self> {
        self.node().get_child(var_num).map(|c| self.at(c))
    }

    pub fn parent(self) -> Option<Self> {
        self.node().parent().map(|p| self.at(p))
    }

    #[must_use = "move_down returns the moved view; the original is unchanged"]
    pub fn move_down(self, var_num: usize) -> Self {
        self.child(var_num).unwrap_or(self)
    }

    #[must_use = "move_up returns the moved view; the original is unchanged"]
    pub fn move_up(self) -> Self {
        self.parent().unwrap_or(self)
    }

    /// Root, then each step of `treepath` until a leaf is reached.
    #[must_use = "tree_from_root returns the moved view; the original is unchanged"]
    pub fn tree_from_root(self, treepath: &[usize]) -> Self {
        let mut here = self.root();
        for step in treepath {
            if here.node().num_children() == 0 {
                break;
            }
            here = here.move_down(*step);
        }
        here
    }

    /// Color to play: `PL` if present, otherwise the opposite of the nearest
    /// move at or above the cursor, otherwise black.
    pub fn current_player(&self) -> StoneColor {
        if let Some(token) = self.properties().get_one_value(Prop::PL, 0) {
            if let Some(color) = StoneColor::from_sgf_token(token) {
                return color;
            }
        }
        let mut here = Some(*self);
        while let Some(node) = here {
            if let Some(mv) = node.properties().get_move() {
                return match mv.color {
                    StoneColor::Black => StoneColor::White,
                    _ => StoneColor::Black,
                };
            }
            here = node.parent();
        }
        StoneColor::Black
    }

    /// Variation index of the child playing `color` at `point`. Passes never
    /// match.
    pub fn find_next_move(&self, point: Point, color: StoneColor) -> Option<usize> {
        let prop = color.sgf_token().and_then(|t| t.parse::<Prop>().ok())?;
        self.node().children().iter().find_map(|child| {
            let node = self.tree.node_at(*child);
            let value = node.properties().get_one_value(prop, 0)?;
            if value.is_empty() {
                return None;
            }
            (node.properties().get_as_point(prop, 0) == Some(point)).then_some(node.var_num())
        })
    }

    /// Board size from the root's `SZ`, or 19.
    pub fn intersections(&self) -> i32 {
        self.tree
            .root_node()
            .properties()
            .get_one_value(Prop::SZ, 0)
            .and_then(|sz| sz.trim().parse().ok())
            .unwrap_or(DEFAULT_INTERSECTIONS)
    }

    /// The move played at the cursor node, if any.
    pub fn last_move(&self) -> Option<Move> {
        self.properties().get_move()
    }

    /// Moves, in variation order, of the children that have one.
    pub fn next_moves(&self) -> Vec<Move> {
        self.node()
            .children()
            .iter()
            .filter_map(|c| self.tree.node_at(*c).properties().get_move())
            .collect()
    }

    /// Whether the cursor lies on the path of first variations from the root.
    pub fn on_mainline(&self) -> bool {
        let mut here = *self;
        while let Some(parent) = here.parent() {
            if parent.node().get_child(0) != Some(here.cursor) {
                return false;
            }
            here = parent;
        }
        true
    }

    /// Number of steps up to the nearest mainline node.
    pub fn moves_to_mainline(&self) -> usize {
        let mut here = *self;
        let mut n = 0;
        while !here.on_mainline() {
            match here.parent() {
                Some(parent) => here = parent,
                None => break,
            }
            n += 1;
        }
        n
    }

    /// The nearest mainline node at or above the cursor.
    pub fn mainline_node(self) -> Self {
        let mut here = self;
        while !here.on_mainline() {
            here = here.move_up();
        }
        here
    }

    /// Variation indices leading from the root to the cursor.
    pub fn treepath_to_here(&self) -> Vec<usize> {
        let mut path = Vec::with_capacity(self.node().node_num());
        let mut here = *self;
        while let Some(parent) = here.parent() {
            path.push(here.node().var_num());
            here = parent;
        }
        path.reverse();
        path
    }

    /// Pre-order depth-first walk of the subtree at the cursor.
    pub fn recurse(self, mut f: impl FnMut(TreeRef<'a>)) {
        let mut stack = vec![self.cursor];
        while let Some(index) = stack.pop() {
            let here = self.at(index);
            f(here);
            stack.extend(here.node().children().iter().rev().copied());
        }
    }

    pub fn recurse_from_root(self, f: impl FnMut(TreeRef<'a>)) {
        self.root().recurse(f)
    }
}
