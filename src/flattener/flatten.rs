//! Combining a tree position, a board and a crop into a [`Flattened`].

use std::{
    borrow::Cow,
    collections::{BTreeMap, HashMap},
};

use tracing::{debug, trace};

use super::{
    board::Board,
    flattened::{Flattened, MarkMap, MoveCollision, StoneMap},
    options::{FlattenOptions, ShowVariations},
    symbols::MarkSymbol,
};
use crate::{
    Result,
    orientation::{BoardRegion, Cropbox, Cropper},
    point::Point,
    rules::{
        AppliedStone, Collision, Goban, Move, MoveTree, ProblemConditions, Properties, Stone,
        TreeRef, TreepathSpec, apply_next_moves, correct_next_moves, parse_fragment,
        parse_initial_path,
    },
};

/// Flattens positions, reusing crop-box mappings and empty boards between
/// calls. The caches never change the result.
#[derive(Debug, Default)]
pub struct Flattener {
    cropper: Cropper,
    empty: HashMap<i32, Flattened>,
}

impl Flattener {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flatten the position at `tree`'s cursor. Neither the tree nor
    /// `options.goban` is modified.
    pub fn flatten(&mut self, tree: TreeRef<'_>, options: &FlattenOptions) -> Result<Flattened> {
        let mut mt = tree;
        if let Some(init) = &options.init_position {
            let init_path = parse_initial_path(TreepathSpec::Text(init))?;
            mt = mt.tree_from_root(&init_path);
        }

        let goban: Cow<'_, Goban> = match &options.goban {
            Some(goban) => Cow::Borrowed(goban),
            None => Cow::Owned(Goban::from_position(mt)?),
        };
        let next_moves = parse_fragment(options.next_moves_path.as_deref().unwrap_or(""))?;
        let starting_move_num = options
            .starting_move_num
            .unwrap_or_else(|| find_starting_move_num(mt, &next_moves));

        let region = self.board_region(mt, &next_moves, options)?;
        let cropbox = Cropbox::get(region, mt.intersections())?;

        let base_move_num = mt.node().node_num();
        let mainline = mt.mainline_node();
        let mainline_move_num = mainline.node().node_num();
        let mainline_move = mainline.properties().get_move();
        let next_mainline_move = mainline.child(0).and_then(|c| c.properties().get_move());

        let applied = apply_next_moves(mt, &goban, &next_moves);
        let stone_map = build_stone_map(&goban, &applied.stones);
        let mt = applied.position;

        let ending_move_num = (starting_move_num + next_moves.len())
            .saturating_sub(1)
            .max(starting_move_num);

        let correct_next = correct_next_map(mt, &options.problem_conditions);
        let mut mark_map = if options.clear_marks {
            MarkMap::default()
        } else {
            build_mark_map(mt.properties())
        };

        let num_children = mt.node().num_children();
        let show_variations = match options.show_variations {
            ShowVariations::Always => true,
            ShowVariations::MoreThanOne => num_children > 1,
            ShowVariations::Never => false,
        };
        if show_variations {
            label_variations(mt, &mut mark_map, &correct_next, options.selected_next_move);
        }

        let collisions =
            create_stone_labels(&applied.stones, &stone_map, &mut mark_map, starting_move_num);

        if options.mark_last_move {
            if let Some(pt) = mt.last_move().and_then(|mv| mv.point) {
                mark_map.mark_if_unset(pt, MarkSymbol::LastMove);
            }
        }
        // With a next-moves path the captured stones stay on the diagram, so
        // a ko mark would be meaningless.
        if options.mark_ko && next_moves.is_empty() {
            if let Some(ko) = goban.get_ko() {
                mark_map.mark_if_unset(ko, MarkSymbol::KoLocation);
            }
        }
        if options.ignore_labels {
            mark_map.clear_labels();
        }

        let board = Board::create(&cropbox, &stone_map, &mark_map)?;
        debug!(
            %region,
            base_move_num,
            starting_move_num,
            ending_move_num,
            collisions = collisions.len(),
            "flattened position"
        );

        Ok(Flattened {
            board,
            collisions,
            comment: mt.properties().get_comment().unwrap_or_default().to_string(),
            is_on_main_path: mt.on_mainline(),
            base_move_num,
            starting_move_num,
            ending_move_num,
            mainline_move_num,
            mainline_move,
            next_mainline_move,
            stone_map,
            mark_map,
            ko: goban.get_ko(),
            correct_next_moves: correct_next,
            problem_result: None,
        })
    }

    /// Flattened empty board of `size`, built once per size.
    pub fn empty_flattened(&mut self, size: i32) -> Result<&Flattened> {
        if !self.empty.contains_key(&size) {
            trace!(size, "building empty flattened board");
            let tree = MoveTree::with_intersections(size);
            let flat = self.flatten(tree.new_tree_ref(), &FlattenOptions::default())?;
            self.empty.insert(size, flat);
        }
        Ok(&self.empty[&size])
    }

    fn board_region(
        &mut self,
        mt: TreeRef<'_>,
        next_moves: &[usize],
        options: &FlattenOptions,
    ) -> Result<BoardRegion> {
        let mut region = options.board_region;
        if options.auto_box_crop_on_next_moves {
            region = self.cropper.quad_crop(mt, Some(next_moves))?;
        }
        if region == BoardRegion::Auto {
            region = self.cropper.quad_crop(mt, None)?;
        }
        let Some(restrictions) = &options.region_restrictions else {
            return Ok(region);
        };
        let components = region.components();
        let restricted = restrictions
            .iter()
            .copied()
            .find(|r| components.contains(r))
            .unwrap_or(BoardRegion::All);
        trace!(%region, %restricted, "applied region restrictions");
        Ok(restricted)
    }
}

/// [`Flattener::flatten`] without caches.
pub fn flatten(tree: TreeRef<'_>, options: &FlattenOptions) -> Result<Flattened> {
    Flattener::new().flatten(tree, options)
}

/// Number for the first stone of a next-moves path from `mt`.
///
/// On the main line, numbering continues from the position unless the path
/// immediately leaves the main line, in which case it restarts at 1. Off the
/// main line it counts the moves since the branch.
pub fn find_starting_move_num(mt: TreeRef<'_>, next_moves: &[usize]) -> usize {
    if mt.on_mainline() {
        if next_moves.first().is_some_and(|v| *v > 0) {
            1
        } else {
            mt.node().node_num() + 1
        }
    } else {
        mt.moves_to_mainline() + 1
    }
}

// Board stones take precedence over replayed ones.
fn build_stone_map(goban: &Goban, next_stones: &[AppliedStone]) -> StoneMap {
    let mut out: StoneMap = goban
        .get_all_placed_stones()
        .into_iter()
        .map(|stone| (stone.point, stone))
        .collect();
    for stone in next_stones {
        out.entry(stone.point)
            .or_insert_with(|| Stone::new(stone.point, stone.color));
    }
    out
}

fn build_mark_map(props: &Properties) -> MarkMap {
    let mut out = MarkMap::default();
    for (mark, points) in props.get_all_marks() {
        let symbol = MarkSymbol::from_mark(mark);
        for mp in points {
            out.marks.insert(mp.point, symbol);
            if let Some(label) = mp.label {
                out.labels.insert(mp.point, label);
            }
        }
    }
    out
}

fn correct_next_map(mt: TreeRef<'_>, conditions: &ProblemConditions) -> BTreeMap<Point, Move> {
    if conditions.is_empty() {
        return BTreeMap::new();
    }
    correct_next_moves(mt, conditions)
        .into_iter()
        .filter_map(|mv| mv.point.map(|pt| (pt, mv)))
        .collect()
}

fn label_variations(
    mt: TreeRef<'_>,
    mark_map: &mut MarkMap,
    correct_next: &BTreeMap<Point, Move>,
    selected: Option<Move>,
) {
    let children = (0..mt.node().num_children()).filter_map(|i| mt.child(i).map(|c| (i, c)));
    for (i, child) in children {
        let Some(pt) = child.properties().get_move().and_then(|mv| mv.point) else {
            continue;
        };
        mark_map.labels.entry(pt).or_insert_with(|| {
            let mut label = (i + 1).to_string();
            if selected.and_then(|mv| mv.point) == Some(pt) {
                label.push('.');
            }
            label
        });
        let mark = if correct_next.contains_key(&pt) {
            MarkSymbol::CorrectVariation
        } else {
            MarkSymbol::NextVariation
        };
        mark_map.marks.insert(pt, mark);
    }
}

/// Letters for collisions on unlabeled points: a..z, then aa, bb, ...
fn collision_letter(n: usize) -> String {
    let letter = char::from(b'a' + (n % 26) as u8);
    letter.to_string().repeat(n / 26 + 1)
}

/// Number the replayed stones from `starting_move_num` and describe the
/// ones that collided.
///
/// Existing numeric labels are dropped first. A colliding stone is captioned
/// with the label already on its point, else with the number of the replayed
/// stone it hit, else with a fresh letter that is also put on the board.
fn create_stone_labels(
    stones: &[AppliedStone],
    stone_map: &StoneMap,
    mark_map: &mut MarkMap,
    starting_move_num: usize,
) -> Vec<MoveCollision> {
    if stones.is_empty() {
        return Vec::new();
    }

    let numeric: Vec<Point> = mark_map
        .labels
        .iter()
        .filter(|(_, label)| label.bytes().any(|b| b.is_ascii_digit()))
        .map(|(pt, _)| *pt)
        .collect();
    for pt in numeric {
        mark_map.labels.remove(&pt);
        mark_map.marks.remove(&pt);
    }

    let mut letters = 0;
    let mut collisions = Vec::new();
    for (i, stone) in stones.iter().enumerate() {
        let move_num = i + starting_move_num;
        let pt = stone.point;
        let Some(collision) = stone.collision else {
            mark_map.marks.insert(pt, MarkSymbol::TextLabel);
            mark_map.labels.insert(pt, move_num.to_string());
            continue;
        };

        let label = if let Some(existing) = mark_map.labels.get(&pt) {
            existing.clone()
        } else if let Collision::Index(idx) = collision {
            (idx + starting_move_num).to_string()
        } else {
            let label = collision_letter(letters);
            letters += 1;
            mark_map.marks.insert(pt, MarkSymbol::TextLabel);
            mark_map.labels.insert(pt, label.clone());
            label
        };
        collisions.push(MoveCollision {
            point: pt,
            color: stone.color,
            move_num,
            label,
            collision_stone_color: stone_map.get(&pt).map(|s| s.color),
        });
    }
    collisions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        flattener::symbols::{BaseSymbol, StoneSymbol},
        rules::{Prop, StoneColor},
    };

    fn pt(sgf: &str) -> Point {
        Point::from_sgf(sgf).unwrap()
    }

    /// A tree whose root holds `root` and whose main line holds `moves`,
    /// one node per entry.
    fn tree(root: &[(Prop, &str)], moves: &[&[(Prop, &str)]]) -> MoveTree {
        let mut mt = MoveTree::new();
        for (prop, value) in root {
            mt.properties_mut().add(*prop, *value);
        }
        for node in moves {
            mt.add_node();
            for (prop, value) in *node {
                mt.properties_mut().add(*prop, *value);
            }
        }
        mt.move_to(&[]);
        mt
    }

    fn flat(mt: &MoveTree, options: FlattenOptions) -> Flattened {
        flatten(mt.new_tree_ref(), &options).unwrap()
    }

    fn two_moves() -> MoveTree {
        tree(
            &[(Prop::GB, "1")],
            &[&[(Prop::B, "aa"), (Prop::C, "zo")], &[(Prop::W, "ab"), (Prop::C, "zed")]],
        )
    }

    #[test]
    fn test_basic_flattened() {
        let mt = tree(
            &[
                (Prop::GB, "1"),
                (Prop::C, "foo"),
                (Prop::AW, "aa"),
                (Prop::AB, "ab"),
                (Prop::LB, "ab:z"),
                (Prop::SQ, "cc"),
            ],
            &[],
        );
        let f = flat(&mt, FlattenOptions::new());
        assert_eq!(f.comment(), "foo");
        assert_eq!(f.board().width(), 19);
        assert_eq!(f.board().height(), 19);

        let int = f.board().get_int_board_pt(pt("aa")).unwrap();
        assert_eq!(int.base(), BaseSymbol::TlCorner);
        assert_eq!(int.stone(), StoneSymbol::WStone);
        assert_eq!(int.mark(), MarkSymbol::Empty);

        let int = f.board().get_int_board_pt(pt("ab")).unwrap();
        assert_eq!(int.base(), BaseSymbol::LeftEdge);
        assert_eq!(int.stone(), StoneSymbol::BStone);
        assert_eq!(int.mark(), MarkSymbol::TextLabel);

        assert_eq!(f.marks()[&pt("cc")], MarkSymbol::Square);
        assert_eq!(f.marks()[&pt("ab")], MarkSymbol::TextLabel);
        assert_eq!(f.labels()[&pt("ab")], "z");
    }

    #[test]
    fn test_goban_replayed_when_absent() {
        let mut mt = two_moves();
        mt.move_to(&[0, 0]);
        let f = flat(&mt, FlattenOptions::new());
        assert_eq!(f.comment(), "zed");
        let board = f.board();
        assert_eq!(board.get_int_board_pt(pt("aa")).unwrap().stone(), StoneSymbol::BStone);
        assert_eq!(board.get_int_board_pt(pt("ab")).unwrap().stone(), StoneSymbol::WStone);
    }

    #[test]
    fn test_next_moves_are_numbered() {
        let mt = two_moves();
        let f = flat(&mt, FlattenOptions::new().with_next_moves(&[0, 0]));
        let int = f.board().get_int_board_pt(pt("aa")).unwrap();
        assert_eq!(int.stone(), StoneSymbol::BStone);
        assert_eq!(int.mark(), MarkSymbol::TextLabel);
        assert_eq!(int.text_label(), Some("1"));
        let int = f.board().get_int_board_pt(pt("ab")).unwrap();
        assert_eq!(int.stone(), StoneSymbol::WStone);
        assert_eq!(int.text_label(), Some("2"));
        assert_eq!(f.comment(), "zed");
    }

    #[test]
    fn test_ignore_labels() {
        let mt = two_moves();
        let options = FlattenOptions::new()
            .with_next_moves(&[0, 0])
            .with_ignore_labels(true);
        let f = flat(&mt, options);
        for sgf in ["aa", "ab"] {
            let int = f.board().get_int_board_pt(pt(sgf)).unwrap();
            assert!(int.stone().is_stone());
            assert_eq!(int.mark(), MarkSymbol::Empty);
            assert_eq!(int.text_label(), None);
        }
    }

    #[test]
    fn test_init_position() {
        let mt = two_moves();
        let f = flat(&mt, FlattenOptions::new().with_init_position("1"));
        assert_eq!(f.comment(), "zo");

        let options = FlattenOptions::new()
            .with_init_position("1")
            .with_next_moves_path("0");
        assert_eq!(flat(&mt, options).comment(), "zed");
    }

    #[test]
    fn test_collision_labels() {
        let mt = tree(
            &[
                (Prop::GB, "1"),
                (Prop::AW, "aa"),
                (Prop::AW, "ba"),
                (Prop::AB, "ab"),
                (Prop::AB, "bb"),
                (Prop::AB, "cb"),
            ],
            &[
                &[(Prop::B, "jj")],
                &[(Prop::W, "ca")],
                &[(Prop::B, "da")],
                &[(Prop::W, "ca")],
                &[(Prop::B, "ba")],
            ],
        );
        let f = flat(&mt, FlattenOptions::new().with_next_moves(&[0, 0, 0, 0, 0]));
        let cols = f.collisions();
        assert_eq!(cols.len(), 2);
        assert_eq!(cols[0].color, StoneColor::White);
        assert_eq!(cols[0].move_num, 4);
        assert_eq!(cols[0].label, "2");
        assert_eq!(cols[1].color, StoneColor::Black);
        assert_eq!(cols[1].move_num, 5);
        assert_eq!(cols[1].label, "a");
        assert_eq!(f.labels()[&pt("ba")], "a");
        assert_eq!(cols[1].collision_stone_color, Some(StoneColor::White));
    }

    #[test]
    fn test_collision_keeps_manual_label() {
        let mt = tree(
            &[
                (Prop::GB, "1"),
                (Prop::AW, "aa"),
                (Prop::AW, "ba"),
                (Prop::AB, "ab"),
                (Prop::AB, "bb"),
            ],
            &[&[(Prop::B, "ca")], &[(Prop::W, "aa"), (Prop::LB, "aa:X")]],
        );
        let f = flat(&mt, FlattenOptions::new().with_next_moves(&[0, 0]));
        let cols = f.collisions();
        assert_eq!(cols.len(), 1);
        assert_eq!(cols[0].color, StoneColor::White);
        assert_eq!(cols[0].move_num, 2);
        assert_eq!(cols[0].label, "X");
    }

    #[test]
    fn test_is_on_main_path() {
        let mut mt = tree(&[(Prop::GB, "1")], &[&[(Prop::B, "aa")]]);
        mt.add_node().properties_mut().add(Prop::B, "ab");
        mt.move_to(&[]);

        let f = flat(&mt, FlattenOptions::new().with_next_moves(&[1]));
        let int = f.board().get_int_board_pt(pt("ab")).unwrap();
        assert_eq!(int.stone(), StoneSymbol::BStone);
        assert!(!f.is_on_main_path());

        mt.move_to(&[1]);
        assert!(!flat(&mt, FlattenOptions::new()).is_on_main_path());
    }

    #[test]
    fn test_find_starting_move_num() {
        let mut mt = tree(&[(Prop::GB, "1")], &[&[(Prop::B, "aa")]]);
        mt.move_to(&[0]);
        mt.add_node().properties_mut().add(Prop::W, "ba");
        mt.add_node().properties_mut().add(Prop::B, "cc");
        mt.move_up().add_node().properties_mut().add(Prop::B, "dd");
        mt.move_to(&[0]);
        mt.add_node().properties_mut().add(Prop::W, "ab");
        mt.add_node().properties_mut().add(Prop::B, "cc");
        mt.move_up().add_node().properties_mut().add(Prop::B, "dd");

        let root = mt.new_tree_ref().root();
        assert_eq!(find_starting_move_num(root, &[]), 1);
        assert_eq!(find_starting_move_num(root, &[0]), 1);
        assert_eq!(find_starting_move_num(root, &[1]), 1);

        let first = root.move_down(0);
        assert_eq!(find_starting_move_num(first, &[]), 2);
        assert_eq!(find_starting_move_num(first, &[0]), 2);
        assert_eq!(find_starting_move_num(first, &[1]), 1);

        let variation = first.move_down(1);
        assert_eq!(find_starting_move_num(variation, &[0]), 2);
        assert_eq!(find_starting_move_num(variation, &[1]), 2);
    }

    #[test]
    fn test_move_numbers() {
        let mut mt = tree(&[(Prop::GB, "1")], &[&[(Prop::B, "aa")], &[(Prop::W, "bb")]]);
        mt.move_to(&[0, 0]);
        let f = flat(&mt, FlattenOptions::new());
        assert_eq!(f.base_move_num(), 2);
        assert_eq!(f.starting_move_num(), 3);
        assert_eq!(f.ending_move_num(), 3);
        assert_eq!(f.mainline_move_num(), 2);

        let moves: Vec<[(Prop, &str); 1]> = ["aa", "bb", "cc", "dd", "ee", "ff"]
            .iter()
            .enumerate()
            .map(|(i, v)| [(if i % 2 == 0 { Prop::B } else { Prop::W }, *v)])
            .collect();
        let nodes: Vec<&[(Prop, &str)]> = moves.iter().map(|m| m.as_slice()).collect();
        let mut mt = tree(&[(Prop::GB, "1")], &nodes);
        mt.move_to(&[0]);
        let f = flat(&mt, FlattenOptions::new().with_next_moves(&[0, 0, 0, 0]));
        assert_eq!(f.base_move_num(), 1);
        assert_eq!(f.starting_move_num(), 2);
        assert_eq!(f.ending_move_num(), 5);
        assert_eq!(f.mainline_move_num(), 1);
        assert!(f.is_on_main_path());
    }

    #[test]
    fn test_move_numbers_in_variation() {
        let mut mt = tree(&[(Prop::GB, "1")], &[&[(Prop::B, "aa")], &[(Prop::W, "bb")]]);
        mt.move_to(&[0, 0]);
        mt.add_node().properties_mut().add(Prop::B, "kk");
        mt.move_up();
        mt.add_node().properties_mut().add(Prop::B, "cc");
        mt.add_node().properties_mut().add(Prop::W, "dd");
        mt.add_node().properties_mut().add(Prop::B, "ee");
        mt.add_node().properties_mut().add(Prop::W, "ff");

        mt.move_to(&[0, 0]);
        let f = flat(&mt, FlattenOptions::new().with_next_moves(&[1, 0, 0, 0]));
        assert_eq!(f.base_move_num(), 2);
        assert_eq!(f.starting_move_num(), 1);
        assert_eq!(f.ending_move_num(), 4);
        assert_eq!(f.mainline_move_num(), 2);
        assert!(!f.is_on_main_path());

        let options = FlattenOptions::new()
            .with_init_position("2.1")
            .with_next_moves(&[0, 0, 0]);
        let f = flat(&mt, options);
        assert_eq!(f.base_move_num(), 3);
        assert_eq!(f.starting_move_num(), 2);
        assert_eq!(f.ending_move_num(), 4);
        assert_eq!(f.mainline_move_num(), 2);
        assert!(!f.is_on_main_path());
    }

    fn corner_stones() -> [(Prop, &'static str); 4] {
        [(Prop::AB, "aa"), (Prop::AB, "as"), (Prop::AB, "sa"), (Prop::AB, "ss")]
    }

    #[test]
    fn test_auto_crop_on_next_moves() {
        let mut mt = tree(
            &corner_stones(),
            &[&[(Prop::B, "rr")], &[(Prop::W, "cc")], &[(Prop::B, "re")], &[(Prop::W, "ee")]],
        );
        mt.move_to(&[0, 0]);
        assert_eq!(mt.node().node_num(), 2);
        let options = FlattenOptions::new()
            .with_next_moves(&[0, 0])
            .with_auto_box_crop_on_next_moves(true);
        let f = flat(&mt, options.clone());
        assert_eq!(f.board().width(), 19);
        assert_eq!(f.board().height(), 11);

        let f = flat(
            &mt,
            options
                .clone()
                .with_region_restrictions(vec![BoardRegion::Top, BoardRegion::Left]),
        );
        assert_eq!((f.board().width(), f.board().height()), (19, 11));

        let f = flat(&mt, options.with_region_restrictions(vec![BoardRegion::Left]));
        assert_eq!((f.board().width(), f.board().height()), (19, 19));
    }

    #[test]
    fn test_region_restriction_picks_component() {
        let mut mt = tree(
            &corner_stones(),
            &[&[(Prop::B, "bb")], &[(Prop::W, "cc")], &[(Prop::B, "dd")], &[(Prop::W, "ee")]],
        );
        mt.move_to(&[0, 0]);
        let options = FlattenOptions::new()
            .with_next_moves(&[0, 0])
            .with_auto_box_crop_on_next_moves(true)
            .with_region_restrictions(vec![BoardRegion::Top, BoardRegion::Left]);
        let f = flat(&mt, options);
        assert_eq!((f.board().width(), f.board().height()), (19, 11));
    }

    #[test]
    fn test_mainline_moves() {
        let mut mt = tree(
            &corner_stones(),
            &[&[(Prop::B, "bb")], &[(Prop::W, "cc")], &[(Prop::B, "dd")], &[(Prop::W, "ee")]],
        );
        mt.move_to(&[0, 0, 0, 0]);
        mt.add_node().properties_mut().add(Prop::B, "fa");
        mt.add_node().properties_mut().add(Prop::W, "fb");
        mt.move_up().move_up();
        mt.add_node().properties_mut().add(Prop::B, "fb");
        mt.add_node().properties_mut().add(Prop::W, "fc");

        mt.move_to(&[0, 0, 0, 0, 1]);
        let f = flat(&mt, FlattenOptions::new());
        assert_eq!(f.mainline_move().and_then(|m| m.point), Some(pt("ee")));
        assert_eq!(f.next_mainline_move().and_then(|m| m.point), Some(pt("fa")));

        mt.move_to(&[]);
        let f = flat(&mt, FlattenOptions::new());
        assert_eq!(f.mainline_move(), None);
        assert_eq!(f.mainline_move_num(), 0);
        assert_eq!(f.next_mainline_move().and_then(|m| m.point), Some(pt("bb")));
        assert_eq!(f.next_mainline_move_num(), 1);

        let f = flat(&mt, FlattenOptions::new().with_init_position("7"));
        assert_eq!(f.mainline_move().and_then(|m| m.point), Some(pt("fb")));
        assert_eq!(f.mainline_move_num(), 6);
        assert_eq!(f.next_mainline_move(), None);
        assert_eq!(f.next_mainline_move_num(), 7);
    }

    fn ko_tree() -> MoveTree {
        let moves = [
            (Prop::B, "ba"),
            (Prop::W, "ca"),
            (Prop::B, "ab"),
            (Prop::W, "bb"),
            (Prop::B, "bc"),
            (Prop::W, "aa"),
        ];
        let nodes: Vec<[(Prop, &str); 1]> = moves.iter().map(|m| [*m]).collect();
        let nodes: Vec<&[(Prop, &str)]> = nodes.iter().map(|n| n.as_slice()).collect();
        tree(&[(Prop::SZ, "19")], &nodes)
    }

    #[test]
    fn test_ko_mark() {
        let mut mt = ko_tree();
        mt.move_to(&[0; 6]);
        let f = flat(&mt, FlattenOptions::new().with_mark_ko(true));
        assert_eq!(f.marks().get(&pt("ba")), Some(&MarkSymbol::KoLocation));
        assert_eq!(f.ko(), Some(pt("ba")));

        let f = flat(&mt, FlattenOptions::new());
        assert_eq!(f.marks().get(&pt("ba")), None);

        mt.move_to(&[]);
        let options = FlattenOptions::new().with_next_moves(&[0; 6]).with_mark_ko(true);
        let f = flat(&mt, options);
        assert_eq!(f.marks().get(&pt("ba")), Some(&MarkSymbol::TextLabel));
    }

    #[test]
    fn test_mark_last_move_yields_to_labels() {
        let mut mt = two_moves();
        mt.move_to(&[0, 0]);
        let f = flat(&mt, FlattenOptions::new().with_mark_last_move(true));
        assert_eq!(f.marks().get(&pt("ab")), Some(&MarkSymbol::LastMove));

        mt.properties_mut().add(Prop::TR, "ab");
        let f = flat(&mt, FlattenOptions::new().with_mark_last_move(true));
        assert_eq!(f.marks().get(&pt("ab")), Some(&MarkSymbol::Triangle));

        let options = FlattenOptions::new()
            .with_mark_last_move(true)
            .with_clear_marks(true);
        assert_eq!(flat(&mt, options).marks().get(&pt("ab")), Some(&MarkSymbol::LastMove));
    }

    #[test]
    fn test_variation_labels() {
        let mut mt = tree(&[(Prop::GB, "1")], &[&[(Prop::B, "aa"), (Prop::C, "Correct")]]);
        mt.add_node().properties_mut().add(Prop::B, "bb");
        mt.move_to(&[]);

        let conditions = ProblemConditions::from([(Prop::C, vec!["Correct".to_string()])]);
        let options = FlattenOptions::new()
            .with_show_variations(ShowVariations::MoreThanOne)
            .with_selected_next_move(Move::new(StoneColor::Black, pt("bb")))
            .with_problem_conditions(conditions);
        let f = flat(&mt, options);
        assert_eq!(f.labels()[&pt("aa")], "1");
        assert_eq!(f.labels()[&pt("bb")], "2.");
        assert_eq!(f.marks()[&pt("aa")], MarkSymbol::CorrectVariation);
        assert_eq!(f.marks()[&pt("bb")], MarkSymbol::NextVariation);
        assert_eq!(f.correct_next_moves().len(), 1);

        mt.move_to(&[0]);
        let f = flat(&mt, FlattenOptions::new().with_show_variations(ShowVariations::MoreThanOne));
        assert!(f.labels().is_empty());
    }

    #[test]
    fn test_auto_truncate_label() {
        let mut mt = two_moves();
        mt.move_to(&[0, 0]);
        let f = flat(&mt, FlattenOptions::new().with_starting_move_num(122));
        assert_eq!(f.auto_truncate_label("a"), "a");
        assert_eq!(f.auto_truncate_label("10"), "10");
        assert_eq!(f.auto_truncate_label("100"), "100");
        assert_eq!(f.auto_truncate_label("101"), "1");
        assert_eq!(f.auto_truncate_label("222"), "22");

        let mut long = f.clone();
        long.ending_move_num = long.starting_move_num + 120;
        assert_eq!(long.auto_truncate_label("101"), "101");
        assert_eq!(long.auto_truncate_label("222"), "222");
    }

    #[test]
    fn test_flatten_is_pure() {
        let mut mt = ko_tree();
        mt.move_to(&[0, 0]);
        let before = mt.clone();
        let goban = Goban::from_position(mt.new_tree_ref()).unwrap();
        let options = FlattenOptions::new()
            .with_goban(goban.clone())
            .with_next_moves(&[0, 0, 0, 0])
            .with_board_region(BoardRegion::Auto)
            .with_mark_last_move(true);

        let mut flattener = Flattener::new();
        let first = flattener.flatten(mt.new_tree_ref(), &options).unwrap();
        let second = flattener.flatten(mt.new_tree_ref(), &options).unwrap();
        assert_eq!(first, second);
        assert_eq!(first, flatten(mt.new_tree_ref(), &options).unwrap());
        assert_eq!(mt, before);
        assert_eq!(options.goban.as_ref(), Some(&goban));
    }

    #[test]
    fn test_empty_flattened_is_cached() {
        let mut flattener = Flattener::new();
        let empty = flattener.empty_flattened(9).unwrap().clone();
        assert_eq!(empty.board().width(), 9);
        assert!(empty.stone_map().is_empty());
        assert_eq!(
            empty.board().get_int_board_pt(Point::new(4, 4)).unwrap().base(),
            BaseSymbol::CenterStarpoint
        );
        assert_eq!(flattener.empty.len(), 1);
        flattener.empty_flattened(9).unwrap();
        assert_eq!(flattener.empty.len(), 1);
    }
}
