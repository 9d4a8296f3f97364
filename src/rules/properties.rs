//! Per-node SGF property storage

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::{
    color::{Move, Stone, StoneColor},
    prop::Prop,
};
use crate::point::{Point, Rotation, points_from_sgf_prop};

/// Property conditions used to classify positions, e.g. `GB` or `C` containing
/// "Correct". An empty substring list means the property only has to exist.
pub type Conditions = BTreeMap<Prop, Vec<String>>;

/// Marks that can be drawn on an intersection from SGF markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Mark {
    Circle,
    Label,
    XMark,
    Square,
    Triangle,
}

impl Mark {
    /// Property holding this mark.
    pub fn prop(self) -> Prop {
        match self {
            Mark::Circle => Prop::CR,
            Mark::Label => Prop::LB,
            Mark::XMark => Prop::MA,
            Mark::Square => Prop::SQ,
            Mark::Triangle => Prop::TR,
        }
    }

    pub fn from_prop(prop: Prop) -> Option<Mark> {
        match prop {
            Prop::CR => Some(Mark::Circle),
            Prop::LB => Some(Mark::Label),
            Prop::MA => Some(Mark::XMark),
            Prop::SQ => Some(Mark::Square),
            Prop::TR => Some(Mark::Triangle),
            _ => None,
        }
    }
}

/// A marked point; labels carry their text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MarkPoint {
    pub point: Point,
    pub label: Option<String>,
}

/// Every stone mentioned by a node, split by color.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeStones {
    pub black: Vec<Stone>,
    pub white: Vec<Stone>,
}

impl NodeStones {
    pub fn of(&self, color: StoneColor) -> &[Stone] {
        match color {
            StoneColor::Black => &self.black,
            StoneColor::White => &self.white,
            StoneColor::Empty => &[],
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Stone> {
        self.black.iter().chain(self.white.iter())
    }

    pub fn is_empty(&self) -> bool {
        self.black.is_empty() && self.white.is_empty()
    }
}

/// One line of game metadata, e.g. `Komi: 6.5`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameInfoEntry {
    pub prop: Prop,
    pub display_name: &'static str,
    pub value: String,
}

/// Parse label data of the form `"ab:text"`.
pub fn parse_label(data: &str) -> Option<MarkPoint> {
    let (coord, value) = data.split_once(':')?;
    let point = Point::from_sgf(coord).ok()?;
    Some(MarkPoint {
        point,
        label: Some(value.to_string()),
    })
}

/// Ordered multimap from SGF property to its values.
///
/// Keys keep their first-insertion order; values keep insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Properties {
    entries: Vec<(Prop, Vec<String>)>,
}

impl Properties {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, prop: Prop) -> Option<usize> {
        self.entries.iter().position(|(p, _)| *p == prop)
    }

    /// Append a value to a property.
    pub fn add(&mut self, prop: Prop, value: impl Into<String>) -> &mut Self {
        let value = value.into();
        match self.position(prop) {
            Some(idx) => self.entries[idx].1.push(value),
            None => self.entries.push((prop, vec![value])),
        }
        self
    }

    /// Append a value under a textual key. Keys outside the SGF vocabulary are
    /// logged and ignored.
    pub fn add_raw(&mut self, key: &str, value: impl Into<String>) -> &mut Self {
        match key.parse::<Prop>() {
            Ok(prop) => self.add(prop, value),
            Err(_) => {
                warn!(key, "ignoring unrecognized SGF property");
                self
            }
        }
    }

    /// Replace all values of a property.
    pub fn set(&mut self, prop: Prop, values: Vec<String>) -> &mut Self {
        match self.position(prop) {
            Some(idx) => self.entries[idx].1 = values,
            None => self.entries.push((prop, values)),
        }
        self
    }

    /// Remove a property, returning its values.
    pub fn remove(&mut self, prop: Prop) -> Option<Vec<String>> {
        let idx = self.position(prop)?;
        Some(self.entries.remove(idx).1)
    }

    /// Remove the first occurrence of `value`. Returns whether anything was
    /// removed; the property itself stays, even if left empty.
    pub fn remove_one_value(&mut self, prop: Prop, value: &str) -> bool {
        let Some(idx) = self.position(prop) else {
            return false;
        };
        let values = &mut self.entries[idx].1;
        match values.iter().position(|v| v == value) {
            Some(i) => {
                values.remove(i);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, prop: Prop) -> bool {
        self.position(prop).is_some()
    }

    pub fn has_value(&self, prop: Prop, value: &str) -> bool {
        self.get_all_values(prop)
            .is_some_and(|values| values.iter().any(|v| v == value))
    }

    pub fn get_all_values(&self, prop: Prop) -> Option<&[String]> {
        self.position(prop).map(|idx| self.entries[idx].1.as_slice())
    }

    pub fn get_one_value(&self, prop: Prop, index: usize) -> Option<&str> {
        self.get_all_values(prop)
            .and_then(|values| values.get(index))
            .map(String::as_str)
    }

    /// Decode one value as an SGF point. Malformed values are logged and
    /// treated as absent.
    pub fn get_as_point(&self, prop: Prop, index: usize) -> Option<Point> {
        let value = self.get_one_value(prop, index)?;
        match Point::from_sgf(value) {
            Ok(pt) => Some(pt),
            Err(err) => {
                warn!(%prop, value, %err, "ignoring malformed point value");
                None
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Prop, &[String])> {
        self.entries.iter().map(|(p, v)| (*p, v.as_slice()))
    }

    pub fn for_each(&self, mut f: impl FnMut(Prop, &[String])) {
        for (prop, values) in self.iter() {
            f(prop, values);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get_comment(&self) -> Option<&str> {
        self.get_one_value(Prop::C, 0)
    }

    /// The node's move. `B` wins over `W`; an empty value is a pass.
    pub fn get_move(&self) -> Option<Move> {
        for color in [StoneColor::Black, StoneColor::White] {
            let prop = move_prop(color);
            if let Some(value) = self.get_one_value(prop, 0) {
                if value.is_empty() {
                    return Some(Move::pass(color));
                }
                return Some(Move {
                    color,
                    point: self.get_as_point(prop, 0),
                });
            }
            if self.contains(prop) {
                return Some(Move::pass(color));
            }
        }
        None
    }

    /// Whether any condition property contains one of its substrings.
    pub fn matches(&self, conditions: &Conditions) -> bool {
        conditions.iter().any(|(prop, substrings)| {
            let Some(values) = self.get_all_values(*prop) else {
                return false;
            };
            substrings.is_empty()
                || values
                    .iter()
                    .any(|v| substrings.iter().any(|s| v.contains(s.as_str())))
        })
    }

    /// AB or AW placements for a color, with point rectangles expanded.
    pub fn get_placements_as_points(&self, color: StoneColor) -> Vec<Point> {
        match color {
            StoneColor::Black => self.expand_points(Prop::AB),
            StoneColor::White => self.expand_points(Prop::AW),
            StoneColor::Empty => Vec::new(),
        }
    }

    /// AE locations, with point rectangles expanded.
    pub fn get_clear_locations_as_points(&self) -> Vec<Point> {
        self.expand_points(Prop::AE)
    }

    /// Placements plus the node's move (passes excluded).
    pub fn get_all_stones(&self) -> NodeStones {
        let mut out = NodeStones::default();
        for color in [StoneColor::Black, StoneColor::White] {
            let stones = self
                .get_placements_as_points(color)
                .into_iter()
                .map(|pt| Stone::new(pt, color));
            match color {
                StoneColor::Black => out.black.extend(stones),
                _ => out.white.extend(stones),
            }
        }
        if let Some(Move {
            color,
            point: Some(point),
        }) = self.get_move()
        {
            match color {
                StoneColor::Black => out.black.push(Stone::new(point, color)),
                StoneColor::White => out.white.push(Stone::new(point, color)),
                StoneColor::Empty => {}
            }
        }
        out
    }

    /// Board markup keyed by mark type, with rectangles expanded.
    pub fn get_all_marks(&self) -> BTreeMap<Mark, Vec<MarkPoint>> {
        let mut out = BTreeMap::new();
        for prop in Prop::marks() {
            let (Some(mark), Some(values)) = (Mark::from_prop(prop), self.get_all_values(prop))
            else {
                continue;
            };
            let mut points = Vec::new();
            for value in values {
                if mark == Mark::Label {
                    match parse_label(value) {
                        Some(mp) => points.push(mp),
                        None => warn!(value = value.as_str(), "ignoring malformed label"),
                    }
                } else {
                    points.extend(
                        decode_points(prop, value)
                            .into_iter()
                            .map(|point| MarkPoint { point, label: None }),
                    );
                }
            }
            out.insert(mark, points);
        }
        out
    }

    /// Human-readable game metadata from the root node.
    pub fn get_game_info(&self) -> Vec<GameInfoEntry> {
        const NAMES: [(Prop, &str); 12] = [
            (Prop::PW, "White Player"),
            (Prop::PB, "Black Player"),
            (Prop::RE, "Result"),
            (Prop::AN, "Commenter"),
            (Prop::SO, "Source"),
            (Prop::RU, "Ruleset"),
            (Prop::KM, "Komi"),
            (Prop::GN, "Game Name"),
            (Prop::EV, "Event"),
            (Prop::RO, "Round"),
            (Prop::PC, "Place Name"),
            (Prop::DT, "Date"),
        ];
        let mut out = Vec::new();
        for (prop, display_name) in NAMES {
            let Some(raw) = self.get_one_value(prop, 0) else {
                continue;
            };
            let value = match prop {
                Prop::PW => with_rank(raw, self.get_one_value(Prop::WR, 0)),
                Prop::PB => with_rank(raw, self.get_one_value(Prop::BR, 0)),
                Prop::KM => raw
                    .trim()
                    .parse::<f64>()
                    .map(|komi| komi.to_string())
                    .unwrap_or_else(|_| raw.to_string()),
                _ => raw.to_string(),
            };
            out.push(GameInfoEntry {
                prop,
                display_name,
                value,
            });
        }
        out
    }

    /// Rotate every point-valued property about the board centre.
    pub fn rotate(&mut self, size: i32, rotation: Rotation) {
        if rotation == Rotation::NoRotation {
            return;
        }
        self.transform_points(|pt| pt.rotate(size, rotation));
    }

    pub fn flip_horz(&mut self, size: i32) {
        self.transform_points(|pt| pt.flip_horz(size));
    }

    pub fn flip_vert(&mut self, size: i32) {
        self.transform_points(|pt| pt.flip_vert(size));
    }

    fn transform_points(&mut self, f: impl Fn(Point) -> Point) {
        for (prop, values) in &mut self.entries {
            if !prop.is_point_valued() {
                continue;
            }
            for value in values.iter_mut() {
                if let Some(updated) = transform_value(*prop, value, &f) {
                    *value = updated;
                }
            }
        }
    }

    fn expand_points(&self, prop: Prop) -> Vec<Point> {
        self.get_all_values(prop)
            .map(|values| values.iter().flat_map(|v| decode_points(prop, v)).collect())
            .unwrap_or_default()
    }
}

pub(crate) fn move_prop(color: StoneColor) -> Prop {
    match color {
        StoneColor::White => Prop::W,
        _ => Prop::B,
    }
}

fn with_rank(name: &str, rank: Option<&str>) -> String {
    match rank {
        Some(rank) => format!("{name} [{rank}]"),
        None => name.to_string(),
    }
}

fn decode_points(prop: Prop, value: &str) -> Vec<Point> {
    match points_from_sgf_prop(value) {
        Ok(points) => points,
        Err(err) => {
            warn!(%prop, value, %err, "ignoring malformed point value");
            Vec::new()
        }
    }
}

// Rewrites the coordinates inside one value, or None when nothing to change.
fn transform_value(prop: Prop, value: &str, f: &impl Fn(Point) -> Point) -> Option<String> {
    if prop == Prop::LB {
        let (coord, text) = value.split_once(':')?;
        let pt = Point::from_sgf(coord).ok()?;
        return Some(format!("{}:{}", f(pt).to_sgf_coord(), text));
    }
    if let Some((a, b)) = value.split_once(':') {
        let (a, b) = (f(Point::from_sgf(a).ok()?), f(Point::from_sgf(b).ok()?));
        let top_left = Point::new(a.x().min(b.x()), a.y().min(b.y()));
        let bot_right = Point::new(a.x().max(b.x()), a.y().max(b.y()));
        return Some(format!(
            "{}:{}",
            top_left.to_sgf_coord(),
            bot_right.to_sgf_coord()
        ));
    }
    let pt = Point::from_sgf(value).ok()?;
    Some(f(pt).to_sgf_coord())
}
