//! Stone colors and moves

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::point::Point;

/// State of a single intersection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum StoneColor {
    #[default]
    Empty,
    Black,
    White,
}

impl StoneColor {
    /// The other player. `Empty` maps to itself.
    pub fn opponent(self) -> StoneColor {
        match self {
            StoneColor::Black => StoneColor::White,
            StoneColor::White => StoneColor::Black,
            StoneColor::Empty => StoneColor::Empty,
        }
    }

    pub fn is_stone(self) -> bool {
        self != StoneColor::Empty
    }

    /// SGF move token, `"B"` or `"W"`.
    pub fn sgf_token(self) -> Option<&'static str> {
        match self {
            StoneColor::Black => Some("B"),
            StoneColor::White => Some("W"),
            StoneColor::Empty => None,
        }
    }

    pub fn from_sgf_token(token: &str) -> Option<StoneColor> {
        match token {
            "B" => Some(StoneColor::Black),
            "W" => Some(StoneColor::White),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            StoneColor::Empty => '.',
            StoneColor::Black => 'X',
            StoneColor::White => 'O',
        }
    }

    /// Display name, as used in collision captions.
    pub fn name(self) -> &'static str {
        match self {
            StoneColor::Empty => "Empty",
            StoneColor::Black => "Black",
            StoneColor::White => "White",
        }
    }
}

impl fmt::Display for StoneColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StoneColor {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "b" | "black" => Ok(StoneColor::Black),
            "w" | "white" => Ok(StoneColor::White),
            "e" | "empty" => Ok(StoneColor::Empty),
            _ => Err(crate::Error::ParseStoneColor {
                input: s.to_string(),
                expected: "black/b, white/w, empty/e".to_string(),
            }),
        }
    }
}

/// A stone placement. A move without a point is a pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub color: StoneColor,
    pub point: Option<Point>,
}

impl Move {
    pub fn new(color: StoneColor, point: Point) -> Self {
        Self {
            color,
            point: Some(point),
        }
    }

    pub fn pass(color: StoneColor) -> Self {
        Self { color, point: None }
    }

    pub fn is_pass(&self) -> bool {
        self.point.is_none()
    }
}

/// A placed stone: a color at a definite point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Stone {
    pub point: Point,
    pub color: StoneColor,
}

impl Stone {
    pub fn new(point: Point, color: StoneColor) -> Self {
        Self { point, color }
    }
}
