//! Board coordinates, SGF point encoding and board-centred transforms

use std::{cmp::Ordering, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Largest board SGF coordinates can address: `a`-`z` then `A`-`Z`.
pub const MAX_BOARD_SIZE: i32 = 52;

/// A 0-indexed intersection on the board. `(0, 0)` is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    x: i32,
    y: i32,
}

/// Rotation of the board about its centre.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Rotation {
    #[default]
    NoRotation,
    Clockwise90,
    Clockwise180,
    Clockwise270,
}

impl Rotation {
    /// All four rotations, identity first.
    pub fn all() -> [Rotation; 4] {
        [
            Rotation::NoRotation,
            Rotation::Clockwise90,
            Rotation::Clockwise180,
            Rotation::Clockwise270,
        ]
    }

    /// Rotation that undoes this one.
    pub fn inverse(self) -> Rotation {
        match self {
            Rotation::NoRotation => Rotation::NoRotation,
            Rotation::Clockwise90 => Rotation::Clockwise270,
            Rotation::Clockwise180 => Rotation::Clockwise180,
            Rotation::Clockwise270 => Rotation::Clockwise90,
        }
    }

    /// Clockwise angle in degrees.
    pub fn degrees(self) -> u16 {
        match self {
            Rotation::NoRotation => 0,
            Rotation::Clockwise90 => 90,
            Rotation::Clockwise180 => 180,
            Rotation::Clockwise270 => 270,
        }
    }

    /// Inverse of [`Rotation::degrees`]. Angles are taken modulo 360 and must be
    /// a multiple of 90.
    pub fn from_degrees(degrees: u16) -> Option<Rotation> {
        match degrees % 360 {
            0 => Some(Rotation::NoRotation),
            90 => Some(Rotation::Clockwise90),
            180 => Some(Rotation::Clockwise180),
            270 => Some(Rotation::Clockwise270),
            _ => None,
        }
    }
}

/// Mirror of the board about one of its centre lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Flip {
    #[default]
    NoFlip,
    /// Top and bottom swap.
    Vertical,
    /// Left and right swap.
    Horizontal,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }

    pub const fn x(&self) -> i32 {
        self.x
    }

    pub const fn y(&self) -> i32 {
        self.y
    }

    /// Canonical string key, `"x,y"`.
    pub fn key(&self) -> String {
        self.to_string()
    }

    /// Parse a single two-letter SGF coordinate; `"aa"` is `(0, 0)` and
    /// `"AA"` is `(26, 26)`.
    pub fn from_sgf(coord: &str) -> Result<Point> {
        let bytes = coord.as_bytes();
        if bytes.len() != 2 {
            return Err(Error::InvalidSgfPoint {
                input: coord.to_string(),
                reason: "expected exactly two letters".to_string(),
            });
        }
        let axis = |b: u8| -> Result<i32> {
            match b {
                b'a'..=b'z' => Ok(i32::from(b - b'a')),
                b'A'..=b'Z' => Ok(i32::from(b - b'A') + 26),
                _ => Err(Error::InvalidSgfPoint {
                    input: coord.to_string(),
                    reason: format!("'{}' is not in a-z or A-Z", b as char),
                }),
            }
        };
        Ok(Point::new(axis(bytes[0])?, axis(bytes[1])?))
    }

    /// Two-letter SGF coordinate for this point.
    ///
    /// Every point of a board up to [`MAX_BOARD_SIZE`] has one. Coordinates
    /// outside that range are clamped to it.
    pub fn to_sgf_coord(&self) -> String {
        let letter = |v: i32| {
            let v = v.clamp(0, MAX_BOARD_SIZE - 1) as u8;
            if v < 26 {
                char::from(b'a' + v)
            } else {
                char::from(b'A' + v - 26)
            }
        };
        format!("{}{}", letter(self.x), letter(self.y))
    }

    #[must_use = "translate returns a new point; the original is unchanged"]
    pub fn translate(&self, dx: i32, dy: i32) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }

    /// Coordinates relative to the board centre with y pointing up:
    /// `(x - mid, mid - y)` where `mid = (size - 1) / 2`.
    ///
    /// Exact for odd board sizes.
    pub fn normalize(&self, size: i32) -> Point {
        let mid = (size - 1) / 2;
        Point::new(self.x - mid, mid - self.y)
    }

    /// Inverse of [`Point::normalize`].
    pub fn denormalize(&self, size: i32) -> Point {
        let mid = (size - 1) / 2;
        Point::new(self.x + mid, mid - self.y)
    }

    /// Rotate clockwise about the centre of a `size` board.
    #[must_use = "rotate returns a new point; the original is unchanged"]
    pub fn rotate(&self, size: i32, rotation: Rotation) -> Point {
        let (nx, ny) = self.doubled(size);
        let (rx, ry) = match rotation {
            Rotation::NoRotation => (nx, ny),
            Rotation::Clockwise90 => (ny, -nx),
            Rotation::Clockwise180 => (-nx, -ny),
            Rotation::Clockwise270 => (-ny, nx),
        };
        Point::undoubled(rx, ry, size)
    }

    /// Undo [`Point::rotate`].
    #[must_use = "antirotate returns a new point; the original is unchanged"]
    pub fn antirotate(&self, size: i32, rotation: Rotation) -> Point {
        self.rotate(size, rotation.inverse())
    }

    #[must_use = "flip_vert returns a new point; the original is unchanged"]
    pub fn flip_vert(&self, size: i32) -> Point {
        let (nx, ny) = self.doubled(size);
        Point::undoubled(nx, -ny, size)
    }

    #[must_use = "flip_horz returns a new point; the original is unchanged"]
    pub fn flip_horz(&self, size: i32) -> Point {
        let (nx, ny) = self.doubled(size);
        Point::undoubled(-nx, ny, size)
    }

    #[must_use = "flip returns a new point; the original is unchanged"]
    pub fn flip(&self, size: i32, flip: Flip) -> Point {
        match flip {
            Flip::NoFlip => *self,
            Flip::Vertical => self.flip_vert(size),
            Flip::Horizontal => self.flip_horz(size),
        }
    }

    // Twice the normalized coordinates, so even board sizes stay integral.
    fn doubled(&self, size: i32) -> (i32, i32) {
        (2 * self.x - (size - 1), (size - 1) - 2 * self.y)
    }

    fn undoubled(nx: i32, ny: i32, size: i32) -> Point {
        Point::new((nx + size - 1) / 2, (size - 1 - ny) / 2)
    }
}

/// Expand an SGF point value into points.
///
/// A two-letter value is a single point; `"aa:cc"` is a rectangle, expanded
/// row by row.
pub fn points_from_sgf_prop(value: &str) -> Result<Vec<Point>> {
    if value.len() == 2 {
        return Ok(vec![Point::from_sgf(value)?]);
    }
    let parts: Vec<&str> = value.split(':').collect();
    if parts.len() != 2 {
        return Err(Error::InvalidSgfPoint {
            input: value.to_string(),
            reason: "expected a point or a point rectangle 'aa:bb'".to_string(),
        });
    }
    let top_left = Point::from_sgf(parts[0])?;
    let bot_right = Point::from_sgf(parts[1])?;
    let mut out = Vec::new();
    for y in top_left.y..=bot_right.y {
        for x in top_left.x..=bot_right.x {
            out.push(Point::new(x, y));
        }
    }
    Ok(out)
}

impl Ord for Point {
    /// Row-major order: top to bottom, then left to right.
    fn cmp(&self, other: &Self) -> Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl FromStr for Point {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidPointKey {
            input: s.to_string(),
        };
        let (x, y) = s.trim().split_once(',').ok_or_else(invalid)?;
        let x = x.trim().parse().map_err(|_| invalid())?;
        let y = y.trim().parse().map_err(|_| invalid())?;
        Ok(Point::new(x, y))
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Point::new(x, y)
    }
}
