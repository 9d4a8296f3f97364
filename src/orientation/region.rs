//! Named parts of the board used for cropping

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// A region of the board to display.
///
/// `Auto` and `Minimal` are requests to compute a region and never name a
/// crop box themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BoardRegion {
    Left,
    Right,
    Top,
    Bottom,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    #[default]
    All,
    Auto,
    Minimal,
}

impl BoardRegion {
    pub const CORNERS: [BoardRegion; 4] = [
        BoardRegion::TopLeft,
        BoardRegion::TopRight,
        BoardRegion::BottomLeft,
        BoardRegion::BottomRight,
    ];

    pub const SIDES: [BoardRegion; 4] = [
        BoardRegion::Top,
        BoardRegion::Bottom,
        BoardRegion::Left,
        BoardRegion::Right,
    ];

    pub fn is_corner(self) -> bool {
        Self::CORNERS.contains(&self)
    }

    pub fn is_side(self) -> bool {
        Self::SIDES.contains(&self)
    }

    /// The region itself plus, for a corner, the two sides it lies on.
    /// A region restriction is satisfied by any of these.
    pub fn components(self) -> Vec<BoardRegion> {
        use BoardRegion::*;
        match self {
            TopLeft => vec![TopLeft, Top, Left],
            TopRight => vec![TopRight, Top, Right],
            BottomLeft => vec![BottomLeft, Bottom, Left],
            BottomRight => vec![BottomRight, Bottom, Right],
            other => vec![other],
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BoardRegion::Left => "LEFT",
            BoardRegion::Right => "RIGHT",
            BoardRegion::Top => "TOP",
            BoardRegion::Bottom => "BOTTOM",
            BoardRegion::TopLeft => "TOP_LEFT",
            BoardRegion::TopRight => "TOP_RIGHT",
            BoardRegion::BottomLeft => "BOTTOM_LEFT",
            BoardRegion::BottomRight => "BOTTOM_RIGHT",
            BoardRegion::All => "ALL",
            BoardRegion::Auto => "AUTO",
            BoardRegion::Minimal => "MINIMAL",
        }
    }
}

impl fmt::Display for BoardRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BoardRegion {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised = s.trim().to_ascii_uppercase().replace('-', "_");
        match normalised.as_str() {
            "LEFT" => Ok(BoardRegion::Left),
            "RIGHT" => Ok(BoardRegion::Right),
            "TOP" => Ok(BoardRegion::Top),
            "BOTTOM" => Ok(BoardRegion::Bottom),
            "TOP_LEFT" => Ok(BoardRegion::TopLeft),
            "TOP_RIGHT" => Ok(BoardRegion::TopRight),
            "BOTTOM_LEFT" => Ok(BoardRegion::BottomLeft),
            "BOTTOM_RIGHT" => Ok(BoardRegion::BottomRight),
            "ALL" => Ok(BoardRegion::All),
            "AUTO" => Ok(BoardRegion::Auto),
            "MINIMAL" => Ok(BoardRegion::Minimal),
            _ => Err(crate::Error::ParseBoardRegion {
                input: s.to_string(),
                expected: "left, right, top, bottom, top-left, top-right, bottom-left, \
                           bottom-right, all, auto, minimal"
                    .to_string(),
            }),
        }
    }
}
