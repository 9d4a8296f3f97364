//! Symbols for the three layers of a flattened intersection.
//!
//! Each layer has its own closed set, so a stone symbol can never end up on
//! the mark layer.

use serde::{Deserialize, Serialize};

use crate::rules::{Mark, StoneColor};

/// Board decoration under any stone: edges, corners and star points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BaseSymbol {
    #[default]
    Empty,
    TlCorner,
    TrCorner,
    BlCorner,
    BrCorner,
    TopEdge,
    BotEdge,
    LeftEdge,
    RightEdge,
    Center,
    CenterStarpoint,
}

impl BaseSymbol {
    pub fn to_char(self) -> char {
        match self {
            BaseSymbol::Empty => ' ',
            BaseSymbol::CenterStarpoint => '+',
            _ => '.',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StoneSymbol {
    #[default]
    Empty,
    BStone,
    WStone,
}

impl StoneSymbol {
    pub fn from_color(color: StoneColor) -> StoneSymbol {
        match color {
            StoneColor::Empty => StoneSymbol::Empty,
            StoneColor::Black => StoneSymbol::BStone,
            StoneColor::White => StoneSymbol::WStone,
        }
    }

    pub fn color(self) -> StoneColor {
        match self {
            StoneSymbol::Empty => StoneColor::Empty,
            StoneSymbol::BStone => StoneColor::Black,
            StoneSymbol::WStone => StoneColor::White,
        }
    }

    pub fn is_stone(self) -> bool {
        self != StoneSymbol::Empty
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MarkSymbol {
    #[default]
    Empty,
    Triangle,
    Square,
    Circle,
    XMark,
    /// Text carried in the intersection's label.
    TextLabel,
    LastMove,
    NextVariation,
    CorrectVariation,
    KoLocation,
}

impl MarkSymbol {
    pub fn from_mark(mark: Mark) -> MarkSymbol {
        match mark {
            Mark::Circle => MarkSymbol::Circle,
            Mark::Label => MarkSymbol::TextLabel,
            Mark::XMark => MarkSymbol::XMark,
            Mark::Square => MarkSymbol::Square,
            Mark::Triangle => MarkSymbol::Triangle,
        }
    }

    pub fn is_empty(self) -> bool {
        self == MarkSymbol::Empty
    }

    /// Whether the mark is drawn from the intersection's text label.
    pub fn is_textual(self) -> bool {
        matches!(
            self,
            MarkSymbol::TextLabel | MarkSymbol::NextVariation | MarkSymbol::CorrectVariation
        )
    }

    /// Single-character glyph for text diagrams. Textual marks use their label.
    pub fn to_char(self) -> Option<char> {
        match self {
            MarkSymbol::Triangle => Some('^'),
            MarkSymbol::Square => Some('#'),
            MarkSymbol::Circle => Some('*'),
            MarkSymbol::XMark => Some('x'),
            MarkSymbol::LastMove => Some('!'),
            MarkSymbol::KoLocation => Some('k'),
            _ => None,
        }
    }
}
