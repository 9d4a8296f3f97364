//! A single flattened board point.

use serde::{Deserialize, Serialize};

use super::{
    starpoints,
    symbols::{BaseSymbol, MarkSymbol, StoneSymbol},
};
use crate::{Error, Result, point::Point, rules::StoneColor};

/// Three independent layers: decoration, stone and mark, plus an optional
/// text label for textual marks.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Intersection {
    pt: Point,
    base: BaseSymbol,
    stone: StoneSymbol,
    mark: MarkSymbol,
    text_label: Option<String>,
}

impl Intersection {
    pub fn new(pt: Point) -> Self {
        Self {
            pt,
            base: BaseSymbol::Empty,
            stone: StoneSymbol::Empty,
            mark: MarkSymbol::Empty,
            text_label: None,
        }
    }

    /// Build the intersection at `pt` of a `max_ints` board. The base layer
    /// depends only on the position.
    pub fn create(
        pt: Point,
        stone_color: StoneColor,
        mark: Option<MarkSymbol>,
        text_label: Option<&str>,
        max_ints: i32,
    ) -> Result<Self> {
        if pt.x() < 0 || pt.y() < 0 || pt.x() >= max_ints || pt.y() >= max_ints {
            return Err(Error::PointOutOfBounds {
                x: pt.x(),
                y: pt.y(),
                size: max_ints,
            });
        }

        let mut out = Intersection::new(pt);
        out.set_base(base_symbol(pt, max_ints))
            .set_stone(StoneSymbol::from_color(stone_color));
        if let Some(mark) = mark {
            out.set_mark(mark);
        }
        if let Some(label) = text_label {
            out.set_text_label(label);
        }
        Ok(out)
    }

    pub fn pt(&self) -> Point {
        self.pt
    }

    pub fn base(&self) -> BaseSymbol {
        self.base
    }

    pub fn stone(&self) -> StoneSymbol {
        self.stone
    }

    pub fn mark(&self) -> MarkSymbol {
        self.mark
    }

    pub fn text_label(&self) -> Option<&str> {
        self.text_label.as_deref()
    }

    pub fn set_base(&mut self, base: BaseSymbol) -> &mut Self {
        self.base = base;
        self
    }

    pub fn set_stone(&mut self, stone: StoneSymbol) -> &mut Self {
        self.stone = stone;
        self
    }

    pub fn set_mark(&mut self, mark: MarkSymbol) -> &mut Self {
        self.mark = mark;
        self
    }

    pub fn set_text_label(&mut self, label: impl Into<String>) -> &mut Self {
        self.text_label = Some(label.into());
        self
    }

    pub fn clear_text_label(&mut self) -> &mut Self {
        self.text_label = None;
        self
    }

    /// Glyph for text diagrams: the stone, else the mark or the first
    /// character of its label, else the base decoration.
    pub fn to_char(&self) -> char {
        match self.stone {
            StoneSymbol::BStone => return 'X',
            StoneSymbol::WStone => return 'O',
            StoneSymbol::Empty => {}
        }
        if self.mark.is_textual() {
            if let Some(c) = self.text_label.as_deref().and_then(|l| l.chars().next()) {
                return c;
            }
        }
        self.mark.to_char().unwrap_or_else(|| self.base.to_char())
    }
}

fn base_symbol(pt: Point, max_ints: i32) -> BaseSymbol {
    let last = max_ints - 1;
    match (pt.x(), pt.y()) {
        (0, 0) => BaseSymbol::TlCorner,
        (0, y) if y == last => BaseSymbol::BlCorner,
        (x, 0) if x == last => BaseSymbol::TrCorner,
        (x, y) if x == last && y == last => BaseSymbol::BrCorner,
        (_, 0) => BaseSymbol::TopEdge,
        (0, _) => BaseSymbol::LeftEdge,
        (x, _) if x == last => BaseSymbol::RightEdge,
        (_, y) if y == last => BaseSymbol::BotEdge,
        _ if starpoints::is_pt(pt, max_ints) => BaseSymbol::CenterStarpoint,
        _ => BaseSymbol::Center,
    }
}
