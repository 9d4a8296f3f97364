//! Axis-aligned bounding boxes over board points

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    point::{MAX_BOARD_SIZE, Point},
};

/// An inclusive rectangle of intersections. `top_left <= bot_right` on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoundingBox {
    top_left: Point,
    bot_right: Point,
}

impl BoundingBox {
    pub fn new(top_left: Point, bot_right: Point) -> Result<Self> {
        if top_left.x() > bot_right.x() || top_left.y() > bot_right.y() {
            return Err(Error::InvalidBoundingBox {
                top_left: top_left.to_string(),
                bot_right: bot_right.to_string(),
            });
        }
        Ok(BoundingBox {
            top_left,
            bot_right,
        })
    }

    /// Smallest box holding every point. `None` for an empty slice.
    pub fn from_pts(points: &[Point]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut bbox = BoundingBox {
            top_left: *first,
            bot_right: *first,
        };
        for pt in rest {
            bbox = bbox.expand_to_contain(*pt);
        }
        Some(bbox)
    }

    /// Box spanning a whole `size` board.
    pub fn full_board(size: i32) -> Result<Self> {
        if !(1..=MAX_BOARD_SIZE).contains(&size) {
            return Err(Error::InvalidBoardSize { size });
        }
        BoundingBox::new(Point::new(0, 0), Point::new(size - 1, size - 1))
    }

    pub fn top_left(&self) -> Point {
        self.top_left
    }

    pub fn bot_right(&self) -> Point {
        self.bot_right
    }

    pub fn top_right(&self) -> Point {
        Point::new(self.right(), self.top())
    }

    pub fn bot_left(&self) -> Point {
        Point::new(self.left(), self.bottom())
    }

    pub fn top(&self) -> i32 {
        self.top_left.y()
    }

    pub fn left(&self) -> i32 {
        self.top_left.x()
    }

    pub fn bottom(&self) -> i32 {
        self.bot_right.y()
    }

    pub fn right(&self) -> i32 {
        self.bot_right.x()
    }

    /// Distance between the left and right edges (one less than the number of
    /// columns covered).
    pub fn width(&self) -> i32 {
        self.right() - self.left()
    }

    pub fn height(&self) -> i32 {
        self.bottom() - self.top()
    }

    /// Centre point, rounded towards the top-left.
    pub fn center(&self) -> Point {
        Point::new(
            self.left() + self.width() / 2,
            self.top() + self.height() / 2,
        )
    }

    /// Inclusive containment.
    pub fn contains(&self, pt: Point) -> bool {
        pt.x() >= self.left()
            && pt.x() <= self.right()
            && pt.y() >= self.top()
            && pt.y() <= self.bottom()
    }

    /// Whether `other` lies entirely inside this box.
    pub fn covers(&self, other: &BoundingBox) -> bool {
        self.contains(other.top_left) && self.contains(other.bot_right)
    }

    /// Overlapping region, if any.
    pub fn intersect(&self, other: &BoundingBox) -> Option<BoundingBox> {
        let top_left = Point::new(self.left().max(other.left()), self.top().max(other.top()));
        let bot_right = Point::new(
            self.right().min(other.right()),
            self.bottom().min(other.bottom()),
        );
        BoundingBox::new(top_left, bot_right).ok()
    }

    #[must_use = "expand_to_contain returns a new box; the original is unchanged"]
    pub fn expand_to_contain(&self, pt: Point) -> BoundingBox {
        BoundingBox {
            top_left: Point::new(self.left().min(pt.x()), self.top().min(pt.y())),
            bot_right: Point::new(self.right().max(pt.x()), self.bottom().max(pt.y())),
        }
    }

    #[must_use = "translate returns a new box; the original is unchanged"]
    pub fn translate(&self, dx: i32, dy: i32) -> BoundingBox {
        BoundingBox {
            top_left: self.top_left.translate(dx, dy),
            bot_right: self.bot_right.translate(dx, dy),
        }
    }

    /// Split into horizontal bands, top to bottom. Each fraction takes that
    /// share of the height; the remainder becomes the final band.
    pub fn h_split(&self, fractions: &[f64]) -> Result<Vec<BoundingBox>> {
        let cuts = split_offsets(self.height(), fractions)?;
        let mut out = Vec::with_capacity(cuts.len() + 1);
        let mut top = self.top();
        for cut in cuts {
            let bottom = self.top() + cut;
            out.push(BoundingBox::new(
                Point::new(self.left(), top),
                Point::new(self.right(), bottom),
            )?);
            top = bottom;
        }
        out.push(BoundingBox::new(Point::new(self.left(), top), self.bot_right)?);
        Ok(out)
    }

    /// Split into vertical bands, left to right. See [`BoundingBox::h_split`].
    pub fn v_split(&self, fractions: &[f64]) -> Result<Vec<BoundingBox>> {
        let cuts = split_offsets(self.width(), fractions)?;
        let mut out = Vec::with_capacity(cuts.len() + 1);
        let mut left = self.left();
        for cut in cuts {
            let right = self.left() + cut;
            out.push(BoundingBox::new(
                Point::new(left, self.top()),
                Point::new(right, self.bottom()),
            )?);
            left = right;
        }
        out.push(BoundingBox::new(Point::new(left, self.top()), self.bot_right)?);
        Ok(out)
    }
}

// Cumulative cut offsets along an axis of the given extent.
fn split_offsets(extent: i32, fractions: &[f64]) -> Result<Vec<i32>> {
    let total: f64 = fractions.iter().sum();
    if total >= 1.0 || fractions.iter().any(|f| *f < 0.0 || !f.is_finite()) {
        return Err(Error::InvalidSplit {
            fractions: fractions.to_vec(),
        });
    }
    let mut acc = 0.0;
    Ok(fractions
        .iter()
        .map(|f| {
            acc += f;
            (acc * f64::from(extent)).round() as i32
        })
        .collect())
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]-[{}]", self.top_left, self.bot_right)
    }
}
