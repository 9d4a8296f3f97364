//! Crop boxes: the rectangle of the board shown for a region

use serde::{Deserialize, Serialize};

use super::region::BoardRegion;
use crate::{Error, Result, bbox::BoundingBox, point::Point};

/// Boards smaller than this are never cropped.
pub const MIN_CROPPABLE_SIZE: i32 = 19;

/// A bounding box on a board of a given size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cropbox {
    bbox: BoundingBox,
    size: i32,
}

impl Cropbox {
    /// Crop box for `region` on a `size` board.
    ///
    /// Sides extend one line past the centre line. Corners extend one line past
    /// it vertically and two horizontally. Boards below 19 lines always get the
    /// whole board.
    pub fn get(region: BoardRegion, size: i32) -> Result<Cropbox> {
        let max = size - 1;
        let full = BoundingBox::full_board(size)?;
        if size < MIN_CROPPABLE_SIZE {
            return Ok(Cropbox { bbox: full, size });
        }

        let half = (max + 1) / 2;
        let (mut top, mut left, mut bot, mut right) = (0, 0, max, max);
        match region {
            BoardRegion::All => {}
            BoardRegion::Left => right = half + 1,
            BoardRegion::Right => left = half - 1,
            BoardRegion::Top => bot = half + 1,
            BoardRegion::Bottom => top = half - 1,
            BoardRegion::TopLeft => {
                bot = half + 1;
                right = half + 2;
            }
            BoardRegion::TopRight => {
                bot = half + 1;
                left = half - 2;
            }
            BoardRegion::BottomLeft => {
                top = half - 1;
                right = half + 2;
            }
            BoardRegion::BottomRight => {
                top = half - 1;
                left = half - 2;
            }
            BoardRegion::Auto | BoardRegion::Minimal => {
                return Err(Error::InvalidRegion {
                    region: region.to_string(),
                });
            }
        }
        let bbox = BoundingBox::new(Point::new(left, top), Point::new(right, bot))?;
        Ok(Cropbox { bbox, size })
    }

    pub fn bbox(&self) -> BoundingBox {
        self.bbox
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    pub fn has_ragged_top(&self) -> bool {
        self.bbox.top() > 0
    }

    pub fn has_ragged_left(&self) -> bool {
        self.bbox.left() > 0
    }

    pub fn has_ragged_bottom(&self) -> bool {
        self.bbox.bottom() < self.size - 1
    }

    pub fn has_ragged_right(&self) -> bool {
        self.bbox.right() < self.size - 1
    }

    /// Columns in the box, minus one.
    pub fn x_points(&self) -> i32 {
        self.bbox.width()
    }

    /// Rows in the box, minus one.
    pub fn y_points(&self) -> i32 {
        self.bbox.height()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corners(region: BoardRegion, size: i32) -> ((i32, i32), (i32, i32)) {
        let bbox = Cropbox::get(region, size).unwrap().bbox();
        (
            (bbox.left(), bbox.top()),
            (bbox.right(), bbox.bottom()),
        )
    }

    #[test]
    fn test_nineteen_regions() {
        assert_eq!(corners(BoardRegion::All, 19), ((0, 0), (18, 18)));
        assert_eq!(corners(BoardRegion::Left, 19), ((0, 0), (10, 18)));
        assert_eq!(corners(BoardRegion::Right, 19), ((8, 0), (18, 18)));
        assert_eq!(corners(BoardRegion::Top, 19), ((0, 0), (18, 10)));
        assert_eq!(corners(BoardRegion::Bottom, 19), ((0, 8), (18, 18)));
        assert_eq!(corners(BoardRegion::TopLeft, 19), ((0, 0), (11, 10)));
        assert_eq!(corners(BoardRegion::TopRight, 19), ((7, 0), (18, 10)));
        assert_eq!(corners(BoardRegion::BottomLeft, 19), ((0, 8), (11, 18)));
        assert_eq!(corners(BoardRegion::BottomRight, 19), ((7, 8), (18, 18)));
    }

    #[test]
    fn test_small_boards_are_never_cropped() {
        assert_eq!(corners(BoardRegion::TopLeft, 13), ((0, 0), (12, 12)));
        assert_eq!(corners(BoardRegion::Bottom, 9), ((0, 0), (8, 8)));
        assert!(Cropbox::get(BoardRegion::Auto, 9).is_ok());
    }

    #[test]
    fn test_auto_is_not_a_crop_box() {
        assert!(matches!(
            Cropbox::get(BoardRegion::Auto, 19),
            Err(Error::InvalidRegion { .. })
        ));
        assert!(Cropbox::get(BoardRegion::Minimal, 19).is_err());
    }

    #[test]
    fn test_raggedness() {
        let cb = Cropbox::get(BoardRegion::TopRight, 19).unwrap();
        assert!(cb.has_ragged_left());
        assert!(cb.has_ragged_bottom());
        assert!(!cb.has_ragged_top());
        assert!(!cb.has_ragged_right());
        assert_eq!(cb.x_points(), 11);
        assert_eq!(cb.y_points(), 10);

        let all = Cropbox::get(BoardRegion::All, 19).unwrap();
        assert!(!all.has_ragged_left() && !all.has_ragged_bottom());
    }
}
