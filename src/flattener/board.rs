//! Cropped two-dimensional grid of intersections.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{
    flattened::{MarkMap, StoneMap},
    intersection::Intersection,
};
use crate::{Error, Result, bbox::BoundingBox, orientation::Cropbox, point::Point, rules::StoneColor};

/// Rows of cells covering a crop box of a `max_board_size` board.
///
/// Cells are addressed two ways: by column and row within the grid
/// ([`get_int`](Board::get_int)) or by board coordinates
/// ([`get_int_board_pt`](Board::get_int_board_pt)).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board<T = Intersection> {
    board_array: Vec<Vec<T>>,
    bbox: BoundingBox,
    max_board_size: i32,
}

/// A cell that differs between two boards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardDiffPt<T> {
    pub prev_value: T,
    pub new_value: T,
    /// Column and row within the grid.
    pub col_row_pt: Point,
    /// The same cell in board coordinates.
    pub board_pt: Point,
}

impl Board<Intersection> {
    /// Lay out the intersections of `cropbox`, top row first.
    pub fn create(cropbox: &Cropbox, stone_map: &StoneMap, mark_map: &MarkMap) -> Result<Self> {
        let bbox = cropbox.bbox();
        let mut board_array = Vec::with_capacity(bbox.height() as usize);
        for y in bbox.top()..=bbox.bottom() {
            let mut row = Vec::with_capacity(bbox.width() as usize);
            for x in bbox.left()..=bbox.right() {
                let pt = Point::new(x, y);
                let color = stone_map.get(&pt).map_or(StoneColor::Empty, |s| s.color);
                row.push(Intersection::create(
                    pt,
                    color,
                    mark_map.marks.get(&pt).copied(),
                    mark_map.labels.get(&pt).map(String::as_str),
                    cropbox.size(),
                )?);
            }
            board_array.push(row);
        }
        Ok(Board::new(board_array, bbox, cropbox.size()))
    }
}

impl<T> Board<T> {
    pub fn new(board_array: Vec<Vec<T>>, bbox: BoundingBox, max_board_size: i32) -> Self {
        Self {
            board_array,
            bbox,
            max_board_size,
        }
    }

    /// Usually 9, 13 or 19.
    pub fn max_board_size(&self) -> i32 {
        self.max_board_size
    }

    pub fn top_left(&self) -> Point {
        self.pt_to_board_pt(Point::new(0, 0))
    }

    pub fn bot_right(&self) -> Point {
        self.top_left()
            .translate(self.width() as i32 - 1, self.height() as i32 - 1)
    }

    pub fn bounding_box(&self) -> BoundingBox {
        self.bbox
    }

    pub fn is_cropped(&self) -> bool {
        self.width() as i32 != self.max_board_size || self.height() as i32 != self.max_board_size
    }

    pub fn height(&self) -> usize {
        self.board_array.len()
    }

    pub fn width(&self) -> usize {
        self.board_array.first().map_or(0, Vec::len)
    }

    /// Cell at column `pt.x()`, row `pt.y()` of the grid.
    pub fn get_int(&self, pt: Point) -> Option<&T> {
        let x = usize::try_from(pt.x()).ok()?;
        let y = usize::try_from(pt.y()).ok()?;
        self.board_array.get(y)?.get(x)
    }

    /// Cell at board coordinate `pt`, or `None` outside the crop box.
    pub fn get_int_board_pt(&self, pt: Point) -> Option<&T> {
        self.get_int(self.board_pt_to_pt(pt))
    }

    pub fn pt_to_board_pt(&self, pt: Point) -> Point {
        pt.translate(self.bbox.left(), self.bbox.top())
    }

    pub fn board_pt_to_pt(&self, pt: Point) -> Point {
        pt.translate(-self.bbox.left(), -self.bbox.top())
    }

    pub fn board_array(&self) -> &[Vec<T>] {
        &self.board_array
    }

    /// Map every cell, keeping the crop box. `f` gets the cell and its
    /// column and row.
    pub fn transform<U>(&self, mut f: impl FnMut(&T, i32, i32) -> U) -> Board<U> {
        let board_array = self
            .board_array
            .iter()
            .enumerate()
            .map(|(y, row)| {
                row.iter()
                    .enumerate()
                    .map(|(x, cell)| f(cell, x as i32, y as i32))
                    .collect()
            })
            .collect();
        Board::new(board_array, self.bbox, self.max_board_size)
    }

    /// Cells for which `is_different(old, new)` holds. The boards must have
    /// the same dimensions.
    pub fn differ(
        &self,
        other: &Board<T>,
        is_different: impl Fn(&T, &T) -> bool,
    ) -> Result<Vec<BoardDiffPt<T>>>
    where
        T: Clone,
    {
        if self.height() != other.height() || self.width() != other.width() {
            return Err(Error::BoardDimensionMismatch {
                left_width: self.width(),
                left_height: self.height(),
                right_width: other.width(),
                right_height: other.height(),
            });
        }
        let mut out = Vec::new();
        for (y, (row, other_row)) in self.board_array.iter().zip(&other.board_array).enumerate() {
            for (x, (old, new)) in row.iter().zip(other_row).enumerate() {
                if is_different(old, new) {
                    let col_row_pt = Point::new(x as i32, y as i32);
                    out.push(BoardDiffPt {
                        prev_value: old.clone(),
                        new_value: new.clone(),
                        col_row_pt,
                        board_pt: self.pt_to_board_pt(col_row_pt),
                    });
                }
            }
        }
        Ok(out)
    }

    pub fn diff(&self, other: &Board<T>) -> Result<Vec<BoardDiffPt<T>>>
    where
        T: Clone + PartialEq,
    {
        self.differ(other, |a, b| a != b)
    }
}

/// Differ for redrawing a display: any marked cell counts as changed, as
/// does a changed stone.
pub fn display_diff(old: &Intersection, new: &Intersection) -> bool {
    !new.mark().is_empty() || old.stone() != new.stone()
}

impl fmt::Display for Board<Intersection> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.board_array {
            let line: Vec<String> = row.iter().map(|i| i.to_char().to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        flattener::symbols::{BaseSymbol, MarkSymbol, StoneSymbol},
        orientation::BoardRegion,
        rules::Stone,
    };

    fn pt(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    fn stones(list: &[(i32, i32, StoneColor)]) -> StoneMap {
        list.iter()
            .map(|&(x, y, color)| (pt(x, y), Stone::new(pt(x, y), color)))
            .collect()
    }

    fn marks() -> MarkMap {
        let mut map = MarkMap::default();
        map.marks.insert(pt(2, 2), MarkSymbol::Triangle);
        map.marks.insert(pt(14, 1), MarkSymbol::Square);
        map
    }

    fn top_right(stone_map: &StoneMap, mark_map: &MarkMap) -> Board {
        let cropbox = Cropbox::get(BoardRegion::TopRight, 19).unwrap();
        Board::create(&cropbox, stone_map, mark_map).unwrap()
    }

    fn default_board() -> Board {
        let stone_map = stones(&[
            (1, 1, StoneColor::Black),
            (14, 1, StoneColor::Black),
            (13, 3, StoneColor::Black),
        ]);
        top_right(&stone_map, &marks())
    }

    #[test]
    fn test_create() {
        let board = default_board();
        assert_eq!(board.max_board_size(), 19);

        let int = board.get_int(pt(0, 0)).unwrap();
        assert_eq!(int.base(), BaseSymbol::TopEdge);
        assert_eq!(int.stone(), StoneSymbol::Empty);
        assert_eq!(int.mark(), MarkSymbol::Empty);

        assert!(board.get_int_board_pt(pt(0, 0)).is_none());

        let int = board.get_int_board_pt(pt(14, 1)).unwrap();
        assert_eq!(int.base(), BaseSymbol::Center);
        assert_eq!(int.stone(), StoneSymbol::BStone);
        assert_eq!(int.mark(), MarkSymbol::Square);
    }

    #[test]
    fn test_pt_to_board_pt() {
        let board = default_board();
        assert_eq!(board.pt_to_board_pt(pt(0, 0)), pt(7, 0));
        assert_eq!(board.board_pt_to_pt(pt(7, 0)), pt(0, 0));
        assert_eq!(board.pt_to_board_pt(board.board_pt_to_pt(pt(7, 0))), pt(7, 0));
        assert!(board.is_cropped());
    }

    #[test]
    fn test_corners_of_crop() {
        let board = default_board();
        assert_eq!(board.top_left(), pt(7, 0));
        assert_eq!(board.bot_right(), pt(18, 10));

        let empty = StoneMap::new();
        let cases = [
            (BoardRegion::Bottom, 19, pt(0, 8), pt(18, 18), true),
            (BoardRegion::All, 19, pt(0, 0), pt(18, 18), false),
            (BoardRegion::All, 13, pt(0, 0), pt(12, 12), false),
        ];
        for (region, size, tl, br, cropped) in cases {
            let cropbox = Cropbox::get(region, size).unwrap();
            let board = Board::create(&cropbox, &empty, &MarkMap::default()).unwrap();
            assert_eq!(board.top_left(), tl);
            assert_eq!(board.bot_right(), br);
            assert_eq!(board.is_cropped(), cropped);
        }
    }

    #[test]
    fn test_transform() {
        let board = default_board();
        let glyphs = board.transform(|int, _, _| {
            if !int.mark().is_empty() {
                format!("{:?}", int.mark())
            } else if int.stone().is_stone() {
                format!("{:?}", int.stone())
            } else {
                format!("{:?}", int.base())
            }
        });
        assert_eq!(glyphs.bounding_box(), board.bounding_box());
        assert_eq!(glyphs.max_board_size(), 19);
        assert_eq!(glyphs.get_int_board_pt(pt(14, 0)).unwrap(), "TopEdge");
        assert_eq!(glyphs.get_int_board_pt(pt(14, 1)).unwrap(), "Square");
        assert_eq!(glyphs.get_int_board_pt(pt(13, 3)).unwrap(), "BStone");
    }

    #[test]
    fn test_diff() {
        let board = top_right(&stones(&[(15, 1, StoneColor::Black)]), &marks());
        let other = top_right(
            &stones(&[
                (1, 1, StoneColor::Black),
                (15, 1, StoneColor::Black),
                (16, 2, StoneColor::White),
                (16, 3, StoneColor::White),
            ]),
            &marks(),
        );
        let diff = board.diff(&other).unwrap();
        assert_eq!(diff.len(), 2);
        assert_eq!(diff[0].board_pt, pt(16, 2));
        assert_eq!(&diff[0].prev_value, board.get_int_board_pt(pt(16, 2)).unwrap());
        assert_eq!(&diff[0].new_value, other.get_int_board_pt(pt(16, 2)).unwrap());
    }

    #[test]
    fn test_display_diff_counts_marks() {
        let stone_map = stones(&[(15, 1, StoneColor::Black)]);
        let board = top_right(&stone_map, &MarkMap::default());
        let mut marked = MarkMap::default();
        marked.marks.insert(pt(14, 1), MarkSymbol::Triangle);
        let other = top_right(&stone_map, &marked);

        assert!(board.diff(&board.clone()).unwrap().is_empty());
        let diff = board.differ(&other, display_diff).unwrap();
        assert_eq!(diff.len(), 1);
        assert_eq!(diff[0].board_pt, pt(14, 1));
    }

    #[test]
    fn test_diff_dimension_mismatch() {
        let full = Board::create(
            &Cropbox::get(BoardRegion::All, 19).unwrap(),
            &StoneMap::new(),
            &MarkMap::default(),
        )
        .unwrap();
        let err = default_board().diff(&full).unwrap_err();
        assert!(matches!(err, Error::BoardDimensionMismatch { left_width: 12, .. }));
    }
}
