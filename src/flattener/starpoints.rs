//! Star point (hoshi) locations for the standard board sizes.

use crate::point::Point;

const NINE: &[(i32, i32)] = &[(4, 4)];
const THIRTEEN: &[(i32, i32)] = &[(3, 3), (3, 9), (6, 6), (9, 3), (9, 9)];
const NINETEEN: &[(i32, i32)] = &[
    (3, 3),
    (3, 9),
    (3, 15),
    (9, 3),
    (9, 9),
    (9, 15),
    (15, 3),
    (15, 9),
    (15, 15),
];

fn coords(size: i32) -> &'static [(i32, i32)] {
    match size {
        9 => NINE,
        13 => THIRTEEN,
        19 => NINETEEN,
        _ => &[],
    }
}

/// Every star point of a `size` board. Other sizes have none.
pub fn all_pts(size: i32) -> Vec<Point> {
    coords(size).iter().map(|&(x, y)| Point::new(x, y)).collect()
}

pub fn is_pt(pt: Point, size: i32) -> bool {
    coords(size).contains(&(pt.x(), pt.y()))
}
