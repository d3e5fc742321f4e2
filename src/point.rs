use serde::{Deserialize, Serialize};
use std::fmt;

/// A 1-based (row, col) coordinate on a Go board.
///
/// Row 1 is the top edge, column 1 the left edge. Points carry no
/// board-size information; whether a point sits on a given grid is the
/// board's call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Point {
    pub row: u8,
    pub col: u8,
}

impl Point {
    pub fn new(row: u8, col: u8) -> Self {
        Point { row, col }
    }

    /// The four orthogonally adjacent points: up, down, left, right.
    ///
    /// No bounds filtering happens here; edge and corner points yield
    /// off-grid neighbors that callers discard.
    pub fn neighbors(self) -> [Point; 4] {
        [
            Point::new(self.row - 1, self.col),
            Point::new(self.row + 1, self.col),
            Point::new(self.row, self.col - 1),
            Point::new(self.row, self.col + 1),
        ]
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_distinct_neighbors() {
        let neighbors = Point::new(3, 4).neighbors();
        assert_eq!(
            neighbors,
            [
                Point::new(2, 4),
                Point::new(4, 4),
                Point::new(3, 3),
                Point::new(3, 5),
            ]
        );
        for (i, a) in neighbors.iter().enumerate() {
            for b in &neighbors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn corner_neighbors_ignore_bounds() {
        let neighbors = Point::new(1, 1).neighbors();
        assert!(neighbors.contains(&Point::new(0, 1)));
        assert!(neighbors.contains(&Point::new(1, 0)));
        assert!(neighbors.contains(&Point::new(2, 1)));
        assert!(neighbors.contains(&Point::new(1, 2)));
    }

    #[test]
    fn display() {
        assert_eq!(Point::new(3, 4).to_string(), "(3, 4)");
    }

    #[test]
    fn json_shape() {
        let json = serde_json::to_value(Point::new(3, 4)).unwrap();
        assert_eq!(json, serde_json::json!({"row": 3, "col": 4}));
    }
}
