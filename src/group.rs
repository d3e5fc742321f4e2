use std::collections::HashSet;

use crate::point::Point;
use crate::stone::Stone;

/// One maximal connected group of same-colored stones, together with its
/// current liberties.
///
/// The stone set is fixed at construction; groups grow only through
/// [`merged_with`](StoneGroup::merged_with). Liberties are adjusted in
/// place as neighboring placements and captures come and go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoneGroup {
    color: Stone,
    stones: HashSet<Point>,
    liberties: HashSet<Point>,
}

impl StoneGroup {
    pub fn new(
        color: Stone,
        stones: impl IntoIterator<Item = Point>,
        liberties: impl IntoIterator<Item = Point>,
    ) -> Self {
        let stones: HashSet<Point> = stones.into_iter().collect();
        let liberties: HashSet<Point> = liberties.into_iter().collect();
        assert!(!stones.is_empty(), "a group needs at least one stone");
        debug_assert!(liberties.is_disjoint(&stones));
        StoneGroup {
            color,
            stones,
            liberties,
        }
    }

    pub fn color(&self) -> Stone {
        self.color
    }

    pub fn stones(&self) -> &HashSet<Point> {
        &self.stones
    }

    pub fn liberties(&self) -> &HashSet<Point> {
        &self.liberties
    }

    pub fn num_liberties(&self) -> usize {
        self.liberties.len()
    }

    pub fn contains(&self, point: Point) -> bool {
        self.stones.contains(&point)
    }

    /// Combine with another group of the same color into a single group.
    /// Stones are the union of both stone sets; liberties are the union
    /// of both liberty sets minus every combined stone.
    pub fn merged_with(&self, other: &StoneGroup) -> StoneGroup {
        assert_eq!(
            self.color, other.color,
            "only groups of one color can merge"
        );
        let stones: HashSet<Point> = self.stones.union(&other.stones).copied().collect();
        let liberties = self
            .liberties
            .union(&other.liberties)
            .filter(|p| !stones.contains(p))
            .copied()
            .collect();
        StoneGroup {
            color: self.color,
            stones,
            liberties,
        }
    }

    /// Drop a liberty that an adjacent placement just filled.
    /// The point must currently be a liberty.
    pub fn remove_liberty(&mut self, point: Point) {
        let removed = self.liberties.remove(&point);
        assert!(removed, "{point} was not a liberty of this group");
    }

    /// Restore a liberty vacated by a capture. Idempotent.
    pub fn add_liberty(&mut self, point: Point) {
        debug_assert!(!self.stones.contains(&point));
        self.liberties.insert(point);
    }
}
