use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use crate::group::StoneGroup;
use crate::point::Point;
use crate::stone::Stone;

/// Handle into the board's group arena.
type GroupId = usize;

/// Captured-stone totals indexed by the capturing color.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Prisoners {
    pub black: u32,
    pub white: u32,
}

impl Prisoners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, stone: Stone) -> u32 {
        match stone {
            Stone::Black => self.black,
            Stone::White => self.white,
        }
    }

    fn add(&mut self, stone: Stone, count: u32) {
        match stone {
            Stone::Black => self.black += count,
            Stone::White => self.white += count,
        }
    }
}

/// A Go board: a flat grid of group handles plus an arena holding the
/// live groups themselves.
///
/// Connectivity is maintained incrementally by
/// [`place_stone`](Board::place_stone); the grid is never flood-filled.
/// Merged-away and captured groups vacate their arena slot, and vacated
/// slots are reused by later placements.
#[derive(Debug, Clone)]
pub struct Board {
    rows: u8,
    cols: u8,
    grid: Vec<Option<GroupId>>,
    groups: Vec<Option<StoneGroup>>,
    prisoners: Prisoners,
}

impl Board {
    /// Create an empty board with the given dimensions.
    pub fn with_dimensions(rows: u8, cols: u8) -> Self {
        Board {
            rows,
            cols,
            grid: vec![None; rows as usize * cols as usize],
            groups: Vec::new(),
            prisoners: Prisoners::new(),
        }
    }

    // -- Accessors --

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    pub fn prisoners(&self) -> &Prisoners {
        &self.prisoners
    }

    pub fn is_on_grid(&self, point: Point) -> bool {
        (1..=self.rows).contains(&point.row) && (1..=self.cols).contains(&point.col)
    }

    pub fn is_empty(&self) -> bool {
        self.grid.iter().all(|slot| slot.is_none())
    }

    /// Row-major iterator over every point of the grid.
    pub fn points(&self) -> impl Iterator<Item = Point> {
        let (rows, cols) = (self.rows, self.cols);
        (1..=rows).flat_map(move |row| (1..=cols).map(move |col| Point::new(row, col)))
    }

    /// The color occupying a point, if any. Off-grid points read as empty.
    pub fn stone_at(&self, point: Point) -> Option<Stone> {
        self.group_at(point).map(|group| group.color())
    }

    /// The group occupying a point, if any. Off-grid points read as empty.
    pub fn group_at(&self, point: Point) -> Option<&StoneGroup> {
        if !self.is_on_grid(point) {
            return None;
        }
        let id = self.grid[self.idx(point)]?;
        Some(self.groups[id].as_ref().expect("grid handle is live"))
    }

    // -- Placement --

    /// Place a stone on an empty on-grid point, merging it with adjacent
    /// friendly groups and capturing enemy groups left without liberties.
    ///
    /// Callers must have validated the move first; an off-grid or
    /// occupied point is a programming error.
    pub fn place_stone(&mut self, stone: Stone, point: Point) {
        assert!(self.is_on_grid(point), "point {point} is off the grid");
        assert!(
            self.grid[self.idx(point)].is_none(),
            "point {point} is already occupied"
        );

        let mut liberties: ArrayVec<Point, 4> = ArrayVec::new();
        let mut friendly: ArrayVec<GroupId, 4> = ArrayVec::new();
        let mut enemy: ArrayVec<GroupId, 4> = ArrayVec::new();

        for neighbor in point.neighbors() {
            if !self.is_on_grid(neighbor) {
                continue;
            }
            match self.grid[self.idx(neighbor)] {
                None => liberties.push(neighbor),
                Some(id) => {
                    // Two neighbors can belong to one group; dedup by handle.
                    let owner = self.groups[id].as_ref().expect("grid handle is live");
                    if owner.color() == stone {
                        if !friendly.contains(&id) {
                            friendly.push(id);
                        }
                    } else if !enemy.contains(&id) {
                        enemy.push(id);
                    }
                }
            }
        }

        let mut group = StoneGroup::new(stone, [point], liberties);
        for &id in &friendly {
            let absorbed = self.groups[id].take().expect("grid handle is live");
            group = group.merged_with(&absorbed);
        }

        let stones: Vec<Point> = group.stones().iter().copied().collect();
        let new_id = self.insert_group(group);
        for p in stones {
            let i = self.idx(p);
            self.grid[i] = Some(new_id);
        }

        // Every enemy group loses the played point before any capture is
        // scored, so one move can capture several groups at once.
        for &id in &enemy {
            self.groups[id]
                .as_mut()
                .expect("grid handle is live")
                .remove_liberty(point);
        }
        for &id in &enemy {
            let dead = self.groups[id].as_ref().expect("grid handle is live").num_liberties() == 0;
            if dead {
                self.remove_group(id);
            }
        }
    }

    // -- Internal helpers --

    fn insert_group(&mut self, group: StoneGroup) -> GroupId {
        match self.groups.iter().position(|slot| slot.is_none()) {
            Some(id) => {
                self.groups[id] = Some(group);
                id
            }
            None => {
                self.groups.push(Some(group));
                self.groups.len() - 1
            }
        }
    }

    /// Take a captured group off the board: vacate its arena slot, clear
    /// its stones from the grid, and return each cleared point as a
    /// liberty to every *other* adjacent group.
    fn remove_group(&mut self, id: GroupId) {
        let group = self.groups[id].take().expect("removing a live group");
        for &stone_point in group.stones() {
            for neighbor in stone_point.neighbors() {
                if !self.is_on_grid(neighbor) {
                    continue;
                }
                if let Some(other) = self.grid[self.idx(neighbor)] {
                    if other != id {
                        self.groups[other]
                            .as_mut()
                            .expect("grid handle is live")
                            .add_liberty(stone_point);
                    }
                }
            }
            let i = self.idx(stone_point);
            self.grid[i] = None;
        }
        self.prisoners
            .add(group.color().opp(), group.stones().len() as u32);
    }

    #[inline]
    fn idx(&self, point: Point) -> usize {
        (point.row as usize - 1) * self.cols as usize + (point.col as usize - 1)
    }
}

impl PartialEq for Board {
    /// Structural equality over dimensions and the point -> color
    /// mapping. Group identity, arena layout, and prisoner tallies never
    /// participate, so boards reached through different move orders
    /// compare equal whenever the same colors occupy the same points.
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows
            && self.cols == other.cols
            && self.points().all(|p| self.stone_at(p) == other.stone_at(p))
    }
}

impl Eq for Board {}
