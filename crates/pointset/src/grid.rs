//! Cubic occupancy grid and neighbor tables.
//!
//! - `Grid3`: `size³` cells stored flat, indexed `x + y*size + z*size²`.
//! - `FACE_OFFSETS` drive classification; `FULL_OFFSETS` drive growth.
//! - `classify` gives the label a point would receive as point of interest.

use crate::classification::Classification;
use std::fmt;

/// Occupancy state of one cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    Filled,
    #[default]
    Empty,
}

impl Cell {
    /// Diagram symbol: `X` for filled, `.` for empty.
    #[inline]
    pub fn symbol(self) -> char {
        match self {
            Cell::Filled => 'X',
            Cell::Empty => '.',
        }
    }
}

/// Integer coordinate inside a grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub x: usize,
    pub y: usize,
    pub z: usize,
}

impl Point {
    #[inline]
    pub const fn new(x: usize, y: usize, z: usize) -> Self {
        Self { x, y, z }
    }

    /// Point shifted by `(dx, dy, dz)`, as signed coordinates (may be out of bounds).
    #[inline]
    pub fn offset(self, (dx, dy, dz): (i64, i64, i64)) -> (i64, i64, i64) {
        (self.x as i64 + dx, self.y as i64 + dy, self.z as i64 + dz)
    }
}

/// List-literal form, e.g. `[1, 2, 3]`. Used verbatim in question text.
impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}, {}]", self.x, self.y, self.z)
    }
}

/// The 6 face-adjacent offsets.
pub const FACE_OFFSETS: [(i64, i64, i64); 6] = [
    (1, 0, 0),
    (-1, 0, 0),
    (0, 1, 0),
    (0, -1, 0),
    (0, 0, 1),
    (0, 0, -1),
];

/// All 26 offsets in `{-1,0,1}³ \ {0}`: faces, then edges, then corners.
pub const FULL_OFFSETS: [(i64, i64, i64); 26] = [
    (1, 0, 0),
    (-1, 0, 0),
    (0, 1, 0),
    (0, -1, 0),
    (0, 0, 1),
    (0, 0, -1),
    (1, 1, 0),
    (1, -1, 0),
    (-1, 1, 0),
    (-1, -1, 0),
    (1, 0, 1),
    (1, 0, -1),
    (-1, 0, 1),
    (-1, 0, -1),
    (0, 1, 1),
    (0, 1, -1),
    (0, -1, 1),
    (0, -1, -1),
    (1, 1, 1),
    (1, 1, -1),
    (1, -1, 1),
    (1, -1, -1),
    (-1, 1, 1),
    (-1, 1, -1),
    (-1, -1, 1),
    (-1, -1, -1),
];

/// Cubic 3D grid of cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid3 {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid3 {
    /// All-empty grid with side length `size`.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size * size * size],
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn index(&self, p: Point) -> usize {
        debug_assert!(p.x < self.size && p.y < self.size && p.z < self.size);
        p.x + p.y * self.size + p.z * self.size * self.size
    }

    #[inline]
    fn point_at(&self, index: usize) -> Point {
        let plane = self.size * self.size;
        Point::new(index % self.size, (index % plane) / self.size, index / plane)
    }

    #[inline]
    pub fn get(&self, p: Point) -> Cell {
        self.cells[self.index(p)]
    }

    #[inline]
    pub fn set(&mut self, p: Point, cell: Cell) {
        let i = self.index(p);
        self.cells[i] = cell;
    }

    /// Mark `p` filled (idempotent).
    #[inline]
    pub fn fill(&mut self, p: Point) {
        self.set(p, Cell::Filled);
    }

    #[inline]
    pub fn is_filled(&self, p: Point) -> bool {
        self.get(p) == Cell::Filled
    }

    /// Convert signed coordinates to a point if they lie inside the grid.
    #[inline]
    pub fn checked_point(&self, (x, y, z): (i64, i64, i64)) -> Option<Point> {
        let n = self.size as i64;
        if (0..n).contains(&x) && (0..n).contains(&y) && (0..n).contains(&z) {
            Some(Point::new(x as usize, y as usize, z as usize))
        } else {
            None
        }
    }

    /// Every point in storage order.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        (0..self.cells.len()).map(|i| self.point_at(i))
    }

    fn points_where(&self, cell: Cell) -> Vec<Point> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| **c == cell)
            .map(|(i, _)| self.point_at(i))
            .collect()
    }

    pub fn filled_points(&self) -> Vec<Point> {
        self.points_where(Cell::Filled)
    }

    pub fn empty_points(&self) -> Vec<Point> {
        self.points_where(Cell::Empty)
    }

    pub fn count_filled(&self) -> usize {
        self.cells.iter().filter(|c| **c == Cell::Filled).count()
    }

    /// Whether z-layer `z` has at least one filled cell.
    pub fn layer_has_filled(&self, z: usize) -> bool {
        let plane = self.size * self.size;
        self.cells[z * plane..(z + 1) * plane]
            .iter()
            .any(|c| *c == Cell::Filled)
    }

    /// In-bounds face-neighbors of `p` (between 3 and 6 points).
    pub fn face_neighbors(&self, p: Point) -> impl Iterator<Item = Point> + '_ {
        FACE_OFFSETS
            .iter()
            .filter_map(move |&d| self.checked_point(p.offset(d)))
    }

    /// Filled with at least one in-bounds empty face-neighbor.
    pub fn is_boundary(&self, p: Point) -> bool {
        self.is_filled(p) && self.face_neighbors(p).any(|q| !self.is_filled(q))
    }

    /// Filled, with all 6 face-neighbors in bounds and filled.
    pub fn is_internal(&self, p: Point) -> bool {
        self.is_filled(p)
            && FACE_OFFSETS.iter().all(|&d| {
                self.checked_point(p.offset(d))
                    .is_some_and(|q| self.is_filled(q))
            })
    }

    /// Nested `grid[x][y][z]` of `"X"` / `"."` strings (metadata form).
    pub fn to_nested(&self) -> Vec<Vec<Vec<String>>> {
        (0..self.size)
            .map(|x| {
                (0..self.size)
                    .map(|y| {
                        (0..self.size)
                            .map(|z| self.get(Point::new(x, y, z)).symbol().to_string())
                            .collect()
                    })
                    .collect()
            })
            .collect()
    }
}

/// Label `p` would carry as point of interest.
///
/// Returns `None` for a filled point against the grid wall whose in-bounds
/// face-neighbors are all filled: it is neither internal nor boundary.
pub fn classify(grid: &Grid3, p: Point) -> Option<Classification> {
    if !grid.is_filled(p) {
        Some(Classification::External)
    } else if grid.is_boundary(p) {
        Some(Classification::Boundary)
    } else if grid.is_internal(p) {
        Some(Classification::Internal)
    } else {
        None
    }
}
