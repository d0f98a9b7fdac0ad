pub mod cell;
mod grid;

use serde::Serialize;

use std::fmt;

pub use cell::CellKind;
pub use grid::Grid;

/// Grid coordinate. `x` grows rightward and `y` downward, both zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Point {
    pub x: u16,
    pub y: u16,
}

impl Point {
    pub const fn new(x: u16, y: u16) -> Self {
        Point { x, y }
    }

    /// The point one cell away in `direction`, or `None` if that would leave the
    /// representable coordinate range.
    pub fn step(self, direction: Direction) -> Option<Self> {
        let (x, y) = match direction {
            Direction::North => (Some(self.x), self.y.checked_sub(1)),
            Direction::South => (Some(self.x), self.y.checked_add(1)),
            Direction::West => (self.x.checked_sub(1), Some(self.y)),
            Direction::East => (self.x.checked_add(1), Some(self.y)),
        };
        Some(Point::new(x?, y?))
    }

    /// Whether `other` shares an edge with this point.
    pub fn is_adjacent(self, other: Point) -> bool {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y) == 1
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A carved grid together with its entrance on the top edge and exit on the bottom edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    grid: Grid,
    start: Point,
    end: Point,
}

impl Maze {
    pub fn new(grid: Grid, start: Point, end: Point) -> Self {
        Maze { grid, start, end }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    pub(crate) fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// Cells of the committed solution path, row-major.
    pub fn solution_cells(&self) -> impl Iterator<Item = Point> + '_ {
        self.grid
            .cells()
            .filter(|&(_, kind)| kind == CellKind::Solution)
            .map(|(at, _)| at)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    North,
    West,
    South,
    East,
}

impl Direction {
    /// Canonical scan order: up, left, down, right. Both the generator's shuffle
    /// input and the solver's attempt order depend on it.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::West,
        Direction::South,
        Direction::East,
    ];

    const fn bit(self) -> u8 {
        match self {
            Direction::North => 1,
            Direction::West => 2,
            Direction::East => 4,
            Direction::South => 8,
        }
    }

    pub const fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
            Direction::East => Direction::West,
        }
    }
}

/// A 4-bit set of directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Directions(u8);

impl Directions {
    pub const NONE: Directions = Directions(0);

    pub const fn only(direction: Direction) -> Self {
        Directions(direction.bit())
    }

    pub const fn contains(self, direction: Direction) -> bool {
        self.0 & direction.bit() != 0
    }

    pub fn insert(&mut self, direction: Direction) {
        self.0 |= direction.bit();
    }

    /// First direction in canonical order not yet in the set. `None` once all
    /// four are taken.
    pub fn first_missing(self) -> Option<Direction> {
        Direction::ALL.into_iter().find(|&d| !self.contains(d))
    }
}
