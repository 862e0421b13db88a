//! Positions and cardinal directions on the grid lattice.

use std::fmt;

/// A column/row coordinate pair.
///
/// Coordinates are signed so neighbor probes may step off the grid;
/// [`Grid::get`](crate::grid::Grid::get) absorbs out-of-range positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The position one step away in `direction`.
    pub fn step(self, direction: Direction) -> Self {
        match direction {
            Direction::North => Self::new(self.x, self.y - 1),
            Direction::East => Self::new(self.x + 1, self.y),
            Direction::South => Self::new(self.x, self.y + 1),
            Direction::West => Self::new(self.x - 1, self.y),
        }
    }

    /// All four cardinal neighbors, in [`Direction::ALL`] order.
    pub fn neighbors(self) -> impl Iterator<Item = (Direction, Position)> {
        Direction::ALL.into_iter().map(move |d| (d, self.step(d)))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A cardinal direction on the grid. North points toward row 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// All four directions, in a fixed order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// The opposite direction. An involution: `d.inverted().inverted() == d`.
    pub const fn inverted(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }
}
