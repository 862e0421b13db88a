//! Error types for maze parsing and solving.

use crate::geom::{Direction, Position};
use thiserror::Error;

/// Error type for parsing maze input text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input contained no cells at all.
    #[error("input is empty")]
    EmptyInput,
    /// A character outside the tile alphabet.
    #[error("invalid glyph {found:?} at column {x}, row {y}")]
    InvalidGlyph { found: char, x: usize, y: usize },
    /// A row whose length differs from the first row's.
    #[error("row {y} has {found} columns, expected {expected}")]
    RaggedRow {
        y: usize,
        expected: usize,
        found: usize,
    },
    /// No start tile anywhere in the grid.
    #[error("no start tile in input")]
    MissingStart,
    /// More than one start tile.
    #[error("second start tile at {second}, first was at {first}")]
    MultipleStarts { first: Position, second: Position },
}

/// Error type for solving over a parsed maze.
///
/// Each variant names a topology guarantee the input broke. None is
/// recoverable; callers abort rather than produce a wrong count.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    /// The start cell is not pointed back at by exactly two neighbors.
    #[error("start at {position} has {connected} connecting neighbors, expected 2")]
    AmbiguousStart { position: Position, connected: usize },
    /// No pipe glyph matches the start cell's resolved connection pair.
    #[error("no pipe tile connects {:?} and {:?}", .pair.0, .pair.1)]
    NoTileForStart { pair: (Direction, Direction) },
    /// A traced cell did not offer exactly one onward direction.
    #[error("loop continuity broken at {position}")]
    BrokenLoop { position: Position },
}
