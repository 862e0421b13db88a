//! Start-cell resolution against its neighborhood.

use itertools::Itertools;

use crate::error::SolveError;
use crate::geom::{Direction, Position};
use crate::grid::Grid;
use crate::tile::Tile;

/// Replace the masked start tile with the pipe its neighborhood implies.
///
/// A neighbor qualifies when its own connection set points back at the start
/// cell. Exactly two must qualify; the unique tile connecting exactly that
/// pair of directions goes in the start's place. Anything else means the
/// input breaks the single-simple-cycle guarantee.
pub fn resolve_start(grid: &Grid, start: Position) -> Result<Grid, SolveError> {
    let connected: Vec<Direction> = start
        .neighbors()
        .filter(|&(direction, neighbor)| grid.get(neighbor).connects_to(direction.inverted()))
        .map(|(direction, _)| direction)
        .collect();

    let count = connected.len();
    let (a, b) = connected
        .into_iter()
        .collect_tuple()
        .ok_or(SolveError::AmbiguousStart {
            position: start,
            connected: count,
        })?;

    let tile = Tile::from_connections(a, b).ok_or(SolveError::NoTileForStart { pair: (a, b) })?;

    Ok(grid.with_tile(start, tile))
}
