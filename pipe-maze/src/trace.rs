//! Tracing the pipe loop from the start cell.

use itertools::Itertools;

use crate::error::SolveError;
use crate::geom::Position;
use crate::grid::Grid;

/// Walk the cycle of connected pipes through `start`, returning every cell
/// on it in traversal order, beginning with `start` itself.
///
/// The first step takes whichever of the start tile's connections the glyph
/// table lists first. Either choice walks the same cycle, just in opposite
/// rotational order, and both yield the same downstream counts.
///
/// At every subsequent cell exactly one connection may remain after
/// discarding the one we arrived through; zero or two remaining candidates
/// mean the cycle is broken and tracing fails.
pub fn trace_loop(grid: &Grid, start: Position) -> Result<Vec<Position>, SolveError> {
    let mut heading = *grid
        .get(start)
        .connections()
        .first()
        .ok_or(SolveError::BrokenLoop { position: start })?;

    let mut cells = vec![start];
    let mut position = start.step(heading);

    while position != start {
        // A walk longer than the grid has revisited a cell without closing
        // back at the start.
        if cells.len() == grid.total_tiles() {
            return Err(SolveError::BrokenLoop { position });
        }

        let arrived_from = heading.inverted();
        let onward = grid
            .get(position)
            .connections()
            .iter()
            .copied()
            .filter(|&d| d != arrived_from)
            .exactly_one()
            .map_err(|_| SolveError::BrokenLoop { position })?;

        cells.push(position);
        heading = onward;
        position = position.step(heading);
    }

    Ok(cells)
}
