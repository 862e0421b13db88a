//! Parse-once / solve-per-part facade over the maze pipeline.

use std::collections::HashSet;

use crate::error::{ParseError, SolveError};
use crate::geom::Position;
use crate::grid::Grid;
use crate::network::resolve_start;
use crate::regions::enclosed_count;
use crate::trace::trace_loop;

/// Shared solver state for one maze input.
///
/// [`PipeMaze::parse`] consumes the raw text once; the part methods compute
/// answers against the parsed state. The resolved grid and traced loop are
/// memoized in an explicit slot so both parts share a single traversal.
#[derive(Debug)]
pub struct PipeMaze {
    grid: Grid,
    start: Position,
    traced: Option<Traced>,
}

#[derive(Debug)]
struct Traced {
    /// Loop cells in traversal order, starting at the start cell.
    cells: Vec<Position>,
    /// The same cells as a set, for membership queries.
    cell_set: HashSet<Position>,
    /// The grid with the start glyph rewritten to its real pipe.
    resolved: Grid,
}

impl PipeMaze {
    /// Parse raw puzzle text into solver state.
    ///
    /// Validates the glyph alphabet, rectangularity and the presence of
    /// exactly one start cell. Topology violations (ambiguous start, broken
    /// loop) surface later, from the part methods.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let grid: Grid = input.trim().parse()?;
        let start = grid.start_position()?;
        Ok(Self {
            grid,
            start,
            traced: None,
        })
    }

    /// Steps to the point on the loop farthest from the start.
    ///
    /// Half the cycle length: along a simple cycle the farthest cell sits
    /// exactly halfway around, whichever way the loop was walked.
    pub fn farthest_distance(&mut self) -> Result<usize, SolveError> {
        Ok(self.traced()?.cells.len() / 2)
    }

    /// Number of cells enclosed by the loop.
    pub fn enclosed_tiles(&mut self) -> Result<usize, SolveError> {
        let traced = self.traced()?;
        Ok(enclosed_count(&traced.resolved, &traced.cell_set))
    }

    /// Cells on the loop, in traversal order from the start.
    pub fn loop_cells(&mut self) -> Result<&[Position], SolveError> {
        Ok(&self.traced()?.cells)
    }

    fn traced(&mut self) -> Result<&Traced, SolveError> {
        let traced = match self.traced.take() {
            Some(traced) => traced,
            None => {
                let resolved = resolve_start(&self.grid, self.start)?;
                let cells = trace_loop(&resolved, self.start)?;
                let cell_set = cells.iter().copied().collect();
                Traced {
                    cells,
                    cell_set,
                    resolved,
                }
            }
        };
        Ok(self.traced.insert(traced))
    }
}
