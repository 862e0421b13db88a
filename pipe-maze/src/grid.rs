//! The immutable 2D tile lattice.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;
use crate::geom::Position;
use crate::tile::Tile;

/// A rectangular grid of tiles.
///
/// The grid is a pure value: lookups never fail and nothing mutates it in
/// place. Derived grids (start resolution, loop restriction, explosion) are
/// built as fresh values from queries over this one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<Tile>>,
    width: usize,
    height: usize,
}

impl Grid {
    /// Build a grid from rows that are already known to be equal length.
    pub(crate) fn from_rows(rows: Vec<Vec<Tile>>) -> Self {
        let height = rows.len();
        let width = rows.first().map(Vec::len).unwrap_or(0);
        Self {
            rows,
            width,
            height,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cells in the grid.
    pub fn total_tiles(&self) -> usize {
        self.width * self.height
    }

    /// Whether `position` addresses a cell of the grid.
    pub fn in_bounds(&self, position: Position) -> bool {
        (0..self.width as i32).contains(&position.x)
            && (0..self.height as i32).contains(&position.y)
    }

    /// The tile at `position`. Out-of-range positions read as
    /// [`Tile::Ground`], so callers probing a cell's neighborhood need no
    /// separate bounds checks.
    pub fn get(&self, position: Position) -> Tile {
        if self.in_bounds(position) {
            self.rows[position.y as usize][position.x as usize]
        } else {
            Tile::Ground
        }
    }

    /// The rows of the grid, top to bottom.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Position of the unique start tile.
    pub fn start_position(&self) -> Result<Position, ParseError> {
        let mut found = None;
        for (y, row) in self.rows.iter().enumerate() {
            for (x, tile) in row.iter().enumerate() {
                if *tile == Tile::Start {
                    let position = Position::new(x as i32, y as i32);
                    match found {
                        None => found = Some(position),
                        Some(first) => {
                            return Err(ParseError::MultipleStarts {
                                first,
                                second: position,
                            });
                        }
                    }
                }
            }
        }
        found.ok_or(ParseError::MissingStart)
    }

    /// A copy of the grid with `tile` placed at `position`.
    ///
    /// Out-of-range positions leave the grid unchanged.
    pub fn with_tile(&self, position: Position, tile: Tile) -> Grid {
        let mut rows = self.rows.clone();
        if self.in_bounds(position) {
            rows[position.y as usize][position.x as usize] = tile;
        }
        Grid {
            rows,
            width: self.width,
            height: self.height,
        }
    }

    /// A copy of the grid keeping only `positions`, every other cell ground.
    pub fn keep_only(&self, positions: &HashSet<Position>) -> Grid {
        let rows = self
            .rows
            .iter()
            .enumerate()
            .map(|(y, row)| {
                row.iter()
                    .enumerate()
                    .map(|(x, tile)| {
                        if positions.contains(&Position::new(x as i32, y as i32)) {
                            *tile
                        } else {
                            Tile::Ground
                        }
                    })
                    .collect()
            })
            .collect();
        Grid::from_rows(rows)
    }
}

impl FromStr for Grid {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rows: Vec<Vec<Tile>> = Vec::new();
        for (y, line) in s.lines().enumerate() {
            let row = line
                .chars()
                .enumerate()
                .map(|(x, c)| Tile::from_char(c).ok_or(ParseError::InvalidGlyph { found: c, x, y }))
                .collect::<Result<Vec<_>, _>>()?;
            if let Some(first) = rows.first() {
                if row.len() != first.len() {
                    return Err(ParseError::RaggedRow {
                        y,
                        expected: first.len(),
                        found: row.len(),
                    });
                }
            }
            rows.push(row);
        }
        let grid = Grid::from_rows(rows);
        if grid.total_tiles() == 0 {
            return Err(ParseError::EmptyInput);
        }
        Ok(grid)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            for tile in row {
                write!(f, "{}", tile.as_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
