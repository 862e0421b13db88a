//! Exterior flood fill and enclosed-region counting.

use std::collections::HashSet;

use crate::explode::explode;
use crate::geom::Position;
use crate::grid::Grid;
use crate::tile::Tile;

/// All ground cells 4-connected to `seed`, including `seed` itself.
///
/// The fill never enters pipe cells. Exploration uses an explicit stack;
/// visit order does not affect the resulting set. A non-ground or
/// out-of-bounds seed yields the empty set.
pub fn flood_fill(grid: &Grid, seed: Position) -> HashSet<Position> {
    let mut visited = HashSet::new();
    let mut frontier = vec![seed];

    while let Some(position) = frontier.pop() {
        if !grid.in_bounds(position) || grid.get(position) != Tile::Ground {
            continue;
        }
        if !visited.insert(position) {
            continue;
        }
        frontier.extend(position.neighbors().map(|(_, neighbor)| neighbor));
    }

    visited
}

/// Count the cells enclosed by the loop.
///
/// The grid restricted to the loop is exploded to triple resolution, the
/// exterior is flooded from the exploded origin (a guaranteed-ground border
/// cell), and every flooded center sub-cell (both coordinates ≡ 1 mod 3)
/// maps back to an exterior cell of the original grid. Every cell that is
/// neither loop nor exterior is enclosed.
pub fn enclosed_count(grid: &Grid, loop_cells: &HashSet<Position>) -> usize {
    let exploded = explode(&grid.keep_only(loop_cells));

    let exterior: HashSet<Position> = flood_fill(&exploded, Position::new(0, 0))
        .into_iter()
        .filter(|p| p.x % 3 == 1 && p.y % 3 == 1)
        .map(|p| Position::new(p.x / 3, p.y / 3))
        .collect();

    grid.total_tiles() - loop_cells.len() - exterior.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flood_fill_stops_at_pipes() {
        let grid: Grid = "...\n.|.\n...".parse().unwrap();
        let filled = flood_fill(&grid, Position::new(0, 0));
        assert_eq!(filled.len(), 8);
        assert!(!filled.contains(&Position::new(1, 1)));
    }

    #[test]
    fn flood_fill_from_a_pipe_seed_is_empty() {
        let grid: Grid = "...\n.|.\n...".parse().unwrap();
        assert!(flood_fill(&grid, Position::new(1, 1)).is_empty());
    }

    #[test]
    fn flood_fill_from_out_of_bounds_is_empty() {
        let grid: Grid = "...".parse().unwrap();
        assert!(flood_fill(&grid, Position::new(-1, 0)).is_empty());
    }

    #[test]
    fn flood_fill_cannot_cross_a_wall() {
        let grid: Grid = ".|.\n.|.\n.|.".parse().unwrap();
        let filled = flood_fill(&grid, Position::new(0, 0));
        assert_eq!(filled.len(), 3);
        assert!(!filled.contains(&Position::new(2, 0)));
    }

    #[test]
    fn counts_the_square_interior() {
        // The full pipeline over a hand-resolved loop: the ring of the 5×5
        // square encloses exactly its center cell.
        let grid: Grid = "\
.....
.F-7.
.|.|.
.L-J.
....."
            .parse()
            .unwrap();
        let loop_cells: HashSet<Position> = [
            (1, 1),
            (2, 1),
            (3, 1),
            (3, 2),
            (3, 3),
            (2, 3),
            (1, 3),
            (1, 2),
        ]
        .into_iter()
        .map(|(x, y)| Position::new(x, y))
        .collect();

        assert_eq!(enclosed_count(&grid, &loop_cells), 1);
    }

    #[test]
    fn junk_pipe_inside_the_loop_counts_as_enclosed() {
        // The center tile is a pipe glyph but not part of the loop; it must
        // be classified as enclosed, not as boundary and not as exterior.
        let grid: Grid = "\
F-7
|F|
L-J"
            .parse()
            .unwrap();
        let ring: HashSet<Position> = [
            (0, 0),
            (1, 0),
            (2, 0),
            (2, 1),
            (2, 2),
            (1, 2),
            (0, 2),
            (0, 1),
        ]
        .into_iter()
        .map(|(x, y)| Position::new(x, y))
        .collect();

        assert_eq!(enclosed_count(&grid, &ring), 1);
    }

    #[test]
    fn loop_covering_the_whole_grid_encloses_nothing() {
        let grid: Grid = "\
F7
LJ"
            .parse()
            .unwrap();
        let ring: HashSet<Position> = (0..2)
            .flat_map(|x| (0..2).map(move |y| Position::new(x, y)))
            .collect();

        assert_eq!(enclosed_count(&grid, &ring), 0);
    }
}
