//! Lattice explosion: tripling grid resolution to open flood-fill gaps.

use crate::grid::Grid;
use crate::tile::Tile;

/// The 3×3 sub-pattern standing in for `tile` in the exploded lattice.
///
/// A connected side of the original tile reaches the template border at the
/// middle sub-cell of that side; every other sub-cell stays ground. Two
/// originally-adjacent connected pipes therefore touch across the shared
/// border, while diagonally-touching but unconnected pipes leave a ground
/// gap a 4-connected fill can pass through.
fn template(tile: Tile) -> [[Tile; 3]; 3] {
    use Tile::*;
    match tile {
        Vertical => [
            [Ground, Vertical, Ground],
            [Ground, Vertical, Ground],
            [Ground, Vertical, Ground],
        ],
        Horizontal => [
            [Ground, Ground, Ground],
            [Horizontal, Horizontal, Horizontal],
            [Ground, Ground, Ground],
        ],
        NorthEast => [
            [Ground, Vertical, Ground],
            [Ground, NorthEast, Horizontal],
            [Ground, Ground, Ground],
        ],
        NorthWest => [
            [Ground, Vertical, Ground],
            [Horizontal, NorthWest, Ground],
            [Ground, Ground, Ground],
        ],
        SouthWest => [
            [Ground, Ground, Ground],
            [Horizontal, SouthWest, Ground],
            [Ground, Vertical, Ground],
        ],
        SouthEast => [
            [Ground, Ground, Ground],
            [Ground, SouthEast, Horizontal],
            [Ground, Vertical, Ground],
        ],
        Ground | Start => [[Ground; 3]; 3],
    }
}

/// Triple the grid's resolution.
///
/// Original `(x, y)` maps onto exploded `(3x..3x+2, 3y..3y+2)`, with the
/// original cell's own state represented at `(3x+1, 3y+1)`.
pub fn explode(grid: &Grid) -> Grid {
    let mut rows = Vec::with_capacity(grid.height() * 3);
    for row in grid.iter_rows() {
        let templates: Vec<[[Tile; 3]; 3]> = row.iter().map(|&tile| template(tile)).collect();
        for sub in 0..3 {
            rows.push(templates.iter().flat_map(|t| t[sub]).collect());
        }
    }
    Grid::from_rows(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::Position;

    #[test]
    fn triples_both_dimensions() {
        let grid: Grid = "F7\nLJ".parse().unwrap();
        let exploded = explode(&grid);
        assert_eq!(exploded.width(), 6);
        assert_eq!(exploded.height(), 6);
        assert_eq!(exploded.total_tiles(), 36);
    }

    #[test]
    fn centers_carry_the_original_tile() {
        let grid: Grid = "F-7\n|.|\nL-J".parse().unwrap();
        let exploded = explode(&grid);
        for y in 0..grid.height() as i32 {
            for x in 0..grid.width() as i32 {
                assert_eq!(
                    exploded.get(Position::new(3 * x + 1, 3 * y + 1)),
                    grid.get(Position::new(x, y)),
                );
            }
        }
    }

    #[test]
    fn connected_neighbors_touch_across_the_border() {
        let grid: Grid = "F7".parse().unwrap();
        let exploded = explode(&grid);
        // The east arm of `F` meets the west arm of `7` at the shared edge.
        assert_eq!(exploded.get(Position::new(2, 1)), Tile::Horizontal);
        assert_eq!(exploded.get(Position::new(3, 1)), Tile::Horizontal);
    }

    #[test]
    fn unconnected_diagonals_leave_a_gap() {
        // `7` over `L`: the two pipes touch only diagonally at the original
        // resolution; exploded, a ground channel separates them.
        let grid: Grid = ".7\nL.".parse().unwrap();
        let exploded = explode(&grid);
        assert_eq!(exploded.get(Position::new(3, 2)), Tile::Ground);
        assert_eq!(exploded.get(Position::new(2, 3)), Tile::Ground);
        assert_eq!(exploded.get(Position::new(2, 2)), Tile::Ground);
        assert_eq!(exploded.get(Position::new(3, 3)), Tile::Ground);
    }

    #[test]
    fn template_corners_are_always_ground() {
        for tile in Tile::PIPES {
            let t = template(tile);
            assert_eq!(t[0][0], Tile::Ground);
            assert_eq!(t[0][2], Tile::Ground);
            assert_eq!(t[2][0], Tile::Ground);
            assert_eq!(t[2][2], Tile::Ground);
        }
    }
}
