//! Tile glyphs and their connection sets.

use crate::geom::Direction;

/// One grid cell's glyph.
///
/// Every pipe variant opens toward exactly two cardinal directions. Ground
/// and the unresolved start open toward none; the start is rewritten to a
/// real pipe by [`resolve_start`](crate::network::resolve_start) before any
/// tracing happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    /// `|`, connecting north and south.
    Vertical,
    /// `-`, connecting east and west.
    Horizontal,
    /// `L`, connecting north and east.
    NorthEast,
    /// `J`, connecting north and west.
    NorthWest,
    /// `7`, connecting south and west.
    SouthWest,
    /// `F`, connecting south and east.
    SouthEast,
    /// `.`, open ground. Out-of-bounds reads also yield this.
    Ground,
    /// `S`, the masked start cell.
    Start,
}

impl Tile {
    /// Every pipe tile, in glyph-table order.
    pub const PIPES: [Tile; 6] = [
        Tile::Vertical,
        Tile::Horizontal,
        Tile::NorthEast,
        Tile::NorthWest,
        Tile::SouthWest,
        Tile::SouthEast,
    ];

    /// The tile for `c`, or `None` for characters outside the alphabet.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '|' => Some(Tile::Vertical),
            '-' => Some(Tile::Horizontal),
            'L' => Some(Tile::NorthEast),
            'J' => Some(Tile::NorthWest),
            '7' => Some(Tile::SouthWest),
            'F' => Some(Tile::SouthEast),
            '.' => Some(Tile::Ground),
            'S' => Some(Tile::Start),
            _ => None,
        }
    }

    /// The glyph this tile renders as.
    pub const fn as_char(self) -> char {
        match self {
            Tile::Vertical => '|',
            Tile::Horizontal => '-',
            Tile::NorthEast => 'L',
            Tile::NorthWest => 'J',
            Tile::SouthWest => '7',
            Tile::SouthEast => 'F',
            Tile::Ground => '.',
            Tile::Start => 'S',
        }
    }

    /// The directions this tile opens toward.
    pub fn connections(self) -> &'static [Direction] {
        match self {
            Tile::Vertical => &[Direction::North, Direction::South],
            Tile::Horizontal => &[Direction::East, Direction::West],
            Tile::NorthEast => &[Direction::North, Direction::East],
            Tile::NorthWest => &[Direction::North, Direction::West],
            Tile::SouthWest => &[Direction::South, Direction::West],
            Tile::SouthEast => &[Direction::South, Direction::East],
            Tile::Ground | Tile::Start => &[],
        }
    }

    /// Whether this tile opens toward `direction`.
    pub fn connects_to(self, direction: Direction) -> bool {
        self.connections().contains(&direction)
    }

    /// The unique pipe tile connecting exactly the two given directions.
    ///
    /// Order-insensitive; `None` when the directions are equal (no such
    /// tile exists).
    pub fn from_connections(a: Direction, b: Direction) -> Option<Self> {
        if a == b {
            return None;
        }
        Self::PIPES
            .into_iter()
            .find(|tile| tile.connects_to(a) && tile.connects_to(b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_pipe_connects_exactly_two_directions() {
        for tile in Tile::PIPES {
            assert_eq!(tile.connections().len(), 2, "{:?}", tile);
        }
        assert!(Tile::Ground.connections().is_empty());
        assert!(Tile::Start.connections().is_empty());
    }

    #[test]
    fn from_connections_inverts_connections() {
        for tile in Tile::PIPES {
            let [a, b] = tile.connections() else {
                panic!("pipe with wrong connection count: {:?}", tile);
            };
            assert_eq!(Tile::from_connections(*a, *b), Some(tile));
            assert_eq!(Tile::from_connections(*b, *a), Some(tile));
        }
    }

    #[test]
    fn from_connections_rejects_equal_directions() {
        for d in Direction::ALL {
            assert_eq!(Tile::from_connections(d, d), None);
        }
    }

    #[test]
    fn char_roundtrip_covers_the_alphabet() {
        for c in ['|', '-', 'L', 'J', '7', 'F', '.', 'S'] {
            let tile = Tile::from_char(c).unwrap();
            assert_eq!(tile.as_char(), c);
        }
        assert_eq!(Tile::from_char('X'), None);
        assert_eq!(Tile::from_char(' '), None);
    }
}
