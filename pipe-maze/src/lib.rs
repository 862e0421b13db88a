//! Pipe-Maze Engine
//!
//! Traces the single closed loop of pipes through a 2D glyph grid and counts
//! the tiles that loop encloses.
//!
//! # Overview
//!
//! This library provides:
//! - An immutable, bounds-safe [`Grid`] over the pipe glyph alphabet
//! - Start-cell resolution from the neighborhood ([`resolve_start`])
//! - Loop tracing along pipe connections ([`PipeMaze::loop_cells`])
//! - Resolution-tripling lattice explosion ([`explode`]) so a 4-connected
//!   flood fill can squeeze between diagonally-touching pipes
//! - Exterior flood fill and enclosed-region counting ([`flood_fill`],
//!   [`enclosed_count`])
//!
//! # Quick Example
//!
//! ```
//! use pipe_maze::PipeMaze;
//!
//! let input = "\
//! .....
//! .S-7.
//! .|.|.
//! .L-J.
//! .....";
//!
//! let mut maze = PipeMaze::parse(input).unwrap();
//! assert_eq!(maze.farthest_distance().unwrap(), 4);
//! assert_eq!(maze.enclosed_tiles().unwrap(), 1);
//! ```
//!
//! # Pipeline
//!
//! Raw text parses into a [`Grid`]; the masked start glyph is rewritten to
//! the pipe its neighbors imply; the loop is traced once and shared by both
//! answers. For the enclosed count, the grid restricted to the loop is
//! exploded to triple resolution, the exterior is flooded from the border,
//! and everything that is neither loop nor exterior is enclosed.
//!
//! Every stage is a pure function over immutable snapshots; the only mutable
//! state is the explicit loop memo inside [`PipeMaze`].

mod error;
mod explode;
mod geom;
mod grid;
mod maze;
mod network;
mod regions;
mod tile;
mod trace;

pub use error::{ParseError, SolveError};
pub use explode::explode;
pub use geom::{Direction, Position};
pub use grid::Grid;
pub use maze::PipeMaze;
pub use network::resolve_start;
pub use regions::{enclosed_count, flood_fill};
pub use tile::Tile;
