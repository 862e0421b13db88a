//! Error types for the CLI

use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Reading the input source failed
    #[error("failed to read {path}: {source}")]
    ReadInput {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Input text did not parse as a maze
    #[error("parse error: {0}")]
    Parse(#[from] pipe_maze::ParseError),

    /// The maze violated a topology invariant while solving
    #[error("solve error: {0}")]
    Solve(#[from] pipe_maze::SolveError),
}
