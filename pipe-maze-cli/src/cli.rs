//! CLI argument parsing using clap

use clap::Parser;
use std::path::PathBuf;

/// Pipe-maze solver runner
#[derive(Parser, Debug)]
#[command(
    name = "pipe-maze",
    about = "Trace a pipe maze and count its enclosed tiles",
    version
)]
pub struct Args {
    /// Path to the maze input file, or `-` to read from stdin
    pub input: PathBuf,

    /// Part to run (runs both parts if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub part: Option<u8>,

    /// Quiet mode - only output answers
    #[arg(short, long)]
    pub quiet: bool,
}
