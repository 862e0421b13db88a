//! Pipe-maze CLI - trace the loop and count the enclosed tiles

mod cli;
mod error;
mod output;

use std::fs;
use std::io::Read;
use std::path::Path;

use chrono::Utc;
use clap::Parser;
use pipe_maze::PipeMaze;

use cli::Args;
use error::CliError;
use output::{OutputFormatter, PartReport};

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let formatter = OutputFormatter::new(args.quiet);

    let input = read_input(&args.input)?;

    let parse_start = Utc::now();
    let mut maze = PipeMaze::parse(&input)?;
    let parse_duration = Utc::now() - parse_start;

    let parts: &[u8] = match args.part {
        Some(1) => &[1],
        Some(_) => &[2],
        None => &[1, 2],
    };

    let mut reports = Vec::new();
    for &part in parts {
        let solve_start = Utc::now();
        let answer = match part {
            1 => maze.farthest_distance()?.to_string(),
            _ => maze.enclosed_tiles()?.to_string(),
        };
        let solve_duration = Utc::now() - solve_start;

        let report = PartReport {
            part,
            answer,
            solve_duration,
        };
        formatter.print_result(&report);
        reports.push(report);
    }

    formatter.print_summary(parse_duration, &reports);

    Ok(())
}

/// Read the maze text from a file, or from stdin when the path is `-`.
fn read_input(path: &Path) -> Result<String, CliError> {
    let contents = if path == Path::new("-") {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .map(|_| buffer)
    } else {
        fs::read_to_string(path)
    };

    contents.map_err(|source| CliError::ReadInput {
        path: path.display().to_string(),
        source,
    })
}
