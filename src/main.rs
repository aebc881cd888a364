//! Monkey Business - Entry Point
//!
//! Reads one puzzle input file, runs both variants of the chosen solver,
//! and prints the two answers to stdout, one per line. Logs go to stderr
//! via tracing so stdout stays machine-readable.

use clap::{Parser, Subcommand};
use monkey_business::core::error::Result;
use monkey_business::{keepaway, riddle};
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "monkey-business")]
#[command(about = "Jungle puzzle solvers: keep-away simulation and the shouting riddle")]
struct Args {
    #[command(subcommand)]
    puzzle: Puzzle,
}

#[derive(Subcommand, Debug)]
enum Puzzle {
    /// Simulate the keep-away game and report the monkey-business score
    Keepaway {
        /// Puzzle input file
        #[arg(long, default_value = "11.txt")]
        input: PathBuf,
    },
    /// Resolve the shouting riddle and the value the human must yell
    Riddle {
        /// Puzzle input file
        #[arg(long, default_value = "21.txt")]
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("monkey_business=info")
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    match args.puzzle {
        Puzzle::Keepaway { input } => {
            let data = fs::read_to_string(&input)?;
            tracing::info!(input = %input.display(), "running keep-away simulation");
            println!("{}", keepaway::part_one(&data)?);
            println!("{}", keepaway::part_two(&data)?);
        }
        Puzzle::Riddle { input } => {
            let data = fs::read_to_string(&input)?;
            tracing::info!(input = %input.display(), "resolving the shouting riddle");
            println!("{}", riddle::part_one(&data)?);
            println!("{}", riddle::part_two(&data)?);
        }
    }
    Ok(())
}
