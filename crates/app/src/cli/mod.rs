//! Command line interface.

use clap::{Parser, Subcommand};

mod sizes;
mod solve;

#[derive(Debug, Parser)]
#[command(name = "packwise-app", about = "Packwise CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Work out the packs to ship for an order
    Solve(solve::SolveArgs),

    /// Print the pack sizes offered by default
    Sizes(sizes::SizesArgs),
}

impl Cli {
    pub(crate) fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Solve(args) => solve::run(args),
            Commands::Sizes(args) => sizes::run(args),
        }
    }
}
