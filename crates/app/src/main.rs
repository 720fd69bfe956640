//! Packwise Application CLI

use std::process;

use clap::Parser;

use crate::cli::Cli;

mod cli;

pub fn main() {
    _ = dotenvy::dotenv();

    if let Err(error) = Cli::parse().run() {
        #[expect(clippy::print_stderr, reason = "CLI reports failures on stderr")]
        {
            eprintln!("{error}");
        }

        process::exit(1);
    }
}
