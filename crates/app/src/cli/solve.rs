//! Solve an order from the command line.

use std::{
    io::{self, Write},
    time::Instant,
};

use clap::Args;
use humanize_duration::{Truncate, prelude::DurationExt};
use packwise::{
    manifest::Manifest,
    solvers::{Solver, dp::DynamicProgrammingSolver},
};
use packwise_app::domain::packs::DEFAULT_PACK_SIZES;

#[derive(Debug, Args)]
pub(crate) struct SolveArgs {
    /// Number of items ordered
    #[arg(short = 'q', long, allow_negative_numbers = true)]
    pub(crate) order_quantity: i64,

    /// Available pack sizes; repeat the flag or separate with commas
    #[arg(
        short = 's',
        long = "pack-size",
        env = "DEFAULT_PACK_SIZES",
        value_delimiter = ',',
        allow_negative_numbers = true,
        default_values_t = DEFAULT_PACK_SIZES
    )]
    pub(crate) pack_sizes: Vec<i64>,
}

pub(crate) fn run(args: SolveArgs) -> Result<(), String> {
    let SolveArgs {
        order_quantity,
        pack_sizes,
    } = args;

    let started = Instant::now();

    let packing = DynamicProgrammingSolver::solve(order_quantity, &pack_sizes)
        .map_err(|error| format!("failed to solve order: {error}"))?;

    let elapsed = started.elapsed();

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    Manifest::new(&packing)
        .write_to(&mut handle)
        .map_err(|error| format!("failed to write manifest: {error}"))?;

    writeln!(
        handle,
        " {} ({}s)",
        elapsed.human(Truncate::Nano),
        elapsed.as_secs_f32()
    )
    .map_err(|error| format!("failed to write timing: {error}"))
}
