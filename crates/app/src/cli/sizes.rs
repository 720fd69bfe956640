use std::io::{self, Write};

use clap::Args;
use packwise::packs::PackSizes;
use packwise_app::domain::packs::DEFAULT_PACK_SIZES;

#[derive(Debug, Args)]
pub(crate) struct SizesArgs {
    /// Pack sizes to validate and print; repeat the flag or separate with commas
    #[arg(
        short = 's',
        long = "pack-size",
        env = "DEFAULT_PACK_SIZES",
        value_delimiter = ',',
        allow_negative_numbers = true,
        default_values_t = DEFAULT_PACK_SIZES
    )]
    pack_sizes: Vec<i64>,
}

pub(crate) fn run(args: SizesArgs) -> Result<(), String> {
    let SizesArgs { pack_sizes } = args;

    let sizes = PackSizes::try_from_unique(&pack_sizes)
        .map_err(|error| format!("invalid pack sizes: {error}"))?;

    let mut handle = io::stdout().lock();

    for size in &sizes {
        writeln!(handle, "{size}")
            .map_err(|error| format!("failed to write pack size: {error}"))?;
    }

    Ok(())
}
