//! Packs Config

use clap::Args;

use packwise_app::domain::packs::{
    DEFAULT_MAX_ORDER_QUANTITY, DEFAULT_MAX_PACK_SIZE, DEFAULT_PACK_SIZES, PacksSettings,
};

/// Pack size and order limit settings.
#[derive(Debug, Args)]
pub struct PacksConfig {
    /// Pack sizes loaded into the store at startup (comma separated)
    #[arg(
        long,
        env = "DEFAULT_PACK_SIZES",
        value_delimiter = ',',
        allow_negative_numbers = true,
        default_values_t = DEFAULT_PACK_SIZES
    )]
    pub default_pack_sizes: Vec<i64>,

    /// Largest order quantity the server will solve
    #[arg(long, env = "MAX_ORDER_QUANTITY", default_value_t = DEFAULT_MAX_ORDER_QUANTITY)]
    pub max_order_quantity: u64,

    /// Largest pack size the store will accept
    #[arg(long, env = "MAX_PACK_SIZE", default_value_t = DEFAULT_MAX_PACK_SIZE)]
    pub max_pack_size: u64,
}

impl PacksConfig {
    /// Service settings derived from this configuration.
    #[must_use]
    pub fn settings(&self) -> PacksSettings {
        PacksSettings {
            max_order_quantity: self.max_order_quantity,
            max_pack_size: self.max_pack_size,
        }
    }
}
