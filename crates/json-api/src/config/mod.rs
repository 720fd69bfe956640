//! Server configuration module

use clap::Parser;

use crate::config::{
    observability::{LoggingConfig, ObservabilityConfig},
    packs::PacksConfig,
    server::ServerRuntimeConfig,
};

pub(crate) mod observability;
pub(crate) mod packs;
pub(crate) mod server;

/// Packwise JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "packwise-json", about = "Packwise JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Observability (traces/metrics) settings.
    #[command(flatten)]
    pub observability: ObservabilityConfig,

    /// Pack size and order limits.
    #[command(flatten)]
    pub packs: PacksConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;
    use tracing::level_filters::LevelFilter;

    use super::*;

    #[test]
    fn defaults_are_applied() -> TestResult {
        let config = ServerConfig::try_parse_from(["packwise-json"])?;

        assert_eq!(config.server.port, 9999);
        assert_eq!(config.packs.default_pack_sizes, vec![250, 500, 1000, 2000, 5000]);
        assert_eq!(config.packs.max_order_quantity, 10_000_000);
        assert_eq!(config.packs.max_pack_size, 1_000_000);

        Ok(())
    }

    #[test]
    fn pack_sizes_accept_comma_separated_values() -> TestResult {
        let config = ServerConfig::try_parse_from([
            "packwise-json",
            "--default-pack-sizes",
            "23,31,53",
            "--max-order-quantity",
            "500000",
        ])?;

        assert_eq!(config.packs.default_pack_sizes, vec![23, 31, 53]);
        assert_eq!(config.packs.settings().max_order_quantity, 500_000);

        Ok(())
    }

    #[test]
    fn max_pack_size_flows_into_settings() -> TestResult {
        let config =
            ServerConfig::try_parse_from(["packwise-json", "--max-pack-size", "10000"])?;

        let settings = config.packs.settings();

        assert_eq!(settings.max_pack_size, 10_000);
        assert_eq!(settings.max_order_quantity, 10_000_000);

        Ok(())
    }

    #[test]
    fn log_level_must_be_a_single_level() -> TestResult {
        let config = ServerConfig::try_parse_from(["packwise-json", "--log-level", "debug"])?;

        assert_eq!(config.logging.log_level, LevelFilter::DEBUG);

        let result =
            ServerConfig::try_parse_from(["packwise-json", "--log-level", "info,salvo=debug"]);

        assert!(result.is_err(), "expected directive lists to be rejected");

        Ok(())
    }

    #[test]
    fn socket_addr_joins_host_and_port() -> TestResult {
        let config =
            ServerConfig::try_parse_from(["packwise-json", "-H", "127.0.0.1", "-p", "8080"])?;

        assert_eq!(config.socket_addr(), "127.0.0.1:8080");

        Ok(())
    }
}
