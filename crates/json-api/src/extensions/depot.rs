//! Depot helper extensions.

use std::any::{Any, type_name};

use salvo::prelude::{Depot, StatusError};
use tracing::error;

/// Helpers for mapping depot extraction failures to HTTP errors.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError> {
        self.obtain::<T>().map_err(|_missing| {
            error!(injected = type_name::<T>(), "depot has no injected value");

            StatusError::internal_server_error()
        })
    }
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn injected_value_is_returned() -> TestResult {
        let mut depot = Depot::new();

        depot.inject(42_u64);

        assert_eq!(depot.obtain_or_500::<u64>()?, &42);

        Ok(())
    }

    #[test]
    fn missing_value_is_a_server_error() {
        let depot = Depot::new();

        let result = depot.obtain_or_500::<u64>();

        assert!(
            matches!(result, Err(ref error) if error.code == StatusCode::INTERNAL_SERVER_ERROR),
            "expected 500, got {result:?}"
        );
    }
}
