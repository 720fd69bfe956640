//! App Context

use std::sync::Arc;

use thiserror::Error;

use packwise::packs::{PackSizes, PackSizesError};

use crate::domain::packs::{
    InMemoryPackSizesRepository, PacksService, PacksServiceError, PacksSettings,
    StoredPacksService,
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("invalid default pack sizes")]
    DefaultPackSizes(#[source] PackSizesError),

    #[error("default pack sizes exceed the configured limit")]
    DefaultPackSizeLimit(#[source] PacksServiceError),
}

#[derive(Clone)]
pub struct AppContext {
    pub packs: Arc<dyn PacksService>,
}

impl AppContext {
    /// Build an application context backed by an in-memory pack size store.
    ///
    /// # Errors
    ///
    /// Returns an error when the default pack sizes contain a non-positive or repeated size, or a
    /// size above `settings.max_pack_size`.
    pub fn in_memory(
        default_pack_sizes: &[i64],
        settings: PacksSettings,
    ) -> Result<Self, AppInitError> {
        let sizes = PackSizes::try_from_unique(default_pack_sizes)
            .map_err(AppInitError::DefaultPackSizes)?;

        settings
            .check_pack_sizes(&sizes)
            .map_err(AppInitError::DefaultPackSizeLimit)?;

        let repository = Arc::new(InMemoryPackSizesRepository::with_pack_sizes(sizes));

        Ok(Self {
            packs: Arc::new(StoredPacksService::new(repository, settings)),
        })
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::domain::packs::DEFAULT_PACK_SIZES;

    use super::*;

    #[tokio::test]
    async fn in_memory_seeds_default_pack_sizes() -> TestResult {
        let app = AppContext::in_memory(&DEFAULT_PACK_SIZES, PacksSettings::default())?;

        let sizes = app.packs.list_pack_sizes().await?;

        assert_eq!(sizes, PackSizes::from_sizes(DEFAULT_PACK_SIZES)?);

        Ok(())
    }

    #[test]
    fn in_memory_rejects_duplicate_defaults() {
        let result = AppContext::in_memory(&[250, 250], PacksSettings::default());

        assert!(
            matches!(
                result,
                Err(AppInitError::DefaultPackSizes(
                    PackSizesError::DuplicatePackSize { size: 250 }
                ))
            ),
            "expected DefaultPackSizes error"
        );
    }

    #[test]
    fn in_memory_rejects_defaults_above_pack_size_limit() {
        let settings = PacksSettings {
            max_pack_size: 1_000,
            ..PacksSettings::default()
        };

        let result = AppContext::in_memory(&DEFAULT_PACK_SIZES, settings);

        assert!(
            matches!(
                result,
                Err(AppInitError::DefaultPackSizeLimit(
                    PacksServiceError::PackSizeTooLarge {
                        size: 5_000,
                        max: 1_000
                    }
                ))
            ),
            "expected DefaultPackSizeLimit error"
        );
    }
}
