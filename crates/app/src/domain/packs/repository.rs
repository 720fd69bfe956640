//! Pack Sizes Repository

use async_trait::async_trait;
use mockall::automock;
use thiserror::Error;
use tokio::sync::RwLock;

use packwise::packs::PackSizes;

#[derive(Debug, Error)]
pub enum PackSizesRepositoryError {
    #[error("pack size store unavailable")]
    Unavailable,
}

/// Pack sizes held in process memory behind a single read-write lock.
///
/// Readers share the lock and receive a copy of the whole set; a replacement swaps the whole
/// set under the write lock, so readers never observe a partial update.
#[derive(Debug, Default)]
pub struct InMemoryPackSizesRepository {
    sizes: RwLock<PackSizes>,
}

impl InMemoryPackSizesRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_pack_sizes(sizes: PackSizes) -> Self {
        Self {
            sizes: RwLock::new(sizes),
        }
    }
}

#[async_trait]
impl PackSizesRepository for InMemoryPackSizesRepository {
    async fn get_all(&self) -> Result<PackSizes, PackSizesRepositoryError> {
        Ok(self.sizes.read().await.clone())
    }

    async fn replace_all(&self, sizes: PackSizes) -> Result<(), PackSizesRepositoryError> {
        *self.sizes.write().await = sizes;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait PackSizesRepository: Send + Sync {
    /// Current pack sizes, largest first.
    async fn get_all(&self) -> Result<PackSizes, PackSizesRepositoryError>;

    /// Replace every pack size at once.
    async fn replace_all(&self, sizes: PackSizes) -> Result<(), PackSizesRepositoryError>;
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use testresult::TestResult;

    use super::*;

    #[tokio::test]
    async fn new_repository_is_empty() -> TestResult {
        let repository = InMemoryPackSizesRepository::new();

        assert!(repository.get_all().await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn replace_all_swaps_the_whole_set() -> TestResult {
        let repository = InMemoryPackSizesRepository::with_pack_sizes(PackSizes::from_sizes([
            250, 500,
        ])?);

        repository
            .replace_all(PackSizes::from_sizes([23, 31, 53])?)
            .await?;

        assert_eq!(
            repository.get_all().await?,
            PackSizes::from_sizes([53, 31, 23])?
        );

        Ok(())
    }

    #[tokio::test]
    async fn concurrent_readers_see_complete_sets() -> TestResult {
        let first = PackSizes::from_sizes([250, 500, 1000])?;
        let second = PackSizes::from_sizes([23, 31, 53])?;

        let repository = Arc::new(InMemoryPackSizesRepository::with_pack_sizes(first.clone()));

        let mut readers = Vec::new();

        for _ in 0..8 {
            let repository = Arc::clone(&repository);

            readers.push(tokio::spawn(async move { repository.get_all().await }));
        }

        repository.replace_all(second.clone()).await?;

        for reader in readers {
            let sizes = reader.await??;

            assert!(
                sizes == first || sizes == second,
                "reader observed a partial set: {sizes:?}"
            );
        }

        Ok(())
    }
}
