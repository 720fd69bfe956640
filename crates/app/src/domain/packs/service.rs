//! Packs service.

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::Arc,
    time::Instant,
};

use async_trait::async_trait;
use mockall::automock;
use tokio::task;
use tracing::{debug, info};

use packwise::{
    packing::Packing,
    packs::{PackSize, PackSizes},
    solvers::{Solver, dp::DynamicProgrammingSolver},
};

use crate::domain::packs::{
    DEFAULT_MAX_ORDER_QUANTITY, DEFAULT_MAX_PACK_SIZE, errors::PacksServiceError,
    repository::PackSizesRepository,
};

/// Limits applied before an order reaches the solver.
///
/// Together they bound the solver tables at `max_order_quantity + max_pack_size` totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PacksSettings {
    /// Largest order quantity that will be solved
    pub max_order_quantity: u64,

    /// Largest pack size that may be stored
    pub max_pack_size: u64,
}

impl PacksSettings {
    /// Reject a set whose largest size is above `max_pack_size`.
    ///
    /// # Errors
    ///
    /// Returns [`PacksServiceError::PackSizeTooLarge`] naming the largest size.
    pub fn check_pack_sizes(&self, sizes: &PackSizes) -> Result<(), PacksServiceError> {
        match sizes.largest().map(PackSize::get) {
            Some(size) if size > self.max_pack_size => Err(PacksServiceError::PackSizeTooLarge {
                size,
                max: self.max_pack_size,
            }),
            _ => Ok(()),
        }
    }
}

impl Default for PacksSettings {
    fn default() -> Self {
        Self {
            max_order_quantity: DEFAULT_MAX_ORDER_QUANTITY,
            max_pack_size: DEFAULT_MAX_PACK_SIZE,
        }
    }
}

#[derive(Clone)]
pub struct StoredPacksService {
    repository: Arc<dyn PackSizesRepository>,
    settings: PacksSettings,
}

impl StoredPacksService {
    #[must_use]
    pub fn new(repository: Arc<dyn PackSizesRepository>, settings: PacksSettings) -> Self {
        Self {
            repository,
            settings,
        }
    }
}

impl Debug for StoredPacksService {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("StoredPacksService")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl PacksService for StoredPacksService {
    async fn list_pack_sizes(&self) -> Result<PackSizes, PacksServiceError> {
        Ok(self.repository.get_all().await?)
    }

    async fn replace_pack_sizes(&self, sizes: Vec<i64>) -> Result<PackSizes, PacksServiceError> {
        let sizes = PackSizes::try_from_unique(&sizes)?;

        self.settings.check_pack_sizes(&sizes)?;

        self.repository.replace_all(sizes.clone()).await?;

        info!(count = sizes.len(), "replaced pack sizes");

        Ok(sizes)
    }

    async fn calculate_packs(&self, order_quantity: i64) -> Result<Packing, PacksServiceError> {
        let max = self.settings.max_order_quantity;

        if let Ok(quantity) = u64::try_from(order_quantity)
            && quantity > max
        {
            return Err(PacksServiceError::OrderQuantityTooLarge {
                order_quantity: quantity,
                max,
            });
        }

        let pack_sizes = self.repository.get_all().await?;

        debug!(
            order_quantity,
            pack_sizes = pack_sizes.len(),
            "solving packing"
        );

        let started = Instant::now();

        let packing = task::spawn_blocking(move || {
            DynamicProgrammingSolver::solve_pack_sizes(order_quantity, &pack_sizes)
        })
        .await
        .map_err(PacksServiceError::Worker)??;

        info!(
            order_quantity,
            total_items = packing.total_items(),
            total_packs = packing.total_packs(),
            elapsed_ms = started.elapsed().as_millis(),
            "calculated packing"
        );

        Ok(packing)
    }
}

#[automock]
#[async_trait]
pub trait PacksService: Send + Sync {
    /// Retrieves the current pack sizes, largest first.
    async fn list_pack_sizes(&self) -> Result<PackSizes, PacksServiceError>;

    /// Replaces every pack size, rejecting non-positive and duplicate sizes.
    async fn replace_pack_sizes(&self, sizes: Vec<i64>) -> Result<PackSizes, PacksServiceError>;

    /// Works out the packs to ship for an order using the current pack sizes.
    async fn calculate_packs(&self, order_quantity: i64) -> Result<Packing, PacksServiceError>;
}
