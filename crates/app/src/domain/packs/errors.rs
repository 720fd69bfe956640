//! Packs service errors.

use thiserror::Error;
use tokio::task::JoinError;

use packwise::{packs::PackSizesError, solvers::SolverError};

use crate::domain::packs::repository::PackSizesRepositoryError;

#[derive(Debug, Error)]
pub enum PacksServiceError {
    #[error(transparent)]
    PackSizes(#[from] PackSizesError),

    #[error(transparent)]
    Solver(#[from] SolverError),

    #[error("order quantity {order_quantity} exceeds the maximum of {max}")]
    OrderQuantityTooLarge { order_quantity: u64, max: u64 },

    #[error("pack size {size} exceeds the maximum of {max}")]
    PackSizeTooLarge { size: u64, max: u64 },

    #[error("pack size store error")]
    Repository(#[from] PackSizesRepositoryError),

    #[error("solver task failed")]
    Worker(#[source] JoinError),
}
