//! Solvers for Packings

use thiserror::Error;

use crate::{
    packing::Packing,
    packs::{PackSizes, PackSizesError},
};

pub mod dp;

/// Solver Errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    /// The order quantity was zero or negative.
    #[error("order quantity must be a positive integer, got {order_quantity}")]
    InvalidOrderQuantity {
        /// The rejected quantity
        order_quantity: i64,
    },

    /// No pack sizes were supplied.
    #[error("no pack sizes available")]
    NoPacksAvailable,

    /// A pack size was zero or negative.
    #[error("pack size must be a positive integer, got {size}")]
    InvalidPackSize {
        /// The rejected size
        size: i64,
    },

    /// No combination of the available packs can cover the order.
    #[error("cannot fulfil an order of {order_quantity} with the given pack sizes")]
    Unfulfillable {
        /// The order quantity
        order_quantity: u64,
    },

    /// The order plus the largest pack exceeds [`dp::MAX_TABLE_TOTAL`].
    #[error("order of {order_quantity} with packs of up to {largest} is too large to solve")]
    OrderTooLarge {
        /// The order quantity
        order_quantity: u64,

        /// The largest available pack size
        largest: u64,
    },

    /// Internal solver invariant was violated (this is a bug).
    #[error("solver invariant violated: {message}")]
    InvariantViolation {
        /// What invariant was violated
        message: &'static str,
    },
}

impl From<PackSizesError> for SolverError {
    fn from(error: PackSizesError) -> Self {
        match error {
            PackSizesError::InvalidPackSize { size } => Self::InvalidPackSize { size },
            PackSizesError::DuplicatePackSize { .. } => Self::InvariantViolation {
                message: "duplicate pack sizes are deduplicated before solving",
            },
        }
    }
}

/// Trait for choosing the packs that fulfil an order
pub trait Solver {
    /// Solve for raw inputs.
    ///
    /// The order quantity is validated first, then the presence of pack sizes, then each pack
    /// size. Duplicate pack sizes are ignored.
    ///
    /// # Errors
    ///
    /// Returns a [`SolverError`] if the inputs are invalid or the order cannot be fulfilled.
    fn solve(order_quantity: i64, pack_sizes: &[i64]) -> Result<Packing, SolverError> {
        if order_quantity <= 0 {
            return Err(SolverError::InvalidOrderQuantity { order_quantity });
        }

        if pack_sizes.is_empty() {
            return Err(SolverError::NoPacksAvailable);
        }

        let pack_sizes = PackSizes::from_sizes(pack_sizes.iter().copied())?;

        Self::solve_pack_sizes(order_quantity, &pack_sizes)
    }

    /// Solve for an already validated set of pack sizes.
    ///
    /// # Errors
    ///
    /// Returns a [`SolverError`] if the order quantity is invalid, there are no pack sizes, or
    /// the order cannot be fulfilled.
    fn solve_pack_sizes(order_quantity: i64, pack_sizes: &PackSizes)
    -> Result<Packing, SolverError>;
}
