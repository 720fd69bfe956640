//! Packs

pub mod errors;
mod repository;
pub mod service;

pub use errors::PacksServiceError;
pub use repository::*;
pub use service::*;

/// Pack sizes offered when none have been configured.
pub const DEFAULT_PACK_SIZES: [i64; 5] = [250, 500, 1000, 2000, 5000];

/// Largest order quantity accepted when none has been configured.
pub const DEFAULT_MAX_ORDER_QUANTITY: u64 = 10_000_000;

/// Largest pack size accepted when none has been configured.
pub const DEFAULT_MAX_PACK_SIZE: u64 = 1_000_000;
