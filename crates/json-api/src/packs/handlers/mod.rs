//! Pack Handlers

pub(crate) mod index;
pub(crate) mod replace;

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use packwise::packs::PackSizes;

/// Pack Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct PackResponse {
    /// Number of items the pack holds
    pub size: u64,
}

/// Pack Sizes Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct PacksResponse {
    /// Available pack sizes, largest first
    pub packs: Vec<PackResponse>,
}

impl From<&PackSizes> for PacksResponse {
    fn from(sizes: &PackSizes) -> Self {
        Self {
            packs: sizes
                .iter()
                .map(|size| PackResponse { size: size.get() })
                .collect(),
        }
    }
}
