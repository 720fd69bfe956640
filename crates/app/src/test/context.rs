//! Test context for service-level tests.

use std::sync::Arc;

use packwise::packs::PackSizes;

use crate::domain::packs::{
    DEFAULT_PACK_SIZES, InMemoryPackSizesRepository, PacksSettings, StoredPacksService,
};

pub(crate) struct TestContext {
    pub repository: Arc<InMemoryPackSizesRepository>,
    pub packs: StoredPacksService,
}

impl TestContext {
    /// Service over an in-memory store seeded with the default pack sizes.
    pub(crate) fn new() -> Self {
        let sizes = PackSizes::from_sizes(DEFAULT_PACK_SIZES).unwrap_or_default();
        let repository = Arc::new(InMemoryPackSizesRepository::with_pack_sizes(sizes));

        let packs = StoredPacksService::new(repository.clone(), PacksSettings::default());

        Self { repository, packs }
    }
}
