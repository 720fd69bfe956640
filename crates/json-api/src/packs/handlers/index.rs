//! Pack Size Index Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    extensions::*,
    packs::{PacksResponse, errors::into_status_error},
    state::State,
};

/// Pack Size Index Handler
///
/// Returns the configured pack sizes, largest first.
#[endpoint(
    tags("packs"),
    summary = "List Pack Sizes",
    responses(
        (status_code = StatusCode::OK, description = "Configured pack sizes"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<PacksResponse>, StatusError> {
    let sizes = depot
        .obtain_or_500::<Arc<State>>()?
        .app
        .packs
        .list_pack_sizes()
        .await
        .map_err(into_status_error)?;

    Ok(Json(PacksResponse::from(&sizes)))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use packwise::packs::PackSizes;
    use packwise_app::domain::packs::{
        MockPacksService, PackSizesRepositoryError, PacksServiceError,
    };

    use crate::test_helpers::packs_service;

    use super::*;

    fn make_service(packs: MockPacksService) -> Service {
        packs_service(packs, Router::with_path("packs").get(handler))
    }

    #[tokio::test]
    async fn test_index_returns_sizes_largest_first() -> TestResult {
        let mut packs = MockPacksService::new();

        packs
            .expect_list_pack_sizes()
            .once()
            .return_once(|| Ok(PackSizes::from_sizes([250, 5000, 500])?));

        packs.expect_replace_pack_sizes().never();
        packs.expect_calculate_packs().never();

        let response: PacksResponse = TestClient::get("http://example.com/packs")
            .send(&make_service(packs))
            .await
            .take_json()
            .await?;

        let sizes: Vec<u64> = response.packs.iter().map(|pack| pack.size).collect();

        assert_eq!(sizes, vec![5000, 500, 250]);

        Ok(())
    }

    #[tokio::test]
    async fn test_index_returns_empty_list() -> TestResult {
        let mut packs = MockPacksService::new();

        packs
            .expect_list_pack_sizes()
            .once()
            .return_once(|| Ok(PackSizes::new()));

        packs.expect_replace_pack_sizes().never();
        packs.expect_calculate_packs().never();

        let response: PacksResponse = TestClient::get("http://example.com/packs")
            .send(&make_service(packs))
            .await
            .take_json()
            .await?;

        assert!(response.packs.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_index_store_error_returns_500() {
        let mut packs = MockPacksService::new();

        packs.expect_list_pack_sizes().once().return_once(|| {
            Err(PacksServiceError::Repository(
                PackSizesRepositoryError::Unavailable,
            ))
        });

        packs.expect_replace_pack_sizes().never();
        packs.expect_calculate_packs().never();

        let res = TestClient::get("http://example.com/packs")
            .send(&make_service(packs))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));
    }
}
