//! Replace Pack Sizes Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::{
    extensions::*,
    packs::{PacksResponse, errors::into_status_error},
    state::State,
};

/// Replace Pack Sizes Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ReplacePacksRequest {
    /// Every pack size to offer, replacing the current set
    pub packs: Vec<i64>,
}

/// Replace Pack Sizes Handler
///
/// Sizes must be positive and unique. An empty list clears every size.
#[endpoint(
    tags("packs"),
    summary = "Replace Pack Sizes",
    responses(
        (status_code = StatusCode::OK, description = "Pack sizes replaced"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "packs.replace",
    skip(json, depot),
    fields(count = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<ReplacePacksRequest>,
    depot: &mut Depot,
) -> Result<Json<PacksResponse>, StatusError> {
    let ReplacePacksRequest { packs } = json.into_inner();

    tracing::Span::current().record("count", packs.len());

    let sizes = depot
        .obtain_or_500::<Arc<State>>()?
        .app
        .packs
        .replace_pack_sizes(packs)
        .await
        .map_err(into_status_error)?;

    Ok(Json(PacksResponse::from(&sizes)))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use packwise::packs::{PackSizes, PackSizesError};
    use packwise_app::domain::packs::{MockPacksService, PacksServiceError};

    use crate::test_helpers::packs_service;

    use super::*;

    fn make_service(packs: MockPacksService) -> Service {
        packs_service(packs, Router::with_path("packs").put(handler))
    }

    #[tokio::test]
    async fn test_replace_returns_stored_sizes() -> TestResult {
        let mut packs = MockPacksService::new();

        packs
            .expect_replace_pack_sizes()
            .once()
            .withf(|sizes| *sizes == vec![23, 31, 53])
            .return_once(|sizes| Ok(PackSizes::from_sizes(sizes)?));

        packs.expect_list_pack_sizes().never();
        packs.expect_calculate_packs().never();

        let mut res = TestClient::put("http://example.com/packs")
            .json(&json!({ "packs": [23, 31, 53] }))
            .send(&make_service(packs))
            .await;

        let body: PacksResponse = res.take_json().await?;
        let sizes: Vec<u64> = body.packs.iter().map(|pack| pack.size).collect();

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(sizes, vec![53, 31, 23]);

        Ok(())
    }

    #[tokio::test]
    async fn test_replace_duplicate_sizes_returns_400() {
        let mut packs = MockPacksService::new();

        packs
            .expect_replace_pack_sizes()
            .once()
            .return_once(|_| {
                Err(PacksServiceError::PackSizes(
                    PackSizesError::DuplicatePackSize { size: 250 },
                ))
            });

        packs.expect_list_pack_sizes().never();
        packs.expect_calculate_packs().never();

        let res = TestClient::put("http://example.com/packs")
            .json(&json!({ "packs": [250, 250] }))
            .send(&make_service(packs))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
    }

    #[tokio::test]
    async fn test_replace_malformed_body_returns_400() {
        let mut packs = MockPacksService::new();

        packs.expect_replace_pack_sizes().never();
        packs.expect_list_pack_sizes().never();
        packs.expect_calculate_packs().never();

        let res = TestClient::put("http://example.com/packs")
            .json(&json!({ "packs": "250,500" }))
            .send(&make_service(packs))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
    }
}
