//! Router

use std::sync::Arc;

use salvo::{
    affix_state::inject,
    oapi::{OpenApi, swagger_ui::SwaggerUi},
    prelude::*,
    trailing_slash::remove_slash,
};

use crate::{
    calculations, healthcheck,
    observability::{metrics_handler, request_logging},
    packs,
    state::State,
};

const OPENAPI_PATH: &str = "/api-doc/openapi.json";

/// Build the API router with its OpenAPI document and Swagger UI.
pub(crate) fn app_router(state: Arc<State>) -> Router {
    let router = Router::new()
        .hoop(CatchPanic::new())
        .hoop(request_logging)
        .hoop(remove_slash())
        .hoop(inject(state))
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(Router::with_path("metrics").get(metrics_handler))
        .push(
            Router::with_path("packs")
                .get(packs::index::handler)
                .put(packs::replace::handler),
        )
        .push(Router::with_path("calculations").post(calculations::create::handler));

    let doc = OpenApi::new("Packwise API", env!("CARGO_PKG_VERSION")).merge_router(&router);

    router
        .push(doc.into_router(OPENAPI_PATH))
        .push(SwaggerUi::new(OPENAPI_PATH).into_router("docs"))
}
