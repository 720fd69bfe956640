//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};

use packwise_app::{context::AppContext, domain::packs::MockPacksService};

use crate::state::State;

pub(crate) fn state_with_packs(packs: MockPacksService) -> Arc<State> {
    State::from_app_context(AppContext {
        packs: Arc::new(packs),
    })
}

pub(crate) fn packs_service(packs: MockPacksService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_packs(packs)))
            .push(route),
    )
}
