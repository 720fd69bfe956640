//! Create Calculation Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use packwise::{
    packing::{PackAllocation, Packing},
    solvers::SolverError,
};
use packwise_app::domain::packs::PacksServiceError;

use crate::{
    extensions::*,
    observability::{CalculationOutcome, observe_calculation},
    packs::errors::into_status_error,
    state::State,
};

/// Calculate Packs Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CalculatePacksRequest {
    /// Number of items ordered
    pub order_quantity: i64,
}

/// Packs of a single size in a calculation
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct PackUsageResponse {
    pub pack_size: u64,
    pub quantity: u64,
}

impl From<&PackAllocation> for PackUsageResponse {
    fn from(allocation: &PackAllocation) -> Self {
        Self {
            pack_size: allocation.size.get(),
            quantity: allocation.quantity,
        }
    }
}

/// Calculation Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CalculationResponse {
    /// Number of items ordered
    pub order_quantity: u64,

    /// Number of items shipped, never less than the order quantity
    pub total_items: u64,

    /// Number of packs shipped
    pub total_packs: u64,

    /// Packs shipped per size, largest first
    pub packs_used: Vec<PackUsageResponse>,
}

impl From<&Packing> for CalculationResponse {
    fn from(packing: &Packing) -> Self {
        Self {
            order_quantity: packing.order_quantity(),
            total_items: packing.total_items(),
            total_packs: packing.total_packs(),
            packs_used: packing.iter().map(Into::into).collect(),
        }
    }
}

fn outcome_of(result: &Result<Packing, PacksServiceError>) -> CalculationOutcome {
    match result {
        Ok(_) => CalculationOutcome::Solved,
        Err(PacksServiceError::Repository(_) | PacksServiceError::Worker(_)) => {
            CalculationOutcome::Failed
        }
        Err(PacksServiceError::Solver(SolverError::InvariantViolation { .. })) => {
            CalculationOutcome::Failed
        }
        Err(_) => CalculationOutcome::Rejected,
    }
}

/// Create Calculation Handler
///
/// Works out the fewest items, then the fewest packs, that cover the order using the
/// configured pack sizes.
#[endpoint(
    tags("calculations"),
    summary = "Calculate Packs",
    responses(
        (status_code = StatusCode::OK, description = "Packs calculated"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::CONFLICT, description = "No pack sizes configured"),
        (status_code = StatusCode::UNPROCESSABLE_ENTITY, description = "Order cannot be fulfilled"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "calculations.create",
    skip(json, depot),
    fields(
        order_quantity = tracing::field::Empty,
        total_items = tracing::field::Empty,
        total_packs = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    json: JsonBody<CalculatePacksRequest>,
    depot: &mut Depot,
) -> Result<Json<CalculationResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let CalculatePacksRequest { order_quantity } = json.into_inner();

    let span = tracing::Span::current();

    span.record("order_quantity", order_quantity);

    let result = state.app.packs.calculate_packs(order_quantity).await;

    observe_calculation(outcome_of(&result));

    let packing = result.map_err(into_status_error)?;

    span.record("total_items", packing.total_items());
    span.record("total_packs", packing.total_packs());

    Ok(Json(CalculationResponse::from(&packing)))
}
