//! Pack Errors

use salvo::http::StatusError;
use tracing::error;

use packwise::solvers::SolverError;
use packwise_app::domain::packs::PacksServiceError;

pub(crate) fn into_status_error(error: PacksServiceError) -> StatusError {
    match error {
        PacksServiceError::PackSizes(source) => {
            StatusError::bad_request().brief(source.to_string())
        }
        PacksServiceError::OrderQuantityTooLarge { .. }
        | PacksServiceError::PackSizeTooLarge { .. } => {
            StatusError::bad_request().brief(error.to_string())
        }
        PacksServiceError::Solver(source) => solver_status_error(source),
        PacksServiceError::Repository(source) => {
            error!("pack size store failed: {source}");

            StatusError::internal_server_error()
        }
        PacksServiceError::Worker(source) => {
            error!("solver task failed: {source}");

            StatusError::internal_server_error()
        }
    }
}

fn solver_status_error(error: SolverError) -> StatusError {
    match error {
        SolverError::InvalidOrderQuantity { .. }
        | SolverError::InvalidPackSize { .. }
        | SolverError::OrderTooLarge { .. } => StatusError::bad_request().brief(error.to_string()),
        SolverError::NoPacksAvailable => {
            StatusError::conflict().brief("No pack sizes are configured")
        }
        SolverError::Unfulfillable { .. } => StatusError::unprocessable_entity()
            .brief("Order cannot be fulfilled with the configured pack sizes"),
        SolverError::InvariantViolation { message } => {
            error!("solver invariant violated: {message}");

            StatusError::internal_server_error()
        }
    }
}
