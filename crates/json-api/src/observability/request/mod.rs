//! Request-level logging, request IDs, and parent trace extraction.

mod parent_context;
mod request_ids;
mod spans;

use std::time::Instant;

use salvo::{
    Request, handler,
    prelude::{Depot, FlowCtrl, Response},
};
use tracing::{Instrument as _, Span, error, info, warn};
use tracing_opentelemetry::OpenTelemetrySpanExt as _;

use super::{metrics, settings};

const REQUEST_ID_DEPOT_KEY: &str = "request_id";

#[handler]
pub(crate) async fn request_logging(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    if req.uri().path() == "/metrics" {
        ctrl.call_next(req, depot, res).await;
        return;
    }

    let started = Instant::now();

    let request_id =
        request_ids::resolve_request_id(req.header::<String>(request_ids::REQUEST_ID_HEADER));

    depot.insert(REQUEST_ID_DEPOT_KEY, request_id.clone());

    request_ids::set_request_id_header(res, &request_id);

    let method = req.method().to_string();
    let path = req.uri().path().to_owned();
    let remote_addr = req.remote_addr().to_string();
    let route = spans::route_for_path(&path);
    let _in_flight_request = metrics::InFlightRequestGuard::track();

    let span = tracing::info_span!(
        parent: None,
        "http.request",
        otel.name = %spans::span_name(&method, route),
        otel.kind = "server",
        request_id = %request_id,
        method = %method,
        path = %path,
        remote_addr = %remote_addr,
        status = tracing::field::Empty,
        duration_ms = tracing::field::Empty
    );

    if settings::parent_extraction_enabled()
        && let Some(parent_context) = parent_context::extract_parent_context(req.headers())
        && let Err(source) = span.set_parent(parent_context)
    {
        warn!("failed to set parent context on request span: {source}");
    }

    ctrl.call_next(req, depot, res)
        .instrument(span.clone())
        .await;

    let duration = started.elapsed();
    let status = request_ids::response_status_or_ok(res.status_code);

    metrics::observe_request(&method, route, status.as_u16(), duration.as_secs_f64());

    let completed = CompletedRequest {
        method: &method,
        path: &path,
        request_id: &request_id,
        status: status.as_u16(),
        duration_ms: duration.as_millis(),
    };

    completed.log(&span);
}

#[derive(Debug)]
struct CompletedRequest<'a> {
    method: &'a str,
    path: &'a str,
    request_id: &'a str,
    status: u16,
    duration_ms: u128,
}

impl CompletedRequest<'_> {
    fn log(&self, span: &Span) {
        let Self {
            method,
            path,
            request_id,
            status,
            duration_ms,
        } = *self;

        let threshold_ms = u128::from(settings::slow_request_threshold_ms());

        span.record("status", status);
        span.record("duration_ms", duration_ms);

        span.in_scope(|| {
            info!(status, duration_ms, "request.completed");

            match status {
                500..=599 => error!(status, method, path, request_id, "server error response"),
                400..=499 => warn!(status, method, path, request_id, "client error response"),
                _ => {}
            }

            if duration_ms > threshold_ms {
                warn!(
                    method,
                    path,
                    request_id,
                    duration_ms,
                    threshold_ms,
                    "slow request detected"
                );
            }
        });
    }
}
