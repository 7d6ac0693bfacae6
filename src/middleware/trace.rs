//! Per-request span with method, path, status, and latency.

use std::future::Future;
use std::time::Instant;

use tracing::{Instrument, info, info_span};

use crate::response::Response;

/// Runs `fut` inside a `request{method, path}` span and logs its outcome.
pub(crate) async fn trace<F>(method: &http::Method, path: &str, fut: F) -> Response
where
    F: Future<Output = Response>,
{
    let span = info_span!("request", %method, path);
    let started = Instant::now();

    let response = fut.instrument(span.clone()).await;

    span.in_scope(|| {
        info!(
            status = response.status_code().as_u16(),
            latency_ms = started.elapsed().as_secs_f64() * 1000.0,
            "request completed"
        );
    });

    response
}
