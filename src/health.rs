//! Health-check handlers.
//!
//! | Probe | Path | Question |
//! |---|---|---|
//! | **Liveness** | `/healthz` | Is the process alive? Failure → restart. |
//! | **Readiness** | `/readyz` | Can it serve article requests? Failure → pulled from the load balancer. |

use tracing::debug;

use crate::catalog::Catalog;
use crate::request::Request;
use crate::response::Response;

/// Always `200 OK` with body `"ok"`. Deliberately touches nothing.
pub async fn liveness<S>(_req: Request, _state: S) -> Response {
    Response::text("ok")
}

/// `200 OK` with body `"ready"` once the catalog answers.
pub async fn readiness(_req: Request, catalog: Catalog) -> Response {
    let articles = catalog.len();
    debug!(articles, "readiness probe");
    Response::text("ready")
}
