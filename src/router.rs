//! Radix-tree request router.
//!
//! One tree per HTTP method. O(path-length) lookup. The router also owns the
//! application state and hands a clone of it to every handler it calls.

use std::collections::HashMap;
use std::sync::Arc;

use bytes::Bytes;
use http::header::{ALLOW, HeaderValue};
use http_body_util::{BodyExt, LengthLimitError, Limited};
use hyper::body::Body;
use matchit::Router as MatchitRouter;
use percent_encoding::percent_decode_str;
use tracing::debug;

use crate::error::{BoxError, Rejection};
use crate::handler::{BoxedHandler, Handler};
use crate::method::Method;
use crate::request::Request;
use crate::response::{IntoResponse, Response};
use crate::status::Status;

/// Largest request body, in bytes, the router buffers before calling a
/// handler. Anything longer is answered with `413 Content Too Large`.
pub const MAX_BODY_SIZE: usize = 64 * 1024;

/// The application router.
///
/// Build it once at startup; pass it to [`Server::serve`](crate::Server::serve).
/// Each [`Router::on`] call returns `self` so registrations chain naturally.
pub struct Router<S = ()> {
    routes: HashMap<Method, MatchitRouter<BoxedHandler<S>>>,
    state: S,
}

/// Outcome of matching a method + path pair.
pub(crate) enum Lookup<S> {
    Found(BoxedHandler<S>, HashMap<String, String>),
    /// The path exists, but only under the listed methods.
    MethodNotAllowed(Vec<Method>),
    NotFound,
}

impl Router<()> {
    pub fn new() -> Self {
        Self::with_state(())
    }
}

impl Default for Router<()> {
    fn default() -> Self { Self::new() }
}

impl<S> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    /// A router whose handlers all receive a clone of `state`.
    pub fn with_state(state: S) -> Self {
        Self { routes: HashMap::new(), state }
    }

    /// Register a handler for a method + path pair. Returns `self` for chaining.
    ///
    /// Path parameters use `{name}` syntax; `req.param("name")` retrieves them:
    ///
    /// ```rust
    /// # use articles::{Method, Request, Response, Router};
    /// # async fn list(_: Request, _: ()) -> Response { Response::text("") }
    /// # async fn remove(_: Request, _: ()) -> Response { Response::text("") }
    /// Router::new()
    ///     .on(Method::Get,    "/articles",              list)
    ///     .on(Method::Delete, "/articles/{article_id}", remove);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `path` is not a valid route or conflicts with one already
    /// registered for `method`.
    pub fn on(mut self, method: Method, path: &str, handler: impl Handler<S>) -> Self {
        self.routes
            .entry(method)
            .or_default()
            .insert(path, handler.into_boxed_handler())
            .unwrap_or_else(|e| panic!("invalid route `{method} {path}`: {e}"));
        self
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub(crate) fn lookup(&self, method: Method, path: &str) -> Lookup<S> {
        if let Some(matched) = self.routes.get(&method).and_then(|tree| tree.at(path).ok()) {
            let params = matched.params.iter()
                .map(|(k, v)| (k.to_owned(), percent_decode_str(v).decode_utf8_lossy().into_owned()))
                .collect();
            return Lookup::Found(Arc::clone(matched.value), params);
        }

        let mut allowed: Vec<Method> = self.routes.iter()
            .filter(|(_, tree)| tree.at(path).is_ok())
            .map(|(m, _)| *m)
            .collect();

        if allowed.is_empty() {
            Lookup::NotFound
        } else {
            allowed.sort();
            Lookup::MethodNotAllowed(allowed)
        }
    }

    /// Routes one request and produces one response.
    ///
    /// Generic over the body so the router can be driven by `hyper` in the
    /// server and by in-memory bodies in tests. Never fails: routing misses,
    /// unreadable bodies and bodies over [`MAX_BODY_SIZE`] become 4xx
    /// responses. Path parameters are percent-decoded.
    pub async fn handle<B>(&self, req: http::Request<B>) -> Response
    where
        B: Body<Data = Bytes>,
        B::Error: Into<BoxError>,
    {
        let Ok(method) = Method::try_from(req.method()) else {
            debug!(method = %req.method(), "unsupported method");
            return Response::status(Status::MethodNotAllowed);
        };
        let path = req.uri().path().to_owned();

        let (handler, params) = match self.lookup(method, &path) {
            Lookup::Found(handler, params) => (handler, params),
            Lookup::MethodNotAllowed(allowed) => return method_not_allowed(&allowed),
            Lookup::NotFound => return Response::status(Status::NotFound),
        };

        let (parts, body) = req.into_parts();
        let body = match Limited::new(body, MAX_BODY_SIZE).collect().await {
            Ok(collected) => collected.to_bytes(),
            Err(e) if e.is::<LengthLimitError>() => {
                return Rejection::BodyTooLarge { limit: MAX_BODY_SIZE }.into_response();
            }
            Err(e) => return Rejection::Body(e).into_response(),
        };

        let req = Request::new(method, path, parts.headers, body, params);
        handler.call(req, self.state.clone()).await
    }
}

fn method_not_allowed(allowed: &[Method]) -> Response {
    let list = allowed.iter().map(|m| m.as_str()).collect::<Vec<_>>().join(", ");
    let builder = Response::builder().status(Status::MethodNotAllowed);

    match HeaderValue::try_from(list) {
        Ok(value) => builder.header(ALLOW, value).no_body(),
        Err(_) => builder.no_body(),
    }
}

#[cfg(test)]
mod tests {
    use super::{Lookup, Router};
    use crate::method::Method;
    use crate::request::Request;
    use crate::response::Response;

    async fn noop(_req: Request, _state: ()) -> Response {
        Response::text("")
    }

    fn router() -> Router {
        Router::new()
            .on(Method::Get, "/articles", noop)
            .on(Method::Post, "/articles", noop)
            .on(Method::Put, "/articles/{article_id}", noop)
    }

    #[test]
    fn captures_path_params() {
        match router().lookup(Method::Put, "/articles/12") {
            Lookup::Found(_, params) => {
                assert_eq!(params.get("article_id").map(String::as_str), Some("12"));
            }
            _ => panic!("expected a match"),
        }
    }

    #[test]
    fn percent_decodes_path_params() {
        match router().lookup(Method::Put, "/articles/%31%32") {
            Lookup::Found(_, params) => {
                assert_eq!(params.get("article_id").map(String::as_str), Some("12"));
            }
            _ => panic!("expected a match"),
        }
    }

    #[test]
    fn reports_allowed_methods_for_known_paths() {
        match router().lookup(Method::Delete, "/articles") {
            Lookup::MethodNotAllowed(allowed) => {
                assert_eq!(allowed, vec![Method::Get, Method::Post]);
            }
            _ => panic!("expected method not allowed"),
        }
    }

    #[test]
    fn unknown_paths_are_not_found() {
        assert!(matches!(router().lookup(Method::Get, "/users"), Lookup::NotFound));
        assert!(matches!(router().lookup(Method::Get, "/articles/1/extra"), Lookup::NotFound));
    }

    #[test]
    #[should_panic(expected = "invalid route")]
    fn conflicting_routes_panic() {
        let _ = router().on(Method::Get, "/articles", noop);
    }
}
