//! Middleware layer.
//!
//! Cross-cutting concerns that wrap every request on its way through the
//! server. Currently one: per-request tracing.

mod trace;

pub(crate) use trace::trace;
