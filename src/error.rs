//! Error types.
//!
//! Two tiers, never mixed:
//!
//! - [`Error`] surfaces infrastructure failures: reading configuration,
//!   binding to a port, accepting a connection.
//! - [`Rejection`] is a request that never made it to domain logic because
//!   its body or path could not be decoded. It renders as a 4xx response.
//!
//! "Article not found" is neither. It is an ordinary envelope with
//! `success: false`, see [`Envelope`](crate::Envelope).

use std::fmt;
use std::net::AddrParseError;

use serde_json::json;
use tracing::warn;

use crate::response::{IntoResponse, Json, Response};
use crate::status::Status;

pub(crate) type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The error type returned by the crate's fallible startup operations.
#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    InvalidAddr {
        var: &'static str,
        value: String,
        source: AddrParseError,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::InvalidAddr { var, value, source } => {
                write!(f, "{var}: invalid socket address `{value}`: {source}")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::InvalidAddr { source, .. } => Some(source),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

/// A request rejected at the transport boundary.
#[derive(Debug)]
pub enum Rejection {
    /// The request body could not be read off the connection.
    Body(BoxError),
    /// The request body is longer than the router accepts.
    BodyTooLarge { limit: usize },
    /// The request declares a content type other than JSON.
    UnsupportedContentType(String),
    /// The body is not JSON, or does not have the expected shape.
    InvalidJson(serde_json::Error),
    /// A path parameter did not parse into the expected type.
    InvalidParam { name: String, value: String },
    /// The route has no parameter by that name.
    MissingParam(String),
}

impl Rejection {
    pub fn status(&self) -> Status {
        match self {
            Self::Body(_) => Status::BadRequest,
            Self::BodyTooLarge { .. } => Status::ContentTooLarge,
            Self::UnsupportedContentType(_)
            | Self::InvalidJson(_)
            | Self::InvalidParam { .. }
            | Self::MissingParam(_) => Status::UnprocessableContent,
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Body(e) => write!(f, "failed to read request body: {e}"),
            Self::BodyTooLarge { limit } => {
                write!(f, "request body exceeds the limit of {limit} bytes")
            }
            Self::UnsupportedContentType(ct) => {
                write!(f, "expected a JSON request body, got content type `{ct}`")
            }
            Self::InvalidJson(e) => write!(f, "invalid request body: {e}"),
            Self::InvalidParam { name, value } => {
                write!(f, "path parameter `{name}` could not be parsed: `{value}`")
            }
            Self::MissingParam(name) => write!(f, "missing path parameter `{name}`"),
        }
    }
}

impl std::error::Error for Rejection {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Body(e) => Some(e.as_ref()),
            Self::InvalidJson(e) => Some(e),
            Self::BodyTooLarge { .. }
            | Self::UnsupportedContentType(_)
            | Self::InvalidParam { .. }
            | Self::MissingParam(_) => None,
        }
    }
}

impl From<serde_json::Error> for Rejection {
    fn from(e: serde_json::Error) -> Self {
        Self::InvalidJson(e)
    }
}

/// `{"detail": "..."}` with a 400, 413 or 422 status.
impl IntoResponse for Rejection {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = self.to_string();
        warn!(status = u16::from(status), %detail, "request rejected");

        let mut response = Json(json!({ "detail": detail })).into_response();
        response.set_status(status);
        response
    }
}
