//! Incoming HTTP request type.

use std::collections::HashMap;
use std::str::FromStr;

use bytes::Bytes;
use http::HeaderMap;
use http::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;

use crate::error::Rejection;
use crate::method::Method;

/// An incoming HTTP request with its body fully collected.
#[derive(Debug)]
pub struct Request {
    method: Method,
    path: String,
    headers: HeaderMap,
    body: Bytes,
    params: HashMap<String, String>,
}

impl Request {
    pub(crate) fn new(
        method: Method,
        path: String,
        headers: HeaderMap,
        body: Bytes,
        params: HashMap<String, String>,
    ) -> Self {
        Self { method, path, headers, body, params }
    }

    pub fn method(&self) -> Method { self.method }
    pub fn path(&self) -> &str { &self.path }
    pub fn headers(&self) -> &HeaderMap { &self.headers }
    pub fn body(&self) -> &[u8] { &self.body }

    /// Case-insensitive header lookup. Non-UTF-8 values read as absent.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Returns a named path parameter.
    ///
    /// For a route `/articles/{article_id}`, `req.param("article_id")` on
    /// `/articles/42` returns `Some("42")`.
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// Parses a named path parameter into `T`.
    pub fn param_as<T: FromStr>(&self, key: &str) -> Result<T, Rejection> {
        let raw = self
            .param(key)
            .ok_or_else(|| Rejection::MissingParam(key.to_owned()))?;

        raw.parse().map_err(|_| Rejection::InvalidParam {
            name: key.to_owned(),
            value: raw.to_owned(),
        })
    }

    /// Deserializes the body as JSON into `T`.
    ///
    /// A request without a `content-type` is read as JSON. One that declares
    /// anything other than `application/json` or `application/*+json` is
    /// rejected without looking at the body.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, Rejection> {
        if let Some(value) = self.headers.get(CONTENT_TYPE) {
            let declared = value.to_str().unwrap_or_default();
            if !is_json(declared) {
                return Err(Rejection::UnsupportedContentType(declared.to_owned()));
            }
        }

        Ok(serde_json::from_slice(&self.body)?)
    }
}

fn is_json(content_type: &str) -> bool {
    let essence = content_type.split(';').next().unwrap_or_default().trim().to_ascii_lowercase();

    match essence.strip_prefix("application/") {
        Some(subtype) => subtype == "json" || subtype.ends_with("+json"),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use bytes::Bytes;
    use http::HeaderMap;
    use http::header::{CONTENT_TYPE, HeaderValue};
    use serde::Deserialize;

    use super::Request;
    use crate::error::Rejection;
    use crate::method::Method;

    fn request(body: &'static str, params: &[(&str, &str)]) -> Request {
        with_content_type(None, body, params)
    }

    fn with_content_type(
        content_type: Option<&'static str>,
        body: &'static str,
        params: &[(&str, &str)],
    ) -> Request {
        let mut headers = HeaderMap::new();
        if let Some(ct) = content_type {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static(ct));
        }

        let params = params
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect::<HashMap<_, _>>();

        Request::new(
            Method::Put,
            "/articles/7".to_owned(),
            headers,
            Bytes::from_static(body.as_bytes()),
            params,
        )
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct Point {
        x: i32,
    }

    #[test]
    fn parses_typed_params() {
        let req = request("", &[("article_id", "7")]);
        assert_eq!(req.param_as::<i64>("article_id").unwrap(), 7);
        assert!(matches!(
            req.param_as::<i64>("missing"),
            Err(Rejection::MissingParam(name)) if name == "missing"
        ));
    }

    #[test]
    fn rejects_unparseable_params() {
        let req = request("", &[("article_id", "seven")]);
        match req.param_as::<i64>("article_id") {
            Err(Rejection::InvalidParam { name, value }) => {
                assert_eq!(name, "article_id");
                assert_eq!(value, "seven");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn decodes_json_bodies() {
        assert_eq!(request(r#"{"x":3}"#, &[]).json::<Point>().unwrap(), Point { x: 3 });
        assert!(matches!(
            request(r#"{"x":"three"}"#, &[]).json::<Point>(),
            Err(Rejection::InvalidJson(_))
        ));
        assert!(matches!(request("", &[]).json::<Point>(), Err(Rejection::InvalidJson(_))));
    }

    #[test]
    fn accepts_json_content_types() {
        for ct in ["application/json", "application/json; charset=utf-8", "Application/JSON", "application/merge-patch+json"] {
            assert_eq!(
                with_content_type(Some(ct), r#"{"x":1}"#, &[]).json::<Point>().unwrap(),
                Point { x: 1 },
                "content type: {ct}"
            );
        }
    }

    #[test]
    fn rejects_other_content_types() {
        for ct in ["text/plain", "application/x-www-form-urlencoded", "multipart/form-data"] {
            match with_content_type(Some(ct), r#"{"x":1}"#, &[]).json::<Point>() {
                Err(Rejection::UnsupportedContentType(declared)) => assert_eq!(declared, ct),
                other => panic!("unexpected result for {ct}: {other:?}"),
            }
        }
    }
}
