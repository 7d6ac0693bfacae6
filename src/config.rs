//! Runtime configuration, read from the environment.
//!
//! | Variable | Default | Meaning |
//! |---|---|---|
//! | `ARTICLES_ADDR` | `0.0.0.0:8000` | Socket address to listen on |
//!
//! Log verbosity is controlled separately through `RUST_LOG`.

use std::net::SocketAddr;

use crate::error::Error;

pub const ADDR_VAR: &str = "ARTICLES_ADDR";
pub const DEFAULT_ADDR: &str = "0.0.0.0:8000";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub addr: SocketAddr,
}

impl Config {
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key → value source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let value = lookup(ADDR_VAR)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ADDR.to_owned());

        let addr = value.trim().parse().map_err(|source| Error::InvalidAddr {
            var: ADDR_VAR,
            value: value.clone(),
            source,
        })?;

        Ok(Self { addr })
    }
}
