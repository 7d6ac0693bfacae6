//! # articles
//!
//! An in-memory article catalog served over a small JSON HTTP API.
//!
//! Articles have a server-assigned integer `id`, a `name`, and a `price`.
//! They live in process memory only: a restart starts from an empty catalog
//! with ids counting from 1 again.
//!
//! | Method | Path | Result |
//! |---|---|---|
//! | GET | `/articles` | every article, in creation order |
//! | POST | `/articles` | the created article |
//! | PUT | `/articles/{article_id}` | the replaced article, or `success: false` |
//! | DELETE | `/articles/{article_id}` | `data: null`, or `success: false` |
//!
//! Every response body is an [`Envelope`]:
//!
//! ```json
//! {"success": true, "data": {"id": 1, "name": "Widget", "price": 9.99}, "message": "Article created successfully"}
//! ```
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use articles::{Catalog, Config, Server};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), articles::Error> {
//!     let config = Config::from_env()?;
//!
//!     Server::bind(config.addr).await?.serve(articles::app(Catalog::new())).await
//! }
//! ```

mod article;
mod catalog;
mod config;
mod envelope;
mod error;
mod handler;
mod method;
mod middleware;
mod registry;
mod request;
mod response;
mod router;
mod server;
mod status;

pub mod api;
pub mod health;

pub use article::{Article, ArticleId, ArticleInput};
pub use catalog::Catalog;
pub use config::Config;
pub use envelope::{Data, Envelope};
pub use error::{Error, Rejection};
pub use handler::Handler;
pub use method::Method;
pub use registry::Registry;
pub use request::Request;
pub use response::{IntoResponse, Json, Response, ResponseBuilder};
pub use router::{MAX_BODY_SIZE, Router};
pub use server::Server;
pub use status::Status;

/// The full route table, wired to `catalog`.
pub fn app(catalog: Catalog) -> Router<Catalog> {
    Router::with_state(catalog)
        .on(Method::Get,    "/articles",              api::list_articles)
        .on(Method::Post,   "/articles",              api::create_article)
        .on(Method::Put,    "/articles/{article_id}", api::update_article)
        .on(Method::Delete, "/articles/{article_id}", api::delete_article)
        .on(Method::Get,    "/healthz",               health::liveness)
        .on(Method::Get,    "/readyz",                health::readiness)
}
