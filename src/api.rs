//! Article endpoints.
//!
//! | Method | Path | Body |
//! |---|---|---|
//! | GET | `/articles` | none |
//! | POST | `/articles` | `{"name": string, "price": number}` |
//! | PUT | `/articles/{article_id}` | `{"name": string, "price": number}` |
//! | DELETE | `/articles/{article_id}` | none |
//!
//! Every handler answers `200 OK` with an [`Envelope`], including when the
//! article is not found. Only an undecodable body or id is a 4xx.

use crate::article::{ArticleId, ArticleInput};
use crate::catalog::{Catalog, NOT_FOUND};
use crate::envelope::Envelope;
use crate::error::Rejection;
use crate::request::Request;
use crate::response::Json;

const ARTICLE_ID: &str = "article_id";

// GET /articles
pub async fn list_articles(_req: Request, catalog: Catalog) -> Json<Envelope> {
    Json(catalog.list())
}

// POST /articles
pub async fn create_article(req: Request, catalog: Catalog) -> Result<Json<Envelope>, Rejection> {
    let input: ArticleInput = req.json()?;
    Ok(Json(catalog.create(input)))
}

// PUT /articles/{article_id}
pub async fn update_article(req: Request, catalog: Catalog) -> Result<Json<Envelope>, Rejection> {
    let id = article_id(&req)?;
    let input: ArticleInput = req.json()?;

    Ok(Json(match id {
        Some(id) => catalog.update(id, input),
        None => Envelope::failure(NOT_FOUND),
    }))
}

// DELETE /articles/{article_id}
pub async fn delete_article(req: Request, catalog: Catalog) -> Result<Json<Envelope>, Rejection> {
    Ok(Json(match article_id(&req)? {
        Some(id) => catalog.delete(id),
        None => Envelope::failure(NOT_FOUND),
    }))
}

/// The `article_id` path segment. `None` for an integer too large for
/// [`ArticleId`]: no such article can exist, but the id itself is valid.
fn article_id(req: &Request) -> Result<Option<ArticleId>, Rejection> {
    match req.param_as::<ArticleId>(ARTICLE_ID) {
        Ok(id) => Ok(Some(id)),
        Err(Rejection::InvalidParam { value, .. }) if is_integer(&value) => Ok(None),
        Err(e) => Err(e),
    }
}

fn is_integer(s: &str) -> bool {
    let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}
