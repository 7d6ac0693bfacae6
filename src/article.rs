//! The catalog record and the payload clients send to create or replace one.

use serde::{Deserialize, Serialize};

/// Server-assigned article identifier.
pub type ArticleId = i64;

/// One catalog entry. Serializes as `{"id": .., "name": .., "price": ..}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: ArticleId,
    pub name: String,
    pub price: f64,
}

/// Body of a create or update request.
///
/// There is no `id` field: an `id` sent by a client is ignored along with
/// any other unknown key.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArticleInput {
    pub name: String,
    pub price: f64,
}

impl Article {
    pub fn from_input(id: ArticleId, input: ArticleInput) -> Self {
        let ArticleInput { name, price } = input;
        Self { id, name, price }
    }
}
