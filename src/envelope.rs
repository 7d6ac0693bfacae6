//! The uniform response body every article endpoint returns.

use serde::Serialize;

use crate::article::Article;

/// `{"success": bool, "data": ..., "message": string | null}`
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Envelope {
    pub success: bool,
    pub data: Data,
    pub message: Option<String>,
}

/// What an envelope carries. Serialized without a tag, so [`Data::Empty`]
/// renders as `null`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Data {
    Many(Vec<Article>),
    One(Article),
    Empty,
}

impl Envelope {
    pub fn success(data: impl Into<Data>, message: impl Into<String>) -> Self {
        Self { success: true, data: data.into(), message: Some(message.into()) }
    }

    /// A reported, non-fatal failure. Never carries data.
    pub fn failure(message: impl Into<String>) -> Self {
        Self { success: false, data: Data::Empty, message: Some(message.into()) }
    }
}

impl From<Vec<Article>> for Data {
    fn from(articles: Vec<Article>) -> Self {
        Self::Many(articles)
    }
}

impl From<Article> for Data {
    fn from(article: Article) -> Self {
        Self::One(article)
    }
}

impl From<()> for Data {
    fn from(_: ()) -> Self {
        Self::Empty
    }
}
