//! Query parameter types for list endpoints.

use quire_core::coercion::LooseInt;
use quire_core::fields::{ArticleFilterFields, TagFilterFields};
use serde::Deserialize;

/// `GET /articles?page=&tag_id=&state=`
#[derive(Debug, Default, Deserialize)]
pub struct ArticleListParams {
    /// Zero-based page number.
    pub page: Option<LooseInt>,
    #[serde(flatten)]
    pub filter: ArticleFilterFields,
}

/// `GET /tags?page=&name=&state=`
#[derive(Debug, Default, Deserialize)]
pub struct TagListParams {
    /// Zero-based page number.
    pub page: Option<LooseInt>,
    #[serde(flatten)]
    pub filter: TagFilterFields,
}
