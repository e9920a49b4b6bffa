//! Presence-keyed request payloads.
//!
//! Every field is an `Option`: `None` (key missing or JSON `null`) means the
//! client did not send it, `Some` means it did. The same struct serves
//! create, update and list-filter requests; the validator decides which
//! fields are mandatory for each [`Operation`](crate::validation::Operation).

use serde::Deserialize;

use crate::coercion::LooseInt;

/// Article payload for create and update requests.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArticleFields {
    pub tag_id: Option<LooseInt>,
    pub title: Option<String>,
    pub desc: Option<String>,
    pub content: Option<String>,
    pub state: Option<LooseInt>,
    pub created_by: Option<String>,
    pub modified_by: Option<String>,
}

/// Article list filter (`GET /articles?state=&tag_id=`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArticleFilterFields {
    pub tag_id: Option<LooseInt>,
    pub state: Option<LooseInt>,
}

/// Query strings send `?state=` for "no filter"; treat empty text as absent.
fn non_empty(value: &Option<LooseInt>) -> Option<LooseInt> {
    match value {
        Some(LooseInt::Text(text)) if text.is_empty() => None,
        other => other.clone(),
    }
}

impl From<&ArticleFilterFields> for ArticleFields {
    fn from(filter: &ArticleFilterFields) -> Self {
        Self {
            tag_id: non_empty(&filter.tag_id),
            state: non_empty(&filter.state),
            ..Self::default()
        }
    }
}

/// Tag payload for create and update requests.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TagFields {
    pub name: Option<String>,
    pub state: Option<LooseInt>,
    pub created_by: Option<String>,
    pub modified_by: Option<String>,
}

/// Tag list filter (`GET /tags?name=&state=`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TagFilterFields {
    pub name: Option<String>,
    pub state: Option<LooseInt>,
}

impl From<&TagFilterFields> for TagFields {
    fn from(filter: &TagFilterFields) -> Self {
        Self {
            name: filter.name.clone().filter(|name| !name.is_empty()),
            state: non_empty(&filter.state),
            ..Self::default()
        }
    }
}
