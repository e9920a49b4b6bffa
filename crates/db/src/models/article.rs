//! Article entity model and DTOs.

use quire_core::coercion::LooseInt;
use quire_core::fields::ArticleFields;
use quire_core::types::{DbId, UnixTime};
use serde::Serialize;
use sqlx::FromRow;

use crate::models::tag::Tag;

/// A row from the `articles` table.
///
/// `tag_id` is 0 for untagged articles. It is a logical reference to
/// `tags.id` with no database constraint behind it.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Article {
    pub id: DbId,
    pub tag_id: DbId,
    pub title: String,
    pub desc: String,
    pub content: String,
    pub created_by: String,
    pub modified_by: String,
    pub state: i32,
    pub created_on: UnixTime,
    pub modified_on: UnixTime,
}

/// An article with its tag resolved. `tag` is `None` when the article is
/// untagged or the referenced tag has since been deleted.
#[derive(Debug, Clone, Serialize)]
pub struct ArticleWithTag {
    #[serde(flatten)]
    pub article: Article,
    pub tag: Option<Tag>,
}

/// DTO for inserting an article. Build it from a payload that passed
/// [`validate_article`](quire_core::validation::validate_article) for `Create`.
#[derive(Debug, Clone)]
pub struct CreateArticle {
    pub tag_id: DbId,
    pub title: String,
    pub desc: String,
    pub content: String,
    pub created_by: String,
    pub state: i32,
}

/// DTO for a partial article update. `None` fields keep their stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdateArticle {
    pub tag_id: Option<DbId>,
    pub title: Option<String>,
    pub desc: Option<String>,
    pub content: Option<String>,
    pub state: Option<i32>,
    pub modified_by: Option<String>,
}

/// Exact-match list filter. `None` fields do not constrain the result.
#[derive(Debug, Clone, Default)]
pub struct ArticleFilter {
    pub tag_id: Option<DbId>,
    pub state: Option<i32>,
}

impl From<&ArticleFields> for CreateArticle {
    fn from(fields: &ArticleFields) -> Self {
        Self {
            tag_id: fields.tag_id.as_ref().map_or(0, LooseInt::coerce),
            title: fields.title.clone().unwrap_or_default(),
            desc: fields.desc.clone().unwrap_or_default(),
            content: fields.content.clone().unwrap_or_default(),
            created_by: fields.created_by.clone().unwrap_or_default(),
            state: fields.state.as_ref().map_or(0, LooseInt::coerce_i32),
        }
    }
}

impl From<&ArticleFields> for UpdateArticle {
    fn from(fields: &ArticleFields) -> Self {
        Self {
            tag_id: fields.tag_id.as_ref().map(LooseInt::coerce),
            title: fields.title.clone(),
            desc: fields.desc.clone(),
            content: fields.content.clone(),
            state: fields.state.as_ref().map(LooseInt::coerce_i32),
            modified_by: fields.modified_by.clone(),
        }
    }
}

impl From<&ArticleFields> for ArticleFilter {
    fn from(fields: &ArticleFields) -> Self {
        Self {
            tag_id: fields.tag_id.as_ref().map(LooseInt::coerce),
            state: fields.state.as_ref().map(LooseInt::coerce_i32),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_carries_only_present_fields() {
        let fields = ArticleFields {
            state: Some(LooseInt::from("0")),
            ..ArticleFields::default()
        };
        let update = UpdateArticle::from(&fields);
        assert_eq!(update.state, Some(0));
        assert!(update.title.is_none());
        assert!(update.desc.is_none());
        assert!(update.content.is_none());
        assert!(update.tag_id.is_none());
    }

    #[test]
    fn create_without_tag_is_untagged() {
        let fields = ArticleFields {
            title: Some("t".into()),
            desc: Some("d".into()),
            content: Some("c".into()),
            state: Some(LooseInt::Float(1.0)),
            ..ArticleFields::default()
        };
        let create = CreateArticle::from(&fields);
        assert_eq!(create.tag_id, 0);
        assert_eq!(create.state, 1);
        assert_eq!(create.created_by, "");
    }

    #[test]
    fn serialized_article_inlines_tag() {
        let article = ArticleWithTag {
            article: Article {
                id: 1,
                tag_id: 0,
                title: "t".into(),
                desc: "d".into(),
                content: "c".into(),
                created_by: String::new(),
                modified_by: String::new(),
                state: 1,
                created_on: 10,
                modified_on: 10,
            },
            tag: None,
        };
        let json = serde_json::to_value(&article).unwrap();
        assert_eq!(json["title"], "t");
        assert!(json["tag"].is_null());
    }
}
