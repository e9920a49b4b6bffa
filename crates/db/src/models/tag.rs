//! Tag entity model and DTOs.

use quire_core::coercion::LooseInt;
use quire_core::fields::TagFields;
use quire_core::types::{DbId, UnixTime};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `tags` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Tag {
    pub id: DbId,
    pub name: String,
    pub created_by: String,
    pub modified_by: String,
    pub state: i32,
    pub created_on: UnixTime,
    pub modified_on: UnixTime,
}

/// DTO for inserting a tag. Build it from a payload that passed
/// [`validate_tag`](quire_core::validation::validate_tag) for `Create`.
#[derive(Debug, Clone)]
pub struct CreateTag {
    pub name: String,
    pub state: i32,
    pub created_by: String,
}

/// DTO for a partial tag update. `None` fields keep their stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdateTag {
    pub name: Option<String>,
    pub state: Option<i32>,
    pub modified_by: Option<String>,
}

/// Exact-match list filter. `None` fields do not constrain the result.
#[derive(Debug, Clone, Default)]
pub struct TagFilter {
    pub name: Option<String>,
    pub state: Option<i32>,
}

impl From<&TagFields> for CreateTag {
    fn from(fields: &TagFields) -> Self {
        Self {
            name: fields.name.clone().unwrap_or_default(),
            state: fields.state.as_ref().map_or(0, LooseInt::coerce_i32),
            created_by: fields.created_by.clone().unwrap_or_default(),
        }
    }
}

impl From<&TagFields> for UpdateTag {
    fn from(fields: &TagFields) -> Self {
        Self {
            name: fields.name.clone(),
            state: fields.state.as_ref().map(LooseInt::coerce_i32),
            modified_by: fields.modified_by.clone(),
        }
    }
}

impl From<&TagFields> for TagFilter {
    fn from(fields: &TagFields) -> Self {
        Self {
            name: fields.name.clone(),
            state: fields.state.as_ref().map(LooseInt::coerce_i32),
        }
    }
}
