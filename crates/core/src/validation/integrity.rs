//! Referential integrity between articles and tags.

use std::future::Future;

use crate::types::DbId;

/// Existence lookup for tag identifiers.
///
/// Implemented by the tag repository; tests use an in-memory set.
/// Implementations must be side-effect free so the validator can call
/// them any number of times in one pass.
pub trait TagLookup: Send + Sync {
    type Error: Send;

    /// Whether a tag row with `id` exists.
    fn tag_exists(&self, id: DbId) -> impl Future<Output = Result<bool, Self::Error>> + Send;
}

/// Whether `id` refers to an existing tag.
///
/// Non-positive ids never exist and are answered without a lookup.
pub async fn check_tag_reference<L: TagLookup>(lookup: &L, id: DbId) -> Result<bool, L::Error> {
    if id < 1 {
        return Ok(false);
    }
    lookup.tag_exists(id).await
}
