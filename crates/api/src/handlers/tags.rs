//! Handlers for the `/tags` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use quire_core::error::CoreError;
use quire_core::fields::TagFields;
use quire_core::pagination::{page_offset, requested_page};
use quire_core::types::DbId;
use quire_core::validation::{ensure_valid, validate_id, validate_tag, Operation};
use quire_db::models::tag::{CreateTag, TagFilter, UpdateTag};

use crate::error::AppResult;
use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::query::TagListParams;
use crate::response::{ApiResponse, Empty, Page};
use crate::state::AppState;

fn not_found(id: DbId) -> CoreError {
    CoreError::NotFound { entity: "Tag", id }
}

/// GET /api/v1/tags
///
/// List tags a page at a time, optionally filtered by exact `name` and `state`.
pub async fn list_tags(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<TagListParams>,
) -> AppResult<impl IntoResponse> {
    let fields = TagFields::from(&params.filter);
    ensure_valid(validate_tag(&fields, Operation::ListFilter))?;

    let filter = TagFilter::from(&fields);
    let limit = state.config.page_size;
    let offset = page_offset(requested_page(params.page.as_ref()), limit);

    let repo = state.tags();
    let items = repo.list(offset, limit, &filter).await?;
    let total = repo.count(&filter).await?;

    Ok(Json(ApiResponse::ok(Page { items, total })))
}

/// GET /api/v1/tags/{id}
pub async fn get_tag(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    validate_id(id)?;

    let tag = state
        .tags()
        .find_by_id(id)
        .await?
        .ok_or_else(|| not_found(id))?;

    Ok(Json(ApiResponse::ok(tag)))
}

/// POST /api/v1/tags
///
/// Duplicate names are logged but not rejected.
pub async fn create_tag(
    State(state): State<AppState>,
    ApiJson(fields): ApiJson<TagFields>,
) -> AppResult<impl IntoResponse> {
    ensure_valid(validate_tag(&fields, Operation::Create))?;

    let input = CreateTag::from(&fields);
    let repo = state.tags();
    if repo.exists_by_name(&input.name).await? {
        tracing::warn!(name = %input.name, "Creating tag with a name already in use");
    }

    let tag = repo.create(&input).await?;

    tracing::info!(tag_id = tag.id, name = %tag.name, "Tag created");

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(tag))))
}

/// PUT /api/v1/tags/{id}
pub async fn update_tag(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
    ApiJson(fields): ApiJson<TagFields>,
) -> AppResult<impl IntoResponse> {
    validate_id(id)?;

    let repo = state.tags();
    if !repo.exists(id).await? {
        return Err(not_found(id).into());
    }

    ensure_valid(validate_tag(&fields, Operation::Update))?;

    let tag = repo
        .update(id, &UpdateTag::from(&fields))
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(tag_id = id, "Tag updated");

    Ok(Json(ApiResponse::ok(tag)))
}

/// DELETE /api/v1/tags/{id}
///
/// Articles that reference the tag are kept; they read back with `tag: null`.
pub async fn delete_tag(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    validate_id(id)?;

    let repo = state.tags();
    if !repo.exists(id).await? {
        return Err(not_found(id).into());
    }

    if !repo.delete(id).await? {
        return Err(not_found(id).into());
    }

    tracing::info!(tag_id = id, "Tag deleted");

    Ok(Json(ApiResponse::ok(Empty {})))
}
