//! Handlers for the `/articles` resource.
//!
//! Every write validates the whole payload first and only then issues a
//! single repository call carrying the fields the client sent.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use quire_core::error::CoreError;
use quire_core::fields::ArticleFields;
use quire_core::pagination::{page_offset, requested_page};
use quire_core::types::DbId;
use quire_core::validation::{ensure_valid, validate_article, validate_id, Operation};
use quire_db::models::article::{ArticleFilter, CreateArticle, UpdateArticle};

use crate::error::AppResult;
use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::query::ArticleListParams;
use crate::response::{ApiResponse, Empty, Page};
use crate::state::AppState;

fn not_found(id: DbId) -> CoreError {
    CoreError::NotFound {
        entity: "Article",
        id,
    }
}

/// GET /api/v1/articles
///
/// List articles a page at a time, optionally filtered by `tag_id` and `state`.
pub async fn list_articles(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<ArticleListParams>,
) -> AppResult<impl IntoResponse> {
    let fields = ArticleFields::from(&params.filter);
    let violations = validate_article(&fields, Operation::ListFilter, &state.tags()).await?;
    ensure_valid(violations)?;

    let filter = ArticleFilter::from(&fields);
    let limit = state.config.page_size;
    let offset = page_offset(requested_page(params.page.as_ref()), limit);

    let repo = state.articles();
    let items = repo.list(offset, limit, &filter).await?;
    let total = repo.count(&filter).await?;

    Ok(Json(ApiResponse::ok(Page { items, total })))
}

/// GET /api/v1/articles/{id}
pub async fn get_article(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    validate_id(id)?;

    let article = state
        .articles()
        .find_by_id(id)
        .await?
        .ok_or_else(|| not_found(id))?;

    Ok(Json(ApiResponse::ok(article)))
}

/// POST /api/v1/articles
///
/// `title`, `desc`, `content` and `state` are required. A `tag_id`, when
/// sent, must reference an existing tag.
pub async fn create_article(
    State(state): State<AppState>,
    ApiJson(fields): ApiJson<ArticleFields>,
) -> AppResult<impl IntoResponse> {
    let violations = validate_article(&fields, Operation::Create, &state.tags()).await?;
    ensure_valid(violations)?;

    let article = state.articles().create(&CreateArticle::from(&fields)).await?;

    tracing::info!(
        article_id = article.id,
        tag_id = article.tag_id,
        "Article created",
    );

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(article))))
}

/// PUT /api/v1/articles/{id}
///
/// Partial update: only fields present in the body are validated and written.
pub async fn update_article(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
    ApiJson(fields): ApiJson<ArticleFields>,
) -> AppResult<impl IntoResponse> {
    validate_id(id)?;

    let repo = state.articles();
    if !repo.exists(id).await? {
        return Err(not_found(id).into());
    }

    let violations = validate_article(&fields, Operation::Update, &state.tags()).await?;
    ensure_valid(violations)?;

    let article = repo
        .update(id, &UpdateArticle::from(&fields))
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(article_id = id, "Article updated");

    Ok(Json(ApiResponse::ok(article)))
}

/// DELETE /api/v1/articles/{id}
pub async fn delete_article(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    validate_id(id)?;

    let repo = state.articles();
    if !repo.exists(id).await? {
        return Err(not_found(id).into());
    }

    if !repo.delete(id).await? {
        return Err(not_found(id).into());
    }

    tracing::info!(article_id = id, "Article deleted");

    Ok(Json(ApiResponse::ok(Empty {})))
}
