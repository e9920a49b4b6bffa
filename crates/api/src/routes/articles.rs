use axum::routing::get;
use axum::Router;

use crate::handlers::articles;
use crate::state::AppState;

/// Article routes mounted at `/articles`.
///
/// ```text
/// GET    /        -> list_articles (?page=&tag_id=&state=)
/// POST   /        -> create_article
/// GET    /{id}    -> get_article
/// PUT    /{id}    -> update_article
/// DELETE /{id}    -> delete_article
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(articles::list_articles).post(articles::create_article),
        )
        .route(
            "/{id}",
            get(articles::get_article)
                .put(articles::update_article)
                .delete(articles::delete_article),
        )
}
