use axum::routing::get;
use axum::Router;

use crate::handlers::tags;
use crate::state::AppState;

/// Tag routes mounted at `/tags`.
///
/// ```text
/// GET    /        -> list_tags (?page=&name=&state=)
/// POST   /        -> create_tag
/// GET    /{id}    -> get_tag
/// PUT    /{id}    -> update_tag
/// DELETE /{id}    -> delete_tag
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(tags::list_tags).post(tags::create_tag))
        .route(
            "/{id}",
            get(tags::get_tag)
                .put(tags::update_tag)
                .delete(tags::delete_tag),
        )
}
