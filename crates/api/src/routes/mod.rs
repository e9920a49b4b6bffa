pub mod articles;
pub mod health;
pub mod tags;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /articles                  list, create
/// /articles/{id}             get, update, delete
///
/// /tags                      list, create
/// /tags/{id}                 get, update, delete
/// ```
///
/// `/health` is mounted separately at the root by [`health::router`].
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/articles", articles::router())
        .nest("/tags", tags::router())
}
