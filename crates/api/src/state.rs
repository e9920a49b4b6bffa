use std::sync::Arc;

use quire_db::repositories::{ArticleRepo, TagRepo};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: quire_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn articles(&self) -> ArticleRepo {
        ArticleRepo::new(self.pool.clone())
    }

    pub fn tags(&self) -> TagRepo {
        TagRepo::new(self.pool.clone())
    }
}
