//! Repository layer.
//!
//! Each repository owns a clone of the shared `PgPool`, handed in at
//! construction, and exposes async CRUD methods returning `sqlx::Error`.

pub mod article_repo;
pub mod tag_repo;

pub use article_repo::ArticleRepo;
pub use tag_repo::TagRepo;
