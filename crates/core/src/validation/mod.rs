//! Request validation.
//!
//! Rules run over presence-keyed payloads from [`crate::fields`] and collect
//! every violation instead of stopping at the first one. Only the article
//! tag reference rule touches storage, through [`integrity::TagLookup`].

pub mod article;
pub mod integrity;
pub mod rules;
pub mod tag;

pub use article::validate_article;
pub use integrity::{check_tag_reference, TagLookup};
pub use rules::{ensure_valid, validate_id, FieldViolation, Operation};
pub use tag::validate_tag;
