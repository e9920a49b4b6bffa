//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A create DTO built from a validated request payload
//! - An update DTO (all `Option` fields) for partial updates
//! - A list filter (exact-match, all `Option` fields)

pub mod article;
pub mod tag;
