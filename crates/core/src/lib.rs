//! Domain logic for the Quire article/tag service.
//!
//! Everything here is pure: coercion of loosely-typed request values,
//! presence-keyed request payloads, the validator and pagination math.
//! The only storage touchpoint is the [`validation::integrity::TagLookup`]
//! trait, implemented by the database crate.

pub mod coercion;
pub mod error;
pub mod fields;
pub mod pagination;
pub mod types;
pub mod validation;
