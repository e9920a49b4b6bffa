//! HTTP layer for the article and tag API.
//!
//! [`app::build_app`] assembles the router and middleware stack shared by
//! the binary and the integration tests.

pub mod app;
pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod query;
pub mod response;
pub mod routes;
pub mod state;
