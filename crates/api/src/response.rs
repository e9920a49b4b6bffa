//! Shared response envelope types for API handlers.
//!
//! Every API response uses a `{ "code": ..., "msg": ..., "data": ... }`
//! envelope. Failures are produced by [`AppError`](crate::error::AppError)
//! with the same shape and an empty `data` object.

use serde::Serialize;

/// `code` value for successful responses.
pub const CODE_OK: &str = "OK";

/// Standard `{ "code", "msg", "data" }` response envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(ApiResponse::ok(article)))
/// ```
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub code: &'static str,
    pub msg: String,
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            code: CODE_OK,
            msg: "ok".to_string(),
            data,
        }
    }
}

/// One page of a list endpoint plus the total number of matching rows.
#[derive(Debug, Serialize)]
pub struct Page<T: Serialize> {
    pub items: Vec<T>,
    pub total: i64,
}

/// Serializes as `{}`; the payload of a successful delete.
#[derive(Debug, Default, Serialize)]
pub struct Empty {}
