//! Shared rule primitives and result types.

use serde::Serialize;
use validator::ValidateLength;

use crate::coercion::{coerce_or_invalid, LooseInt};
use crate::error::CoreError;
use crate::types::DbId;

/// Which request shape a payload belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Full payload; mandatory fields fire even when absent.
    Create,
    /// Partial payload; only present fields are checked.
    Update,
    /// Optional list filter; only present fields are checked.
    ListFilter,
}

impl Operation {
    pub fn is_create(self) -> bool {
        self == Self::Create
    }
}

/// A single field-level rule violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// Turn a violation list into a [`CoreError::Validation`] carrying every
/// message, or `Ok(())` when the list is empty.
pub fn ensure_valid(violations: Vec<FieldViolation>) -> Result<(), CoreError> {
    if violations.is_empty() {
        return Ok(());
    }
    let message = violations
        .into_iter()
        .map(|v| v.message)
        .collect::<Vec<_>>()
        .join(", ");
    Err(CoreError::Validation(message))
}

/// Path identifiers must be positive.
pub fn validate_id(id: DbId) -> Result<(), CoreError> {
    if id < 1 {
        return Err(CoreError::Validation("id must be greater than 0".into()));
    }
    Ok(())
}

/// Required + max-length check for a text field.
///
/// Fires when the field is present or `mandatory` is set. An absent
/// mandatory field only reports the required message.
pub(crate) fn check_text(
    out: &mut Vec<FieldViolation>,
    field: &str,
    value: Option<&str>,
    mandatory: bool,
    max_chars: u64,
) {
    if value.is_none() && !mandatory {
        return;
    }
    match value {
        Some(text) if !text.trim().is_empty() => check_max_chars(out, field, value, max_chars),
        _ => out.push(FieldViolation::new(
            field,
            format!("{field} must not be empty"),
        )),
    }
}

/// Max-length check for an optional text field that may be blank.
///
/// PostgreSQL text cannot hold U+0000, so values containing it are rejected
/// here rather than at insert time.
pub(crate) fn check_max_chars(
    out: &mut Vec<FieldViolation>,
    field: &str,
    value: Option<&str>,
    max_chars: u64,
) {
    if let Some(text) = value {
        if text.contains('\0') {
            out.push(FieldViolation::new(
                field,
                format!("{field} must not contain NUL characters"),
            ));
        } else if !text.validate_length(None, Some(max_chars), None) {
            out.push(FieldViolation::new(
                field,
                format!("{field} must be at most {max_chars} characters"),
            ));
        }
    }
}

/// `state` must coerce to 0 or 1. Absence coerces to the invalid sentinel.
pub(crate) fn check_state(out: &mut Vec<FieldViolation>, value: Option<&LooseInt>) {
    let state = coerce_or_invalid(value);
    if !(0..=1).contains(&state) {
        out.push(FieldViolation::new("state", "state must be 0 or 1"));
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
