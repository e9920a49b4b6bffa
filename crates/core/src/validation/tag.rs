//! Tag payload rules.

use super::rules::{check_state, check_text, FieldViolation, Operation};
use crate::fields::TagFields;

pub const NAME_MAX_CHARS: u64 = 100;
pub const AUTHOR_MAX_CHARS: u64 = 100;

/// Validate a tag payload for the given operation.
///
/// `name` and `created_by` are mandatory on create. `state` is optional and
/// defaults to 0 when a tag is created without one.
pub fn validate_tag(fields: &TagFields, op: Operation) -> Vec<FieldViolation> {
    let mut violations = Vec::new();
    let mandatory = op.is_create();

    check_text(
        &mut violations,
        "name",
        fields.name.as_deref(),
        mandatory,
        NAME_MAX_CHARS,
    );

    if fields.state.is_some() {
        check_state(&mut violations, fields.state.as_ref());
    }

    check_text(
        &mut violations,
        "created_by",
        fields.created_by.as_deref(),
        mandatory,
        AUTHOR_MAX_CHARS,
    );

    if fields.modified_by.is_some() {
        check_text(
            &mut violations,
            "modified_by",
            fields.modified_by.as_deref(),
            true,
            AUTHOR_MAX_CHARS,
        );
    }

    violations
}
