//! Article payload rules.

use super::integrity::{check_tag_reference, TagLookup};
use super::rules::{check_max_chars, check_state, check_text, FieldViolation, Operation};
use crate::fields::ArticleFields;

pub const TITLE_MAX_CHARS: u64 = 100;
pub const DESC_MAX_CHARS: u64 = 255;
pub const CONTENT_MAX_CHARS: u64 = 65_535;
pub const AUTHOR_MAX_CHARS: u64 = 100;

/// Validate an article payload for the given operation.
///
/// Violations are returned in rule order: `tag_id`, `title`, `desc`,
/// `content`, `state`, `created_by`, `modified_by`. `title`, `desc`,
/// `content` and `state` are mandatory on create. The tag lookup is only
/// consulted for a present, positive `tag_id`; its error aborts validation.
pub async fn validate_article<L: TagLookup>(
    fields: &ArticleFields,
    op: Operation,
    tags: &L,
) -> Result<Vec<FieldViolation>, L::Error> {
    let mut violations = Vec::new();
    let mandatory = op.is_create();

    if let Some(tag_id) = &fields.tag_id {
        let tag_id = tag_id.coerce();
        if tag_id < 1 {
            violations.push(FieldViolation::new(
                "tag_id",
                "tag_id must be greater than 0",
            ));
        } else if !check_tag_reference(tags, tag_id).await? {
            violations.push(FieldViolation::new("tag_id", "referenced tag must exist"));
        }
    }

    check_text(
        &mut violations,
        "title",
        fields.title.as_deref(),
        mandatory,
        TITLE_MAX_CHARS,
    );
    check_text(
        &mut violations,
        "desc",
        fields.desc.as_deref(),
        mandatory,
        DESC_MAX_CHARS,
    );
    check_text(
        &mut violations,
        "content",
        fields.content.as_deref(),
        mandatory,
        CONTENT_MAX_CHARS,
    );

    if fields.state.is_some() || mandatory {
        check_state(&mut violations, fields.state.as_ref());
    }

    check_max_chars(
        &mut violations,
        "created_by",
        fields.created_by.as_deref(),
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

    Ok(violations)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
