//! Stable identifiers for checks and outcome codes.
//!
//! `check_id` follows the host engine's `CKV_*` convention. `code` is a short snake_case discriminator.

// Checks
pub const CHECK_AWS_CUSTOM_TAGS: &str = "CKV_AWS_CUSTOM_TAGS";

// Codes: CKV_AWS_CUSTOM_TAGS
pub const CODE_EXEMPT_RESOURCE_TYPE: &str = "exempt_resource_type";
pub const CODE_NO_TAGS: &str = "no_tags";
pub const CODE_MISSING_REQUIRED_TAGS: &str = "missing_required_tags";
pub const CODE_REQUIRED_TAGS_PRESENT: &str = "required_tags_present";

/// List all known check IDs.
pub fn all_check_ids() -> &'static [&'static str] {
    &[CHECK_AWS_CUSTOM_TAGS]
}
