//! Validation for the `[tools]` section.

use super::helpers::validate_range;
use crate::schema::AuraConfig;

const ALLOWED_SCHEMES: &[&str] = &["http", "https"];

pub(crate) fn validate_tools(errors: &mut Vec<String>, config: &AuraConfig) {
    let t = &config.tools;
    if !ALLOWED_SCHEMES.contains(&t.default_scheme.as_str()) {
        errors.push(format!(
            "tools.default_scheme = {:?} must be one of {ALLOWED_SCHEMES:?}",
            t.default_scheme
        ));
    }
    validate_range(errors, "tools.max_tool_calls_per_turn", t.max_tool_calls_per_turn, 1, 32);
}
