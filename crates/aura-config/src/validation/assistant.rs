//! Validation for the `[assistant]` section.

use super::helpers::{validate_not_blank, validate_range, validate_range_f64};
use crate::schema::AuraConfig;

pub(crate) fn validate_assistant(errors: &mut Vec<String>, config: &AuraConfig) {
    let a = &config.assistant;
    validate_not_blank(errors, "assistant.model", &a.model);
    validate_range(errors, "assistant.max_output_tokens", a.max_output_tokens, 64, 65536);
    validate_range_f64(errors, "assistant.temperature", a.temperature, 0.0, 2.0);

    if a.api_key_env.is_empty() {
        errors.push("assistant.api_key_env must name at least one variable".into());
    }
    for name in &a.api_key_env {
        if name.trim().is_empty() || name.contains('=') {
            errors.push(format!("assistant.api_key_env entry {name:?} is not a valid variable name"));
        }
    }
}
