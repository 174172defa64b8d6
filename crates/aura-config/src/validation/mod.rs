//! Full configuration validation.
//!
//! Each section has its own validator; this module calls them all and
//! collects errors into a single `ConfigError`.

mod assistant;
mod helpers;
mod tools;


use crate::schema::AuraConfig;
use aura_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &AuraConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    assistant::validate_assistant(&mut errors, config);
    tools::validate_tools(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
