//! Aura configuration system.
//!
//! TOML-based configuration for the assistant, its tools, and logging.
//! Every section uses serde defaults so a partial (or empty) config file
//! works out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use aura_config::load_config;
//!
//! let config = load_config().expect("failed to load config");
//! println!("model: {}", config.assistant.model);
//! ```

pub mod credentials;
pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use credentials::resolve_api_key;
pub use schema::AuraConfig;

use aura_common::ConfigError;
use std::path::Path;

/// Load config from the platform default path.
///
/// Creates a documented default file if none exists, then validates the
/// result strictly.
pub fn load_config() -> Result<AuraConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load config from an explicit path (the `--config` override).
///
/// Unlike [`load_config`], a missing file is an error here: the user asked
/// for that file specifically.
pub fn load_config_from(path: &Path) -> Result<AuraConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }
    let config = toml_loader::load_from_path(path)?;
    validation::validate(&config)?;
    Ok(config)
}
