pub mod errors;
pub mod id;

pub use errors::{AuraError, ConfigError, PlatformError};
pub use id::{new_correlation_id, new_id, SessionId};
