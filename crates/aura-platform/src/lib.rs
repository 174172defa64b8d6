//! Host-environment side effects used by the assistant's tools.

pub mod browser;

pub use browser::open_url;
