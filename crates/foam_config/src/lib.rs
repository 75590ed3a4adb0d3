//! Parsing and validation of `foamfix.toml`.
//!
//! Every section is optional; an absent file section falls back to the
//! defaults, which enable all optimizations.

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod types;

pub use error::ConfigError;
pub use loader::{load_config, load_config_from_str, CONFIG_FILE_NAME};
pub use types::*;
