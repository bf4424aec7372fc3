//! Configuration of the locale store: where sources live and which
//! languages play the master and active roles.

/// Config file loader
mod loader;
/// Configuration types and settings
mod types;

pub use loader::CONFIG_FILE_NAME;
pub use types::{
    ConfigError,
    LocaleSettings,
    ValidationError,
};
