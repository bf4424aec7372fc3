use std::path::PathBuf;

use thiserror::Error;

use crate::types::{
    LanguageCode,
    LanguageRole,
};

/// Errors that abort loading a set of locales.
///
/// Every variant is fatal to the load: no partial result is returned.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The source of a language could not be read
    #[error("Locale source for '{language}' is unavailable ({}): {source}", path.display())]
    SourceUnavailable {
        language: LanguageCode,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The source was read but is not a page → key → text table
    #[error("Locale source for '{language}' is malformed ({}): {reason}", path.display())]
    SourceMalformed { language: LanguageCode, path: PathBuf, reason: String },
    /// Listing the available sources failed
    #[error("Failed to discover locale sources: {0}")]
    Discovery(String),
    /// The master or active language is not among the loaded languages
    #[error("The {role} language '{language}' was not loaded")]
    LanguageNotLoaded { role: LanguageRole, language: LanguageCode },
}
