use thiserror::Error;

use crate::types::{
    LanguageCode,
    PageId,
    StringKey,
};

/// Errors returned by store queries
///
/// All of these are recoverable: the caller decides how to degrade.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The language has not been loaded
    #[error("Language '{0}' is not loaded")]
    LanguageNotFound(LanguageCode),
    /// The language is loaded but has no such page
    #[error("Page '{page}' does not exist in language '{language}'")]
    PageNotFound { language: LanguageCode, page: PageId },
    /// The master language has an entry the target language lacks
    #[error("Language '{language}' has no entry for '{page}.{key}' present in the master language")]
    StructuralMismatch { language: LanguageCode, page: PageId, key: StringKey },
}
