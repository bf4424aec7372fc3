//! Translation store
//!
//! Holds every loaded language and answers two kinds of queries:
//!
//! - page lookup: all strings of one page in one language
//! - reverse translation: text written in the master language → the text
//!   stored under the same (page, key) in the target language
//!
//! # Reverse translation
//!
//! Callers pass literal master-language text, not a key. The text is
//! resolved through a reverse index built at load time; when a text
//! occurs under several keys, the first (page, key) in sorted identifier
//! order wins.
//!
//! | Case | [`TranslationStore::translate`] | [`TranslationStore::try_translate`] |
//! |------|------|------|
//! | Text found, counterpart present | counterpart text | `Ok(Some(text))` |
//! | Text not in master language | `""` | `Ok(None)` |
//! | Counterpart page or key missing | `""` (logged) | `Err(StructuralMismatch)` |
//! | Target language not loaded | `""` (logged) | `Err(LanguageNotFound)` |
//!
//! The store is immutable once loaded. [`TranslationStore::load`] only
//! replaces the loaded data after every source has been read successfully.

/// Query errors
mod error;
/// Reverse index of master-language text
mod index;

pub use error::LookupError;
use index::ReverseIndex;

use crate::loader::{
    LoadError,
    LocaleSource,
    load_locales,
};
use crate::types::{
    LanguageCode,
    LanguageRole,
    LocaleTable,
    Locales,
    MissingEntry,
    StringTable,
};

/// In-memory store of localized strings.
#[derive(Debug, Clone)]
pub struct TranslationStore {
    /// Language literal strings are authored in
    master_language: LanguageCode,
    /// Default target of [`Self::translate`]
    active_language: LanguageCode,
    /// language → page → key → text
    locales: Locales,
    /// master text → (page, key)
    index: ReverseIndex,
}

impl TranslationStore {
    /// Creates an empty store.
    ///
    /// Queries on an empty store find nothing until [`Self::load`] succeeds.
    #[must_use]
    pub fn new(
        master_language: impl Into<LanguageCode>,
        active_language: impl Into<LanguageCode>,
    ) -> Self {
        Self {
            master_language: master_language.into(),
            active_language: active_language.into(),
            locales: Locales::new(),
            index: ReverseIndex::default(),
        }
    }

    /// Creates a store from already loaded locales.
    ///
    /// # Errors
    /// The master or active language is missing from `locales`.
    pub fn from_locales(
        master_language: impl Into<LanguageCode>,
        active_language: impl Into<LanguageCode>,
        locales: Locales,
    ) -> Result<Self, LoadError> {
        let mut store = Self::new(master_language, active_language);
        store.replace_locales(locales)?;
        Ok(store)
    }

    /// Loads every language from `source`, replacing what was loaded before.
    ///
    /// On error the store keeps its previous contents.
    ///
    /// # Errors
    /// - A source is unavailable or malformed
    /// - The master or active language is not among `languages`
    pub fn load<S, L>(&mut self, source: &S, languages: &[L]) -> Result<(), LoadError>
    where
        S: LocaleSource + ?Sized,
        L: AsRef<str>,
    {
        let locales = load_locales(source, languages)?;
        self.replace_locales(locales)
    }

    /// Swaps in a complete set of locales after checking the designated languages.
    fn replace_locales(&mut self, locales: Locales) -> Result<(), LoadError> {
        for (role, language) in [
            (LanguageRole::Master, &self.master_language),
            (LanguageRole::Active, &self.active_language),
        ] {
            if !locales.contains_key(language) {
                return Err(LoadError::LanguageNotLoaded { role, language: language.clone() });
            }
        }

        let index =
            locales.get(&self.master_language).map(ReverseIndex::build).unwrap_or_default();

        self.locales = locales;
        self.index = index;
        tracing::debug!(
            master = %self.master_language,
            active = %self.active_language,
            languages = self.locales.len(),
            "Translation store loaded"
        );

        let missing = self.check_parity();
        if !missing.is_empty() {
            tracing::warn!(
                count = missing.len(),
                "Some languages lack entries of the master language"
            );
            for entry in &missing {
                tracing::debug!(%entry, "Missing translation");
            }
        }

        Ok(())
    }

    /// Language literal strings are authored in.
    #[must_use]
    pub fn master_language(&self) -> &str {
        &self.master_language
    }

    /// Default target language of [`Self::translate`].
    #[must_use]
    pub fn active_language(&self) -> &str {
        &self.active_language
    }

    /// Changes the default target language.
    ///
    /// # Errors
    /// The language is not loaded.
    pub fn set_active_language(&mut self, language: &str) -> Result<(), LookupError> {
        if !self.locales.contains_key(language) {
            return Err(LookupError::LanguageNotFound(language.to_string()));
        }
        language.clone_into(&mut self.active_language);
        Ok(())
    }

    /// Loaded language codes, sorted.
    #[must_use]
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.locales.keys().map(String::as_str)
    }

    /// Page identifiers of a language, sorted.
    ///
    /// # Errors
    /// The language is not loaded.
    pub fn pages(&self, language: &str) -> Result<impl Iterator<Item = &str>, LookupError> {
        Ok(self.locale(language)?.keys().map(String::as_str))
    }

    /// Returns every string of `page` in `language`.
    ///
    /// # Errors
    /// - `LanguageNotFound`: the language is not loaded
    /// - `PageNotFound`: the language has no such page
    pub fn get_strings_for_page(
        &self,
        page: &str,
        language: &str,
    ) -> Result<&StringTable, LookupError> {
        self.locale(language)?.get(page).ok_or_else(|| LookupError::PageNotFound {
            language: language.to_string(),
            page: page.to_string(),
        })
    }

    /// Translates master-language text into the active language.
    ///
    /// Returns `""` when there is no translation. See the module docs for
    /// every case.
    #[must_use]
    pub fn translate(&self, text: &str) -> &str {
        self.translate_to(text, &self.active_language)
    }

    /// Translates master-language text into `language`.
    ///
    /// Same as [`Self::translate`] with an explicit target, for callers that
    /// resolve the language per request.
    #[must_use]
    pub fn translate_to(&self, text: &str, language: &str) -> &str {
        match self.try_translate(text, language) {
            Ok(translated) => translated.unwrap_or_default(),
            Err(err) => {
                tracing::warn!(%err, text, "Translation unavailable, rendering blank");
                ""
            }
        }
    }

    /// Translates master-language text into `language`, reporting why a
    /// translation is unavailable.
    ///
    /// # Returns
    /// - `Ok(Some(text))`: the translation
    /// - `Ok(None)`: the text does not exist in the master language
    ///
    /// # Errors
    /// - `LanguageNotFound`: the master or target language is not loaded
    /// - `StructuralMismatch`: the target language lacks the matched page or key
    pub fn try_translate(&self, text: &str, language: &str) -> Result<Option<&str>, LookupError> {
        self.locale(&self.master_language)?;
        let target = self.locale(language)?;

        let Some((page, key)) = self.index.get(text) else {
            return Ok(None);
        };

        let translated = target.get(page).and_then(|strings| strings.get(key)).ok_or_else(|| {
            LookupError::StructuralMismatch {
                language: language.to_string(),
                page: page.to_string(),
                key: key.to_string(),
            }
        })?;

        Ok(Some(translated.as_str()))
    }

    /// Whether `text` exists anywhere in the master language.
    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.index.contains(text)
    }

    /// The (page, key) a master-language text resolves to.
    #[must_use]
    pub fn locate(&self, text: &str) -> Option<(&str, &str)> {
        self.index.get(text)
    }

    /// Lists every entry of the master language missing from another language.
    ///
    /// Sorted by language, page, then key. A missing page is reported once,
    /// without its keys.
    #[must_use]
    pub fn check_parity(&self) -> Vec<MissingEntry> {
        let Some(master) = self.locales.get(&self.master_language) else {
            return Vec::new();
        };

        let mut missing = Vec::new();
        for (language, table) in &self.locales {
            if *language == self.master_language {
                continue;
            }

            for (page, strings) in master {
                let Some(translated) = table.get(page) else {
                    missing.push(MissingEntry {
                        language: language.clone(),
                        page: page.clone(),
                        key: None,
                    });
                    continue;
                };

                missing.extend(strings.keys().filter(|key| !translated.contains_key(*key)).map(
                    |key| MissingEntry {
                        language: language.clone(),
                        page: page.clone(),
                        key: Some(key.clone()),
                    },
                ));
            }
        }

        missing
    }

    /// Table of a loaded language.
    fn locale(&self, language: &str) -> Result<&LocaleTable, LookupError> {
        self.locales
            .get(language)
            .ok_or_else(|| LookupError::LanguageNotFound(language.to_string()))
    }
}
