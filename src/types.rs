//! Core types used throughout the project.
//!
//! The store is a three-level map: language → page → string key → text.
//! Every level is a `BTreeMap` so traversal order is the sorted identifier
//! order, which the reverse lookup relies on for its first-match tie-break.

use std::collections::BTreeMap;
use std::fmt;

/// Locale identifier (e.g. `"en"`, `"fr"`, `"pt-BR"`).
pub type LanguageCode = String;

/// Identifier of one page or template; the unit strings are grouped by.
pub type PageId = String;

/// Identifier of one string within a page.
pub type StringKey = String;

/// Strings of one page in one language.
pub type StringTable = BTreeMap<StringKey, String>;

/// All pages of one language.
pub type LocaleTable = BTreeMap<PageId, StringTable>;

/// Every loaded language.
pub type Locales = BTreeMap<LanguageCode, LocaleTable>;

/// Which designated language a code was configured as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LanguageRole {
    /// Language literal strings are authored in.
    Master,
    /// Language translations are produced in.
    Active,
}

impl fmt::Display for LanguageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Master => f.write_str("master"),
            Self::Active => f.write_str("active"),
        }
    }
}

/// An entry present in the master language but absent from another language.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MissingEntry {
    /// Language lacking the entry
    pub language: LanguageCode,
    /// Page of the entry
    pub page: PageId,
    /// `None` when the whole page is missing.
    pub key: Option<StringKey>,
}

impl fmt::Display for MissingEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.key {
            Some(key) => write!(f, "{}: {}.{}", self.language, self.page, key),
            None => write!(f, "{}: page '{}'", self.language, self.page),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(LanguageRole::Master, "master")]
    #[case(LanguageRole::Active, "active")]
    fn language_role_display(#[case] role: LanguageRole, #[case] expected: &str) {
        assert_that!(role.to_string(), eq(expected));
    }

    #[rstest]
    fn missing_entry_display() {
        let key = MissingEntry {
            language: "fr".to_string(),
            page: "home".to_string(),
            key: Some("greeting".to_string()),
        };
        let page = MissingEntry { key: None, ..key.clone() };

        assert_that!(key.to_string(), eq("fr: home.greeting"));
        assert_that!(page.to_string(), eq("fr: page 'home'"));
    }

    #[rstest]
    fn missing_entries_sort_by_language_then_page_then_key() {
        let mut entries = vec![
            MissingEntry { language: "fr".into(), page: "b".into(), key: Some("x".into()) },
            MissingEntry { language: "de".into(), page: "z".into(), key: None },
            MissingEntry { language: "fr".into(), page: "a".into(), key: Some("y".into()) },
        ];
        entries.sort();

        let order: Vec<_> = entries.iter().map(ToString::to_string).collect();
        assert_that!(order, elements_are![eq("de: page 'z'"), eq("fr: a.y"), eq("fr: b.x")]);
    }
}
