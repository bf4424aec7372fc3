//! Reverse index from master-language text to its location.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::types::{
    LocaleTable,
    PageId,
    StringKey,
};

/// Maps each master-language text to the (page, key) it is stored under.
///
/// Built once per load. The table is walked in sorted page-then-key order and
/// the first location of a text wins, so a text repeated under several keys
/// always resolves to the lowest (page, key) pair.
#[derive(Debug, Clone, Default)]
pub(super) struct ReverseIndex {
    /// text → (page, key)
    entries: HashMap<String, (PageId, StringKey)>,
}

impl ReverseIndex {
    /// Builds the index from the master language's table.
    pub(super) fn build(master: &LocaleTable) -> Self {
        let mut entries = HashMap::new();
        let mut shadowed = 0usize;

        for (page, strings) in master {
            for (key, text) in strings {
                match entries.entry(text.clone()) {
                    Entry::Vacant(slot) => {
                        slot.insert((page.clone(), key.clone()));
                    }
                    Entry::Occupied(first) => {
                        let (first_page, first_key) = first.get();
                        tracing::debug!(
                            text = %text,
                            page = %page,
                            key = %key,
                            "Duplicate master text, resolving to {first_page}.{first_key}"
                        );
                        shadowed += 1;
                    }
                }
            }
        }

        tracing::debug!(texts = entries.len(), shadowed, "Built reverse index");
        Self { entries }
    }

    /// Location of a master-language text, if any.
    pub(super) fn get(&self, text: &str) -> Option<(&str, &str)> {
        self.entries.get(text).map(|(page, key)| (page.as_str(), key.as_str()))
    }

    /// Whether a master-language text is indexed.
    pub(super) fn contains(&self, text: &str) -> bool {
        self.entries.contains_key(text)
    }
}
