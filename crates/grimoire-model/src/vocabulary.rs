//! Canonical component vocabulary.
//!
//! The vocabulary is an explicit ordered mapping: each category holds its
//! component names in the order they were declared by the data source. That
//! order is significant, since the matcher breaks score ties in favour of the
//! earliest candidate.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::category::Category;

/// One canonical component name plus the affix text shown in spell names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyEntry {
    pub name: String,
    /// Display text used by name assembly. Falls back to `name` when absent.
    #[serde(default)]
    pub affix: Option<String>,
}

impl VocabularyEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            affix: None,
        }
    }

    pub fn with_affix(mut self, affix: impl Into<String>) -> Self {
        self.affix = Some(affix.into());
        self
    }

    /// The affix text, or the component name when no affix is configured.
    pub fn display_affix(&self) -> &str {
        self.affix.as_deref().unwrap_or(&self.name)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Vocabulary {
    categories: BTreeMap<Category, Vec<VocabularyEntry>>,
}

impl Vocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the entries of a category, keeping the given order.
    pub fn insert(&mut self, category: Category, entries: Vec<VocabularyEntry>) {
        self.categories.insert(category, entries);
    }

    pub fn with_names<I, S>(mut self, category: Category, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries = names.into_iter().map(VocabularyEntry::new).collect();
        self.insert(category, entries);
        self
    }

    pub fn entries(&self, category: Category) -> &[VocabularyEntry] {
        self.categories
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn names(&self, category: Category) -> Vec<&str> {
        self.entries(category)
            .iter()
            .map(|entry| entry.name.as_str())
            .collect()
    }

    pub fn contains(&self, category: Category, name: &str) -> bool {
        self.entries(category).iter().any(|entry| entry.name == name)
    }

    pub fn entry(&self, category: Category, name: &str) -> Option<&VocabularyEntry> {
        self.entries(category).iter().find(|entry| entry.name == name)
    }

    /// Affix text for a component; unknown components render as their name.
    pub fn affix<'a>(&'a self, category: Category, name: &'a str) -> &'a str {
        self.entry(category, name)
            .map_or(name, VocabularyEntry::display_affix)
    }

    pub fn is_empty(&self, category: Category) -> bool {
        self.entries(category).is_empty()
    }
}
