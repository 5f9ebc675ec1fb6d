use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::category::Category;

/// Synonym phrases per category and component.
///
/// Phrases are matched case-insensitively; blank entries are kept as loaded
/// and skipped by consumers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SynonymTable {
    entries: BTreeMap<Category, BTreeMap<String, Vec<String>>>,
}

impl SynonymTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert<I, S>(&mut self, category: Category, component: impl Into<String>, synonyms: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entries
            .entry(category)
            .or_default()
            .insert(component.into(), synonyms.into_iter().map(Into::into).collect());
    }

    pub fn with<I, S>(mut self, category: Category, component: &str, synonyms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.insert(category, component, synonyms);
        self
    }

    /// Raw synonyms for a component, empty when none are registered.
    pub fn get(&self, category: Category, component: &str) -> &[String] {
        self.entries
            .get(&category)
            .and_then(|components| components.get(component))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Lower-cased, trimmed, non-blank synonyms for a component.
    pub fn normalized(&self, category: Category, component: &str) -> Vec<String> {
        self.get(category, component)
            .iter()
            .map(|synonym| synonym.trim().to_lowercase())
            .filter(|synonym| !synonym.is_empty())
            .collect()
    }

    /// Components with registered synonyms for a category.
    pub fn components(&self, category: Category) -> impl Iterator<Item = &str> {
        self.entries
            .get(&category)
            .into_iter()
            .flat_map(|components| components.keys().map(String::as_str))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalized_skips_blank_entries() {
        let table =
            SynonymTable::new().with(Category::Effect, "Heal", ["Cure", "  ", "", " Mend "]);
        assert_eq!(table.normalized(Category::Effect, "Heal"), vec!["cure", "mend"]);
    }

    #[test]
    fn unknown_component_has_no_synonyms() {
        let table = SynonymTable::new();
        assert!(table.get(Category::Element, "Fire").is_empty());
        assert!(table.normalized(Category::Element, "Fire").is_empty());
    }
}
