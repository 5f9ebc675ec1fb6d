//! Description templates and the element alias table used to pick them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Family key used both as the catch-all effect and the catch-all element.
pub const ANY_KEY: &str = "Any";

/// Placeholder tokens substituted verbatim when formatting a template.
pub const PLACEHOLDER_EFFECT: &str = "{EFFECT}";
pub const PLACEHOLDER_ELEMENT: &str = "{ELEMENT}";
pub const PLACEHOLDER_LEVEL: &str = "{LEVEL}";
pub const PLACEHOLDER_DURATION: &str = "{DURATION}";
pub const PLACEHOLDER_RANGE: &str = "{RANGE}";

/// effect -> element -> description templates.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TemplateTable {
    families: BTreeMap<String, BTreeMap<String, Vec<String>>>,
}

impl TemplateTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert<I, S>(&mut self, effect: &str, element: &str, templates: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.families
            .entry(effect.to_string())
            .or_default()
            .insert(
                element.to_string(),
                templates.into_iter().map(Into::into).collect(),
            );
    }

    pub fn with<I, S>(mut self, effect: &str, element: &str, templates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.insert(effect, element, templates);
        self
    }

    /// Template family for an effect, falling back to the `Any` effect.
    pub fn family(&self, effect: &str) -> Option<&BTreeMap<String, Vec<String>>> {
        self.families
            .get(effect)
            .or_else(|| self.families.get(ANY_KEY))
    }

    /// Element names a family offers, excluding the `Any` catch-all.
    pub fn family_elements(family: &BTreeMap<String, Vec<String>>) -> Vec<&str> {
        family
            .keys()
            .map(String::as_str)
            .filter(|element| *element != ANY_KEY)
            .collect()
    }

    pub fn effects(&self) -> impl Iterator<Item = &str> {
        self.families.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }
}

/// Direct source-element -> template-element aliases.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementAliasTable {
    aliases: BTreeMap<String, String>,
}

impl ElementAliasTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, source: &str, target: &str) -> Self {
        self.aliases.insert(source.to_string(), target.to_string());
        self
    }

    pub fn get(&self, source: &str) -> Option<&str> {
        self.aliases.get(source).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.aliases
            .iter()
            .map(|(source, target)| (source.as_str(), target.as_str()))
    }
}

impl From<BTreeMap<String, String>> for ElementAliasTable {
    fn from(aliases: BTreeMap<String, String>) -> Self {
        Self { aliases }
    }
}

impl From<BTreeMap<String, BTreeMap<String, Vec<String>>>> for TemplateTable {
    fn from(families: BTreeMap<String, BTreeMap<String, Vec<String>>>) -> Self {
        Self { families }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn family_falls_back_to_any_effect() {
        let table = TemplateTable::new()
            .with("Damage", "Fire", ["A burst of {ELEMENT}."])
            .with(ANY_KEY, ANY_KEY, ["A {EFFECT} spell."]);
        assert!(table.family("Damage").unwrap().contains_key("Fire"));
        assert!(table.family("Heal").unwrap().contains_key(ANY_KEY));
    }

    #[test]
    fn family_elements_exclude_catch_all() {
        let table = TemplateTable::new()
            .with("Damage", "Fire", ["x"])
            .with("Damage", ANY_KEY, ["y"])
            .with("Damage", "Air", ["z"]);
        let family = table.family("Damage").unwrap();
        assert_eq!(TemplateTable::family_elements(family), vec!["Air", "Fire"]);
    }
}
