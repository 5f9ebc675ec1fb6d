//! Regular-expression patterns recognising durations in free text.

use std::collections::BTreeMap;

use regex::{Regex, RegexBuilder};

use crate::error::{ModelError, Result};

/// Compiled duration patterns, keyed by `Duration` component name.
///
/// Patterns are compiled case-insensitively at construction so the matcher
/// never has to deal with invalid expressions.
#[derive(Debug, Clone, Default)]
pub struct DurationPatternTable {
    patterns: BTreeMap<String, Vec<Regex>>,
}

impl DurationPatternTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compile raw pattern strings for every duration component.
    pub fn compile(raw: &BTreeMap<String, Vec<String>>) -> Result<Self> {
        let mut table = Self::new();
        for (component, patterns) in raw {
            table.insert(component, patterns)?;
        }
        Ok(table)
    }

    pub fn insert<S: AsRef<str>>(&mut self, component: &str, patterns: &[S]) -> Result<()> {
        let mut compiled = Vec::with_capacity(patterns.len());
        for pattern in patterns {
            let regex = RegexBuilder::new(pattern.as_ref())
                .case_insensitive(true)
                .build()
                .map_err(|source| ModelError::InvalidPattern {
                    component: component.to_string(),
                    source,
                })?;
            compiled.push(regex);
        }
        self.patterns.insert(component.to_string(), compiled);
        Ok(())
    }

    pub fn with<S: AsRef<str>>(mut self, component: &str, patterns: &[S]) -> Result<Self> {
        self.insert(component, patterns)?;
        Ok(self)
    }

    pub fn get(&self, component: &str) -> &[Regex] {
        self.patterns
            .get(component)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn components(&self) -> impl Iterator<Item = &str> {
        self.patterns.keys().map(String::as_str)
    }
}
