use std::fmt;

use serde::{Deserialize, Serialize};

use crate::category::Category;

/// A fully populated set of spell components.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentSet {
    pub effect: String,
    pub element: String,
    pub level: u8,
    pub duration: String,
    pub range: String,
}

impl ComponentSet {
    /// Component value for a category, rendered as its canonical name.
    pub fn get(&self, category: Category) -> String {
        match category {
            Category::Effect => self.effect.clone(),
            Category::Element => self.element.clone(),
            Category::Level => self.level.to_string(),
            Category::Duration => self.duration.clone(),
            Category::Range => self.range.clone(),
        }
    }
}

impl fmt::Display for ComponentSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} / {} / level {} / {} / {}",
            self.effect, self.element, self.level, self.duration, self.range
        )
    }
}

/// Component slots while a set is being populated.
///
/// Every slot starts unset; [`ComponentSlots::complete`] only succeeds once
/// all five are filled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComponentSlots {
    pub effect: Option<String>,
    pub element: Option<String>,
    pub level: Option<u8>,
    pub duration: Option<String>,
    pub range: Option<String>,
}

impl ComponentSlots {
    pub fn is_set(&self, category: Category) -> bool {
        match category {
            Category::Effect => self.effect.is_some(),
            Category::Element => self.element.is_some(),
            Category::Level => self.level.is_some(),
            Category::Duration => self.duration.is_some(),
            Category::Range => self.range.is_some(),
        }
    }

    /// Set a named slot. The level slot is not name-valued and is ignored here.
    pub fn set_name(&mut self, category: Category, name: String) {
        match category {
            Category::Effect => self.effect = Some(name),
            Category::Element => self.element = Some(name),
            Category::Duration => self.duration = Some(name),
            Category::Range => self.range = Some(name),
            Category::Level => {}
        }
    }

    pub fn complete(self) -> Option<ComponentSet> {
        Some(ComponentSet {
            effect: self.effect?,
            element: self.element?,
            level: self.level?,
            duration: self.duration?,
            range: self.range?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incomplete_slots_do_not_complete() {
        let mut slots = ComponentSlots::default();
        slots.set_name(Category::Effect, "Heal".to_string());
        assert!(slots.is_set(Category::Effect));
        assert!(!slots.is_set(Category::Range));
        assert!(slots.complete().is_none());
    }

    #[test]
    fn complete_slots_build_set() {
        let slots = ComponentSlots {
            effect: Some("Heal".to_string()),
            element: Some("Water".to_string()),
            level: Some(2),
            duration: Some("Instant".to_string()),
            range: Some("Touch".to_string()),
        };
        let set = slots.complete().unwrap();
        assert_eq!(set.get(Category::Level), "2");
        assert_eq!(set.to_string(), "Heal / Water / level 2 / Instant / Touch");
    }
}
