//! Prompt to [`ComponentSet`] extraction.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use grimoire_model::defaults::{
    DEFAULT_EFFECT, DEFAULT_ELEMENT, DEFAULT_LEVEL, DEFAULT_RANGE, MAX_LEVEL, MIN_LEVEL,
    default_duration,
};
use grimoire_model::{Category, ComponentSet, ComponentSlots, SpellContext};
use regex::Regex;
use serde::Serialize;
use tracing::debug;

use crate::matcher::{MatchCandidate, Matcher};

/// Categories resolved through the matcher, in extraction order.
const MATCHED_CATEGORIES: [Category; 4] = [
    Category::Effect,
    Category::Element,
    Category::Duration,
    Category::Range,
];

/// `level <N>` or `<N>[st|nd|rd|th] level`.
static LEVEL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)level\s*(\d+)|(\d+)(?:st|nd|rd|th)?\s*level").expect("Invalid level regex")
});

static DEFAULTED: SlotOrigin = SlotOrigin::Defaulted;

/// Pull an explicit spell level out of a prompt.
///
/// Returns `None` when no level is mentioned or the number falls outside
/// 1-10.
pub fn extract_level(prompt: &str) -> Option<u8> {
    let captures = LEVEL_REGEX.captures(prompt)?;
    let digits = captures.get(1).or_else(|| captures.get(2))?;
    let level: u8 = digits.as_str().parse().ok()?;
    (MIN_LEVEL..=MAX_LEVEL).contains(&level).then_some(level)
}

/// How a slot of an extracted set got its value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum SlotOrigin {
    /// Chosen by the matcher.
    Matched(MatchCandidate),
    /// Read from an explicit `level N` phrase.
    Explicit,
    /// Filled from the default chain.
    Defaulted,
}

/// A component set plus the provenance of each slot.
#[derive(Debug, Clone, Serialize)]
pub struct Extraction {
    pub components: ComponentSet,
    pub origins: BTreeMap<Category, SlotOrigin>,
}

impl Extraction {
    pub fn origin(&self, category: Category) -> &SlotOrigin {
        self.origins.get(&category).unwrap_or(&DEFAULTED)
    }

    pub fn matched_count(&self) -> usize {
        self.origins
            .values()
            .filter(|origin| !matches!(origin, SlotOrigin::Defaulted))
            .count()
    }
}

/// Runs the matcher over every category and fills the gaps with defaults.
#[derive(Debug, Clone, Copy)]
pub struct Extractor<'a> {
    matcher: Matcher<'a>,
}

impl<'a> Extractor<'a> {
    pub fn new(context: &'a SpellContext) -> Self {
        Self {
            matcher: Matcher::new(context),
        }
    }

    pub fn extract(&self, prompt: &str) -> ComponentSet {
        self.extract_detailed(prompt).components
    }

    pub fn extract_detailed(&self, prompt: &str) -> Extraction {
        let mut slots = ComponentSlots::default();
        let mut origins = BTreeMap::new();

        if !prompt.trim().is_empty() {
            for category in MATCHED_CATEGORIES {
                if let Some(found) = self.matcher.find_in_vocabulary(prompt, category) {
                    slots.set_name(category, found.name.clone());
                    origins.insert(category, SlotOrigin::Matched(found));
                }
            }
            if let Some(level) = extract_level(prompt) {
                slots.level = Some(level);
                origins.insert(Category::Level, SlotOrigin::Explicit);
            }
        }

        let components = apply_defaults(slots);
        for category in Category::ALL {
            origins.entry(category).or_insert(SlotOrigin::Defaulted);
        }
        debug!(components = %components, "extracted components");

        Extraction {
            components,
            origins,
        }
    }
}

/// Fill unset slots. Effect is settled before Duration, whose default
/// depends on it.
fn apply_defaults(mut slots: ComponentSlots) -> ComponentSet {
    let effect = slots
        .effect
        .take()
        .unwrap_or_else(|| DEFAULT_EFFECT.to_string());
    let element = slots
        .element
        .take()
        .unwrap_or_else(|| DEFAULT_ELEMENT.to_string());
    let duration = slots
        .duration
        .take()
        .unwrap_or_else(|| default_duration(&effect).to_string());
    let range = slots
        .range
        .take()
        .unwrap_or_else(|| DEFAULT_RANGE.to_string());
    let level = slots.level.unwrap_or(DEFAULT_LEVEL);

    ComponentSet {
        effect,
        element,
        level,
        duration,
        range,
    }
}

#[cfg(test)]
mod tests {
    use grimoire_model::{SynonymTable, Vocabulary};

    use super::*;

    fn context() -> SpellContext {
        let vocabulary = Vocabulary::new()
            .with_names(Category::Effect, ["Creation", "Damage", "Shield", "Heal", "Summon"])
            .with_names(Category::Element, ["Fire", "Water", "Moon"])
            .with_names(
                Category::Duration,
                ["Instant", "1_minute", "5_minute", "10_minute"],
            )
            .with_names(Category::Range, ["Self", "30ft", "60ft"]);
        let synonyms = SynonymTable::new().with(Category::Range, "60ft", ["60 feet"]);
        SpellContext::new(vocabulary).with_synonyms(synonyms)
    }

    #[test]
    fn empty_prompt_uses_every_default() {
        let ctx = context();
        let components = Extractor::new(&ctx).extract("");
        assert_eq!(
            components,
            ComponentSet {
                effect: "Creation".to_string(),
                element: "Moon".to_string(),
                level: 1,
                duration: "10_minute".to_string(),
                range: "30ft".to_string(),
            }
        );
    }

    #[test]
    fn duration_default_follows_matched_effect() {
        let ctx = context();
        let extractor = Extractor::new(&ctx);
        assert_eq!(extractor.extract("shield me").duration, "5_minute");
        assert_eq!(extractor.extract("damage it").duration, "Instant");
        assert_eq!(extractor.extract("summon a wolf").duration, "1_minute");
    }

    #[test]
    fn matched_slots_are_kept() {
        let ctx = context();
        let extraction = Extractor::new(&ctx).extract_detailed("heal with water at 60 feet");
        assert_eq!(extraction.components.effect, "Heal");
        assert_eq!(extraction.components.element, "Water");
        assert_eq!(extraction.components.range, "60ft");
        assert_eq!(extraction.components.duration, "Instant");
        assert!(matches!(
            extraction.origin(Category::Range),
            SlotOrigin::Matched(found) if found.name == "60ft"
        ));
        assert_eq!(extraction.origin(Category::Duration), &SlotOrigin::Defaulted);
        assert_eq!(extraction.matched_count(), 3);
    }

    #[test]
    fn level_forms() {
        assert_eq!(extract_level("a level 7 fireball"), Some(7));
        assert_eq!(extract_level("Level 10"), Some(10));
        assert_eq!(extract_level("my 3rd level ward"), Some(3));
        assert_eq!(extract_level("a 2 level spell"), Some(2));
        assert_eq!(extract_level("level 15"), None);
        assert_eq!(extract_level("level 0"), None);
        assert_eq!(extract_level("level 999"), None);
        assert_eq!(extract_level("no number here"), None);
    }

    #[test]
    fn out_of_range_level_falls_back_to_default() {
        let ctx = context();
        let extraction = Extractor::new(&ctx).extract_detailed("a level 15 spell");
        assert_eq!(extraction.components.level, 1);
        assert_eq!(extraction.origin(Category::Level), &SlotOrigin::Defaulted);
    }

    #[test]
    fn whitespace_prompt_is_blank() {
        let ctx = context();
        let extraction = Extractor::new(&ctx).extract_detailed("   ");
        assert_eq!(extraction.matched_count(), 0);
    }
}
