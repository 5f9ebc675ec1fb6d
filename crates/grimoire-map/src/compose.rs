//! Spell assembly: random components, names and descriptions.
//!
//! Randomness is injected through [`Chooser`] so matching and extraction stay
//! deterministic and composition can be reproduced from a seed.

use grimoire_model::defaults::{
    DEFAULT_EFFECT, DEFAULT_ELEMENT, DEFAULT_LEVEL, DEFAULT_RANGE, MAX_LEVEL, MIN_LEVEL,
    default_duration,
};
use grimoire_model::templates::{
    PLACEHOLDER_DURATION, PLACEHOLDER_EFFECT, PLACEHOLDER_ELEMENT, PLACEHOLDER_LEVEL,
    PLACEHOLDER_RANGE,
};
use grimoire_model::{ANY_KEY, Category, ComponentSet, Efficiency, SpellContext, TemplateTable};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::debug;

use crate::efficiency::EfficiencyCalculator;
use crate::element::ElementMapper;

/// Used when no template family covers the components.
pub const GENERIC_TEMPLATE: &str =
    "A level {LEVEL} {EFFECT} spell of {ELEMENT}, lasting {DURATION} with a range of {RANGE}.";

/// Source of random indices.
pub trait Chooser {
    /// An index in `0..len`. Only called with `len > 0`.
    fn choose_index(&mut self, len: usize) -> usize;
}

/// Pick one item, or `None` for an empty slice.
pub fn choose<'a, T, C: Chooser + ?Sized>(chooser: &mut C, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    let index = chooser.choose_index(items.len()).min(items.len() - 1);
    items.get(index)
}

/// [`Chooser`] backed by a seedable RNG.
#[derive(Debug, Clone)]
pub struct SeededChooser {
    rng: StdRng,
}

impl SeededChooser {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl Chooser for SeededChooser {
    fn choose_index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

/// A composed spell.
#[derive(Debug, Clone, Serialize)]
pub struct Spell {
    pub name: String,
    pub description: String,
    pub components: ComponentSet,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bloodline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub efficiency: Option<Efficiency>,
}

/// Substitute every placeholder in a template.
pub fn format_template(template: &str, components: &ComponentSet) -> String {
    template
        .replace(PLACEHOLDER_EFFECT, &components.effect)
        .replace(PLACEHOLDER_ELEMENT, &components.element)
        .replace(PLACEHOLDER_LEVEL, &components.level.to_string())
        .replace(PLACEHOLDER_DURATION, &components.duration)
        .replace(PLACEHOLDER_RANGE, &components.range)
}

#[derive(Debug, Clone, Copy)]
pub struct SpellComposer<'a> {
    context: &'a SpellContext,
    mapper: ElementMapper<'a>,
    calculator: EfficiencyCalculator<'a>,
}

impl<'a> SpellComposer<'a> {
    pub fn new(context: &'a SpellContext) -> Self {
        Self {
            context,
            mapper: ElementMapper::new(context),
            calculator: EfficiencyCalculator::new(context),
        }
    }

    /// One random vocabulary entry per category.
    ///
    /// Empty categories use the extraction defaults.
    pub fn random_components<C: Chooser + ?Sized>(&self, chooser: &mut C) -> ComponentSet {
        let vocabulary = self.context.vocabulary();
        let mut pick = |category: Category| {
            let names = vocabulary.names(category);
            choose(&mut *chooser, &names).map(|name| (*name).to_string())
        };

        let effect = pick(Category::Effect).unwrap_or_else(|| DEFAULT_EFFECT.to_string());
        let element = pick(Category::Element).unwrap_or_else(|| DEFAULT_ELEMENT.to_string());
        let level = pick(Category::Level)
            .and_then(|raw| raw.parse::<u8>().ok())
            .filter(|level| (MIN_LEVEL..=MAX_LEVEL).contains(level))
            .unwrap_or(DEFAULT_LEVEL);
        let duration =
            pick(Category::Duration).unwrap_or_else(|| default_duration(&effect).to_string());
        let range = pick(Category::Range).unwrap_or_else(|| DEFAULT_RANGE.to_string());

        ComponentSet {
            effect,
            element,
            level,
            duration,
            range,
        }
    }

    /// `"<element affix> <effect affix> of <duration affix>"`.
    pub fn name(&self, components: &ComponentSet) -> String {
        let vocabulary = self.context.vocabulary();
        format!(
            "{} {} of {}",
            vocabulary.affix(Category::Element, &components.element),
            vocabulary.affix(Category::Effect, &components.effect),
            vocabulary.affix(Category::Duration, &components.duration),
        )
    }

    /// Template element the components' element maps to for their effect.
    pub fn template_element(&self, components: &ComponentSet) -> String {
        match self.context.templates().family(&components.effect) {
            Some(family) => {
                let elements = TemplateTable::family_elements(family);
                self.mapper.map_element(&components.element, &elements)
            }
            None => ANY_KEY.to_string(),
        }
    }

    /// Pick and format a description template.
    pub fn describe<C: Chooser + ?Sized>(&self, components: &ComponentSet, chooser: &mut C) -> String {
        let element = self.template_element(components);
        let templates = self
            .context
            .templates()
            .family(&components.effect)
            .and_then(|family| family.get(&element).or_else(|| family.get(ANY_KEY)))
            .map(Vec::as_slice)
            .unwrap_or_default();
        let template = match choose(chooser, templates) {
            Some(template) => template.as_str(),
            None => {
                debug!(
                    effect = %components.effect,
                    element = %element,
                    "no description template, using generic text"
                );
                GENERIC_TEMPLATE
            }
        };
        format_template(template, components)
    }

    pub fn compose<C: Chooser + ?Sized>(
        &self,
        components: ComponentSet,
        bloodline: Option<&str>,
        chooser: &mut C,
    ) -> Spell {
        let name = self.name(&components);
        let description = self.describe(&components, chooser);
        let efficiency =
            bloodline.map(|bloodline| self.calculator.efficiency(bloodline, &components.element));
        Spell {
            name,
            description,
            components,
            bloodline: bloodline.map(str::to_string),
            efficiency,
        }
    }
}
