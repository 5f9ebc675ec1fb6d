use std::collections::BTreeSet;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info, info_span};

use grimoire_map::{
    EfficiencyCalculator, ElementMapper, Extraction, Extractor, SeededChooser, Spell,
    SpellComposer,
};
use grimoire_model::{ANY_KEY, Category, SpellContext, TemplateTable};
use grimoire_standards::{load_context, load_default_context};

use crate::types::{EfficiencyReport, ElementMapping, GenerateRequest, VocabRow};

/// Load tables from `data_dir` when given, else from the environment or the
/// embedded copies.
pub fn load_tables(data_dir: Option<&Path>) -> Result<SpellContext> {
    match data_dir {
        Some(dir) => {
            load_context(dir).with_context(|| format!("load data tables from {}", dir.display()))
        }
        None => load_default_context(),
    }
}

pub fn run_extract(context: &SpellContext, prompt: &str) -> Extraction {
    let span = info_span!("extract", prompt_len = prompt.len());
    let _guard = span.enter();
    let extraction = Extractor::new(context).extract_detailed(prompt);
    info!(
        matched = extraction.matched_count(),
        components = %extraction.components,
        "extraction complete"
    );
    extraction
}

pub fn run_generate(context: &SpellContext, request: &GenerateRequest) -> Spell {
    let span = info_span!("generate", seed = ?request.seed);
    let _guard = span.enter();
    let mut chooser = match request.seed {
        Some(seed) => SeededChooser::new(seed),
        None => SeededChooser::from_entropy(),
    };
    let composer = SpellComposer::new(context);
    let components = match &request.prompt {
        Some(prompt) => Extractor::new(context).extract(prompt),
        None => composer.random_components(&mut chooser),
    };
    debug!(components = %components, "components selected");
    let spell = composer.compose(components, request.bloodline.as_deref(), &mut chooser);
    info!(name = %spell.name, "spell composed");
    spell
}

/// Map an element onto template element keys.
///
/// With an effect, candidates are that effect's family (or the catch-all
/// family). Without one, every element key used by any family is a candidate.
pub fn run_map_element(context: &SpellContext, element: &str, effect: Option<&str>) -> ElementMapping {
    let templates = context.templates();
    let candidates: Vec<String> = match effect {
        Some(effect) => templates
            .family(effect)
            .map(|family| {
                TemplateTable::family_elements(family)
                    .into_iter()
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default(),
        None => templates
            .effects()
            .filter_map(|effect| templates.family(effect))
            .flat_map(|family| family.keys())
            .filter(|key| key.as_str() != ANY_KEY)
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect(),
    };
    let template_element = ElementMapper::new(context).map_element(element, &candidates);
    ElementMapping {
        source: element.to_string(),
        effect: effect.map(str::to_string),
        template_element,
        candidates,
    }
}

pub fn run_efficiency(context: &SpellContext, bloodline: &str, element: &str) -> EfficiencyReport {
    EfficiencyReport {
        bloodline: bloodline.to_string(),
        element: element.to_string(),
        efficiency: EfficiencyCalculator::new(context).efficiency(bloodline, element),
    }
}

pub fn run_vocab(context: &SpellContext, category: Option<Category>) -> Vec<VocabRow> {
    let categories = match category {
        Some(category) => vec![category],
        None => Category::ALL.to_vec(),
    };
    let vocabulary = context.vocabulary();
    let mut rows = Vec::new();
    for category in categories {
        for entry in vocabulary.entries(category) {
            rows.push(VocabRow {
                category,
                name: entry.name.clone(),
                affix: entry.display_affix().to_string(),
                synonyms: context.synonyms().get(category, &entry.name).to_vec(),
            });
        }
    }
    rows
}
