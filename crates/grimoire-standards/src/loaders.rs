use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;
use tracing::{debug, warn};

use grimoire_model::defaults::{
    DEFAULT_DURATIONS, DEFAULT_EFFECT, DEFAULT_ELEMENT, DEFAULT_LEVEL, DEFAULT_RANGE,
    FALLBACK_DURATION,
};
use grimoire_model::{
    ANY_KEY, AffinityTier, BloodlineAffinityTable, Category, DurationPatternTable,
    ElementAliasTable, SpellContext, SynonymTable, TemplateTable, Vocabulary, VocabularyEntry,
};

use crate::error::StandardsError;
use crate::paths::default_data_root;

type NestedLists = BTreeMap<String, BTreeMap<String, Vec<String>>>;

/// One of the table files making up a data directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFile {
    Vocabulary,
    Synonyms,
    Durations,
    Bloodlines,
    Templates,
}

impl DataFile {
    pub const ALL: [DataFile; 5] = [
        DataFile::Vocabulary,
        DataFile::Synonyms,
        DataFile::Durations,
        DataFile::Bloodlines,
        DataFile::Templates,
    ];

    pub fn file_name(&self) -> &'static str {
        match self {
            DataFile::Vocabulary => "vocabulary.toml",
            DataFile::Synonyms => "synonyms.toml",
            DataFile::Durations => "durations.toml",
            DataFile::Bloodlines => "bloodlines.toml",
            DataFile::Templates => "templates.toml",
        }
    }

    /// The copy compiled into the binary.
    pub fn embedded(&self) -> &'static str {
        match self {
            DataFile::Vocabulary => include_str!("../../../standards/vocabulary.toml"),
            DataFile::Synonyms => include_str!("../../../standards/synonyms.toml"),
            DataFile::Durations => include_str!("../../../standards/durations.toml"),
            DataFile::Bloodlines => include_str!("../../../standards/bloodlines.toml"),
            DataFile::Templates => include_str!("../../../standards/templates.toml"),
        }
    }
}

struct Source {
    path: PathBuf,
    text: Cow<'static, str>,
}

impl Source {
    fn embedded(file: DataFile) -> Self {
        Self {
            path: Path::new("<embedded>").join(file.file_name()),
            text: Cow::Borrowed(file.embedded()),
        }
    }

    fn resolve(dir: Option<&Path>, file: DataFile) -> Result<Self, StandardsError> {
        let Some(dir) = dir else {
            return Ok(Self::embedded(file));
        };
        let path = dir.join(file.file_name());
        if !path.is_file() {
            debug!(file = file.file_name(), dir = %dir.display(), "using embedded table");
            return Ok(Self::embedded(file));
        }
        let text = std::fs::read_to_string(&path).map_err(|e| StandardsError::io(&path, e))?;
        debug!(path = %path.display(), "loaded table override");
        Ok(Self {
            path,
            text: Cow::Owned(text),
        })
    }

    fn parse<T: for<'de> Deserialize<'de>>(&self) -> Result<T, StandardsError> {
        toml::from_str(&self.text).map_err(|e| StandardsError::toml(&self.path, e))
    }
}

#[derive(Debug, Default, Deserialize)]
struct TemplatesFile {
    #[serde(default)]
    aliases: BTreeMap<String, String>,
    #[serde(default)]
    templates: NestedLists,
}

/// Build a context from the embedded tables alone.
pub fn embedded_context() -> Result<SpellContext, StandardsError> {
    build_context(None)
}

/// Build a context from `dir`, falling back to the embedded copy for any
/// table file the directory does not contain.
pub fn load_context(dir: &Path) -> Result<SpellContext, StandardsError> {
    if !dir.is_dir() {
        return Err(StandardsError::io(
            dir,
            std::io::Error::new(std::io::ErrorKind::NotFound, "data directory not found"),
        ));
    }
    build_context(Some(dir))
}

/// Load the context from `GRIMOIRE_DATA_DIR` when set, otherwise from the
/// embedded tables.
pub fn load_default_context() -> anyhow::Result<SpellContext> {
    match default_data_root() {
        Some(dir) => {
            load_context(&dir).with_context(|| format!("load data tables from {}", dir.display()))
        }
        None => embedded_context().context("load embedded data tables"),
    }
}

fn build_context(dir: Option<&Path>) -> Result<SpellContext, StandardsError> {
    let vocabulary = load_vocabulary(&Source::resolve(dir, DataFile::Vocabulary)?)?;
    let synonyms = load_synonyms(&Source::resolve(dir, DataFile::Synonyms)?, &vocabulary)?;
    let durations = load_durations(&Source::resolve(dir, DataFile::Durations)?, &vocabulary)?;
    let affinities = load_bloodlines(&Source::resolve(dir, DataFile::Bloodlines)?, &vocabulary)?;
    let (templates, aliases) =
        load_templates(&Source::resolve(dir, DataFile::Templates)?, &vocabulary)?;

    Ok(SpellContext::new(vocabulary)
        .with_synonyms(synonyms)
        .with_durations(durations)
        .with_affinities(affinities)
        .with_aliases(aliases)
        .with_templates(templates))
}

fn parse_category(source: &Source, name: &str) -> Result<Category, StandardsError> {
    name.parse().map_err(|_| StandardsError::UnknownCategory {
        path: source.path.clone(),
        name: name.to_string(),
    })
}

fn load_vocabulary(source: &Source) -> Result<Vocabulary, StandardsError> {
    let raw: BTreeMap<String, Vec<VocabularyEntry>> = source.parse()?;
    let mut vocabulary = Vocabulary::new();
    let mut seen = BTreeSet::new();
    for (name, entries) in raw {
        let category = parse_category(source, &name)?;
        let mut kept = Vec::with_capacity(entries.len());
        for entry in entries {
            if entry.name.trim().is_empty() {
                warn!(%category, "skipping vocabulary entry with empty name");
                continue;
            }
            kept.push(entry);
        }
        seen.insert(category);
        vocabulary.insert(category, kept);
    }

    for category in Category::ALL {
        if !seen.contains(&category) {
            return Err(StandardsError::MissingCategory { category });
        }
        if vocabulary.is_empty(category) {
            return Err(StandardsError::EmptyCategory { category });
        }
    }

    let level = DEFAULT_LEVEL.to_string();
    let required = [
        (Category::Effect, DEFAULT_EFFECT),
        (Category::Element, DEFAULT_ELEMENT),
        (Category::Range, DEFAULT_RANGE),
        (Category::Level, level.as_str()),
        (Category::Duration, FALLBACK_DURATION),
    ]
    .into_iter()
    .chain(DEFAULT_DURATIONS.map(|name| (Category::Duration, name)));
    for (category, name) in required {
        if !vocabulary.contains(category, name) {
            return Err(StandardsError::MissingDefault {
                category,
                name: name.to_string(),
            });
        }
    }

    debug!(
        path = %source.path.display(),
        entries = Category::ALL.iter().map(|c| vocabulary.entries(*c).len()).sum::<usize>(),
        "vocabulary loaded"
    );
    Ok(vocabulary)
}

fn load_synonyms(source: &Source, vocabulary: &Vocabulary) -> Result<SynonymTable, StandardsError> {
    let raw: NestedLists = source.parse()?;
    let mut table = SynonymTable::new();
    for (name, components) in raw {
        let category = parse_category(source, &name)?;
        for (component, phrases) in components {
            if !vocabulary.contains(category, &component) {
                warn!(%category, %component, "synonyms listed for unknown component");
            }
            table.insert(category, component, phrases);
        }
    }
    Ok(table)
}

fn load_durations(
    source: &Source,
    vocabulary: &Vocabulary,
) -> Result<DurationPatternTable, StandardsError> {
    let raw: BTreeMap<String, Vec<String>> = source.parse()?;
    let mut table = DurationPatternTable::new();
    for (component, patterns) in raw {
        if !vocabulary.contains(Category::Duration, &component) {
            warn!(%component, "duration patterns listed for unknown duration");
        }
        table
            .insert(&component, patterns.as_slice())
            .map_err(|e| StandardsError::InvalidPattern {
                path: source.path.clone(),
                component: component.clone(),
                source: e,
            })?;
    }
    Ok(table)
}

fn load_bloodlines(
    source: &Source,
    vocabulary: &Vocabulary,
) -> Result<BloodlineAffinityTable, StandardsError> {
    let raw: NestedLists = source.parse()?;
    let mut table = BloodlineAffinityTable::new();
    for (bloodline, tiers) in raw {
        for (label, elements) in tiers {
            let tier: AffinityTier = label.parse().map_err(|_| StandardsError::UnknownTier {
                bloodline: bloodline.clone(),
                label: label.clone(),
            })?;
            for element in &elements {
                if !vocabulary.contains(Category::Element, element) {
                    warn!(%bloodline, %element, %tier, "affinity lists unknown element");
                }
            }
            table.insert(&bloodline, tier, elements);
        }
    }
    for (bloodline, element) in table.overlaps() {
        warn!(%bloodline, %element, "element appears under more than one tier");
    }
    Ok(table)
}

fn load_templates(
    source: &Source,
    vocabulary: &Vocabulary,
) -> Result<(TemplateTable, ElementAliasTable), StandardsError> {
    let raw: TemplatesFile = source.parse()?;

    let template_elements: BTreeSet<&str> = raw
        .templates
        .values()
        .flat_map(|family| family.keys().map(String::as_str))
        .collect();
    for (alias, target) in &raw.aliases {
        if !template_elements.contains(target.as_str()) {
            warn!(%alias, %target, "alias target has no templates");
        }
    }
    for effect in raw.templates.keys() {
        if effect != ANY_KEY && !vocabulary.contains(Category::Effect, effect) {
            warn!(%effect, "templates listed for unknown effect");
        }
    }
    if !raw.templates.contains_key(ANY_KEY) {
        warn!(path = %source.path.display(), "no catch-all template family");
    }

    Ok((
        TemplateTable::from(raw.templates),
        ElementAliasTable::from(raw.aliases),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(text: &'static str) -> Source {
        Source {
            path: PathBuf::from("test.toml"),
            text: Cow::Borrowed(text),
        }
    }

    #[test]
    fn every_embedded_table_parses_as_toml() {
        for file in DataFile::ALL {
            let parsed: Result<toml::Table, _> = toml::from_str(file.embedded());
            assert!(parsed.is_ok(), "{} failed to parse", file.file_name());
        }
    }

    #[test]
    fn vocabulary_rejects_unknown_category() {
        let err = load_vocabulary(&source("[[School]]\nname = \"Evocation\"\n")).unwrap_err();
        assert!(matches!(err, StandardsError::UnknownCategory { .. }));
    }

    #[test]
    fn vocabulary_requires_every_category() {
        let err = load_vocabulary(&source("[[Effect]]\nname = \"Creation\"\n")).unwrap_err();
        assert!(matches!(
            err,
            StandardsError::MissingCategory {
                category: Category::Element
            }
        ));
    }

    #[test]
    fn vocabulary_rejects_empty_category() {
        let text = "Effect = []\nElement = []\nLevel = []\nDuration = []\nRange = []\n";
        let err = load_vocabulary(&source(text)).unwrap_err();
        assert!(matches!(
            err,
            StandardsError::EmptyCategory {
                category: Category::Effect
            }
        ));
    }

    #[test]
    fn vocabulary_requires_defaults() {
        let text = r#"
Effect = [{ name = "Damage" }]
Element = [{ name = "Moon" }]
Level = [{ name = "1" }]
Duration = [{ name = "Instant" }]
Range = [{ name = "30ft" }]
"#;
        let err = load_vocabulary(&source(text)).unwrap_err();
        match err {
            StandardsError::MissingDefault { category, name } => {
                assert_eq!(category, Category::Effect);
                assert_eq!(name, "Creation");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn invalid_duration_pattern_names_component() {
        let vocabulary = Vocabulary::new().with_names(Category::Duration, ["Instant"]);
        let err = load_durations(&source("Instant = ['(unclosed']\n"), &vocabulary).unwrap_err();
        match err {
            StandardsError::InvalidPattern { component, .. } => assert_eq!(component, "Instant"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn unknown_tier_label_is_rejected() {
        let vocabulary = Vocabulary::new().with_names(Category::Element, ["Fire"]);
        let err = load_bloodlines(&source("[Water]\n\"Great 90%\" = [\"Fire\"]\n"), &vocabulary)
            .unwrap_err();
        assert!(matches!(err, StandardsError::UnknownTier { .. }));
    }

    #[test]
    fn templates_file_without_aliases_loads() {
        let vocabulary = Vocabulary::new().with_names(Category::Effect, ["Heal"]);
        let (templates, aliases) = load_templates(
            &source("[templates.Any]\nAny = [\"A {EFFECT} spell.\"]\n"),
            &vocabulary,
        )
        .unwrap();
        assert!(!templates.is_empty());
        assert_eq!(aliases.iter().count(), 0);
    }
}
