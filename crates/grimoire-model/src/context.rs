//! The immutable table bundle every engine component reads from.

use crate::affinity::BloodlineAffinityTable;
use crate::patterns::DurationPatternTable;
use crate::synonyms::SynonymTable;
use crate::templates::{ElementAliasTable, TemplateTable};
use crate::vocabulary::Vocabulary;

/// Read-only lookup tables, constructed once and shared by reference.
///
/// There are no mutating methods once built; the `with_*` methods consume
/// the context and are meant for construction only.
#[derive(Debug, Clone, Default)]
pub struct SpellContext {
    vocabulary: Vocabulary,
    synonyms: SynonymTable,
    durations: DurationPatternTable,
    affinities: BloodlineAffinityTable,
    aliases: ElementAliasTable,
    templates: TemplateTable,
}

impl SpellContext {
    pub fn new(vocabulary: Vocabulary) -> Self {
        Self {
            vocabulary,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_synonyms(mut self, synonyms: SynonymTable) -> Self {
        self.synonyms = synonyms;
        self
    }

    #[must_use]
    pub fn with_durations(mut self, durations: DurationPatternTable) -> Self {
        self.durations = durations;
        self
    }

    #[must_use]
    pub fn with_affinities(mut self, affinities: BloodlineAffinityTable) -> Self {
        self.affinities = affinities;
        self
    }

    #[must_use]
    pub fn with_aliases(mut self, aliases: ElementAliasTable) -> Self {
        self.aliases = aliases;
        self
    }

    #[must_use]
    pub fn with_templates(mut self, templates: TemplateTable) -> Self {
        self.templates = templates;
        self
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn synonyms(&self) -> &SynonymTable {
        &self.synonyms
    }

    pub fn durations(&self) -> &DurationPatternTable {
        &self.durations
    }

    pub fn affinities(&self) -> &BloodlineAffinityTable {
        &self.affinities
    }

    pub fn aliases(&self) -> &ElementAliasTable {
        &self.aliases
    }

    pub fn templates(&self) -> &TemplateTable {
        &self.templates
    }
}
