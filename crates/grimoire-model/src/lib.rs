pub mod affinity;
pub mod category;
pub mod components;
pub mod context;
pub mod defaults;
pub mod error;
pub mod patterns;
pub mod synonyms;
pub mod templates;
pub mod vocabulary;

pub use affinity::{AffinityTier, BloodlineAffinityTable, Efficiency, percentage_from_label};
pub use category::Category;
pub use components::{ComponentSet, ComponentSlots};
pub use context::SpellContext;
pub use error::{ModelError, Result};
pub use patterns::DurationPatternTable;
pub use synonyms::SynonymTable;
pub use templates::{ANY_KEY, ElementAliasTable, TemplateTable};
pub use vocabulary::{Vocabulary, VocabularyEntry};
