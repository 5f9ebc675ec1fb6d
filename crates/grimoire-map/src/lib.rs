#![deny(unsafe_code)]

//! Spell component extraction and scoring.
//!
//! Everything here reads from an immutable [`SpellContext`] and performs no
//! I/O. Tables are loaded by `grimoire-standards`.

pub mod compose;
pub mod efficiency;
pub mod element;
pub mod extractor;
pub mod lexical;
pub mod matcher;

pub use compose::{Chooser, SeededChooser, Spell, SpellComposer, format_template};
pub use efficiency::EfficiencyCalculator;
pub use element::{ElementMapper, element_similarity};
pub use extractor::{Extraction, Extractor, SlotOrigin, extract_level};
pub use grimoire_model::defaults::default_duration;
pub use grimoire_model::SpellContext;
pub use lexical::{similarity, stem};
pub use matcher::{MATCH_THRESHOLD, MatchCandidate, MatchReason, MatchStrategy, Matcher};
