//! Free-text prompt to vocabulary matching.
//!
//! Each candidate is scored through a fixed sequence of stages; later stages
//! only run while the candidate still has no score:
//!
//! 1. candidate name found in the prompt (10)
//! 2. synonym found in the prompt (10, or 9 for synonyms of three characters
//!    or fewer); always evaluated, best of stages 1-2 kept
//! 3. duration pattern matches the prompt (10, `Duration` only)
//! 4. candidate stem found in the prompt (6)
//! 5. synonym stem found in the prompt (5)
//! 6. best [`similarity`] of the candidate or any synonym against the prompt
//!
//! The highest scoring candidate wins and ties keep the earlier candidate.
//! Anything below [`MATCH_THRESHOLD`] is treated as noise.

use grimoire_model::{Category, SpellContext};
use serde::Serialize;
use tracing::{debug, trace};

use crate::lexical::{similarity, stem};

/// Minimum winning score; lower scores come from incidental trigram overlap.
pub const MATCH_THRESHOLD: u32 = 3;

const SCORE_EXACT: u32 = 10;
const SCORE_SYNONYM_LONG: u32 = 10;
const SCORE_SYNONYM_SHORT: u32 = 9;
const SCORE_PATTERN: u32 = 10;
const SCORE_STEM: u32 = 6;
const SCORE_SYNONYM_STEM: u32 = 5;

/// Synonyms longer than this many characters earn the full synonym score.
const SHORT_SYNONYM_MAX_LEN: usize = 3;
const MIN_STEM_LEN: usize = 3;

/// Which stage produced a candidate's score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MatchReason {
    Exact,
    Synonym,
    Pattern,
    Stem,
    SynonymStem,
    Similarity,
}

impl MatchReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchReason::Exact => "exact",
            MatchReason::Synonym => "synonym",
            MatchReason::Pattern => "pattern",
            MatchReason::Stem => "stem",
            MatchReason::SynonymStem => "synonym stem",
            MatchReason::Similarity => "similarity",
        }
    }
}

/// A scored candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchCandidate {
    pub name: String,
    pub score: u32,
    pub reason: MatchReason,
}

/// Category-specific scoring strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStrategy {
    /// Name, synonym, stem and similarity stages.
    Lexical,
    /// Lexical stages plus registered duration patterns.
    Duration,
}

impl MatchStrategy {
    pub fn for_category(category: Category) -> Self {
        match category {
            Category::Duration => MatchStrategy::Duration,
            _ => MatchStrategy::Lexical,
        }
    }
}

/// Scores prompts against the candidates of one category at a time.
#[derive(Debug, Clone, Copy)]
pub struct Matcher<'a> {
    context: &'a SpellContext,
}

impl<'a> Matcher<'a> {
    pub fn new(context: &'a SpellContext) -> Self {
        Self { context }
    }

    /// Best candidate for the prompt, or `None` when nothing reaches
    /// [`MATCH_THRESHOLD`].
    pub fn find_match<S: AsRef<str>>(
        &self,
        prompt: &str,
        category: Category,
        candidates: &[S],
    ) -> Option<MatchCandidate> {
        let prompt = prompt.to_lowercase();
        let strategy = MatchStrategy::for_category(category);

        let mut best: Option<MatchCandidate> = None;
        for candidate in candidates {
            let Some(scored) = self.score_lowered(&prompt, category, strategy, candidate.as_ref())
            else {
                continue;
            };
            trace!(
                category = %category,
                candidate = %scored.name,
                score = scored.score,
                reason = scored.reason.as_str(),
                "scored candidate"
            );
            if best.as_ref().is_none_or(|current| scored.score > current.score) {
                best = Some(scored);
            }
        }

        match best {
            Some(candidate) if candidate.score >= MATCH_THRESHOLD => {
                debug!(
                    category = %category,
                    component = %candidate.name,
                    score = candidate.score,
                    reason = candidate.reason.as_str(),
                    "matched component"
                );
                Some(candidate)
            }
            Some(candidate) => {
                debug!(
                    category = %category,
                    component = %candidate.name,
                    score = candidate.score,
                    "best candidate below threshold"
                );
                None
            }
            None => None,
        }
    }

    /// Match against the category's own vocabulary.
    pub fn find_in_vocabulary(&self, prompt: &str, category: Category) -> Option<MatchCandidate> {
        let candidates = self.context.vocabulary().names(category);
        self.find_match(prompt, category, &candidates)
    }

    /// Score a single candidate, without applying the threshold.
    pub fn score(&self, prompt: &str, category: Category, candidate: &str) -> Option<MatchCandidate> {
        let prompt = prompt.to_lowercase();
        self.score_lowered(
            &prompt,
            category,
            MatchStrategy::for_category(category),
            candidate,
        )
    }

    fn score_lowered(
        &self,
        prompt: &str,
        category: Category,
        strategy: MatchStrategy,
        candidate: &str,
    ) -> Option<MatchCandidate> {
        let name = candidate.trim().to_lowercase();
        if name.is_empty() {
            return None;
        }
        let synonyms = self.context.synonyms().normalized(category, candidate);

        let mut score = 0;
        let mut reason = MatchReason::Exact;

        if prompt.contains(&name) {
            score = SCORE_EXACT;
        }

        for synonym in &synonyms {
            if !prompt.contains(synonym.as_str()) {
                continue;
            }
            let synonym_score = if synonym.chars().count() > SHORT_SYNONYM_MAX_LEN {
                SCORE_SYNONYM_LONG
            } else {
                SCORE_SYNONYM_SHORT
            };
            if synonym_score > score {
                score = synonym_score;
                reason = MatchReason::Synonym;
            }
        }

        if score == 0 && strategy == MatchStrategy::Duration && self.pattern_matches(prompt, candidate)
        {
            score = SCORE_PATTERN;
            reason = MatchReason::Pattern;
        }

        if score == 0 {
            let stemmed = stem(&name);
            if stemmed.chars().count() >= MIN_STEM_LEN && prompt.contains(&stemmed) {
                score = SCORE_STEM;
                reason = MatchReason::Stem;
            }
        }

        if score == 0 {
            let hit = synonyms.iter().any(|synonym| {
                let stemmed = stem(synonym);
                stemmed.chars().count() >= MIN_STEM_LEN && prompt.contains(&stemmed)
            });
            if hit {
                score = SCORE_SYNONYM_STEM;
                reason = MatchReason::SynonymStem;
            }
        }

        if score == 0 {
            let fallback = synonyms
                .iter()
                .map(|synonym| similarity(synonym, prompt))
                .fold(similarity(&name, prompt), u32::max);
            if fallback > score {
                score = fallback;
                reason = MatchReason::Similarity;
            }
        }

        (score > 0).then(|| MatchCandidate {
            name: candidate.to_string(),
            score,
            reason,
        })
    }

    /// True when any pattern registered for the duration matches.
    fn pattern_matches(&self, prompt: &str, candidate: &str) -> bool {
        self.context
            .durations()
            .get(candidate)
            .iter()
            .any(|pattern| pattern.is_match(prompt))
    }
}
