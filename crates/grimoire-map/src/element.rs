//! Mapping generation-vocabulary elements onto template-vocabulary elements.

use grimoire_model::{ANY_KEY, SpellContext};
use tracing::{debug, warn};

/// A candidate must score strictly above this to be chosen.
pub const MIN_ELEMENT_SCORE: f64 = 0.3;
const FIRST_CHAR_BONUS: f64 = 0.1;

/// Character-overlap score between a source element and a candidate.
///
/// Counts the source characters (every occurrence) that appear anywhere in
/// the candidate, divides by the longer of the two lengths, adds a small
/// bonus when both start with the same letter and caps the result at 1.0.
pub fn element_similarity(source: &str, candidate: &str) -> f64 {
    let source: Vec<char> = source.to_lowercase().chars().collect();
    let candidate: Vec<char> = candidate.to_lowercase().chars().collect();
    let longest = source.len().max(candidate.len());
    if longest == 0 {
        return 0.0;
    }
    let shared = source.iter().filter(|ch| candidate.contains(ch)).count();
    let mut score = shared as f64 / longest as f64;
    if let (Some(a), Some(b)) = (source.first(), candidate.first())
        && a == b
    {
        score += FIRST_CHAR_BONUS;
    }
    score.min(1.0)
}

#[derive(Debug, Clone, Copy)]
pub struct ElementMapper<'a> {
    context: &'a SpellContext,
}

impl<'a> ElementMapper<'a> {
    pub fn new(context: &'a SpellContext) -> Self {
        Self { context }
    }

    /// Closest element available in `template_elements`, or `"Any"`.
    ///
    /// Exact membership wins, then the direct alias table, then
    /// [`element_similarity`]. Alias targets are not checked against
    /// `template_elements`; a missing target is logged and returned as-is.
    pub fn map_element<S: AsRef<str>>(&self, source: &str, template_elements: &[S]) -> String {
        if template_elements.iter().any(|element| element.as_ref() == source) {
            return source.to_string();
        }

        if let Some(alias) = self.context.aliases().get(source) {
            if !template_elements.iter().any(|element| element.as_ref() == alias) {
                warn!(
                    source,
                    alias, "element alias target is not in the template vocabulary"
                );
            }
            return alias.to_string();
        }

        let mut best: Option<(&str, f64)> = None;
        for candidate in template_elements {
            let candidate = candidate.as_ref();
            let score = element_similarity(source, candidate);
            if best.is_none_or(|(_, current)| score > current) {
                best = Some((candidate, score));
            }
        }

        match best {
            Some((candidate, score)) if score > MIN_ELEMENT_SCORE => {
                debug!(source, candidate, score, "mapped element by similarity");
                candidate.to_string()
            }
            _ => {
                debug!(source, "no template element close enough, using Any");
                ANY_KEY.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use grimoire_model::{ElementAliasTable, Vocabulary};

    use super::*;

    fn context() -> SpellContext {
        SpellContext::new(Vocabulary::new()).with_aliases(
            ElementAliasTable::new()
                .with("Wind", "Air")
                .with("Dark", "Shadow"),
        )
    }

    #[test]
    fn exact_member_is_returned() {
        let ctx = context();
        let mapper = ElementMapper::new(&ctx);
        assert_eq!(mapper.map_element("Fire", &["Air", "Fire"]), "Fire");
    }

    #[test]
    fn alias_is_used_before_similarity() {
        let ctx = context();
        let mapper = ElementMapper::new(&ctx);
        assert_eq!(mapper.map_element("Wind", &["Air", "Fire"]), "Air");
    }

    #[test]
    fn alias_target_is_not_validated() {
        let ctx = context();
        let mapper = ElementMapper::new(&ctx);
        assert_eq!(mapper.map_element("Dark", &["Air", "Fire"]), "Shadow");
    }

    #[test]
    fn unrelated_element_falls_back_to_any() {
        let ctx = context();
        let mapper = ElementMapper::new(&ctx);
        assert_eq!(mapper.map_element("Zzz", &["Air", "Fire"]), "Any");
    }

    #[test]
    fn similarity_picks_closest_candidate() {
        let ctx = context();
        let mapper = ElementMapper::new(&ctx);
        // flame vs fire: f and e shared (2/5) plus the first-letter bonus.
        assert_eq!(mapper.map_element("Flame", &["Air", "Fire"]), "Fire");
        assert_eq!(mapper.map_element("Moon", &["Fire", "Shadow"]), "Shadow");
    }

    #[test]
    fn similarity_scores() {
        assert!((element_similarity("Flame", "Fire") - 0.5).abs() < 1e-9);
        assert!((element_similarity("Flame", "Air") - 0.2).abs() < 1e-9);
        assert_eq!(element_similarity("Zzz", "Air"), 0.0);
        assert_eq!(element_similarity("", ""), 0.0);
        // Both a's count, then the bonus is capped.
        assert_eq!(element_similarity("Aab", "ab"), 1.0);
    }

    #[test]
    fn ties_keep_first_candidate() {
        let ctx = context();
        let mapper = ElementMapper::new(&ctx);
        // "Ab" scores the same against both; the first one wins.
        assert_eq!(mapper.map_element("Ab", &["Aba", "Ab "]), "Aba");
    }

    #[test]
    fn empty_template_vocabulary_yields_any() {
        let ctx = context();
        let mapper = ElementMapper::new(&ctx);
        let empty: [&str; 0] = [];
        assert_eq!(mapper.map_element("Fire", &empty), "Any");
    }
}
