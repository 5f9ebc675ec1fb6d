//! Stemming and character-level similarity heuristics.
//!
//! Both functions are pure and case-insensitive. They are deliberately crude:
//! the goal is to tolerate inflections and typos in short spell prompts, not
//! to model language.

/// Suffixes tried in order; the first one that leaves a long enough stem wins.
const SUFFIXES: [&str; 8] = ["ing", "ed", "es", "s", "y", "er", "est", "ly"];

/// Minimum number of characters a stem must keep.
const MIN_STEM_LEN: usize = 3;

pub const SCORE_EXACT: u32 = 10;
pub const SCORE_SAME_STEM: u32 = 8;
pub const SCORE_CONTAINS: u32 = 6;

/// Reduce a word to a crude stem.
///
/// Lower-cases the input, then strips the first suffix from [`SUFFIXES`]
/// that leaves at least three characters. A word ending in `ies` matched by
/// the `es` rule becomes `...y` (`armies` -> `army`).
pub fn stem(word: &str) -> String {
    let lower = word.to_lowercase();
    for suffix in SUFFIXES {
        let Some(remainder) = lower.strip_suffix(suffix) else {
            continue;
        };
        if remainder.chars().count() < MIN_STEM_LEN {
            continue;
        }
        if suffix == "es"
            && let Some(base) = lower.strip_suffix("ies")
        {
            return format!("{base}y");
        }
        return remainder.to_string();
    }
    lower
}

/// Score how alike two strings are.
///
/// - 10 when equal ignoring case
/// - 8 when their stems are equal
/// - 6 when either contains the other (the contained side must be non-empty)
/// - otherwise one point per three-character window of `a` found in `b`
///
/// The trigram fallback is asymmetric: windows are always taken from `a`.
pub fn similarity(a: &str, b: &str) -> u32 {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    if a == b {
        return SCORE_EXACT;
    }
    if stem(&a) == stem(&b) {
        return SCORE_SAME_STEM;
    }
    if contains_non_empty(&a, &b) || contains_non_empty(&b, &a) {
        return SCORE_CONTAINS;
    }
    trigram_overlap(&a, &b)
}

fn contains_non_empty(haystack: &str, needle: &str) -> bool {
    !needle.is_empty() && haystack.contains(needle)
}

/// Count the overlapping three-character windows of `a` that occur in `b`.
fn trigram_overlap(a: &str, b: &str) -> u32 {
    let chars: Vec<char> = a.chars().collect();
    let mut hits = 0;
    for window in chars.windows(3) {
        let gram: String = window.iter().collect();
        if b.contains(&gram) {
            hits += 1;
        }
    }
    hits
}
