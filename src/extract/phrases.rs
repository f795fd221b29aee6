//! Case-insensitive phrase matching.

use aho_corasick::AhoCorasick;

use crate::error::PatternError;

/// A fixed list of phrases matched as case-insensitive substrings.
///
/// Hits are counted per phrase, not per occurrence: a phrase that appears
/// three times still counts once. Overlapping phrases ("maintain" and
/// "maintain ethical") are each counted.
#[derive(Debug, Clone)]
pub struct PhraseSet {
    matcher: AhoCorasick,
    len: usize,
}

impl PhraseSet {
    /// Build a matcher for `phrases`.
    pub fn new(phrases: &[&str]) -> Result<Self, PatternError> {
        let matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(phrases)?;
        Ok(Self {
            matcher,
            len: phrases.len(),
        })
    }

    /// Number of phrases in the set.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of distinct phrases present in `haystack`.
    pub fn distinct_hits(&self, haystack: &str) -> usize {
        let mut seen = vec![false; self.len];
        for mat in self.matcher.find_overlapping_iter(haystack) {
            seen[mat.pattern().as_usize()] = true;
        }
        seen.into_iter().filter(|hit| *hit).count()
    }

    /// Whether any phrase occurs in `haystack`.
    pub fn is_match(&self, haystack: &str) -> bool {
        self.matcher.is_match(haystack)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_each_phrase_once() {
        let set = PhraseSet::new(&["key", "vital"]).unwrap();
        assert_eq!(set.distinct_hits("key key key"), 1);
        assert_eq!(set.distinct_hits("a vital key"), 2);
        assert_eq!(set.distinct_hits("nothing here"), 0);
    }

    #[test]
    fn test_overlapping_phrases_all_count() {
        let set = PhraseSet::new(&["maintain", "maintain ethical", "continue to", "continue to develop"])
            .unwrap();
        assert_eq!(set.distinct_hits("We maintain ethical rules"), 2);
        assert_eq!(set.distinct_hits("They continue to develop tools"), 2);
    }

    #[test]
    fn test_case_insensitive_substring() {
        let set = PhraseSet::new(&["midjourney", "ai tools"]).unwrap();
        assert!(set.is_match("MidJourney_Output.png"));
        assert_eq!(set.distinct_hits("Modern AI Tools help"), 1);
        // substring semantics, not word boundaries
        let hedges = PhraseSet::new(&["may"]).unwrap();
        assert!(hedges.is_match("The mayor spoke"));
    }

    #[test]
    fn test_empty_set() {
        let set = PhraseSet::new(&[]).unwrap();
        assert!(set.is_empty());
        assert_eq!(set.distinct_hits("anything"), 0);
        assert!(!set.is_match("anything"));
    }
}
