//! Lexical signals for text.

use std::collections::HashSet;

use regex::Regex;

use crate::error::PatternError;
use crate::extract::phrases::PhraseSet;
use crate::extract::{to_fixed, utf16_len};
use crate::policy::TextPolicy;
use crate::signal::{FINAL_WEIGHTED_SCORE, Signal, SignalMap};

/// Name of the single signal returned for texts below the minimum length.
pub const LENGTH_SIGNAL: &str = "Length";

/// Raw lexical measurements behind the text signals.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStats {
    pub sentence_count: usize,
    pub word_count: usize,
    /// Population variance of per-sentence word counts; `None` without sentences.
    pub sentence_variance: Option<f64>,
    pub corporate_hits: usize,
    pub cliche_hits: usize,
    pub passive_matches: usize,
    /// Unique case-folded words over total words; `None` without words.
    pub lexical_diversity: Option<f64>,
    pub transition_hits: usize,
    pub hedge_hits: usize,
}

impl TextStats {
    /// Passive matches per sentence.
    pub fn passive_rate(&self) -> Option<f64> {
        (self.sentence_count > 0).then(|| self.passive_matches as f64 / self.sentence_count as f64)
    }
}

/// Extracts lexical signals from text.
#[derive(Debug, Clone)]
pub struct TextExtractor {
    policy: TextPolicy,
    corporate: PhraseSet,
    cliches: PhraseSet,
    transitions: PhraseSet,
    hedges: PhraseSet,
    passive: Regex,
}

impl TextExtractor {
    /// Create an extractor with the standard policy.
    pub fn new() -> Self {
        Self::with_policy(TextPolicy::default()).expect("standard text policy must build")
    }

    /// Create an extractor with a custom policy.
    pub fn with_policy(policy: TextPolicy) -> Result<Self, PatternError> {
        Ok(Self {
            corporate: PhraseSet::new(policy.corporate_phrases)?,
            cliches: PhraseSet::new(policy.ai_cliches)?,
            transitions: PhraseSet::new(policy.transition_words)?,
            hedges: PhraseSet::new(policy.hedge_words)?,
            passive: Regex::new(policy.passive_voice_pattern)?,
            policy,
        })
    }

    pub fn policy(&self) -> &TextPolicy {
        &self.policy
    }

    /// Measure `text` without scoring it.
    pub fn measure(&self, text: &str) -> TextStats {
        let sentence_lengths: Vec<usize> = text
            .split(['.', '!', '?'])
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| s.split_whitespace().count())
            .collect();

        let words: Vec<&str> = text.split_whitespace().collect();
        let unique: HashSet<String> = words.iter().map(|w| w.to_lowercase()).collect();

        TextStats {
            sentence_count: sentence_lengths.len(),
            word_count: words.len(),
            sentence_variance: variance(&sentence_lengths),
            corporate_hits: self.corporate.distinct_hits(text),
            cliche_hits: self.cliches.distinct_hits(text),
            passive_matches: self.passive.find_iter(text).count(),
            lexical_diversity: (!words.is_empty())
                .then(|| unique.len() as f64 / words.len() as f64),
            transition_hits: self.transitions.distinct_hits(text),
            hedge_hits: self.hedges.distinct_hits(text),
        }
    }

    /// Extract the text signal map.
    ///
    /// The text is trimmed first. Texts shorter than the policy minimum yield
    /// only a [`LENGTH_SIGNAL`] entry. Longer texts yield six display signals
    /// plus a [`FINAL_WEIGHTED_SCORE`] entry combining all seven measures,
    /// vocabulary repetition included.
    pub fn extract(&self, text: &str) -> SignalMap {
        let text = text.trim();
        let policy = &self.policy;

        if utf16_len(text) < policy.min_chars {
            return SignalMap::new().with(
                LENGTH_SIGNAL,
                Signal::new(policy.short_text_score, "Text too short for analysis"),
            );
        }

        let stats = self.measure(text);
        tracing::trace!(?stats, "Measured text");

        let corporate_ratio = if self.corporate.is_empty() {
            0.0
        } else {
            stats.corporate_hits as f64 / self.corporate.len() as f64
        };

        let uniformity = stats
            .sentence_variance
            .map_or(policy.uniformity.otherwise, |v| policy.uniformity.score(v));
        let corporate = policy.corporate.score(corporate_ratio);
        let cliches = policy.cliches.score(stats.cliche_hits, self.cliches.len());
        let passive = stats
            .passive_rate()
            .map_or(policy.passive.otherwise, |r| policy.passive.score(r));
        let repetition = stats
            .lexical_diversity
            .map_or(policy.repetition.otherwise, |d| policy.repetition.score(d));
        let transitions = policy.transitions.score(stats.transition_hits as f64);
        let hedging = policy.hedging.score(stats.hedge_hits as f64);

        let w = policy.weights;
        let composite = (uniformity * w.uniformity
            + corporate * w.corporate
            + cliches * w.cliches
            + passive * w.passive
            + repetition * w.repetition
            + transitions * w.transitions
            + hedging * w.hedging)
            / w.total();

        let variance_text = stats
            .sentence_variance
            .map_or_else(|| "n/a".to_string(), |v| to_fixed(v, 1));

        SignalMap::new()
            .with(
                "Sentence Uniformity",
                Signal::weighted(
                    uniformity,
                    format!("Variance: {} (AI tends <15)", variance_text),
                    w.uniformity,
                ),
            )
            .with(
                "Corporate Phrases",
                Signal::weighted(
                    corporate,
                    format!(
                        "Found {}/{} corporate terms",
                        stats.corporate_hits,
                        self.corporate.len()
                    ),
                    w.corporate,
                ),
            )
            .with(
                "AI Clichés",
                Signal::weighted(
                    cliches,
                    format!(
                        "Found {}/{} typical AI phrases (strongest indicator)",
                        stats.cliche_hits,
                        self.cliches.len()
                    ),
                    w.cliches,
                ),
            )
            .with(
                "Passive Voice",
                Signal::weighted(
                    passive,
                    format!(
                        "{} instances - AI avg: 1-2+ per sentence",
                        stats.passive_matches
                    ),
                    w.passive,
                ),
            )
            .with(
                "Formal Hedging",
                Signal::weighted(
                    hedging,
                    format!("{} hedge/superlative words (AI: 5+)", stats.hedge_hits),
                    w.hedging,
                ),
            )
            .with(
                "Transition Words",
                Signal::weighted(
                    transitions,
                    format!("{} connectors found", stats.transition_hits),
                    w.transitions,
                ),
            )
            .with(
                FINAL_WEIGHTED_SCORE,
                Signal::new(composite, "Weighted composite"),
            )
    }
}

impl Default for TextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

fn variance(values: &[usize]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<usize>() as f64 / n;
    Some(
        values
            .iter()
            .map(|&v| (v as f64 - mean).powi(2))
            .sum::<f64>()
            / n,
    )
}
