//! Signals and ordered signal maps.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Metadata key carrying a precomputed composite score.
///
/// When present, the aggregator uses it instead of averaging display signals.
pub const FINAL_WEIGHTED_SCORE: &str = "_FINAL_WEIGHTED_SCORE";

/// Returns true if `key` names a metadata entry rather than a display signal.
pub fn is_metadata_key(key: &str) -> bool {
    key.starts_with('_')
}

/// One named heuristic measurement.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Signal {
    /// Confidence that the content is machine generated (0-1).
    pub score: f64,
    /// Human-readable rationale.
    pub description: String,
    /// Relative importance when the aggregator computes a weighted average.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

impl Signal {
    /// Create an unweighted signal. The score is clamped into `[0, 1]`.
    pub fn new(score: f64, description: impl Into<String>) -> Self {
        Self {
            score: score.clamp(0.0, 1.0),
            description: description.into(),
            weight: None,
        }
    }

    /// Create a weighted signal. The score is clamped into `[0, 1]`.
    pub fn weighted(score: f64, description: impl Into<String>, weight: f64) -> Self {
        Self {
            weight: Some(weight),
            ..Self::new(score, description)
        }
    }
}

/// Insertion-ordered mapping from signal name to [`Signal`].
///
/// Insertion order is display order. Keys starting with `_` are metadata: they
/// are skipped by [`SignalMap::iter`] and by serialization but stay reachable
/// through [`SignalMap::get`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignalMap {
    entries: Vec<(String, Signal)>,
}

impl SignalMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a signal. An existing entry with the same name is replaced in place.
    pub fn insert(&mut self, name: impl Into<String>, signal: Signal) {
        let name = name.into();
        match self.entries.iter_mut().find(|(k, _)| *k == name) {
            Some((_, existing)) => *existing = signal,
            None => self.entries.push((name, signal)),
        }
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, signal: Signal) -> Self {
        self.insert(name, signal);
        self
    }

    /// Look up any entry, metadata included.
    pub fn get(&self, name: &str) -> Option<&Signal> {
        self.entries
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, signal)| signal)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Display signals in insertion order, metadata excluded.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Signal)> {
        self.entries
            .iter()
            .filter(|(k, _)| !is_metadata_key(k))
            .map(|(k, signal)| (k.as_str(), signal))
    }

    /// Every entry in insertion order, metadata included.
    pub fn iter_all(&self) -> impl Iterator<Item = (&str, &Signal)> {
        self.entries.iter().map(|(k, signal)| (k.as_str(), signal))
    }

    /// Display signal names in order.
    pub fn names(&self) -> Vec<&str> {
        self.iter().map(|(k, _)| k).collect()
    }

    /// Number of display signals.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The precomputed composite score, if the extractor stored one.
    pub fn final_weighted_score(&self) -> Option<f64> {
        self.get(FINAL_WEIGHTED_SCORE).map(|signal| signal.score)
    }
}

impl Serialize for SignalMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (name, signal) in self.iter() {
            map.serialize_entry(name, signal)?;
        }
        map.end()
    }
}
