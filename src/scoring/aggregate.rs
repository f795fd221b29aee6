//! Signal map aggregation.

use crate::signal::SignalMap;

/// Combine a signal map into one score in `0..=100`.
///
/// A precomputed `_FINAL_WEIGHTED_SCORE` entry wins outright. Otherwise the
/// display signals are averaged: if any carries a weight (and the weights sum
/// above zero) only the weighted signals count, else every signal counts
/// equally. An empty map scores 0.
pub fn aggregate(signals: &SignalMap) -> u8 {
    if let Some(score) = signals.final_weighted_score() {
        return to_percent(score);
    }

    let mut weighted_sum = 0.0;
    let mut weight_total = 0.0;
    for (_, signal) in signals.iter() {
        if let Some(weight) = signal.weight {
            weighted_sum += signal.score * weight;
            weight_total += weight;
        }
    }

    if weight_total > 0.0 {
        return to_percent(weighted_sum / weight_total);
    }

    let count = signals.len();
    if count == 0 {
        return 0;
    }
    let sum: f64 = signals.iter().map(|(_, signal)| signal.score).sum();
    to_percent(sum / count as f64)
}

fn to_percent(fraction: f64) -> u8 {
    let percent = (fraction * 100.0).round();
    if percent.is_finite() {
        percent.clamp(0.0, 100.0) as u8
    } else {
        0
    }
}
