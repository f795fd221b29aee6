//! Size-only placeholder signals for video and audio.
//!
//! Nothing in a video or audio stream is decoded. Each map holds one size
//! heuristic and two fixed placeholder signals so every content kind renders
//! the same way. The placeholders carry no evidence.

use crate::extract::to_fixed;
use crate::policy::{STANDARD_AUDIO_POLICY, STANDARD_VIDEO_POLICY, SizeOnlyPolicy};
use crate::signal::{Signal, SignalMap};

fn size_signal(policy: &SizeOnlyPolicy, size: u64) -> Signal {
    let score = if size < policy.small_below {
        policy.small_score
    } else {
        policy.large_score
    };
    Signal::new(score, format!("{}MB", to_fixed(size as f64 / 1_000_000.0, 1)))
}

/// Video signals under `policy`.
pub fn video_signals(policy: &SizeOnlyPolicy, size: u64) -> SignalMap {
    let [smoothness, consistency] = policy.placeholder_scores;
    SignalMap::new()
        .with("Size", size_signal(policy, size))
        .with(
            "Smoothness",
            Signal::new(smoothness, "Not analyzed: frame smoothness placeholder"),
        )
        .with(
            "Consistency",
            Signal::new(consistency, "Not analyzed: temporal consistency placeholder"),
        )
}

/// Audio signals under `policy`.
pub fn audio_signals(policy: &SizeOnlyPolicy, size: u64) -> SignalMap {
    let [quality, patterns] = policy.placeholder_scores;
    SignalMap::new()
        .with(
            "Quality",
            Signal::new(quality, "Not analyzed: audio quality placeholder"),
        )
        .with("Size", size_signal(policy, size))
        .with(
            "Patterns",
            Signal::new(patterns, "Not analyzed: waveform pattern placeholder"),
        )
}

/// Video signals under the standard policy.
pub fn extract_video_signals(size: u64) -> SignalMap {
    video_signals(&STANDARD_VIDEO_POLICY, size)
}

/// Audio signals under the standard policy.
pub fn extract_audio_signals(size: u64) -> SignalMap {
    audio_signals(&STANDARD_AUDIO_POLICY, size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_video_size_threshold() {
        assert_eq!(extract_video_signals(4_999_999).get("Size").unwrap().score, 0.6);
        assert_eq!(extract_video_signals(5_000_000).get("Size").unwrap().score, 0.3);
    }

    #[test]
    fn test_audio_size_threshold() {
        assert_eq!(extract_audio_signals(999_999).get("Size").unwrap().score, 0.5);
        assert_eq!(extract_audio_signals(1_000_000).get("Size").unwrap().score, 0.2);
    }

    #[test]
    fn test_display_order_and_placeholders() {
        let video = extract_video_signals(12_345_678);
        assert_eq!(video.names(), vec!["Size", "Smoothness", "Consistency"]);
        assert_eq!(video.get("Size").unwrap().description, "12.3MB");
        assert_eq!(video.get("Smoothness").unwrap().score, 0.4);
        assert_eq!(video.get("Consistency").unwrap().score, 0.3);

        let audio = extract_audio_signals(0);
        assert_eq!(audio.names(), vec!["Quality", "Size", "Patterns"]);
        assert_eq!(audio.get("Size").unwrap().description, "0.0MB");
        assert!(audio.get("Patterns").unwrap().description.contains("placeholder"));
    }

    #[test]
    fn test_size_description_rounds_halves_up() {
        assert_eq!(extract_video_signals(250_000).get("Size").unwrap().description, "0.3MB");
        assert_eq!(extract_audio_signals(50_000).get("Size").unwrap().description, "0.1MB");
    }

    #[test]
    fn test_no_weights_or_metadata() {
        for map in [extract_video_signals(1), extract_audio_signals(1)] {
            assert_eq!(map.iter_all().count(), 3);
            assert!(map.iter().all(|(_, s)| s.weight.is_none()));
        }
    }

    #[test]
    fn test_pure_in_size() {
        assert_eq!(extract_video_signals(42), extract_video_signals(42));
        assert_eq!(extract_audio_signals(42), extract_audio_signals(42));
    }
}
