//! Analysis entry point: dispatch, aggregate, classify.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use serde::Serialize;

use crate::error::PatternError;
use crate::extract::{ImageExtractor, TextExtractor, audio_signals, video_signals};
use crate::policy::{
    ImagePolicy, RiskThresholds, STANDARD_AUDIO_POLICY, STANDARD_VIDEO_POLICY, SizeOnlyPolicy,
    TextPolicy,
};
use crate::scoring::{RiskLevel, aggregate};
use crate::signal::SignalMap;

/// Kind of media file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
    Audio,
}

impl MediaKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
            Self::Audio => "audio",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MediaKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "image" => Ok(Self::Image),
            "video" => Ok(Self::Video),
            "audio" => Ok(Self::Audio),
            _ => Err(format!(
                "invalid media kind '{}', expected 'image', 'video', or 'audio'",
                s
            )),
        }
    }
}

/// Raw input handed to the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentInput {
    Text(String),
    Media {
        filename: String,
        byte_size: u64,
        mime_type: String,
        kind: MediaKind,
    },
}

impl ContentInput {
    /// Upper-case label used as the report title.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Text(_) => "TEXT",
            Self::Media { kind, .. } => match kind {
                MediaKind::Image => "IMAGE",
                MediaKind::Video => "VIDEO",
                MediaKind::Audio => "AUDIO",
            },
        }
    }
}

/// Outcome of one analysis. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    label: String,
    signals: SignalMap,
    aggregate_score: u8,
    risk: RiskLevel,
}

impl AnalysisResult {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn signals(&self) -> &SignalMap {
        &self.signals
    }

    /// Aggregate score in `0..=100`.
    pub fn aggregate_score(&self) -> u8 {
        self.aggregate_score
    }

    pub fn risk(&self) -> RiskLevel {
        self.risk
    }
}

/// Runs the extractor for a content kind, then aggregates and classifies.
#[derive(Debug, Clone)]
pub struct Analyzer {
    text: TextExtractor,
    image: ImageExtractor,
    video: SizeOnlyPolicy,
    audio: SizeOnlyPolicy,
    risk: RiskThresholds,
}

impl Analyzer {
    /// Create an analyzer with the standard policy tables.
    pub fn new() -> Self {
        Self {
            text: TextExtractor::new(),
            image: ImageExtractor::new(),
            video: STANDARD_VIDEO_POLICY,
            audio: STANDARD_AUDIO_POLICY,
            risk: RiskThresholds::default(),
        }
    }

    /// Replace the text policy.
    pub fn with_text_policy(mut self, policy: TextPolicy) -> Result<Self, PatternError> {
        self.text = TextExtractor::with_policy(policy)?;
        Ok(self)
    }

    /// Replace the image policy.
    pub fn with_image_policy(mut self, policy: ImagePolicy) -> Result<Self, PatternError> {
        self.image = ImageExtractor::with_policy(policy)?;
        Ok(self)
    }

    /// Replace the video placeholder policy.
    pub fn with_video_policy(mut self, policy: SizeOnlyPolicy) -> Self {
        self.video = policy;
        self
    }

    /// Replace the audio placeholder policy.
    pub fn with_audio_policy(mut self, policy: SizeOnlyPolicy) -> Self {
        self.audio = policy;
        self
    }

    /// Replace the risk thresholds.
    pub fn with_risk_thresholds(mut self, thresholds: RiskThresholds) -> Self {
        self.risk = thresholds;
        self
    }

    /// Extract the signal map for `input` without scoring it.
    pub fn signals(&self, input: &ContentInput) -> SignalMap {
        match input {
            ContentInput::Text(text) => self.text.extract(text),
            ContentInput::Media {
                filename,
                byte_size,
                mime_type,
                kind,
            } => match kind {
                MediaKind::Image => self.image.extract(filename, *byte_size, mime_type),
                MediaKind::Video => video_signals(&self.video, *byte_size),
                MediaKind::Audio => audio_signals(&self.audio, *byte_size),
            },
        }
    }

    /// Analyze `input`.
    pub fn analyze(&self, input: &ContentInput) -> AnalysisResult {
        let signals = self.signals(input);
        let aggregate_score = aggregate(&signals);
        let risk = RiskLevel::from_score(aggregate_score, &self.risk);

        tracing::debug!(
            label = input.label(),
            signals = signals.len(),
            score = aggregate_score,
            risk = %risk,
            "Analysis complete"
        );

        AnalysisResult {
            label: input.label().to_string(),
            signals,
            aggregate_score,
            risk,
        }
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

static STANDARD: LazyLock<Analyzer> = LazyLock::new(Analyzer::new);

/// Analyze `input` with the standard policy tables.
pub fn analyze(input: &ContentInput) -> AnalysisResult {
    STANDARD.analyze(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::{STANDARD_TEXT_POLICY, SizeBands};

    fn media(filename: &str, byte_size: u64, mime_type: &str, kind: MediaKind) -> ContentInput {
        ContentInput::Media {
            filename: filename.to_string(),
            byte_size,
            mime_type: mime_type.to_string(),
            kind,
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(ContentInput::Text("x".into()).label(), "TEXT");
        assert_eq!(media("a.mp4", 1, "video/mp4", MediaKind::Video).label(), "VIDEO");
        assert_eq!(media("a.mp3", 1, "audio/mpeg", MediaKind::Audio).label(), "AUDIO");
    }

    #[test]
    fn test_short_text_is_medium() {
        let result = analyze(&ContentInput::Text("hello there".into()));
        assert_eq!(result.label(), "TEXT");
        assert_eq!(result.aggregate_score(), 50);
        assert_eq!(result.risk(), RiskLevel::Medium);
    }

    #[test]
    fn test_image_uses_composite() {
        let result = analyze(&media("IMG_1234.jpg", 2_000_000, "image/jpeg", MediaKind::Image));
        assert_eq!(result.aggregate_score(), 20);
        assert_eq!(result.risk(), RiskLevel::Low);
        assert_eq!(result.signals().len(), 5);
    }

    #[test]
    fn test_video_and_audio_simple_average() {
        let small_video = analyze(&media("clip.mp4", 1_000_000, "video/mp4", MediaKind::Video));
        assert_eq!(small_video.aggregate_score(), 43);
        assert_eq!(small_video.risk(), RiskLevel::Medium);

        let large_video = analyze(&media("clip.mp4", 9_000_000, "video/mp4", MediaKind::Video));
        assert_eq!(large_video.aggregate_score(), 33);

        let small_audio = analyze(&media("a.mp3", 10, "audio/mpeg", MediaKind::Audio));
        assert_eq!(small_audio.aggregate_score(), 40);

        let large_audio = analyze(&media("a.mp3", 2_000_000, "audio/mpeg", MediaKind::Audio));
        assert_eq!(large_audio.aggregate_score(), 30);
        assert_eq!(large_audio.risk(), RiskLevel::Low);
    }

    #[test]
    fn test_custom_risk_thresholds() {
        let analyzer = Analyzer::new().with_risk_thresholds(RiskThresholds {
            high_min: 45,
            medium_min: 10,
        });
        let result = analyzer.analyze(&ContentInput::Text("hello there".into()));
        assert_eq!(result.risk(), RiskLevel::High);
    }

    #[test]
    fn test_custom_image_policy() {
        let policy = ImagePolicy {
            size_bands: SizeBands {
                very_small_below: 10,
                small_below: 20,
                large_above: 30,
            },
            ..ImagePolicy::default()
        };
        let analyzer = Analyzer::new().with_image_policy(policy).unwrap();
        let signals = analyzer.signals(&media("cat.png", 100, "image/png", MediaKind::Image));
        assert_eq!(signals.get("File Size").unwrap().score, 0.1);
    }

    #[test]
    fn test_invalid_custom_text_policy() {
        let policy = TextPolicy {
            passive_voice_pattern: "(unclosed",
            ..STANDARD_TEXT_POLICY
        };
        assert!(Analyzer::new().with_text_policy(policy).is_err());
    }

    #[test]
    fn test_media_kind_parsing() {
        assert_eq!("IMAGE".parse::<MediaKind>(), Ok(MediaKind::Image));
        assert_eq!("audio".parse::<MediaKind>(), Ok(MediaKind::Audio));
        assert!("text".parse::<MediaKind>().is_err());
    }

    #[test]
    fn test_result_serializes() {
        let result = analyze(&media("clip.mp4", 1_000_000, "video/mp4", MediaKind::Video));
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["label"], "VIDEO");
        assert_eq!(json["aggregate_score"], 43);
        assert_eq!(json["risk"], "medium");
        assert_eq!(json["signals"]["Size"]["description"], "1.0MB");
    }
}
