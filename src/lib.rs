//! Heuristic scoring of how likely a piece of content is machine generated.
//!
//! Each content kind has an extractor that turns raw input into a
//! [`SignalMap`] of named heuristic scores. The aggregator folds a map into a
//! single score in `0..=100` and the classifier buckets that score into a
//! [`RiskLevel`].
//!
//! ```
//! use synthscore::{ContentInput, RiskLevel, analyze};
//!
//! let result = analyze(&ContentInput::Text("hi".into()));
//! assert_eq!(result.aggregate_score(), 50);
//! assert_eq!(result.risk(), RiskLevel::Medium);
//! ```
//!
//! Scores are heuristics and produce false positives; treat them as a hint.

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod policy;
pub mod render;
pub mod scoring;
pub mod signal;
pub mod validate;

pub use analysis::{AnalysisResult, Analyzer, ContentInput, MediaKind, analyze};
pub use config::Config;
pub use error::{Error, Result};
pub use extract::{
    extract_audio_signals, extract_image_signals, extract_text_signals, extract_video_signals,
};
pub use scoring::{RiskLevel, aggregate, classify_risk};
pub use signal::{FINAL_WEIGHTED_SCORE, Signal, SignalMap};
