//! Heuristic signal extractors, one per content kind.
//!
//! Every extractor is a pure function of its input: no I/O, no state carried
//! between calls. The free functions use the standard policy tables; build an
//! extractor with `with_policy` to score against different tables.

mod image;
mod media;
mod phrases;
mod text;

use std::sync::LazyLock;

pub use image::{CompositeTerm, ImageExtractor, ImageFormat, ImageTraits, weighted_mean};
pub use media::{audio_signals, extract_audio_signals, extract_video_signals, video_signals};
pub use phrases::PhraseSet;
pub use text::{LENGTH_SIGNAL, TextExtractor, TextStats};

use crate::signal::SignalMap;

static TEXT: LazyLock<TextExtractor> = LazyLock::new(TextExtractor::new);
static IMAGE: LazyLock<ImageExtractor> = LazyLock::new(ImageExtractor::new);

/// Text signals under the standard policy.
pub fn extract_text_signals(text: &str) -> SignalMap {
    TEXT.extract(text)
}

/// Image signals under the standard policy.
pub fn extract_image_signals(filename: &str, size: u64, mime_type: &str) -> SignalMap {
    IMAGE.extract(filename, size, mime_type)
}

/// Format `value` with `digits` decimals, rounding halves away from zero.
///
/// `format!("{:.1}")` rounds halves to even, which would print 2.5 KB as `2`.
pub(crate) fn to_fixed(value: f64, digits: u8) -> String {
    let scale = 10f64.powi(i32::from(digits));
    format!("{:.*}", usize::from(digits), (value * scale).round() / scale)
}

/// Length in UTF-16 code units, the unit the character thresholds are
/// calibrated in. Characters outside the BMP count twice.
pub(crate) fn utf16_len(s: &str) -> usize {
    s.encode_utf16().count()
}
