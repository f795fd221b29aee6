//! Metadata signals for images.
//!
//! Only the filename, byte size and MIME type are inspected. Two scores are
//! derived per feature: a weighted composite term and a display score. They
//! use different scales and can disagree for the same input; the composite is
//! what the aggregate score reports, the display scores are what the report
//! shows per signal.

use regex::Regex;
use serde::Serialize;

use crate::error::PatternError;
use crate::extract::phrases::PhraseSet;
use crate::extract::{to_fixed, utf16_len};
use crate::policy::{Contribution, ImagePolicy, SizeBand};
use crate::signal::{FINAL_WEIGHTED_SCORE, Signal, SignalMap};

/// Image container format, as declared by the MIME type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageFormat {
    Jpeg,
    Png,
    WebP,
    Other,
}

impl ImageFormat {
    pub fn from_mime(mime: &str) -> Self {
        let mime = mime.trim();
        if mime.eq_ignore_ascii_case("image/jpeg") {
            Self::Jpeg
        } else if mime.eq_ignore_ascii_case("image/png") {
            Self::Png
        } else if mime.eq_ignore_ascii_case("image/webp") {
            Self::WebP
        } else {
            Self::Other
        }
    }
}

/// Boolean features derived from image metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageTraits {
    pub ai_marker: bool,
    pub screenshot: bool,
    pub personal_keyword: bool,
    pub camera_keyword: bool,
    pub format: ImageFormat,
    pub size_bytes: u64,
    pub size_band: SizeBand,
    pub generic_name: bool,
    pub multi_word_name: bool,
    pub long_name: bool,
}

impl ImageTraits {
    /// A large JPEG, the typical shape of a camera original.
    pub fn camera_format(&self) -> bool {
        self.format == ImageFormat::Jpeg && self.size_band == SizeBand::Large
    }

    pub fn custom_name(&self) -> bool {
        !self.generic_name
    }
}

/// One weighted term of the image composite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompositeTerm {
    pub feature: &'static str,
    pub contribution: Contribution,
}

/// `Σ(value·weight) / Σweight`; zero for an empty or weightless set.
pub fn weighted_mean(terms: &[CompositeTerm]) -> f64 {
    let weight: f64 = terms.iter().map(|t| t.contribution.weight).sum();
    if weight <= 0.0 {
        return 0.0;
    }
    terms
        .iter()
        .map(|t| t.contribution.value * t.contribution.weight)
        .sum::<f64>()
        / weight
}

/// Extracts metadata signals from images.
#[derive(Debug, Clone)]
pub struct ImageExtractor {
    policy: ImagePolicy,
    ai_tools: PhraseSet,
    screenshot: PhraseSet,
    personal: PhraseSet,
    camera: PhraseSet,
    generic_name: Regex,
    word_run: Regex,
}

impl ImageExtractor {
    /// Create an extractor with the standard policy.
    pub fn new() -> Self {
        Self::with_policy(ImagePolicy::default()).expect("standard image policy must build")
    }

    /// Create an extractor with a custom policy.
    pub fn with_policy(policy: ImagePolicy) -> Result<Self, PatternError> {
        Ok(Self {
            ai_tools: PhraseSet::new(policy.ai_tool_keywords)?,
            screenshot: PhraseSet::new(policy.screenshot_keywords)?,
            personal: PhraseSet::new(policy.personal_keywords)?,
            camera: PhraseSet::new(policy.camera_keywords)?,
            generic_name: Regex::new(policy.generic_name_pattern)?,
            word_run: Regex::new(policy.word_run_pattern)?,
            policy,
        })
    }

    pub fn policy(&self) -> &ImagePolicy {
        &self.policy
    }

    /// Derive the boolean features of an image.
    pub fn traits(&self, filename: &str, size: u64, mime_type: &str) -> ImageTraits {
        let name = filename.to_lowercase();
        ImageTraits {
            ai_marker: self.ai_tools.is_match(&name),
            screenshot: self.screenshot.is_match(&name)
                || mime_type.trim().eq_ignore_ascii_case(self.policy.screenshot_mime),
            personal_keyword: self.personal.is_match(&name),
            camera_keyword: self.camera.is_match(&name),
            format: ImageFormat::from_mime(mime_type),
            size_bytes: size,
            size_band: self.policy.size_bands.classify(size),
            generic_name: self.generic_name.is_match(&name),
            multi_word_name: self.word_run.find_iter(&name).nth(1).is_some(),
            long_name: utf16_len(&name) > self.policy.long_name_chars,
        }
    }

    /// Weighted composite terms for `traits`, one per applicable feature.
    ///
    /// Features with no applicable branch (an unrecognized format, a size
    /// exactly on a band edge) contribute nothing and carry no weight.
    pub fn composite(&self, traits: &ImageTraits) -> Vec<CompositeTerm> {
        let c = &self.policy.composite;
        let mut terms = Vec::with_capacity(6);
        let mut push = |feature, contribution| {
            terms.push(CompositeTerm {
                feature,
                contribution,
            })
        };

        push(
            "AI markers",
            if traits.ai_marker {
                c.ai_marker_present
            } else {
                c.ai_marker_absent
            },
        );

        match traits.format {
            ImageFormat::Jpeg => push("Format", c.format_jpeg),
            ImageFormat::Png | ImageFormat::WebP => push("Format", c.format_png_webp),
            ImageFormat::Other => {}
        }

        match traits.size_band {
            SizeBand::Large => push("Size", c.size_large),
            SizeBand::Medium => push("Size", c.size_medium),
            SizeBand::Small => push("Size", c.size_small),
            SizeBand::VerySmall => push("Size", c.size_very_small),
            SizeBand::Unbanded => {}
        }

        let source = if traits.camera_format() && traits.camera_keyword {
            c.source_camera_photo
        } else if traits.camera_format() {
            c.source_camera_format
        } else if traits.personal_keyword && traits.format == ImageFormat::Jpeg {
            c.source_personal_jpeg
        } else if !traits.screenshot {
            c.source_unknown
        } else {
            c.source_screenshot
        };
        push("Source authenticity", source);

        let name = if traits.custom_name() && traits.multi_word_name && traits.long_name {
            c.name_descriptive
        } else if traits.custom_name() && traits.multi_word_name {
            c.name_multi_word
        } else if traits.custom_name() {
            c.name_custom
        } else {
            c.name_generic
        };
        push("Filename", name);

        if traits.screenshot {
            push("Screenshot", c.screenshot);
        }

        terms
    }

    /// Extract the image signal map: five display signals plus the composite
    /// stored under [`FINAL_WEIGHTED_SCORE`].
    pub fn extract(&self, filename: &str, size: u64, mime_type: &str) -> SignalMap {
        let traits = self.traits(filename, size, mime_type);
        let terms = self.composite(&traits);
        let composite = weighted_mean(&terms);
        tracing::trace!(?traits, composite, "Derived image traits");

        let d = &self.policy.display;

        let (ai_score, ai_text) = if traits.ai_marker {
            (d.ai_marker_present, "Filename indicates AI tool")
        } else {
            (d.ai_marker_absent, "No AI markers")
        };

        let (format_score, format_text) = match traits.format {
            ImageFormat::Jpeg => (d.format_jpeg, "JPEG (camera source)"),
            ImageFormat::Png => (d.format_png, "PNG (common for AI/graphics)"),
            ImageFormat::WebP => (d.format_webp, "Other format"),
            ImageFormat::Other => (d.format_other, "Other format"),
        };

        let (size_score, size_text) = match traits.size_band {
            SizeBand::Large => (d.size_large, "typical camera photo"),
            SizeBand::Medium => (d.size_medium, "common for AI-generated"),
            SizeBand::Small => (d.size_small, "suspicious compression"),
            SizeBand::VerySmall | SizeBand::Unbanded => (d.size_other, "suspicious compression"),
        };

        let (source_score, source_text) = if traits.camera_format() && traits.camera_keyword {
            (d.source_camera_photo, "Camera photo indicators")
        } else if !traits.screenshot {
            (d.source_generic, "Generic/AI-suspicious")
        } else {
            (d.source_screenshot, "Screenshot format")
        };

        let (name_score, name_text) =
            if traits.custom_name() && traits.multi_word_name && traits.long_name {
                (d.name_descriptive, "Authentic descriptive name")
            } else if traits.custom_name() {
                // Short multi-word names score apart but share this description.
                let score = if traits.multi_word_name {
                    d.name_multi_word
                } else {
                    d.name_custom
                };
                (score, "Custom single-word name")
            } else {
                (d.name_generic, "Generic/auto-generated name")
            };

        SignalMap::new()
            .with("AI Tool Markers", Signal::new(ai_score, ai_text))
            .with("Format & Type", Signal::new(format_score, format_text))
            .with(
                "File Size",
                Signal::new(
                    size_score,
                    format!(
                        "Size: {}KB - {}",
                        to_fixed(size as f64 / 1000.0, 0),
                        size_text
                    ),
                ),
            )
            .with("Source Authenticity", Signal::new(source_score, source_text))
            .with("Filename Analysis", Signal::new(name_score, name_text))
            .with(
                FINAL_WEIGHTED_SCORE,
                Signal::new(composite, "Weighted composite"),
            )
    }
}

impl Default for ImageExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn term(terms: &[CompositeTerm], feature: &str) -> Option<Contribution> {
        terms
            .iter()
            .find(|t| t.feature == feature)
            .map(|t| t.contribution)
    }

    #[test]
    fn test_camera_jpeg_golden() {
        let extractor = ImageExtractor::new();
        let traits = extractor.traits("IMG_1234.jpg", 2_000_000, "image/jpeg");

        assert!(!traits.ai_marker);
        assert!(traits.generic_name);
        assert!(traits.camera_format());
        assert!(!traits.camera_keyword);

        let terms = extractor.composite(&traits);
        let c = extractor.policy().composite;
        assert_eq!(term(&terms, "AI markers"), Some(c.ai_marker_absent));
        assert_eq!(term(&terms, "Format"), Some(c.format_jpeg));
        assert_eq!(term(&terms, "Size"), Some(c.size_large));
        assert_eq!(term(&terms, "Source authenticity"), Some(c.source_camera_format));
        assert_eq!(term(&terms, "Filename"), Some(c.name_generic));
        assert_eq!(term(&terms, "Screenshot"), None);

        // (0.2 + 0.45 + 0.2 + 0.3 + 1.5) / 13
        let signals = extractor.extract("IMG_1234.jpg", 2_000_000, "image/jpeg");
        let composite = signals.final_weighted_score().unwrap();
        assert!((composite - 2.65 / 13.0).abs() < 1e-9);
    }

    #[test]
    fn test_ai_tool_png() {
        let extractor = ImageExtractor::new();
        let signals = extractor.extract("midjourney_output.png", 50_000, "image/png");

        assert_eq!(signals.get("AI Tool Markers").unwrap().score, 0.95);
        assert_eq!(signals.get("File Size").unwrap().score, 0.70);
        // (3.8 + 3.0 + 2.25 + 2.1 + 0.3) / 16
        let composite = signals.final_weighted_score().unwrap();
        assert!((composite - 11.45 / 16.0).abs() < 1e-9);
    }

    #[test]
    fn test_tiny_files_take_small_branch() {
        let extractor = ImageExtractor::new();
        for size in [0, 1_000, 79_999, 80_000, 299_999] {
            let traits = extractor.traits("cat.png", size, "image/png");
            assert_eq!(traits.size_band, SizeBand::Small, "size {}", size);
            assert_eq!(
                term(&extractor.composite(&traits), "Size"),
                Some(extractor.policy().composite.size_small)
            );
            let signals = extractor.extract("cat.png", size, "image/png");
            assert_eq!(signals.get("File Size").unwrap().score, 0.70);
        }
    }

    #[test]
    fn test_webp_and_short_name_descriptions() {
        let extractor = ImageExtractor::new();

        let webp = extractor.extract("cat.webp", 500_000, "image/webp");
        let format = webp.get("Format & Type").unwrap();
        assert_eq!(format.score, 0.60);
        assert_eq!(format.description, "Other format");

        let short = extractor.extract("red_car.png", 500_000, "image/png");
        let name = short.get("Filename Analysis").unwrap();
        assert_eq!(name.score, 0.35);
        assert_eq!(name.description, "Custom single-word name");
    }

    #[test]
    fn test_display_order() {
        let signals = ImageExtractor::new().extract("cat.png", 500_000, "image/png");
        assert_eq!(
            signals.names(),
            vec![
                "AI Tool Markers",
                "Format & Type",
                "File Size",
                "Source Authenticity",
                "Filename Analysis",
            ]
        );
    }

    #[test]
    fn test_screenshot_adds_extra_term() {
        let extractor = ImageExtractor::new();
        let traits = extractor.traits("Screenshot 2024-01-01.png", 500_000, "image/png");
        assert!(traits.screenshot);
        assert_eq!(traits.size_band, SizeBand::Medium);

        let terms = extractor.composite(&traits);
        let c = extractor.policy().composite;
        assert_eq!(term(&terms, "Source authenticity"), Some(c.source_screenshot));
        assert_eq!(term(&terms, "Filename"), Some(c.name_descriptive));
        assert_eq!(term(&terms, "Screenshot"), Some(c.screenshot));
        // (0.2 + 3.0 + 1.95 + 0.1 + 0.3 + 0.1) / 17
        assert!((weighted_mean(&terms) - 5.65 / 17.0).abs() < 1e-9);

        let signals = extractor.extract("Screenshot 2024-01-01.png", 500_000, "image/png");
        assert_eq!(signals.get("Source Authenticity").unwrap().description, "Screenshot format");
    }

    #[test]
    fn test_bmp_counts_as_screenshot() {
        let extractor = ImageExtractor::new();
        let traits = extractor.traits("diagram.bmp", 900_000, "image/bmp");
        assert!(traits.screenshot);
        assert_eq!(traits.format, ImageFormat::Other);
        assert_eq!(term(&extractor.composite(&traits), "Format"), None);
    }

    #[test]
    fn test_band_edge_contributes_nothing() {
        let extractor = ImageExtractor::new();
        let traits = extractor.traits("logo.png", 300_000, "image/png");
        assert_eq!(traits.size_band, SizeBand::Unbanded);

        let terms = extractor.composite(&traits);
        assert_eq!(term(&terms, "Size"), None);
        let weight: f64 = terms.iter().map(|t| t.contribution.weight).sum();
        assert_eq!(weight, 13.0);

        let signals = extractor.extract("logo.png", 300_000, "image/png");
        assert_eq!(signals.get("File Size").unwrap().score, 0.80);
    }

    #[test]
    fn test_personal_jpeg_branch() {
        let extractor = ImageExtractor::new();
        let traits = extractor.traits("me_at_the_beach.jpg", 500_000, "image/jpeg");
        assert!(traits.personal_keyword);
        assert!(!traits.camera_format());
        assert_eq!(
            term(&extractor.composite(&traits), "Source authenticity"),
            Some(extractor.policy().composite.source_personal_jpeg)
        );
    }

    #[test]
    fn test_camera_keyword_large_jpeg() {
        let extractor = ImageExtractor::new();
        let signals = extractor.extract("canon_eos_lake.jpg", 4_000_000, "image/jpeg");
        let source = signals.get("Source Authenticity").unwrap();
        assert_eq!(source.score, 0.05);
        assert_eq!(source.description, "Camera photo indicators");
    }

    #[test]
    fn test_display_and_composite_scales_differ() {
        let extractor = ImageExtractor::new();
        let signals = extractor.extract("cat.png", 500_000, "image/png");
        let traits = extractor.traits("cat.png", 500_000, "image/png");

        let display = signals.get("Format & Type").unwrap().score;
        let composite = term(&extractor.composite(&traits), "Format").unwrap().value;
        assert_eq!(display, 0.65);
        assert_eq!(composite, 0.75);
    }

    #[test]
    fn test_filename_ladder() {
        let extractor = ImageExtractor::new();
        let name = |filename: &str| {
            extractor
                .extract(filename, 500_000, "image/png")
                .get("Filename Analysis")
                .unwrap()
                .score
        };
        assert_eq!(name("sunset_over_the_harbor.png"), 0.15);
        assert_eq!(name("red_car.png"), 0.35);
        assert_eq!(name("x1.png"), 0.50);
        assert_eq!(name("unnamed.png"), 0.70);
        assert_eq!(name("image-42.png"), 0.70);
    }

    #[test]
    fn test_size_description() {
        let extractor = ImageExtractor::new();
        let signals = extractor.extract("cat.png", 512_400, "image/png");
        assert_eq!(
            signals.get("File Size").unwrap().description,
            "Size: 512KB - common for AI-generated"
        );

        let signals = extractor.extract("cat.png", 2_500, "image/png");
        assert_eq!(
            signals.get("File Size").unwrap().description,
            "Size: 3KB - suspicious compression"
        );
    }

    #[test]
    fn test_malformed_mime_degrades() {
        let extractor = ImageExtractor::new();
        let signals = extractor.extract("", 0, "not a mime");
        assert_eq!(signals.get("Format & Type").unwrap().score, 0.5);
        assert!(signals.final_weighted_score().unwrap().is_finite());
    }
}
