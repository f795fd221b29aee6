//! Scoring policy tables.
//!
//! Every phrase list, keyword list, threshold and weight used by the
//! extractors lives here as named data. The `STANDARD_*` constants are the
//! shipped policy; extractors accept any other table with the same shape.

/// Comparison applied by a [`Rung`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    /// Value strictly below the limit.
    Below(f64),
    /// Value strictly above the limit.
    Above(f64),
}

impl Bound {
    fn holds(self, value: f64) -> bool {
        match self {
            Self::Below(limit) => value < limit,
            Self::Above(limit) => value > limit,
        }
    }
}

/// One step of a threshold ladder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rung {
    pub bound: Bound,
    pub score: f64,
}

/// Threshold ladder: the first rung whose bound holds wins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ladder {
    pub rungs: &'static [Rung],
    /// Score when no rung holds. NaN measurements always land here.
    pub otherwise: f64,
}

impl Ladder {
    /// Score a measured value.
    pub fn score(&self, value: f64) -> f64 {
        self.rungs
            .iter()
            .find(|rung| rung.bound.holds(value))
            .map_or(self.otherwise, |rung| rung.score)
    }
}

/// The AI-cliché ladder mixes a ratio rung with a raw count rung.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClicheLadder {
    pub ratio_above: f64,
    pub ratio_score: f64,
    pub count_above: usize,
    pub count_score: f64,
    pub otherwise: f64,
}

impl ClicheLadder {
    /// Score `hits` distinct clichés out of a list of `total`.
    pub fn score(&self, hits: usize, total: usize) -> f64 {
        let ratio = if total == 0 {
            0.0
        } else {
            hits as f64 / total as f64
        };
        if ratio > self.ratio_above {
            self.ratio_score
        } else if hits > self.count_above {
            self.count_score
        } else {
            self.otherwise
        }
    }
}

/// Per-signal weights of the text composite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextWeights {
    pub uniformity: f64,
    pub corporate: f64,
    pub cliches: f64,
    pub passive: f64,
    pub repetition: f64,
    pub transitions: f64,
    pub hedging: f64,
}

impl TextWeights {
    pub fn total(&self) -> f64 {
        self.uniformity
            + self.corporate
            + self.cliches
            + self.passive
            + self.repetition
            + self.transitions
            + self.hedging
    }
}

/// Lexical policy for text analysis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextPolicy {
    /// Texts shorter than this many UTF-16 code units (after trimming) get a
    /// single length signal.
    pub min_chars: usize,
    pub short_text_score: f64,
    pub corporate_phrases: &'static [&'static str],
    pub ai_cliches: &'static [&'static str],
    pub transition_words: &'static [&'static str],
    pub hedge_words: &'static [&'static str],
    /// Counted per sentence to estimate passive constructions.
    pub passive_voice_pattern: &'static str,
    /// Scored on the variance of sentence word counts.
    pub uniformity: Ladder,
    /// Scored on the share of corporate phrases present.
    pub corporate: Ladder,
    pub cliches: ClicheLadder,
    /// Scored on passive matches per sentence.
    pub passive: Ladder,
    /// Scored on lexical diversity (unique / total words).
    pub repetition: Ladder,
    /// Scored on the number of transition words present.
    pub transitions: Ladder,
    /// Scored on the number of hedge words present.
    pub hedging: Ladder,
    pub weights: TextWeights,
}

pub const CORPORATE_PHRASES: [&str; 19] = [
    "important part",
    "many companies",
    "improve efficiency",
    "reduce costs",
    "enhance decision",
    "large amounts",
    "provide insights",
    "continue to",
    "must learn",
    "integrate",
    "maintain",
    "essential",
    "crucial",
    "business needs",
    "modern organization",
    "continue to develop",
    "responsible",
    "maintain ethical",
    "decision-making",
];

pub const AI_CLICHES: [&str; 11] = [
    "ai tools",
    "artificial intelligence",
    "continues to",
    "responsibly",
    "ethical standard",
    "enhance",
    "efficiency",
    "insights",
    "technology develop",
    "learn how to",
    "important role",
];

pub const TRANSITION_WORDS: [&str; 12] = [
    "however",
    "moreover",
    "furthermore",
    "therefore",
    "consequently",
    "additionally",
    "notably",
    "particularly",
    "essentially",
    "clearly",
    "obviously",
    "importantly",
];

pub const HEDGE_WORDS: [&str; 14] = [
    "important",
    "significant",
    "crucial",
    "essential",
    "key",
    "critical",
    "vital",
    "major",
    "potential",
    "appear to",
    "seem to",
    "may",
    "might",
    "could",
];

pub const STANDARD_TEXT_POLICY: TextPolicy = TextPolicy {
    min_chars: 30,
    short_text_score: 0.5,
    corporate_phrases: &CORPORATE_PHRASES,
    ai_cliches: &AI_CLICHES,
    transition_words: &TRANSITION_WORDS,
    hedge_words: &HEDGE_WORDS,
    passive_voice_pattern: r"(?i)\b(?:is|are|be|being|been)\s+\w+(?:ed|ing)\b",
    uniformity: Ladder {
        rungs: &[
            Rung { bound: Bound::Below(15.0), score: 0.75 },
            Rung { bound: Bound::Below(30.0), score: 0.4 },
        ],
        otherwise: 0.15,
    },
    corporate: Ladder {
        rungs: &[
            Rung { bound: Bound::Above(0.4), score: 0.80 },
            Rung { bound: Bound::Above(0.0), score: 0.5 },
        ],
        otherwise: 0.1,
    },
    cliches: ClicheLadder {
        ratio_above: 0.3,
        ratio_score: 0.85,
        count_above: 1,
        count_score: 0.65,
        otherwise: 0.2,
    },
    passive: Ladder {
        rungs: &[
            Rung { bound: Bound::Above(1.5), score: 0.70 },
            Rung { bound: Bound::Above(0.5), score: 0.45 },
        ],
        otherwise: 0.1,
    },
    repetition: Ladder {
        rungs: &[
            Rung { bound: Bound::Above(0.7), score: 0.1 },
            Rung { bound: Bound::Above(0.5), score: 0.3 },
        ],
        otherwise: 0.6,
    },
    transitions: Ladder {
        rungs: &[
            Rung { bound: Bound::Above(2.0), score: 0.70 },
            Rung { bound: Bound::Above(0.0), score: 0.3 },
        ],
        otherwise: 0.05,
    },
    hedging: Ladder {
        rungs: &[
            Rung { bound: Bound::Above(5.0), score: 0.75 },
            Rung { bound: Bound::Above(2.0), score: 0.55 },
        ],
        otherwise: 0.15,
    },
    weights: TextWeights {
        uniformity: 3.0,
        corporate: 3.0,
        cliches: 4.0,
        passive: 2.0,
        repetition: 2.0,
        transitions: 2.0,
        hedging: 2.0,
    },
};

impl Default for TextPolicy {
    fn default() -> Self {
        STANDARD_TEXT_POLICY
    }
}

/// Size band of a media file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SizeBand {
    VerySmall,
    Small,
    Medium,
    Large,
    /// Exactly on a medium boundary; no band applies.
    Unbanded,
}

/// Byte limits separating the image size bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeBands {
    pub very_small_below: u64,
    pub small_below: u64,
    pub large_above: u64,
}

impl SizeBands {
    /// Classify a byte size. Bands are checked largest first: large, medium
    /// (open on both ends), small, then very small. With the standard limits
    /// everything under `small_below` is small, so very small is only reached
    /// when `very_small_below` exceeds `small_below`.
    pub fn classify(&self, size: u64) -> SizeBand {
        if size > self.large_above {
            SizeBand::Large
        } else if size > self.small_below && size < self.large_above {
            SizeBand::Medium
        } else if size < self.small_below {
            SizeBand::Small
        } else if size < self.very_small_below {
            SizeBand::VerySmall
        } else {
            SizeBand::Unbanded
        }
    }
}

/// A `value × weight` term of the image composite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contribution {
    pub value: f64,
    pub weight: f64,
}

const fn contribution(value: f64, weight: f64) -> Contribution {
    Contribution { value, weight }
}

/// Composite terms, one per branch of each image feature ladder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageComposite {
    pub ai_marker_present: Contribution,
    pub ai_marker_absent: Contribution,
    pub format_jpeg: Contribution,
    pub format_png_webp: Contribution,
    pub size_large: Contribution,
    pub size_medium: Contribution,
    pub size_small: Contribution,
    pub size_very_small: Contribution,
    pub source_camera_photo: Contribution,
    pub source_camera_format: Contribution,
    pub source_personal_jpeg: Contribution,
    pub source_unknown: Contribution,
    pub source_screenshot: Contribution,
    pub name_descriptive: Contribution,
    pub name_multi_word: Contribution,
    pub name_custom: Contribution,
    pub name_generic: Contribution,
    pub screenshot: Contribution,
}

/// Scores of the displayed image signals. These use their own scale and are
/// not the composite contributions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageDisplayScores {
    pub ai_marker_present: f64,
    pub ai_marker_absent: f64,
    pub format_jpeg: f64,
    pub format_png: f64,
    pub format_webp: f64,
    pub format_other: f64,
    pub size_large: f64,
    pub size_medium: f64,
    pub size_small: f64,
    pub size_other: f64,
    pub source_camera_photo: f64,
    pub source_generic: f64,
    pub source_screenshot: f64,
    pub name_descriptive: f64,
    pub name_multi_word: f64,
    pub name_custom: f64,
    pub name_generic: f64,
}

/// Metadata policy for image analysis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImagePolicy {
    pub ai_tool_keywords: &'static [&'static str],
    pub screenshot_keywords: &'static [&'static str],
    /// MIME type that always counts as a screenshot.
    pub screenshot_mime: &'static str,
    pub personal_keywords: &'static [&'static str],
    pub camera_keywords: &'static [&'static str],
    /// Auto-generated names such as `image123`, `img-1` or `unnamed`.
    pub generic_name_pattern: &'static str,
    /// A filename with at least two matches counts as multi-word.
    pub word_run_pattern: &'static str,
    /// Filenames longer than this many UTF-16 code units count as long.
    pub long_name_chars: usize,
    pub size_bands: SizeBands,
    pub composite: ImageComposite,
    pub display: ImageDisplayScores,
}

pub const AI_TOOL_KEYWORDS: [&str; 8] = [
    "chatgpt",
    "midjourney",
    "dall-e",
    "ai_generated",
    "stable",
    "generator",
    "openai",
    "replicate",
];

pub const SCREENSHOT_KEYWORDS: [&str; 5] =
    ["screenshot", "screen shot", "screencap", "snap", "screen grab"];

pub const PERSONAL_KEYWORDS: [&str; 8] = [
    "friend", "family", "me", "selfie", "person", "portrait", "profile", "pic",
];

pub const CAMERA_KEYWORDS: [&str; 6] = ["photo", "real", "camera", "canon", "nikon", "sony"];

pub const STANDARD_IMAGE_POLICY: ImagePolicy = ImagePolicy {
    ai_tool_keywords: &AI_TOOL_KEYWORDS,
    screenshot_keywords: &SCREENSHOT_KEYWORDS,
    screenshot_mime: "image/bmp",
    personal_keywords: &PERSONAL_KEYWORDS,
    camera_keywords: &CAMERA_KEYWORDS,
    generic_name_pattern: r"(?i)^(?:image[_-]?\d+|photo[_-]?\d+|unnamed|img[_-]?\d+|picture[_-]?\d+)",
    word_run_pattern: r"[a-zA-Z]{3,}",
    long_name_chars: 15,
    size_bands: SizeBands {
        very_small_below: 80_000,
        small_below: 300_000,
        large_above: 1_500_000,
    },
    composite: ImageComposite {
        ai_marker_present: contribution(0.95, 4.0),
        ai_marker_absent: contribution(0.05, 4.0),
        format_jpeg: contribution(0.15, 3.0),
        format_png_webp: contribution(0.75, 4.0),
        size_large: contribution(0.10, 2.0),
        size_medium: contribution(0.65, 3.0),
        size_small: contribution(0.75, 3.0),
        size_very_small: contribution(0.85, 3.0),
        source_camera_photo: contribution(0.05, 3.0),
        source_camera_format: contribution(0.15, 2.0),
        source_personal_jpeg: contribution(0.35, 2.0),
        source_unknown: contribution(0.70, 3.0),
        source_screenshot: contribution(0.05, 2.0),
        name_descriptive: contribution(0.15, 2.0),
        name_multi_word: contribution(0.40, 2.0),
        name_custom: contribution(0.55, 2.0),
        name_generic: contribution(0.75, 2.0),
        screenshot: contribution(0.05, 2.0),
    },
    display: ImageDisplayScores {
        ai_marker_present: 0.95,
        ai_marker_absent: 0.05,
        format_jpeg: 0.1,
        format_png: 0.65,
        format_webp: 0.60,
        format_other: 0.5,
        size_large: 0.1,
        size_medium: 0.55,
        size_small: 0.70,
        size_other: 0.80,
        source_camera_photo: 0.05,
        source_generic: 0.60,
        source_screenshot: 0.05,
        name_descriptive: 0.15,
        name_multi_word: 0.35,
        name_custom: 0.50,
        name_generic: 0.70,
    },
};

impl Default for ImagePolicy {
    fn default() -> Self {
        STANDARD_IMAGE_POLICY
    }
}

/// Size-only placeholder policy shared by video and audio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeOnlyPolicy {
    /// Files strictly smaller than this get `small_score`.
    pub small_below: u64,
    pub small_score: f64,
    pub large_score: f64,
    /// Fixed scores of the two placeholder signals, in display order.
    pub placeholder_scores: [f64; 2],
}

pub const STANDARD_VIDEO_POLICY: SizeOnlyPolicy = SizeOnlyPolicy {
    small_below: 5_000_000,
    small_score: 0.6,
    large_score: 0.3,
    placeholder_scores: [0.4, 0.3],
};

pub const STANDARD_AUDIO_POLICY: SizeOnlyPolicy = SizeOnlyPolicy {
    small_below: 1_000_000,
    small_score: 0.5,
    large_score: 0.2,
    placeholder_scores: [0.4, 0.3],
};

/// Aggregate score thresholds for the risk tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiskThresholds {
    /// Scores at or above this are high risk.
    pub high_min: u8,
    /// Scores at or above this (and below `high_min`) are medium risk.
    pub medium_min: u8,
}

pub const STANDARD_RISK_THRESHOLDS: RiskThresholds = RiskThresholds {
    high_min: 70,
    medium_min: 40,
};

impl Default for RiskThresholds {
    fn default() -> Self {
        STANDARD_RISK_THRESHOLDS
    }
}
