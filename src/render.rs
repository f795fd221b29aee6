//! Report rendering for the command line front end.

use std::fmt;

use crate::analysis::AnalysisResult;
use crate::signal::is_metadata_key;

/// Closing line of every text report.
pub const DISCLAIMER: &str = "Disclaimer: Demo tool. May have false positives.";

const BAR_WIDTH: usize = 20;

/// Human-readable report with one score bar per signal.
pub struct TextReport<'a> {
    result: &'a AnalysisResult,
    show_metadata: bool,
}

impl<'a> TextReport<'a> {
    pub fn new(result: &'a AnalysisResult) -> Self {
        Self {
            result,
            show_metadata: false,
        }
    }

    /// Also list `_`-prefixed metadata entries.
    pub fn with_metadata(mut self, show: bool) -> Self {
        self.show_metadata = show;
        self
    }
}

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = self.result;
        writeln!(f, "{}", result.label())?;
        writeln!(
            f,
            "  Score: {}%  {}",
            result.aggregate_score(),
            result.risk().label()
        )?;
        writeln!(f)?;

        let entries: Vec<_> = result
            .signals()
            .iter_all()
            .filter(|(name, _)| self.show_metadata || !is_metadata_key(name))
            .collect();
        let name_width = entries
            .iter()
            .map(|(name, _)| name.chars().count())
            .max()
            .unwrap_or(0);

        for (name, signal) in entries {
            writeln!(
                f,
                "  {:width$}  [{}]  {:>3.0}%",
                name,
                bar(signal.score),
                signal.score * 100.0,
                width = name_width
            )?;
            writeln!(f, "  {:width$}  {}", "", signal.description, width = name_width)?;
        }

        writeln!(f)?;
        write!(f, "{}", DISCLAIMER)
    }
}

fn bar(score: f64) -> String {
    let filled = ((score.clamp(0.0, 1.0) * BAR_WIDTH as f64).round() as usize).min(BAR_WIDTH);
    format!("{}{}", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}

/// Pretty-printed JSON report.
pub fn render_json(result: &AnalysisResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(result)
}
