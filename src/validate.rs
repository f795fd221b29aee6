//! Input validation ahead of analysis.
//!
//! The engine accepts anything; this layer decides what the front end refuses
//! outright (nothing selected, oversized text) and what it only warns about.

use crate::analysis::{ContentInput, MediaKind};
use crate::error::InputError;
use crate::extract::utf16_len;
use crate::policy::STANDARD_TEXT_POLICY;

/// Result of validating input.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Blocking problems, in detection order.
    pub errors: Vec<InputError>,
    /// Warnings that don't block processing.
    pub warnings: Vec<String>,
}

impl ValidationResult {
    /// Create a successful validation result.
    pub fn ok() -> Self {
        Self::default()
    }

    /// Create a validation result with an error.
    pub fn error(error: InputError) -> Self {
        Self {
            errors: vec![error],
            warnings: vec![],
        }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Add a warning to the result.
    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }

    /// Merge another validation result into this one.
    pub fn merge(mut self, other: Self) -> Self {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
        self
    }

    /// The first error, or the warnings if there were no errors.
    pub fn into_result(self) -> Result<Vec<String>, InputError> {
        match self.errors.into_iter().next() {
            Some(error) => Err(error),
            None => Ok(self.warnings),
        }
    }
}

/// Input validator.
#[derive(Debug, Clone)]
pub struct InputValidator {
    /// Maximum text length in bytes.
    max_text_bytes: usize,
    /// Texts below this many characters only get a length signal.
    min_text_chars: usize,
}

impl InputValidator {
    /// Create a new validator with default settings.
    pub fn new() -> Self {
        Self {
            max_text_bytes: 100_000,
            min_text_chars: STANDARD_TEXT_POLICY.min_chars,
        }
    }

    /// Set maximum text length.
    pub fn with_max_text_bytes(mut self, max: usize) -> Self {
        self.max_text_bytes = max;
        self
    }

    /// Validate analysis input.
    pub fn validate(&self, input: &ContentInput) -> ValidationResult {
        match input {
            ContentInput::Text(text) => self.validate_text(text),
            ContentInput::Media {
                filename,
                byte_size,
                mime_type,
                kind,
            } => self.validate_media(filename, *byte_size, mime_type, *kind),
        }
    }

    fn validate_text(&self, text: &str) -> ValidationResult {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return ValidationResult::error(InputError::MissingSelection {
                what: "text".to_string(),
            });
        }

        let mut result = ValidationResult::ok();

        if text.len() > self.max_text_bytes {
            result = result.merge(ValidationResult::error(InputError::TooLong {
                actual: text.len(),
                max: self.max_text_bytes,
            }));
        }

        if text.contains('\x00') {
            result = result.merge(ValidationResult::error(InputError::InvalidEncoding));
        }

        if utf16_len(trimmed) < self.min_text_chars {
            result = result.with_warning(format!(
                "Text is shorter than {} characters; only a length signal is produced",
                self.min_text_chars
            ));
        }

        result
    }

    fn validate_media(
        &self,
        filename: &str,
        byte_size: u64,
        mime_type: &str,
        kind: MediaKind,
    ) -> ValidationResult {
        if filename.trim().is_empty() {
            return ValidationResult::error(InputError::MissingSelection {
                what: format!("a {} file", kind),
            });
        }

        let mut result = ValidationResult::ok();

        if byte_size == 0 {
            result = result.with_warning("File is empty; size heuristics treat it as tiny");
        }

        let mime_type = mime_type.trim();
        if mime_type.is_empty() {
            result = result.with_warning("Unknown MIME type; format heuristics fall back");
        } else if !mime_type
            .to_ascii_lowercase()
            .starts_with(&format!("{}/", kind))
        {
            result = result.with_warning(format!(
                "MIME type '{}' does not look like {}",
                mime_type, kind
            ));
        }

        result
    }
}

impl Default for InputValidator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn media(filename: &str, byte_size: u64, mime_type: &str, kind: MediaKind) -> ContentInput {
        ContentInput::Media {
            filename: filename.to_string(),
            byte_size,
            mime_type: mime_type.to_string(),
            kind,
        }
    }

    #[test]
    fn test_valid_text() {
        let validator = InputValidator::new();
        let result = validator.validate(&ContentInput::Text(
            "Hello, this is a perfectly ordinary message to check.".into(),
        ));
        assert!(result.is_valid());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_empty_text_is_missing_selection() {
        let validator = InputValidator::new();
        let result = validator.validate(&ContentInput::Text("   \n\t".into()));
        assert!(!result.is_valid());
        let error = result.into_result().unwrap_err();
        assert!(matches!(error, InputError::MissingSelection { .. }));
        assert_eq!(error.to_string(), "Please provide text to analyze");
    }

    #[test]
    fn test_short_text_warns() {
        let result = InputValidator::new().validate(&ContentInput::Text("brief".into()));
        assert!(result.is_valid());
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn test_too_long_text() {
        let validator = InputValidator::new().with_max_text_bytes(10);
        let result = validator.validate(&ContentInput::Text("This is way too long for the limit".into()));
        assert!(matches!(
            result.into_result(),
            Err(InputError::TooLong { max: 10, .. })
        ));
    }

    #[test]
    fn test_null_bytes_rejected() {
        let result = InputValidator::new().validate(&ContentInput::Text("content\x00with nulls".into()));
        assert!(matches!(result.into_result(), Err(InputError::InvalidEncoding)));
    }

    #[test]
    fn test_repeated_characters_not_flagged() {
        let text = format!("Start of message{}End of message", "a".repeat(30));
        let result = InputValidator::new().validate(&ContentInput::Text(text));
        assert!(result.is_valid());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_short_text_threshold_uses_utf16_units() {
        let validator = InputValidator::new();
        let emoji = validator.validate(&ContentInput::Text("😀".repeat(15)));
        assert!(emoji.warnings.is_empty());

        let fewer = validator.validate(&ContentInput::Text("😀".repeat(14)));
        assert_eq!(fewer.warnings.len(), 1);
    }

    #[test]
    fn test_missing_file() {
        let result = InputValidator::new().validate(&media("", 10, "image/png", MediaKind::Image));
        let error = result.into_result().unwrap_err();
        assert_eq!(error.to_string(), "Please provide a image file to analyze");
    }

    #[test]
    fn test_media_warnings() {
        let validator = InputValidator::new();

        let mismatched = validator.validate(&media("song.mp3", 10, "audio/mpeg", MediaKind::Image));
        assert!(mismatched.is_valid());
        assert!(mismatched.warnings[0].contains("does not look like image"));

        let empty = validator.validate(&media("blank.png", 0, "", MediaKind::Image));
        assert_eq!(empty.warnings.len(), 2);

        let clean = validator.validate(&media("cat.png", 10, "image/png", MediaKind::Image));
        assert_eq!(clean.into_result().unwrap(), Vec::<String>::new());
    }
}
