//! # Parser Configuration Module
//!
//! This module defines constants and configuration structures for food log
//! parsing, including segmentation settings and lexicon extensions.

// Constants for dictionary shape
pub const MAX_GRAM_LENGTH: usize = 5;
pub const TAG_COLUMNS: usize = 7;
/// Words of consumable terms must be strictly longer than this to join the phrase vocabulary
pub const MIN_FOOD_PHRASE_WORD_LEN: usize = 2;

// Constants for text normalization
pub const PROTECTED_SUBSTRINGS: [&str; 5] = ["v8", "h2", "ag1", "co2", "0z"];
/// Stopwords that carry meaning in food entries ("pre work out", "no sugar", vitamin "d")
pub const STOPWORD_EXCEPTIONS: [&str; 8] = ["out", "no", "not", "and", "with", "m", "of", "d"];

/// Shorthand returned for terms with no known food type
pub const UNKNOWN_TYPE_CODE: &str = "u";

pub const DEFAULT_MAX_SEGMENT_LEN: usize = 24;

// Environment variables read by the binary
pub const DICTIONARY_PATH_ENV: &str = "FOOD_PARSER_DICTIONARY";
pub const CORRECTIONS_PATH_ENV: &str = "FOOD_PARSER_CORRECTIONS";
pub const SEGMENTATION_ENV: &str = "FOOD_PARSER_SEGMENTATION";

/// Word segmentation settings for de-concatenating tokens like "blueberrymuffin"
#[derive(Debug, Clone)]
pub struct SegmentationConfig {
    /// Whether concatenated tokens are split at all
    pub enabled: bool,
    /// Longest candidate word considered, in characters
    pub max_word_length: usize,
}

impl Default for SegmentationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_word_length: DEFAULT_MAX_SEGMENT_LEN,
        }
    }
}

/// Configuration structure for the food parser
#[derive(Debug, Clone, Default)]
pub struct ParserConfig {
    /// Word segmentation settings
    pub segmentation: SegmentationConfig,
    /// Additional words known to the lemmatizer and segmenter beyond the dictionary
    pub extra_lexicon: Vec<String>,
}

impl ParserConfig {
    /// Apply overrides from the process environment.
    ///
    /// Only `FOOD_PARSER_SEGMENTATION` is read here; unparseable values are
    /// ignored and the current setting is kept.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(value) = std::env::var(SEGMENTATION_ENV) {
            match value.trim().to_lowercase().as_str() {
                "true" | "1" | "yes" => self.segmentation.enabled = true,
                "false" | "0" | "no" => self.segmentation.enabled = false,
                other => log::warn!("Ignoring {SEGMENTATION_ENV}={other}: expected true or false"),
            }
        }
        self
    }
}
