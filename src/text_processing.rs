//! # Text Processing Module
//!
//! This module cleans raw food log text before dictionary correction.
//!
//! ## Pipeline
//!
//! The steps run in a fixed order; reordering them changes output:
//!
//! 1. Lowercase
//! 2. Replace ASCII punctuation with spaces
//! 3. Number handling (decimals always removed, digits next to letters kept
//!    when the text holds a protected item like "h2o" or "v8")
//! 4. Stopword removal
//! 5. Quantity format unmixing ("12oz" → "12 oz", "X 2" → "x2")

use log::{debug, trace};

use crate::format_patterns::{
    DECIMAL_REGEX, DIGITS_REGEX, FRONT_MIXED_REGEX, LEADING_NUMBER_REGEX, MULTI_SPACE_REGEX,
    PUNCTUATION_REGEX, TIMES_X_REGEX,
};
use crate::parser_config::PROTECTED_SUBSTRINGS;
use crate::stopwords::StopwordSet;

/// Stateless text normalizer over a shared stopword set
#[derive(Debug, Clone, Default)]
pub struct TextNormalizer {
    stopwords: StopwordSet,
}

impl TextNormalizer {
    pub fn new(stopwords: StopwordSet) -> Self {
        Self { stopwords }
    }

    /// Run the full normalization pipeline
    ///
    /// # Examples
    ///
    /// ```rust
    /// use food_parser::text_processing::TextNormalizer;
    ///
    /// let normalizer = TextNormalizer::default();
    /// assert_eq!(normalizer.normalize("The H2O, 16oz!"), "h2o 16 oz");
    /// assert_eq!(normalizer.normalize("2 Eggs and coffee"), "eggs and coffee");
    /// ```
    pub fn normalize(&self, raw: &str) -> String {
        let text = raw.to_lowercase();
        let text = drop_punctuation(&text);
        let text = handle_numbers(&text);
        let text = self.stopwords.remove_from(&text);
        let cleaned = clean_format(text.trim());
        debug!("Normalized '{}' -> '{}'", raw, cleaned);
        cleaned
    }
}

/// Replace every ASCII punctuation character with a space
pub fn drop_punctuation(text: &str) -> String {
    PUNCTUATION_REGEX.replace_all(text, " ").into_owned()
}

/// Collapse runs of whitespace into one space
pub fn collapse_whitespace(text: &str) -> String {
    MULTI_SPACE_REGEX.replace_all(text, " ").into_owned()
}

/// Remove numbers from text.
///
/// Decimal numbers always go. When the text contains a protected substring
/// (`v8`, `h2`, `ag1`, `co2`, `0z`) only digit runs with no ASCII letter on
/// either side are removed; otherwise every digit is removed.
pub fn handle_numbers(text: &str) -> String {
    let text = DECIMAL_REGEX.replace_all(text, "");
    let text = if PROTECTED_SUBSTRINGS.iter().any(|sub| text.contains(sub)) {
        trace!("Protected substring found, keeping letter-adjacent digits in '{}'", text);
        remove_free_standing_digits(&text)
    } else {
        DIGITS_REGEX.replace_all(&text, "").into_owned()
    };
    collapse_whitespace(&text)
}

/// Remove digit runs that touch no ASCII letter
fn remove_free_standing_digits(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut last_end = 0;
    for run in DIGITS_REGEX.find_iter(text) {
        let before = text[..run.start()].chars().next_back();
        let after = text[run.end()..].chars().next();
        let touches_letter = |c: Option<char>| c.is_some_and(|c| c.is_ascii_alphabetic());
        if touches_letter(before) || touches_letter(after) {
            continue;
        }
        result.push_str(&text[last_end..run.start()]);
        last_end = run.end();
    }
    result.push_str(&text[last_end..]);
    result
}

/// Unmix quantity formats: split front-mixed tokens ("12oz") and unify
/// times-x variants ("X 2", "x2") into " x2 "
///
/// # Examples
///
/// ```rust
/// use food_parser::text_processing::clean_format;
///
/// assert_eq!(clean_format("coffee 12oz"), "coffee 12 oz");
/// assert_eq!(clean_format("coffee X 2"), "coffee x2");
/// ```
pub fn clean_format(sentence: &str) -> String {
    let mut sentence = sentence.to_string();

    let front_mixed: Vec<String> = FRONT_MIXED_REGEX
        .find_iter(&sentence)
        .map(|m| m.as_str().to_string())
        .collect();
    if !front_mixed.is_empty() {
        sentence = handle_front_mixing(&sentence, &front_mixed);
    }

    let times_x: Vec<String> = TIMES_X_REGEX
        .find_iter(&sentence)
        .map(|m| m.as_str().to_string())
        .collect();
    if !times_x.is_empty() {
        sentence = handle_times_x(&sentence, &times_x);
    }

    sentence.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Insert a space after the leading digit run of every token that is itself front-mixed
fn handle_front_mixing(sentence: &str, front_mixed: &[String]) -> String {
    let mut cleaned = Vec::new();
    for token in sentence.split_whitespace() {
        let number = front_mixed
            .iter()
            .any(|mixed| mixed == token)
            .then(|| LEADING_NUMBER_REGEX.find(token))
            .flatten();
        match number {
            Some(number) => {
                let number = number.as_str();
                let split = token.replace(number, &format!("{number} "));
                trace!("Front-mixed token '{}' -> '{}'", token, split.trim());
                cleaned.extend(split.split_whitespace().map(str::to_string));
            }
            None => cleaned.push(token.to_string()),
        }
    }
    cleaned.join(" ")
}

/// Replace each times-x occurrence with its compact lowercase form padded by spaces
fn handle_times_x(sentence: &str, times_x: &[String]) -> String {
    let mut sentence = sentence.to_string();
    for token in times_x {
        let compact = format!(" {} ", token.replace(' ', "").to_lowercase());
        sentence = sentence.replace(token.as_str(), &compact);
    }
    sentence.split_whitespace().collect::<Vec<_>>().join(" ")
}
