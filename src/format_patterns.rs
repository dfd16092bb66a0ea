//! # Format Patterns Module
//!
//! This module contains the regex patterns used by text normalization.

use lazy_static::lazy_static;
use regex::Regex;

pub const DECIMAL_PATTERN: &str = r"[0-9]+\.[0-9]+";
pub const DIGITS_PATTERN: &str = r"[0-9]+";
pub const MULTI_SPACE_PATTERN: &str = r"\s\s+";
pub const PUNCTUATION_PATTERN: &str = r"[[:punct:]]";
/// A digit run glued to following non-space characters other than x/X ("12oz")
pub const FRONT_MIXED_PATTERN: &str = r"[0-9]+[^\sxX]+";
/// The quantity prefix of a front-mixed token
pub const LEADING_NUMBER_PATTERN: &str = r"[0-9]+[xX]*";
/// "x2", "X2", "x 2", "X 2"
pub const TIMES_X_PATTERN: &str = r"[xX]\s*?[0-9]";

// Lazy static regexes to avoid recompilation
lazy_static! {
    pub static ref DECIMAL_REGEX: Regex =
        Regex::new(DECIMAL_PATTERN).expect("Decimal pattern should be valid");
    pub static ref DIGITS_REGEX: Regex =
        Regex::new(DIGITS_PATTERN).expect("Digits pattern should be valid");
    pub static ref MULTI_SPACE_REGEX: Regex =
        Regex::new(MULTI_SPACE_PATTERN).expect("Whitespace pattern should be valid");
    pub static ref PUNCTUATION_REGEX: Regex =
        Regex::new(PUNCTUATION_PATTERN).expect("Punctuation pattern should be valid");
    pub static ref FRONT_MIXED_REGEX: Regex =
        Regex::new(FRONT_MIXED_PATTERN).expect("Front-mixed pattern should be valid");
    pub static ref LEADING_NUMBER_REGEX: Regex =
        Regex::new(LEADING_NUMBER_PATTERN).expect("Leading number pattern should be valid");
    pub static ref TIMES_X_REGEX: Regex =
        Regex::new(TIMES_X_PATTERN).expect("Times-x pattern should be valid");
}
