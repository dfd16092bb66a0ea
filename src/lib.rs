//! # Food Parser
//!
//! Converts free-text food log entries ("2 eggs and coffee x2") into the
//! dictionary terms they mention, using a curated multi-gram dictionary and a
//! correction table. Unrecognized text is reported as unknown spans rather
//! than as errors.

pub mod correction;
pub mod dictionary;
pub mod entry_summary;
pub mod food_parser;
pub mod food_types;
pub mod format_patterns;
pub mod lemmatizer;
pub mod ngram_tagger;
pub mod parser_config;
pub mod parser_errors;
pub mod segmenter;
pub mod stopwords;
pub mod text_processing;
