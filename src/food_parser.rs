//! # Food Parser
//!
//! The parser handle ties the pipeline together: a raw log entry is split on
//! commas, and each piece is normalized, corrected and tagged against the
//! dictionary. Results are merged into one `ParseResult` per entry.
//!
//! All tables are built once in `initialize` and never mutated afterwards, so
//! a `FoodParser` can be shared across threads without locking.
//!
//! ## Usage
//!
//! ```rust
//! use food_parser::food_parser::FoodParser;
//!
//! let dictionary = "gram_key,gram_type,food_type\negg,1,f\ncoffee,1,b\n";
//! let corrections = r#"{"cofee": "coffee"}"#;
//! let parser = FoodParser::initialize(dictionary.as_bytes(), corrections.as_bytes())?;
//!
//! let result = parser.parse_entry("2 eggs, cofee");
//! assert_eq!(result.matched_foods, vec!["egg", "coffee"]);
//! assert_eq!(result.unknown_count, 0);
//! # Ok::<(), food_parser::parser_errors::ParserError>(())
//! ```

use log::{debug, info};
use rayon::prelude::*;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::correction::TokenCorrector;
use crate::dictionary::{CorrectionMap, DictionaryRow, DictionaryStore, LoadSummary};
use crate::food_types::{FoodType, ParseResult, TokenTag};
use crate::lemmatizer::{Lemmatizer, MorphyLemmatizer};
use crate::ngram_tagger::{tag_tokens, tokenize, TaggedTokens};
use crate::parser_config::{ParserConfig, UNKNOWN_TYPE_CODE};
use crate::parser_errors::ParserError;
use crate::segmenter::WordSegmenter;
use crate::text_processing::{collapse_whitespace, TextNormalizer};

/// Parser handle holding the immutable dictionary tables
pub struct FoodParser {
    store: DictionaryStore,
    normalizer: TextNormalizer,
    lemmatizer: MorphyLemmatizer,
    segmenter: WordSegmenter,
    summary: LoadSummary,
}

impl FoodParser {
    /// Build a parser from a dictionary CSV and a correction JSON object
    ///
    /// # Errors
    ///
    /// Returns `ParserError::Configuration` if the dictionary lacks a required
    /// column or either input cannot be read.
    pub fn initialize<D: Read, C: Read>(dictionary: D, corrections: C) -> Result<Self, ParserError> {
        Self::initialize_with_config(dictionary, corrections, ParserConfig::default())
    }

    pub fn initialize_with_config<D: Read, C: Read>(
        dictionary: D,
        corrections: C,
        config: ParserConfig,
    ) -> Result<Self, ParserError> {
        let rows = DictionaryStore::read_rows(dictionary)?;
        let corrections = DictionaryStore::read_corrections(corrections)?;
        let (store, summary) = DictionaryStore::from_rows(rows, corrections);
        Ok(Self::from_store(store, summary, config))
    }

    /// Build a parser from files on disk
    pub fn from_paths(
        dictionary_path: impl AsRef<Path>,
        corrections_path: impl AsRef<Path>,
        config: ParserConfig,
    ) -> Result<Self, ParserError> {
        let dictionary_path = dictionary_path.as_ref();
        let corrections_path = corrections_path.as_ref();
        info!(
            "Loading dictionary from {} and corrections from {}",
            dictionary_path.display(),
            corrections_path.display()
        );
        let dictionary = File::open(dictionary_path).map_err(|e| {
            ParserError::Configuration(format!("{}: {e}", dictionary_path.display()))
        })?;
        let corrections = File::open(corrections_path).map_err(|e| {
            ParserError::Configuration(format!("{}: {e}", corrections_path.display()))
        })?;
        Self::initialize_with_config(dictionary, corrections, config)
    }

    /// Build a parser from an already constructed store
    pub fn from_store(store: DictionaryStore, summary: LoadSummary, config: ParserConfig) -> Self {
        let mut lexicon = store.lexicon();
        lexicon.extend(config.extra_lexicon.iter().cloned());

        let mut vocabulary = lexicon.clone();
        vocabulary.extend(store.single_word_correction_keys().map(str::to_string));

        info!(
            "Food parser ready: {} rows accepted, {} rejected, {} corrections, lexicon of {} words",
            summary.rows_accepted,
            summary.rows_rejected,
            summary.corrections,
            lexicon.len()
        );

        Self {
            store,
            normalizer: TextNormalizer::default(),
            lemmatizer: MorphyLemmatizer::new(lexicon),
            segmenter: WordSegmenter::new(vocabulary, config.segmentation),
            summary,
        }
    }

    /// Build a parser from in-memory rows and corrections
    pub fn from_rows(
        rows: Vec<DictionaryRow>,
        corrections: CorrectionMap,
        config: ParserConfig,
    ) -> Self {
        let (store, summary) = DictionaryStore::from_rows(rows, corrections);
        Self::from_store(store, summary, config)
    }

    /// Rows accepted and rejected while loading
    pub fn load_summary(&self) -> &LoadSummary {
        &self.summary
    }

    pub fn store(&self) -> &DictionaryStore {
        &self.store
    }

    /// Full cleaning pipeline for one comma-free item: normalize, correct, collapse whitespace
    pub fn clean(&self, entry: &str) -> String {
        let normalized = self.normalizer.normalize(entry);
        let corrector = TokenCorrector::new(&self.store, &self.lemmatizer, &self.segmenter);
        let corrected = corrector.correct(&normalized);
        collapse_whitespace(&corrected)
    }

    fn tag_item(&self, item: &str) -> TaggedTokens {
        tag_tokens(tokenize(&self.clean(item)), &self.store)
    }

    /// Matched foods and the per-token tag array for one comma-free item
    pub fn parse_single_entry(&self, entry: &str) -> (Vec<String>, Vec<TokenTag>) {
        let tagged = self.tag_item(entry);
        (tagged.matched_foods, tagged.tags)
    }

    /// Parse a raw log entry, splitting it on commas into sub-items
    pub fn parse_entry(&self, raw_text: &str) -> ParseResult {
        let mut result = ParseResult::default();

        for item in raw_text.split(',') {
            let tagged = self.tag_item(item);
            if tagged.tokens.is_empty() {
                continue;
            }
            result.token_count += tagged.tokens.len();
            result.unknown_count += tagged.unknown_count();
            result.unknown_spans.extend(tagged.unknown_spans());
            result.matched_foods.extend(tagged.matched_foods);
        }

        debug!(
            "Parsed '{}': {} matches, {}/{} tokens unknown",
            raw_text,
            result.matched_foods.len(),
            result.unknown_count,
            result.token_count
        );
        result
    }

    /// Parse many entries in parallel; one result per input, in input order
    pub fn parse_batch<S: AsRef<str> + Sync>(&self, raw_texts: &[S]) -> Vec<ParseResult> {
        raw_texts
            .par_iter()
            .map(|text| self.parse_entry(text.as_ref()))
            .collect()
    }

    /// Food type of a dictionary term
    pub fn resolve_type(&self, term: &str) -> Option<FoodType> {
        self.store.food_type(term)
    }

    /// Short food type code of a term, or `"u"` when unknown
    pub fn find_food_type(&self, term: &str) -> &'static str {
        self.resolve_type(term)
            .map_or(UNKNOWN_TYPE_CODE, |food_type| food_type.code())
    }

    /// Present tags of a term in column order; empty when unknown
    pub fn resolve_tags(&self, term: &str) -> Vec<&str> {
        self.store
            .tags(term)
            .map(|tags| tags.present())
            .unwrap_or_default()
    }

    /// Lemmatize one word with the parser's lexicon
    pub fn lemmatize(&self, word: &str) -> String {
        self.lemmatizer.lemmatize(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(term: &str, food_type: &str, tags: &[&str]) -> DictionaryRow {
        let tag = |i: usize| tags.get(i).map(|t| t.to_string());
        DictionaryRow {
            gram_key: term.to_string(),
            gram_type: term.split_whitespace().count().to_string(),
            food_type: food_type.to_string(),
            tag1: tag(0),
            tag2: tag(1),
            tag3: tag(2),
            ..Default::default()
        }
    }

    fn parser() -> FoodParser {
        let rows = vec![
            row("egg", "f", &["protein"]),
            row("coffee", "b", &["caffeine", "hot drink"]),
            row("orange", "f", &[]),
            row("orange juice", "b", &["juice"]),
            row("water", "w", &[]),
            row("vitamin d", "m", &["supplement"]),
        ];
        let mut corrections = CorrectionMap::new();
        corrections.insert("cofee".to_string(), "coffee".to_string());
        FoodParser::from_rows(rows, corrections, ParserConfig::default())
    }

    #[test]
    fn test_parse_entry_with_quantities() {
        let result = parser().parse_entry("2 eggs and coffee x2");
        assert_eq!(result.matched_foods, vec!["egg", "coffee"]);
        assert_eq!(result.token_count, 4);
        assert_eq!(result.unknown_count, 2);
        assert_eq!(result.unknown_spans, vec!["and", "x"]);
    }

    #[test]
    fn test_parse_single_entry_tags() {
        let (foods, tags) = parser().parse_single_entry("orange juice");
        assert_eq!(foods, vec!["orange juice"]);
        assert_eq!(tags, vec![TokenTag::Matched(2), TokenTag::Matched(2)]);
    }

    #[test]
    fn test_empty_items_are_skipped() {
        let result = parser().parse_entry("coffee,, ,");
        assert_eq!(result.matched_foods, vec!["coffee"]);
        assert_eq!(result.token_count, 1);
        assert!(result.unknown_spans.is_empty());
    }

    #[test]
    fn test_resolvers() {
        let parser = parser();
        assert_eq!(parser.resolve_type("coffee"), Some(FoodType::Beverage));
        assert_eq!(parser.find_food_type("vitamin d"), "m");
        assert_eq!(parser.find_food_type("pizza"), "u");
        assert_eq!(parser.resolve_tags("coffee"), vec!["caffeine", "hot drink"]);
        assert!(parser.resolve_tags("orange").is_empty());
        assert!(parser.resolve_tags("pizza").is_empty());
    }

    #[test]
    fn test_parse_batch_preserves_order() {
        let parser = parser();
        let entries = ["coffee", "eggs", "nothing known", "water"];
        let results = parser.parse_batch(&entries);
        assert_eq!(results.len(), 4);
        for (entry, result) in entries.iter().zip(&results) {
            assert_eq!(result, &parser.parse_entry(entry));
        }
        assert_eq!(results[3].matched_foods, vec!["water"]);
    }

    #[test]
    fn test_initialize_from_readers() {
        let dictionary = "gram_key,gram_type,food_type,tag1\negg,1,f,protein\nbad,1,zzz,\n";
        let parser = FoodParser::initialize(dictionary.as_bytes(), "{}".as_bytes()).unwrap();
        assert_eq!(parser.load_summary().rows_accepted, 1);
        assert_eq!(parser.load_summary().rows_rejected, 1);
        assert_eq!(parser.parse_entry("eggs").matched_foods, vec!["egg"]);
    }

    #[test]
    fn test_initialize_missing_column() {
        let dictionary = "term,food_type\negg,f\n";
        let result = FoodParser::initialize(dictionary.as_bytes(), "{}".as_bytes());
        assert!(matches!(result, Err(ParserError::Configuration(_))));
    }

    #[test]
    fn test_extra_lexicon_extends_lemma_targets() {
        let rows = vec![row("tea", "b", &[])];
        let parser =
            FoodParser::from_rows(rows.clone(), CorrectionMap::new(), ParserConfig::default());
        assert_eq!(parser.lemmatize("scones"), "scones");

        let config = ParserConfig {
            extra_lexicon: vec!["scone".to_string()],
            ..Default::default()
        };
        let parser = FoodParser::from_rows(rows, CorrectionMap::new(), config);
        assert_eq!(parser.lemmatize("scones"), "scone");
        assert_eq!(parser.lemmatize("teas"), "tea");
        assert!(!parser.store().contains_term("scone"));
        assert_eq!(parser.store().term_count(), 1);
    }
}
