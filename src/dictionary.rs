//! # Dictionary Store Module
//!
//! Read-only in-memory tables built once from the dictionary table and the
//! correction table: per-length gram sets, term → food type, term → tags,
//! the correction map and the derived food phrase vocabulary.
//!
//! ## Load policy
//!
//! - Rows whose `food_type` is outside the fixed set are dropped and counted,
//!   never reported as errors.
//! - Duplicate terms: the last row wins in the type and tag maps.
//! - A missing required column is a `ParserError::Configuration`.

use log::{debug, info, warn};
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::io::Read;

use crate::food_types::{DictionaryEntry, FoodTags, FoodType};
use crate::parser_config::{MAX_GRAM_LENGTH, MIN_FOOD_PHRASE_WORD_LEN};
use crate::parser_errors::ParserError;

/// Raw misspelling or phrase → canonical replacement phrase
pub type CorrectionMap = HashMap<String, String>;

/// Columns every dictionary table must carry
pub const REQUIRED_COLUMNS: [&str; 3] = ["gram_key", "gram_type", "food_type"];

/// One row of the dictionary table as it appears on disk
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DictionaryRow {
    pub gram_key: String,
    pub gram_type: String,
    pub food_type: String,
    #[serde(default)]
    pub tag1: Option<String>,
    #[serde(default)]
    pub tag2: Option<String>,
    #[serde(default)]
    pub tag3: Option<String>,
    #[serde(default)]
    pub tag4: Option<String>,
    #[serde(default)]
    pub tag5: Option<String>,
    #[serde(default)]
    pub tag6: Option<String>,
    #[serde(default)]
    pub tag7: Option<String>,
}

impl DictionaryRow {
    /// Validate the row into an entry; `None` when the food type or gram length is unusable
    pub fn into_entry(self) -> Option<DictionaryEntry> {
        let food_type = FoodType::from_code(&self.food_type)?;
        let gram_length = parse_gram_type(&self.gram_type)?;
        let term = self.gram_key.trim().to_string();
        if term.is_empty() {
            return None;
        }
        let tags = FoodTags::from_cells([
            self.tag1, self.tag2, self.tag3, self.tag4, self.tag5, self.tag6, self.tag7,
        ]);
        Some(DictionaryEntry {
            term,
            gram_length,
            food_type,
            tags,
        })
    }
}

/// Gram counts are sometimes exported as floats ("2.0")
fn parse_gram_type(raw: &str) -> Option<usize> {
    let raw = raw.trim();
    if let Ok(n) = raw.parse::<usize>() {
        return Some(n);
    }
    let value = raw.parse::<f64>().ok()?;
    if value >= 0.0 && value.fract() == 0.0 {
        Some(value as usize)
    } else {
        None
    }
}

/// Outcome of building a `DictionaryStore`, surfaced to callers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadSummary {
    pub rows_total: usize,
    pub rows_accepted: usize,
    pub rows_rejected: usize,
    pub corrections: usize,
}

/// Immutable dictionary tables shared by every parse call
#[derive(Debug, Clone, Default)]
pub struct DictionaryStore {
    /// `gram_sets[k - 1]` holds the terms of gram length `k`
    gram_sets: Vec<HashSet<String>>,
    food_types: HashMap<String, FoodType>,
    food_tags: HashMap<String, FoodTags>,
    corrections: CorrectionMap,
    food_phrases: HashSet<String>,
}

impl DictionaryStore {
    /// Build from raw table rows, dropping rows that fail validation
    pub fn from_rows(rows: Vec<DictionaryRow>, corrections: CorrectionMap) -> (Self, LoadSummary) {
        let rows_total = rows.len();
        let entries: Vec<DictionaryEntry> =
            rows.into_iter().filter_map(DictionaryRow::into_entry).collect();
        let rows_accepted = entries.len();
        let rows_rejected = rows_total - rows_accepted;
        if rows_rejected > 0 {
            warn!("Dropped {rows_rejected} of {rows_total} dictionary rows with an invalid food type or gram length");
        }

        let summary = LoadSummary {
            rows_total,
            rows_accepted,
            rows_rejected,
            corrections: corrections.len(),
        };
        (Self::from_entries(entries, corrections), summary)
    }

    /// Build from already-validated entries
    pub fn from_entries(entries: Vec<DictionaryEntry>, corrections: CorrectionMap) -> Self {
        let mut gram_sets = vec![HashSet::new(); MAX_GRAM_LENGTH];
        let mut food_types = HashMap::new();
        let mut food_tags = HashMap::new();

        for entry in entries {
            if (1..=MAX_GRAM_LENGTH).contains(&entry.gram_length) {
                gram_sets[entry.gram_length - 1].insert(entry.term.clone());
            } else {
                debug!(
                    "Term '{}' has gram length {} and joins no gram set",
                    entry.term, entry.gram_length
                );
            }
            // last row wins
            food_types.insert(entry.term.clone(), entry.food_type);
            food_tags.insert(entry.term, entry.tags);
        }

        let food_phrases = food_types
            .iter()
            .filter(|(_, food_type)| food_type.is_consumable())
            .flat_map(|(term, _)| term.split_whitespace())
            .filter(|word| word.chars().count() > MIN_FOOD_PHRASE_WORD_LEN)
            .map(str::to_string)
            .collect();

        let store = Self {
            gram_sets,
            food_types,
            food_tags,
            corrections,
            food_phrases,
        };
        info!(
            "Dictionary store built: {} terms, {} corrections, {} food phrase words",
            store.food_types.len(),
            store.corrections.len(),
            store.food_phrases.len()
        );
        store
    }

    /// Read dictionary rows from CSV, checking the header for required columns.
    ///
    /// Rows may stop short of the trailing tag columns; missing cells read as absent.
    pub fn read_rows<R: Read>(reader: R) -> Result<Vec<DictionaryRow>, ParserError> {
        let mut csv_reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
        let headers = csv_reader.headers()?.clone();
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h.trim() == column) {
                return Err(ParserError::Configuration(format!(
                    "dictionary table is missing required column '{column}'"
                )));
            }
        }

        let rows = csv_reader
            .deserialize()
            .collect::<Result<Vec<DictionaryRow>, _>>()?;
        debug!("Read {} dictionary rows", rows.len());
        Ok(rows)
    }

    /// Read a correction table: a JSON object mapping strings to strings
    pub fn read_corrections<R: Read>(reader: R) -> Result<CorrectionMap, ParserError> {
        let value: serde_json::Value = serde_json::from_reader(reader)?;
        let object = value.as_object().ok_or_else(|| {
            ParserError::Configuration("correction table must be a JSON object".to_string())
        })?;

        let mut corrections = CorrectionMap::with_capacity(object.len());
        for (key, value) in object {
            let replacement = value.as_str().ok_or_else(|| {
                ParserError::Configuration(format!(
                    "correction for '{key}' is not a string: {value}"
                ))
            })?;
            corrections.insert(key.clone(), replacement.to_string());
        }
        Ok(corrections)
    }

    /// Terms of exactly `gram_length` words; empty for lengths outside 1..=5
    pub fn gram_set(&self, gram_length: usize) -> Option<&HashSet<String>> {
        gram_length
            .checked_sub(1)
            .and_then(|index| self.gram_sets.get(index))
    }

    pub fn contains_term(&self, term: &str) -> bool {
        self.food_types.contains_key(term)
    }

    pub fn food_type(&self, term: &str) -> Option<FoodType> {
        self.food_types.get(term).copied()
    }

    pub fn tags(&self, term: &str) -> Option<&FoodTags> {
        self.food_tags.get(term)
    }

    pub fn correction(&self, raw: &str) -> Option<&str> {
        self.corrections.get(raw).map(String::as_str)
    }

    pub fn is_food_phrase(&self, word: &str) -> bool {
        self.food_phrases.contains(word)
    }

    pub fn term_count(&self) -> usize {
        self.food_types.len()
    }

    /// Words the lemmatizer may accept: every term, every word of every term,
    /// every correction value and its words
    pub fn lexicon(&self) -> HashSet<String> {
        let mut lexicon = HashSet::new();
        let phrases = self.food_types.keys().chain(self.corrections.values());
        for phrase in phrases {
            lexicon.insert(phrase.clone());
            lexicon.extend(phrase.split_whitespace().map(str::to_string));
        }
        lexicon
    }

    /// Single-word correction keys, so segmentation can recover misspelled pieces
    pub fn single_word_correction_keys(&self) -> impl Iterator<Item = &str> {
        self.corrections
            .keys()
            .filter(|key| !key.contains(char::is_whitespace))
            .map(String::as_str)
    }
}
