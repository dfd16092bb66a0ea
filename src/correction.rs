//! # Token Correction Module
//!
//! Resolves a normalized entry against the dictionary and the correction map.
//!
//! Whole-entry resolution is tried first (verbatim term, correction key,
//! lemmatized term). Failing that, each token is resolved on its own, falling
//! back to word segmentation for tokens that look like concatenated food words.
//! Unresolvable tokens pass through unchanged; the tagger reports them as unknown.
//!
//! The lookup order differs by level. The whole entry tries a verbatim
//! dictionary hit before the correction map; a single token tries the
//! correction map before its lemmatized dictionary form.

use log::{debug, trace};

use crate::dictionary::DictionaryStore;
use crate::lemmatizer::Lemmatizer;
use crate::segmenter::WordSegmenter;

/// Borrowed view over the shared resources needed for correction
pub struct TokenCorrector<'a> {
    store: &'a DictionaryStore,
    lemmatizer: &'a dyn Lemmatizer,
    segmenter: &'a WordSegmenter,
}

impl<'a> TokenCorrector<'a> {
    pub fn new(
        store: &'a DictionaryStore,
        lemmatizer: &'a dyn Lemmatizer,
        segmenter: &'a WordSegmenter,
    ) -> Self {
        Self {
            store,
            lemmatizer,
            segmenter,
        }
    }

    /// Correct a normalized entry; never fails
    pub fn correct(&self, entry: &str) -> String {
        if self.store.contains_term(entry) {
            return entry.to_string();
        }
        if let Some(replacement) = self.store.correction(entry) {
            let corrected = self.lemmatizer.lemmatize_words(replacement);
            debug!("Corrected entry '{}' -> '{}'", entry, corrected);
            return corrected;
        }
        let lemma = self.lemmatizer.lemmatize(entry);
        if self.store.contains_term(&lemma) {
            return lemma;
        }

        entry
            .split_whitespace()
            .map(|token| self.correct_token(token))
            .collect::<Vec<_>>()
            .join(" ")
            .trim()
            .to_string()
    }

    fn correct_token(&self, token: &str) -> String {
        let lemma = self.lemmatizer.lemmatize(token);

        if let Some(replacement) = self.store.correction(token) {
            let corrected = self.lemmatizer.lemmatize_words(replacement);
            trace!("Corrected token '{}' -> '{}'", token, corrected);
            return corrected;
        }
        if self.store.is_food_phrase(&lemma) || self.store.contains_term(&lemma) {
            return lemma;
        }
        if !self.store.is_food_phrase(token) {
            if let Some(split) = self.split_concatenated(token) {
                return split;
            }
        }
        token.to_string()
    }

    /// Recover food words from a concatenated token ("blueberrymuffin").
    ///
    /// Keeps segmented pieces that are food phrase words after lemmatization
    /// or after one correction-map hop; succeeds only with two or more pieces.
    fn split_concatenated(&self, token: &str) -> Option<String> {
        let mut pieces = Vec::new();
        for word in self.segmenter.segment(token) {
            if self.store.is_food_phrase(&self.lemmatizer.lemmatize(&word)) {
                pieces.push(word);
            } else if let Some(replacement) = self.store.correction(&word) {
                if self.store.is_food_phrase(replacement) {
                    pieces.push(replacement.to_string());
                }
            }
        }

        if pieces.len() < 2 {
            return None;
        }
        let split = pieces
            .iter()
            .map(|piece| self.lemmatizer.lemmatize(piece))
            .collect::<Vec<_>>()
            .join(" ");
        debug!("Split concatenated token '{}' -> '{}'", token, split);
        Some(split)
    }
}
