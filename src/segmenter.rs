//! # Word Segmenter Module
//!
//! Splits erroneously concatenated tokens ("blueberrymuffin") back into words
//! using a Viterbi search over a uniform unigram model of the known vocabulary.

use log::trace;
use std::collections::HashSet;

use crate::parser_config::SegmentationConfig;

/// Smallest vocabulary size used for scoring, so unknown chunks are never cheap
const MIN_SCORING_VOCAB: usize = 100;

/// Unigram word segmenter
#[derive(Debug, Clone)]
pub struct WordSegmenter {
    vocabulary: HashSet<String>,
    config: SegmentationConfig,
    /// Cost of one known word, `log10(V)`
    known_cost: f64,
}

impl WordSegmenter {
    pub fn new(vocabulary: HashSet<String>, config: SegmentationConfig) -> Self {
        let scoring_size = vocabulary.len().max(MIN_SCORING_VOCAB);
        let known_cost = (scoring_size as f64).log10();
        Self {
            vocabulary,
            config,
            known_cost,
        }
    }

    /// Cost of treating `chars` as one word; unknown chunks grow with length
    fn word_cost(&self, word: &str, char_len: usize) -> f64 {
        if self.vocabulary.contains(word) {
            self.known_cost
        } else {
            self.known_cost - 1.0 + char_len as f64
        }
    }

    /// Segment a token into its most probable word sequence.
    ///
    /// Returns the token whole when segmentation is disabled or the token is empty.
    pub fn segment(&self, token: &str) -> Vec<String> {
        if !self.config.enabled || token.is_empty() {
            return vec![token.to_string()];
        }

        // byte offset of every char boundary, including the end
        let bounds: Vec<usize> = token
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(token.len()))
            .collect();
        let n = bounds.len() - 1;
        let max_len = self.config.max_word_length.max(1);

        // best[i]: (cost, start of last word) for the first i chars
        let mut best: Vec<(f64, usize)> = vec![(f64::INFINITY, 0); n + 1];
        best[0] = (0.0, 0);
        for end in 1..=n {
            let first_start = end.saturating_sub(max_len);
            for start in first_start..end {
                let word = &token[bounds[start]..bounds[end]];
                let cost = best[start].0 + self.word_cost(word, end - start);
                if cost < best[end].0 {
                    best[end] = (cost, start);
                }
            }
        }

        let mut words = Vec::new();
        let mut end = n;
        while end > 0 {
            let start = best[end].1;
            words.push(token[bounds[start]..bounds[end]].to_string());
            end = start;
        }
        words.reverse();

        if words.len() > 1 {
            trace!("Segmented '{}' -> {:?}", token, words);
        }
        words
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segmenter(words: &[&str]) -> WordSegmenter {
        WordSegmenter::new(
            words.iter().map(|w| w.to_string()).collect(),
            SegmentationConfig::default(),
        )
    }

    #[test]
    fn test_splits_concatenated_words() {
        let seg = segmenter(&["blueberry", "muffin", "blue", "berry", "peanut", "butter"]);
        assert_eq!(seg.segment("blueberrymuffin"), vec!["blueberry", "muffin"]);
        assert_eq!(seg.segment("peanutbutter"), vec!["peanut", "butter"]);
    }

    #[test]
    fn test_known_word_stays_whole() {
        let seg = segmenter(&["blueberry", "blue", "berry"]);
        assert_eq!(seg.segment("blueberry"), vec!["blueberry"]);
    }

    #[test]
    fn test_unknown_token_stays_whole() {
        let seg = segmenter(&["egg"]);
        assert_eq!(seg.segment("xyzzy"), vec!["xyzzy"]);
    }

    #[test]
    fn test_known_word_with_unknown_remainder() {
        let seg = segmenter(&["coffee"]);
        assert_eq!(seg.segment("coffeeqq"), vec!["coffee", "qq"]);
    }

    #[test]
    fn test_disabled_segmentation() {
        let seg = WordSegmenter::new(
            ["blueberry", "muffin"].iter().map(|w| w.to_string()).collect(),
            SegmentationConfig {
                enabled: false,
                ..Default::default()
            },
        );
        assert_eq!(seg.segment("blueberrymuffin"), vec!["blueberrymuffin"]);
    }
}
