//! # Stopwords Module
//!
//! Standard English stopword list (the NLTK corpus) with food-relevant words
//! removed, used by the text normalizer to filter tokens.

use std::collections::HashSet;

use crate::parser_config::STOPWORD_EXCEPTIONS;

/// NLTK English stopwords
pub const ENGLISH_STOPWORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan", "shan't",
    "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't", "wouldn",
    "wouldn't",
];

/// Stopword filter with the fixed exclusion list applied
#[derive(Debug, Clone)]
pub struct StopwordSet {
    words: HashSet<&'static str>,
}

impl StopwordSet {
    /// Build the English set minus `STOPWORD_EXCEPTIONS`
    pub fn english() -> Self {
        let words = ENGLISH_STOPWORDS
            .iter()
            .copied()
            .filter(|w| !STOPWORD_EXCEPTIONS.contains(w))
            .collect();
        Self { words }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Drop stopword tokens, rejoining the rest with single spaces
    pub fn remove_from(&self, text: &str) -> String {
        text.split_whitespace()
            .filter(|word| !self.contains(word))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for StopwordSet {
    fn default() -> Self {
        Self::english()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exceptions_are_not_stopwords() {
        let stopwords = StopwordSet::english();
        for word in STOPWORD_EXCEPTIONS {
            assert!(!stopwords.contains(word), "'{}' should be kept", word);
        }
        assert!(stopwords.contains("the"));
        assert!(stopwords.contains("a"));
    }

    #[test]
    fn test_remove_from() {
        let stopwords = StopwordSet::english();
        assert_eq!(
            stopwords.remove_from("a cup of the pre work out with no sugar"),
            "cup of pre work out with no sugar"
        );
        assert_eq!(stopwords.remove_from("vitamin d"), "vitamin d");
        assert_eq!(stopwords.remove_from("the"), "");
    }
}
