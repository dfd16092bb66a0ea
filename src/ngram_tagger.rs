//! # N-gram Tagger Module
//!
//! Greedy longest-match segmentation of a token stream against the per-length
//! gram sets. Passes run from the longest gram length down to 1; within a pass
//! starting positions are scanned left to right. A match is accepted only when
//! every token it covers is still unmatched, so accepted matches never overlap
//! and a longer match always beats a shorter one.

use log::trace;

use crate::dictionary::DictionaryStore;
use crate::food_types::TokenTag;
use crate::parser_config::MAX_GRAM_LENGTH;

/// Split corrected text into tokens.
///
/// Tokens are whitespace-delimited; ASCII punctuation other than inner `-`
/// and `'` becomes a token of its own ("m&m" → "m", "&", "m"). A trailing
/// possessive `'s` is split off as its own token ("m's" → "m", "'s").
pub fn tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    for chunk in text.split_whitespace() {
        let mut current = String::new();
        for c in chunk.chars() {
            let joins_word = c == '-' || c == '\'';
            if c.is_ascii_punctuation() && !(joins_word && !current.is_empty()) {
                push_word(&mut tokens, std::mem::take(&mut current));
                tokens.push(c.to_string());
            } else {
                current.push(c);
            }
        }
        push_word(&mut tokens, current);
    }
    tokens
}

fn push_word(tokens: &mut Vec<String>, word: String) {
    match word.strip_suffix("'s") {
        Some(stem) if !stem.is_empty() => {
            tokens.push(stem.to_string());
            tokens.push("'s".to_string());
        }
        _ if word.is_empty() => {}
        _ => tokens.push(word),
    }
}

/// Outcome of tagging one token sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedTokens {
    pub tokens: Vec<String>,
    /// Matched phrases in acceptance order: longest pass first, left to right within a pass
    pub matched_foods: Vec<String>,
    /// One tag per token
    pub tags: Vec<TokenTag>,
}

impl TaggedTokens {
    pub fn unknown_count(&self) -> usize {
        self.tags.iter().filter(|tag| tag.is_unmatched()).count()
    }

    /// Maximal runs of unmatched tokens, each joined by a single space
    pub fn unknown_spans(&self) -> Vec<String> {
        let mut spans = Vec::new();
        let mut current: Vec<&str> = Vec::new();
        for (token, tag) in self.tokens.iter().zip(&self.tags) {
            if tag.is_unmatched() {
                current.push(token);
            } else if !current.is_empty() {
                spans.push(current.join(" "));
                current.clear();
            }
        }
        if !current.is_empty() {
            spans.push(current.join(" "));
        }
        spans
    }
}

/// Tag a token sequence against the dictionary's gram sets
pub fn tag_tokens(tokens: Vec<String>, store: &DictionaryStore) -> TaggedTokens {
    let mut tags = vec![TokenTag::Unmatched; tokens.len()];
    let mut matched_foods = Vec::new();

    for gram_length in (1..=MAX_GRAM_LENGTH).rev() {
        if tokens.len() < gram_length {
            continue;
        }
        let Some(gram_set) = store.gram_set(gram_length) else {
            continue;
        };
        if gram_set.is_empty() {
            continue;
        }

        for start in 0..=tokens.len() - gram_length {
            let span = start..start + gram_length;
            if !tags[span.clone()].iter().all(TokenTag::is_unmatched) {
                continue;
            }
            let phrase = tokens[span.clone()].join(" ");
            if gram_set.contains(&phrase) {
                trace!("Matched {}-gram '{}' at token {}", gram_length, phrase, start);
                tags[span].fill(TokenTag::Matched(gram_length));
                matched_foods.push(phrase);
            }
        }
    }

    TaggedTokens {
        tokens,
        matched_foods,
        tags,
    }
}
