//! # Lemmatizer Module
//!
//! Noun lemmatization in the style of WordNet's morphy: irregular plurals come
//! from an exception table, regular plurals from suffix-detachment rules whose
//! results are only accepted when the lexicon knows them.

use lazy_static::lazy_static;
use log::trace;
use std::collections::{HashMap, HashSet};

/// Reduces a word to its dictionary form
pub trait Lemmatizer: Send + Sync {
    fn lemmatize(&self, word: &str) -> String;

    /// Lemmatize each whitespace-delimited word and rejoin with single spaces
    fn lemmatize_words(&self, phrase: &str) -> String {
        phrase
            .split_whitespace()
            .map(|word| self.lemmatize(word))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Noun suffix-detachment rules, tried in order
const NOUN_SUFFIX_RULES: [(&str, &str); 8] = [
    ("s", ""),
    ("ses", "s"),
    ("xes", "x"),
    ("zes", "z"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("men", "man"),
    ("ies", "y"),
];

lazy_static! {
    static ref NOUN_EXCEPTIONS: HashMap<&'static str, &'static str> = [
        ("leaves", "leaf"),
        ("loaves", "loaf"),
        ("halves", "half"),
        ("knives", "knife"),
        ("calves", "calf"),
        ("wolves", "wolf"),
        ("shelves", "shelf"),
        ("potatoes", "potato"),
        ("tomatoes", "tomato"),
        ("mangoes", "mango"),
        ("avocadoes", "avocado"),
        ("echoes", "echo"),
        ("heroes", "hero"),
        ("teeth", "tooth"),
        ("feet", "foot"),
        ("geese", "goose"),
        ("mice", "mouse"),
        ("children", "child"),
        ("women", "woman"),
        ("men", "man"),
        ("people", "person"),
        ("oxen", "ox"),
        ("cacti", "cactus"),
        ("fungi", "fungus"),
        ("radii", "radius"),
    ]
    .into_iter()
    .collect();
}

/// WordNet-style noun lemmatizer over a closed lexicon
#[derive(Debug, Clone, Default)]
pub struct MorphyLemmatizer {
    lexicon: HashSet<String>,
}

impl MorphyLemmatizer {
    pub fn new(lexicon: HashSet<String>) -> Self {
        Self { lexicon }
    }

    pub fn knows(&self, word: &str) -> bool {
        self.lexicon.contains(word)
    }

    pub fn lexicon(&self) -> &HashSet<String> {
        &self.lexicon
    }

    fn candidates(&self, word: &str) -> Vec<String> {
        if let Some(base) = NOUN_EXCEPTIONS.get(word) {
            return vec![base.to_string()];
        }

        let mut forms = Vec::new();
        if self.knows(word) {
            forms.push(word.to_string());
        }
        for (suffix, ending) in NOUN_SUFFIX_RULES {
            if let Some(stem) = word.strip_suffix(suffix) {
                if stem.is_empty() {
                    continue;
                }
                let form = format!("{stem}{ending}");
                if self.knows(&form) && !forms.contains(&form) {
                    forms.push(form);
                }
            }
        }
        forms
    }
}

impl Lemmatizer for MorphyLemmatizer {
    fn lemmatize(&self, word: &str) -> String {
        let forms = self.candidates(word);
        // shortest form wins; earlier candidates win ties
        let lemma = forms
            .into_iter()
            .reduce(|best, form| if form.len() < best.len() { form } else { best })
            .unwrap_or_else(|| word.to_string());
        if lemma != word {
            trace!("Lemmatized '{}' -> '{}'", word, lemma);
        }
        lemma
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lemmatizer(words: &[&str]) -> MorphyLemmatizer {
        MorphyLemmatizer::new(words.iter().map(|w| w.to_string()).collect())
    }

    #[test]
    fn test_regular_plurals() {
        let lem = lemmatizer(&["egg", "glass", "peach", "berry", "box", "dish"]);
        assert_eq!(lem.lemmatize("eggs"), "egg");
        assert_eq!(lem.lemmatize("glasses"), "glass");
        assert_eq!(lem.lemmatize("peaches"), "peach");
        assert_eq!(lem.lemmatize("berries"), "berry");
        assert_eq!(lem.lemmatize("boxes"), "box");
        assert_eq!(lem.lemmatize("dishes"), "dish");
    }

    #[test]
    fn test_unknown_words_pass_through() {
        let lem = lemmatizer(&["egg"]);
        assert_eq!(lem.lemmatize("hummus"), "hummus");
        assert_eq!(lem.lemmatize("gas"), "gas");
        assert_eq!(lem.lemmatize("s"), "s");
        assert_eq!(lem.lemmatize(""), "");
    }

    #[test]
    fn test_shortest_known_form_wins() {
        let lem = lemmatizer(&["oats", "oat"]);
        assert_eq!(lem.lemmatize("oats"), "oat");

        let lem = lemmatizer(&["grits"]);
        assert_eq!(lem.lemmatize("grits"), "grits");
    }

    #[test]
    fn test_irregular_plurals() {
        let lem = lemmatizer(&[]);
        assert_eq!(lem.lemmatize("potatoes"), "potato");
        assert_eq!(lem.lemmatize("leaves"), "leaf");
    }

    #[test]
    fn test_lemmatize_words() {
        let lem = lemmatizer(&["egg", "muffin"]);
        assert_eq!(lem.lemmatize_words("eggs  and muffins"), "egg and muffin");
    }

    #[test]
    fn test_lexicon_is_closed() {
        let lem = lemmatizer(&["egg", "toast"]);
        assert_eq!(lem.lexicon().len(), 2);
        assert!(lem.knows("toast"));
        assert!(!lem.knows("toasts"));
    }
}
