//! # Food Types Module
//!
//! This module defines the core types shared by the dictionary, the tagger and
//! the parser: food categories, tag records, dictionary entries, per-token tags
//! and the per-entry parse result.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::parser_config::TAG_COLUMNS;

/// Category label of a dictionary term
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FoodType {
    Food,
    Beverage,
    Medicine,
    Water,
    Modifier,
    General,
    Stopword,
    Selfcare,
}

impl FoodType {
    /// Parse a `food_type` cell. Accepts the short codes of the source data
    /// (`f`, `b`, `m`, `w`) as well as the long names.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "f" | "food" => Some(FoodType::Food),
            "b" | "beverage" => Some(FoodType::Beverage),
            "m" | "medicine" => Some(FoodType::Medicine),
            "w" | "water" => Some(FoodType::Water),
            "modifier" => Some(FoodType::Modifier),
            "general" => Some(FoodType::General),
            "stopword" => Some(FoodType::Stopword),
            "selfcare" => Some(FoodType::Selfcare),
            _ => None,
        }
    }

    /// Short code as stored in the dictionary table
    pub fn code(&self) -> &'static str {
        match self {
            FoodType::Food => "f",
            FoodType::Beverage => "b",
            FoodType::Medicine => "m",
            FoodType::Water => "w",
            FoodType::Modifier => "modifier",
            FoodType::General => "general",
            FoodType::Stopword => "stopword",
            FoodType::Selfcare => "selfcare",
        }
    }

    /// Whether words of this type's terms feed the food phrase vocabulary
    pub fn is_consumable(&self) -> bool {
        matches!(self, FoodType::Food | FoodType::Beverage | FoodType::Medicine)
    }
}

impl fmt::Display for FoodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FoodType::Food => "food",
            FoodType::Beverage => "beverage",
            FoodType::Medicine => "medicine",
            FoodType::Water => "water",
            FoodType::Modifier => "modifier",
            FoodType::General => "general",
            FoodType::Stopword => "stopword",
            FoodType::Selfcare => "selfcare",
        };
        write!(f, "{name}")
    }
}

/// Fixed-shape tag record: one slot per `tagN` column, `None` when absent
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodTags([Option<String>; TAG_COLUMNS]);

impl FoodTags {
    /// Build from the raw tag cells; empty or whitespace-only cells become `None`
    pub fn from_cells(cells: [Option<String>; TAG_COLUMNS]) -> Self {
        Self(cells.map(|cell| cell.map(|c| c.trim().to_string()).filter(|c| !c.is_empty())))
    }

    /// All slots in column order
    pub fn slots(&self) -> &[Option<String>; TAG_COLUMNS] {
        &self.0
    }

    /// Present tags in column order
    pub fn present(&self) -> Vec<&str> {
        self.0.iter().filter_map(|tag| tag.as_deref()).collect()
    }
}

/// One accepted dictionary row
#[derive(Debug, Clone, PartialEq)]
pub struct DictionaryEntry {
    pub term: String,
    pub gram_length: usize,
    pub food_type: FoodType,
    pub tags: FoodTags,
}

/// Per-token matching state in the tagger's scratch array
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenTag {
    Unmatched,
    /// Consumed by a dictionary match of the given gram length
    Matched(usize),
}

impl TokenTag {
    pub fn is_unmatched(&self) -> bool {
        matches!(self, TokenTag::Unmatched)
    }
}

/// Result of parsing one raw log entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseResult {
    /// Matched dictionary terms, longest-match pass order within each comma item
    pub matched_foods: Vec<String>,
    /// Tokens across all comma items after cleaning
    pub token_count: usize,
    /// Tokens that matched no dictionary term
    pub unknown_count: usize,
    /// Maximal contiguous runs of unmatched tokens, joined by a space
    pub unknown_spans: Vec<String>,
}

impl ParseResult {
    /// Tokens consumed by matches; always `token_count - unknown_count`
    pub fn consumed_token_count(&self) -> usize {
        self.token_count - self.unknown_count
    }

    /// Whether every token of the entry was recognized
    pub fn is_fully_recognized(&self) -> bool {
        self.unknown_count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_food_type_codes() {
        assert_eq!(FoodType::from_code("f"), Some(FoodType::Food));
        assert_eq!(FoodType::from_code("beverage"), Some(FoodType::Beverage));
        assert_eq!(FoodType::from_code(" w "), Some(FoodType::Water));
        assert_eq!(FoodType::from_code("selfcare"), Some(FoodType::Selfcare));
        assert_eq!(FoodType::from_code("snack"), None);
        assert_eq!(FoodType::from_code(""), None);

        for food_type in [FoodType::Food, FoodType::Medicine, FoodType::General] {
            assert_eq!(FoodType::from_code(food_type.code()), Some(food_type));
        }
    }

    #[test]
    fn test_consumable_types() {
        assert!(FoodType::Food.is_consumable());
        assert!(FoodType::Beverage.is_consumable());
        assert!(FoodType::Medicine.is_consumable());
        assert!(!FoodType::Water.is_consumable());
        assert!(!FoodType::Modifier.is_consumable());
    }

    #[test]
    fn test_food_tags_drop_empty_cells() {
        let tags = FoodTags::from_cells([
            Some("alcohol".to_string()),
            Some("".to_string()),
            None,
            Some("liquor".to_string()),
            Some("   ".to_string()),
            None,
            None,
        ]);
        assert_eq!(tags.present(), vec!["alcohol", "liquor"]);
        assert_eq!(tags.slots()[1], None);
        assert_eq!(tags.slots()[3], Some("liquor".to_string()));
    }

    #[test]
    fn test_parse_result_counts() {
        let result = ParseResult {
            matched_foods: vec!["egg".to_string()],
            token_count: 3,
            unknown_count: 2,
            unknown_spans: vec!["big plate".to_string()],
        };
        assert_eq!(result.consumed_token_count(), 1);
        assert!(!result.is_fully_recognized());
    }
}
