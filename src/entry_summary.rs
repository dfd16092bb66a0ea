//! # Entry Summary
//!
//! Formats a parsed entry for display, grouping matched foods by food type.

use crate::food_parser::FoodParser;
use crate::food_types::{FoodType, ParseResult};

/// Generate a summary of an entry's matches by food type
pub fn summarize_entry(parser: &FoodParser, result: &ParseResult) -> String {
    let mut food_items = Vec::new();
    let mut beverage_items = Vec::new();
    let mut medicine_items = Vec::new();
    let mut water_items = Vec::new();
    let mut other_items = Vec::new();

    for food in &result.matched_foods {
        match parser.resolve_type(food) {
            Some(FoodType::Food) => food_items.push(food.as_str()),
            Some(FoodType::Beverage) => beverage_items.push(food.as_str()),
            Some(FoodType::Medicine) => medicine_items.push(food.as_str()),
            Some(FoodType::Water) => water_items.push(food.as_str()),
            _ => other_items.push(food.as_str()),
        }
    }

    let mut summary = String::new();
    summary.push_str(&format!(
        "Entry summary ({} of {} tokens recognized)\n",
        result.consumed_token_count(),
        result.token_count
    ));

    let groups = [
        ("Food", &food_items),
        ("Beverage", &beverage_items),
        ("Medicine", &medicine_items),
        ("Water", &water_items),
        ("Other", &other_items),
    ];
    for (label, items) in groups {
        if !items.is_empty() {
            summary.push_str(&format!("{label}: {}\n", items.join(", ")));
        }
    }

    if !result.unknown_spans.is_empty() {
        summary.push_str(&format!("Unknown: {}\n", result.unknown_spans.join(", ")));
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::{CorrectionMap, DictionaryRow};
    use crate::parser_config::ParserConfig;

    fn parser() -> FoodParser {
        let rows = [
            ("toast", "f"),
            ("coffee", "b"),
            ("ibuprofen", "m"),
            ("water", "w"),
            ("walk", "selfcare"),
        ]
        .iter()
        .map(|(term, food_type)| DictionaryRow {
            gram_key: term.to_string(),
            gram_type: "1".to_string(),
            food_type: food_type.to_string(),
            ..Default::default()
        })
        .collect();
        FoodParser::from_rows(rows, CorrectionMap::new(), ParserConfig::default())
    }

    #[test]
    fn test_summary_groups_by_type() {
        let parser = parser();
        let result = parser.parse_entry("toast, coffee, ibuprofen, water, walk, zorbly");
        let summary = summarize_entry(&parser, &result);

        assert!(summary.contains("5 of 6 tokens recognized"));
        assert!(summary.contains("Food: toast"));
        assert!(summary.contains("Beverage: coffee"));
        assert!(summary.contains("Medicine: ibuprofen"));
        assert!(summary.contains("Water: water"));
        assert!(summary.contains("Other: walk"));
        assert!(summary.contains("Unknown: zorbly"));
    }

    #[test]
    fn test_summary_omits_empty_groups() {
        let parser = parser();
        let result = parser.parse_entry("coffee");
        let summary = summarize_entry(&parser, &result);

        assert!(summary.contains("Beverage: coffee"));
        assert!(!summary.contains("Food:"));
        assert!(!summary.contains("Unknown:"));
    }
}
