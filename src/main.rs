use anyhow::{Context, Result};
use log::info;
use serde::Serialize;
use std::env;
use std::io::{self, BufRead, Write};

use food_parser::food_parser::FoodParser;
use food_parser::food_types::ParseResult;
use food_parser::parser_config::{ParserConfig, CORRECTIONS_PATH_ENV, DICTIONARY_PATH_ENV};

/// One output line: the raw entry and what was recognized in it
#[derive(Serialize)]
struct ParsedLine<'a> {
    entry: &'a str,
    #[serde(flatten)]
    result: ParseResult,
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    // Load environment variables from .env file
    dotenv::dotenv().ok();

    let dictionary_path = env::var(DICTIONARY_PATH_ENV)
        .with_context(|| format!("{DICTIONARY_PATH_ENV} must be set"))?;
    let corrections_path = env::var(CORRECTIONS_PATH_ENV)
        .with_context(|| format!("{CORRECTIONS_PATH_ENV} must be set"))?;

    let config = ParserConfig::default().with_env_overrides();
    let parser = FoodParser::from_paths(&dictionary_path, &corrections_path, config)
        .context("Failed to initialize food parser")?;

    let entries = io::stdin()
        .lock()
        .lines()
        .collect::<Result<Vec<String>, _>>()
        .context("Failed to read entries from stdin")?;
    info!("Parsing {} entries", entries.len());

    let results = parser.parse_batch(&entries);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for (entry, result) in entries.iter().zip(results) {
        let line = ParsedLine { entry, result };
        serde_json::to_writer(&mut out, &line).context("Failed to serialize result")?;
        writeln!(out)?;
    }

    info!("Done");
    Ok(())
}
