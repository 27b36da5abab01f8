use anyhow::{Context, Result};
use clap::Parser;
use serde_json::Value;
use std::{fs, path::PathBuf};
use water_scraper::validate::validate_products;

/// Validate a catalog JSON file against the product record schema.
#[derive(Parser, Debug)]
#[command(name = "validate-catalog", version, about = "Validate catalog JSON against schema")]
struct Cli {
    /// Path to the catalog JSON file to validate
    path: PathBuf,
}

fn load_json(path: &PathBuf) -> Result<Value> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let json: Value = serde_json::from_str(&data)
        .with_context(|| format!("Failed to parse JSON in {}", path.display()))?;
    Ok(json)
}

fn main() -> Result<()> {
    let args = Cli::parse();
    let instance = load_json(&args.path)?;

    match validate_products(&instance).context("Failed to compile JSON Schema")? {
        Ok(()) => {
            println!("valid");
            Ok(())
        }
        Err(errors) => {
            eprintln!("invalid:");
            for error in errors {
                eprintln!("- {}", error);
            }
            std::process::exit(1)
        }
    }
}
