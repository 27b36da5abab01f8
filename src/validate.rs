use crate::error::{Result, ScraperError};
use jsonschema::JSONSchema;
use once_cell::sync::OnceCell;
use serde_json::Value;

const PRODUCT_SCHEMA: &str = include_str!("../schemas/product_record.v1.json");

// jsonschema 0.17 wants the schema document to outlive the compiled validator
static SCHEMA_JSON: OnceCell<Value> = OnceCell::new();

fn schema_json() -> Result<&'static Value> {
    SCHEMA_JSON.get_or_try_init(|| {
        serde_json::from_str(PRODUCT_SCHEMA).map_err(ScraperError::from)
    })
}

pub fn compile_schema() -> Result<JSONSchema> {
    JSONSchema::options()
        .compile(schema_json()?)
        .map_err(|e| ScraperError::Schema(e.to_string()))
}

/// Check a catalog document against the product record schema.
///
/// The outer error is for a broken schema; the inner list holds one message per
/// violation in the document.
pub fn validate_products(instance: &Value) -> Result<std::result::Result<(), Vec<String>>> {
    let compiled = compile_schema()?;
    let outcome = compiled.validate(instance).map_err(|errors| {
        errors
            .map(|error| format!("{} at {}", error, error.instance_path))
            .collect::<Vec<_>>()
    });
    Ok(outcome)
}
