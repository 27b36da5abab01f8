//! Splices the catalog into the static viewer page that ships alongside it.

use crate::constants::TEMPLATE_DATA_MARKER;
use crate::error::{Result, ScraperError};
use crate::types::AnnotatedProduct;
use std::fs;
use std::path::Path;
use tracing::info;

const DATA_TERMINATOR: &str = "];";

/// Replace the `const data = [...];` literal in `html` with `products`
pub fn embed_products(html: &str, products: &[AnnotatedProduct]) -> Result<String> {
    let start = html
        .find(TEMPLATE_DATA_MARKER)
        .ok_or(ScraperError::TemplateMarker(TEMPLATE_DATA_MARKER))?;
    let end = html[start..]
        .find(DATA_TERMINATOR)
        .map(|offset| start + offset + DATA_TERMINATOR.len())
        .ok_or(ScraperError::TemplateMarker(DATA_TERMINATOR))?;

    let data = serde_json::to_string_pretty(products)?;
    let mut out = String::with_capacity(html.len() + data.len());
    out.push_str(&html[..start]);
    out.push_str("const data = ");
    out.push_str(&data);
    out.push(';');
    out.push_str(&html[end..]);
    Ok(out)
}

/// Rewrite `template_path` in place with the catalog stored at `data_path`.
/// Returns the number of products embedded.
pub fn publish_file(template_path: &Path, data_path: &Path) -> Result<usize> {
    let products: Vec<AnnotatedProduct> = serde_json::from_str(&fs::read_to_string(data_path)?)?;
    let html = fs::read_to_string(template_path)?;

    let updated = embed_products(&html, &products)?;
    fs::write(template_path, updated)?;

    info!(
        "Updated {} with {} products from {}",
        template_path.display(),
        products.len(),
        data_path.display()
    );
    Ok(products.len())
}
