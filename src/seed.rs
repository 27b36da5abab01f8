use crate::constants::BUILTIN_SEED_SOURCE;
use crate::error::{Result, ScraperError};
use crate::types::{ProductExtractor, RawProduct};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Reference listing captured from the product page, one record per card
const BUILTIN_SEED: &str = include_str!("../data/seed_products.json");

pub fn builtin() -> Result<Vec<RawProduct>> {
    let products: Vec<RawProduct> = serde_json::from_str(BUILTIN_SEED)?;
    debug!("Loaded {} builtin seed records", products.len());
    Ok(products)
}

/// Load a seed list with the same shape as the builtin one
pub fn load(path: &Path) -> Result<Vec<RawProduct>> {
    let content = fs::read_to_string(path).map_err(|e| {
        ScraperError::Config(format!("Failed to read seed file '{}': {}", path.display(), e))
    })?;
    let products: Vec<RawProduct> = serde_json::from_str(&content)?;
    info!("Loaded {} seed records from {}", products.len(), path.display());
    Ok(products)
}

/// Serves a seed list through the extractor interface. Seed records keep their
/// pre-assigned type.
pub struct SeedExtractor {
    path: Option<PathBuf>,
    label: String,
}

impl Default for SeedExtractor {
    fn default() -> Self {
        Self::builtin()
    }
}

impl SeedExtractor {
    pub fn builtin() -> Self {
        Self {
            path: None,
            label: BUILTIN_SEED_SOURCE.to_string(),
        }
    }

    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let label = format!("seed:{}", path.display());
        Self {
            path: Some(path),
            label,
        }
    }
}

impl ProductExtractor for SeedExtractor {
    fn source_name(&self) -> &str {
        &self.label
    }

    fn extract(&self) -> Result<Vec<RawProduct>> {
        match &self.path {
            Some(path) => load(path),
            None => builtin(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CategoryLabel;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_seed_parses() {
        let products = builtin().unwrap();
        assert_eq!(products.len(), 76);
        assert_eq!(products[0].name, "Aqua Carpatica Spring Water Glass Bottle");
        assert_eq!(products[0].score, 92);
        assert_eq!(products[0].product_type, CategoryLabel::BottledWater);
    }

    #[test]
    fn test_builtin_seed_scores_in_observed_range() {
        let products = builtin().unwrap();
        assert!(products.iter().all(|p| (8..=92).contains(&p.score)));
    }

    #[test]
    fn test_builtin_seed_names_are_unique() {
        let products = builtin().unwrap();
        let keys: HashSet<String> = products.iter().map(|p| p.name.trim().to_lowercase()).collect();
        assert_eq!(keys.len(), products.len());
    }

    #[test]
    fn test_seed_types_are_not_reclassified() {
        // The seed says flavored even though the name says sparkling first
        let products = SeedExtractor::builtin().extract().unwrap();
        let sanzo = products
            .iter()
            .find(|p| p.name == "Sanzo Flavored Sparkling Water Can")
            .unwrap();
        assert_eq!(sanzo.product_type, CategoryLabel::FlavoredWater);
    }

    #[test]
    fn test_load_missing_file_is_config_error() {
        let err = load(Path::new("definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, ScraperError::Config(_)));
    }
}
