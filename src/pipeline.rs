use crate::classifier::{brand_of, classify_packaging, classify_source};
use crate::error::{Result, ScraperError};
use crate::report::Summary;
use crate::types::{AnnotatedProduct, ProductExtractor, RawProduct};
use metrics::counter;
use serde::Serialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::{debug, info, instrument};

/// Result of a complete pipeline run
#[derive(Debug, Serialize)]
pub struct PipelineResult {
    pub source: String,
    pub total_records: usize,
    pub unique_products: usize,
    pub duplicates_dropped: usize,
    pub output_file: String,
    pub summary: Summary,
}

pub struct Pipeline;

impl Pipeline {
    /// Key two records share when they describe the same product
    pub fn dedup_key(name: &str) -> String {
        name.trim().to_lowercase()
    }

    /// Attach brand, packaging and source to a single record
    pub fn annotate(index: usize, raw: &RawProduct) -> Result<AnnotatedProduct> {
        let brand = brand_of(&raw.name).ok_or_else(|| ScraperError::InvalidRecord {
            index,
            reason: "product name is empty".to_string(),
        })?;

        Ok(AnnotatedProduct {
            id: None,
            name: raw.name.clone(),
            score: raw.score,
            product_type: raw.product_type,
            image: None,
            brand: brand.to_string(),
            packaging: classify_packaging(&raw.name),
            source: classify_source(&raw.name),
            details: None,
        })
    }

    /// Drop repeated products and annotate the survivors.
    ///
    /// The first record for a given key wins; output keeps input order.
    #[instrument(skip(raw_products), fields(records = raw_products.len()))]
    pub fn assemble(raw_products: &[RawProduct]) -> Result<Vec<AnnotatedProduct>> {
        let mut seen: HashSet<String> = HashSet::new();
        let mut products = Vec::with_capacity(raw_products.len());

        for (index, raw) in raw_products.iter().enumerate() {
            let key = Self::dedup_key(&raw.name);
            if key.is_empty() {
                return Err(ScraperError::InvalidRecord {
                    index,
                    reason: "product name is empty".to_string(),
                });
            }
            if !seen.insert(key) {
                debug!("Dropping duplicate product: {}", raw.name);
                continue;
            }
            products.push(Self::annotate(index, raw)?);
        }

        let dropped = raw_products.len() - products.len();
        counter!("water_products_unique_total").increment(products.len() as u64);
        counter!("water_products_duplicates_total").increment(dropped as u64);
        info!("Assembled {} unique products ({} duplicates dropped)", products.len(), dropped);
        Ok(products)
    }

    /// Write the catalog as pretty-printed JSON, replacing whatever is at `path`
    pub fn persist_to_json(products: &[AnnotatedProduct], path: &Path) -> Result<String> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let json_content = serde_json::to_string_pretty(products)?;
        fs::write(path, json_content)?;

        Ok(path.to_string_lossy().to_string())
    }

    /// Run extraction, assembly and persistence end to end
    #[instrument(skip(extractor), fields(source = %extractor.source_name()))]
    pub fn run(
        extractor: &dyn ProductExtractor,
        output_path: &Path,
        top_brands: usize,
    ) -> Result<PipelineResult> {
        let source = extractor.source_name().to_string();
        counter!("water_pipeline_runs_total", "source" => source.clone()).increment(1);

        info!("📡 Reading products from {}", source);
        let raw_products = extractor.extract()?;
        info!("✅ Read {} raw records", raw_products.len());

        let products = Self::assemble(&raw_products)?;

        let output_file = Self::persist_to_json(&products, output_path)?;
        info!("💾 Saved {} products to {}", products.len(), output_file);

        let summary = Summary::from_products(&products, top_brands);

        Ok(PipelineResult {
            source,
            total_records: raw_products.len(),
            unique_products: products.len(),
            duplicates_dropped: raw_products.len() - products.len(),
            output_file,
            summary,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CategoryLabel, PackagingLabel, SourceLabel};

    fn raw(name: &str, score: u32) -> RawProduct {
        RawProduct {
            name: name.to_string(),
            score,
            product_type: CategoryLabel::BottledWater,
        }
    }

    #[test]
    fn test_dedup_key_normalizes_case_and_whitespace() {
        assert_eq!(
            Pipeline::dedup_key("  Aqua Carpatica Spring Water Glass Bottle  "),
            "aqua carpatica spring water glass bottle"
        );
    }

    #[test]
    fn test_assemble_keeps_first_occurrence() {
        let input = vec![
            raw("Aqua Carpatica Spring Water Glass Bottle", 92),
            raw("Hallstein Water Gallon", 81),
            raw("aqua carpatica spring water glass bottle  ", 10),
        ];
        let products = Pipeline::assemble(&input).unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].name, "Aqua Carpatica Spring Water Glass Bottle");
        assert_eq!(products[0].score, 92);
        assert_eq!(products[1].name, "Hallstein Water Gallon");
    }

    #[test]
    fn test_annotate_fills_derived_fields() {
        let product = Pipeline::annotate(0, &raw("Waiakea Alkaline Water Aluminum Bottle", 80)).unwrap();
        assert_eq!(product.brand, "Waiakea");
        assert_eq!(product.packaging, PackagingLabel::Aluminum);
        assert_eq!(product.source, SourceLabel::Municipal);
        assert!(product.id.is_none());
        assert!(product.image.is_none());
        assert!(product.details.is_none());
    }

    #[test]
    fn test_blank_name_fails_fast() {
        let input = vec![raw("Voss Sparkling Water Glass Bottle", 50), raw("   ", 40)];
        let err = Pipeline::assemble(&input).unwrap_err();
        assert!(matches!(err, ScraperError::InvalidRecord { index: 1, .. }));
    }

    #[test]
    fn test_assemble_empty_input() {
        assert!(Pipeline::assemble(&[]).unwrap().is_empty());
    }
}
