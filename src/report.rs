use crate::types::{AnnotatedProduct, CategoryLabel};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// Aggregate view printed after a run. Not persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub total: usize,
    /// Count per type, in first-seen order
    pub by_type: Vec<(CategoryLabel, usize)>,
    /// Most frequent brands, ties kept in first-seen order
    pub top_brands: Vec<(String, usize)>,
}

/// Count occurrences of each key while remembering first-seen order
fn count_in_order<K, I>(keys: I) -> Vec<(K, usize)>
where
    K: Eq + std::hash::Hash + Clone,
    I: IntoIterator<Item = K>,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut counts: Vec<(K, usize)> = Vec::new();
    for key in keys {
        match index.get(&key) {
            Some(&pos) => counts[pos].1 += 1,
            None => {
                index.insert(key.clone(), counts.len());
                counts.push((key, 1));
            }
        }
    }
    counts
}

impl Summary {
    pub fn from_products(products: &[AnnotatedProduct], top_n: usize) -> Self {
        let by_type = count_in_order(products.iter().map(|p| p.product_type));

        let mut top_brands = count_in_order(products.iter().map(|p| p.brand.clone()));
        // sort_by is stable, so equal counts keep first-seen order
        top_brands.sort_by(|a, b| b.1.cmp(&a.1));
        top_brands.truncate(top_n);

        Self {
            total: products.len(),
            by_type,
            top_brands,
        }
    }

    pub fn count_for(&self, label: CategoryLabel) -> usize {
        self.by_type
            .iter()
            .find(|(l, _)| *l == label)
            .map(|(_, n)| *n)
            .unwrap_or(0)
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "📦 {} unique products", self.total)?;
        writeln!(f, "By type:")?;
        for (label, count) in &self.by_type {
            writeln!(f, "   {label}: {count}")?;
        }
        writeln!(f, "Top brands:")?;
        for (brand, count) in &self.top_brands {
            writeln!(f, "   {brand}: {count}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PackagingLabel, SourceLabel};

    fn product(name: &str, product_type: CategoryLabel) -> AnnotatedProduct {
        AnnotatedProduct {
            id: None,
            name: name.to_string(),
            score: 50,
            product_type,
            image: None,
            brand: name.split_whitespace().next().unwrap().to_string(),
            packaging: PackagingLabel::Plastic,
            source: SourceLabel::Spring,
            details: None,
        }
    }

    #[test]
    fn test_top_brand_comes_first() {
        let products = vec![
            product("Primo Spring Water Gallon", CategoryLabel::WaterDelivery),
            product("Sparkletts Spring Water Gallon", CategoryLabel::WaterDelivery),
            product("Menehune Purified Water Gallon", CategoryLabel::WaterDelivery),
            product("Sparkletts Distilled Water Gallon", CategoryLabel::WaterDelivery),
            product("TriBeCa Spring Water Gallon", CategoryLabel::WaterDelivery),
            product("Alka1 Alkaline Water Gallon", CategoryLabel::WaterDelivery),
            product("Sparkletts Purified Water Gallon", CategoryLabel::WaterDelivery),
            product("Blue Falls Purified Water Gallon", CategoryLabel::WaterDelivery),
        ];
        let summary = Summary::from_products(&products, 10);
        assert_eq!(summary.top_brands[0], ("Sparkletts".to_string(), 3));
        assert_eq!(summary.top_brands.len(), 6);
        // Ties stay in first-seen order
        let rest: Vec<&str> = summary.top_brands[1..].iter().map(|(b, _)| b.as_str()).collect();
        assert_eq!(rest, vec!["Primo", "Menehune", "TriBeCa", "Alka1", "Blue"]);
    }

    #[test]
    fn test_top_brands_truncated() {
        let products: Vec<_> = (0..15)
            .map(|i| product(&format!("Brand{i} Water"), CategoryLabel::BottledWater))
            .collect();
        let summary = Summary::from_products(&products, 10);
        assert_eq!(summary.top_brands.len(), 10);
        assert_eq!(summary.top_brands[0].0, "Brand0");
        assert_eq!(summary.top_brands[9].0, "Brand9");
    }

    #[test]
    fn test_counts_by_type() {
        let products = vec![
            product("Voss Sparkling", CategoryLabel::SparklingWater),
            product("Evian Still", CategoryLabel::BottledWater),
            product("Perrier Sparkling", CategoryLabel::SparklingWater),
        ];
        let summary = Summary::from_products(&products, 10);
        assert_eq!(summary.total, 3);
        assert_eq!(
            summary.by_type,
            vec![(CategoryLabel::SparklingWater, 2), (CategoryLabel::BottledWater, 1)]
        );
        assert_eq!(summary.count_for(CategoryLabel::FlavoredWater), 0);
    }

    #[test]
    fn test_display_lists_sections() {
        let products = vec![product("Voss Sparkling", CategoryLabel::SparklingWater)];
        let rendered = Summary::from_products(&products, 10).to_string();
        assert!(rendered.contains("1 unique products"));
        assert!(rendered.contains("sparkling_water: 1"));
        assert!(rendered.contains("Voss: 1"));
    }

    #[test]
    fn test_empty_summary() {
        let summary = Summary::from_products(&[], 10);
        assert_eq!(summary.total, 0);
        assert!(summary.by_type.is_empty());
        assert!(summary.top_brands.is_empty());
    }
}
