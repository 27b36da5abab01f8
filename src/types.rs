use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Top-level product category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryLabel {
    BottledWater,
    SparklingWater,
    FlavoredWater,
    WaterDelivery,
}

impl CategoryLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryLabel::BottledWater => "bottled_water",
            CategoryLabel::SparklingWater => "sparkling_water",
            CategoryLabel::FlavoredWater => "flavored_water",
            CategoryLabel::WaterDelivery => "water_delivery",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PackagingLabel {
    Glass,
    Aluminum,
    Plastic,
    Carton,
}

impl PackagingLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            PackagingLabel::Glass => "glass",
            PackagingLabel::Aluminum => "aluminum",
            PackagingLabel::Plastic => "plastic",
            PackagingLabel::Carton => "carton",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceLabel {
    Spring,
    Mineral,
    Volcanic,
    Artesian,
    Municipal,
}

impl SourceLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceLabel::Spring => "spring",
            SourceLabel::Mineral => "mineral",
            SourceLabel::Volcanic => "volcanic",
            SourceLabel::Artesian => "artesian",
            SourceLabel::Municipal => "municipal",
        }
    }
}

macro_rules! display_as_str {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        })*
    };
}

display_as_str!(CategoryLabel, PackagingLabel, SourceLabel);

/// Input record, either from the seed list or from an extraction pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawProduct {
    pub name: String,
    pub score: u32,
    #[serde(rename = "type")]
    pub product_type: CategoryLabel,
}

/// Persisted catalog entry. Field order here is the serialized field order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedProduct {
    /// Assigned by a later enrichment stage
    pub id: Option<serde_json::Value>,
    pub name: String,
    pub score: u32,
    #[serde(rename = "type")]
    pub product_type: CategoryLabel,
    pub image: Option<serde_json::Value>,
    pub brand: String,
    pub packaging: PackagingLabel,
    pub source: SourceLabel,
    pub details: Option<serde_json::Value>,
}

/// A `(name, score)` pair read off a listing page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawObservation {
    pub name: String,
    pub score: u32,
}

impl RawObservation {
    /// Observations carry no category, so the type is inferred from the name.
    pub fn into_raw_product(self) -> RawProduct {
        let product_type = crate::classifier::classify_type(&self.name);
        RawProduct {
            name: self.name,
            score: self.score,
            product_type,
        }
    }
}

/// Anything that can produce raw observations for the pipeline
pub trait ProductExtractor {
    /// Label used in logs and in the pipeline result
    fn source_name(&self) -> &str;

    /// Produce the records visible to this extractor, in page order
    fn extract(&self) -> Result<Vec<RawProduct>>;
}
