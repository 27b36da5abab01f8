//! Keyword classifiers for product names.
//!
//! Each dimension is an ordered rule table. Rules are tested in order against the
//! lower-cased name and the first one whose keyword appears wins; when nothing
//! matches the table's fallback label is used. Several names contain more than one
//! keyword, so the order of each table is part of its behavior.

use crate::types::{CategoryLabel, PackagingLabel, SourceLabel};

/// Fires when the lower-cased name contains any of `keywords`.
#[derive(Debug, Clone, Copy)]
pub struct Rule<L: 'static> {
    pub keywords: &'static [&'static str],
    pub label: L,
}

impl<L: 'static> Rule<L> {
    pub fn matches(&self, lowered_name: &str) -> bool {
        self.keywords.iter().any(|kw| lowered_name.contains(kw))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RuleSet<L: 'static> {
    pub rules: &'static [Rule<L>],
    pub fallback: L,
}

impl<L: Copy + 'static> RuleSet<L> {
    /// Index of the first rule that fires for `name`, if any
    pub fn matching_rule(&self, name: &str) -> Option<usize> {
        let lowered = name.to_lowercase();
        self.rules.iter().position(|rule| rule.matches(&lowered))
    }

    pub fn classify(&self, name: &str) -> L {
        self.matching_rule(name)
            .map(|idx| self.rules[idx].label)
            .unwrap_or(self.fallback)
    }
}

pub const TYPE_RULES: RuleSet<CategoryLabel> = RuleSet {
    rules: &[
        Rule { keywords: &["sparkling"], label: CategoryLabel::SparklingWater },
        Rule { keywords: &["flavored"], label: CategoryLabel::FlavoredWater },
        Rule { keywords: &["delivery"], label: CategoryLabel::WaterDelivery },
    ],
    fallback: CategoryLabel::BottledWater,
};

pub const PACKAGING_RULES: RuleSet<PackagingLabel> = RuleSet {
    rules: &[
        Rule { keywords: &["glass"], label: PackagingLabel::Glass },
        Rule { keywords: &["aluminum", "can"], label: PackagingLabel::Aluminum },
        Rule { keywords: &["plastic"], label: PackagingLabel::Plastic },
        Rule { keywords: &["carton"], label: PackagingLabel::Carton },
        // Bulk delivery jugs are plastic
        Rule { keywords: &["gallon"], label: PackagingLabel::Plastic },
    ],
    // Premium waters mostly ship in glass
    fallback: PackagingLabel::Glass,
};

pub const SOURCE_RULES: RuleSet<SourceLabel> = RuleSet {
    rules: &[
        Rule { keywords: &["spring"], label: SourceLabel::Spring },
        Rule { keywords: &["mineral"], label: SourceLabel::Mineral },
        Rule { keywords: &["volcanic"], label: SourceLabel::Volcanic },
        Rule { keywords: &["artesian"], label: SourceLabel::Artesian },
        Rule { keywords: &["glacial"], label: SourceLabel::Spring },
        Rule { keywords: &["alkaline"], label: SourceLabel::Municipal },
        Rule { keywords: &["purified", "distilled"], label: SourceLabel::Municipal },
    ],
    fallback: SourceLabel::Spring,
};

pub fn classify_type(name: &str) -> CategoryLabel {
    TYPE_RULES.classify(name)
}

pub fn classify_packaging(name: &str) -> PackagingLabel {
    PACKAGING_RULES.classify(name)
}

pub fn classify_source(name: &str) -> SourceLabel {
    SOURCE_RULES.classify(name)
}

/// First whitespace-delimited token of `name`, verbatim.
///
/// Returns `None` when the name has no token at all.
pub fn brand_of(name: &str) -> Option<&str> {
    name.split_whitespace().next()
}
