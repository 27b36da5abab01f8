//! Reads product cards off a saved, already rendered listing page.
//!
//! Only what the snapshot contains is seen: no scrolling, no pagination, no
//! network. A card contributes an observation when its image has usable alt text
//! and its text shows a `NN/100` score.

use crate::constants::PLACEHOLDER_ALT;
use crate::error::{Result, ScraperError};
use crate::types::{ProductExtractor, RawObservation, RawProduct};
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use std::fs;
use std::path::Path;
use tracing::{debug, info, instrument};

static SCORE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)/100").expect("score pattern is a valid regex"));

const CARD_SELECTOR: &str = r#"[data-testid="product-card"], div[class*="cursor-pointer"]"#;
const TEST_CARD_ID: &str = "product-card";

struct Selectors {
    card: Selector,
    image: Selector,
    label: Selector,
    paragraph: Selector,
}

impl Selectors {
    fn new() -> Result<Self> {
        Ok(Self {
            card: parse_selector(CARD_SELECTOR)?,
            image: parse_selector("img")?,
            label: parse_selector("div, p, span")?,
            paragraph: parse_selector("p")?,
        })
    }
}

fn parse_selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| ScraperError::Selector(format!("{css}: {e:?}")))
}

/// Pull the first `NN/100` score out of a card's text
pub fn parse_score(text: &str) -> Option<u32> {
    SCORE_PATTERN
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

pub struct HtmlSnapshotExtractor {
    html: String,
    label: String,
}

impl HtmlSnapshotExtractor {
    pub fn from_html(label: impl Into<String>, html: impl Into<String>) -> Self {
        Self {
            html: html.into(),
            label: label.into(),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let html = fs::read_to_string(path)?;
        Ok(Self::from_html(format!("html:{}", path.display()), html))
    }

    /// Raw `(name, score)` pairs in document order
    #[instrument(skip(self), fields(source = %self.label))]
    pub fn observations(&self) -> Result<Vec<RawObservation>> {
        let selectors = Selectors::new()?;
        let document = Html::parse_document(&self.html);

        let mut observations: Vec<RawObservation> = Vec::new();
        let mut candidates = 0usize;

        for card in document.select(&selectors.card) {
            candidates += 1;
            let Some(observation) = Self::read_card(&selectors, &card) else {
                continue;
            };

            // A wrapper div and the card inside it both match the card selector
            if observations.last() == Some(&observation) {
                debug!("Collapsing nested card for {}", observation.name);
                continue;
            }
            observations.push(observation);
        }

        info!(
            "Extracted {} products from {} candidate cards",
            observations.len(),
            candidates
        );
        Ok(observations)
    }

    fn read_card(selectors: &Selectors, card: &ElementRef) -> Option<RawObservation> {
        let is_test_card = card.value().attr("data-testid") == Some(TEST_CARD_ID);
        if !is_test_card {
            if card.value().attr("role") == Some("option") {
                return None;
            }
            card.select(&selectors.paragraph).next()?;
        }

        let image = card.select(&selectors.image).next()?;
        card.select(&selectors.label).next()?;

        let name = image.value().attr("alt")?.trim();
        if name.is_empty() || name == PLACEHOLDER_ALT || name.contains(PLACEHOLDER_ALT) {
            debug!("Skipping card with placeholder alt text {:?}", name);
            return None;
        }

        let text: String = card.text().collect();
        let score = match parse_score(&text) {
            Some(score) if score > 0 => score,
            _ => {
                debug!("Dropping {}: no score on card", name);
                return None;
            }
        };

        Some(RawObservation {
            name: name.to_string(),
            score,
        })
    }
}

impl ProductExtractor for HtmlSnapshotExtractor {
    fn source_name(&self) -> &str {
        &self.label
    }

    fn extract(&self) -> Result<Vec<RawProduct>> {
        Ok(self
            .observations()?
            .into_iter()
            .map(RawObservation::into_raw_product)
            .collect())
    }
}
