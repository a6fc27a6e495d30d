// extractor.rs
use crate::scraper::anchors::{Anchor, Rule, ANCHORS};
use crate::scraper::models::ListingRecord;
use crate::scraper::ScraperError;
use scraper::{ElementRef, Selector};
use tracing::trace;

/// Applies the anchor table to listing nodes. Selectors are compiled once.
pub struct FieldExtractor {
    compiled: Vec<(Anchor, Selector)>,
}

impl FieldExtractor {
    pub fn new() -> Result<Self, ScraperError> {
        let compiled = ANCHORS
            .iter()
            .map(|anchor| -> Result<_, ScraperError> { Ok((*anchor, anchor.selector()?)) })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { compiled })
    }

    /// Extracts every field from one listing node. Fields whose anchor is
    /// missing are left as `None`.
    pub fn extract(&self, node: ElementRef<'_>) -> ListingRecord {
        let mut record = ListingRecord::default();

        for (anchor, selector) in &self.compiled {
            let value = node
                .select(selector)
                .next()
                .and_then(|el| apply_rule(anchor.rule, el));
            if value.is_none() {
                trace!(field = anchor.field.name(), "anchor missing");
            }
            record.set(anchor.field, value);
        }

        record
    }
}

fn apply_rule(rule: Rule, el: ElementRef<'_>) -> Option<String> {
    match rule {
        // each text fragment is stripped and blank ones dropped before joining
        Rule::Text => Some(
            el.text()
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .collect::<String>(),
        ),
        Rule::Href { origin } => el.value().attr("href").map(|href| format!("{origin}{href}")),
        Rule::FirstAttr(names) => names
            .iter()
            .filter_map(|name| el.value().attr(name))
            .find(|v| !v.is_empty())
            .map(str::to_string),
    }
}
