// anchors.rs
//
// The markup contract for zameen.com search result pages. Each field is
// located by exactly one anchor inside a listing node.

use crate::scraper::models::Field;
use crate::scraper::ScraperError;
use scraper::Selector;

pub const SITE_ORIGIN: &str = "https://www.zameen.com";

/// Marks one listing node on a results page.
pub const LISTING_SELECTOR: &str = r#"li[role="article"]"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Matcher {
    Class(&'static str),
    AriaLabel(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Trimmed text content of the anchor.
    Text,
    /// `origin` followed by the anchor's `href`.
    Href { origin: &'static str },
    /// First non-empty attribute, in the given order.
    FirstAttr(&'static [&'static str]),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anchor {
    pub field: Field,
    pub tag: &'static str,
    pub matcher: Matcher,
    pub rule: Rule,
}

impl Anchor {
    const fn text(field: Field, tag: &'static str, matcher: Matcher) -> Self {
        Self {
            field,
            tag,
            matcher,
            rule: Rule::Text,
        }
    }

    pub fn css(&self) -> String {
        match self.matcher {
            Matcher::Class(class) => format!("{}.{}", self.tag, class),
            Matcher::AriaLabel(label) => format!(r#"{}[aria-label="{}"]"#, self.tag, label),
        }
    }

    pub fn selector(&self) -> Result<Selector, ScraperError> {
        let css = self.css();
        Selector::parse(&css)
            .map_err(|e| ScraperError::HtmlParse(format!("bad anchor `{css}`: {e}")))
    }
}

pub const ANCHORS: [Anchor; 10] = [
    Anchor {
        field: Field::Url,
        tag: "a",
        matcher: Matcher::Class("d870ae17"),
        rule: Rule::Href {
            origin: SITE_ORIGIN,
        },
    },
    Anchor::text(Field::Title, "h2", Matcher::Class("_36dfb99f")),
    Anchor::text(Field::Price, "span", Matcher::Class("dc381b54")),
    Anchor::text(Field::Location, "div", Matcher::Class("db1aca2f")),
    Anchor::text(Field::Beds, "span", Matcher::AriaLabel("Beds")),
    Anchor::text(Field::Baths, "span", Matcher::AriaLabel("Baths")),
    Anchor::text(Field::AreaSqft, "span", Matcher::AriaLabel("Area")),
    Anchor::text(
        Field::CreatedAt,
        "span",
        Matcher::AriaLabel("Listing creation date"),
    ),
    Anchor::text(
        Field::UpdatedAt,
        "span",
        Matcher::AriaLabel("Listing updated date"),
    ),
    Anchor {
        field: Field::AgentImage,
        tag: "img",
        matcher: Matcher::AriaLabel("Agency photo"),
        rule: Rule::FirstAttr(&["src", "data-src", "data-srcset"]),
    },
];
