// src/specs/ofen.rs
//! Spec for the primary catalog site, ofen.de.
//!
//! This is the only site we take the full record from, image included.
//! The shop runs Shopware; product pages come in two skins (classic
//! `product--*` classes and the newer `product-header-*` ones), hence
//! the two-deep CSS chains. Artikelnummer and EAN have no reliable
//! markup at all and fall through to regexes over the page text.

use scraper::Html;

use crate::core::sanitize::strip_price_marker;
use crate::data::ProductRecord;
use super::fields::{first_match, Probe::*};

const MODEL: &[super::fields::Probe] = &[
    Css("h1.product--title"),
    Css("h1.product-header-title"),
];

const ARTIKELNUMMER: &[super::fields::Probe] = &[
    TextRe(r"Artikel-?Nr\.?:\s*(\d+)"),
];

const PREIS: &[super::fields::Probe] = &[
    Css("span.price--content"),
    Css("div.price--current"),
];

const UVP: &[super::fields::Probe] = &[
    Css("span.price--line-through"),
    Css("span.price-old"),
];

const LIEFERZEIT: &[super::fields::Probe] = &[
    TextNode("Lieferzeit"),
];

// Any 13-digit run anywhere in the page text. No checksum, no anchor —
// an unrelated 13-digit number matches just as happily. Kept as-is for
// compatibility with the historical exports; see DESIGN.md.
const EAN: &[super::fields::Probe] = &[
    TextRe(r"\b(\d{13})\b"),
];

const IMAGE: &[super::fields::Probe] = &[
    CssAttr("span.image--media img", "src"),
    CssAttr("img.product--image", "src"),
    CssAttr(r#"meta[property="og:image"]"#, "content"),
];

pub fn extract(doc: &Html) -> ProductRecord {
    ProductRecord {
        model: first_match(doc, MODEL),
        artikelnummer: first_match(doc, ARTIKELNUMMER),
        ean: first_match(doc, EAN),
        // ofen.de hangs a `*` footnote marker on the sale price.
        preis: first_match(doc, PREIS).map(|p| strip_price_marker(&p)),
        uvp: first_match(doc, UVP),
        lieferzeit: first_match(doc, LIEFERZEIT),
        image_url: first_match(doc, IMAGE),
    }
}
