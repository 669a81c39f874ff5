// src/specs/feuerdepot.rs
//! Spec for feuerdepot.de (Shopware classic skin).
//!
//! The Artikel-Nr. sits in a bare text node next to the title, so it is
//! located by literal substring and the digits pulled out of that node.
//! No EAN anywhere on the page.

use scraper::Html;

use crate::data::Listing;
use super::fields::{first_match, Probe::*};

pub const URL: &str =
    "https://www.feuerdepot.de/pelletofen/pelletofen-la-nordica-extraflame-klaudia-plus-5-0-8-kw/?number=1286850";

const NAME: &[super::fields::Probe] = &[
    Css("h1.product--title"),
    Css("h1"),
];

const UVP: &[super::fields::Probe] = &[
    Css("span.price--line-through"),
];

const PREIS: &[super::fields::Probe] = &[
    Css("span.price--content"),
];

const LIEFERZEIT: &[super::fields::Probe] = &[
    TextNode("Lieferzeit"),
];

const ARTIKELNUMMER: &[super::fields::Probe] = &[
    TextNodeRe("Artikel-Nr", r"(\d+)"),
];

pub fn extract(doc: &Html) -> Listing {
    Listing {
        name: first_match(doc, NAME),
        uvp: first_match(doc, UVP),
        preis: first_match(doc, PREIS),
        lieferzeit: first_match(doc, LIEFERZEIT),
        artikelnummer: first_match(doc, ARTIKELNUMMER),
        ean: None,
    }
}
