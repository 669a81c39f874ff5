// src/specs/kamdi.rs
//! Spec for kamdi24.de.
//!
//! Plain `span.price` / `span.old-price` classes, and the article
//! number labelled "Art.-Nr." in a loose text node.

use scraper::Html;

use crate::data::Listing;
use super::fields::{first_match, Probe::*};

pub const URL: &str = "https://www.kamdi24.de/extraflame-klaudia-plus-50-pelletofen-bordeaux";

const NAME: &[super::fields::Probe] = &[
    Css("h1.product--title"),
    Css("h1"),
];

const PREIS: &[super::fields::Probe] = &[
    Css("span.price"),
];

const UVP: &[super::fields::Probe] = &[
    Css("span.old-price"),
];

const LIEFERZEIT: &[super::fields::Probe] = &[
    TextNode("Lieferzeit"),
];

const ARTIKELNUMMER: &[super::fields::Probe] = &[
    TextNodeRe("Art.-Nr.", r"(\d+)"),
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
