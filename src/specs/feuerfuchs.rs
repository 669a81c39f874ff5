// src/specs/feuerfuchs.rs
//! Spec for feuer-fuchs.de.
//!
//! The configured URL is a search-results page, not a product page;
//! ideally the first hit's detail page would be followed, but the
//! search page carries enough (h1 + Shopware price classes) for the
//! comparison. No article number or EAN to be had here.
//!
//! TODO: follow the first search hit to its product page once the
//! shop's detail URLs stabilize.

use scraper::Html;

use crate::data::Listing;
use super::fields::{first_match, Probe::*};

pub const URL: &str = "https://www.feuer-fuchs.de/suche/?search=Pelletofen+Extraflame+Klaudia+5.0";

const NAME: &[super::fields::Probe] = &[
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

pub fn extract(doc: &Html) -> Listing {
    Listing {
        name: first_match(doc, NAME),
        uvp: first_match(doc, UVP),
        preis: first_match(doc, PREIS),
        lieferzeit: first_match(doc, LIEFERZEIT),
        artikelnummer: None,
        ean: None,
    }
}
