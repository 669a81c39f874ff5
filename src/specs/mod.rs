// src/specs/mod.rs
//! # Site specs
//!
//! One module per shop, each encoding *where the ground truth lives in
//! that shop's HTML* at authoring time and *in what order the fallbacks
//! are tried*. The selectors are hard-coded and fragile by design —
//! when a shop redesigns, the spec gets re-authored, not patched around.
//!
//! ## What lives here
//! - **Pure HTML extraction** from an already-fetched, already-parsed page.
//! - **Probe choice & precedence** per field (see [`fields::Probe`]).
//! - The **static shop registry** the comparison runner walks: label,
//!   pre-selected product URL, extraction function. The URLs point at
//!   pages matching the same stove; keeping them current is a manual,
//!   out-of-band job.
//!
//! ## What does **not** live here
//! - **Networking** — the runner fetches; specs only parse.
//! - **Override handling, export formatting, GUI state** — higher layers.
//!
//! ## Conventions & invariants
//! - A missing field is `None`, never an error. Nothing validates that a
//!   matched value is semantically right; the EAN probe in particular
//!   matches any 13-digit run in the page text.
//! - Specs are testable offline against captured or inline HTML fixtures.

pub mod fields;

pub mod feuerdepot;
pub mod feuerfuchs;
pub mod kamdi;
pub mod ofen;

use scraper::Html;

use crate::data::Listing;

/// A configured comparison shop: fixed label, fixed product URL,
/// site-specific extraction.
pub struct ShopSpec {
    pub label: &'static str,
    pub url: &'static str,
    pub extract: fn(&Html) -> Listing,
}

/// The comparison set, in report order.
pub const SHOPS: [ShopSpec; 3] = [
    ShopSpec {
        label: "Feuerdepot",
        url: feuerdepot::URL,
        extract: feuerdepot::extract,
    },
    ShopSpec {
        label: "Kamdi24",
        url: kamdi::URL,
        extract: kamdi::extract,
    },
    ShopSpec {
        label: "Feuer-Fuchs",
        url: feuerfuchs::URL,
        extract: feuerfuchs::extract,
    },
];
