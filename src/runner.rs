// src/runner.rs
//
// Orchestration: fetch → extract → assemble. Strictly sequential; the
// shops are scraped one after another in configured order.

use std::error::Error;

use scraper::Html;

use crate::{
    data::{ComparisonRow, ComparisonTable, Listing, ProductRecord},
    params::Params,
    specs::{self, ofen},
};

/// Optional progress sink for GUI/CLI.
/// Implement this in the frontend (GUI: update status label; CLI: print lines).
pub trait Progress {
    fn begin(&mut self, _total: usize) {}
    fn log(&mut self, _msg: &str) {}
    fn item_done(&mut self, _shop: &str) {}
    fn update_status(&mut self, _msg: &str) {}
}

/// A no-op progress sink you can pass when you don't care.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Primary record plus the side-by-side shop table.
pub struct CompareResult {
    pub product: ProductRecord,
    pub table: ComparisonTable,
}

/// Page fetcher. Production code passes [`crate::core::net::http_get`];
/// tests hand in canned bodies instead.
pub type Fetch = fn(&str) -> Result<String, Box<dyn Error>>;

/// Fetch and extract the primary (ofen.de) product page.
/// A fetch failure here aborts the whole operation — without the
/// primary record there is nothing to compare or print.
pub fn scrape_product_with(url: &str, fetch: Fetch) -> Result<ProductRecord, Box<dyn Error>> {
    let body = fetch(url)?;
    let doc = Html::parse_document(&body);
    let mut record = ofen::extract(&doc);
    // Shopware likes root-relative image paths.
    record.image_url = record
        .image_url
        .map(|u| crate::core::sanitize::absolutize_url(url, &u));
    Ok(record)
}

/// Caller-supplied Artikelnummer/EAN win over scraped values.
fn apply_overrides(record: &mut ProductRecord, params: &Params) {
    if let Some(nr) = &params.artikelnummer {
        if !nr.is_empty() {
            record.artikelnummer = Some(nr.clone());
        }
    }
    if let Some(ean) = &params.ean {
        if !ean.is_empty() {
            record.ean = Some(ean.clone());
        }
    }
}

/// Run the full comparison: primary page, then every configured shop.
///
/// A shop fetch that fails leaves an empty row for that shop (label and
/// URL only) rather than killing the report; only the primary fetch is
/// fatal. No reconciliation happens between rows — the table shows the
/// raw per-shop values side by side.
pub fn compare(
    params: &Params,
    progress: Option<&mut dyn Progress>,
) -> Result<CompareResult, Box<dyn Error>> {
    compare_with(params, progress, crate::core::net::http_get)
}

/// Same as [`compare`] but with the fetcher passed in, so the whole
/// flow is exercisable against fixture HTML.
pub fn compare_with(
    params: &Params,
    mut progress: Option<&mut dyn Progress>,
    fetch: Fetch,
) -> Result<CompareResult, Box<dyn Error>> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(specs::SHOPS.len() + 1);
        p.update_status("Lade Produktseite…");
    }

    logf!("Compare: Begin url={}", params.url);

    let mut product = scrape_product_with(&params.url, fetch)?;
    apply_overrides(&mut product, params);

    logf!(
        "Compare: Primary OK model={:?} preis={:?}",
        product.model, product.preis
    );
    if let Some(p) = progress.as_deref_mut() {
        p.item_done("ofen.de");
    }

    let mut table = ComparisonTable::default();

    for shop in &specs::SHOPS {
        if let Some(p) = progress.as_deref_mut() {
            p.update_status(&format!("Lade {}…", shop.label));
        }

        let listing = match fetch(shop.url) {
            Ok(body) => {
                let doc = Html::parse_document(&body);
                (shop.extract)(&doc)
            }
            Err(e) => {
                loge!("Compare: {} fetch failed: {}", shop.label, e);
                Listing::default()
            }
        };

        logd!("Compare: {} preis={:?}", shop.label, listing.preis);

        table.rows.push(ComparisonRow {
            shop: s!(shop.label),
            url: s!(shop.url),
            listing,
        });

        if let Some(p) = progress.as_deref_mut() {
            p.item_done(shop.label);
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.update_status("Fertig");
    }

    Ok(CompareResult { product, table })
}
