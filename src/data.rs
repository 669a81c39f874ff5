// src/data.rs
//
// Record shapes shared by scraping, export and rendering.
//
// Every field is optional text. The shops disagree about formatting,
// currency glyphs and thousands separators, and a selector miss is an
// expected outcome — so nothing here ever assumes a field parsed,
// least of all as a number.

/// Full record for the primary (ofen.de) product page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProductRecord {
    pub model: Option<String>,
    pub artikelnummer: Option<String>,
    /// 13-digit numeric string; shape-checked only, no checksum.
    pub ean: Option<String>,
    /// Current (sale) price, site formatting preserved.
    pub preis: Option<String>,
    /// List price (UVP), site formatting preserved.
    pub uvp: Option<String>,
    pub lieferzeit: Option<String>,
    pub image_url: Option<String>,
}

/// What a comparison-shop spec can pull from its page.
/// Same laxity as ProductRecord, minus the image.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Listing {
    pub name: Option<String>,
    pub uvp: Option<String>,
    pub preis: Option<String>,
    pub lieferzeit: Option<String>,
    pub artikelnummer: Option<String>,
    pub ean: Option<String>,
}

/// One row of the side-by-side comparison: a Listing plus the shop
/// label and the literal source URL it was scraped from.
#[derive(Clone, Debug, PartialEq)]
pub struct ComparisonRow {
    pub shop: String,
    pub url: String,
    pub listing: Listing,
}

/// Fixed export column order. Matches the historical CSV layout;
/// do not reorder without migrating downstream consumers.
pub const COLUMNS: [&str; 8] = [
    "Shop", "URL", "Name", "UVP", "Preis", "Lieferzeit", "Artikelnummer", "EAN",
];

/// Ordered rows, one per configured shop. Configured order is kept;
/// never sorted by price or name.
#[derive(Clone, Debug, Default)]
pub struct ComparisonTable {
    pub rows: Vec<ComparisonRow>,
}

fn cell(v: &Option<String>) -> String {
    v.clone().unwrap_or_default()
}

impl ComparisonTable {
    pub fn headers() -> Vec<String> {
        COLUMNS.iter().map(|h| s!(*h)).collect()
    }

    /// Flatten to string rows in the fixed column order.
    pub fn to_rows(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|r| {
                vec![
                    r.shop.clone(),
                    r.url.clone(),
                    cell(&r.listing.name),
                    cell(&r.listing.uvp),
                    cell(&r.listing.preis),
                    cell(&r.listing.lieferzeit),
                    cell(&r.listing.artikelnummer),
                    cell(&r.listing.ean),
                ]
            })
            .collect()
    }
}

impl ProductRecord {
    /// Field/value pairs for display (CLI report, GUI grid).
    pub fn display_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Modell", cell(&self.model)),
            ("Artikelnummer", cell(&self.artikelnummer)),
            ("EAN", cell(&self.ean)),
            ("Preis", cell(&self.preis)),
            ("UVP", cell(&self.uvp)),
            ("Lieferzeit", cell(&self.lieferzeit)),
            ("Bild", cell(&self.image_url)),
        ]
    }
}
