// src/params.rs
use std::path::PathBuf;
use crate::csv::Delim;

/// All shops get the same vanilla browser UA; ofen.de serves a
/// bot-check page to anything that looks like a script.
pub const USER_AGENT: &str = "Mozilla/5.0";

/// Basename of the comparison export; the extension follows the chosen
/// format (see [`crate::file::default_export_name`]).
pub const EXPORT_BASENAME: &str = "preisvergleich";
pub const DEFAULT_TAG_FILE: &str = "preisschild.pdf";

/// Decorative backdrop for the printed tag. Lives on the shop CDN;
/// if it is ever moved the render falls back to a placeholder line.
pub const BACKGROUND_IMAGE_URL: &str =
    "https://www.ofen.de/media/image/preisschild-hintergrund.jpg";

#[derive(Clone)]
pub struct Params {
    pub url: String,                   // ofen.de product page
    pub artikelnummer: Option<String>, // override: manufacturer article number
    pub ean: Option<String>,           // override: 13-digit EAN
    pub out: Option<PathBuf>,          // CSV output path (file or dir)
    pub format: Delim,
    pub include_headers: bool,
    pub tag: bool,                     // also generate the price-tag PDF
    pub tag_out: Option<PathBuf>,      // PDF output path
}

impl Params {
    pub fn new() -> Self {
        Self {
            url: s!(),
            artikelnummer: None,
            ean: None,
            out: None,
            format: Delim::Csv,
            include_headers: true,
            tag: false,
            tag_out: None,
        }
    }
}

impl Default for Params {
    fn default() -> Self { Self::new() }
}
