// src/pricetag.rs
//
// Printable price tag: one A5 card centered on an A4 page, dotted
// cut-guide border, decorative backdrop behind the content, product
// photo, then the text stack (model, Artikelnummer, sale price, UVP
// with strikethrough).
//
// Split in two stages so the interesting decisions are testable without
// a PDF reader: `plan()` turns a record plus optionally-fetched images
// into an ordered element list, `render()` just draws that list.

use std::error::Error;

use printpdf::{
    BuiltinFont, Color, Image, ImageTransform, Line, LineDashPattern, Mm, PdfDocument,
    PdfLayerReference, Point, Rgb,
};

use crate::data::ProductRecord;
use crate::params::BACKGROUND_IMAGE_URL;

pub const BG_PLACEHOLDER: &str = "[Hintergrundbild nicht verfügbar]";
pub const IMAGE_PLACEHOLDER: &str = "[Produktbild nicht verfügbar]";

/* ---------------- Page geometry (mm) ---------------- */

const PAGE_W: f32 = 210.0; // A4
const PAGE_H: f32 = 297.0;
const CARD_W: f32 = 148.0; // A5, portrait
const CARD_H: f32 = 210.0;
const CARD_X: f32 = (PAGE_W - CARD_W) / 2.0;
const CARD_Y: f32 = (PAGE_H - CARD_H) / 2.0;

const TEXT_X: f32 = CARD_X + 12.0;
const IMAGE_W: f32 = 80.0; // product photo, fixed width
const IMAGE_TOP: f32 = CARD_Y + CARD_H - 15.0;

const MODEL_Y: f32 = CARD_Y + 72.0;
const ARTNR_Y: f32 = CARD_Y + 62.0;
const PREIS_Y: f32 = CARD_Y + 44.0;
const UVP_Y: f32 = CARD_Y + 30.0;

const MODEL_PT: f32 = 20.0;
const ARTNR_PT: f32 = 10.0;
const PREIS_PT: f32 = 28.0;
const UVP_PT: f32 = 14.0;
const PLACEHOLDER_PT: f32 = 9.0;

/* ---------------- Plan ---------------- */

/// One drawable piece of the tag, in draw order (first = bottom).
#[derive(Clone, Debug, PartialEq)]
pub enum TagElement {
    /// Decorative backdrop, scaled to the full card, behind everything.
    Background(Vec<u8>),
    /// Product photo at fixed width.
    ProductImage(Vec<u8>),
    /// Stand-in line when an image could not be fetched.
    Placeholder(&'static str),
    Model(String),
    ArticleNumber(String),
    /// Current (sale) price — large, bold, red.
    Price(String),
    /// List price — muted gray, struck through. Only present when the
    /// record actually has one.
    Uvp(String),
}

#[derive(Clone, Debug, Default)]
pub struct TagPlan {
    pub elements: Vec<TagElement>,
}

/// Assemble the element list. Missing images degrade to placeholders;
/// missing text fields are simply left out.
pub fn plan(
    record: &ProductRecord,
    background: Option<Vec<u8>>,
    product_image: Option<Vec<u8>>,
) -> TagPlan {
    let mut elements = Vec::new();

    match background {
        Some(bytes) => elements.push(TagElement::Background(bytes)),
        None => elements.push(TagElement::Placeholder(BG_PLACEHOLDER)),
    }
    match product_image {
        Some(bytes) => elements.push(TagElement::ProductImage(bytes)),
        None => elements.push(TagElement::Placeholder(IMAGE_PLACEHOLDER)),
    }

    if let Some(m) = &record.model {
        elements.push(TagElement::Model(m.clone()));
    }
    if let Some(nr) = &record.artikelnummer {
        elements.push(TagElement::ArticleNumber(format!("Art.-Nr. {nr}")));
    }
    if let Some(p) = &record.preis {
        elements.push(TagElement::Price(p.clone()));
    }
    if let Some(u) = &record.uvp {
        elements.push(TagElement::Uvp(format!("UVP {u}")));
    }

    TagPlan { elements }
}

/// Fetch backdrop and product photo. Either fetch failing is logged
/// and degrades to `None`; the caller's plan substitutes placeholders.
pub fn fetch_images(record: &ProductRecord) -> (Option<Vec<u8>>, Option<Vec<u8>>) {
    let background = match crate::core::net::http_get_bytes(BACKGROUND_IMAGE_URL) {
        Ok(b) => Some(b),
        Err(e) => {
            loge!("Preisschild: Hintergrundbild fehlgeschlagen: {e}");
            None
        }
    };

    let product_image = match &record.image_url {
        Some(url) => match crate::core::net::http_get_bytes(url) {
            Ok(b) => Some(b),
            Err(e) => {
                loge!("Preisschild: Produktbild fehlgeschlagen: {e}");
                None
            }
        },
        None => None,
    };

    (background, product_image)
}

/// Convenience wrapper: fetch, plan, render.
pub fn generate(record: &ProductRecord) -> Result<Vec<u8>, Box<dyn Error>> {
    let (background, product_image) = fetch_images(record);
    render(&plan(record, background, product_image))
}

/* ---------------- Render ---------------- */

pub fn render(plan: &TagPlan) -> Result<Vec<u8>, Box<dyn Error>> {
    let (doc, page, layer) =
        PdfDocument::new("Preisschild", Mm(PAGE_W), Mm(PAGE_H), "Karte");
    let layer = doc.get_page(page).get_layer(layer);

    let regular = doc.add_builtin_font(BuiltinFont::Helvetica)?;
    let bold = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;

    // Track how many placeholders we have stacked so they don't overlap.
    let mut placeholder_slot = 0u32;

    let draw_placeholder = |text: &str, slot: &mut u32| {
        set_fill(&layer, 0.45, 0.45, 0.45);
        let y = IMAGE_TOP - 6.0 - 5.0 * *slot as f32;
        layer.use_text(text, PLACEHOLDER_PT, Mm(TEXT_X), Mm(y), &regular);
        *slot += 1;
    };

    for el in &plan.elements {
        match el {
            // A fetched image that fails to decode degrades the same
            // way a failed fetch does.
            TagElement::Background(bytes) => {
                if let Err(e) = draw_background(&layer, bytes) {
                    loge!("Preisschild: Hintergrund nicht dekodierbar: {e}");
                    draw_placeholder(BG_PLACEHOLDER, &mut placeholder_slot);
                }
            }
            TagElement::ProductImage(bytes) => {
                if let Err(e) = draw_product_image(&layer, bytes) {
                    loge!("Preisschild: Produktbild nicht dekodierbar: {e}");
                    draw_placeholder(IMAGE_PLACEHOLDER, &mut placeholder_slot);
                }
            }
            TagElement::Placeholder(text) => {
                draw_placeholder(text, &mut placeholder_slot);
            }
            TagElement::Model(text) => {
                set_fill(&layer, 0.0, 0.0, 0.0);
                layer.use_text(text, MODEL_PT, Mm(TEXT_X), Mm(MODEL_Y), &bold);
            }
            TagElement::ArticleNumber(text) => {
                set_fill(&layer, 0.2, 0.2, 0.2);
                layer.use_text(text, ARTNR_PT, Mm(TEXT_X), Mm(ARTNR_Y), &regular);
            }
            TagElement::Price(text) => {
                // Sale-price red.
                set_fill(&layer, 0.8, 0.0, 0.0);
                layer.use_text(text, PREIS_PT, Mm(TEXT_X), Mm(PREIS_Y), &bold);
            }
            TagElement::Uvp(text) => {
                set_fill(&layer, 0.5, 0.5, 0.5);
                layer.use_text(text, UVP_PT, Mm(TEXT_X), Mm(UVP_Y), &regular);
                strike_through(&layer, text, UVP_PT, TEXT_X, UVP_Y);
            }
        }
    }

    // Cut guide on top, so it stays visible over the backdrop.
    draw_cut_guide(&layer);

    Ok(doc.save_to_bytes()?)
}

fn set_fill(layer: &PdfLayerReference, r: f32, g: f32, b: f32) {
    layer.set_fill_color(Color::Rgb(Rgb::new(r, g, b, None)));
}

/// Dotted A5 border as the cut line.
fn draw_cut_guide(layer: &PdfLayerReference) {
    layer.set_outline_color(Color::Rgb(Rgb::new(0.35, 0.35, 0.35, None)));
    layer.set_outline_thickness(0.6);
    layer.set_line_dash_pattern(LineDashPattern {
        dash_1: Some(2),
        gap_1: Some(2),
        ..Default::default()
    });

    let rect = Line {
        points: vec![
            (Point::new(Mm(CARD_X), Mm(CARD_Y)), false),
            (Point::new(Mm(CARD_X + CARD_W), Mm(CARD_Y)), false),
            (Point::new(Mm(CARD_X + CARD_W), Mm(CARD_Y + CARD_H)), false),
            (Point::new(Mm(CARD_X), Mm(CARD_Y + CARD_H)), false),
        ],
        is_closed: true,
    };
    layer.add_line(rect);

    // Back to solid for anything drawn later.
    layer.set_line_dash_pattern(LineDashPattern::default());
}

/// Decode bytes via printpdf's bundled image crate (avoids version
/// coupling with the GUI's decoder).
fn decode(bytes: &[u8]) -> Result<printpdf::image_crate::DynamicImage, Box<dyn Error>> {
    let img = printpdf::image_crate::load_from_memory(bytes)?;
    // Alpha channels render as garbage in PDF image XObjects; flatten.
    Ok(printpdf::image_crate::DynamicImage::ImageRgb8(img.to_rgb8()))
}

/// printpdf places images at `dpi` (default 300): px → mm is
/// px * 25.4 / dpi. Scale relative to that to hit a target width.
fn scale_for_width(px_w: u32, target_mm: f32) -> f32 {
    let natural_mm = px_w as f32 * 25.4 / 300.0;
    if natural_mm <= 0.0 { 1.0 } else { target_mm / natural_mm }
}

fn draw_background(layer: &PdfLayerReference, bytes: &[u8]) -> Result<(), Box<dyn Error>> {
    let img = decode(bytes)?;
    let (w, h) = (img.width(), img.height());
    let sx = scale_for_width(w, CARD_W);
    let sy = {
        let natural_mm = h as f32 * 25.4 / 300.0;
        if natural_mm <= 0.0 { 1.0 } else { CARD_H / natural_mm }
    };

    Image::from_dynamic_image(&img).add_to_layer(
        layer.clone(),
        ImageTransform {
            translate_x: Some(Mm(CARD_X)),
            translate_y: Some(Mm(CARD_Y)),
            scale_x: Some(sx),
            scale_y: Some(sy),
            ..Default::default()
        },
    );
    Ok(())
}

fn draw_product_image(layer: &PdfLayerReference, bytes: &[u8]) -> Result<(), Box<dyn Error>> {
    let img = decode(bytes)?;
    let (w, h) = (img.width(), img.height());
    let scale = scale_for_width(w, IMAGE_W);
    let height_mm = h as f32 * 25.4 / 300.0 * scale;

    let x = CARD_X + (CARD_W - IMAGE_W) / 2.0;
    let y = IMAGE_TOP - height_mm;

    Image::from_dynamic_image(&img).add_to_layer(
        layer.clone(),
        ImageTransform {
            translate_x: Some(Mm(x)),
            translate_y: Some(Mm(y)),
            scale_x: Some(scale),
            scale_y: Some(scale),
            ..Default::default()
        },
    );
    Ok(())
}

/// Horizontal line through the UVP text. Helvetica has no metrics we
/// can query through the builtin-font path, so the width is estimated
/// from an average glyph advance. Good enough for a strike-through.
fn strike_through(layer: &PdfLayerReference, text: &str, pt: f32, x: f32, y: f32) {
    const PT_TO_MM: f32 = 0.3528;
    const AVG_ADVANCE: f32 = 0.52; // em fraction, Helvetica-ish

    let width_mm = text.chars().count() as f32 * pt * AVG_ADVANCE * PT_TO_MM;
    let line_y = y + pt * PT_TO_MM * 0.30;

    layer.set_outline_color(Color::Rgb(Rgb::new(0.5, 0.5, 0.5, None)));
    layer.set_outline_thickness(0.9);
    layer.add_line(Line {
        points: vec![
            (Point::new(Mm(x), Mm(line_y)), false),
            (Point::new(Mm(x + width_mm), Mm(line_y)), false),
        ],
        is_closed: false,
    });
}
