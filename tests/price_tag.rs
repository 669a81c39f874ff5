// tests/price_tag.rs
//
// Plan-level checks (element presence/order) plus a render smoke test.
// Images are handed in as bytes, so nothing here touches the network.

use std::io::Cursor;

use preisschild::data::ProductRecord;
use preisschild::pricetag::{plan, render, TagElement, BG_PLACEHOLDER, IMAGE_PLACEHOLDER};

fn record() -> ProductRecord {
    ProductRecord {
        model: Some("Klaudia Plus 5.0".into()),
        artikelnummer: Some("1286850".into()),
        ean: Some("4008842123456".into()),
        preis: Some("899,00 €".into()),
        uvp: Some("1.249,00 €".into()),
        lieferzeit: Some("Lieferzeit 5-7 Werktage".into()),
        image_url: Some("https://www.ofen.de/media/image/klaudia.jpg".into()),
    }
}

/// Tiny in-memory PNG via printpdf's bundled image crate.
fn png_bytes() -> Vec<u8> {
    use printpdf::image_crate::{DynamicImage, ImageFormat, RgbImage};
    let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(
        4,
        4,
        printpdf::image_crate::Rgb([200, 60, 60]),
    ));
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, ImageFormat::Png).expect("encode png");
    out.into_inner()
}

fn has_uvp(elements: &[TagElement]) -> bool {
    elements.iter().any(|e| matches!(e, TagElement::Uvp(_)))
}

#[test]
fn no_list_price_means_no_strikethrough_element() {
    let mut rec = record();
    rec.uvp = None;

    let p = plan(&rec, Some(png_bytes()), Some(png_bytes()));
    assert!(!has_uvp(&p.elements));
    assert!(p.elements.iter().any(|e| matches!(e, TagElement::Price(_))));
}

#[test]
fn price_precedes_uvp() {
    let p = plan(&record(), Some(png_bytes()), Some(png_bytes()));

    let price_ix = p.elements.iter().position(|e| matches!(e, TagElement::Price(_)));
    let uvp_ix = p.elements.iter().position(|e| matches!(e, TagElement::Uvp(_)));
    assert!(price_ix.expect("price") < uvp_ix.expect("uvp"));
}

#[test]
fn background_is_bottommost_when_present() {
    let p = plan(&record(), Some(png_bytes()), Some(png_bytes()));
    assert!(matches!(p.elements[0], TagElement::Background(_)));
}

#[test]
fn missing_background_degrades_to_placeholder() {
    let p = plan(&record(), None, Some(png_bytes()));

    assert!(p
        .elements
        .iter()
        .any(|e| matches!(e, TagElement::Placeholder(t) if *t == BG_PLACEHOLDER)));
    // product image and text fields are unaffected
    assert!(p.elements.iter().any(|e| matches!(e, TagElement::ProductImage(_))));
    assert!(p.elements.iter().any(|e| matches!(e, TagElement::Model(_))));

    // and the document still renders
    let bytes = render(&p).expect("render");
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn missing_product_image_degrades_to_placeholder() {
    let p = plan(&record(), Some(png_bytes()), None);
    assert!(p
        .elements
        .iter()
        .any(|e| matches!(e, TagElement::Placeholder(t) if *t == IMAGE_PLACEHOLDER)));
}

#[test]
fn render_full_plan_produces_pdf_bytes() {
    let p = plan(&record(), Some(png_bytes()), Some(png_bytes()));
    let bytes = render(&p).expect("render");
    assert!(bytes.starts_with(b"%PDF"));
    assert!(bytes.len() > 500);
}

#[test]
fn render_with_no_images_at_all_still_succeeds() {
    let p = plan(&record(), None, None);
    let bytes = render(&p).expect("render");
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn undecodable_image_bytes_do_not_abort_the_render() {
    let p = plan(&record(), Some(vec![0xde, 0xad, 0xbe, 0xef]), Some(png_bytes()));
    let bytes = render(&p).expect("render");
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn sparse_record_renders() {
    // Only a price — everything else absent.
    let rec = ProductRecord {
        preis: Some("899,00 €".into()),
        ..Default::default()
    };
    let p = plan(&rec, None, None);

    assert!(!p.elements.iter().any(|e| matches!(e, TagElement::Model(_))));
    assert!(!has_uvp(&p.elements));
    let bytes = render(&p).expect("render");
    assert!(bytes.starts_with(b"%PDF"));
}
