// src/gui/actions.rs

use eframe::egui;

use crate::data::ComparisonTable;
use crate::file;
use crate::params::DEFAULT_TAG_FILE;
use crate::runner;

use super::app::App;

pub fn compare(app: &mut App, ctx: &egui::Context) {
    let params = app.params();
    if params.url.is_empty() {
        app.status("Bitte eine ofen.de URL eingeben");
        return;
    }

    logf!("GUI: Compare url={}", params.url);
    app.status("Lade Seiten…");

    match runner::compare(&params, None) {
        Ok(result) => {
            app.preview = load_preview(ctx, &result.product.image_url);
            logf!("GUI: Compare OK rows={}", result.table.rows.len());
            app.product = Some(result.product);
            app.table = Some(result.table);
            app.status("Fertig");
        }
        Err(e) => {
            loge!("GUI: Compare failed: {e}");
            app.status(format!("Fehler: {e}"));
        }
    }
}

pub fn export(app: &mut App) {
    let Some(table) = &app.table else {
        app.status("Nichts zu exportieren — erst vergleichen");
        return;
    };

    let params = app.params();
    let result = file::resolve_out_path(
        params.out.as_deref(),
        &file::default_export_name(params.format),
    )
    .and_then(|out| {
        file::write_export(
            &out,
            &Some(ComparisonTable::headers()),
            &table.to_rows(),
            params.include_headers,
            params.format,
        )
    });

    match result {
        Ok(path) => {
            logf!("GUI: Export OK → {}", path.display());
            app.status(format!("Exportiert: {}", path.display()));
        }
        Err(e) => {
            loge!("GUI: Export failed: {e}");
            app.status(format!("Export-Fehler: {e}"));
        }
    }
}

pub fn price_tag(app: &mut App) {
    let Some(product) = app.product.clone() else {
        app.status("Kein Produkt geladen — erst vergleichen");
        return;
    };

    app.status("Erzeuge Preisschild…");

    let params = app.params();
    let result = crate::pricetag::generate(&product).and_then(|bytes| {
        let out = file::resolve_out_path(params.tag_out.as_deref(), DEFAULT_TAG_FILE)?;
        std::fs::write(&out, bytes)?;
        Ok(out)
    });

    match result {
        Ok(path) => {
            logf!("GUI: Preisschild OK → {}", path.display());
            app.status(format!("Preisschild: {}", path.display()));
        }
        Err(e) => {
            loge!("GUI: Preisschild failed: {e}");
            app.status(format!("Preisschild-Fehler: {e}"));
        }
    }
}

/// Fetch and decode the product photo for the on-screen preview.
/// Purely cosmetic; any failure just means no preview.
fn load_preview(ctx: &egui::Context, image_url: &Option<String>) -> Option<egui::TextureHandle> {
    let url = image_url.as_ref()?;
    let bytes = match crate::core::net::http_get_bytes(url) {
        Ok(b) => b,
        Err(e) => {
            logd!("GUI: Preview fetch failed: {e}");
            return None;
        }
    };
    let img = match image::load_from_memory(&bytes) {
        Ok(i) => i.to_rgba8(),
        Err(e) => {
            logd!("GUI: Preview decode failed: {e}");
            return None;
        }
    };
    let size = [img.width() as usize, img.height() as usize];
    let color = egui::ColorImage::from_rgba_unmultiplied(size, img.as_flat_samples().as_slice());
    Some(ctx.load_texture("produktbild", color, egui::TextureOptions::LINEAR))
}
