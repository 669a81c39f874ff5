// src/gui/app.rs
//
// Single-window frontend: the three input fields, a trigger, the
// comparison table, and the two save actions. All work happens
// synchronously on the UI thread — a compare run blocks the window,
// which matches how this tool is actually used (one product at a time).

use std::error::Error;

use eframe::egui;
use egui_extras::{Column, TableBuilder};

use crate::csv::Delim;
use crate::data::{ComparisonTable, ProductRecord};
use crate::file;
use crate::params::{Params, DEFAULT_TAG_FILE};

use super::actions;

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Preisschild",
        options,
        Box::new(|_cc| Ok(Box::new(App::default()))),
    )?;
    Ok(())
}

#[derive(Default)]
pub struct App {
    // input fields (map 1:1 onto Params)
    pub url_text: String,
    pub artnr_text: String,
    pub ean_text: String,
    pub out_path_text: String,
    pub tag_path_text: String,

    // last successful run
    pub product: Option<ProductRecord>,
    pub table: Option<ComparisonTable>,

    // product photo preview
    pub preview: Option<egui::TextureHandle>,

    pub status: String,
}

impl App {
    pub fn params(&self) -> Params {
        let mut p = Params::new();
        p.url = self.url_text.trim().to_string();
        let artnr = self.artnr_text.trim();
        if !artnr.is_empty() {
            p.artikelnummer = Some(s!(artnr));
        }
        let ean = self.ean_text.trim();
        if !ean.is_empty() {
            p.ean = Some(s!(ean));
        }
        let out = self.out_path_text.trim();
        if !out.is_empty() {
            p.out = Some(out.into());
        }
        let tag_out = self.tag_path_text.trim();
        if !tag_out.is_empty() {
            p.tag_out = Some(tag_out.into());
        }
        p
    }

    pub fn status(&mut self, msg: impl Into<String>) {
        self.status = msg.into();
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.label(&self.status);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Preisvergleich Pelletofen");
            ui.add_space(6.0);

            egui::Grid::new("inputs").num_columns(2).show(ui, |ui| {
                ui.label("ofen.de URL");
                ui.add(
                    egui::TextEdit::singleline(&mut self.url_text)
                        .desired_width(f32::INFINITY)
                        .hint_text("https://www.ofen.de/…"),
                );
                ui.end_row();

                ui.label("Artikelnummer (optional)");
                ui.text_edit_singleline(&mut self.artnr_text);
                ui.end_row();

                ui.label("EAN (optional, 13-stellig)");
                ui.text_edit_singleline(&mut self.ean_text);
                ui.end_row();
            });

            ui.add_space(6.0);
            ui.horizontal(|ui| {
                if ui.button("Preise vergleichen").clicked() {
                    actions::compare(self, ctx);
                }
                if ui.button("CSV exportieren").clicked() {
                    actions::export(self);
                }
                if ui.button("Preisschild (PDF)").clicked() {
                    actions::price_tag(self);
                }
            });

            ui.horizontal(|ui| {
                ui.label("CSV-Pfad:");
                ui.add(
                    egui::TextEdit::singleline(&mut self.out_path_text)
                        .hint_text(file::default_export_name(Delim::Csv)),
                );
                ui.label("PDF-Pfad:");
                ui.add(
                    egui::TextEdit::singleline(&mut self.tag_path_text)
                        .hint_text(DEFAULT_TAG_FILE),
                );
            });

            ui.separator();

            if let Some(product) = self.product.clone() {
                ui.horizontal_top(|ui| {
                    egui::Grid::new("produkt").num_columns(2).show(ui, |ui| {
                        for (label, value) in product.display_fields() {
                            ui.label(label);
                            ui.label(value);
                            ui.end_row();
                        }
                    });

                    if let Some(tex) = &self.preview {
                        ui.add_space(12.0);
                        ui.add(egui::Image::new(tex).max_width(220.0));
                    }
                });
                ui.separator();
            }

            if let Some(table) = self.table.clone() {
                draw_table(ui, &table);
            }
        });
    }
}

fn draw_table(ui: &mut egui::Ui, table: &ComparisonTable) {
    let headers = ComparisonTable::headers();
    let rows = table.to_rows();

    TableBuilder::new(ui)
        .striped(true)
        .columns(Column::auto().resizable(true), headers.len())
        .header(20.0, |mut header| {
            for h in &headers {
                header.col(|ui| {
                    ui.strong(h);
                });
            }
        })
        .body(|mut body| {
            for row in &rows {
                body.row(18.0, |mut r| {
                    for cell in row {
                        r.col(|ui| {
                            ui.label(cell);
                        });
                    }
                });
            }
        });
}
