//! Raw Data Table Widget
//! Lists the record store and offers the source file for download.

use super::card::card;
use crate::data::RecordStore;
use egui::{Grid, RichText};

/// Actions triggered from the raw data card
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawTableAction {
    None,
    DownloadCsv,
    OpenCsv,
}

/// Draw "Table 1" with the key/value rows.
pub fn show_raw_table(ui: &mut egui::Ui, store: &RecordStore, has_source: bool) -> RawTableAction {
    card(
        ui,
        "Table 1: Raw Data",
        "Original CSV data values",
        |ui| {
            let mut action = RawTableAction::None;
            ui.add_enabled_ui(has_source, |ui| {
                if ui.button("⬇ Download CSV").clicked() {
                    action = RawTableAction::DownloadCsv;
                }
                if ui.button("📂 Open CSV").clicked() {
                    action = RawTableAction::OpenCsv;
                }
            });
            action
        },
        |ui| {
            Grid::new("raw_table")
                .striped(true)
                .num_columns(2)
                .min_col_width(120.0)
                .show(ui, |ui| {
                    ui.label(RichText::new("Index #").strong());
                    ui.label(RichText::new("Value").strong());
                    ui.end_row();

                    for (key, value) in store.entries() {
                        ui.label(RichText::new(key).strong());
                        ui.label(value.to_string());
                        ui.end_row();
                    }
                });
        },
    )
}
