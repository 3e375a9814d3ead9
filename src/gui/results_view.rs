//! Processed data table and details breakdown.

use super::card::card;
use crate::calc::{Computed, DerivedRow};
use egui::{Color32, Grid, RichText};

/// Result text, greyed out when unavailable.
pub(super) fn value_text(value: &Computed) -> RichText {
    let text = RichText::new(value.to_string());
    if value.is_available() {
        text
    } else {
        text.color(Color32::GRAY)
    }
}

/// Draw "Table 2" with one row per fixed derivation.
pub fn show_processed_table(ui: &mut egui::Ui, rows: &[DerivedRow]) {
    card(
        ui,
        "Table 2: Processed Data",
        "Results calculated from the raw data values",
        |_| {},
        |ui| {
            Grid::new("processed_table")
                .striped(true)
                .num_columns(3)
                .min_col_width(120.0)
                .show(ui, |ui| {
                    ui.label(RichText::new("Category").strong());
                    ui.label(RichText::new("Formula").strong());
                    ui.label(RichText::new("Value").strong());
                    ui.end_row();

                    for row in rows {
                        ui.label(RichText::new(row.derivation.name()).strong());
                        ui.label(row.formula.as_str());
                        ui.label(value_text(&row.value));
                        ui.end_row();
                    }
                });
            ui.add_space(4.0);
            ui.label(
                RichText::new("Processing results based on the values from Table 1")
                    .size(11.0)
                    .color(Color32::GRAY),
            );
        },
    );
}

fn operand_text(value: Option<i64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Draw the details card restating each derivation with its operands.
pub fn show_details(ui: &mut egui::Ui, rows: &[DerivedRow]) {
    card(
        ui,
        "Details",
        "Detailed breakdown of calculated values",
        |_| {},
        |ui| {
            for (i, row) in rows.iter().enumerate() {
                if i > 0 {
                    ui.separator();
                }
                let (a_key, b_key) = row.derivation.operand_keys();
                let (a, b) = row.operands;
                ui.horizontal(|ui| {
                    let title = RichText::new(format!("{} Value:", row.derivation.name())).strong();
                    ui.add_sized([120.0, 20.0], egui::Label::new(title));
                    ui.label(value_text(&row.value).size(16.0).strong());
                    ui.label(
                        RichText::new(format!(
                            "({a_key}: {}, {b_key}: {})",
                            operand_text(a),
                            operand_text(b)
                        ))
                        .color(Color32::GRAY),
                    );
                });
            }
        },
    );
}
