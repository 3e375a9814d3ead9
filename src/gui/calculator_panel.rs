//! Custom Calculator Widget
//! Two key pickers, an operator picker and a Calculate button.

use super::card::card;
use super::results_view::value_text;
use crate::calc::{Computed, CustomQuery, Operator};
use crate::data::RecordStore;
use egui::{ComboBox, RichText};

/// Calculator selections and the last computed result.
pub struct CalculatorPanel {
    pub query: CustomQuery,
    pub result: Computed,
}

impl Default for CalculatorPanel {
    fn default() -> Self {
        Self {
            query: CustomQuery::new("", "", Operator::Add.symbol()),
            result: Computed::Unavailable,
        }
    }
}

impl CalculatorPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute the result from the current selections.
    pub fn calculate(&mut self, store: &RecordStore) {
        self.result = self.query.compute(store);
        log::debug!("{} = {}", self.query.formula(), self.result);
    }

    fn key_picker(
        ui: &mut egui::Ui,
        id: &str,
        placeholder: &str,
        selected: &mut String,
        store: &RecordStore,
    ) {
        let text = if selected.is_empty() {
            placeholder.to_string()
        } else {
            selected.clone()
        };
        ComboBox::from_id_salt(id)
            .width(180.0)
            .selected_text(text)
            .show_ui(ui, |ui| {
                for (key, value) in store.entries() {
                    if ui
                        .selectable_label(selected.as_str() == key, format!("{key} ({value})"))
                        .clicked()
                    {
                        *selected = key.to_string();
                    }
                }
            });
    }

    /// Draw the calculator card.
    pub fn show(&mut self, ui: &mut egui::Ui, store: &RecordStore) {
        let mut calculate = false;

        card(
            ui,
            "Custom Calculator",
            "Perform custom calculations on table values",
            |_| {},
            |ui| {
                ui.horizontal(|ui| {
                    Self::key_picker(
                        ui,
                        "first_value",
                        "Select first value",
                        &mut self.query.first,
                        store,
                    );

                    let op_text = self
                        .query
                        .operator
                        .parse::<Operator>()
                        .map(|op| op.label().to_string())
                        .unwrap_or_else(|_| "Operator".to_string());
                    ComboBox::from_id_salt("operator")
                        .width(150.0)
                        .selected_text(op_text)
                        .show_ui(ui, |ui| {
                            for op in Operator::ALL {
                                if ui
                                    .selectable_label(self.query.operator == op.symbol(), op.label())
                                    .clicked()
                                {
                                    self.query.operator = op.symbol().to_string();
                                }
                            }
                        });

                    Self::key_picker(
                        ui,
                        "second_value",
                        "Select second value",
                        &mut self.query.second,
                        store,
                    );
                });

                ui.add_space(10.0);
                ui.horizontal(|ui| {
                    ui.label(format!("Formula: {}", self.query.formula()));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Calculate").clicked() {
                            calculate = true;
                        }
                        ui.label(value_text(&self.result).size(16.0).strong());
                        ui.label(RichText::new("Result:").size(16.0).strong());
                    });
                });
            },
        );

        if calculate {
            self.calculate(store);
        }
    }
}
