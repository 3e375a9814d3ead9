//! Framed section with a title and description.

use egui::{Color32, RichText};

/// Draw a titled card. `header_extra` is laid out right-aligned beside the title.
pub fn card<R>(
    ui: &mut egui::Ui,
    title: &str,
    description: &str,
    header_extra: impl FnOnce(&mut egui::Ui) -> R,
    body: impl FnOnce(&mut egui::Ui),
) -> R {
    egui::Frame::none()
        .fill(ui.visuals().widgets.noninteractive.bg_fill)
        .rounding(8.0)
        .inner_margin(12.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());

            let extra = ui
                .horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.label(RichText::new(title).size(16.0).strong());
                        ui.label(RichText::new(description).size(11.0).color(Color32::GRAY));
                    });
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), header_extra)
                        .inner
                })
                .inner;

            ui.add_space(8.0);
            body(ui);
            extra
        })
        .inner
}
