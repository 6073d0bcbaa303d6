use eframe::egui;

use crate::gui::theme::Theme;

/// Stateless spinner with the loading caption. Shown as the full substitute
/// for content while the initial load is in flight.
pub struct LoaderView;

impl LoaderView {
    pub fn show(ui: &mut egui::Ui, theme: &Theme) {
        let ctx = ui.ctx().clone();

        ui.vertical_centered(|ui| {
            ui.add_space(ui.available_height() * 0.35);
            ui.add(egui::Spinner::new().size(56.0).color(theme.accent(&ctx)));
            ui.add_space(20.0);
            ui.label(
                egui::RichText::new("Getting jobs ready for you...")
                    .size(16.0)
                    .strong()
                    .color(theme.muted(&ctx)),
            );
        });
    }
}
