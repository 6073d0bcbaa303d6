use eframe::egui::{
    self,
    Align,
    Layout,
    RichText,
};

use crate::gui::theme::Theme;

/// Static title band above the content, plus the dark/light switch. Returns
/// the new dark-mode value when the user flips the switch.
pub struct Header;

impl Header {
    pub fn show(ctx: &egui::Context, theme: &Theme) -> Option<bool> {
        let mut toggled = None;

        egui::TopBottomPanel::top("header")
            .frame(
                egui::Frame::new()
                    .fill(theme.accent(ctx))
                    .inner_margin(egui::Margin::symmetric(24, 16)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new("Job Listings").size(22.0).strong().color(theme.on_accent(ctx)),
                    );

                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        let before = ui.ctx().theme();
                        egui::widgets::global_theme_preference_switch(ui);
                        let after = ui.ctx().theme();
                        if before != after {
                            toggled = Some(after == egui::Theme::Dark);
                        }
                    });
                });
            });

        toggled
    }
}
