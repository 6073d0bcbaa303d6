use eframe::egui::{
    self,
    Align,
    Layout,
    RichText,
};

use crate::{
    core::FilterSet,
    gui::theme::Theme,
};

pub enum FilterBarAction {
    Remove(String),
    Clear,
}

/// Tablet bar over the list: one chip per active filter with a remove
/// control, and a Clear control on the right. Only drawn when the set is
/// non-empty.
pub struct FilterBar;

impl FilterBar {
    pub fn show(ui: &mut egui::Ui, theme: &Theme, filters: &FilterSet) -> Option<FilterBarAction> {
        let mut action = None;
        let ctx = ui.ctx().clone();

        egui::Frame::new()
            .fill(theme.surface(&ctx))
            .corner_radius(6.0)
            .inner_margin(egui::Margin::same(14))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal_wrapped(|ui| {
                    for tag in filters.iter() {
                        egui::Frame::new()
                            .fill(theme.chip_fill(&ctx))
                            .corner_radius(4.0)
                            .inner_margin(egui::Margin::symmetric(8, 4))
                            .show(ui, |ui| {
                                ui.horizontal(|ui| {
                                    ui.spacing_mut().item_spacing.x = 6.0;
                                    ui.label(theme.heading(&ctx, tag));

                                    let remove = egui::Button::new(
                                        RichText::new("×").strong().color(theme.on_accent(&ctx)),
                                    )
                                    .fill(theme.accent(&ctx))
                                    .corner_radius(4.0);

                                    let response = ui.add(remove);
                                    if response.hovered() {
                                        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
                                    }
                                    if response.clicked() {
                                        action = Some(FilterBarAction::Remove(tag.to_string()));
                                    }
                                });
                            });
                    }

                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        let clear = ui.link(theme.heading(&ctx, "Clear"));
                        if clear.clicked() {
                            action = Some(FilterBarAction::Clear);
                        }
                    });
                });
            });

        action
    }
}
