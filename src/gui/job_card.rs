use eframe::egui::{
    self,
    Align,
    Align2,
    FontId,
    Layout,
    RichText,
    Sense,
};

use crate::{
    core::Job,
    gui::theme::Theme,
};

/// One listing card: logo badge, company with New!/Featured badges, position
/// title, meta line, and the clickable tag chips. Returns the tag the user
/// clicked, if any.
pub fn job_card(ui: &mut egui::Ui, theme: &Theme, job: &Job) -> Option<String> {
    let mut clicked = None;
    let ctx = ui.ctx().clone();

    let response = egui::Frame::new()
        .fill(theme.surface(&ctx))
        .corner_radius(8.0)
        .inner_margin(egui::Margin::same(18))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());

            ui.horizontal(|ui| {
                draw_logo_badge(ui, theme, job);
                ui.add_space(10.0);

                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        ui.label(theme.heading(&ctx, &job.company));
                        if job.is_new {
                            badge(ui, theme, "NEW!", theme.accent(&ctx));
                        }
                        if job.featured {
                            badge(ui, theme, "FEATURED", theme.contrast(&ctx));
                        }
                    });

                    ui.label(RichText::new(&job.position).size(17.0).strong());

                    ui.horizontal(|ui| {
                        let muted = theme.muted(&ctx);
                        ui.label(RichText::new(&job.posted_at).color(muted));
                        ui.label(RichText::new("•").color(muted));
                        ui.label(RichText::new(&job.contract).color(muted));
                        ui.label(RichText::new("•").color(muted));
                        ui.label(RichText::new(&job.location).color(muted));
                    });
                });

                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    // Right-to-left layout, so place chips in reverse to keep
                    // role, level, languages, tools display order.
                    let tags: Vec<&str> = job.tags().collect();
                    for tag in tags.into_iter().rev() {
                        let chip = egui::Button::new(theme.heading(&ctx, tag))
                            .fill(theme.chip_fill(&ctx))
                            .corner_radius(4.0);

                        let response = ui.add(chip);
                        if response.hovered() {
                            ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
                        }
                        if response.clicked() {
                            clicked = Some(tag.to_string());
                        }
                    }
                });
            });
        });

    if job.featured {
        let rect = response.response.rect;
        let edge = egui::Rect::from_min_max(rect.min, egui::pos2(rect.min.x + 5.0, rect.max.y));
        ui.painter().rect_filled(edge, 2.0, theme.accent(&ctx));
    }

    clicked
}

fn draw_logo_badge(ui: &mut egui::Ui, theme: &Theme, job: &Job) {
    let ctx = ui.ctx().clone();
    let (rect, _) = ui.allocate_exact_size(egui::vec2(48.0, 48.0), Sense::hover());

    ui.painter().circle_filled(rect.center(), 24.0, theme.accent(&ctx));
    ui.painter().text(
        rect.center(),
        Align2::CENTER_CENTER,
        job.logo_initial(),
        FontId::proportional(22.0),
        theme.on_accent(&ctx),
    );
}

fn badge(ui: &mut egui::Ui, theme: &Theme, text: &str, fill: egui::Color32) {
    let ctx = ui.ctx().clone();
    egui::Frame::new()
        .fill(fill)
        .corner_radius(9.0)
        .inner_margin(egui::Margin::symmetric(7, 2))
        .show(ui, |ui| {
            ui.label(RichText::new(text).size(11.0).strong().color(theme.on_accent(&ctx)));
        });
}
