use eframe::egui::{
    self,
    RichText,
};
use egui::{
    epaint::Shadow,
    style::{
        Selection,
        WidgetVisuals,
        Widgets,
    },
    Color32,
    Stroke,
    Visuals,
};

#[derive(Clone)]
pub struct Theme {
    dark: ThemeDetails,
    light: ThemeDetails,
}

impl Default for Theme {
    fn default() -> Self {
        Self::cyan()
    }
}

impl Theme {
    pub fn cyan() -> Self {
        Theme { dark: ThemeDetails::cyan_dark(), light: ThemeDetails::cyan_light() }
    }

    fn details(&self, ctx: &egui::Context) -> &ThemeDetails {
        match ctx.theme() {
            egui::Theme::Dark => &self.dark,
            egui::Theme::Light => &self.light,
        }
    }

    pub fn heading(&self, ctx: &egui::Context, content: &str) -> RichText {
        RichText::new(content).color(self.details(ctx).accent).strong()
    }

    pub fn accent(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).accent
    }

    /// Background for tag chips and filter tablets.
    pub fn chip_fill(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).accent_soft
    }

    /// Near-black cyan used for the Featured badge and chip hover.
    pub fn contrast(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).contrast
    }

    pub fn surface(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).surface
    }

    pub fn muted(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).muted
    }

    pub fn error(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).error
    }

    pub fn on_accent(&self, ctx: &egui::Context) -> Color32 {
        self.details(ctx).background
    }
}

/// Palette from the job-board design: light grayish cyan page, white cards,
/// desaturated dark cyan accents.
#[derive(Clone)]
pub struct ThemeDetails {
    background: Color32,
    surface: Color32,
    surface_raised: Color32,
    foreground: Color32,
    muted: Color32,
    accent: Color32,
    accent_soft: Color32,
    contrast: Color32,
    error: Color32,
}

impl ThemeDetails {
    fn cyan_light() -> Self {
        Self {
            background: Color32::from_rgb(239, 250, 250),
            surface: Color32::from_rgb(255, 255, 255),
            surface_raised: Color32::from_rgb(246, 252, 252),
            foreground: Color32::from_rgb(44, 58, 58),
            muted: Color32::from_rgb(123, 142, 142),
            accent: Color32::from_rgb(92, 165, 165),
            accent_soft: Color32::from_rgb(238, 246, 246),
            contrast: Color32::from_rgb(44, 58, 58),
            error: Color32::from_rgb(200, 70, 70),
        }
    }

    fn cyan_dark() -> Self {
        Self {
            background: Color32::from_rgb(20, 26, 26),
            surface: Color32::from_rgb(30, 39, 39),
            surface_raised: Color32::from_rgb(38, 49, 49),
            foreground: Color32::from_rgb(226, 240, 240),
            muted: Color32::from_rgb(128, 150, 150),
            accent: Color32::from_rgb(104, 186, 186),
            accent_soft: Color32::from_rgb(42, 62, 62),
            contrast: Color32::from_rgb(210, 232, 232),
            error: Color32::from_rgb(255, 110, 110),
        }
    }
}

pub fn set_theme(ctx: &egui::Context, theme: Theme) {
    set_theme_variant(ctx, &theme.dark, true);
    set_theme_variant(ctx, &theme.light, false);
}

fn set_theme_variant(ctx: &egui::Context, theme: &ThemeDetails, is_dark: bool) {
    let (default, variant) = match is_dark {
        true => (Visuals::dark(), egui::Theme::Dark),
        false => (Visuals::light(), egui::Theme::Light),
    };

    ctx.set_visuals_of(
        variant,
        Visuals {
            dark_mode: is_dark,
            widgets: Widgets {
                noninteractive: WidgetVisuals {
                    bg_fill: theme.surface,
                    weak_bg_fill: theme.surface_raised,
                    bg_stroke: Stroke {
                        color: theme.accent_soft,
                        ..default.widgets.noninteractive.bg_stroke
                    },
                    fg_stroke: Stroke {
                        color: theme.foreground,
                        ..default.widgets.noninteractive.fg_stroke
                    },
                    ..default.widgets.noninteractive
                },
                inactive: WidgetVisuals {
                    bg_fill: theme.accent_soft,
                    weak_bg_fill: theme.surface_raised,
                    bg_stroke: Stroke {
                        color: theme.accent_soft,
                        ..default.widgets.inactive.bg_stroke
                    },
                    fg_stroke: Stroke {
                        color: theme.foreground,
                        ..default.widgets.inactive.fg_stroke
                    },
                    ..default.widgets.inactive
                },
                hovered: WidgetVisuals {
                    bg_fill: theme.accent,
                    weak_bg_fill: theme.surface_raised,
                    bg_stroke: Stroke { color: theme.accent, ..default.widgets.hovered.bg_stroke },
                    fg_stroke: Stroke {
                        color: theme.background,
                        ..default.widgets.hovered.fg_stroke
                    },
                    ..default.widgets.hovered
                },
                active: WidgetVisuals {
                    bg_fill: theme.contrast,
                    weak_bg_fill: theme.surface,
                    bg_stroke: Stroke { color: theme.accent, ..default.widgets.active.bg_stroke },
                    fg_stroke: Stroke {
                        color: theme.background,
                        ..default.widgets.active.fg_stroke
                    },
                    ..default.widgets.active
                },
                open: WidgetVisuals {
                    bg_fill: theme.surface_raised,
                    weak_bg_fill: theme.surface_raised,
                    bg_stroke: Stroke { color: theme.accent, ..default.widgets.open.bg_stroke },
                    fg_stroke: Stroke { color: theme.foreground, ..default.widgets.open.fg_stroke },
                    ..default.widgets.open
                },
            },
            selection: Selection {
                bg_fill: theme.accent_soft,
                stroke: Stroke { color: theme.foreground, ..default.selection.stroke },
            },
            hyperlink_color: theme.accent,
            faint_bg_color: theme.background,
            extreme_bg_color: theme.background,
            code_bg_color: theme.surface_raised,
            error_fg_color: theme.error,
            warn_fg_color: theme.accent,
            window_shadow: Shadow { color: theme.background, ..default.window_shadow },
            window_fill: theme.surface,
            window_stroke: Stroke { color: theme.accent_soft, ..default.window_stroke },
            panel_fill: theme.background,
            popup_shadow: Shadow { color: theme.background, ..default.popup_shadow },
            ..default
        },
    );
}
